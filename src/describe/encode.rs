use super::HASH_PREFIX_LEN;
use crate::bits::BitBuffer;
use crate::error::Error;
use crate::git::{Submodule, SubmoduleState};

/// Encode the submodules into a bit stream, one segment per submodule
pub fn describe(submodules: &[Submodule]) -> Result<BitBuffer, Error> {
    ensure_sorted(submodules)?;

    let mut bits = BitBuffer::new();
    for submodule in submodules {
        match submodule.state {
            SubmoduleState::Recorded => bits.push(false),
            SubmoduleState::Different => {
                let prefix = submodule
                    .hash
                    .get(..HASH_PREFIX_LEN)
                    .ok_or_else(|| Error::ShortHash {
                        path: submodule.path.clone(),
                        hash: submodule.hash.clone(),
                    })?;
                bits.push(true);
                // Extension flag, always clear
                bits.push(false);
                bits.append_hex(prefix)?;
            }
            state @ (SubmoduleState::Missing | SubmoduleState::Conflict) => {
                return Err(Error::UnencodableState {
                    path: submodule.path.clone(),
                    state,
                });
            }
        }
    }

    tracing::debug!(
        "Encoded {} submodule(s) into {} bit(s)",
        submodules.len(),
        bits.len()
    );
    Ok(bits)
}

/// Encode the submodules and render the fingerprint text
pub fn fingerprint(submodules: &[Submodule]) -> Result<String, Error> {
    Ok(describe(submodules)?.render_base64())
}

fn ensure_sorted(submodules: &[Submodule]) -> Result<(), Error> {
    match submodules
        .windows(2)
        .find(|pair| pair[0].path > pair[1].path)
    {
        Some(pair) => Err(Error::Unsorted {
            previous: pair[0].path.clone(),
            next: pair[1].path.clone(),
        }),
        None => Ok(()),
    }
}
