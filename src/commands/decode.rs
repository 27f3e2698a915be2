use anyhow::{Context, Result};
use std::io::Write;

use crate::describe;
use crate::git::SubmoduleSource;

/// Handle decode mode
/// Print which submodules the fingerprint reports as moved
pub fn handle<S: SubmoduleSource, W: Write>(
    source: &S,
    output: &mut W,
    fingerprint: &str,
) -> Result<()> {
    // Only the paths of the current listing label the segments
    let submodules = source.submodules()?;
    let paths = submodules.iter().map(|submodule| submodule.path.as_str());

    let report = describe::decode(fingerprint, paths)
        .with_context(|| format!("Failed to decode fingerprint {:?}", fingerprint))?;

    report.write_to(output)?;
    Ok(())
}
