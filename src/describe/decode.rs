use std::fmt;
use std::io::{self, Write};

use super::HASH_PREFIX_LEN;
use crate::bits::{BitBuffer, BASE64_SYMBOL_BITS, HEX_DIGIT_BITS};
use crate::error::Error;

/// What a fingerprint says about one submodule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    Unchanged,
    /// Moved to a commit starting with these hex digits
    Moved(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: String,
    pub change: Change,
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.change {
            Change::Unchanged => write!(f, "{}: no changes", self.path),
            Change::Moved(prefix) => write!(f, "{}: {}", self.path, prefix),
        }
    }
}

/// Decoded fingerprint, one entry per submodule path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub entries: Vec<Entry>,
    /// Zero bits beyond the last segment and its padding
    pub leftover_bits: usize,
}

impl Report {
    pub fn write_to<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for entry in &self.entries {
            writeln!(output, "{}", entry)?;
        }
        writeln!(output, "{} leftover bits", self.leftover_bits)
    }
}

/// Read a fingerprint against submodule paths listed in the same order as
/// when it was produced
pub fn decode<I, P>(fingerprint: &str, paths: I) -> Result<Report, Error>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    let mut bits = BitBuffer::from_base64(fingerprint)?;
    let mut entries = Vec::new();

    for path in paths {
        let path = path.as_ref();
        let change = if bits.pop()? {
            if bits.pop()? {
                return Err(Error::UnsupportedExtension {
                    path: path.to_string(),
                });
            }
            let hash = bits.pop_leading(HASH_PREFIX_LEN * HEX_DIGIT_BITS)?;
            Change::Moved(hash.render_hex())
        } else {
            Change::Unchanged
        };
        entries.push(Entry {
            path: path.to_string(),
            change,
        });
    }

    if !bits.is_clear() {
        return Err(Error::NonZeroPadding {
            remaining: bits.len(),
        });
    }

    let padding_bits = bits.len() % BASE64_SYMBOL_BITS;
    let leftover_bits = bits.len() - padding_bits;
    tracing::debug!(
        "Decoded {} submodule(s), {} padding bit(s)",
        entries.len(),
        padding_bits
    );

    Ok(Report {
        entries,
        leftover_bits,
    })
}
