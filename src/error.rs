use std::fmt;

use crate::git::SubmoduleState;

/// Failures of the fingerprint codec and the submodule listing parser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A character outside the alphabet of the given radix
    InvalidSymbol { radix: u32, symbol: char },
    /// Fewer bits left than a pop asked for
    Underflow { requested: usize, available: usize },
    /// The reserved extension bit was set for a submodule
    UnsupportedExtension { path: String },
    /// Bits left after the last submodule were not all zero
    NonZeroPadding { remaining: usize },
    /// Submodules were not listed in path order
    Unsorted { previous: String, next: String },
    /// A submodule state that a fingerprint cannot carry
    UnencodableState { path: String, state: SubmoduleState },
    /// A content hash too short to truncate
    ShortHash { path: String, hash: String },
    /// A `git submodule status` line of unexpected shape
    MalformedStatusLine(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSymbol { radix, symbol } => {
                write!(f, "Invalid base-{} symbol: {:?}", radix, symbol)
            }
            Error::Underflow {
                requested,
                available,
            } => write!(
                f,
                "Fingerprint too short: needed {} more bit(s), {} left",
                requested, available
            ),
            Error::UnsupportedExtension { path } => {
                write!(f, "Extension bit set for {}, extensions are not supported", path)
            }
            Error::NonZeroPadding { remaining } => {
                write!(f, "Non-zero bits among {} trailing bit(s)", remaining)
            }
            Error::Unsorted { previous, next } => {
                write!(f, "Submodules out of order: {:?} listed before {:?}", previous, next)
            }
            Error::UnencodableState { path, state } => {
                write!(f, "Submodule {} is {}, resolve it first", path, state)
            }
            Error::ShortHash { path, hash } => {
                write!(f, "Hash {:?} of submodule {} is too short", hash, path)
            }
            Error::MalformedStatusLine(line) => {
                write!(f, "Unexpected git submodule status line: {:?}", line)
            }
        }
    }
}

impl std::error::Error for Error {}
