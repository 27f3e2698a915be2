use std::fmt;

use crate::error::Error;

/// Length of a full SHA-1 commit hash in hex
pub const SHA1_HEX_LEN: usize = 40;

/// Where a submodule's checkout stands relative to the recorded commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmoduleState {
    /// Checked out at the recorded commit
    Recorded,
    /// Checked out at another commit
    Different,
    /// Not initialized
    Missing,
    /// Unresolved merge conflict
    Conflict,
}

impl SubmoduleState {
    /// Map the status character of `git submodule status`
    fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '+' => Some(SubmoduleState::Different),
            '-' => Some(SubmoduleState::Missing),
            'U' => Some(SubmoduleState::Conflict),
            _ => None,
        }
    }
}

impl fmt::Display for SubmoduleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SubmoduleState::Recorded => "recorded",
            SubmoduleState::Different => "different",
            SubmoduleState::Missing => "missing",
            SubmoduleState::Conflict => "conflict",
        };
        f.write_str(name)
    }
}

/// One submodule as listed by git
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submodule {
    pub state: SubmoduleState,
    /// Hex commit hash currently checked out (or recorded, when missing)
    pub hash: String,
    pub path: String,
}

impl Submodule {
    pub fn new(state: SubmoduleState, hash: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            state,
            hash: hash.into(),
            path: path.into(),
        }
    }
}

/// Parse one line of `git submodule status`
///
/// Format: `<marker><sha1> <path>[ (<describe>)]`, where the marker is a
/// space for recorded submodules.
pub fn parse_status_line(line: &str) -> Result<Submodule, Error> {
    let malformed = || Error::MalformedStatusLine(line.to_string());

    let (head, rest) = line
        .trim_start()
        .split_once(char::is_whitespace)
        .ok_or_else(malformed)?;

    let (state, hash) = match head.len() {
        SHA1_HEX_LEN => (SubmoduleState::Recorded, head),
        len if len == SHA1_HEX_LEN + 1 => {
            let mut chars = head.chars();
            let marker = chars.next().ok_or_else(malformed)?;
            let state = SubmoduleState::from_marker(marker).ok_or_else(malformed)?;
            (state, chars.as_str())
        }
        _ => return Err(malformed()),
    };

    let mut raw = [0u8; SHA1_HEX_LEN / 2];
    hex::decode_to_slice(hash, &mut raw).map_err(|_| malformed())?;

    let mut path = rest.trim();
    if path.ends_with(')') {
        if let Some((stripped, _describe)) = path.rsplit_once(" (") {
            path = stripped.trim_end();
        }
    }
    if path.is_empty() {
        return Err(malformed());
    }

    Ok(Submodule::new(state, hash, path))
}
