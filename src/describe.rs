//! Submodule fingerprints
//!
//! Each submodule, in path order, contributes one segment to a bit stream:
//! `0` when it sits at the recorded commit, or `1`, a reserved `0` extension
//! bit and the first 9 hex digits (36 bits) of its commit hash when it moved.
//! The stream is zero-padded and written in the fingerprint alphabet.

mod decode;
mod encode;

pub use decode::{decode, Change, Entry, Report};
pub use encode::{describe, fingerprint};

/// Hex digits of a commit hash kept in a fingerprint
pub const HASH_PREFIX_LEN: usize = 9;
