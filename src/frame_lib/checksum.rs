//! Additive 8-bit checksum over ASCII characters.
//!
//! The sum runs over the *textual* hex characters of a frame, not over the
//! bytes they encode. It detects accidental corruption only; it is not an
//! authentication tag and edits with cancelling contributions pass it.

use super::error::{Error, Result};

/// Sum the ASCII values of `chars`, wrapping modulo 256.
pub(crate) fn compute(chars: &[u8]) -> u8 {
    chars.iter().fold(0u8, |sum, &ch| sum.wrapping_add(ch))
}

/// Compare the checksum carried by a frame against the computed one.
pub(crate) fn verify(received: u8, computed: u8) -> Result<()> {
    if received != computed {
        return Err(Error::ChecksumMismatch { received, computed });
    }
    Ok(())
}
