use thiserror::Error;

/// Frame Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Frame Error type.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to parse an input that is not exactly 34 characters long.
    #[error("invalid frame length: {len} characters (expected 34)")]
    FrameLength { len: usize },

    /// Checksum carried by the frame did not match the sum computed over its
    /// data characters. The frame was corrupted in transport.
    #[error("checksum mismatch: frame carries {received:#04x}, computed {computed:#04x}")]
    ChecksumMismatch { received: u8, computed: u8 },
}
