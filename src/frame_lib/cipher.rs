/// Size of the unit processed by the cipher, in bytes.
pub const BLOCK_LEN: usize = 16;

/// Single-block cipher used by the frame pipeline.
///
/// The pipeline hands the cipher exactly one 16-byte block and expects a
/// deterministic 16-byte block back: no padding, no chaining, no
/// authentication. Key material is fixed at construction time; the frame
/// layer never sees it.
pub trait BlockCipher {
    /// Encrypt one block.
    fn encrypt_block(&self, block: [u8; BLOCK_LEN]) -> [u8; BLOCK_LEN];

    /// Decrypt one block.
    fn decrypt_block(&self, block: [u8; BLOCK_LEN]) -> [u8; BLOCK_LEN];
}
