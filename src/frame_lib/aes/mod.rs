//! Reference single-block cipher: AES-128, encrypt and decrypt of exactly
//! one 16-byte block. No modes of operation, no padding, no randomness.

mod constants;
mod decryption;
mod encryption;
mod key;
mod util;

use super::cipher::{BLOCK_LEN, BlockCipher};

/// AES-128 behind the [BlockCipher] trait.
///
/// The key schedule runs once at construction; the 11 round keys live in a
/// fixed-size array on the instance.
pub struct Aes128 {
    round_keys: [[u8; 16]; 11],
}

impl Aes128 {
    /// Expand `key` into round keys and store them in the returned instance.
    pub fn new(key: &[u8; 16]) -> Self {
        Self {
            round_keys: key::expand_key(key),
        }
    }
}

impl BlockCipher for Aes128 {
    fn encrypt_block(&self, block: [u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        encryption::encrypt_block(&block, &self.round_keys)
    }

    fn decrypt_block(&self, block: [u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
        decryption::decrypt_block(&block, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cipher_round_trip() {
        let cipher = Aes128::new(b"0123456789ABCDEF");
        let block = *b"any sixteen byte";

        let encrypted = cipher.encrypt_block(block);
        assert_ne!(encrypted, block);
        assert_eq!(cipher.decrypt_block(encrypted), block);
    }
}
