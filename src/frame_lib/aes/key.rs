use super::constants::{RCON, SBOX};

/// AES-128 key schedule. Expands the 16-byte key into the 11 round keys of
/// FIPS-197 section 5.2 (the extra key is the initial AddRoundKey, which is
/// the original key itself).
pub(crate) fn expand_key(key: &[u8; 16]) -> [[u8; 16]; 11] {
    // w holds the 44 four-byte words of the schedule; the first 4 are the key
    let mut w = [[0u8; 4]; 44];
    for (i, &byte) in key.iter().enumerate() {
        w[i / 4][i % 4] = byte;
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            // rot_word, sub_word, and the round constant
            temp = [
                SBOX[temp[1] as usize] ^ RCON[i / 4],
                SBOX[temp[2] as usize],
                SBOX[temp[3] as usize],
                SBOX[temp[0] as usize],
            ];
        }
        w[i] = xor_words(&temp, &w[i - 4]);
    }

    // regroup words into column-major 16-byte round keys
    let mut round_keys = [[0u8; 16]; 11];
    for (round, words) in w.chunks_exact(4).enumerate() {
        for (col, word) in words.iter().enumerate() {
            round_keys[round][col * 4..col * 4 + 4].copy_from_slice(word);
        }
    }

    round_keys
}

#[inline(always)]
fn xor_words(a: &[u8; 4], b: &[u8; 4]) -> [u8; 4] {
    [a[0] ^ b[0], a[1] ^ b[1], a[2] ^ b[2], a[3] ^ b[3]]
}
