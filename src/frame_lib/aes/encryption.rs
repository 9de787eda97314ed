use super::constants::SBOX;
use super::util::{add_round_key, dbl};

#[inline(always)]
pub(crate) fn encrypt_block(plaintext: &[u8; 16], round_keys: &[[u8; 16]; 11]) -> [u8; 16] {
    let mut state = *plaintext;

    add_round_key(&mut state, &round_keys[0]);

    for round_key in &round_keys[1..10] {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_key);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, &round_keys[10]);

    state
}

#[inline(always)]
fn sub_bytes(state: &mut [u8; 16]) {
    for byte in state {
        *byte = SBOX[*byte as usize];
    }
}

#[inline(always)]
fn shift_rows(state: &mut [u8; 16]) {
    let s = *state;
    for row in 0..4 {
        for col in 0..4 {
            let old_idx = ((col + row) & 3) * 4 + row;
            state[col * 4 + row] = s[old_idx];
        }
    }
}

// optimisation by https://crypto.stackexchange.com/a/71206
#[inline(always)]
fn mix_columns(state: &mut [u8; 16]) {
    for col in 0..4 {
        let i = col * 4;
        let (a, b, c, d) = (state[i], state[i + 1], state[i + 2], state[i + 3]);
        state[i] = dbl(a ^ b) ^ b ^ c ^ d; /* 2a + 3b + c + d */
        state[i + 1] = dbl(b ^ c) ^ c ^ d ^ a; /* 2b + 3c + d + a */
        state[i + 2] = dbl(c ^ d) ^ d ^ a ^ b; /* 2c + 3d + a + b */
        state[i + 3] = dbl(d ^ a) ^ a ^ b ^ c; /* 2d + 3a + b + c */
    }
}

#[cfg(test)]
mod tests {
    use super::super::key::expand_key;
    use super::*;

    #[test]
    fn encrypt_block_128() {
        // test case from:
        // https://csrc.nist.gov/CSRC/media/Projects/Cryptographic-Standards-and-Guidelines/documents/examples/AES_Core128.pdf
        let key: [u8; 16] = [
            0x2B, 0x7E, 0x15, 0x16, 0x28, 0xAE, 0xD2, 0xA6, //
            0xAB, 0xF7, 0x15, 0x88, 0x09, 0xCF, 0x4F, 0x3C, //
        ];

        let plaintext: [u8; 16] = [
            0x6B, 0xC1, 0xBE, 0xE2, 0x2E, 0x40, 0x9F, 0x96, //
            0xE9, 0x3D, 0x7E, 0x11, 0x73, 0x93, 0x17, 0x2A, //
        ];

        let expected: [u8; 16] = [
            0x3A, 0xD7, 0x7B, 0xB4, 0x0D, 0x7A, 0x36, 0x60, //
            0xA8, 0x9E, 0xCA, 0xF3, 0x24, 0x66, 0xEF, 0x97, //
        ];

        let round_keys = expand_key(&key);
        assert_eq!(
            encrypt_block(&plaintext, &round_keys),
            expected,
            "incorrect AES-128 encryption of block"
        );
    }
}
