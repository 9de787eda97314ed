use super::checksum;
use super::cipher::{BLOCK_LEN, BlockCipher};
use super::error::{Error, Result};
use super::hex;

/// Size of a transport frame, in ASCII characters.
pub const FRAME_LEN: usize = 34;

/// Characters of a frame that carry block data (the rest is the checksum).
const DATA_LEN: usize = 32;

/// Build a frame from one (already encrypted) block.
///
/// Output is formatted as `block (32 hex chars) || checksum (2 hex chars)`,
/// where the checksum is the wrapping ASCII sum of the 32 data characters.
pub fn compose(block: &[u8; BLOCK_LEN]) -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    for (i, &byte) in block.iter().enumerate() {
        let [hi, lo] = hex::encode_byte(byte);
        frame[i * 2] = hi;
        frame[i * 2 + 1] = lo;
    }

    let sum = checksum::compute(&frame[..DATA_LEN]);
    let [hi, lo] = hex::encode_byte(sum);
    frame[DATA_LEN] = hi;
    frame[DATA_LEN + 1] = lo;

    frame
}

/// Parse a frame back into its (still encrypted) block.
///
/// Returns [FrameLength](Error::FrameLength) unless the input is exactly 34
/// characters, and [ChecksumMismatch](Error::ChecksumMismatch) when the
/// checksum field does not match the sum over the data characters. The
/// checksum runs over the raw characters before any hex decoding. Characters
/// outside the hex alphabet are not rejected; they decode through the
/// deterministic nibble mapping of the wire format.
pub fn parse(input: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    if input.len() != FRAME_LEN {
        return Err(Error::FrameLength { len: input.len() });
    }

    let (data, checksum_field) = input.split_at(DATA_LEN);
    let computed = checksum::compute(data);
    let received = hex::decode_pair(checksum_field[0], checksum_field[1]);
    checksum::verify(received, computed)?;

    let mut block = [0u8; BLOCK_LEN];
    for (i, pair) in data.chunks_exact(2).enumerate() {
        block[i] = hex::decode_pair(pair[0], pair[1]);
    }
    Ok(block)
}

/// Encrypt a plaintext block and wrap it into a transport frame.
///
/// ## Examples
/// ```
/// # fn main() -> hexframe::Result<()> {
/// use hexframe::{Aes128, decode_frame, encode_block, pad_to_block};
///
/// let cipher = Aes128::new(&pad_to_block(b"sixteen byte key"));
/// let block = pad_to_block(b"HELLO!");
///
/// let frame = encode_block(&block, &cipher);
/// assert_eq!(frame.len(), 34);
/// assert_eq!(decode_frame(&frame, &cipher)?, block);
/// # Ok(())
/// # }
/// ```
pub fn encode_block(block: &[u8; BLOCK_LEN], cipher: &impl BlockCipher) -> [u8; FRAME_LEN] {
    compose(&cipher.encrypt_block(*block))
}

/// Parse a transport frame and decrypt the recovered block.
///
/// Validation happens strictly before decryption: length first, checksum
/// second, and only then does the ciphertext reach the cipher.
pub fn decode_frame(input: &[u8], cipher: &impl BlockCipher) -> Result<[u8; BLOCK_LEN]> {
    Ok(cipher.decrypt_block(parse(input)?))
}

/// Copy up to 16 bytes of `bytes` into a zero-initialized block.
///
/// Shorter input is zero-padded; longer input is silently truncated. Both
/// tools use this for the plaintext and the key argument, so a recovered
/// plaintext that was shorter than 16 bytes comes back with trailing zeros.
pub fn pad_to_block(bytes: &[u8]) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    let n = bytes.len().min(BLOCK_LEN);
    block[..n].copy_from_slice(&bytes[..n]);
    block
}
