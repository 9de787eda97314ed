mod aes;
mod checksum;
mod cipher;
mod error;
mod frame;
mod hex;

pub use aes::Aes128;
pub use cipher::{BLOCK_LEN, BlockCipher};
pub use error::{Error, Result};
pub use frame::{FRAME_LEN, compose, decode_frame, encode_block, pad_to_block, parse};
