mod frame_lib;

pub use frame_lib::{
    Aes128, BLOCK_LEN, BlockCipher, Error, FRAME_LEN, Result, compose, decode_frame, encode_block,
    pad_to_block, parse,
};
