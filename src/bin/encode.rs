use clap::Parser;
use clap::error::ErrorKind;

use std::io::{self, Write};
use std::process::ExitCode;

use hexframe::{Aes128, encode_block, pad_to_block};

/// Encrypt a secret and print it as a 34-character hex frame.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Plaintext to protect. At most 16 bytes; shorter input is zero-padded,
    /// longer input is silently truncated.
    plaintext: String,

    /// Cipher key, padded or truncated to the 16 bytes AES-128 expects.
    key: String,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(_) => {
            eprintln!("parameter error");
            return ExitCode::from(1);
        }
    };

    let cipher = Aes128::new(&pad_to_block(cli.key.as_bytes()));
    let frame = encode_block(&pad_to_block(cli.plaintext.as_bytes()), &cipher);

    // the frame goes out as-is, with no trailing newline
    if let Err(e) = io::stdout().write_all(&frame) {
        eprintln!("error: {e}");
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}
