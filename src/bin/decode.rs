use clap::Parser;
use clap::error::ErrorKind;

use std::io::{self, Write};
use std::process::ExitCode;

use thiserror::Error;

use hexframe::{Aes128, decode_frame, pad_to_block};

/// Recover the secret carried by a 34-character hex frame.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Transport frame: 32 hex data characters followed by 2 checksum
    /// characters.
    frame: String,

    /// Cipher key, padded or truncated to the 16 bytes AES-128 expects.
    key: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Frame(#[from] hexframe::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
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

    if let Err(e) = run(cli) {
        match e {
            CliError::Frame(hexframe::Error::FrameLength { .. }) => eprintln!("parameter error"),
            CliError::Frame(hexframe::Error::ChecksumMismatch { .. }) => {
                eprintln!("checksum error")
            }
            other => eprintln!("error: {other}"),
        }
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> Result<(), CliError> {
    let cipher = Aes128::new(&pad_to_block(cli.key.as_bytes()));
    let block = decode_frame(cli.frame.as_bytes(), &cipher)?;

    // all 16 recovered bytes go out, trailing zero padding included
    io::stdout().write_all(&block)?;
    Ok(())
}
