//! adler32-rs command-line interface
//!
//! Prints the Adler-32 checksum of each file named on the command line, or
//! of standard input when no files are given. Output is one line per input:
//! the checksum as eight hex digits, two spaces, and the input name.

use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use adler32_rs::Adler32;

/// Checksum a reader in fixed-size chunks through one streaming accumulator.
fn checksum_reader<R: Read>(mut reader: R) -> io::Result<u32> {
    let mut state = Adler32::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        state.write(&buf[..n]);
    }
    Ok(state.checksum())
}

fn main() -> ExitCode {
    let paths: Vec<String> = std::env::args().skip(1).collect();

    if paths.is_empty() {
        return match checksum_reader(io::stdin().lock()) {
            Ok(sum) => {
                println!("{sum:08x}  -");
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("adler32_rs: <stdin>: {err}");
                ExitCode::FAILURE
            }
        };
    }

    let mut status = ExitCode::SUCCESS;
    for path in &paths {
        match File::open(path).and_then(checksum_reader) {
            Ok(sum) => println!("{sum:08x}  {path}"),
            Err(err) => {
                eprintln!("adler32_rs: {path}: {err}");
                status = ExitCode::FAILURE;
            }
        }
    }
    status
}
