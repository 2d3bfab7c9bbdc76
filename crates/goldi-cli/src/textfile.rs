//! Text file helpers shared by the subcommands.
//!
//! Serialized keys, cryptograms, and signatures travel as labeled text
//! files: a header line naming the content, then the decimal/hex body.
//! Reading tolerates a missing header so piped bodies also parse.

use std::error::Error;
use std::fs;
use std::io::{self, Read};

pub const PRIVATE_KEY_HEADER: &str = "Private Key:";
pub const PUBLIC_KEY_HEADER: &str = "Public Key (point):";
pub const CRYPTOGRAM_HEADER: &str = "Cryptogram:";
pub const SIGNATURE_HEADER: &str = "Signature:";

/// Read a labeled text file, stripping the header line if present.
pub fn read_body(path: &str, header: &str) -> Result<String, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix(header) {
        Some(rest) => rest.trim_start(),
        None => trimmed,
    };
    Ok(body.to_string())
}

/// Write a body under its header, or print both to stdout when no path is
/// given.
pub fn write_labeled(
    path: Option<&str>,
    header: &str,
    body: &str,
) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            fs::write(path, format!("{header}\n{body}\n"))?;
        }
        None => println!("{header}\n{body}"),
    }
    Ok(())
}

/// Read raw input bytes from a file, or stdin when the path is "-".
pub fn read_input(path: &str) -> Result<Vec<u8>, Box<dyn Error>> {
    if path == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read(path)?)
    }
}
