//! Cryptogram decryption command.

use std::fs;
use std::io::{self, Write};

use goldi_crypto::dhies::{self, Cryptogram};

use crate::textfile::{self, CRYPTOGRAM_HEADER};

pub fn run(
    passphrase: &str,
    input: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let body = textfile::read_body(input, CRYPTOGRAM_HEADER)?;
    let cryptogram: Cryptogram = body.parse()?;

    let message = dhies::decrypt(&cryptogram, passphrase.as_bytes())?;
    match output {
        Some(path) => fs::write(path, &message)?,
        None => io::stdout().write_all(&message)?,
    }
    Ok(())
}
