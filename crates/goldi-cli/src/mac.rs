//! Keyed authentication tag command.

use goldi_crypto::kmac::kmac_xof256;

use crate::textfile;

pub fn run(passphrase: &str, file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = textfile::read_input(file)?;
    let tag = kmac_xof256(passphrase.as_bytes(), &data, 512, "T");

    let hex = goldi_utils::hex::encode(&tag);
    if file == "-" {
        println!("KMACXOF256-MAC(stdin)= {hex}");
    } else {
        println!("KMACXOF256-MAC({file})= {hex}");
    }
    Ok(())
}
