//! Hash command: 512-bit unkeyed KMACXOF256 digest.

use goldi_crypto::kmac::kmac_xof256;

use crate::textfile;

pub fn run(file: &str) -> Result<(), Box<dyn std::error::Error>> {
    let data = textfile::read_input(file)?;
    let digest = kmac_xof256(b"", &data, 512, "D");

    let hex = goldi_utils::hex::encode(&digest);
    if file == "-" {
        println!("KMACXOF256(stdin)= {hex}");
    } else {
        println!("KMACXOF256({file})= {hex}");
    }
    Ok(())
}
