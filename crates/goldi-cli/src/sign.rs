//! Message signing command.

use goldi_crypto::keypair::KeyPair;
use goldi_crypto::schnorr;

use crate::textfile::{self, SIGNATURE_HEADER};

pub fn run(
    passphrase: &str,
    input: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kp = KeyPair::from_passphrase(passphrase.as_bytes())?;
    let message = textfile::read_input(input)?;

    let signature = schnorr::sign(&message, &kp)?;
    textfile::write_labeled(output, SIGNATURE_HEADER, &signature.to_string())?;
    Ok(())
}
