//! Signature verification command.

use goldi_crypto::edwards::AffinePoint;
use goldi_crypto::schnorr::{self, Signature};
use goldi_types::CryptoError;

use crate::textfile::{self, PUBLIC_KEY_HEADER, SIGNATURE_HEADER};

pub fn run(
    public_key: &str,
    input: &str,
    signature: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let key_text = textfile::read_body(public_key, PUBLIC_KEY_HEADER)?;
    let v: AffinePoint = key_text.parse()?;

    let sig_text = textfile::read_body(signature, SIGNATURE_HEADER)?;
    let sig: Signature = sig_text.parse()?;

    let message = textfile::read_input(input)?;
    if schnorr::verify(&sig, &message, &v)? {
        println!("Signature accepted");
        Ok(())
    } else {
        Err(CryptoError::SignatureMismatch.into())
    }
}
