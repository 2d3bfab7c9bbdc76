//! Key pair generation command.

use goldi_crypto::keypair::KeyPair;

use crate::textfile::{self, PRIVATE_KEY_HEADER, PUBLIC_KEY_HEADER};

pub fn run(
    passphrase: &str,
    private_out: Option<&str>,
    public_out: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let kp = KeyPair::from_passphrase(passphrase.as_bytes())?;

    textfile::write_labeled(
        private_out,
        PRIVATE_KEY_HEADER,
        &kp.private_scalar().to_string(),
    )?;
    textfile::write_labeled(public_out, PUBLIC_KEY_HEADER, &kp.public_key().to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_keygen_writes_both_files() {
        let dir = std::env::temp_dir();
        let priv_path = dir.join("test_keygen_priv.txt");
        let pub_path = dir.join("test_keygen_pub.txt");

        run(
            "test passphrase",
            Some(priv_path.to_str().unwrap()),
            Some(pub_path.to_str().unwrap()),
        )
        .unwrap();

        let priv_text = fs::read_to_string(&priv_path).unwrap();
        assert!(priv_text.starts_with(PRIVATE_KEY_HEADER));
        let pub_text = fs::read_to_string(&pub_path).unwrap();
        assert!(pub_text.starts_with(PUBLIC_KEY_HEADER));
        // Header plus the two coordinate lines.
        assert_eq!(pub_text.trim().lines().count(), 3);

        let _ = fs::remove_file(&priv_path);
        let _ = fs::remove_file(&pub_path);
    }
}
