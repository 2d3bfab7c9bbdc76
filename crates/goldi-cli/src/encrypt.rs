//! Public-key encryption command.

use goldi_crypto::dhies;
use goldi_crypto::edwards::AffinePoint;

use crate::textfile::{self, CRYPTOGRAM_HEADER, PUBLIC_KEY_HEADER};

pub fn run(
    public_key: &str,
    input: &str,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let key_text = textfile::read_body(public_key, PUBLIC_KEY_HEADER)?;
    let v: AffinePoint = key_text.parse()?;

    let message = textfile::read_input(input)?;
    let cryptogram = dhies::encrypt(&message, &v)?;
    textfile::write_labeled(output, CRYPTOGRAM_HEADER, &cryptogram.to_string())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_encrypt_then_decrypt_files() {
        let dir = std::env::temp_dir();
        let pub_path = dir.join("test_encrypt_pub.txt");
        let msg_path = dir.join("test_encrypt_msg.bin");
        let cg_path = dir.join("test_encrypt_cg.txt");

        crate::keygen::run("file test pw", None, Some(pub_path.to_str().unwrap())).unwrap();
        fs::write(&msg_path, b"file roundtrip payload").unwrap();

        run(
            pub_path.to_str().unwrap(),
            msg_path.to_str().unwrap(),
            Some(cg_path.to_str().unwrap()),
        )
        .unwrap();

        let cg_text = fs::read_to_string(&cg_path).unwrap();
        assert!(cg_text.starts_with(CRYPTOGRAM_HEADER));

        let out_path = dir.join("test_encrypt_out.bin");
        crate::decrypt::run(
            "file test pw",
            cg_path.to_str().unwrap(),
            Some(out_path.to_str().unwrap()),
        )
        .unwrap();
        assert_eq!(fs::read(&out_path).unwrap(), b"file roundtrip payload");

        for p in [&pub_path, &msg_path, &cg_path, &out_path] {
            let _ = fs::remove_file(p);
        }
    }

    #[test]
    fn test_encrypt_missing_key_file() {
        assert!(run("/nonexistent_goldi/pub.txt", "-", None).is_err());
    }
}
