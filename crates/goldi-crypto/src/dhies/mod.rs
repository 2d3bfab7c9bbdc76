//! DHIES-style authenticated public-key encryption.
//!
//! Encryption draws a fresh cofactor-cleared scalar k, computes the shared
//! point W = k·V and the ephemeral point Z = k·G, then derives a key split
//! (ka ‖ ke) from the x-coordinate of W. The message is XORed with a "PKE"
//! keystream and authenticated with a "PKA" tag over the plaintext.
//! Decryption recomputes W as s·Z and refuses to release the plaintext when
//! the tag does not match.

use std::fmt;
use std::str::FromStr;

use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use goldi_bignum::BigNum;
use goldi_types::CryptoError;

use crate::edwards::{self, AffinePoint};
use crate::keypair;
use crate::kmac::kmac_xof256;

/// Authentication tag length: 448 bits.
pub const TAG_BYTES: usize = 56;

/// An encrypted message: ephemeral point Z, ciphertext c, and tag t.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cryptogram {
    z: AffinePoint,
    c: Vec<u8>,
    t: [u8; TAG_BYTES],
}

impl Cryptogram {
    pub fn new(z: AffinePoint, c: Vec<u8>, t: [u8; TAG_BYTES]) -> Self {
        Self { z, c, t }
    }

    pub fn ephemeral_point(&self) -> &AffinePoint {
        &self.z
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.c
    }

    pub fn tag(&self) -> &[u8; TAG_BYTES] {
        &self.t
    }
}

/// Encrypt a message under the recipient's public key V.
pub fn encrypt(message: &[u8], public_key: &AffinePoint) -> Result<Cryptogram, CryptoError> {
    let k = edwards::clear_cofactor(&BigNum::random_bits(448)?)?;
    let w = public_key.scalar_mul(&k)?;
    let z = AffinePoint::generator().scalar_mul(&k)?;

    let (mut ka, mut ke) = derive_session_keys(&w);
    let c = xor_keystream(message, &ke);
    let t = auth_tag(&ka, message);
    ka.zeroize();
    ke.zeroize();
    Ok(Cryptogram::new(z, c, t))
}

/// Decrypt a cryptogram with the passphrase that owns the recipient key.
///
/// Returns `Err(AuthTagMismatch)` without exposing any plaintext when the
/// tag does not verify.
pub fn decrypt(cryptogram: &Cryptogram, passphrase: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let s = keypair::derive_private_scalar(passphrase)?;
    let w = cryptogram.z.scalar_mul(&s)?;

    let (mut ka, mut ke) = derive_session_keys(&w);
    let message = xor_keystream(&cryptogram.c, &ke);
    let expected = auth_tag(&ka, &message);
    ka.zeroize();
    ke.zeroize();

    if expected.as_slice().ct_eq(cryptogram.t.as_slice()).into() {
        Ok(message)
    } else {
        Err(CryptoError::AuthTagMismatch)
    }
}

/// (ka ‖ ke) = KMACXOF256(W.x, "", 896, "PK"), split into two 56-byte keys.
fn derive_session_keys(w: &AffinePoint) -> (Vec<u8>, Vec<u8>) {
    let keys = kmac_xof256(&w.x_bytes(), b"", 2 * TAG_BYTES * 8, "PK");
    (keys[..TAG_BYTES].to_vec(), keys[TAG_BYTES..].to_vec())
}

/// XOR data with a "PKE" keystream of matching length.
fn xor_keystream(data: &[u8], ke: &[u8]) -> Vec<u8> {
    let stream = kmac_xof256(ke, b"", data.len() * 8, "PKE");
    data.iter().zip(stream.iter()).map(|(d, s)| d ^ s).collect()
}

/// t = KMACXOF256(ka, message, 448, "PKA").
fn auth_tag(ka: &[u8], message: &[u8]) -> [u8; TAG_BYTES] {
    let t = kmac_xof256(ka, message, TAG_BYTES * 8, "PKA");
    let mut tag = [0u8; TAG_BYTES];
    tag.copy_from_slice(&t);
    tag
}

impl fmt::Display for Cryptogram {
    /// Four lines: Z.x, Z.y, hex ciphertext, hex tag.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.z,
            goldi_utils::hex::encode(&self.c),
            goldi_utils::hex::encode(&self.t)
        )
    }
}

impl FromStr for Cryptogram {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 4 {
            return Err(CryptoError::DecodeMalformed);
        }

        let x: BigNum = lines[0].parse()?;
        let y: BigNum = lines[1].parse()?;
        let z = AffinePoint::from_coords(&x, &y)?;
        let c = goldi_utils::hex::decode(lines[2])?;
        let t_bytes = goldi_utils::hex::decode(lines[3])?;
        let t: [u8; TAG_BYTES] = t_bytes
            .try_into()
            .map_err(|_| CryptoError::DecodeMalformed)?;
        Ok(Self::new(z, c, t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypair::KeyPair;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let message = b"attack at dawn";
        let cg = encrypt(message, kp.public_key()).unwrap();
        assert_eq!(decrypt(&cg, b"secret").unwrap(), message);
    }

    #[test]
    fn test_empty_message() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"", kp.public_key()).unwrap();
        assert!(cg.ciphertext().is_empty());
        assert_eq!(decrypt(&cg, b"secret").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_wrong_passphrase_rejected() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"message", kp.public_key()).unwrap();
        assert_eq!(
            decrypt(&cg, b"wrong").unwrap_err(),
            CryptoError::AuthTagMismatch
        );
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"message", kp.public_key()).unwrap();
        let mut c = cg.ciphertext().to_vec();
        c[0] ^= 0x01;
        let tampered = Cryptogram::new(cg.ephemeral_point().clone(), c, *cg.tag());
        assert_eq!(
            decrypt(&tampered, b"secret").unwrap_err(),
            CryptoError::AuthTagMismatch
        );
    }

    #[test]
    fn test_tampered_tag_rejected() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"message", kp.public_key()).unwrap();
        let mut t = *cg.tag();
        t[TAG_BYTES - 1] ^= 0x80;
        let tampered = Cryptogram::new(cg.ephemeral_point().clone(), cg.ciphertext().to_vec(), t);
        assert_eq!(
            decrypt(&tampered, b"secret").unwrap_err(),
            CryptoError::AuthTagMismatch
        );
    }

    #[test]
    fn test_fresh_randomness_per_encryption() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let a = encrypt(b"same message", kp.public_key()).unwrap();
        let b = encrypt(b"same message", kp.public_key()).unwrap();
        assert_ne!(a.ephemeral_point(), b.ephemeral_point());
        assert_ne!(a.ciphertext(), b.ciphertext());
    }

    #[test]
    fn test_text_roundtrip() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"serialize me", kp.public_key()).unwrap();
        let parsed: Cryptogram = cg.to_string().parse().unwrap();
        assert_eq!(parsed, cg);
        assert_eq!(decrypt(&parsed, b"secret").unwrap(), b"serialize me");
    }

    #[test]
    fn test_parse_rejects_short_tag() {
        let kp = KeyPair::from_passphrase(b"secret").unwrap();
        let cg = encrypt(b"x", kp.public_key()).unwrap();
        let mut text = cg.to_string();
        text.truncate(text.len() - 2);
        assert_eq!(
            text.parse::<Cryptogram>().unwrap_err(),
            CryptoError::DecodeMalformed
        );
    }
}
