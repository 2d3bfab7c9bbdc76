//! Passphrase-derived key pairs.
//!
//! The private scalar is derived deterministically from a passphrase through
//! the keyed XOF under the "SK" domain, multiplied by the cofactor, and
//! reduced mod the subgroup order. The same passphrase always yields the same
//! key pair.

use goldi_bignum::BigNum;
use goldi_types::CryptoError;

use crate::edwards::{self, AffinePoint};
use crate::kmac::kmac_xof256;

/// A private scalar and its public point V = s·G.
pub struct KeyPair {
    s: BigNum,
    v: AffinePoint,
}

impl KeyPair {
    /// Derive a key pair from a passphrase.
    pub fn from_passphrase(passphrase: &[u8]) -> Result<Self, CryptoError> {
        let s = derive_private_scalar(passphrase)?;
        let v = AffinePoint::generator().scalar_mul(&s)?;
        Ok(Self { s, v })
    }

    pub fn private_scalar(&self) -> &BigNum {
        &self.s
    }

    pub fn public_key(&self) -> &AffinePoint {
        &self.v
    }
}

/// s = 4·KMACXOF256(passphrase, "", 448, "SK") mod r.
pub(crate) fn derive_private_scalar(passphrase: &[u8]) -> Result<BigNum, CryptoError> {
    let raw = kmac_xof256(passphrase, b"", 448, "SK");
    edwards::clear_cofactor(&BigNum::from_bytes_be(&raw))
}
