//! Deterministic Schnorr signatures.
//!
//! The nonce is derived from the private scalar and the message through the
//! keyed XOF under the "N" domain, so signing needs no fresh randomness and
//! the same (key, message) pair always produces the same signature. The
//! challenge h is the "T"-domain XOF of the commitment's x-coordinate and the
//! message, interpreted as a non-negative integer and kept unreduced; the
//! verifier compares challenges exactly.

use std::fmt;
use std::str::FromStr;

use goldi_bignum::BigNum;
use goldi_types::CryptoError;

use crate::edwards::{self, AffinePoint};
use crate::keypair::KeyPair;
use crate::kmac::kmac_xof256;

/// A signature (h, z): the challenge and the response scalar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Signature {
    h: BigNum,
    z: BigNum,
}

impl Signature {
    pub fn new(h: BigNum, z: BigNum) -> Self {
        Self { h, z }
    }

    pub fn h(&self) -> &BigNum {
        &self.h
    }

    pub fn z(&self) -> &BigNum {
        &self.z
    }
}

/// Sign a message with the key pair's private scalar.
pub fn sign(message: &[u8], key_pair: &KeyPair) -> Result<Signature, CryptoError> {
    let s = key_pair.private_scalar();

    let nonce_raw = kmac_xof256(&s.to_bytes_be(), message, 448, "N");
    let k = edwards::clear_cofactor(&BigNum::from_bytes_be(&nonce_raw))?;
    let u = AffinePoint::generator().scalar_mul(&k)?;

    let h = challenge(&u, message);
    let z = k.sub(&h.mul(s)).mod_reduce(edwards::subgroup_order())?;
    Ok(Signature::new(h, z))
}

/// Verify a signature against a public key.
///
/// Returns `Ok(false)` for a well-formed signature that does not match;
/// errors are reserved for arithmetic failures.
pub fn verify(
    signature: &Signature,
    message: &[u8],
    public_key: &AffinePoint,
) -> Result<bool, CryptoError> {
    if signature.h.is_negative() || signature.z.is_negative() {
        return Ok(false);
    }

    // U' = z·G + h·V; for a valid signature U' equals the signer's U.
    let zg = AffinePoint::generator().scalar_mul(&signature.z)?;
    let hv = public_key.scalar_mul(&signature.h)?;
    let u = zg.add(&hv)?;

    Ok(challenge(&u, message) == signature.h)
}

/// h = KMACXOF256(U.x, message, 448, "T") as a non-negative integer.
fn challenge(u: &AffinePoint, message: &[u8]) -> BigNum {
    BigNum::from_bytes_be(&kmac_xof256(&u.x_bytes(), message, 448, "T"))
}

impl fmt::Display for Signature {
    /// Two decimal lines: h then z.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.h, self.z)
    }
}

impl FromStr for Signature {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 2 {
            return Err(CryptoError::DecodeMalformed);
        }
        Ok(Self::new(lines[0].parse()?, lines[1].parse()?))
    }
}
