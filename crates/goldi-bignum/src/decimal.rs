//! Decimal text conversion for BigNum (`Display` / `FromStr`).
//!
//! The serialized key, cryptogram, and signature formats carry integers as
//! decimal text, one value per line.

use std::fmt;
use std::str::FromStr;

use crate::bignum::BigNum;
use goldi_types::CryptoError;

/// Largest power of ten that fits in a u64.
const CHUNK_BASE: u64 = 10_000_000_000_000_000_000;
const CHUNK_DIGITS: usize = 19;

impl fmt::Display for BigNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("0");
        }

        let mut magnitude = self.clone();
        magnitude.set_negative(false);
        let base = BigNum::from_u64(CHUNK_BASE);

        // Peel off 19 decimal digits per division, least significant first.
        let mut chunks: Vec<u64> = Vec::new();
        while !magnitude.is_zero() {
            let (q, r) = magnitude.div_rem(&base).map_err(|_| fmt::Error)?;
            chunks.push(r.limbs()[0]);
            magnitude = q;
        }

        if self.is_negative() {
            f.write_str("-")?;
        }
        let mut chunks = chunks.into_iter().rev();
        if let Some(head) = chunks.next() {
            write!(f, "{head}")?;
        }
        for chunk in chunks {
            write!(f, "{chunk:019}")?;
        }
        Ok(())
    }
}

impl FromStr for BigNum {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (negative, digits) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CryptoError::DecodeInvalidDecimal);
        }

        let mut result = BigNum::zero();
        let bytes = digits.as_bytes();
        let mut pos = 0;
        while pos < bytes.len() {
            let take = (bytes.len() - pos).min(CHUNK_DIGITS);
            let mut chunk: u64 = 0;
            let mut scale: u64 = 1;
            for &b in &bytes[pos..pos + take] {
                chunk = chunk * 10 + (b - b'0') as u64;
                scale = scale.saturating_mul(10);
            }
            let scale = if take == CHUNK_DIGITS {
                CHUNK_BASE
            } else {
                scale
            };
            result = result
                .mul(&BigNum::from_u64(scale))
                .add(&BigNum::from_u64(chunk));
            pos += take;
        }

        result.set_negative(negative);
        Ok(result)
    }
}
