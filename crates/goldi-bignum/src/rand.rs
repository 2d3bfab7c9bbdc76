//! Random big number generation using OS randomness.

use crate::bignum::BigNum;
use goldi_types::CryptoError;

impl BigNum {
    /// Generate a uniformly random BigNum in [0, 2^bits).
    ///
    /// Unlike a fixed-width key generator, the most significant bit is left
    /// free so the result is uniform over the full range.
    pub fn random_bits(bits: usize) -> Result<BigNum, CryptoError> {
        if bits == 0 {
            return Ok(BigNum::zero());
        }

        let num_bytes = bits.div_ceil(8);
        let mut buf = vec![0u8; num_bytes];
        getrandom::getrandom(&mut buf).map_err(|_| CryptoError::BnRandGenFail)?;

        // Mask excess bits in the most significant byte.
        let excess = num_bytes * 8 - bits;
        if excess > 0 {
            buf[0] &= 0xFF >> excess;
        }

        Ok(BigNum::from_bytes_be(&buf))
    }
}
