//! Modular arithmetic: canonical reduction, exponentiation, and inversion.

use crate::bignum::BigNum;
use goldi_types::CryptoError;

impl BigNum {
    /// Canonical modular reduction: self mod modulus, always in [0, modulus).
    ///
    /// The modulus must be positive.
    pub fn mod_reduce(&self, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        if modulus.is_negative() {
            return Err(CryptoError::InvalidArg);
        }
        let (_, r) = self.div_rem(modulus)?;
        if r.is_negative() {
            Ok(r.add(modulus))
        } else {
            Ok(r)
        }
    }

    /// Modular addition: (self + other) mod modulus.
    pub fn mod_add(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        self.add(other).mod_reduce(modulus)
    }

    /// Modular subtraction: (self - other) mod modulus.
    pub fn mod_sub(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        self.sub(other).mod_reduce(modulus)
    }

    /// Modular multiplication: (self * other) mod modulus.
    pub fn mod_mul(&self, other: &BigNum, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        self.mul(other).mod_reduce(modulus)
    }

    /// Modular exponentiation: self^exp mod modulus, by square-and-multiply.
    ///
    /// The exponent must be non-negative.
    pub fn mod_exp(&self, exp: &BigNum, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        if exp.is_negative() {
            return Err(CryptoError::BnNegativeExponent);
        }

        let mut result = BigNum::one().mod_reduce(modulus)?;
        let mut base = self.mod_reduce(modulus)?;
        for i in 0..exp.bit_len() {
            if exp.get_bit(i) == 1 {
                result = result.mod_mul(&base, modulus)?;
            }
            base = base.mod_mul(&base, modulus)?;
        }
        Ok(result)
    }

    /// Modular inverse: self^(-1) mod modulus, by the extended Euclidean
    /// algorithm.
    ///
    /// Returns `Err(BnNoInverse)` if gcd(self, modulus) != 1.
    pub fn mod_inv(&self, modulus: &BigNum) -> Result<BigNum, CryptoError> {
        if modulus.is_zero() || modulus.is_one() || modulus.is_negative() {
            return Err(CryptoError::InvalidArg);
        }

        // Track old_r = old_s * self (mod modulus); only old_s is needed.
        let mut old_r = self.mod_reduce(modulus)?;
        if old_r.is_zero() {
            return Err(CryptoError::BnNoInverse);
        }
        let mut r = modulus.clone();
        let mut old_s = BigNum::one();
        let mut s = BigNum::zero();

        while !r.is_zero() {
            let (quotient, remainder) = old_r.div_rem(&r)?;
            old_r = r;
            r = remainder;

            let new_s = old_s.sub(&quotient.mul(&s));
            old_s = s;
            s = new_s;
        }

        if !old_r.is_one() {
            return Err(CryptoError::BnNoInverse);
        }
        old_s.mod_reduce(modulus)
    }
}
