//! Basic arithmetic: signed add/sub/mul and division with remainder.

use crate::bignum::{BigNum, DoubleLimb, Limb, LIMB_BITS};
use goldi_types::CryptoError;

impl BigNum {
    /// Add: self + other.
    pub fn add(&self, other: &BigNum) -> BigNum {
        if self.is_negative() == other.is_negative() {
            let mut result = BigNum::from_limbs(add_magnitude(self.limbs(), other.limbs()));
            result.set_negative(self.is_negative());
            result
        } else if self.is_negative() {
            // (-a) + b = b - a
            sub_magnitude_signed(other.limbs(), self.limbs())
        } else {
            // a + (-b) = a - b
            sub_magnitude_signed(self.limbs(), other.limbs())
        }
    }

    /// Subtract: self - other.
    pub fn sub(&self, other: &BigNum) -> BigNum {
        if self.is_negative() != other.is_negative() {
            let mut result = BigNum::from_limbs(add_magnitude(self.limbs(), other.limbs()));
            result.set_negative(self.is_negative());
            result
        } else if self.is_negative() {
            // (-a) - (-b) = b - a
            sub_magnitude_signed(other.limbs(), self.limbs())
        } else {
            sub_magnitude_signed(self.limbs(), other.limbs())
        }
    }

    /// Multiply: self * other.
    pub fn mul(&self, other: &BigNum) -> BigNum {
        let mut result = BigNum::from_limbs(mul_magnitude(self.limbs(), other.limbs()));
        result.set_negative(self.is_negative() != other.is_negative());
        result
    }

    /// Truncated division with remainder: self = q·divisor + rem with
    /// |rem| < |divisor|, sign(q) = sign(self)·sign(divisor), and
    /// sign(rem) = sign(self).
    pub fn div_rem(&self, divisor: &BigNum) -> Result<(BigNum, BigNum), CryptoError> {
        if divisor.is_zero() {
            return Err(CryptoError::BnDivisionByZero);
        }

        let (q_mag, r_mag) = div_rem_magnitude(self.limbs(), divisor.limbs());
        let mut q = BigNum::from_limbs(q_mag);
        q.set_negative(self.is_negative() != divisor.is_negative());
        let mut r = BigNum::from_limbs(r_mag);
        r.set_negative(self.is_negative());
        Ok((q, r))
    }
}

/// Compare two little-endian magnitude slices.
pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> std::cmp::Ordering {
    let max_len = a.len().max(b.len());
    for i in (0..max_len).rev() {
        let av = if i < a.len() { a[i] } else { 0 };
        let bv = if i < b.len() { b[i] } else { 0 };
        if av != bv {
            return av.cmp(&bv);
        }
    }
    std::cmp::Ordering::Equal
}

/// Add two magnitudes.
fn add_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    let max_len = a.len().max(b.len());
    let mut limbs = vec![0u64; max_len + 1];
    let mut carry: DoubleLimb = 0;

    for (i, limb) in limbs.iter_mut().enumerate().take(max_len) {
        let av = if i < a.len() { a[i] } else { 0 };
        let bv = if i < b.len() { b[i] } else { 0 };
        let sum = av as DoubleLimb + bv as DoubleLimb + carry;
        *limb = sum as Limb;
        carry = sum >> LIMB_BITS;
    }
    limbs[max_len] = carry as Limb;
    limbs
}

/// Subtract magnitudes, returning a signed result: a - b.
fn sub_magnitude_signed(a: &[Limb], b: &[Limb]) -> BigNum {
    let (larger, smaller, negative) = match cmp_limbs(a, b) {
        std::cmp::Ordering::Less => (b, a, true),
        std::cmp::Ordering::Equal => return BigNum::zero(),
        std::cmp::Ordering::Greater => (a, b, false),
    };

    let mut limbs = vec![0u64; larger.len()];
    let mut borrow: Limb = 0;
    for i in 0..larger.len() {
        let sv = if i < smaller.len() { smaller[i] } else { 0 };
        let (d1, b1) = larger[i].overflowing_sub(sv);
        let (d2, b2) = d1.overflowing_sub(borrow);
        limbs[i] = d2;
        borrow = (b1 as Limb) + (b2 as Limb);
    }

    let mut bn = BigNum::from_limbs(limbs);
    bn.set_negative(negative);
    bn
}

/// Schoolbook multiplication of magnitudes.
fn mul_magnitude(a: &[Limb], b: &[Limb]) -> Vec<Limb> {
    if a.iter().all(|&l| l == 0) || b.iter().all(|&l| l == 0) {
        return vec![0];
    }

    let mut limbs = vec![0u64; a.len() + b.len()];
    for i in 0..a.len() {
        let mut carry: DoubleLimb = 0;
        for j in 0..b.len() {
            let t = a[i] as DoubleLimb * b[j] as DoubleLimb + limbs[i + j] as DoubleLimb + carry;
            limbs[i + j] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        limbs[i + b.len()] = carry as Limb;
    }
    limbs
}

/// Strip leading zero limbs (keeping at least one limb).
fn trimmed(x: &[Limb]) -> Vec<Limb> {
    let mut len = x.len();
    while len > 1 && x[len - 1] == 0 {
        len -= 1;
    }
    x[..len].to_vec()
}

/// Shift a magnitude left by `shift` bits (0 <= shift < 64), appending one limb.
fn shl_bits(x: &[Limb], shift: usize) -> Vec<Limb> {
    let mut out = vec![0u64; x.len() + 1];
    if shift == 0 {
        out[..x.len()].copy_from_slice(x);
        return out;
    }
    let mut carry: Limb = 0;
    for (i, &limb) in x.iter().enumerate() {
        out[i] = (limb << shift) | carry;
        carry = limb >> (LIMB_BITS - shift);
    }
    out[x.len()] = carry;
    out
}

/// Shift a magnitude right by `shift` bits (0 <= shift < 64).
fn shr_bits(x: &[Limb], shift: usize) -> Vec<Limb> {
    if shift == 0 {
        return x.to_vec();
    }
    let mut out = vec![0u64; x.len()];
    let mut carry: Limb = 0;
    for i in (0..x.len()).rev() {
        out[i] = (x[i] >> shift) | carry;
        carry = x[i] << (LIMB_BITS - shift);
    }
    out
}

/// Divide magnitudes using Knuth's Algorithm D, returning (quotient, remainder).
///
/// The divisor must be non-zero (checked by the caller).
fn div_rem_magnitude(a: &[Limb], b: &[Limb]) -> (Vec<Limb>, Vec<Limb>) {
    let a = trimmed(a);
    let b = trimmed(b);

    if cmp_limbs(&a, &b) == std::cmp::Ordering::Less {
        return (vec![0], a);
    }

    // Single-limb divisor: simple limb-by-limb long division.
    if b.len() == 1 {
        let d = b[0] as DoubleLimb;
        let mut q = vec![0u64; a.len()];
        let mut rem: DoubleLimb = 0;
        for i in (0..a.len()).rev() {
            let cur = (rem << LIMB_BITS) | a[i] as DoubleLimb;
            q[i] = (cur / d) as Limb;
            rem = cur % d;
        }
        return (q, vec![rem as Limb]);
    }

    // D1: normalize so the divisor's top limb has its high bit set.
    let shift = b[b.len() - 1].leading_zeros() as usize;
    let mut u = shl_bits(&a, shift); // a.len() + 1 limbs
    let v = trimmed(&shl_bits(&b, shift)); // same length as b
    let n = v.len();
    let m = u.len() - 1 - n;

    let v_hi = v[n - 1] as DoubleLimb;
    let v_next = v[n - 2] as DoubleLimb;
    let mut q = vec![0u64; m + 1];

    // D2-D7: compute one quotient limb per iteration, most significant first.
    for j in (0..=m).rev() {
        // D3: estimate the quotient limb, correcting it at most twice.
        let num = ((u[j + n] as DoubleLimb) << LIMB_BITS) | u[j + n - 1] as DoubleLimb;
        let mut qhat = num / v_hi;
        let mut rhat = num % v_hi;
        while (qhat >> LIMB_BITS) != 0
            || qhat * v_next > ((rhat << LIMB_BITS) | u[j + n - 2] as DoubleLimb)
        {
            qhat -= 1;
            rhat += v_hi;
            if (rhat >> LIMB_BITS) != 0 {
                break;
            }
        }

        // D4: u[j..=j+n] -= qhat * v.
        let mut qv = vec![0u64; n + 1];
        let mut carry: DoubleLimb = 0;
        for i in 0..n {
            let t = qhat * v[i] as DoubleLimb + carry;
            qv[i] = t as Limb;
            carry = t >> LIMB_BITS;
        }
        qv[n] = carry as Limb;

        let mut borrow: Limb = 0;
        for i in 0..=n {
            let (d1, b1) = u[j + i].overflowing_sub(qv[i]);
            let (d2, b2) = d1.overflowing_sub(borrow);
            u[j + i] = d2;
            borrow = (b1 as Limb) + (b2 as Limb);
        }

        // D5-D6: the estimate was one too large; add the divisor back.
        if borrow != 0 {
            qhat -= 1;
            let mut carry2: DoubleLimb = 0;
            for i in 0..n {
                let t = u[j + i] as DoubleLimb + v[i] as DoubleLimb + carry2;
                u[j + i] = t as Limb;
                carry2 = t >> LIMB_BITS;
            }
            u[j + n] = u[j + n].wrapping_add(carry2 as Limb);
        }

        q[j] = qhat as Limb;
    }

    // D8: denormalize the remainder.
    let rem = shr_bits(&u[..n], shift);
    (q, rem)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add() {
        let a = BigNum::from_u64(100);
        let b = BigNum::from_u64(200);
        assert_eq!(a.add(&b), BigNum::from_u64(300));
    }

    #[test]
    fn test_add_carry_chain() {
        let a = BigNum::from_bytes_be(&[0xFF; 16]);
        let sum = a.add(&BigNum::one());
        let mut expected = vec![0u8; 17];
        expected[0] = 1;
        assert_eq!(sum.to_bytes_be(), expected);
    }

    #[test]
    fn test_sub_signed() {
        let a = BigNum::from_u64(100);
        let b = BigNum::from_u64(300);
        let d = a.sub(&b);
        assert!(d.is_negative());
        assert_eq!(d.cmp_abs(&BigNum::from_u64(200)), std::cmp::Ordering::Equal);
        // -200 + 300 = 100
        assert_eq!(d.add(&b), a);
    }

    #[test]
    fn test_mul() {
        let a = BigNum::from_u64(12345);
        let b = BigNum::from_u64(67890);
        assert_eq!(a.mul(&b), BigNum::from_u64(12345u64 * 67890));
    }

    #[test]
    fn test_mul_sign() {
        let mut a = BigNum::from_u64(6);
        a.set_negative(true);
        let b = BigNum::from_u64(7);
        let p = a.mul(&b);
        assert!(p.is_negative());
        assert_eq!(p.cmp_abs(&BigNum::from_u64(42)), std::cmp::Ordering::Equal);
        assert!(!a.mul(&a).is_negative());
    }

    #[test]
    fn test_div_rem_small() {
        let a = BigNum::from_u64(100);
        let b = BigNum::from_u64(7);
        let (q, r) = a.div_rem(&b).unwrap();
        assert_eq!(q, BigNum::from_u64(14));
        assert_eq!(r, BigNum::from_u64(2));
    }

    #[test]
    fn test_div_by_zero() {
        assert!(BigNum::from_u64(100).div_rem(&BigNum::zero()).is_err());
    }

    #[test]
    fn test_div_smaller_than_divisor() {
        let a = BigNum::from_u64(5);
        let b = BigNum::from_u64(100);
        let (q, r) = a.div_rem(&b).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, a);
    }

    /// Reconstruction check q·b + r == a over mixed widths, including the
    /// 896-bit by 448-bit shape used by the field reduction.
    #[test]
    fn test_div_rem_reconstruction() {
        let patterns: &[(usize, usize)] = &[(9, 8), (32, 16), (56, 56), (112, 56), (112, 7)];
        for &(alen, blen) in patterns {
            let a_bytes: Vec<u8> = (0..alen).map(|i| (i as u8).wrapping_mul(37).wrapping_add(1)).collect();
            let b_bytes: Vec<u8> = (0..blen).map(|i| (i as u8).wrapping_mul(73).wrapping_add(5)).collect();
            let a = BigNum::from_bytes_be(&a_bytes);
            let b = BigNum::from_bytes_be(&b_bytes);
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(q.mul(&b).add(&r), a, "reconstruction failed for {alen}x{blen}");
            assert_eq!(r.cmp_abs(&b), std::cmp::Ordering::Less);
        }
    }

    /// Exercise the D5-D6 add-back path: dividends of the form
    /// (B^n - 1) / (B^(n/2) + small) tend to produce overestimated qhat.
    #[test]
    fn test_div_rem_hard_cases() {
        let a = BigNum::from_bytes_be(&[0xFF; 48]);
        for low in 1u64..40 {
            let mut b_bytes = vec![0u8; 25];
            b_bytes[0] = 1;
            b_bytes[24] = low as u8;
            let b = BigNum::from_bytes_be(&b_bytes);
            let (q, r) = a.div_rem(&b).unwrap();
            assert_eq!(q.mul(&b).add(&r), a);
            assert_eq!(r.cmp_abs(&b), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn test_div_rem_signs() {
        let a = BigNum::from_u64(7);
        let mut neg_a = a.clone();
        neg_a.set_negative(true);
        let b = BigNum::from_u64(3);

        // Truncated division: -7 = -2*3 - 1
        let (q, r) = neg_a.div_rem(&b).unwrap();
        assert!(q.is_negative() && r.is_negative());
        assert_eq!(q.cmp_abs(&BigNum::from_u64(2)), std::cmp::Ordering::Equal);
        assert_eq!(r.cmp_abs(&BigNum::one()), std::cmp::Ordering::Equal);
        assert_eq!(q.mul(&b).add(&r), neg_a);
    }
}
