//! Ed448-Goldilocks Edwards curve arithmetic in affine coordinates.
//!
//! The curve is x² + y² = 1 + d·x²·y² over GF(p) with p = 2^448 − 2^224 − 1
//! and d = −39081. The addition law is complete, so no special cases are
//! needed for doubling or the neutral element (0, 1). Scalars are cleared of
//! the cofactor 4 before use so every derived key lands in the prime-order
//! subgroup.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use goldi_bignum::BigNum;
use goldi_types::CryptoError;

/// p = 2^448 − 2^224 − 1.
const P_HEX: &str = "FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF";

/// Order of the prime subgroup: r = 2^446 − 0x8335DC163BB124B65129C96FDE933D8D723A70AADC873D6D54A7BB0D.
const R_HEX: &str = "3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF7CCA23E9C44EDB49AED63690216CC2728DC58F552378C292AB5844F3";

/// Edwards coefficient magnitude; the curve uses d = −39081 mod p.
const D_MAGNITUDE: u64 = 39081;

pub(crate) struct CurveParams {
    /// Field prime.
    pub p: BigNum,
    /// Edwards coefficient as a field element, p − 39081.
    pub d: BigNum,
    /// Prime subgroup order.
    pub r: BigNum,
    /// (p + 1) / 4, the square-root exponent for p ≡ 3 (mod 4).
    pub sqrt_exp: BigNum,
    /// Base point coordinates: y = p − 3, x the even root.
    pub gx: BigNum,
    pub gy: BigNum,
}

static GOLDILOCKS: OnceLock<CurveParams> = OnceLock::new();

/// Parse a hex constant at parameter-initialization time.
fn bn(hex: &str) -> BigNum {
    BigNum::from_bytes_be(&goldi_utils::hex::decode(hex).unwrap())
}

pub(crate) fn params() -> &'static CurveParams {
    GOLDILOCKS.get_or_init(|| {
        let p = bn(P_HEX);
        let d = p.sub(&BigNum::from_u64(D_MAGNITUDE));
        let r = bn(R_HEX);
        let (sqrt_exp, _) = p
            .add(&BigNum::one())
            .div_rem(&BigNum::from_u64(4))
            .expect("divisor is nonzero");
        let gy = p.sub(&BigNum::from_u64(3));
        let gx = recover_x(&gy, false, &p, &sqrt_exp).expect("base point is on the curve");
        CurveParams {
            p,
            d,
            r,
            sqrt_exp,
            gx,
            gy,
        }
    })
}

/// Order of the prime subgroup generated by the base point.
pub fn subgroup_order() -> &'static BigNum {
    &params().r
}

/// Multiply by the cofactor and reduce: 4·k mod r.
pub(crate) fn clear_cofactor(k: &BigNum) -> Result<BigNum, CryptoError> {
    BigNum::from_u64(4).mul(k).mod_reduce(&params().r)
}

/// Recover the x-coordinate with the requested parity from y, or fail with
/// `NoSquareRoot` when (1 − y²)/(1 + 39081·y²) is not a quadratic residue.
fn recover_x(
    y: &BigNum,
    x_is_odd: bool,
    p: &BigNum,
    sqrt_exp: &BigNum,
) -> Result<BigNum, CryptoError> {
    let one = BigNum::one();
    let y2 = y.mod_mul(y, p)?;
    let num = one.mod_sub(&y2, p)?;
    let den = one.mod_add(&BigNum::from_u64(D_MAGNITUDE).mod_mul(&y2, p)?, p)?;
    let x2 = num.mod_mul(&den.mod_inv(p)?, p)?;

    // Candidate root for p ≡ 3 (mod 4); squaring verifies it is genuine.
    let root = x2.mod_exp(sqrt_exp, p)?;
    if root.mod_mul(&root, p)? != x2 {
        return Err(CryptoError::NoSquareRoot);
    }

    if root.is_odd() != x_is_odd {
        p.sub(&root).mod_reduce(p)
    } else {
        Ok(root)
    }
}

/// A point on the curve in affine coordinates, both in [0, p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AffinePoint {
    x: BigNum,
    y: BigNum,
}

impl AffinePoint {
    /// The neutral element (0, 1).
    pub fn neutral() -> Self {
        Self {
            x: BigNum::zero(),
            y: BigNum::one(),
        }
    }

    /// The base point G.
    pub fn generator() -> Self {
        let cp = params();
        Self {
            x: cp.gx.clone(),
            y: cp.gy.clone(),
        }
    }

    /// Construct a point from coordinates, reducing them mod p and rejecting
    /// pairs that do not satisfy the curve equation.
    pub fn from_coords(x: &BigNum, y: &BigNum) -> Result<Self, CryptoError> {
        let cp = params();
        let x = x.mod_reduce(&cp.p)?;
        let y = y.mod_reduce(&cp.p)?;

        let x2 = x.mod_mul(&x, &cp.p)?;
        let y2 = y.mod_mul(&y, &cp.p)?;
        let lhs = x2.mod_add(&y2, &cp.p)?;
        let dx2y2 = cp.d.mod_mul(&x2, &cp.p)?.mod_mul(&y2, &cp.p)?;
        let rhs = BigNum::one().mod_add(&dx2y2, &cp.p)?;
        if lhs != rhs {
            return Err(CryptoError::PointNotOnCurve);
        }
        Ok(Self { x, y })
    }

    /// Decompress a point from its y-coordinate and the parity of x.
    pub fn decompress(y: &BigNum, x_is_odd: bool) -> Result<Self, CryptoError> {
        let cp = params();
        let y = y.mod_reduce(&cp.p)?;
        let x = recover_x(&y, x_is_odd, &cp.p, &cp.sqrt_exp)?;
        Ok(Self { x, y })
    }

    pub fn x(&self) -> &BigNum {
        &self.x
    }

    pub fn y(&self) -> &BigNum {
        &self.y
    }

    /// The x-coordinate as minimal unsigned big-endian bytes.
    pub fn x_bytes(&self) -> Vec<u8> {
        self.x.to_bytes_be()
    }

    /// The inverse point (−x, y).
    pub fn negate(&self) -> Result<Self, CryptoError> {
        let cp = params();
        Ok(Self {
            x: cp.p.sub(&self.x).mod_reduce(&cp.p)?,
            y: self.y.clone(),
        })
    }

    /// Add two points with the complete Edwards addition law.
    pub fn add(&self, other: &AffinePoint) -> Result<Self, CryptoError> {
        let cp = params();
        let p = &cp.p;

        let x1x2 = self.x.mod_mul(&other.x, p)?;
        let y1y2 = self.y.mod_mul(&other.y, p)?;
        let x1y2 = self.x.mod_mul(&other.y, p)?;
        let y1x2 = self.y.mod_mul(&other.x, p)?;
        let dxxyy = cp.d.mod_mul(&x1x2, p)?.mod_mul(&y1y2, p)?;

        let one = BigNum::one();
        // Completeness of the law guarantees both denominators are nonzero.
        let x_den_inv = one.mod_add(&dxxyy, p)?.mod_inv(p)?;
        let y_den_inv = one.mod_sub(&dxxyy, p)?.mod_inv(p)?;
        let x = x1y2.mod_add(&y1x2, p)?.mod_mul(&x_den_inv, p)?;
        let y = y1y2.mod_sub(&x1x2, p)?.mod_mul(&y_den_inv, p)?;
        Ok(Self { x, y })
    }

    /// Scalar multiplication by a non-negative scalar, most significant bit
    /// first. Zero maps to the neutral element.
    ///
    /// Runs in variable time in the scalar.
    pub fn scalar_mul(&self, k: &BigNum) -> Result<Self, CryptoError> {
        if k.is_negative() {
            return Err(CryptoError::InvalidArg);
        }
        let bits = k.bit_len();
        if bits == 0 {
            return Ok(Self::neutral());
        }

        // The top bit is always set, so start from self.
        (0..bits - 1).rev().try_fold(self.clone(), |acc, i| {
            let doubled = acc.add(&acc)?;
            if k.get_bit(i) == 1 {
                doubled.add(self)
            } else {
                Ok(doubled)
            }
        })
    }
}

impl fmt::Display for AffinePoint {
    /// Two decimal lines: x then y.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.x, self.y)
    }
}

impl FromStr for AffinePoint {
    type Err = CryptoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        if lines.len() != 2 {
            return Err(CryptoError::DecodeMalformed);
        }
        let x: BigNum = lines[0].parse()?;
        let y: BigNum = lines[1].parse()?;
        Self::from_coords(&x, &y)
    }
}
