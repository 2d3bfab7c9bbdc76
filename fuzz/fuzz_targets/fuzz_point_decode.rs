#![no_main]
use libfuzzer_sys::fuzz_target;

use goldi_bignum::BigNum;
use goldi_crypto::edwards::AffinePoint;

fuzz_target!(|data: &[u8]| {
    let y = BigNum::from_bytes_be(data);
    for parity in [false, true] {
        if let Ok(point) = AffinePoint::decompress(&y, parity) {
            // Any accepted point must satisfy the curve equation.
            assert!(AffinePoint::from_coords(point.x(), point.y()).is_ok());
        }
    }
});
