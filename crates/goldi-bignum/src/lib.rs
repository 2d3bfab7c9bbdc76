#![forbid(unsafe_code)]
#![doc = "Arbitrary-precision integer arithmetic for the goldilocks workspace."]

mod bignum;
mod decimal;
mod modular;
mod ops;
mod rand;

pub use bignum::BigNum;
