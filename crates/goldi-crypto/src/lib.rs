#![forbid(unsafe_code)]
#![doc = "Ed448-Goldilocks public-key cryptography: DHIES encryption and Schnorr signatures."]

// Keyed XOF (external Keccak primitive, KMAC framing)
pub mod kmac;

// Curve arithmetic
pub mod edwards;

// Protocols
pub mod dhies;
pub mod keypair;
pub mod schnorr;
