#![forbid(unsafe_code)]
#![doc = "Shared error types for the goldilocks workspace."]

mod error;

pub use error::CryptoError;
