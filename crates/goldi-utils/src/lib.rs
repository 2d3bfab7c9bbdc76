#![forbid(unsafe_code)]
#![doc = "Text encoding utilities for goldilocks: hex."]

pub mod hex;
