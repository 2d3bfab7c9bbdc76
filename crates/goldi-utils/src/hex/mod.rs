//! Hexadecimal encoding and decoding.
//!
//! The serialized cryptogram format carries byte strings as uppercase hex,
//! two characters per byte, most significant nibble first.

use goldi_types::CryptoError;

const ENCODE_TABLE: &[u8; 16] = b"0123456789ABCDEF";

/// Encode bytes to an uppercase hex string.
pub fn encode(input: &[u8]) -> String {
    let mut output = String::with_capacity(input.len() * 2);
    for &b in input {
        output.push(ENCODE_TABLE[(b >> 4) as usize] as char);
        output.push(ENCODE_TABLE[(b & 0x0F) as usize] as char);
    }
    output
}

/// Decode a hex string (either case) to bytes.
///
/// The input length must be even; no whitespace is accepted.
pub fn decode(input: &str) -> Result<Vec<u8>, CryptoError> {
    let input = input.as_bytes();
    if input.len() % 2 != 0 {
        return Err(CryptoError::DecodeInvalidHex);
    }

    let mut output = Vec::with_capacity(input.len() / 2);
    for pair in input.chunks(2) {
        let hi = decode_nibble(pair[0])?;
        let lo = decode_nibble(pair[1])?;
        output.push((hi << 4) | lo);
    }
    Ok(output)
}

fn decode_nibble(c: u8) -> Result<u8, CryptoError> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        _ => Err(CryptoError::DecodeInvalidHex),
    }
}
