//! KMACXOF256 keyed extendable-output function (NIST SP 800-185 §4).
//!
//! The Keccak sponge itself comes from the `sha3` crate's cSHAKE256; this
//! module supplies only the KMAC input framing (`bytepad`, `encode_string`,
//! `right_encode`) and the fixed call shape used by the protocols. The
//! customization string carries the protocol domain separator: "SK" for key
//! derivation, "PK"/"PKE"/"PKA" for encryption, "N"/"T" for signatures, and
//! "D" for plain hashing. Changing any of them breaks interoperability.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::{CShake256, CShake256Core};

/// cSHAKE256 rate in bytes: (1600 − 2·256) / 8.
const RATE_BYTES: usize = 136;

/// KMACXOF256(key, data, L, domain): `output_bits / 8` bytes of keyed XOF
/// output. `output_bits` must be a multiple of 8.
pub fn kmac_xof256(key: &[u8], data: &[u8], output_bits: usize, domain: &str) -> Vec<u8> {
    debug_assert!(output_bits % 8 == 0);

    let core = CShake256Core::new_with_function_name(b"KMAC", domain.as_bytes());
    let mut xof = CShake256::from_core(core);
    xof.update(&bytepad(&encode_string(key), RATE_BYTES));
    xof.update(data);
    // right_encode(0) selects the arbitrary-length XOF variant of KMAC.
    xof.update(&right_encode(0));

    let mut out = vec![0u8; output_bits / 8];
    xof.finalize_xof().read(&mut out);
    out
}

/// left_encode(x): minimal big-endian bytes of x, preceded by their count.
fn left_encode(x: usize) -> Vec<u8> {
    let bytes = int_to_bytes(x);
    let mut out = Vec::with_capacity(bytes.len() + 1);
    out.push(bytes.len() as u8);
    out.extend_from_slice(&bytes);
    out
}

/// right_encode(x): minimal big-endian bytes of x, followed by their count.
fn right_encode(x: usize) -> Vec<u8> {
    let mut out = int_to_bytes(x);
    let len = out.len() as u8;
    out.push(len);
    out
}

/// encode_string(s): left_encode of the bit length, then the bytes.
fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode(s.len() * 8);
    out.extend_from_slice(s);
    out
}

/// bytepad(x, w): left_encode(w) || x, zero-padded to a multiple of w bytes.
fn bytepad(x: &[u8], w: usize) -> Vec<u8> {
    let mut out = left_encode(w);
    out.extend_from_slice(x);
    while out.len() % w != 0 {
        out.push(0);
    }
    out
}

/// Minimal big-endian byte representation of x (a single zero byte for 0).
fn int_to_bytes(x: usize) -> Vec<u8> {
    if x == 0 {
        return vec![0];
    }
    let mut bytes = Vec::new();
    let mut v = x;
    while v > 0 {
        bytes.push((v & 0xFF) as u8);
        v >>= 8;
    }
    bytes.reverse();
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_encode() {
        assert_eq!(left_encode(0), vec![1, 0]);
        assert_eq!(left_encode(136), vec![1, 136]);
        assert_eq!(left_encode(4096), vec![2, 16, 0]);
    }

    #[test]
    fn test_right_encode() {
        assert_eq!(right_encode(0), vec![0, 1]);
        assert_eq!(right_encode(256), vec![1, 0, 2]);
    }

    #[test]
    fn test_encode_string_empty() {
        assert_eq!(encode_string(b""), vec![1, 0]);
    }

    #[test]
    fn test_bytepad_width() {
        let padded = bytepad(&encode_string(b"key"), RATE_BYTES);
        assert_eq!(padded.len() % RATE_BYTES, 0);
        assert_eq!(&padded[..2], &[1, 136]);
    }

    #[test]
    fn test_output_length() {
        assert_eq!(kmac_xof256(b"k", b"data", 448, "T").len(), 56);
        assert_eq!(kmac_xof256(b"k", b"data", 896, "PK").len(), 112);
        assert_eq!(kmac_xof256(b"k", b"", 0, "PKE").len(), 0);
    }

    #[test]
    fn test_deterministic() {
        let a = kmac_xof256(b"key", b"message", 512, "D");
        let b = kmac_xof256(b"key", b"message", 512, "D");
        assert_eq!(a, b);
    }

    #[test]
    fn test_domain_separation() {
        let a = kmac_xof256(b"key", b"message", 512, "PKE");
        let b = kmac_xof256(b"key", b"message", 512, "PKA");
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_separation() {
        let a = kmac_xof256(b"key1", b"message", 512, "D");
        let b = kmac_xof256(b"key2", b"message", 512, "D");
        assert_ne!(a, b);
    }

    #[test]
    fn test_prefix_consistency() {
        // A longer squeeze of the same input starts with the shorter one.
        let long = kmac_xof256(b"key", b"msg", 896, "PK");
        let prefix_len = 56;
        let again = kmac_xof256(b"key", b"msg", 896, "PK");
        assert_eq!(&long[..prefix_len], &again[..prefix_len]);
    }
}
