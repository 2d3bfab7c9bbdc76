/// Cryptographic operation errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("invalid argument")]
    InvalidArg,

    // BigNum errors
    #[error("big number: division by zero")]
    BnDivisionByZero,
    #[error("big number: no modular inverse")]
    BnNoInverse,
    #[error("big number: negative exponent")]
    BnNegativeExponent,
    #[error("big number: random generation failed")]
    BnRandGenFail,

    // Curve errors
    #[error("edwards: no square root exists for decompression")]
    NoSquareRoot,
    #[error("edwards: point not on curve")]
    PointNotOnCurve,

    // DHIES errors
    #[error("dhies: authentication tag mismatch")]
    AuthTagMismatch,

    // Schnorr errors
    #[error("schnorr: signature mismatch")]
    SignatureMismatch,

    // Encoding/Decoding errors
    #[error("decode: invalid decimal integer")]
    DecodeInvalidDecimal,
    #[error("decode: invalid hex string")]
    DecodeInvalidHex,
    #[error("decode: malformed or truncated input")]
    DecodeMalformed,
}
