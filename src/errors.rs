use thiserror::Error;

/// Why a signature was rejected.
///
/// Every variant is equally fatal: callers must treat any `Rejection` as
/// "invalid signature", and must not let the variant influence a trust
/// decision. The distinction exists for diagnostics and tests only.
#[derive(Copy, Clone, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("signature must have the same length as the modulus")]
    SignatureLength,
    #[error("signature representative out of range")]
    SignatureOutOfRange,
    #[error("reduction factor does not match the modulus")]
    BadReductionFactor,
    #[error("m too large")]
    ResultTooLarge,
    #[error("intended encoded message length too short")]
    EncodedLengthTooShort,
    #[error("em must match em_prime for signature to be valid")]
    EncodingMismatch,
}
