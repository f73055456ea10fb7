use thiserror::Error;

/// Error type for token operations.
///
/// Verification failures are reported distinctly so callers can tell a forged
/// token (`BadSignature`) from a stale one (`Expired`) and from input that is
/// not a token at all (`Malformed`).
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Token signing failed: {0}")]
    SigningFailure(String),

    #[error("Token is malformed: {0}")]
    Malformed(String),

    #[error("Token signature does not match")]
    BadSignature,

    #[error("Token is expired")]
    Expired,
}
