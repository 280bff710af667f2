use thiserror::Error;

/// Reasons a request fails authentication.
///
/// Every variant maps to HTTP 401; the variant is reported in the response
/// body under `reason` so the admin UI can tell "log in again" apart from
/// "your token is broken".
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("malformed token")]
    Malformed,
    #[error("token expired")]
    Expired,
    #[error("token signature mismatch")]
    SignatureMismatch,
    #[error("token issuer mismatch")]
    InvalidIssuer,
    #[error("admin not found or inactive")]
    UnknownAdmin,
    #[error("invalid username or password")]
    BadCredentials,
}

impl AuthError {
    /// Stable machine-readable code for the failure.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::Malformed => "malformed",
            AuthError::Expired => "expired",
            AuthError::SignatureMismatch => "signature_mismatch",
            AuthError::InvalidIssuer => "invalid_issuer",
            AuthError::UnknownAdmin => "unknown_admin",
            AuthError::BadCredentials => "bad_credentials",
        }
    }
}
