//! Credential resolution and encoding errors.

use thiserror::Error;

/// Errors raised while resolving or applying credentials.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The configured auth type is not one of `apikey`, `basic`, `noauth`.
    #[error("unrecognized auth type `{0}`")]
    UnknownAuthType(String),

    /// A required credential environment variable is not set.
    #[error("environment variable `{0}` is not set")]
    MissingEnv(String),

    /// A credential could not be encoded as an HTTP header value.
    #[error("credential is not a valid header value")]
    InvalidCredential,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AuthError::MissingEnv("CIS_APIKEY".to_string());
        assert!(err.to_string().contains("CIS_APIKEY"));
    }
}
