//! Authentication strategies for the service clients.
//!
//! Credentials are applied as request headers; token-exchange flows are
//! deliberately not implemented here. All credentials can be read from
//! environment variables so nothing is hardcoded in client code.

use reqwest::header::HeaderValue;

use crate::error::AuthError;

/// How requests authenticate against the service.
///
/// ## Examples
///
/// Bearer token (API key sent as-is):
///
/// ```rust
/// use cis_core::Authenticator;
///
/// let auth = Authenticator::BearerToken {
///     token: "my-api-key".to_string(),
/// };
/// ```
///
/// Selected from the environment:
///
/// ```rust,ignore
/// // Reads CIS_AUTH_TYPE, CIS_APIKEY, CIS_USERNAME, CIS_PASSWORD.
/// let auth = Authenticator::from_env("CIS")?;
/// ```
#[derive(Debug, Clone, Default)]
pub enum Authenticator {
    /// No authentication headers are sent.
    #[default]
    NoAuth,

    /// API key sent as `Authorization: Bearer <token>`.
    BearerToken {
        /// The API key / token value.
        token: String,
    },

    /// API key sent in a custom header.
    ApiKey {
        /// Header name, e.g. `X-API-Key`.
        header: String,
        /// The key value.
        key: String,
    },

    /// HTTP Basic authentication.
    Basic {
        /// Username half of the credential pair.
        username: String,
        /// Password half of the credential pair.
        password: String,
    },
}

impl Authenticator {
    /// Selects an authenticator from `<PREFIX>_*` environment variables.
    ///
    /// `<PREFIX>_AUTH_TYPE` picks the strategy (`apikey`, `basic`, or
    /// `noauth`). When it is unset, the presence of `<PREFIX>_APIKEY`
    /// selects `apikey`, otherwise no authentication is used.
    ///
    /// ## Errors
    ///
    /// Returns an error for an unrecognized auth type or when a variable
    /// the selected strategy requires is not set.
    pub fn from_env(prefix: &str) -> Result<Self, AuthError> {
        let var = |suffix: &str| std::env::var(format!("{prefix}_{suffix}"));

        let auth_type = match var("AUTH_TYPE") {
            Ok(v) => v.to_ascii_lowercase(),
            Err(_) if var("APIKEY").is_ok() => "apikey".to_string(),
            Err(_) => "noauth".to_string(),
        };

        match auth_type.as_str() {
            "noauth" | "none" => Ok(Self::NoAuth),
            "apikey" | "bearertoken" => {
                let token = var("APIKEY")
                    .map_err(|_| AuthError::MissingEnv(format!("{prefix}_APIKEY")))?;
                Ok(Self::BearerToken { token })
            }
            "basic" => {
                let username = var("USERNAME")
                    .map_err(|_| AuthError::MissingEnv(format!("{prefix}_USERNAME")))?;
                let password = var("PASSWORD")
                    .map_err(|_| AuthError::MissingEnv(format!("{prefix}_PASSWORD")))?;
                Ok(Self::Basic { username, password })
            }
            other => Err(AuthError::UnknownAuthType(other.to_string())),
        }
    }

    /// Applies this strategy to a request builder.
    ///
    /// ## Errors
    ///
    /// Returns an error if a credential cannot be encoded as a header
    /// value.
    pub(crate) fn apply(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, AuthError> {
        match self {
            Self::NoAuth => Ok(request),
            Self::BearerToken { token } => Ok(request.bearer_auth(token)),
            Self::ApiKey { header, key } => {
                let value =
                    HeaderValue::from_str(key).map_err(|_| AuthError::InvalidCredential)?;
                Ok(request.header(header.as_str(), value))
            }
            Self::Basic { username, password } => {
                Ok(request.basic_auth(username, Some(password)))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var tests mutate process state; each uses a distinct prefix so
    // they stay independent under the parallel test runner.

    #[test]
    fn test_from_env_defaults_to_noauth() {
        let auth = Authenticator::from_env("AUTH_TEST_EMPTY").unwrap();
        assert!(matches!(auth, Authenticator::NoAuth));
    }

    #[test]
    fn test_from_env_apikey() {
        std::env::set_var("AUTH_TEST_KEYED_APIKEY", "secret");
        let auth = Authenticator::from_env("AUTH_TEST_KEYED").unwrap();
        assert!(matches!(auth, Authenticator::BearerToken { token } if token == "secret"));
    }

    #[test]
    fn test_from_env_basic_missing_password() {
        std::env::set_var("AUTH_TEST_BASIC_AUTH_TYPE", "basic");
        std::env::set_var("AUTH_TEST_BASIC_USERNAME", "user");
        let err = Authenticator::from_env("AUTH_TEST_BASIC").unwrap_err();
        assert!(matches!(err, AuthError::MissingEnv(v) if v == "AUTH_TEST_BASIC_PASSWORD"));
    }

    #[test]
    fn test_from_env_unknown_type() {
        std::env::set_var("AUTH_TEST_ODD_AUTH_TYPE", "kerberos");
        let err = Authenticator::from_env("AUTH_TEST_ODD").unwrap_err();
        assert!(matches!(err, AuthError::UnknownAuthType(t) if t == "kerberos"));
    }
}
