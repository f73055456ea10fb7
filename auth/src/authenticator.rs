use chrono::Duration;

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::Claims;
use crate::token::TokenError;
use crate::token::TokenIssuer;
use crate::token::TokenVerifier;

/// Authentication coordinator combining password verification and token
/// issuance/verification around a single shared secret and a fixed TTL.
///
/// Construction is fallible: a missing or empty secret fails here, at startup,
/// rather than per request.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_issuer: TokenIssuer,
    token_verifier: TokenVerifier,
    token_ttl: Duration,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Signed bearer token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `secret` - Shared signing secret for the issuer/verifier pair
    /// * `token_ttl` - Lifetime of issued tokens
    ///
    /// # Errors
    /// * `SigningFailure` - Secret is empty
    pub fn new(secret: &[u8], token_ttl: Duration) -> Result<Self, TokenError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            token_issuer: TokenIssuer::new(secret)?,
            token_verifier: TokenVerifier::new(secret)?,
            token_ttl,
        })
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token for the subject.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `subject` - Identity identifier to bind the token to
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `Password` - Stored hash could not be parsed
    /// * `Token` - Token signing failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_issuer.issue(subject, self.token_ttl)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Validate a bearer token and extract its claims.
    ///
    /// # Errors
    /// * `Malformed` / `BadSignature` / `Expired` - Verification failed
    pub fn verify_token(&self, token: &str) -> Result<Claims, TokenError> {
        self.token_verifier.verify(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!!";

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1)).unwrap();

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let result = authenticator
            .authenticate(password, &hash, "identity-1")
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let claims = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(claims.sub, "identity-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1)).unwrap();

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let result = authenticator.authenticate("wrong_password", &hash, "identity-1");
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_empty_secret_fails_construction() {
        let result = Authenticator::new(b"", Duration::hours(1));
        assert!(matches!(result, Err(TokenError::SigningFailure(_))));
    }

    #[test]
    fn test_verify_invalid_token() {
        let authenticator = Authenticator::new(SECRET, Duration::hours(1)).unwrap();

        let result = authenticator.verify_token("invalid.token.here");
        assert!(result.is_err());
    }
}
