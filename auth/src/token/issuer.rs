use chrono::Duration;
use jsonwebtoken::encode;
use jsonwebtoken::Algorithm;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;

use super::claims::Claims;
use super::errors::TokenError;

/// Token issuer: signs claim sets into bearer tokens.
///
/// Pure function of (subject, ttl, clock, secret); no state is persisted.
/// Uses HS256 (HMAC with SHA-256), so the verifier must share the same secret.
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    algorithm: Algorithm,
}

impl TokenIssuer {
    /// Create a new issuer from the shared signing secret.
    ///
    /// # Arguments
    /// * `secret` - Secret key for signing tokens (should be stored securely)
    ///
    /// # Errors
    /// * `SigningFailure` - Secret is empty. A misconfigured secret is a
    ///   startup-time concern; constructing the issuer is where it surfaces.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::SigningFailure(
                "signing secret is empty".to_string(),
            ));
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
        })
    }

    /// Issue a signed token for a subject, valid for `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier to bind the token to
    /// * `ttl` - Time until expiry
    ///
    /// # Returns
    /// Encoded, URL-safe token string
    ///
    /// # Errors
    /// * `SigningFailure` - Token encoding failed
    pub fn issue(&self, subject: &str, ttl: Duration) -> Result<String, TokenError> {
        self.sign(&Claims::new(subject, ttl))
    }

    /// Sign an explicit claim set.
    ///
    /// # Errors
    /// * `SigningFailure` - Token encoding failed
    pub fn sign(&self, claims: &Claims) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailure(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_produces_token() {
        let issuer = TokenIssuer::new(b"secret_key_at_least_32_bytes_long!!").unwrap();

        let token = issuer
            .issue("identity-1", Duration::hours(1))
            .expect("Failed to issue token");

        // Compact JWT: three dot-separated segments.
        assert_eq!(token.split('.').count(), 3);
    }

    #[test]
    fn test_empty_secret_rejected() {
        let result = TokenIssuer::new(b"");
        assert!(matches!(result, Err(TokenError::SigningFailure(_))));
    }
}
