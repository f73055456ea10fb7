use jsonwebtoken::decode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::errors::TokenError;

/// Token verifier: checks signature and expiry, extracts the claim set.
///
/// Shares the signing secret with [`super::TokenIssuer`]. The signature is
/// checked before any decoded claim is trusted; expiry is judged against the
/// verifier's own clock with zero leeway.
pub struct TokenVerifier {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Create a new verifier from the shared signing secret.
    ///
    /// # Errors
    /// * `SigningFailure` - Secret is empty (startup-time misconfiguration)
    pub fn new(secret: &[u8]) -> Result<Self, TokenError> {
        if secret.is_empty() {
            return Err(TokenError::SigningFailure(
                "signing secret is empty".to_string(),
            ));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        // No clock-skew tolerance.
        validation.leeway = 0;

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Verify a token and extract its claims.
    ///
    /// # Arguments
    /// * `token` - Encoded token string as presented by the client
    ///
    /// # Returns
    /// Decoded claim set
    ///
    /// # Errors
    /// * `Malformed` - Input cannot be decoded or parsed as a token
    /// * `BadSignature` - Signature does not match the shared secret
    /// * `Expired` - Token expiry has passed
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::super::TokenIssuer;
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!!";

    #[test]
    fn test_round_trip() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let verifier = TokenVerifier::new(SECRET).unwrap();

        let token = issuer.issue("identity-1", Duration::hours(1)).unwrap();
        let claims = verifier.verify(&token).expect("Failed to verify token");

        assert_eq!(claims.sub, "identity-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn test_garbage_is_malformed() {
        let verifier = TokenVerifier::new(SECRET).unwrap();

        let result = verifier.verify("garbage");
        assert!(matches!(result, Err(TokenError::Malformed(_))));
    }

    #[test]
    fn test_wrong_secret_is_bad_signature() {
        let issuer = TokenIssuer::new(b"one_secret_at_least_32_bytes_long!!").unwrap();
        let verifier = TokenVerifier::new(b"another_secret_at_least_32_bytes!!!").unwrap();

        let token = issuer.issue("identity-1", Duration::hours(1)).unwrap();

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(TokenError::BadSignature)));
    }

    #[test]
    fn test_tampered_payload_is_bad_signature_or_malformed() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let verifier = TokenVerifier::new(SECRET).unwrap();

        let token = issuer.issue("identity-1", Duration::hours(1)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let swapped = parts[0];
        parts[1] = swapped;
        let tampered = parts.join(".");

        // Forged in either reading: never Expired, never Ok.
        let result = verifier.verify(&tampered);
        assert!(matches!(
            result,
            Err(TokenError::BadSignature) | Err(TokenError::Malformed(_))
        ));
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let issuer = TokenIssuer::new(SECRET).unwrap();
        let verifier = TokenVerifier::new(SECRET).unwrap();

        // exp already behind the verifier's clock.
        let token = issuer.issue("identity-1", Duration::seconds(-5)).unwrap();

        let result = verifier.verify(&token);
        assert!(matches!(result, Err(TokenError::Expired)));
    }
}
