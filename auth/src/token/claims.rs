use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claim set carried by an access token.
///
/// Self-contained session state: the subject plus issue/expiry timing. Nothing
/// is persisted server-side; a token is valid iff its signature checks out and
/// `exp` has not passed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject: identifier of the identity the token was issued to.
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl Claims {
    /// Build a claim set for a subject, expiring `ttl` from now.
    ///
    /// # Arguments
    /// * `subject` - Identity identifier to bind the token to
    /// * `ttl` - Time until expiry, relative to the current clock
    ///
    /// # Returns
    /// Claims with `iat = now` and `exp = now + ttl`
    pub fn new(subject: impl ToString, ttl: Duration) -> Self {
        let now = Utc::now();
        Self {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_offset_from_issue_time() {
        let claims = Claims::new("identity-1", Duration::hours(1));

        assert_eq!(claims.sub, "identity-1");
        assert_eq!(claims.exp - claims.iat, 3600);
    }
}
