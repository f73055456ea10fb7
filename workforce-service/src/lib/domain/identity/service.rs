use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use chrono::Utc;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::EmailAddress;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::LoginOutcome;
use crate::domain::identity::models::RegisterCommand;
use crate::domain::identity::ports::IdentityRepository;
use crate::domain::identity::ports::IdentityServicePort;

/// Authentication gateway implementation.
///
/// Orchestrates the credential store, password hasher, and token issuer for
/// registration and login. Argon2 work is deliberately slow, so both hashing
/// and verification run on the blocking pool instead of the async runtime.
pub struct IdentityService<IR>
where
    IR: IdentityRepository,
{
    repository: Arc<IR>,
    authenticator: Arc<Authenticator>,
}

impl<IR> IdentityService<IR>
where
    IR: IdentityRepository,
{
    /// Create a new identity service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Credential store implementation
    /// * `authenticator` - Configured hasher + token issuer/verifier pair
    pub fn new(repository: Arc<IR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<IR> IdentityServicePort for IdentityService<IR>
where
    IR: IdentityRepository,
{
    async fn register(&self, command: RegisterCommand) -> Result<Identity, IdentityError> {
        let authenticator = Arc::clone(&self.authenticator);
        let password = command.password.clone();

        let password_hash = tokio::task::spawn_blocking(move || authenticator.hash_password(&password))
            .await
            .map_err(|e| IdentityError::Unknown(e.to_string()))?
            .map_err(|e| IdentityError::Unknown(format!("Password hashing failed: {}", e)))?;

        let identity = Identity {
            id: IdentityId::new(),
            name: command.name,
            email: command.email,
            password_hash,
            created_at: Utc::now(),
        };

        // Email uniqueness is the store's invariant; a concurrent duplicate
        // surfaces here as RegistrationConflict.
        let created = self.repository.create(identity).await?;

        tracing::info!(identity_id = %created.id, "Identity registered");

        Ok(created)
    }

    async fn login(&self, email: String, password: String) -> Result<LoginOutcome, IdentityError> {
        // A malformed email can match nothing; report it exactly like an
        // unknown one.
        let email =
            EmailAddress::new(email).map_err(|_| IdentityError::InvalidCredentials)?;

        let identity = self
            .repository
            .find_by_email(email.as_str())
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let authenticator = Arc::clone(&self.authenticator);
        let stored_hash = identity.password_hash.clone();
        let subject = identity.id.to_string();

        let result = tokio::task::spawn_blocking(move || {
            authenticator.authenticate(&password, &stored_hash, &subject)
        })
        .await
        .map_err(|e| IdentityError::Unknown(e.to_string()))?
        .map_err(IdentityError::from)?;

        tracing::debug!(identity_id = %identity.id, "Login succeeded");

        Ok(LoginOutcome {
            access_token: result.access_token,
            identity,
        })
    }

    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(IdentityError::NotFound(id.to_string()))
    }

    async fn list_identities(&self) -> Result<Vec<Identity>, IdentityError> {
        self.repository.list_all().await
    }
}
