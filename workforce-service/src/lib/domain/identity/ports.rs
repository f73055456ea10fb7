use async_trait::async_trait;

use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::LoginOutcome;
use crate::domain::identity::models::RegisterCommand;

/// Port for the authentication gateway: registration, login, and identity
/// lookups for protected handlers.
#[async_trait]
pub trait IdentityServicePort: Send + Sync + 'static {
    /// Register a new identity with validated fields.
    ///
    /// # Errors
    /// * `RegistrationConflict` - An identity with this email already exists
    /// * `DatabaseError` - Store operation failed
    async fn register(&self, command: RegisterCommand) -> Result<Identity, IdentityError>;

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `email` - Raw email as submitted by the client
    /// * `password` - Plaintext password
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password, reported
    ///   identically
    /// * `DatabaseError` - Store operation failed
    async fn login(&self, email: String, password: String) -> Result<LoginOutcome, IdentityError>;

    /// Retrieve an identity by unique identifier.
    ///
    /// # Errors
    /// * `NotFound` - Identity does not exist
    /// * `DatabaseError` - Store operation failed
    async fn get_identity(&self, id: &IdentityId) -> Result<Identity, IdentityError>;

    /// Retrieve all registered identities.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_identities(&self) -> Result<Vec<Identity>, IdentityError>;
}

/// Persistence operations for the credential store.
///
/// Sole authority on the email-uniqueness invariant: implementations must make
/// the uniqueness check atomic with insertion (reject-on-conflict), never
/// check-then-insert.
#[async_trait]
pub trait IdentityRepository: Send + Sync + 'static {
    /// Persist a new identity.
    ///
    /// # Errors
    /// * `RegistrationConflict` - Email is already registered
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError>;

    /// Retrieve an identity by email address (exact, case-sensitive match).
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve an identity by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError>;

    /// Retrieve all identities.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError>;
}
