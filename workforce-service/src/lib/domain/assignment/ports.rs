use async_trait::async_trait;

use crate::domain::assignment::errors::AssignmentError;
use crate::domain::assignment::models::Assignment;
use crate::domain::assignment::models::CreateAssignmentCommand;
use crate::domain::identity::models::IdentityId;

/// Port for assignment service operations.
#[async_trait]
pub trait AssignmentServicePort: Send + Sync + 'static {
    /// Create a new assignment.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create_assignment(
        &self,
        command: CreateAssignmentCommand,
    ) -> Result<Assignment, AssignmentError>;

    /// Retrieve all assignments.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_assignments(&self) -> Result<Vec<Assignment>, AssignmentError>;

    /// Retrieve assignments scoped to one identity.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_for_identity(
        &self,
        user_id: &IdentityId,
    ) -> Result<Vec<Assignment>, AssignmentError>;
}

/// Persistence operations for assignments.
#[async_trait]
pub trait AssignmentRepository: Send + Sync + 'static {
    /// Persist a new assignment.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, assignment: Assignment) -> Result<Assignment, AssignmentError>;

    /// Retrieve all assignments.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentError>;

    /// Retrieve assignments belonging to one identity.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn find_by_user(&self, user_id: &IdentityId)
        -> Result<Vec<Assignment>, AssignmentError>;
}
