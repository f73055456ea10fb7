use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::assignment::errors::AssignmentError;
use crate::domain::identity::models::IdentityId;

/// Assignment record: a unit of work attached to an identity.
#[derive(Debug, Clone)]
pub struct Assignment {
    pub id: AssignmentId,
    pub user_id: IdentityId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Assignment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentId(pub Uuid);

impl AssignmentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AssignmentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssignmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new assignment
#[derive(Debug)]
pub struct CreateAssignmentCommand {
    pub user_id: IdentityId,
    pub title: String,
    pub description: String,
}

impl CreateAssignmentCommand {
    /// Construct a new create assignment command.
    ///
    /// The description may be empty; the title may not.
    ///
    /// # Errors
    /// * `EmptyTitle` - Title is empty after trimming
    pub fn new(
        user_id: IdentityId,
        title: String,
        description: String,
    ) -> Result<Self, AssignmentError> {
        let title = title.trim().to_string();
        if title.is_empty() {
            return Err(AssignmentError::EmptyTitle);
        }

        Ok(Self {
            user_id,
            title,
            description,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_rejects_empty_title() {
        let result =
            CreateAssignmentCommand::new(IdentityId::new(), " ".to_string(), "d".to_string());
        assert!(matches!(result, Err(AssignmentError::EmptyTitle)));
    }

    #[test]
    fn test_command_allows_empty_description() {
        let result =
            CreateAssignmentCommand::new(IdentityId::new(), "Write docs".to_string(), String::new());
        assert!(result.is_ok());
    }
}
