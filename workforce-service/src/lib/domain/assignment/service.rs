use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::assignment::errors::AssignmentError;
use crate::domain::assignment::models::Assignment;
use crate::domain::assignment::models::AssignmentId;
use crate::domain::assignment::models::CreateAssignmentCommand;
use crate::domain::assignment::ports::AssignmentRepository;
use crate::domain::assignment::ports::AssignmentServicePort;
use crate::domain::identity::models::IdentityId;

/// Domain service implementation for assignment operations.
pub struct AssignmentService<AR>
where
    AR: AssignmentRepository,
{
    repository: Arc<AR>,
}

impl<AR> AssignmentService<AR>
where
    AR: AssignmentRepository,
{
    pub fn new(repository: Arc<AR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<AR> AssignmentServicePort for AssignmentService<AR>
where
    AR: AssignmentRepository,
{
    async fn create_assignment(
        &self,
        command: CreateAssignmentCommand,
    ) -> Result<Assignment, AssignmentError> {
        let assignment = Assignment {
            id: AssignmentId::new(),
            user_id: command.user_id,
            title: command.title,
            description: command.description,
            created_at: Utc::now(),
        };

        self.repository.create(assignment).await
    }

    async fn list_assignments(&self) -> Result<Vec<Assignment>, AssignmentError> {
        self.repository.list_all().await
    }

    async fn list_for_identity(
        &self,
        user_id: &IdentityId,
    ) -> Result<Vec<Assignment>, AssignmentError> {
        self.repository.find_by_user(user_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestAssignmentRepository {}

        #[async_trait]
        impl AssignmentRepository for TestAssignmentRepository {
            async fn create(&self, assignment: Assignment) -> Result<Assignment, AssignmentError>;
            async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentError>;
            async fn find_by_user(&self, user_id: &IdentityId) -> Result<Vec<Assignment>, AssignmentError>;
        }
    }

    #[tokio::test]
    async fn test_create_assignment_binds_identity() {
        let user_id = IdentityId::new();

        let mut repository = MockTestAssignmentRepository::new();
        let expected_user = user_id;
        repository
            .expect_create()
            .withf(move |a| a.user_id == expected_user && a.title == "Write docs")
            .times(1)
            .returning(|a| Ok(a));

        let service = AssignmentService::new(Arc::new(repository));

        let command = CreateAssignmentCommand::new(
            user_id,
            "Write docs".to_string(),
            "Cover the API surface".to_string(),
        )
        .unwrap();

        let assignment = service.create_assignment(command).await.unwrap();
        assert_eq!(assignment.user_id, user_id);
    }

    #[tokio::test]
    async fn test_list_for_identity_scopes_by_user() {
        let user_id = IdentityId::new();

        let mut repository = MockTestAssignmentRepository::new();
        let expected_user = user_id;
        repository
            .expect_find_by_user()
            .withf(move |id| *id == expected_user)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = AssignmentService::new(Arc::new(repository));

        let result = service.list_for_identity(&user_id).await.unwrap();
        assert!(result.is_empty());
    }
}
