//! In-memory adapters backing the same ports as the Postgres repositories.
//!
//! Used by the integration suite and for local runs without a database. Each
//! adapter serializes access through a single mutex, so the email-uniqueness
//! check and the insert happen atomically, matching the constraint-based
//! behavior of the Postgres adapter.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::MutexGuard;

use async_trait::async_trait;

use crate::domain::assignment::errors::AssignmentError;
use crate::domain::assignment::models::Assignment;
use crate::domain::assignment::ports::AssignmentRepository;
use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::PageRequest;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::identity::errors::IdentityError;
use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::ports::IdentityRepository;

#[derive(Default)]
pub struct InMemoryIdentityRepository {
    // Insertion order preserved alongside the map for deterministic listings.
    inner: Mutex<IdentityStore>,
}

#[derive(Default)]
struct IdentityStore {
    by_id: HashMap<IdentityId, Identity>,
    order: Vec<IdentityId>,
}

impl InMemoryIdentityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, IdentityStore>, IdentityError> {
        self.inner
            .lock()
            .map_err(|_| IdentityError::DatabaseError("identity store lock poisoned".to_string()))
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn create(&self, identity: Identity) -> Result<Identity, IdentityError> {
        let mut store = self.lock()?;

        // Check and insert under one lock: no window for a concurrent
        // duplicate.
        let duplicate = store
            .by_id
            .values()
            .any(|existing| existing.email == identity.email);
        if duplicate {
            return Err(IdentityError::RegistrationConflict);
        }

        store.order.push(identity.id);
        store.by_id.insert(identity.id, identity.clone());

        Ok(identity)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>, IdentityError> {
        let store = self.lock()?;

        // Exact, case-sensitive comparison, as stored.
        Ok(store
            .by_id
            .values()
            .find(|identity| identity.email.as_str() == email)
            .cloned())
    }

    async fn find_by_id(&self, id: &IdentityId) -> Result<Option<Identity>, IdentityError> {
        let store = self.lock()?;
        Ok(store.by_id.get(id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Identity>, IdentityError> {
        let store = self.lock()?;

        // Newest first, matching the Postgres adapter's ordering.
        Ok(store
            .order
            .iter()
            .rev()
            .filter_map(|id| store.by_id.get(id).cloned())
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryEmployeeRepository {
    inner: Mutex<Vec<Employee>>,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Employee>>, EmployeeError> {
        self.inner
            .lock()
            .map_err(|_| EmployeeError::DatabaseError("employee store lock poisoned".to_string()))
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError> {
        let mut store = self.lock()?;
        store.push(employee.clone());
        Ok(employee)
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, EmployeeError> {
        let store = self.lock()?;

        Ok(store
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct InMemoryAssignmentRepository {
    inner: Mutex<Vec<Assignment>>,
}

impl InMemoryAssignmentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Assignment>>, AssignmentError> {
        self.inner.lock().map_err(|_| {
            AssignmentError::DatabaseError("assignment store lock poisoned".to_string())
        })
    }
}

#[async_trait]
impl AssignmentRepository for InMemoryAssignmentRepository {
    async fn create(&self, assignment: Assignment) -> Result<Assignment, AssignmentError> {
        let mut store = self.lock()?;
        store.push(assignment.clone());
        Ok(assignment)
    }

    async fn list_all(&self) -> Result<Vec<Assignment>, AssignmentError> {
        let store = self.lock()?;
        Ok(store.clone())
    }

    async fn find_by_user(
        &self,
        user_id: &IdentityId,
    ) -> Result<Vec<Assignment>, AssignmentError> {
        let store = self.lock()?;

        Ok(store
            .iter()
            .filter(|assignment| assignment.user_id == *user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::domain::assignment::models::AssignmentId;
    use crate::domain::employee::models::EmployeeId;
    use crate::domain::identity::models::DisplayName;
    use crate::domain::identity::models::EmailAddress;

    fn identity(name: &str, email: &str) -> Identity {
        Identity {
            id: IdentityId::new(),
            name: DisplayName::new(name.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: Utc::now(),
        }
    }

    fn employee(name: &str) -> Employee {
        Employee {
            id: EmployeeId::new(),
            name: name.to_string(),
            position: "Engineer".to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let repo = InMemoryIdentityRepository::new();

        repo.create(identity("Ann", "ann@x.com")).await.unwrap();
        let result = repo.create(identity("Other Ann", "ann@x.com")).await;

        assert!(matches!(result, Err(IdentityError::RegistrationConflict)));
    }

    #[tokio::test]
    async fn test_email_lookup_is_case_sensitive() {
        let repo = InMemoryIdentityRepository::new();
        repo.create(identity("Ann", "Ann@x.com")).await.unwrap();

        assert!(repo.find_by_email("Ann@x.com").await.unwrap().is_some());
        assert!(repo.find_by_email("ann@x.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let repo = InMemoryIdentityRepository::new();
        repo.create(identity("First", "first@x.com")).await.unwrap();
        repo.create(identity("Second", "second@x.com"))
            .await
            .unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name.as_str(), "Second");
        assert_eq!(all[1].name.as_str(), "First");
    }

    #[tokio::test]
    async fn test_employee_pagination_slices() {
        let repo = InMemoryEmployeeRepository::new();
        for name in ["a", "b", "c"] {
            repo.create(employee(name)).await.unwrap();
        }

        let first_page = repo.list(PageRequest::new(Some(1), Some(2))).await.unwrap();
        assert_eq!(first_page.len(), 2);
        assert_eq!(first_page[0].name, "a");

        let second_page = repo.list(PageRequest::new(Some(2), Some(2))).await.unwrap();
        assert_eq!(second_page.len(), 1);
        assert_eq!(second_page[0].name, "c");
    }

    #[tokio::test]
    async fn test_assignments_filtered_by_user() {
        let repo = InMemoryAssignmentRepository::new();
        let owner = IdentityId::new();
        let other = IdentityId::new();

        for (user_id, title) in [(owner, "one"), (other, "two"), (owner, "three")] {
            repo.create(Assignment {
                id: AssignmentId::new(),
                user_id,
                title: title.to_string(),
                description: String::new(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        }

        let owned = repo.find_by_user(&owner).await.unwrap();
        assert_eq!(owned.len(), 2);
        assert!(owned.iter().all(|a| a.user_id == owner));
    }
}
