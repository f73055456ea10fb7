use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::EmployeeId;
use crate::domain::employee::models::PageRequest;
use crate::domain::employee::ports::EmployeeRepository;
use crate::domain::employee::ports::EmployeeServicePort;

/// Domain service implementation for employee operations.
pub struct EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    repository: Arc<ER>,
}

impl<ER> EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    pub fn new(repository: Arc<ER>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<ER> EmployeeServicePort for EmployeeService<ER>
where
    ER: EmployeeRepository,
{
    async fn add_employee(
        &self,
        command: CreateEmployeeCommand,
    ) -> Result<Employee, EmployeeError> {
        let employee = Employee {
            id: EmployeeId::new(),
            name: command.name,
            position: command.position,
            created_at: Utc::now(),
        };

        self.repository.create(employee).await
    }

    async fn list_employees(&self, page: PageRequest) -> Result<Vec<Employee>, EmployeeError> {
        self.repository.list(page).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestEmployeeRepository {}

        #[async_trait]
        impl EmployeeRepository for TestEmployeeRepository {
            async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;
            async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, EmployeeError>;
        }
    }

    #[tokio::test]
    async fn test_add_employee_assigns_id() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_create()
            .withf(|e| e.name == "Bea" && e.position == "Engineer")
            .times(1)
            .returning(|e| Ok(e));

        let service = EmployeeService::new(Arc::new(repository));

        let command =
            CreateEmployeeCommand::new("Bea".to_string(), "Engineer".to_string()).unwrap();
        let employee = service.add_employee(command).await.unwrap();

        assert_eq!(employee.name, "Bea");
    }

    #[tokio::test]
    async fn test_list_employees_passes_page() {
        let mut repository = MockTestEmployeeRepository::new();
        repository
            .expect_list()
            .withf(|page| page.limit() == 2 && page.offset() == 2)
            .times(1)
            .returning(|_| Ok(vec![]));

        let service = EmployeeService::new(Arc::new(repository));

        let page = PageRequest::new(Some(2), Some(2));
        let result = service.list_employees(page).await.unwrap();
        assert!(result.is_empty());
    }
}
