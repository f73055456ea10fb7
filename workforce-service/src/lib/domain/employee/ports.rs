use async_trait::async_trait;

use crate::domain::employee::errors::EmployeeError;
use crate::domain::employee::models::CreateEmployeeCommand;
use crate::domain::employee::models::Employee;
use crate::domain::employee::models::PageRequest;

/// Port for employee service operations.
#[async_trait]
pub trait EmployeeServicePort: Send + Sync + 'static {
    /// Create a new employee record.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn add_employee(&self, command: CreateEmployeeCommand)
        -> Result<Employee, EmployeeError>;

    /// Retrieve one page of employees, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list_employees(&self, page: PageRequest) -> Result<Vec<Employee>, EmployeeError>;
}

/// Persistence operations for employees.
#[async_trait]
pub trait EmployeeRepository: Send + Sync + 'static {
    /// Persist a new employee.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn create(&self, employee: Employee) -> Result<Employee, EmployeeError>;

    /// Retrieve one page of employees, oldest first.
    ///
    /// # Errors
    /// * `DatabaseError` - Store operation failed
    async fn list(&self, page: PageRequest) -> Result<Vec<Employee>, EmployeeError>;
}
