use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::employee::errors::EmployeeError;

/// Employee record: a directory entry, no rules beyond field validation.
#[derive(Debug, Clone)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    pub position: String,
    pub created_at: DateTime<Utc>,
}

/// Employee unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmployeeId(pub Uuid);

impl EmployeeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EmployeeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to create a new employee
#[derive(Debug)]
pub struct CreateEmployeeCommand {
    pub name: String,
    pub position: String,
}

impl CreateEmployeeCommand {
    /// Construct a new create employee command, trimming and rejecting empty
    /// fields.
    ///
    /// # Errors
    /// * `EmptyField` - Name or position is empty after trimming
    pub fn new(name: String, position: String) -> Result<Self, EmployeeError> {
        let name = name.trim().to_string();
        let position = position.trim().to_string();

        if name.is_empty() {
            return Err(EmployeeError::EmptyField("name"));
        }
        if position.is_empty() {
            return Err(EmployeeError::EmptyField("position"));
        }

        Ok(Self { name, position })
    }
}

/// Pagination window for employee listings.
///
/// Pages are 1-based; the page size defaults to 10 and is capped at 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    const DEFAULT_LIMIT: u32 = 10;
    const MAX_LIMIT: u32 = 100;

    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        let page = page.unwrap_or(1).max(1);
        let limit = limit
            .unwrap_or(Self::DEFAULT_LIMIT)
            .clamp(1, Self::MAX_LIMIT);
        Self { page, limit }
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_rejects_empty_fields() {
        assert!(matches!(
            CreateEmployeeCommand::new("  ".to_string(), "Engineer".to_string()),
            Err(EmployeeError::EmptyField("name"))
        ));
        assert!(matches!(
            CreateEmployeeCommand::new("Bea".to_string(), "".to_string()),
            Err(EmployeeError::EmptyField("position"))
        ));
    }

    #[test]
    fn test_page_request_defaults() {
        let page = PageRequest::new(None, None);
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn test_page_request_offset_and_cap() {
        let page = PageRequest::new(Some(3), Some(25));
        assert_eq!(page.limit(), 25);
        assert_eq!(page.offset(), 50);

        let capped = PageRequest::new(Some(0), Some(10_000));
        assert_eq!(capped.limit(), 100);
        assert_eq!(capped.offset(), 0);
    }
}
