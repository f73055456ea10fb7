pub mod assignment;
pub mod employee;
pub mod identity;
pub mod memory;

pub use assignment::PostgresAssignmentRepository;
pub use employee::PostgresEmployeeRepository;
pub use identity::PostgresIdentityRepository;
pub use memory::InMemoryAssignmentRepository;
pub use memory::InMemoryEmployeeRepository;
pub use memory::InMemoryIdentityRepository;
