//! Core domain logic for Staffbook, an in-memory employee directory.
//! This crate is the single source of truth for business invariants; the
//! console layer only renders what it returns.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod session;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::employee::{Employee, EmployeeId, EmployeeValidationError};
pub use repo::employee_repo::{
    EmployeeRepository, MemoryEmployeeRepository, RepoError, RepoResult,
};
pub use service::directory_service::{DirectoryService, ServiceError, ServiceResult};
pub use session::{SessionError, SessionGate, SessionResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
