//! Employee directory use-case service.
//!
//! # Responsibility
//! - Provide the gated entry points the console layer calls.
//! - Apply the session guard before every record operation.
//!
//! # Invariants
//! - No record operation reaches the repository without an active session.
//! - A denied or failed operation changes neither session nor record state.

use crate::model::employee::{Employee, EmployeeId};
use crate::repo::employee_repo::{EmployeeRepository, RepoError};
use crate::session::{SessionError, SessionGate};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Failure surfaced to the console layer. Always advisory.
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceError {
    /// Session-gate failure from an explicit session operation.
    Session(SessionError),
    /// A record operation was attempted without an active session. Worded
    /// differently from a bare failed sign-out.
    SignInRequired,
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Session(err) => write!(f, "{err}"),
            Self::SignInRequired => write!(f, "Please sign in to perform this action."),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Session(err) => Some(err),
            Self::SignInRequired => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<SessionError> for ServiceError {
    fn from(value: SessionError) -> Self {
        Self::Session(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Use-case service combining the session gate and an employee repository.
pub struct DirectoryService<R: EmployeeRepository> {
    gate: SessionGate,
    repo: R,
}

impl<R: EmployeeRepository> DirectoryService<R> {
    /// Creates a service over a fresh session gate and the given repository.
    pub fn new(repo: R) -> Self {
        Self {
            gate: SessionGate::new(),
            repo,
        }
    }

    /// Registers an operator name.
    pub fn register(&mut self, username: &str) -> ServiceResult<()> {
        self.gate.register(username)?;
        info!("event=user_registered module=directory status=ok user={username}");
        Ok(())
    }

    /// Signs an operator in. Fails while any session is active.
    pub fn sign_in(&mut self, username: &str) -> ServiceResult<()> {
        self.gate.sign_in(username)?;
        info!("event=user_signed_in module=directory status=ok user={username}");
        Ok(())
    }

    /// Signs the active operator out and returns the name.
    pub fn sign_out(&mut self) -> ServiceResult<String> {
        let username = self.gate.sign_out()?;
        info!("event=user_signed_out module=directory status=ok user={username}");
        Ok(username)
    }

    /// Returns the active username, if any.
    pub fn active_user(&self) -> Option<&str> {
        self.gate.active_user()
    }

    /// Adds a record. Gated.
    pub fn add_employee(
        &mut self,
        name: &str,
        department: &str,
        salary: f64,
    ) -> ServiceResult<Employee> {
        self.require_signed_in("add_employee")?;
        let created = self.repo.add(name, department, salary)?;
        info!(
            "event=employee_added module=directory status=ok id={}",
            created.id
        );
        Ok(created)
    }

    /// Lists all records in insertion order. Gated.
    pub fn list_employees(&self) -> ServiceResult<&[Employee]> {
        self.require_signed_in("list_employees")?;
        Ok(self.repo.list_all())
    }

    /// Overwrites name/department/salary of an existing record. Gated.
    pub fn update_employee(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: f64,
    ) -> ServiceResult<Employee> {
        self.require_signed_in("update_employee")?;
        let updated = self.repo.update(id, name, department, salary)?;
        info!("event=employee_updated module=directory status=ok id={id}");
        Ok(updated)
    }

    /// Removes a record by id and returns it. Gated.
    pub fn remove_employee(&mut self, id: EmployeeId) -> ServiceResult<Employee> {
        self.require_signed_in("remove_employee")?;
        let removed = self.repo.remove(id)?;
        info!("event=employee_removed module=directory status=ok id={id}");
        Ok(removed)
    }

    /// Case-insensitive exact-match search on name. Gated.
    pub fn search_by_name(&self, name: &str) -> ServiceResult<Vec<Employee>> {
        self.require_signed_in("search_by_name")?;
        Ok(self.repo.search_by_name(name))
    }

    /// Case-insensitive exact-match filter on department. Gated.
    pub fn filter_by_department(&self, department: &str) -> ServiceResult<Vec<Employee>> {
        self.require_signed_in("filter_by_department")?;
        Ok(self.repo.filter_by_department(department))
    }

    /// Sum of salaries over all current records. Gated.
    pub fn total_salary(&self) -> ServiceResult<f64> {
        self.require_signed_in("total_salary")?;
        Ok(self.repo.total_salary())
    }

    fn require_signed_in(&self, operation: &str) -> ServiceResult<&str> {
        match self.gate.require_signed_in() {
            Ok(user) => Ok(user),
            Err(_) => {
                warn!("event=operation_denied module=directory status=denied op={operation}");
                Err(ServiceError::SignInRequired)
            }
        }
    }
}
