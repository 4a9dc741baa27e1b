//! Employee repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide stable CRUD and query APIs over the employee record set.
//! - Own id assignment: sequential from 1, monotonic, never reused.
//!
//! # Invariants
//! - Write paths must call `Employee::validate()` before mutating state.
//! - A failed operation leaves the record set and the id counter untouched.
//! - Records are kept and returned in insertion order.

use crate::model::employee::{Employee, EmployeeId, EmployeeValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for employee mutations and lookups.
#[derive(Debug, Clone, PartialEq)]
pub enum RepoError {
    Validation(EmployeeValidationError),
    NotFound(EmployeeId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "Employee with ID {id} not found."),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<EmployeeValidationError> for RepoError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for employee record operations.
pub trait EmployeeRepository {
    /// Creates a record with the next sequential id and returns it.
    fn add(&mut self, name: &str, department: &str, salary: f64) -> RepoResult<Employee>;
    /// Returns one record by id, if present.
    fn get(&self, id: EmployeeId) -> Option<&Employee>;
    /// Returns all records in insertion order.
    fn list_all(&self) -> &[Employee];
    /// Overwrites name/department/salary of an existing record in place.
    /// The id never changes.
    fn update(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: f64,
    ) -> RepoResult<Employee>;
    /// Deletes a record by id and returns the removed record.
    fn remove(&mut self, id: EmployeeId) -> RepoResult<Employee>;
    /// Case-insensitive exact-match filter on name, original order.
    fn search_by_name(&self, name: &str) -> Vec<Employee>;
    /// Case-insensitive exact-match filter on department, original order.
    fn filter_by_department(&self, department: &str) -> Vec<Employee>;
    /// Sum of salaries across all current records. Zero when empty.
    fn total_salary(&self) -> f64;
}

/// In-memory employee repository.
///
/// Holds the whole record set for the lifetime of the process; nothing is
/// persisted. Removals leave a gap in the id sequence on purpose.
#[derive(Debug)]
pub struct MemoryEmployeeRepository {
    employees: Vec<Employee>,
    next_id: EmployeeId,
}

impl Default for MemoryEmployeeRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryEmployeeRepository {
    pub fn new() -> Self {
        Self {
            employees: Vec::new(),
            // Id sequence starts at 1; 0 is never a valid id.
            next_id: 1,
        }
    }

    fn position(&self, id: EmployeeId) -> Option<usize> {
        // Ids are unique, so first match is the only match.
        self.employees.iter().position(|e| e.id == id)
    }
}

impl EmployeeRepository for MemoryEmployeeRepository {
    fn add(&mut self, name: &str, department: &str, salary: f64) -> RepoResult<Employee> {
        let employee = Employee::new(self.next_id, name, department, salary);
        employee.validate()?;

        // Counter advances only after validation so a rejected add does not
        // burn an id.
        self.next_id += 1;
        self.employees.push(employee.clone());
        Ok(employee)
    }

    fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.position(id).map(|index| &self.employees[index])
    }

    fn list_all(&self) -> &[Employee] {
        &self.employees
    }

    fn update(
        &mut self,
        id: EmployeeId,
        name: &str,
        department: &str,
        salary: f64,
    ) -> RepoResult<Employee> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;

        let updated = Employee::new(id, name, department, salary);
        updated.validate()?;

        self.employees[index] = updated.clone();
        Ok(updated)
    }

    fn remove(&mut self, id: EmployeeId) -> RepoResult<Employee> {
        let index = self.position(id).ok_or(RepoError::NotFound(id))?;
        Ok(self.employees.remove(index))
    }

    fn search_by_name(&self, name: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| e.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    fn filter_by_department(&self, department: &str) -> Vec<Employee> {
        self.employees
            .iter()
            .filter(|e| e.department.eq_ignore_ascii_case(department))
            .cloned()
            .collect()
    }

    fn total_salary(&self) -> f64 {
        self.employees.iter().map(|e| e.salary).sum()
    }
}
