//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its validation rules.
//! - Own the textual rendering of a single record.
//!
//! # Invariants
//! - `id` is stable for the record lifetime and never reused for another
//!   employee.
//! - `salary` is a finite, non-negative amount.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
/// Assigned sequentially by the repository, starting at 1.
pub type EmployeeId = u32;

/// Canonical employee record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable id used for update/remove lookups. Immutable after creation.
    pub id: EmployeeId,
    /// Display name. Matched case-insensitively by name search.
    pub name: String,
    /// Department label. Matched case-insensitively by department filter.
    pub department: String,
    /// Salary amount. Must be finite and non-negative.
    pub salary: f64,
}

impl Employee {
    /// Builds a record with a repository-assigned id.
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            department: department.into(),
            salary,
        }
    }

    /// Checks model-level invariants.
    ///
    /// # Errors
    /// - `NegativeSalary` when `salary < 0`.
    /// - `NonFiniteSalary` when `salary` is NaN or infinite.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        if !self.salary.is_finite() {
            return Err(EmployeeValidationError::NonFiniteSalary);
        }
        if self.salary < 0.0 {
            return Err(EmployeeValidationError::NegativeSalary {
                salary: self.salary,
            });
        }
        Ok(())
    }
}

impl Display for Employee {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Employee ID: {}, Name: {}, Department: {}, Salary: ${:.2}",
            self.id, self.name, self.department, self.salary
        )
    }
}

/// Invariant violation detected before a write is accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeValidationError {
    NegativeSalary { salary: f64 },
    NonFiniteSalary,
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeSalary { salary } => {
                write!(f, "salary must be non-negative, got {salary}")
            }
            Self::NonFiniteSalary => write!(f, "salary must be a finite number"),
        }
    }
}

impl Error for EmployeeValidationError {}
