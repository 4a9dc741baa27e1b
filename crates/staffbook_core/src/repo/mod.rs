//! Repository layer abstractions and the in-memory implementation.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts for employee records.
//! - Keep storage details out of service/business orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `Employee::validate()` before mutating.
//! - Repository APIs return semantic errors (`NotFound`) rather than
//!   panicking on missing ids.

pub mod employee_repo;
