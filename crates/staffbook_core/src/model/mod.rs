//! Domain model for the employee directory.
//!
//! # Responsibility
//! - Define the canonical data structures used by core business logic.
//!
//! # Invariants
//! - Every employee is identified by a stable `EmployeeId`.
//! - Ids are assigned by the repository and never reused.

pub mod employee;
