//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate session-gate and repository calls into use-case APIs.
//! - Keep the console layer decoupled from storage and session details.

pub mod directory_service;
