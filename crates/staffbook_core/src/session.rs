//! Session gate for operator registration and sign-in.
//!
//! # Responsibility
//! - Track the set of registered operator names.
//! - Enforce the single-active-session rule for the whole process.
//!
//! # Invariants
//! - `current_user`, when set, is always a member of `registered`.
//! - At most one session is active system-wide, regardless of username.
//! - Registrations are never removed for the lifetime of the process.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type SessionResult<T> = Result<T, SessionError>;

/// Session-gate failure. Every variant is advisory; none aborts the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Registering a name that is already in the registered set.
    AlreadyRegistered(String),
    /// Signing in with a name that was never registered.
    NotRegistered(String),
    /// Signing in while another session is active.
    SessionActive(String),
    /// Signing out, or running a gated operation, with no active session.
    NoActiveSession,
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyRegistered(_) => write!(f, "User already registered."),
            Self::NotRegistered(_) => write!(f, "User not found. Please register first."),
            Self::SessionActive(_) => {
                write!(f, "Another user is already signed in. Please sign out first.")
            }
            Self::NoActiveSession => write!(f, "No user is currently signed in."),
        }
    }
}

impl Error for SessionError {}

/// Registration set plus the single active session slot.
#[derive(Debug, Default)]
pub struct SessionGate {
    registered: BTreeSet<String>,
    current_user: Option<String>,
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a name to the registered set.
    ///
    /// # Errors
    /// - `AlreadyRegistered` when the name is already present; the set is
    ///   left unchanged.
    pub fn register(&mut self, username: &str) -> SessionResult<()> {
        if self.registered.contains(username) {
            return Err(SessionError::AlreadyRegistered(username.to_string()));
        }
        self.registered.insert(username.to_string());
        Ok(())
    }

    /// Activates a session for a registered name.
    ///
    /// # Errors
    /// - `NotRegistered` when the name is unknown.
    /// - `SessionActive` when any session is already active, including a
    ///   repeat sign-in by the same name.
    pub fn sign_in(&mut self, username: &str) -> SessionResult<()> {
        if !self.registered.contains(username) {
            return Err(SessionError::NotRegistered(username.to_string()));
        }
        if let Some(active) = &self.current_user {
            return Err(SessionError::SessionActive(active.clone()));
        }
        self.current_user = Some(username.to_string());
        Ok(())
    }

    /// Clears the active session and returns the signed-out name.
    ///
    /// # Errors
    /// - `NoActiveSession` when nothing is active.
    pub fn sign_out(&mut self) -> SessionResult<String> {
        self.current_user.take().ok_or(SessionError::NoActiveSession)
    }

    /// Returns the active username, if any.
    pub fn active_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Guard for gated operations.
    ///
    /// # Errors
    /// - `NoActiveSession` when nothing is active.
    pub fn require_signed_in(&self) -> SessionResult<&str> {
        self.active_user().ok_or(SessionError::NoActiveSession)
    }

    /// Number of registered names. Exposed for diagnostics and tests.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{SessionError, SessionGate};

    #[test]
    fn duplicate_registration_keeps_one_entry() {
        let mut gate = SessionGate::new();
        gate.register("alice").unwrap();

        let err = gate.register("alice").unwrap_err();
        assert_eq!(err, SessionError::AlreadyRegistered("alice".to_string()));
        assert_eq!(gate.registered_count(), 1);
    }

    #[test]
    fn sign_in_requires_registration() {
        let mut gate = SessionGate::new();
        let err = gate.sign_in("ghost").unwrap_err();
        assert_eq!(err, SessionError::NotRegistered("ghost".to_string()));
        assert!(gate.active_user().is_none());
    }

    #[test]
    fn second_sign_in_is_rejected_and_session_kept() {
        let mut gate = SessionGate::new();
        gate.register("alice").unwrap();
        gate.register("bob").unwrap();
        gate.sign_in("alice").unwrap();

        let err = gate.sign_in("bob").unwrap_err();
        assert_eq!(err, SessionError::SessionActive("alice".to_string()));
        assert_eq!(gate.active_user(), Some("alice"));
    }

    #[test]
    fn repeat_sign_in_by_same_name_is_rejected() {
        let mut gate = SessionGate::new();
        gate.register("alice").unwrap();
        gate.sign_in("alice").unwrap();
        assert!(matches!(
            gate.sign_in("alice"),
            Err(SessionError::SessionActive(_))
        ));
    }

    #[test]
    fn sign_out_returns_name_and_second_sign_out_fails() {
        let mut gate = SessionGate::new();
        gate.register("alice").unwrap();
        gate.sign_in("alice").unwrap();

        assert_eq!(gate.sign_out().unwrap(), "alice");
        assert_eq!(gate.sign_out().unwrap_err(), SessionError::NoActiveSession);
    }

    #[test]
    fn require_signed_in_guards_when_idle() {
        let gate = SessionGate::new();
        assert_eq!(
            gate.require_signed_in().unwrap_err(),
            SessionError::NoActiveSession
        );
    }
}
