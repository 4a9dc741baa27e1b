use staffbook_core::{
    DirectoryService, MemoryEmployeeRepository, ServiceError, SessionError,
};

fn service() -> DirectoryService<MemoryEmployeeRepository> {
    DirectoryService::new(MemoryEmployeeRepository::new())
}

#[test]
fn duplicate_registration_is_reported_and_noops() {
    let mut service = service();
    service.register("alice").unwrap();

    let err = service.register("alice").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Session(SessionError::AlreadyRegistered("alice".to_string()))
    );

    // The first registration still works for sign-in.
    service.sign_in("alice").unwrap();
    assert_eq!(service.active_user(), Some("alice"));
}

#[test]
fn unregistered_sign_in_never_activates_a_session() {
    let mut service = service();
    let err = service.sign_in("ghost").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Session(SessionError::NotRegistered("ghost".to_string()))
    );
    assert!(service.active_user().is_none());
}

#[test]
fn conflicting_sign_in_keeps_the_original_session() {
    let mut service = service();
    service.register("alice").unwrap();
    service.register("bob").unwrap();
    service.sign_in("alice").unwrap();

    let err = service.sign_in("bob").unwrap_err();
    assert_eq!(
        err,
        ServiceError::Session(SessionError::SessionActive("alice".to_string()))
    );
    assert_eq!(service.active_user(), Some("alice"));
}

#[test]
fn sign_out_clears_the_session_and_reports_the_name() {
    let mut service = service();
    service.register("alice").unwrap();
    service.sign_in("alice").unwrap();

    assert_eq!(service.sign_out().unwrap(), "alice");
    assert!(service.active_user().is_none());

    let err = service.sign_out().unwrap_err();
    assert_eq!(err, ServiceError::Session(SessionError::NoActiveSession));
}

#[test]
fn sign_out_frees_the_slot_for_another_user() {
    let mut service = service();
    service.register("alice").unwrap();
    service.register("bob").unwrap();

    service.sign_in("alice").unwrap();
    service.sign_out().unwrap();
    service.sign_in("bob").unwrap();
    assert_eq!(service.active_user(), Some("bob"));
}

#[test]
fn gated_error_renders_the_sign_in_advisory() {
    let service = service();
    let err = service.total_salary().unwrap_err();
    assert_eq!(err.to_string(), "Please sign in to perform this action.");
}
