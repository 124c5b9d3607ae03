use outcome_rail::{
    invalid, not_found, sequence, service_failure, traverse, DomainError, DomainErrorKind,
    DomainOutcome, Outcome,
};

#[test]
fn test_invalid_constructor() {
    let err = DomainError::invalid("email", "must contain @");
    assert_eq!(err.kind(), DomainErrorKind::Validation);
    assert_eq!(err.field(), Some("email"));
    assert_eq!(err.message(), "must contain @");
    assert_eq!(err.to_string(), "email: must contain @");
}

#[test]
fn test_not_found_constructor() {
    let err = DomainError::not_found("user", 42);
    assert_eq!(err.kind(), DomainErrorKind::NotFound);
    assert_eq!(err.entity(), Some("user"));
    assert_eq!(err.to_string(), "user 42 not found");
}

#[test]
fn test_from_error_keeps_cause_text() {
    let io = std::io::Error::other("disk full");
    let err = DomainError::from_error("saving report", io);
    assert_eq!(err.kind(), DomainErrorKind::Service);
    assert_eq!(err.cause(), Some("disk full"));
    assert_eq!(err.to_string(), "saving report: disk full");
}

#[test]
fn test_service_constructor() {
    let err = DomainError::service("gateway unavailable");
    assert_eq!(err.kind(), DomainErrorKind::Service);
    assert_eq!(err.cause(), None);
    assert_eq!(err.to_string(), "gateway unavailable");
}

#[test]
fn test_domain_error_is_std_error() {
    fn assert_error<E: std::error::Error>() {}
    assert_error::<DomainError>();
}

#[test]
fn test_ensure_valid_passes_accepted_value_through() {
    let o: DomainOutcome<i32> = Outcome::success(10).ensure_valid(|n| *n > 0, "n", "positive");
    assert_eq!(o.into_value(), Some(10));
}

#[test]
fn test_ensure_valid_rejects_with_validation_error() {
    let o: DomainOutcome<i32> =
        Outcome::success(-1).ensure_valid(|n| *n > 0, "n", "must be positive");
    let err = o.into_error().unwrap();
    assert_eq!(err.kind(), DomainErrorKind::Validation);
    assert_eq!(err.field(), Some("n"));
}

#[test]
fn test_ensure_valid_passes_existing_failure_through() {
    let o: DomainOutcome<i32> = Outcome::failure(DomainError::service("down"))
        .ensure_valid(|_| panic!("predicate must not run on failure"), "n", "m");
    assert_eq!(o.into_error().unwrap().kind(), DomainErrorKind::Service);
}

#[test]
fn test_ensure_exists_rejects_with_not_found() {
    let rows: DomainOutcome<Vec<u64>> = Outcome::success(vec![]);
    let o = rows.ensure_exists(|r| !r.is_empty(), "user", 42);
    let err = o.into_error().unwrap();
    assert_eq!(err.kind(), DomainErrorKind::NotFound);
    assert_eq!(err.to_string(), "user 42 not found");
}

#[test]
fn test_constructor_macros() {
    let o: DomainOutcome<()> = invalid!("password", "must be at least {} characters", 8);
    let err = o.into_error().unwrap();
    assert_eq!(err.field(), Some("password"));
    assert_eq!(err.message(), "must be at least 8 characters");

    let o: DomainOutcome<()> = not_found!("order", "ord-7");
    assert_eq!(o.into_error().unwrap().to_string(), "order ord-7 not found");

    let o: DomainOutcome<()> = service_failure!("gateway timed out after {}ms", 3000);
    let err = o.into_error().unwrap();
    assert_eq!(err.kind(), DomainErrorKind::Service);
    assert_eq!(err.message(), "gateway timed out after 3000ms");
}

// Registration form checks used by the pipeline scenarios below.

struct Registration<'a> {
    email: &'a str,
    password: &'a str,
    name: &'a str,
}

fn check_email(r: &Registration) -> DomainOutcome<String> {
    Outcome::success(r.email.to_string())
        .ensure_valid(|e| e.contains('@'), "email", "must contain @")
}

fn check_password(r: &Registration) -> DomainOutcome<String> {
    Outcome::success(r.password.to_string()).ensure_valid(
        |p| p.len() >= 8,
        "password",
        "must be at least 8 characters",
    )
}

fn check_name(r: &Registration) -> DomainOutcome<String> {
    Outcome::success(r.name.to_string()).ensure_valid(|n| !n.is_empty(), "name", "required")
}

#[test]
fn test_registration_fail_fast_reports_first_field_only() {
    let form = Registration {
        email: "bad",
        password: "short",
        name: "Ada",
    };

    let checked = sequence(vec![
        check_email(&form),
        check_password(&form),
        check_name(&form),
    ]);

    let err = checked.into_error().unwrap();
    assert_eq!(err.field(), Some("email"));
}

#[test]
fn test_registration_traverse_reports_every_field() {
    let form = Registration {
        email: "bad",
        password: "short",
        name: "Ada",
    };

    let report = traverse(vec![
        check_email(&form),
        check_password(&form),
        check_name(&form),
    ]);

    let errors = report.into_error().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field(), Some("email"));
    assert_eq!(errors[1].field(), Some("password"));
}

#[test]
fn test_registration_valid_form_passes_both_disciplines() {
    let form = Registration {
        email: "ada@example.com",
        password: "longenough",
        name: "Ada",
    };

    let checks = vec![
        check_email(&form),
        check_password(&form),
        check_name(&form),
    ];

    assert!(sequence(checks.clone()).is_success());
    assert!(traverse(checks).is_success());
}

#[cfg(feature = "serde")]
#[test]
fn test_domain_error_serde_round_trip() {
    let err = DomainError::invalid("email", "must contain @");
    let json = serde_json::to_string(&err).unwrap();
    let back: DomainError = serde_json::from_str(&json).unwrap();
    assert_eq!(err, back);
}
