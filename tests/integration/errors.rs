use std::error::Error;

use rulegate::{ValidationFailure, ValidationReport, Validator};

fn grouped_error() -> rulegate::ValidationError {
    let mut builder = Validator::builder();
    builder
        .rule_for("P1", |v: &i32| *v)
        .must(|_| false, Some("E1"))
        .must(|_| false, Some("E2"));
    builder.rule_for("P2", |v: &i32| *v).must(|_| false, Some("E3"));
    builder.build().ensure_valid(&0).unwrap_err()
}

#[test]
fn test_failures_group_by_first_appearance() {
    let error = grouped_error();
    assert_eq!(error.property_count(), 2);
    assert_eq!(error.total_messages(), 3);
    assert_eq!(error.messages_for("P1").unwrap(), ["E1", "E2"]);
    assert_eq!(error.messages_for("P2").unwrap(), ["E3"]);

    let order: Vec<&str> = error.groups().map(|(name, _)| name).collect();
    assert_eq!(order, ["P1", "P2"]);
}

#[test]
fn test_error_display_lists_groups() {
    let rendered = grouped_error().to_string();
    assert_eq!(rendered, "validation failed: P1: E1, E2; P2: E3");
}

#[test]
fn test_error_implements_std_error() {
    let error = grouped_error();
    let dynamic: &dyn Error = &error;
    assert!(dynamic.to_string().contains("validation failed"));
}

#[test]
fn test_failure_display() {
    let failure = ValidationFailure::new("Name", "Name must not be empty");
    assert_eq!(failure.to_string(), "Name: Name must not be empty");
    let (property, message) = failure.into_parts();
    assert_eq!(property, "Name");
    assert_eq!(message, "Name must not be empty");
}

#[test]
fn test_report_collects_and_iterates() {
    let report: ValidationReport = [
        ValidationFailure::new("A", "first"),
        ValidationFailure::new("B", "second"),
    ]
    .into_iter()
    .collect();
    assert!(!report.is_valid());
    let messages: Vec<&str> = report.iter().map(|f| f.message()).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn test_valid_report_produces_no_error() {
    assert!(ValidationReport::default().into_error().is_none());
}

#[cfg(feature = "serde")]
#[test]
fn test_report_serde_round_trip() {
    let report: ValidationReport =
        [ValidationFailure::new("Name", "Name must not be empty")]
            .into_iter()
            .collect();
    let serialized = serde_json::to_string(&report).unwrap();
    let deserialized: ValidationReport = serde_json::from_str(&serialized).unwrap();
    assert_eq!(report, deserialized);
}
