use chrono::Days;
use pretty_assertions::assert_eq;

use crate::common::{account_query_validator, AccountQuery, AccountStatus};

#[test]
fn test_all_rules_pass_returns_valid() {
    let validator = account_query_validator();
    let report = validator.validate(&AccountQuery::valid());
    assert!(report.is_valid());
    assert_eq!(report.failures().len(), 0);
}

#[test]
fn test_rule_count_matches_registration() {
    assert_eq!(account_query_validator().rule_count(), 7);
}

#[test]
fn test_empty_name_returns_invalid() {
    let validator = account_query_validator();
    let entity = AccountQuery { name: String::new(), ..AccountQuery::valid() };
    let report = validator.validate(&entity);
    assert!(!report.is_valid());
    assert!(report.iter().any(|f| f.property() == "Name"));
}

#[test]
fn test_zero_age_returns_invalid() {
    let validator = account_query_validator();
    let entity = AccountQuery { age: 0, ..AccountQuery::valid() };
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "Age"));
}

#[test]
fn test_start_date_after_end_date_returns_invalid() {
    let validator = account_query_validator();
    let mut entity = AccountQuery::valid();
    entity.start_date = entity.end_date.checked_add_days(Days::new(1)).unwrap();
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "StartDate"));
}

#[test]
fn test_end_date_before_start_date_returns_invalid() {
    let validator = account_query_validator();
    let mut entity = AccountQuery::valid();
    entity.end_date = entity.start_date.checked_sub_days(Days::new(1)).unwrap();
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "EndDate"));
}

#[test]
fn test_zero_page_number_returns_invalid() {
    let validator = account_query_validator();
    let entity = AccountQuery { page_number: 0, ..AccountQuery::valid() };
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "PageNumber"));
}

#[test]
fn test_zero_page_size_returns_invalid() {
    let validator = account_query_validator();
    let entity = AccountQuery { page_size: 0, ..AccountQuery::valid() };
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "PageSize"));
}

#[test]
fn test_undeclared_status_returns_invalid() {
    let validator = account_query_validator();
    let entity = AccountQuery { status: AccountStatus(99), ..AccountQuery::valid() };
    let report = validator.validate(&entity);
    assert!(report.iter().any(|f| f.property() == "Status"));
}

#[test]
fn test_failures_preserve_registration_order() {
    let validator = account_query_validator();
    let report = validator.validate(&AccountQuery::all_bad());
    let properties: Vec<&str> = report.iter().map(|f| f.property()).collect();
    assert_eq!(
        properties,
        ["Name", "Age", "PageNumber", "PageSize", "Status"]
    );
}

#[test]
fn test_revalidation_is_idempotent() {
    let validator = account_query_validator();
    let entity = AccountQuery::all_bad();
    let first = validator.validate(&entity);
    let second = validator.validate(&entity);
    assert_eq!(first, second);
}

#[test]
fn test_ensure_valid_passes_through_on_valid_instance() {
    let validator = account_query_validator();
    assert!(validator.ensure_valid(&AccountQuery::valid()).is_ok());
}

#[test]
fn test_ensure_valid_raises_grouped_error() {
    let validator = account_query_validator();
    let error = validator
        .ensure_valid(&AccountQuery::all_bad())
        .unwrap_err();
    assert_eq!(error.property_count(), 5);
    assert_eq!(
        error.messages_for("Name").unwrap(),
        ["Name must not be empty"]
    );
    assert!(error.messages_for("StartDate").is_none());
}

#[test]
fn test_validator_is_shareable_across_threads() {
    let validator = std::sync::Arc::new(account_query_validator());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = std::sync::Arc::clone(&validator);
            std::thread::spawn(move || {
                let report = validator.validate(&AccountQuery::all_bad());
                report.failures().len()
            })
        })
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 5);
    }
}
