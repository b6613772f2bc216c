use std::error::Error;

use rulegate::{AsyncValidationError, Cancelled};
use tokio_util::sync::CancellationToken;

use crate::common::{account_query_validator, AccountQuery};

#[tokio::test]
async fn test_async_report_matches_sync_report() {
    let validator = account_query_validator();
    let entity = AccountQuery::all_bad();
    let sync_report = validator.validate(&entity);
    let async_report = validator
        .validate_async(&entity, &CancellationToken::new())
        .await
        .unwrap();
    assert_eq!(sync_report, async_report);
}

#[tokio::test]
async fn test_cancelled_token_never_yields_a_report() {
    let validator = account_query_validator();
    let token = CancellationToken::new();
    token.cancel();
    let outcome = validator.validate_async(&AccountQuery::valid(), &token).await;
    assert_eq!(outcome, Err(Cancelled));
}

#[tokio::test]
async fn test_ensure_valid_async_passes_on_valid_instance() {
    let validator = account_query_validator();
    let outcome = validator
        .ensure_valid_async(&AccountQuery::valid(), &CancellationToken::new())
        .await;
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn test_ensure_valid_async_raises_grouped_error() {
    let validator = account_query_validator();
    let error = validator
        .ensure_valid_async(&AccountQuery::all_bad(), &CancellationToken::new())
        .await
        .unwrap_err();
    match error {
        AsyncValidationError::Invalid(invalid) => {
            assert_eq!(invalid.property_count(), 5);
        }
        AsyncValidationError::Cancelled(_) => panic!("expected validation failures"),
    }
}

#[tokio::test]
async fn test_ensure_valid_async_distinguishes_cancellation() {
    let validator = account_query_validator();
    let token = CancellationToken::new();
    token.cancel();
    let error = validator
        .ensure_valid_async(&AccountQuery::all_bad(), &token)
        .await
        .unwrap_err();
    assert_eq!(error, AsyncValidationError::Cancelled(Cancelled));
    assert_eq!(error.to_string(), "validation cancelled");
    assert!(error.source().is_some());
}
