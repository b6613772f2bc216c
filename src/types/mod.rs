//! Value types produced by a validation pass.
//!
//! A pass yields a [`ValidationReport`] holding zero or more
//! [`ValidationFailure`] records in rule-registration order. The raising
//! entry points convert a non-empty report into a [`ValidationError`] with
//! the failures grouped by property name.

use smallvec::SmallVec;

pub mod error;
pub mod failure;
pub mod report;

#[cfg(feature = "async")]
pub use error::{AsyncValidationError, Cancelled};
pub use error::ValidationError;
pub use failure::ValidationFailure;
pub use report::ValidationReport;

/// SmallVec-backed collection used for accumulating failures.
///
/// Inline storage for up to 4 failures keeps the common mostly-valid
/// pass off the heap.
pub type FailureVec = SmallVec<[ValidationFailure; 4]>;
