use core::slice;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{FailureVec, ValidationError, ValidationFailure};

/// Outcome of one validation pass.
///
/// Holds every failure the pass produced, in the exact order their owning
/// checks were registered on the validator. A report with no failures is
/// valid; re-running the same validator over the same instance yields an
/// identical report.
///
/// # Examples
///
/// ```
/// use rulegate::{ValidationFailure, ValidationReport};
///
/// let report: ValidationReport = [
///     ValidationFailure::new("Name", "Name must not be empty"),
///     ValidationFailure::new("Age", "Age must not be equal to 0"),
/// ]
/// .into_iter()
/// .collect();
///
/// assert!(!report.is_valid());
/// assert_eq!(report.failures()[0].property(), "Name");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    failures: FailureVec,
}

impl ValidationReport {
    #[inline]
    pub(crate) fn from_failures(failures: FailureVec) -> Self {
        Self { failures }
    }

    /// Returns `true` when the pass produced no failures.
    #[must_use]
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failures in registration order.
    #[must_use]
    #[inline]
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// Iterates over the failures without consuming the report.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, ValidationFailure> {
        self.failures.iter()
    }

    /// Converts an invalid report into the grouped, raisable
    /// [`ValidationError`]; a valid report yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rulegate::ValidationReport;
    ///
    /// assert!(ValidationReport::default().into_error().is_none());
    /// ```
    #[must_use]
    pub fn into_error(self) -> Option<ValidationError> {
        if self.failures.is_empty() {
            None
        } else {
            Some(ValidationError::from_failures(self.failures))
        }
    }
}

impl FromIterator<ValidationFailure> for ValidationReport {
    fn from_iter<I: IntoIterator<Item = ValidationFailure>>(iter: I) -> Self {
        Self { failures: iter.into_iter().collect() }
    }
}

impl IntoIterator for ValidationReport {
    type Item = ValidationFailure;
    type IntoIter = smallvec::IntoIter<[ValidationFailure; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.failures.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a ValidationFailure;
    type IntoIter = slice::Iter<'a, ValidationFailure>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
