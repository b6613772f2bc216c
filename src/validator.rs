//! Validator construction and the validation entry points.

use core::fmt;
use std::sync::Arc;

use tracing::{debug, trace};

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::rules::{Check, RuleBuilder, Selector};
#[cfg(feature = "async")]
use crate::types::{AsyncValidationError, Cancelled};
use crate::types::{FailureVec, ValidationError, ValidationReport};

/// Ordered, frozen collection of compiled checks for one object type.
///
/// Built once through [`Validator::builder`] and reused across calls. After
/// construction the rule list is read-only, so a validator can be shared and
/// invoked concurrently against different instances; checks only read the
/// instance and compare values.
///
/// Evaluation is stateless between calls: validating the same instance
/// twice yields identical reports.
///
/// # Examples
///
/// ```
/// use rulegate::Validator;
///
/// struct Booking {
///     guest: String,
///     nights: u32,
/// }
///
/// let mut builder = Validator::builder();
/// builder.rule_for("Guest", |b: &Booking| b.guest.clone()).not_empty(None);
/// builder.rule_for("Nights", |b: &Booking| b.nights).not_equal(0, None);
/// let validator = builder.build();
///
/// let report = validator.validate(&Booking { guest: "Ada".into(), nights: 2 });
/// assert!(report.is_valid());
///
/// let report = validator.validate(&Booking { guest: String::new(), nights: 0 });
/// assert_eq!(report.failures().len(), 2);
/// ```
#[must_use]
pub struct Validator<T> {
    rules: Vec<Check<T>>,
}

impl<T> Validator<T> {
    /// Starts an empty rule set.
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder { rules: Vec::new() }
    }

    /// Number of registered checks.
    #[must_use]
    #[inline]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Runs every check against `instance`, in registration order, and
    /// collects the failures.
    ///
    /// No failure suppresses later checks; the report preserves the exact
    /// order rules were registered.
    pub fn validate(&self, instance: &T) -> ValidationReport {
        let mut failures = FailureVec::new();
        for check in &self.rules {
            if let Some(failure) = check(instance) {
                trace!(
                    property = failure.property(),
                    message = failure.message(),
                    "rule failed"
                );
                failures.push(failure);
            }
        }
        debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "validation pass complete"
        );
        ValidationReport::from_failures(failures)
    }

    /// Like [`validate`](Self::validate), but surfaces a non-empty result
    /// through the error channel as a grouped [`ValidationError`].
    ///
    /// # Errors
    ///
    /// Returns the grouped failure set when at least one rule failed.
    pub fn ensure_valid(&self, instance: &T) -> Result<(), ValidationError> {
        match self.validate(instance).into_error() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "async")]
impl<T> Validator<T> {
    /// Cancellation-aware counterpart of [`validate`](Self::validate).
    ///
    /// Checks run sequentially with `token` consulted before each one, so a
    /// long pass inside a cooperatively scheduled caller can be abandoned
    /// early. With no cancellation the report is identical to the
    /// synchronous one, failure for failure.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] when the token fires before or during
    /// evaluation; a partial report is never produced.
    pub async fn validate_async(
        &self,
        instance: &T,
        token: &CancellationToken,
    ) -> Result<ValidationReport, Cancelled> {
        if token.is_cancelled() {
            debug!("validation pass cancelled before evaluation");
            return Err(Cancelled);
        }
        let mut failures = FailureVec::new();
        for check in &self.rules {
            if token.is_cancelled() {
                debug!(rules = self.rules.len(), "validation pass cancelled");
                return Err(Cancelled);
            }
            if let Some(failure) = check(instance) {
                trace!(
                    property = failure.property(),
                    message = failure.message(),
                    "rule failed"
                );
                failures.push(failure);
            }
        }
        debug!(
            rules = self.rules.len(),
            failures = failures.len(),
            "validation pass complete"
        );
        Ok(ValidationReport::from_failures(failures))
    }

    /// Cancellation-aware counterpart of [`ensure_valid`](Self::ensure_valid).
    ///
    /// # Errors
    ///
    /// Returns [`AsyncValidationError::Cancelled`] when the token fires, or
    /// [`AsyncValidationError::Invalid`] when at least one rule failed.
    pub async fn ensure_valid_async(
        &self,
        instance: &T,
        token: &CancellationToken,
    ) -> Result<(), AsyncValidationError> {
        let report = self.validate_async(instance, token).await?;
        match report.into_error() {
            Some(error) => Err(AsyncValidationError::Invalid(error)),
            None => Ok(()),
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("rules", &self.rules.len())
            .finish()
    }
}

/// Accumulates checks while a validator is under construction - the only
/// phase in which the rule list is writable.
///
/// Each [`rule_for`](Self::rule_for) call grants a [`RuleBuilder`] scoped
/// write access to the list; [`build`](Self::build) freezes it. Registration
/// order is evaluation order.
#[must_use]
pub struct ValidatorBuilder<T> {
    rules: Vec<Check<T>>,
}

impl<T: 'static> ValidatorBuilder<T> {
    /// Opens a [`RuleBuilder`] for one property.
    ///
    /// `selector` is a plain accessor from the instance to the property
    /// value; `property` is the explicit name failures will report.
    /// Selectors are expected to be pure: the same instance must produce
    /// the same value for the duration of a pass.
    pub fn rule_for<P: 'static>(
        &mut self,
        property: &str,
        selector: impl Fn(&T) -> P + Send + Sync + 'static,
    ) -> RuleBuilder<'_, T, P> {
        let selector: Selector<T, P> = Arc::new(selector);
        RuleBuilder::new(selector, Arc::from(property), &mut self.rules)
    }

    /// Freezes the rule list into a [`Validator`].
    pub fn build(self) -> Validator<T> {
        Validator { rules: self.rules }
    }
}

impl<T: 'static> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Validator::builder()
    }
}
