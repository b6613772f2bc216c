use core::fmt;
use std::error::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::FailureVec;

/// Aggregated, raisable form of a failed validation pass.
///
/// Failures are grouped by property name in order of first appearance;
/// messages inside a group keep their original relative order. Built only on
/// demand, when a raising entry point observes a non-empty report.
///
/// # Examples
///
/// ```
/// use rulegate::Validator;
///
/// struct Form {
///     name: String,
/// }
///
/// let mut builder = Validator::builder();
/// builder
///     .rule_for("Name", |f: &Form| f.name.clone())
///     .not_empty(None)
///     .must(|f| f.name.len() <= 8, Some("Name is too long"));
/// let validator = builder.build();
///
/// let error = validator
///     .ensure_valid(&Form { name: String::new() })
///     .unwrap_err();
/// assert_eq!(error.property_count(), 1);
/// assert_eq!(error.messages_for("Name").unwrap().len(), 1);
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    groups: Vec<(String, Vec<String>)>,
}

impl ValidationError {
    pub(crate) fn from_failures(failures: FailureVec) -> Self {
        let mut groups: Vec<(String, Vec<String>)> = Vec::new();
        for failure in failures {
            let (property, message) = failure.into_parts();
            match groups.iter_mut().find(|(name, _)| *name == property) {
                Some((_, messages)) => messages.push(message),
                None => groups.push((property, vec![message])),
            }
        }
        Self { groups }
    }

    /// Grouped view: `(property, messages)` pairs in first-appearance order.
    pub fn groups(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups
            .iter()
            .map(|(name, messages)| (name.as_str(), messages.as_slice()))
    }

    /// Messages recorded for `property`, in their original order.
    #[must_use]
    pub fn messages_for(&self, property: &str) -> Option<&[String]> {
        self.groups
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Number of distinct properties with at least one failure.
    #[must_use]
    #[inline]
    pub fn property_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of messages across all groups.
    #[must_use]
    pub fn total_messages(&self) -> usize {
        self.groups.iter().map(|(_, messages)| messages.len()).sum()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation failed: ")?;
        for (index, (property, messages)) in self.groups.iter().enumerate() {
            if index > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", property, messages.join(", "))?;
        }
        Ok(())
    }
}

impl Error for ValidationError {}

/// Signal returned by the async entry points when the caller's token was
/// cancelled before evaluation finished.
///
/// Kept distinct from [`ValidationError`]: a cancelled pass produced no
/// report, partial or otherwise.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cancelled;

#[cfg(feature = "async")]
impl fmt::Display for Cancelled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("validation cancelled")
    }
}

#[cfg(feature = "async")]
impl Error for Cancelled {}

/// Error surface of [`ensure_valid_async`](crate::Validator::ensure_valid_async):
/// either the instance failed validation, or the token cancelled the pass
/// before it could finish.
#[cfg(feature = "async")]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncValidationError {
    /// At least one rule failed; carries the full grouped failure set.
    Invalid(ValidationError),
    /// The cancellation token fired before evaluation completed.
    Cancelled(Cancelled),
}

#[cfg(feature = "async")]
impl fmt::Display for AsyncValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid(error) => fmt::Display::fmt(error, f),
            Self::Cancelled(cancelled) => fmt::Display::fmt(cancelled, f),
        }
    }
}

#[cfg(feature = "async")]
impl Error for AsyncValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(error) => Some(error),
            Self::Cancelled(cancelled) => Some(cancelled),
        }
    }
}

#[cfg(feature = "async")]
impl From<ValidationError> for AsyncValidationError {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Self::Invalid(error)
    }
}

#[cfg(feature = "async")]
impl From<Cancelled> for AsyncValidationError {
    #[inline]
    fn from(cancelled: Cancelled) -> Self {
        Self::Cancelled(cancelled)
    }
}
