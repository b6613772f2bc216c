use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One `(property, message)` violation record.
///
/// Created once per violated check and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use rulegate::ValidationFailure;
///
/// let failure = ValidationFailure::new("Name", "Name must not be empty");
/// assert_eq!(failure.property(), "Name");
/// assert_eq!(failure.message(), "Name must not be empty");
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationFailure {
    property: String,
    message: String,
}

impl ValidationFailure {
    /// Creates a failure record for `property` with `message`.
    #[inline]
    pub fn new(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self { property: property.into(), message: message.into() }
    }

    /// Name of the property that violated its rule.
    #[must_use]
    #[inline]
    pub fn property(&self) -> &str {
        &self.property
    }

    /// Human-readable description of the violation.
    #[must_use]
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Splits the record into its `(property, message)` parts.
    #[must_use]
    #[inline]
    pub fn into_parts(self) -> (String, String) {
        (self.property, self.message)
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.property, self.message)
    }
}
