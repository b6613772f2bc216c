//! Convenience re-exports for common usage patterns.
//!
//! Import everything with:
//!
//! ```
//! use rulegate::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`open_enum!`], [`not_an_enum!`], [`never_empty!`]
//! - **Types**: [`Validator`], [`ValidatorBuilder`], [`RuleBuilder`],
//!   [`ValidationReport`], [`ValidationFailure`], [`ValidationError`]
//! - **Traits**: [`Emptiness`], [`EnumMembership`]
//!
//! # Examples
//!
//! ```
//! use rulegate::prelude::*;
//!
//! struct Profile {
//!     handle: String,
//! }
//!
//! let mut builder = Validator::builder();
//! builder.rule_for("Handle", |p: &Profile| p.handle.clone()).not_empty(None);
//! let validator = builder.build();
//!
//! assert!(validator.ensure_valid(&Profile { handle: "ada".into() }).is_ok());
//! ```

// Macros
pub use crate::{never_empty, not_an_enum, open_enum};

// Core types
pub use crate::types::{ValidationError, ValidationFailure, ValidationReport};
#[cfg(feature = "async")]
pub use crate::types::{AsyncValidationError, Cancelled};

// Builders
pub use crate::rules::RuleBuilder;
pub use crate::validator::{Validator, ValidatorBuilder};

// Traits
pub use crate::rules::{Emptiness, EnumCheck, EnumMembership};
