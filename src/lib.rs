//! Declarative per-property validation with failure accumulation.
//!
//! Rules are registered against a plain accessor function plus an explicit
//! property-name string, then compiled into a [`Validator`] that runs every
//! check in registration order and collects each violation instead of
//! stopping at the first one. Callers pick between a report-returning API
//! ([`Validator::validate`]) and a raising API ([`Validator::ensure_valid`])
//! that surfaces the failures grouped by property.
//!
//! # Examples
//!
//! ## Building and running a validator
//!
//! ```
//! use rulegate::{open_enum, Validator};
//!
//! open_enum! {
//!     enum Tier: i32 {
//!         FREE = 0,
//!         PRO = 1,
//!     }
//! }
//!
//! struct Signup {
//!     name: String,
//!     age: i32,
//!     tier: Tier,
//! }
//!
//! let mut builder = Validator::builder();
//! builder.rule_for("Name", |s: &Signup| s.name.clone()).not_empty(None);
//! builder.rule_for("Age", |s: &Signup| s.age).not_equal(0, None);
//! builder.rule_for("Tier", |s: &Signup| s.tier).is_in_enum(None);
//! let validator = builder.build();
//!
//! let bad = Signup { name: "  ".into(), age: 0, tier: Tier(9) };
//! let report = validator.validate(&bad);
//! assert!(!report.is_valid());
//! assert_eq!(report.failures().len(), 3);
//!
//! let error = validator.ensure_valid(&bad).unwrap_err();
//! assert_eq!(error.property_count(), 3);
//! ```
//!
//! ## Conditional rules
//!
//! ```
//! use rulegate::Validator;
//!
//! struct Order {
//!     express: bool,
//!     courier: String,
//! }
//!
//! let mut builder = Validator::builder();
//! builder
//!     .rule_for("Courier", |o: &Order| o.courier.clone())
//!     .not_empty(None)
//!     .when(|o| o.express);
//! let validator = builder.build();
//!
//! // The gate is consulted when rules run, so a standard order passes even
//! // with no courier assigned.
//! let standard = Order { express: false, courier: String::new() };
//! assert!(validator.validate(&standard).is_valid());
//!
//! let express = Order { express: true, courier: String::new() };
//! assert!(!validator.validate(&express).is_valid());
//! ```

/// Macros for declaring open enums and emptiness opt-ins
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Rule machinery: builders, checks, emptiness and enum-membership policies
pub mod rules;
/// Value types produced by a validation pass
pub mod types;
/// Validator construction and the validation entry points
pub mod validator;

pub use rules::{Emptiness, EnumCheck, EnumMembership, RuleBuilder};
#[cfg(feature = "async")]
pub use types::{AsyncValidationError, Cancelled};
pub use types::{FailureVec, ValidationError, ValidationFailure, ValidationReport};
pub use validator::{Validator, ValidatorBuilder};
