//! Rule machinery: check closures, property selectors, and gating conditions.
//!
//! A registered rule compiles down to a [`Check`] closure owned by exactly
//! one validator. Checks are appended through a [`RuleBuilder`] during
//! construction and never mutated afterwards, which is what makes concurrent
//! validation safe.

use std::sync::{Arc, PoisonError, RwLock};

use crate::types::ValidationFailure;

pub mod builder;
pub mod empty;
pub mod enums;

pub use builder::RuleBuilder;
pub use empty::Emptiness;
pub use enums::{EnumCheck, EnumMembership};

/// Runnable form of one registered rule: maps an instance to an optional
/// failure.
pub type Check<T> = Box<dyn Fn(&T) -> Option<ValidationFailure> + Send + Sync>;

/// Shared property accessor, cloned into every check closure built for the
/// property.
pub type Selector<T, P> = Arc<dyn Fn(&T) -> P + Send + Sync>;

/// Gating predicate set via [`RuleBuilder::when`].
pub type Condition<T> = Arc<dyn Fn(&T) -> bool + Send + Sync>;

/// One condition slot per `rule_for` call, shared between the builder and
/// the check closures it registers.
///
/// The slot is written only while the validator is under construction and
/// read at evaluation time, so a condition set (or replaced) after some
/// checks were already registered still gates those checks. Replacement is
/// last-write-wins.
pub(crate) struct ConditionSlot<T>(Arc<RwLock<Option<Condition<T>>>>);

impl<T> ConditionSlot<T> {
    pub(crate) fn new() -> Self {
        Self(Arc::new(RwLock::new(None)))
    }

    /// Installs `condition`, discarding any previous one.
    pub(crate) fn replace(&self, condition: Condition<T>) {
        *self.0.write().unwrap_or_else(PoisonError::into_inner) = Some(condition);
    }

    /// Returns `true` when no condition is set or the current condition
    /// holds for `instance`.
    pub(crate) fn allows(&self, instance: &T) -> bool {
        match &*self.0.read().unwrap_or_else(PoisonError::into_inner) {
            Some(condition) => condition(instance),
            None => true,
        }
    }
}

impl<T> Clone for ConditionSlot<T> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}
