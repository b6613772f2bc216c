//! Per-property rule registration.

use core::cmp::Ordering;
use core::fmt::Display;
use std::sync::Arc;

use crate::rules::{Check, ConditionSlot, Emptiness, EnumCheck, EnumMembership, Selector};
use crate::types::ValidationFailure;

/// Chainable registration surface for one `(selector, property)` pair.
///
/// Obtained from [`ValidatorBuilder::rule_for`](crate::ValidatorBuilder::rule_for).
/// Every operation appends one check closure to the validator under
/// construction and hands the builder back for further chaining. The builder
/// holds a scoped `&mut` borrow of the rule list for the duration of the
/// registration call and is never retained past construction.
///
/// All checks consult the builder's gating condition at evaluation time: a
/// condition set to `false` for an instance short-circuits the check to
/// "pass" before any rule logic runs.
///
/// # Examples
///
/// ```
/// use rulegate::Validator;
///
/// struct Page {
///     number: i32,
///     size: i32,
/// }
///
/// let mut builder = Validator::builder();
/// builder
///     .rule_for("PageNumber", |p: &Page| p.number)
///     .not_equal(0, None)
///     .must(|p| p.number > 0, Some("PageNumber must be positive"));
/// builder.rule_for("PageSize", |p: &Page| p.size).not_equal(0, None);
/// let validator = builder.build();
///
/// assert!(validator.validate(&Page { number: 1, size: 10 }).is_valid());
/// ```
pub struct RuleBuilder<'v, T, P> {
    selector: Selector<T, P>,
    property: Arc<str>,
    rules: &'v mut Vec<Check<T>>,
    condition: ConditionSlot<T>,
}

impl<'v, T, P> RuleBuilder<'v, T, P>
where
    T: 'static,
    P: 'static,
{
    pub(crate) fn new(
        selector: Selector<T, P>,
        property: Arc<str>,
        rules: &'v mut Vec<Check<T>>,
    ) -> Self {
        Self { selector, property, rules, condition: ConditionSlot::new() }
    }

    fn push(&mut self, check: impl Fn(&T) -> Option<ValidationFailure> + Send + Sync + 'static) {
        self.rules.push(Box::new(check));
    }

    /// Fails when the selected value is empty under the type's
    /// [`Emptiness`] policy: blank strings, zero numerics, minimum
    /// date/time instants, nil identifiers, zero-valued enums, or a missing
    /// `Option`.
    pub fn not_empty(mut self, message: Option<&str>) -> Self
    where
        P: Emptiness,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message =
            message.map_or_else(|| format!("{property} must not be empty"), ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            if selector(instance).is_empty_value() {
                return Some(ValidationFailure::new(property.as_ref(), message.as_str()));
            }
            None
        });
        self
    }

    /// Fails when the selected value compares equal to `other` under the
    /// type's natural order.
    pub fn not_equal(mut self, other: P, message: Option<&str>) -> Self
    where
        P: PartialOrd + Display + Send + Sync,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message = message.map_or_else(
            || format!("{property} must not be equal to {other}"),
            ToOwned::to_owned,
        );
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            if selector(instance).partial_cmp(&other) == Some(Ordering::Equal) {
                return Some(ValidationFailure::new(property.as_ref(), message.as_str()));
            }
            None
        });
        self
    }

    /// Fails when the selected value does not compare equal to `other`.
    ///
    /// Incomparable values (such as NaN) never compare equal and therefore
    /// fail this rule.
    pub fn equal(mut self, other: P, message: Option<&str>) -> Self
    where
        P: PartialOrd + Display + Send + Sync,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message = message
            .map_or_else(|| format!("{property} must be equal to {other}"), ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            if selector(instance).partial_cmp(&other) != Some(Ordering::Equal) {
                return Some(ValidationFailure::new(property.as_ref(), message.as_str()));
            }
            None
        });
        self
    }

    /// Fails when the selected value is greater than the value
    /// `other_selector` produces from the same instance.
    pub fn less_than_or_equal_to(
        mut self,
        other_selector: impl Fn(&T) -> P + Send + Sync + 'static,
        message: Option<&str>,
    ) -> Self
    where
        P: PartialOrd + Display,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message = message.map(ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            let other = other_selector(instance);
            if selector(instance).partial_cmp(&other) == Some(Ordering::Greater) {
                let message = message
                    .clone()
                    .unwrap_or_else(|| format!("{property} must be ≤ {other}"));
                return Some(ValidationFailure::new(property.as_ref(), message));
            }
            None
        });
        self
    }

    /// Fails when the selected value is less than the value
    /// `other_selector` produces from the same instance.
    pub fn greater_than_or_equal_to(
        mut self,
        other_selector: impl Fn(&T) -> P + Send + Sync + 'static,
        message: Option<&str>,
    ) -> Self
    where
        P: PartialOrd + Display,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message = message.map(ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            let other = other_selector(instance);
            if selector(instance).partial_cmp(&other) == Some(Ordering::Less) {
                let message = message
                    .clone()
                    .unwrap_or_else(|| format!("{property} must be ≥ {other}"));
                return Some(ValidationFailure::new(property.as_ref(), message));
            }
            None
        });
        self
    }

    /// Fails when the property is not an enumeration type, or when the
    /// runtime value matches no declared member.
    ///
    /// The type probe runs first: declaring this rule on a non-enum kind
    /// reports "is not an enum type" as a plain failure rather than
    /// panicking. See [`EnumMembership`].
    pub fn is_in_enum(mut self, message: Option<&str>) -> Self
    where
        P: EnumMembership,
    {
        let selector = Arc::clone(&self.selector);
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let custom = message.map(ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            let message = match selector(instance).enum_check() {
                EnumCheck::Defined => return None,
                EnumCheck::NotEnum => custom
                    .clone()
                    .unwrap_or_else(|| format!("{property} is not an enum type")),
                EnumCheck::Undefined => custom
                    .clone()
                    .unwrap_or_else(|| format!("{property} must be a valid enum value")),
            };
            Some(ValidationFailure::new(property.as_ref(), message))
        });
        self
    }

    /// Fails when `predicate` rejects the whole instance.
    pub fn must(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: Option<&str>,
    ) -> Self {
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message =
            message.map_or_else(|| format!("{property} is not valid"), ToOwned::to_owned);
        self.push(move |instance| {
            if !condition.allows(instance) {
                return None;
            }
            if predicate(instance) {
                None
            } else {
                Some(ValidationFailure::new(property.as_ref(), message.as_str()))
            }
        });
        self
    }

    /// Sets the gating condition for every check on this builder.
    ///
    /// The condition is consulted when rules run, not when they are
    /// registered, so checks added before this call are gated too. Calling
    /// `when` again replaces the previous condition outright
    /// (last-write-wins).
    pub fn when(self, predicate: impl Fn(&T) -> bool + Send + Sync + 'static) -> Self {
        self.condition.replace(Arc::new(predicate));
        self
    }

    /// Sets the gating condition like [`when`](Self::when) and additionally
    /// registers a standalone check that fails with exactly `message`
    /// whenever the current condition evaluates false.
    ///
    /// The extra check reads the builder's condition slot, so a later
    /// [`when`](Self::when) on the same builder redirects it to the new
    /// condition.
    pub fn when_or_fail(
        mut self,
        predicate: impl Fn(&T) -> bool + Send + Sync + 'static,
        message: &str,
    ) -> Self {
        self.condition.replace(Arc::new(predicate));
        let property = Arc::clone(&self.property);
        let condition = self.condition.clone();
        let message = message.to_owned();
        self.push(move |instance| {
            if condition.allows(instance) {
                None
            } else {
                Some(ValidationFailure::new(property.as_ref(), message.as_str()))
            }
        });
        self
    }
}
