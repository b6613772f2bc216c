//! Type-directed emptiness policy behind
//! [`RuleBuilder::not_empty`](crate::RuleBuilder::not_empty).

use std::borrow::Cow;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// Closed policy table deciding what "empty" means per semantic kind.
///
/// `not_empty` fails exactly when [`is_empty_value`](Self::is_empty_value)
/// returns `true`:
///
/// - strings: empty or whitespace-only
/// - integers, floats, decimals: exactly zero
/// - date/time values: the type's minimum representable instant
/// - unique identifiers: the all-zero (nil) identifier
/// - open enums declared via [`open_enum!`](crate::open_enum): an underlying
///   value of zero
/// - `Option<V>`: `None`, or a present value that is itself empty
///
/// Kinds with no meaningful emptiness opt in through
/// [`never_empty!`](crate::never_empty) and always pass.
///
/// # Examples
///
/// ```
/// use rulegate::Emptiness;
///
/// assert!("   ".is_empty_value());
/// assert!(0_i64.is_empty_value());
/// assert!(!"Ada".to_string().is_empty_value());
/// assert!(Option::<i32>::None.is_empty_value());
/// ```
pub trait Emptiness {
    /// Returns `true` when the value counts as empty.
    fn is_empty_value(&self) -> bool;
}

impl Emptiness for String {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for &str {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

impl Emptiness for Cow<'_, str> {
    fn is_empty_value(&self) -> bool {
        self.trim().is_empty()
    }
}

macro_rules! zero_is_empty {
    ($($ty:ty => $zero:expr),+ $(,)?) => {
        $(
            impl Emptiness for $ty {
                fn is_empty_value(&self) -> bool {
                    *self == $zero
                }
            }
        )+
    };
}

zero_is_empty! {
    i8 => 0, i16 => 0, i32 => 0, i64 => 0, i128 => 0, isize => 0,
    u8 => 0, u16 => 0, u32 => 0, u64 => 0, u128 => 0, usize => 0,
}

// Exact comparison is intentional: only a true zero counts as empty.
#[allow(clippy::float_cmp)]
impl Emptiness for f32 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

#[allow(clippy::float_cmp)]
impl Emptiness for f64 {
    fn is_empty_value(&self) -> bool {
        *self == 0.0
    }
}

impl Emptiness for Decimal {
    fn is_empty_value(&self) -> bool {
        self.is_zero()
    }
}

impl Emptiness for NaiveDateTime {
    fn is_empty_value(&self) -> bool {
        *self == NaiveDateTime::MIN
    }
}

impl Emptiness for NaiveDate {
    fn is_empty_value(&self) -> bool {
        *self == NaiveDate::MIN
    }
}

impl Emptiness for DateTime<Utc> {
    fn is_empty_value(&self) -> bool {
        *self == DateTime::<Utc>::MIN_UTC
    }
}

impl Emptiness for Uuid {
    fn is_empty_value(&self) -> bool {
        self.is_nil()
    }
}

impl<V: Emptiness> Emptiness for Option<V> {
    fn is_empty_value(&self) -> bool {
        match self {
            Some(value) => value.is_empty_value(),
            None => true,
        }
    }
}

// Kinds the policy table does not recognize are never empty.
crate::never_empty!(bool, char);
