//! Open-enum membership checks behind
//! [`RuleBuilder::is_in_enum`](crate::RuleBuilder::is_in_enum).

/// Outcome of probing a property value for enum membership.
///
/// The type probe precedes the membership probe: `is_in_enum` reports
/// [`NotEnum`](Self::NotEnum) before it ever looks at declared members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnumCheck {
    /// The value is one of the type's declared members.
    Defined,
    /// The type is an enumeration, but the value matches no declared member.
    Undefined,
    /// The property type is not an enumeration at all.
    NotEnum,
}

/// Membership probe used by `is_in_enum`.
///
/// Enumerations declared through [`open_enum!`](crate::open_enum) get an
/// implementation for free. Plain integral and string kinds implement this
/// via [`not_an_enum!`](crate::not_an_enum) and report
/// [`EnumCheck::NotEnum`], which `is_in_enum` deliberately turns into a
/// validation failure rather than a panic.
///
/// # Examples
///
/// ```
/// use rulegate::{open_enum, EnumCheck, EnumMembership};
///
/// open_enum! {
///     enum Color: i32 {
///         RED = 1,
///         BLUE = 2,
///     }
/// }
///
/// assert_eq!(Color::RED.enum_check(), EnumCheck::Defined);
/// assert_eq!(Color(7).enum_check(), EnumCheck::Undefined);
/// assert_eq!(42_i32.enum_check(), EnumCheck::NotEnum);
/// ```
pub trait EnumMembership {
    /// Probes the value for membership in its declared enumeration.
    fn enum_check(&self) -> EnumCheck;
}

impl<E: EnumMembership> EnumMembership for Option<E> {
    /// A missing value can never be a declared member.
    fn enum_check(&self) -> EnumCheck {
        match self {
            Some(value) => value.enum_check(),
            None => EnumCheck::Undefined,
        }
    }
}

crate::not_an_enum!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, String, &str,
);
