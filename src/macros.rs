//! Macros for declaring open enums and opting types into the rule traits.
//!
//! - [`macro@crate::open_enum`] - Declares an open integral enumeration: a
//!   transparent newtype with named member constants, wired into
//!   [`EnumMembership`](crate::EnumMembership) and
//!   [`Emptiness`](crate::Emptiness).
//! - [`macro@crate::not_an_enum`] - Marks kinds that are not enumerations,
//!   so `is_in_enum` on such a property reports "is not an enum type" as a
//!   failure instead of being unrepresentable.
//! - [`macro@crate::never_empty`] - Opts a type into the emptiness policy
//!   with "never empty" semantics (always passes `not_empty`).

/// Declares an open integral enumeration.
///
/// Open means any raw value of the underlying type is representable, the
/// way external inputs actually arrive; membership is checked at validation
/// time instead of being enforced by construction. The macro generates:
///
/// - a transparent newtype with a public raw field and one associated
///   constant per declared member,
/// - [`EnumMembership`](crate::EnumMembership): defined iff the raw value
///   matches a declared member,
/// - [`Emptiness`](crate::Emptiness): empty iff the raw value is zero,
/// - `Display`: the member name, or `Name(raw)` for undeclared values.
///
/// # Examples
///
/// ```
/// use rulegate::{open_enum, EnumCheck, EnumMembership};
///
/// open_enum! {
///     /// Publication state of a post.
///     pub enum PostState: i32 {
///         DRAFT = 0,
///         PUBLISHED = 1,
///         ARCHIVED = 2,
///     }
/// }
///
/// assert_eq!(PostState::PUBLISHED.enum_check(), EnumCheck::Defined);
/// assert_eq!(PostState(99).enum_check(), EnumCheck::Undefined);
/// assert_eq!(PostState::ARCHIVED.to_string(), "ARCHIVED");
/// assert_eq!(PostState(99).to_string(), "PostState(99)");
/// ```
#[macro_export]
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident : $repr:ty {
            $(
                $(#[$member_meta:meta])*
                $member:ident = $value:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis struct $name(pub $repr);

        impl $name {
            $(
                $(#[$member_meta])*
                $vis const $member: Self = Self($value);
            )+

            /// Raw underlying value.
            #[must_use]
            $vis const fn value(self) -> $repr {
                self.0
            }
        }

        impl $crate::EnumMembership for $name {
            fn enum_check(&self) -> $crate::EnumCheck {
                match self.0 {
                    $($value)|+ => $crate::EnumCheck::Defined,
                    _ => $crate::EnumCheck::Undefined,
                }
            }
        }

        impl $crate::Emptiness for $name {
            fn is_empty_value(&self) -> bool {
                self.0 == 0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                match self.0 {
                    $($value => f.write_str(::core::stringify!($member)),)+
                    other => ::core::write!(f, "{}({})", ::core::stringify!($name), other),
                }
            }
        }
    };
}

/// Implements [`EnumMembership`](crate::EnumMembership) reporting
/// [`EnumCheck::NotEnum`](crate::EnumCheck::NotEnum) for each listed type.
///
/// Registering `is_in_enum` on such a property always fails with
/// "is not an enum type" - the one intentional case where a type mistake is
/// reported as a validation failure instead of propagating.
///
/// # Examples
///
/// ```
/// use rulegate::{not_an_enum, EnumCheck, EnumMembership};
///
/// struct Opaque(u8);
/// not_an_enum!(Opaque);
///
/// assert_eq!(Opaque(3).enum_check(), EnumCheck::NotEnum);
/// ```
#[macro_export]
macro_rules! not_an_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::EnumMembership for $ty {
                fn enum_check(&self) -> $crate::EnumCheck {
                    $crate::EnumCheck::NotEnum
                }
            }
        )+
    };
}

/// Implements [`Emptiness`](crate::Emptiness) with "never empty" semantics
/// for each listed type, the default for kinds the policy table does not
/// recognize.
///
/// # Examples
///
/// ```
/// use rulegate::{never_empty, Emptiness};
///
/// struct Flag(bool);
/// never_empty!(Flag);
///
/// assert!(!Flag(false).is_empty_value());
/// ```
#[macro_export]
macro_rules! never_empty {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::Emptiness for $ty {
                fn is_empty_value(&self) -> bool {
                    false
                }
            }
        )+
    };
}
