//! Closed enumerations mapped from CloudStack wire strings.
//!
//! Every enumeration has a fixed set of variants, each named by an upper-underscore
//! identifier, plus one fallback variant that absorbs values the client does not
//! know about. Parsing never fails on present input: the remote API is free to grow
//! new values without breaking older clients.

use std::fmt;

use crate::case::CaseFormat;
use crate::error::DomainError;

/// A closed enumeration decoded from a CloudStack string field
pub trait WireEnum: Copy + Eq + fmt::Debug + 'static {
    /// Human readable name of the field kind, used in errors and logs
    const KIND: &'static str;
    /// Every variant, in declaration order, including the fallback
    const VARIANTS: &'static [Self];
    /// Variant returned for input that matches no identifier
    const FALLBACK: Self;
    /// Convention incoming values are written in
    const WIRE_CASE: CaseFormat;
    /// Convention used by [`WireEnum::display_name`]
    const DISPLAY_CASE: CaseFormat;

    /// Upper-underscore identifier of this variant (e.g. `DOMAIN_ROUTER`)
    fn identifier(self) -> &'static str;

    /// Canonical display string for this variant
    fn display_name(self) -> String;

    /// Rewrite a raw wire value into upper-underscore form
    fn normalize(raw: &str) -> String {
        Self::WIRE_CASE.to(CaseFormat::UpperUnderscore, raw)
    }

    /// Exact lookup by upper-underscore identifier
    fn from_identifier(identifier: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.identifier() == identifier)
    }

    /// Map a raw wire value onto a variant, falling back for anything unknown
    fn parse(raw: &str) -> Self {
        let normalized = Self::normalize(raw);
        Self::from_identifier(&normalized).unwrap_or_else(|| {
            tracing::debug!(
                kind = Self::KIND,
                raw,
                normalized = %normalized,
                fallback = ?Self::FALLBACK,
                "Unrecognized value"
            );
            Self::FALLBACK
        })
    }

    /// Like [`WireEnum::parse`], but an absent value is an [`DomainError::InvalidArgument`]
    fn from_value(raw: Option<&str>) -> Result<Self, DomainError> {
        raw.map(Self::parse)
            .ok_or(DomainError::InvalidArgument(Self::KIND))
    }

    /// Whether this is a named variant rather than the fallback
    fn is_recognized(self) -> bool {
        self != Self::FALLBACK
    }
}

/// Display string derived purely from the identifier and [`WireEnum::DISPLAY_CASE`]
pub fn display_by_convention<E: WireEnum>(value: E) -> String {
    CaseFormat::UpperUnderscore.to(E::DISPLAY_CASE, value.identifier())
}

/// Declare a [`WireEnum`] together with its `Display`, `FromStr` and serde impls.
///
/// `display: <Case> with <fn>` replaces the conventional display string with a
/// custom `fn(Self) -> String`.
macro_rules! wire_enum {
    (@display $value:expr) => {
        $crate::wire::display_by_convention($value)
    };
    (@display $value:expr, $display_with:path) => {
        $display_with($value)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            kind: $kind:literal,
            wire: $wire:ident,
            display: $display:ident $(with $display_with:path)?,
            fallback: $fallback:ident,
            variants: {
                $( $(#[$vmeta:meta])* $variant:ident => $ident:literal ),+ $(,)?
            } $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $crate::wire::WireEnum for $name {
            const KIND: &'static str = $kind;
            const VARIANTS: &'static [Self] = &[$($name::$variant),+];
            const FALLBACK: Self = $name::$fallback;
            const WIRE_CASE: $crate::case::CaseFormat = $crate::case::CaseFormat::$wire;
            const DISPLAY_CASE: $crate::case::CaseFormat = $crate::case::CaseFormat::$display;

            fn identifier(self) -> &'static str {
                match self {
                    $( $name::$variant => $ident, )+
                }
            }

            fn display_name(self) -> String {
                $crate::wire::wire_enum!(@display self $(, $display_with)?)
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&$crate::wire::WireEnum::display_name(*self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok(<Self as $crate::wire::WireEnum>::parse(s))
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: ::serde::Serializer,
            {
                serializer.serialize_str(&$crate::wire::WireEnum::display_name(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: ::serde::Deserializer<'de>,
            {
                let raw = <Option<String> as ::serde::Deserialize>::deserialize(deserializer)?;
                <Self as $crate::wire::WireEnum>::from_value(raw.as_deref())
                    .map_err(::serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use wire_enum;
