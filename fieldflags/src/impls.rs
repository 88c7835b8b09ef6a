/*!
Implementations of [`FromText`], [`FieldValue`] and [`TextDecodable`] for
primitive and standard library types
 */

use core::any::type_name;
use core::str::{self, FromStr};

use fieldflags_parser::split_list;

use crate::coerce::{Coerced, TargetType, coerce};
use crate::errors::{CoerceError, SetError};
use crate::value::{DecodeError, FieldValue, FromText, TextDecodable, ValueKind};

#[inline]
const fn kind_of(target: TargetType) -> ValueKind {
    match target {
        TargetType::Bool => ValueKind::Bool,
        TargetType::Other(_) => ValueKind::Unsupported,
        TargetType::String | TargetType::Int { .. } | TargetType::F32 | TargetType::F64 => {
            ValueKind::Scalar
        }
    }
}

macro_rules! primitives {
    ($(
        $type:ty => $target:expr, |$coerced:ident| $convert:expr;
    )*) => {
        $(
            impl FromText for $type {
                const KIND: ValueKind = kind_of($target);

                fn from_text(text: &str) -> Result<Self, SetError> {
                    let convert = |$coerced: Coerced| -> Option<$type> { $convert };

                    convert(coerce(text, $target)?).ok_or_else(|| {
                        SetError::from(CoerceError::Unsupported {
                            type_name: type_name::<$type>(),
                        })
                    })
                }
            }
        )*
    };
}

macro_rules! signed {
    ($($type:ident)*) => {
        primitives! {
            $(
                $type => TargetType::Int { bits: $type::BITS }, |value| match value {
                    Coerced::Int(int) => $type::try_from(int).ok(),
                    _ => None,
                };
            )*
        }
    };
}

// Declarable, but rejected when set.
macro_rules! unsupported {
    ($($type:ident)*) => {
        primitives! {
            $(
                $type => TargetType::Other(stringify!($type)), |_value| None;
            )*
        }
    };
}

primitives! {
    String => TargetType::String, |value| match value {
        Coerced::String(string) => Some(string),
        _ => None,
    };

    bool => TargetType::Bool, |value| match value {
        Coerced::Bool(flag) => Some(flag),
        _ => None,
    };

    f32 => TargetType::F32, |value| match value {
        Coerced::F32(float) => Some(float),
        _ => None,
    };

    f64 => TargetType::F64, |value| match value {
        Coerced::F64(float) => Some(float),
        _ => None,
    };
}

signed! { i8 i16 i32 i64 i128 isize }

unsupported! { u8 u16 u32 u64 u128 usize char }

/// A nullable field. An empty one is filled with a newly built value, so it
/// reports the kind of the value it would hold.
impl<T: FromText> FieldValue for Option<T> {
    #[inline]
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    fn set_text(&mut self, text: &str) -> Result<(), SetError> {
        *self = Some(T::from_text(text)?);
        Ok(())
    }
}

/// An ordered collection, parsed from a comma separated list. Each element is
/// built independently; a new [`Vec`] is collected from scratch and only
/// replaces the old one if every element succeeds.
impl<T: FromText> FieldValue for Vec<T> {
    #[inline]
    fn kind(&self) -> ValueKind {
        ValueKind::Collection
    }

    fn set_text(&mut self, text: &str) -> Result<(), SetError> {
        *self = split_list(text)
            .map(T::from_text)
            .collect::<Result<Vec<T>, SetError>>()?;
        Ok(())
    }
}

macro_rules! from_str_text {
    ($($type:ident $(:: $path:ident)*,)*) => {
        $(
            impl TextDecodable for $type $(:: $path)* {
                fn decode_text(text: &[u8]) -> Result<Self, DecodeError> {
                    Ok(<Self as FromStr>::from_str(str::from_utf8(text)?)?)
                }
            }
        )*
    };
}

from_str_text! {
    std::path::PathBuf,
    core::net::IpAddr,
    core::net::Ipv4Addr,
    core::net::Ipv6Addr,
    core::net::SocketAddr,
}
