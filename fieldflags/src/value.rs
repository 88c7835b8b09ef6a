/*!
Traits for types that can be stored in a record field from a single string.

[`FieldValue`] is the setter that the binder calls once it has found a field
and picked its value token. [`FromText`] is the owned counterpart, which
builds a new value; every [`FromText`] type is a [`FieldValue`], and so are
[`Option`] and [`Vec`] of one. [`FromText`] is implemented for the built-in
primitives (see [`coerce`][crate::coerce]) and for every [`TextDecodable`]
type.
*/

use core::any::type_name;

use crate::errors::SetError;

/// Errors reported by [`TextDecodable`] implementations
pub type DecodeError = Box<dyn core::error::Error + Send + Sync>;

/**
The broad category of a field's type. The binder dispatches on this exactly
once per resolved field: it decides whether the flag needs a value at all
(only [`Bool`][ValueKind::Bool] fields can go without one), and nothing else.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// A boolean, which defaults to `true` when the flag has no value
    Bool,

    /// A string, integer, or float, converted by [`coerce`][crate::coerce::coerce]
    Scalar,

    /// A [`TextDecodable`] type, which decodes itself
    Text,

    /// An ordered collection, given as a comma separated list
    Collection,

    /// A type that can be declared on a record but never set
    Unsupported,
}

/**
A value that can be stored into a record field from a string.

This trait is dyn compatible; the binder only ever sees fields as
`&mut dyn FieldValue`. Most types shouldn't implement it directly, and should
instead implement [`TextDecodable`], which grants a [`FieldValue`]
implementation automatically.
*/
pub trait FieldValue {
    /// The kind of value this is
    fn kind(&self) -> ValueKind;

    /// Replace the current value with one parsed from `text`. On error, the
    /// current value should be left as it was.
    fn set_text(&mut self, text: &str) -> Result<(), SetError>;
}

/**
A type that can be built from a single string, without an existing value to
start from.

This is what lets [`Option`] fill an empty field and [`Vec`] build each of its
elements, so neither needs a [`Default`] for the type it holds.
*/
pub trait FromText: Sized {
    /// The kind of every value of this type
    const KIND: ValueKind;

    fn from_text(text: &str) -> Result<Self, SetError>;
}

impl<T: FromText> FieldValue for T {
    #[inline]
    fn kind(&self) -> ValueKind {
        T::KIND
    }

    #[inline]
    fn set_text(&mut self, text: &str) -> Result<(), SetError> {
        *self = T::from_text(text)?;
        Ok(())
    }
}

/**
A type that knows how to decode itself from raw text.

This is the escape hatch for custom field types: enums with named variants,
addresses, durations, and so on. A [`TextDecodable`] type takes precedence
over any built-in handling; its [`decode_text`][Self::decode_text] function is
given the value's bytes, unsplit and untouched, and its result is the result of
setting the field. Inside a [`Vec`], it's given each comma separated piece
instead.

```
use fieldflags::{ArgFlags, DecodeError, Record, TextDecodable};

#[derive(Debug, PartialEq)]
enum Level {
    Info,
    Debug,
}

impl TextDecodable for Level {
    fn decode_text(text: &[u8]) -> Result<Self, DecodeError> {
        match text {
            b"info" => Ok(Level::Info),
            b"debug" => Ok(Level::Debug),
            _ => Err("expected 'info' or 'debug'".into()),
        }
    }
}

#[derive(Record, Default)]
struct Options {
    pub level: Option<Level>,
    pub quiet: Vec<Level>,
}

let mut options = Options::default();
ArgFlags::new(&["-level", "debug", "-quiet", "info,debug"])
    .apply_to(&mut options)
    .unwrap();

assert_eq!(options.level, Some(Level::Debug));
assert_eq!(options.quiet, [Level::Info, Level::Debug]);
```
*/
pub trait TextDecodable: Sized {
    fn decode_text(text: &[u8]) -> Result<Self, DecodeError>;
}

impl<T: TextDecodable> FromText for T {
    const KIND: ValueKind = ValueKind::Text;

    fn from_text(text: &str) -> Result<Self, SetError> {
        T::decode_text(text.as_bytes()).map_err(|source| SetError::Decode {
            type_name: type_name::<T>(),
            text: text.to_owned(),
            source,
        })
    }
}
