/*!
Error types for every stage of applying flags to a record.

[`ConfigError`] describes a mistake in a record's schema, [`CoerceError`] and
[`SetError`] describe a value that couldn't be stored in a field, and
[`Error`] is what [`ArgFlags::apply_to`][crate::ArgFlags::apply_to] returns,
with the offending flag attached.
*/

use core::num::{ParseFloatError, ParseIntError};

use crate::value::DecodeError;

/// A record's schema is malformed. These are programmer errors in a
/// [`Record`][crate::Record] definition, rather than problems with the input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error(
        "field {field} in {type_name} is tagged as a promoted sub-record '+', \
        but is not a record or a pointer to one"
    )]
    NotARecord {
        type_name: &'static str,
        field: &'static str,
    },

    #[error("field {field} in {type_name} promotes {promoted}, which is already being promoted")]
    RecursivePromotion {
        type_name: &'static str,
        field: &'static str,
        promoted: &'static str,
    },

    /// The shape lists a field that the record's accessor doesn't provide,
    /// or provides as the wrong kind of slot.
    #[error("field {field} in {type_name} is described by the shape but not accessible")]
    Inaccessible {
        type_name: &'static str,
        field: &'static str,
    },
}

/// A string couldn't be converted into a primitive field type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    #[error("{type_name} is an unsupported field type")]
    Unsupported { type_name: &'static str },

    #[error("invalid boolean {value:?}")]
    Bool { value: String },

    #[error("invalid integer {value:?}: {source}")]
    Int { value: String, source: ParseIntError },

    #[error("integer {value} is out of range for a {bits}-bit field")]
    IntRange { value: String, bits: u32 },

    #[error("invalid float {value:?}: {source}")]
    Float {
        value: String,
        source: ParseFloatError,
    },
}

/// A value couldn't be stored into a field
#[derive(Debug, thiserror::Error)]
pub enum SetError {
    #[error(transparent)]
    Coerce(#[from] CoerceError),

    #[error("{type_name} could not decode {text:?}: {source}")]
    Decode {
        type_name: &'static str,
        text: String,
        source: DecodeError,
    },
}

/// Applying flags to a record failed. The remaining tokens were not
/// processed, but fields set by earlier flags keep their new values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A flag that needs a value was last on the command line, or was
    /// directly followed by another flag.
    #[error("{flag}: no value found")]
    NoValue { flag: String },

    #[error("'{flag}' {field}: {source}")]
    Set {
        flag: String,
        field: &'static str,
        source: SetError,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// The flag token that caused this error, if the error is associated
    /// with one.
    #[must_use]
    pub fn flag(&self) -> Option<&str> {
        match self {
            Error::NoValue { flag } | Error::Set { flag, .. } => Some(flag),
            Error::Config(_) => None,
        }
    }
}
