/*!
Conversion of a single string into a primitive field type.

[`coerce`] is the only place that knows how each primitive is spelled on the
command line. Field types describe themselves with a [`TargetType`]; anything
that isn't a string, bool, signed integer, or float is rejected with
[`CoerceError::Unsupported`], naming the type.
*/

use crate::errors::CoerceError;

/// The primitive type a string should be converted into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetType {
    String,
    Bool,

    /// A signed integer with the given width in bits
    Int { bits: u32 },

    F32,
    F64,

    /// Any other type, by name. Always fails to coerce.
    Other(&'static str),
}

/// A successfully coerced value
#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    String(String),
    Bool(bool),

    /// Already checked to fit into the requested width
    Int(i128),

    F32(f32),
    F64(f64),
}

/// Convert `value` into the `target` type.
pub fn coerce(value: &str, target: TargetType) -> Result<Coerced, CoerceError> {
    match target {
        TargetType::String => Ok(Coerced::String(value.to_owned())),
        TargetType::Bool => parse_bool(value).map(Coerced::Bool),
        TargetType::Int { bits } => parse_int(value, bits).map(Coerced::Int),
        TargetType::F32 => value
            .parse()
            .map(Coerced::F32)
            .map_err(|source| CoerceError::Float {
                value: value.to_owned(),
                source,
            }),
        TargetType::F64 => value
            .parse()
            .map(Coerced::F64)
            .map_err(|source| CoerceError::Float {
                value: value.to_owned(),
                source,
            }),
        TargetType::Other(type_name) => Err(CoerceError::Unsupported { type_name }),
    }
}

/**
Parse a boolean literal. In addition to `true` and `false`, this accepts the
usual shorthand family: `1`, `t`, `T`, `TRUE`, `True` and `0`, `f`, `F`,
`FALSE`, `False`. Nothing else is a boolean, including other capitalizations
like `tRUE`.
*/
pub fn parse_bool(value: &str) -> Result<bool, CoerceError> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Ok(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Ok(false),
        _ => Err(CoerceError::Bool {
            value: value.to_owned(),
        }),
    }
}

fn parse_int(value: &str, bits: u32) -> Result<i128, CoerceError> {
    debug_assert!((1..=128).contains(&bits));

    let parsed: i128 = value.parse().map_err(|source| CoerceError::Int {
        value: value.to_owned(),
        source,
    })?;

    if bits < 128 {
        let max = (1i128 << (bits - 1)) - 1;
        let min = -max - 1;

        if !(min..=max).contains(&parsed) {
            return Err(CoerceError::IntRange {
                value: value.to_owned(),
                bits,
            });
        }
    }

    Ok(parsed)
}
