/*!
Resolving a flag name to a field, and materializing that field in a record.

Resolution is purely type-level: [`Shape::resolve`] searches a shape (and the
shapes of its promoted fields) for a matching field and returns its
[`FieldPath`]. [`FlagField::find`] then walks a record instance along that
path, allocating any empty optional sub-records on the way, so that the field
at the end is always reachable.
*/

use core::fmt;

use joinery::JoinableIterator;

use crate::errors::{CoerceError, ConfigError, SetError};
use crate::record::{Field, FieldMut, Record, Shape, check_not_ancestor};
use crate::tag::names_match;
use crate::value::{FieldValue, ValueKind};

/**
The location of a field relative to a root record: the index of a field in
the root shape, followed by the index of a field in that field's promoted
shape, and so on. Never empty.
*/
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Get the descriptors of every field along this path, starting from
    /// `root`. Returns `None` if the path doesn't fit the shape.
    pub fn fields(&self, root: &'static Shape) -> Option<Vec<&'static Field>> {
        let mut shape = root;
        let mut fields = Vec::with_capacity(self.0.len());

        for (depth, &index) in self.0.iter().enumerate() {
            let field = shape.fields.get(index)?;
            fields.push(field);

            if depth + 1 < self.0.len() {
                shape = field.record?();
            }
        }

        Some(fields)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join_with('.'))
    }
}

impl Shape {
    /**
    Find the field that a flag name refers to.

    Exported fields are checked in declaration order, each first by its name
    and then by its aliases, ignoring case. Only if no field of this shape
    matches are the promoted fields searched, depth first, in the order they
    were declared. The first match wins.

    A promoted field that doesn't describe a record is reported as soon as the
    scan reaches it, even if the name would have matched something later.
    */
    pub fn resolve(&'static self, name: &str) -> Result<Option<FieldPath>, ConfigError> {
        let mut path = Vec::new();
        let mut ancestors = Vec::new();

        let found = resolve_in(self, name, &mut path, &mut ancestors)?;

        tracing::trace!(
            record = self.type_name,
            flag = name,
            found,
            path = ?path,
            "resolved flag name"
        );

        Ok(found.then(|| FieldPath(path)))
    }
}

fn resolve_in(
    shape: &'static Shape,
    name: &str,
    path: &mut Vec<usize>,
    ancestors: &mut Vec<&'static Shape>,
) -> Result<bool, ConfigError> {
    let mut promoted = Vec::new();

    for (index, field) in shape.fields.iter().enumerate() {
        if !field.exported {
            continue;
        }

        let aliases = field.aliases();

        if names_match(field.name, name) || aliases.contains(name) {
            path.push(index);
            return Ok(true);
        }

        if aliases.is_promoted() {
            promoted.push((index, field, field.promoted_shape(shape)?));
        }
    }

    ancestors.push(shape);

    for (index, field, nested) in promoted {
        check_not_ancestor(shape, field, nested, ancestors)?;

        path.push(index);
        if resolve_in(nested, name, path, ancestors)? {
            return Ok(true);
        }
        path.pop();
    }

    ancestors.pop();
    Ok(false)
}

enum Slot<'r> {
    Value(&'r mut dyn FieldValue),

    /// The flag named a promoted field itself, rather than something inside
    /// it. Records can't be set from a string.
    Record(&'static str),
}

/**
A field that a flag has been resolved to, ready to be set.

The handle borrows the record it came from; it is meant to be created, set,
and dropped for each matched flag.
*/
pub struct FlagField<'r> {
    field: &'static Field,
    slot: Slot<'r>,
}

impl<'r> FlagField<'r> {
    /**
    Resolve `name` against `record` and materialize the field it refers to.
    Returns `Ok(None)` if no field matches.
    */
    pub fn find(name: &str, record: &'r mut dyn Record) -> Result<Option<Self>, ConfigError> {
        match record.shape().resolve(name)? {
            None => Ok(None),
            Some(path) => Self::materialize(record, &path).map(Some),
        }
    }

    /**
    Walk `record` along `path`, allocating every empty optional sub-record
    along the way, and return a handle to the field at the end of it. `path`
    must have been resolved against this record's shape.
    */
    pub fn materialize(record: &'r mut dyn Record, path: &FieldPath) -> Result<Self, ConfigError> {
        let Some((&last, parents)) = path.indices().split_last() else {
            return Err(ConfigError::Inaccessible {
                type_name: record.shape().type_name,
                field: "<missing>",
            });
        };

        let mut current = record;

        for &index in parents {
            let shape = current.shape();
            let record = current;

            current = match record.field_mut(index) {
                Some(FieldMut::Record(nested)) => nested.ensure_present(),
                _ => return Err(inaccessible(shape, index)),
            };
        }

        let shape = current.shape();
        let field = shape
            .fields
            .get(last)
            .ok_or_else(|| inaccessible(shape, last))?;

        let slot = match current.field_mut(last) {
            Some(FieldMut::Value(value)) => Slot::Value(value),
            Some(FieldMut::Record(_)) => Slot::Record(
                field
                    .record
                    .map_or(shape.type_name, |nested| nested().type_name),
            ),
            None => return Err(inaccessible(shape, last)),
        };

        Ok(Self { field, slot })
    }

    /// The descriptor of the resolved field
    #[inline]
    #[must_use]
    pub fn field(&self) -> &'static Field {
        self.field
    }

    /// The declared name of the resolved field
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.field.name
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self.slot {
            Slot::Value(ref value) => value.kind(),
            Slot::Record(_) => ValueKind::Unsupported,
        }
    }

    /// Store a value into the field
    pub fn set_value(&mut self, text: &str) -> Result<(), SetError> {
        match self.slot {
            Slot::Value(ref mut value) => value.set_text(text),
            Slot::Record(type_name) => Err(CoerceError::Unsupported { type_name }.into()),
        }
    }
}

fn inaccessible(shape: &Shape, index: usize) -> ConfigError {
    ConfigError::Inaccessible {
        type_name: shape.type_name,
        field: shape.fields.get(index).map_or("<missing>", |field| field.name),
    }
}
