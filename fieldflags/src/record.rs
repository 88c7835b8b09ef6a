/*!
The schema side of binding: how a record describes its fields, and how the
binder reaches into an instance to write them.

Rust has no runtime reflection, so a record describes itself with a static
[`Shape`] and hands out field slots by index through [`Record::field_mut`].
`#[derive(Record)]` generates both. They can also be written by hand, which is
occasionally useful for records whose fields are decided by something other
than a struct definition; the binder makes no distinction between the two.
*/

use core::any::type_name;
use core::fmt;

use crate::errors::ConfigError;
use crate::tag::AliasSet;
use crate::value::FieldValue;

/// The type-level description of a [`Record`]. Immutable, and usually stored
/// in a `static`.
#[derive(Debug)]
pub struct Shape {
    /// The name of the record type, for error messages
    pub type_name: &'static str,

    /// Every field of the record, in declaration order. A field's index in
    /// this slice is the index passed to [`Record::field_mut`].
    pub fields: &'static [Field],
}

/// The description of a single field of a record.
#[derive(Clone, Copy)]
pub struct Field {
    /// The declared name of the field
    pub name: &'static str,

    /// The raw tag, in the form described by the [`tag`][crate::tag]
    /// module. Empty if the field has no tag.
    pub tag: &'static str,

    /// Only exported fields can be matched by flags. The derive exports
    /// exactly the `pub` fields.
    pub exported: bool,

    /// If this field is a promoted sub-record, its shape. Must be present
    /// for every field with a `+` in its tag.
    pub record: Option<fn() -> &'static Shape>,
}

impl Field {
    #[inline]
    #[must_use]
    pub const fn aliases(&self) -> AliasSet<'static> {
        AliasSet::parse(self.tag)
    }

    #[inline]
    #[must_use]
    pub fn is_promoted(&self) -> bool {
        self.aliases().is_promoted()
    }

    /// Get the shape of this promoted field. `parent` is the shape that
    /// declares it, for error reporting.
    pub fn promoted_shape(&self, parent: &Shape) -> Result<&'static Shape, ConfigError> {
        self.record
            .map(|shape| shape())
            .ok_or(ConfigError::NotARecord {
                type_name: parent.type_name,
                field: self.name,
            })
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("tag", &self.tag)
            .field("exported", &self.exported)
            .field("record", &self.record.map(|shape| shape().type_name))
            .finish()
    }
}

impl Shape {
    /**
    Check this shape, and every shape it promotes, for configuration errors:
    a field tagged `+` that doesn't describe a record, or promoted fields that
    form a cycle. Non-exported fields are ignored, since they can never be
    reached by a flag.
    */
    pub fn validate(&'static self) -> Result<(), ConfigError> {
        let mut ancestors = Vec::new();
        self.validate_with(&mut ancestors)
    }

    fn validate_with(
        &'static self,
        ancestors: &mut Vec<&'static Shape>,
    ) -> Result<(), ConfigError> {
        ancestors.push(self);

        for field in self.fields.iter().filter(|field| field.exported) {
            if !field.is_promoted() {
                continue;
            }

            let nested = field.promoted_shape(self)?;
            check_not_ancestor(self, field, nested, ancestors)?;
            nested.validate_with(ancestors)?;
        }

        ancestors.pop();
        Ok(())
    }
}

pub(crate) fn check_not_ancestor(
    parent: &Shape,
    field: &Field,
    nested: &'static Shape,
    ancestors: &[&'static Shape],
) -> Result<(), ConfigError> {
    match ancestors.iter().any(|&ancestor| core::ptr::eq(ancestor, nested)) {
        true => Err(ConfigError::RecursivePromotion {
            type_name: parent.type_name,
            field: field.name,
            promoted: nested.type_name,
        }),
        false => Ok(()),
    }
}

/// Mutable access to one field of a record
pub enum FieldMut<'a> {
    /// A field that is set from a string
    Value(&'a mut dyn FieldValue),

    /// A promoted sub-record
    Record(&'a mut dyn Promoted),
}

/**
A structured value whose fields can be populated by flags.

Usually derived with `#[derive(Record)]`. A hand-written implementation must
keep [`shape`][Record::shape] and [`field_mut`][Record::field_mut] in
agreement: every exported field of the shape must be returned by
`field_mut`, as a [`FieldMut::Record`] if it has a `+` tag and as a
[`FieldMut::Value`] otherwise.
*/
pub trait Record {
    fn shape(&self) -> &'static Shape;

    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>>;
}

impl<R: Record + ?Sized> Record for Box<R> {
    #[inline]
    fn shape(&self) -> &'static Shape {
        R::shape(self)
    }

    #[inline]
    fn field_mut(&mut self, index: usize) -> Option<FieldMut<'_>> {
        R::field_mut(self, index)
    }
}

/**
A field that holds a sub-record, possibly behind an optional pointer.

The binder only descends into a promoted field after a flag has been resolved
to something inside it, and calls [`ensure_present`][Self::ensure_present] on
the way down, so empty optional sub-records are allocated exactly when one of
their fields is about to be set.
*/
pub trait Promoted {
    fn promoted_shape() -> &'static Shape
    where
        Self: Sized;

    /// Get the sub-record, allocating a default one first if it's absent
    fn ensure_present(&mut self) -> &mut dyn Record;
}

impl<T: Promoted> Promoted for Box<T> {
    #[inline]
    fn promoted_shape() -> &'static Shape {
        T::promoted_shape()
    }

    #[inline]
    fn ensure_present(&mut self) -> &mut dyn Record {
        T::ensure_present(self)
    }
}

impl<T: Promoted + Default> Promoted for Option<T> {
    #[inline]
    fn promoted_shape() -> &'static Shape {
        T::promoted_shape()
    }

    fn ensure_present(&mut self) -> &mut dyn Record {
        if self.is_none() {
            tracing::debug!(record = type_name::<T>(), "allocating empty sub-record");
        }

        self.get_or_insert_with(T::default).ensure_present()
    }
}
