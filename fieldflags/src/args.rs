/*!
The top-level pass that applies a list of tokens to a record.
*/

use core::fmt;

use fieldflags_parser::{Token, flag_name};
use joinery::JoinableIterator;

use crate::errors::Error;
use crate::record::Record;
use crate::resolve::FlagField;
use crate::window::ValueWindow;

/**
A list of command line tokens containing zero or more flags.

This type borrows its tokens and never modifies them. Retrieving them (for
instance, from [`std::env::args`]) is up to the caller.
*/
#[derive(Debug, Clone, Copy)]
pub struct ArgFlags<'a, S> {
    args: &'a [S],
}

impl<'a, S: AsRef<str>> ArgFlags<'a, S> {
    #[inline]
    #[must_use]
    pub const fn new(args: &'a [S]) -> Self {
        Self { args }
    }

    #[inline]
    #[must_use]
    pub const fn args(&self) -> &'a [S] {
        self.args
    }

    /// The name of every flag in the arguments, in order, with the leading
    /// markers stripped. Duplicates are kept.
    #[must_use]
    pub fn flag_names(&self) -> Vec<&'a str> {
        self.args
            .iter()
            .filter_map(|arg| flag_name(arg.as_ref()))
            .collect()
    }

    /**
    Apply the flags to the fields of `record`, and return the tokens that
    weren't used, in their original order.

    Tokens are processed left to right. A token that isn't a flag is unused.
    A flag is resolved to a field of the record (see
    [`Shape::resolve`][crate::Shape::resolve]); if nothing matches, it is
    unused too. A flag that does match takes its value from the following
    token, according to [`ValueWindow::select`], and the field is set.

    The record's shape is validated before any token is looked at. Any error
    aborts the whole pass; tokens after the failing flag are not processed,
    but fields set by earlier flags keep their new values.
    */
    pub fn apply_to(&self, record: &mut dyn Record) -> Result<Vec<&'a str>, Error> {
        record.shape().validate()?;

        let mut unused = Vec::new();
        let mut index = 0;

        while let Some(arg) = self.args.get(index) {
            let arg = arg.as_ref();
            index += 1;

            let name = match Token::classify(arg) {
                Token::Value(value) => {
                    unused.push(value);
                    continue;
                }
                Token::Flag { name, .. } => name,
            };

            let Some(mut field) = FlagField::find(name, &mut *record)? else {
                tracing::debug!(flag = arg, "no field matches flag; leaving it unused");
                unused.push(arg);
                continue;
            };

            let window = ValueWindow::select(&self.args[index..], field.kind())
                .ok_or_else(|| Error::NoValue {
                    flag: arg.to_owned(),
                })?;

            field
                .set_value(window.value)
                .map_err(|source| Error::Set {
                    flag: arg.to_owned(),
                    field: field.name(),
                    source,
                })?;

            index += window.consumed;
        }

        Ok(unused)
    }
}

/// The tokens, separated by spaces
impl<S: AsRef<str>> fmt::Display for ArgFlags<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.args.iter().map(|arg| arg.as_ref()).join_with(' ')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_names_in_order_with_duplicates() {
        let args = ["-a", "x", "--b", "y", "-a", "-", "z"];
        assert_eq!(ArgFlags::new(&args).flag_names(), ["a", "b", "a", ""]);
    }

    #[test]
    fn flag_names_of_owned_strings() {
        let args = vec!["-Verbose".to_owned(), "file".to_owned()];
        assert_eq!(ArgFlags::new(&args).flag_names(), ["Verbose"]);
    }

    #[test]
    fn display_joins_with_spaces() {
        let args = ["-names", "a,b", "pos"];
        assert_eq!(ArgFlags::new(&args).to_string(), "-names a,b pos");

        let empty: [&str; 0] = [];
        assert_eq!(ArgFlags::new(&empty).to_string(), "");
    }
}
