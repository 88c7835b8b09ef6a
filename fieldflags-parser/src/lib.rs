#![no_std]

/*!
Low-level handling of flag tokens. Takes care of distinguishing flags from
plain values, stripping flag markers, and splitting delimited lists. No type
handling happens here; see the `fieldflags` crate for that.
*/

mod split;

pub use split::Split;

/// The character that introduces a flag token, as in `-verbose`.
pub const FLAG_MARKER: char = '-';

/// The delimiter between the elements of a collection value, as in `a,b,c`.
pub const LIST_DELIMITER: u8 = b',';

/**
A single token from the command line, classified.

Any token that begins with [`FLAG_MARKER`] is a flag, regardless of what
follows. This means that `-5` and a lone `-` are both flags: the first has the
name `5` and the second has an empty name. Names are never validated here; a
flag that doesn't name anything is the caller's problem.
*/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A flag, such as `-verbose` or `--verbose`
    Flag {
        /// The token exactly as given
        raw: &'a str,

        /// The token with every leading marker removed
        name: &'a str,
    },

    /// Anything else
    Value(&'a str),
}

impl<'a> Token<'a> {
    #[inline]
    #[must_use]
    pub fn classify(raw: &'a str) -> Self {
        match flag_name(raw) {
            Some(name) => Token::Flag { raw, name },
            None => Token::Value(raw),
        }
    }

    /// The token exactly as it appeared in the input
    #[inline]
    #[must_use]
    pub const fn raw(&self) -> &'a str {
        match *self {
            Token::Flag { raw, .. } | Token::Value(raw) => raw,
        }
    }
}

/// Check if a token is a flag token
#[inline]
#[must_use]
pub fn is_flag(token: &str) -> bool {
    token.starts_with(FLAG_MARKER)
}

/// If `token` is a flag, get its name, which is the token with all of its
/// leading markers removed.
#[inline]
#[must_use]
pub fn flag_name(token: &str) -> Option<&str> {
    match is_flag(token) {
        true => Some(token.trim_start_matches(FLAG_MARKER)),
        false => None,
    }
}

/// Split a collection value on [`LIST_DELIMITER`].
#[inline]
#[must_use]
pub fn split_list(value: &str) -> Split<'_> {
    Split::new(value, LIST_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_are_classified_by_leading_marker() {
        assert_eq!(
            Token::classify("-verbose"),
            Token::Flag {
                raw: "-verbose",
                name: "verbose"
            }
        );
        assert_eq!(
            Token::classify("---deep"),
            Token::Flag {
                raw: "---deep",
                name: "deep"
            }
        );
        assert_eq!(Token::classify("value"), Token::Value("value"));
        assert_eq!(Token::classify("in-between"), Token::Value("in-between"));
        assert_eq!(Token::classify(""), Token::Value(""));
    }

    #[test]
    fn bare_markers_are_flags_with_empty_names() {
        assert_eq!(flag_name("-"), Some(""));
        assert_eq!(flag_name("--"), Some(""));
    }

    #[test]
    fn negative_numbers_look_like_flags() {
        assert!(is_flag("-5"));
        assert_eq!(flag_name("-5"), Some("5"));
    }

    #[test]
    fn raw_is_preserved() {
        assert_eq!(Token::classify("--Name").raw(), "--Name");
        assert_eq!(Token::classify("pos").raw(), "pos");
    }
}
