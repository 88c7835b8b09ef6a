/*!
Deciding which token, if any, is the value of a matched flag.
*/

use fieldflags_parser::is_flag;

use crate::coerce::parse_bool;
use crate::value::ValueKind;

/// The value chosen for a flag, and how many of the following tokens it
/// used up (zero or one).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueWindow<'a> {
    pub value: &'a str,
    pub consumed: usize,
}

impl<'a> ValueWindow<'a> {
    /**
    Pick the value for a flag of the given kind from the tokens that follow
    it.

    A candidate value is the first remaining token, as long as it isn't a
    flag itself. Most fields require one, and this returns `None` if there
    isn't one. Boolean fields only take the candidate if it parses as a
    boolean; otherwise they don't consume anything and default to `true`, so
    that `-verbose input.txt` leaves `input.txt` alone.
    */
    pub fn select<S: AsRef<str>>(remaining: &'a [S], kind: ValueKind) -> Option<Self> {
        let candidate = remaining
            .first()
            .map(|token| token.as_ref())
            .filter(|token| !is_flag(token));

        let window = match kind {
            ValueKind::Bool => match candidate.filter(|token| parse_bool(token).is_ok()) {
                Some(value) => Self { value, consumed: 1 },
                None => Self {
                    value: "true",
                    consumed: 0,
                },
            },
            _ => Self {
                value: candidate?,
                consumed: 1,
            },
        };

        tracing::trace!(
            ?kind,
            value = window.value,
            consumed = window.consumed,
            "selected flag value"
        );

        Some(window)
    }
}
