/*!
Parsing of the `#[flag = "..."]` field metadata.

The tag is a comma separated list. Each entry is an alias that a flag may use
to name the field, except for the reserved markers: [`PROMOTE_MARKER`] makes
the field a promoted sub-record, and the [`INERT_MARKERS`] are recognized but
have no effect. Reserved markers are never matched as names.
*/

use fieldflags_parser::Split;

/// The attribute key that holds a field's tag
pub const TAG_KEY: &str = "flag";

/// Marks a field as a promoted sub-record
pub const PROMOTE_MARKER: &str = "+";

/// Reserved markers that are skipped when matching names, and otherwise do
/// nothing.
pub const INERT_MARKERS: [&str; 2] = ["-", "omitempty"];

const TAG_DELIMITER: u8 = b',';

/// Compare a flag name to a field name or alias, ignoring case
#[must_use]
pub fn names_match(left: &str, right: &str) -> bool {
    left.chars()
        .flat_map(char::to_lowercase)
        .eq(right.chars().flat_map(char::to_lowercase))
}

/// The parsed form of a field's tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasSet<'a> {
    tag: &'a str,
}

impl<'a> AliasSet<'a> {
    #[inline]
    #[must_use]
    pub const fn parse(tag: &'a str) -> Self {
        Self { tag }
    }

    #[inline]
    fn entries(&self) -> Split<'a> {
        Split::new(self.tag, TAG_DELIMITER)
    }

    /// The names in this set, in declaration order. Empty entries and
    /// reserved markers are skipped.
    pub fn names(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.entries()
            .filter(|entry| !entry.is_empty())
            .filter(|&entry| entry != PROMOTE_MARKER)
            .filter(|&entry| INERT_MARKERS.iter().all(|&marker| marker != entry))
    }

    /// Check if `name` matches one of the aliases, ignoring case
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|alias| names_match(alias, name))
    }

    /// Check if the tag includes the [`PROMOTE_MARKER`]
    #[must_use]
    pub fn is_promoted(&self) -> bool {
        self.entries().any(|entry| entry == PROMOTE_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases_in_order() {
        let set = AliasSet::parse("names,n");
        assert!(set.names().eq(["names", "n"]));
        assert!(!set.is_promoted());
    }

    #[test]
    fn markers_are_not_names() {
        let set = AliasSet::parse("+,-,omitempty,sub");
        assert!(set.names().eq(["sub"]));
        assert!(set.is_promoted());
        assert!(!set.contains("+"));
        assert!(!set.contains("-"));
        assert!(!set.contains("omitempty"));
        assert!(set.contains("SUB"));
    }

    #[test]
    fn empty_tag_has_no_names() {
        let set = AliasSet::parse("");
        assert_eq!(set.names().count(), 0);
        assert!(!set.contains(""));
        assert!(!set.is_promoted());
    }

    #[test]
    fn entries_are_not_trimmed() {
        let set = AliasSet::parse("a, b");
        assert!(set.contains("a"));
        assert!(set.contains(" b"));
        assert!(!set.contains("b"));
    }

    #[test]
    fn case_insensitive() {
        assert!(names_match("Verbose", "verbose"));
        assert!(names_match("VERBOSE", "Verbose"));
        assert!(names_match("ÄRGER", "ärger"));
        assert!(!names_match("verbose", "verbos"));
    }
}
