use core::iter::FusedIterator;

/**
Iterator over the pieces of a delimited string.

This behaves like [`str::split`] with a single byte delimiter: there is no
quoting, escaping, or trimming, and an empty input produces exactly one empty
piece.
*/
#[derive(Debug, Clone)]
pub struct Split<'a> {
    rest: Option<&'a str>,
    delimiter: u8,
}

impl<'a> Split<'a> {
    /// Create a new splitter. `delimiter` must be ASCII, so that every split
    /// point is also a `char` boundary.
    #[inline]
    pub fn new(input: &'a str, delimiter: u8) -> Self {
        debug_assert!(delimiter.is_ascii(), "delimiter must be ASCII");

        Self {
            rest: Some(input),
            delimiter,
        }
    }
}

impl<'a> Iterator for Split<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.rest?;

        match memchr::memchr(self.delimiter, rest.as_bytes()) {
            Some(i) => {
                self.rest = Some(&rest[i + 1..]);
                Some(&rest[..i])
            }
            None => {
                self.rest = None;
                Some(rest)
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.rest {
            None => (0, Some(0)),
            Some(rest) => (1, Some(rest.len() + 1)),
        }
    }
}

impl FusedIterator for Split<'_> {}
