//! Inclusive character-code ranges.

use std::ops::RangeInclusive;

/// First code of the default range (space).
pub const DEFAULT_FIRST: u32 = 0x20;

/// Last code of the default range (`~`).
pub const DEFAULT_LAST: u32 = 0x7E;

/// A normalized inclusive range of character codes, `first <= last`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeRange {
    first: u32,
    last: u32,
}

impl Default for CodeRange {
    fn default() -> Self {
        Self::new(DEFAULT_FIRST, DEFAULT_LAST)
    }
}

impl CodeRange {
    /// Build a range from two endpoints given in either order.
    #[must_use]
    pub const fn new(a: u32, b: u32) -> Self {
        if a <= b {
            Self { first: a, last: b }
        } else {
            Self { first: b, last: a }
        }
    }

    #[must_use]
    pub const fn first(&self) -> u32 {
        self.first
    }

    #[must_use]
    pub const fn last(&self) -> u32 {
        self.last
    }

    /// Number of codes in the range (never zero).
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.last - self.first) as usize + 1
    }

    /// Always false; present for API symmetry with `len`.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub const fn contains(&self, code: u32) -> bool {
        self.first <= code && code <= self.last
    }

    /// Position of `code` in a dense table indexed by `code - first`.
    #[must_use]
    pub const fn index_of(&self, code: u32) -> Option<usize> {
        if self.contains(code) {
            Some((code - self.first) as usize)
        } else {
            None
        }
    }

    /// Whether any code needs more than 7 bits.
    #[must_use]
    pub const fn is_extended(&self) -> bool {
        self.last > 0x7F
    }

    pub fn iter(&self) -> RangeInclusive<u32> {
        self.first..=self.last
    }
}

/// The character for `code` if it is printable ASCII (`' '..='~'`).
#[must_use]
pub fn printable(code: u32) -> Option<char> {
    char::from_u32(code).filter(|c| (' '..='~').contains(c))
}

impl IntoIterator for CodeRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.first..=self.last
    }
}
