use crate::error::UrlError;

/// Set of validation tags collected while parsing a URL
///
/// Stored as a bitmask, so the set is `Copy` and merging two sets is a
/// single `|`. Iteration yields tags in declaration order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ErrorSet(u8);

impl ErrorSet {
    /// Create an empty set
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a set holding a single tag
    pub const fn only(error: UrlError) -> Self {
        Self(error.bit())
    }

    /// Add a tag, returning `true` if it wasn't present yet
    pub fn insert(&mut self, error: UrlError) -> bool {
        let fresh = !self.contains(error);
        self.0 |= error.bit();
        fresh
    }

    pub const fn contains(self, error: UrlError) -> bool {
        self.0 & error.bit() != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Tags present in either set
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }
}

impl core::fmt::Debug for ErrorSet {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl core::ops::BitOr for ErrorSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl core::ops::BitOrAssign for ErrorSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl From<UrlError> for ErrorSet {
    fn from(error: UrlError) -> Self {
        Self::only(error)
    }
}

impl<const N: usize> From<[UrlError; N]> for ErrorSet {
    fn from(errors: [UrlError; N]) -> Self {
        errors.into_iter().collect()
    }
}

impl FromIterator<UrlError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = UrlError>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<UrlError> for ErrorSet {
    fn extend<I: IntoIterator<Item = UrlError>>(&mut self, iter: I) {
        for error in iter {
            self.insert(error);
        }
    }
}

impl IntoIterator for ErrorSet {
    type Item = UrlError;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the tags of an [`ErrorSet`]
#[derive(Debug, Clone)]
pub struct Iter {
    set: ErrorSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = UrlError;

    fn next(&mut self) -> Option<UrlError> {
        while let Some(&error) = UrlError::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(error) {
                return Some(error);
            }
        }
        None
    }
}
