//! Pagination primitives

/// A slice of a result set: `size` items starting at page `index`
///
/// [`Page::INFINITE`] means no pagination at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Page {
    pub index: i32,
    pub size: i32,
}

impl Page {
    /// Sentinel for "return every matching row"
    pub const INFINITE: Page = Page { index: -1, size: -1 };

    pub const fn new(index: i32, size: i32) -> Self {
        Self { index, size }
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        *self == Self::INFINITE
    }

    /// Infinite, or a non-negative index with a positive size
    pub fn is_valid(&self) -> bool {
        self.is_infinite() || (self.index >= 0 && self.size >= 1)
    }

    /// Number of rows to skip
    pub fn starting_index(&self) -> i64 {
        i64::from(self.index) * i64::from(self.size)
    }

    /// Exclusive end of the slice
    pub fn ending_index(&self) -> i64 {
        self.starting_index() + i64::from(self.size)
    }

    /// `(offset, limit)` for a finite, valid page
    pub fn bounds(&self) -> Option<(usize, usize)> {
        if self.is_infinite() || !self.is_valid() {
            return None;
        }
        Some((
            usize::try_from(self.starting_index()).ok()?,
            usize::try_from(self.size).ok()?,
        ))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::INFINITE
    }
}

/// One page of results plus the size of the whole filtered set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedResult<T> {
    pub values: Vec<T>,
    /// Count of all matching entities, independent of pagination
    pub total_amount: u64,
}

impl<T> PaginatedResult<T> {
    pub fn new(values: Vec<T>, total_amount: u64) -> Self {
        Self {
            values,
            total_amount,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), 0)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Transform every value, keeping the total
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            values: self.values.into_iter().map(f).collect(),
            total_amount: self.total_amount,
        }
    }
}
