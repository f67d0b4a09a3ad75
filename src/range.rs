//! Ordered numeric interval used throughout the terrain model.
//!
//! Authored foothold data stores endpoints in authoring order (`x1` may be
//! greater than `x2` on a right-to-left chain), so the interval keeps both
//! endpoints as given and derives the sorted view on demand.

/// A closed interval between two endpoints, kept in authoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range<T> {
    first: T,
    second: T,
}

impl<T> Range<T>
where
    T: Copy + PartialOrd + core::ops::Sub<Output = T>,
{
    /// Creates an interval from its authored endpoints.
    pub const fn new(first: T, second: T) -> Self {
        Self { first, second }
    }

    /// The first authored endpoint.
    pub const fn first(&self) -> T {
        self.first
    }

    /// The second authored endpoint.
    pub const fn second(&self) -> T {
        self.second
    }

    /// The lesser endpoint.
    pub fn smaller(&self) -> T {
        if self.first < self.second {
            self.first
        } else {
            self.second
        }
    }

    /// The greater endpoint.
    pub fn greater(&self) -> T {
        if self.first > self.second {
            self.first
        } else {
            self.second
        }
    }

    /// Signed difference `second - first`; negative on right-to-left spans.
    pub fn delta(&self) -> T {
        self.second - self.first
    }

    /// Whether both endpoints coincide.
    pub fn empty(&self) -> bool {
        self.first == self.second
    }

    /// Whether `value` lies within the closed interval.
    pub fn contains(&self, value: T) -> bool {
        value >= self.smaller() && value <= self.greater()
    }

    /// Whether the closed intervals share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.smaller() <= other.greater() && other.smaller() <= self.greater()
    }
}
