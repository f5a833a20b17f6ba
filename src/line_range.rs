use core::cmp;
use core::fmt;
use core::ops::RangeInclusive;

/// An immutable, inclusive span of source-file lines.
///
/// Both bounds are part of the range, so `LineRange::new(5, 5)` covers the
/// single line 5 and is never empty. The invariant `start <= end` always
/// holds; use [`LineRangeBuilder`] to obtain a range from raw, possibly
/// negative or inverted, scanner output.
///
/// Equality and hashing are by value: two ranges with the same bounds are
/// interchangeable. Ordering is by `start`, then `end`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct LineRange {
    start: u32,
    end: u32,
}

impl LineRange {
    /// Creates a new `LineRange` with the given bounds.
    ///
    /// Callers must uphold `start <= end`; the normalizing path for
    /// untrusted input is [`LineRangeBuilder`].
    ///
    /// # Panics (debug only)
    /// If `start` exceeds `end`.
    #[inline]
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "start must not exceed end");
        Self { start, end }
    }

    /// Returns the first line of the range (inclusive).
    #[inline]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Returns the last line of the range (inclusive).
    #[inline]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Returns `true` if the given line falls within the range.
    ///
    /// Both bounds are included.
    ///
    /// # Examples
    /// ```
    /// use line_ranges::LineRange;
    ///
    /// let range = LineRange::new(5, 10);
    /// assert!(range.contains_line(5));
    /// assert!(range.contains_line(10));
    /// assert!(!range.contains_line(11));
    /// ```
    #[inline]
    pub fn contains_line(&self, line: u32) -> bool {
        line >= self.start && line <= self.end
    }

    /// Returns `true` if this range shares at least one line with `other`.
    ///
    /// Bounds are inclusive, so ranges that merely touch do intersect:
    ///
    /// ```
    /// use line_ranges::LineRange;
    ///
    /// let a = LineRange::new(0, 10);
    /// let b = LineRange::new(10, 20);
    /// let c = LineRange::new(11, 20);
    ///
    /// assert!(a.intersects(&b));  // both cover line 10
    /// assert!(!a.intersects(&c));
    /// ```
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Returns an iterator over the individual line numbers the range covers.
    ///
    /// # Examples
    /// ```
    /// use line_ranges::LineRange;
    ///
    /// let lines: Vec<u32> = LineRange::new(3, 6).lines().collect();
    /// assert_eq!(lines, vec![3, 4, 5, 6]);
    /// ```
    #[inline]
    pub fn lines(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl IntoIterator for LineRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

impl IntoIterator for &LineRange {
    type Item = u32;
    type IntoIter = RangeInclusive<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines()
    }
}

/// Normalizes raw `(start, end)` pairs into valid [`LineRange`] values.
///
/// Upstream scanning heuristics are noisy: they may report negative offsets
/// or hand over bounds in the wrong order. The builder repairs both instead
/// of rejecting them — negative inputs clamp to 0, inverted pairs are
/// swapped — so `build` always yields a range with `start <= end`.
///
/// The builder is reusable: `build` takes a snapshot of the current state
/// and leaves the builder untouched.
///
/// # Examples
/// ```
/// use line_ranges::LineRangeBuilder;
///
/// let range = LineRangeBuilder::new().set_line_range(125, 100).build();
/// assert_eq!(range.start(), 100);
/// assert_eq!(range.end(), 125);
///
/// let single = LineRangeBuilder::new().set_single_line(42).build();
/// assert_eq!(single.start(), 42);
/// assert_eq!(single.end(), 42);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct LineRangeBuilder {
    start: u32,
    end: u32,
}

impl LineRangeBuilder {
    /// Creates a builder whose current state is the single line 0.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the candidate range from two raw line numbers, in either order.
    ///
    /// Each input is clamped to a minimum of 0; the smaller clamped value
    /// becomes `start` and the larger becomes `end`.
    pub fn set_line_range(&mut self, first: i32, second: i32) -> &mut Self {
        let first = clamp_line(first);
        let second = clamp_line(second);
        self.start = cmp::min(first, second);
        self.end = cmp::max(first, second);
        self
    }

    /// Sets the candidate range to a single line.
    ///
    /// Equivalent to `set_line_range(line, line)`.
    pub fn set_single_line(&mut self, line: i32) -> &mut Self {
        self.set_line_range(line, line)
    }

    /// Returns an immutable snapshot of the current builder state.
    #[inline]
    pub fn build(&self) -> LineRange {
        LineRange::new(self.start, self.end)
    }
}

/// Negative line numbers are treated as 0, never as an error.
#[inline]
fn clamp_line(line: i32) -> u32 {
    line.max(0) as u32
}
