use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::slice;

use alloc::boxed::Box;
use alloc::vec;

use crate::LineRange;

/// Capacity of the first allocation made by an empty list.
const MIN_CAPACITY: usize = 8;

#[inline]
fn encode(range: LineRange) -> u64 {
    (u64::from(range.start()) << 32) | u64::from(range.end())
}

#[inline]
fn decode(word: u64) -> LineRange {
    LineRange::new((word >> 32) as u32, (word & 0xFFFF_FFFF) as u32)
}

/// A growable, insertion-ordered list of [`LineRange`] values stored as
/// packed words.
///
/// Every element occupies one `u64` in a single backing buffer — the high
/// 32 bits hold `start`, the low 32 bits hold `end` — so storing a range
/// never allocates on its own. The encoding is exact over the full `u32`
/// domain, including `u32::MAX`.
///
/// The list preserves insertion order, permits duplicates, and never hands
/// out references into the buffer: every read decodes a fresh [`LineRange`]
/// value. Capacity grows by doubling as elements are pushed; once bulk
/// population is complete, [`trim`](Self::trim) releases the slack.
///
/// Not thread-safe for concurrent mutation; callers sharing a list across
/// threads must synchronize externally.
///
/// # Examples
/// ```
/// use line_ranges::{LineRange, LineRangeList};
///
/// let mut list = LineRangeList::new();
/// list.push(LineRange::new(0, 1));
/// list.push(LineRange::new(2, 3));
///
/// assert_eq!(list.len(), 2);
/// assert_eq!(list.get(0), LineRange::new(0, 1));
/// assert!(list.contains(LineRange::new(2, 3)));
/// ```
#[derive(Clone, Default)]
pub struct LineRangeList {
    words: Box<[u64]>,
    len: usize,
}

impl LineRangeList {
    /// Creates an empty list without allocating.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the number of stored ranges.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no ranges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the backing buffer can hold without
    /// reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Appends a range at the end of the list.
    ///
    /// Grows the backing buffer by doubling when full; amortized O(1).
    pub fn push(&mut self, range: LineRange) {
        if self.len == self.words.len() {
            self.grow();
        }
        self.words[self.len] = encode(range);
        self.len += 1;
    }

    /// Returns the range at `index`.
    ///
    /// The returned value is decoded fresh from the backing buffer and is
    /// independent of internal storage.
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn get(&self, index: usize) -> LineRange {
        self.check_index(index);
        decode(self.words[index])
    }

    /// Replaces the range at `index`, returning the previous value.
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn set(&mut self, index: usize, range: LineRange) -> LineRange {
        self.check_index(index);
        let previous = decode(self.words[index]);
        self.words[index] = encode(range);
        previous
    }

    /// Removes and returns the range at `index`, shifting all subsequent
    /// elements toward the front. O(len − index).
    ///
    /// # Panics
    /// If `index >= len`.
    pub fn remove(&mut self, index: usize) -> LineRange {
        self.check_index(index);
        let removed = decode(self.words[index]);
        self.words.copy_within(index + 1..self.len, index);
        self.len -= 1;
        removed
    }

    /// Removes the first element equal to `range`.
    ///
    /// Returns `true` if an element was removed; absence is a no-op, not an
    /// error. Relative order of the remaining elements is preserved.
    ///
    /// # Examples
    /// ```
    /// use line_ranges::{LineRange, LineRangeList};
    ///
    /// let mut list: LineRangeList =
    ///     [(0, 1), (2, 3), (4, 5)].iter().map(|&(s, e)| LineRange::new(s, e)).collect();
    ///
    /// assert!(list.remove_value(LineRange::new(2, 3)));
    /// assert!(!list.remove_value(LineRange::new(2, 3)));
    /// assert_eq!(list.get(1), LineRange::new(4, 5));
    /// ```
    pub fn remove_value(&mut self, range: LineRange) -> bool {
        match self.position(range) {
            Some(index) => {
                self.remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns `true` if the list holds an element equal to `range`.
    pub fn contains(&self, range: LineRange) -> bool {
        self.position(range).is_some()
    }

    /// Shrinks the backing buffer to exactly `len` words.
    ///
    /// Call once bulk population is complete to minimize the long-term
    /// footprint. Contents and order are unchanged.
    pub fn trim(&mut self) {
        if self.words.len() != self.len {
            self.reallocate(self.len);
        }
    }

    /// Returns an iterator over decoded range values, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: self.live_words().iter(),
        }
    }

    /// The occupied prefix of the backing buffer. Equality, hashing, and
    /// scans work on this slice so slack capacity is never observable.
    #[inline]
    fn live_words(&self) -> &[u64] {
        &self.words[..self.len]
    }

    /// Index of the first element equal to `range`, by packed-word
    /// comparison; the encoding is bijective, so this matches value
    /// equality.
    fn position(&self, range: LineRange) -> Option<usize> {
        let needle = encode(range);
        self.live_words().iter().position(|&word| word == needle)
    }

    #[inline]
    fn check_index(&self, index: usize) {
        if index >= self.len {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len, index
            );
        }
    }

    fn grow(&mut self) {
        let capacity = cmp::max(self.words.len() * 2, MIN_CAPACITY);
        self.reallocate(capacity);
    }

    fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut words = vec![0; capacity].into_boxed_slice();
        words[..self.len].copy_from_slice(self.live_words());
        self.words = words;
    }
}

impl PartialEq for LineRangeList {
    fn eq(&self, other: &Self) -> bool {
        self.live_words() == other.live_words()
    }
}

impl Eq for LineRangeList {}

impl Hash for LineRangeList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.live_words().hash(state);
    }
}

impl fmt::Debug for LineRangeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl Extend<LineRange> for LineRangeList {
    fn extend<I: IntoIterator<Item = LineRange>>(&mut self, iter: I) {
        for range in iter {
            self.push(range);
        }
    }
}

impl FromIterator<LineRange> for LineRangeList {
    fn from_iter<I: IntoIterator<Item = LineRange>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

/// Borrowing iterator over a [`LineRangeList`], yielding decoded values.
#[derive(Clone)]
pub struct Iter<'a> {
    words: slice::Iter<'a, u64>,
}

impl Iterator for Iter<'_> {
    type Item = LineRange;

    #[inline]
    fn next(&mut self) -> Option<LineRange> {
        self.words.next().map(|&word| decode(word))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<LineRange> {
        self.words.next_back().map(|&word| decode(word))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a LineRangeList {
    type Item = LineRange;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator over a [`LineRangeList`].
pub struct IntoIter {
    words: vec::IntoIter<u64>,
}

impl Iterator for IntoIter {
    type Item = LineRange;

    #[inline]
    fn next(&mut self) -> Option<LineRange> {
        self.words.next().map(decode)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.words.size_hint()
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<LineRange> {
        self.words.next_back().map(decode)
    }
}

impl ExactSizeIterator for IntoIter {}
impl FusedIterator for IntoIter {}

impl IntoIterator for LineRangeList {
    type Item = LineRange;
    type IntoIter = IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        let mut words = self.words.into_vec();
        words.truncate(self.len);
        IntoIter {
            words: words.into_iter(),
        }
    }
}
