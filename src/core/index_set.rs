//! Sets of board indices.
//!
//! Selections, solutions and search candidates are all small sets of board
//! positions, stored as a bitmask so membership, toggling and ordered
//! iteration are O(1)/O(n) without allocation.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{ProsetError, Result};

/// Index list handed to callers, ascending.
pub type Indices = SmallVec<[usize; 8]>;

/// Largest index an `IndexSet` can hold, plus one.
pub const INDEX_CAPACITY: usize = 32;

/// A set of board indices (`0..32`), iterated in ascending order.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndexSet(u32);

impl IndexSet {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Set from a raw bitmask (bit `i` = index `i`).
    #[must_use]
    pub const fn from_mask(mask: u32) -> Self {
        Self(mask)
    }

    /// Set from caller-supplied indices, rejecting any the set cannot hold.
    ///
    /// ```
    /// use proset::{IndexSet, ProsetError};
    ///
    /// let set = IndexSet::try_from_indices(&[4, 1]).unwrap();
    /// assert_eq!(set.mask(), 0b10010);
    /// assert!(matches!(
    ///     IndexSet::try_from_indices(&[40]),
    ///     Err(ProsetError::InvalidIndex { index: 40, .. })
    /// ));
    /// ```
    pub fn try_from_indices(indices: &[usize]) -> Result<Self> {
        let mut set = Self::new();
        for &index in indices {
            if index >= INDEX_CAPACITY {
                return Err(ProsetError::InvalidIndex {
                    index,
                    len: INDEX_CAPACITY,
                });
            }
            set.insert(index);
        }
        Ok(set)
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn contains(self, index: usize) -> bool {
        index < INDEX_CAPACITY && self.0 & (1u32 << index) != 0
    }

    /// Add `index`. Returns true if it was not already present.
    pub(crate) fn insert(&mut self, index: usize) -> bool {
        assert!(index < INDEX_CAPACITY, "Index {} out of IndexSet range", index);
        let was_absent = !self.contains(index);
        self.0 |= 1u32 << index;
        was_absent
    }

    /// Remove `index`. Returns true if it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        let was_present = self.contains(index);
        if was_present {
            self.0 &= !(1u32 << index);
        }
        was_present
    }

    /// Flip membership of `index`. Returns whether it is now present.
    pub(crate) fn toggle(&mut self, index: usize) -> bool {
        assert!(index < INDEX_CAPACITY, "Index {} out of IndexSet range", index);
        self.0 ^= 1u32 << index;
        self.contains(index)
    }

    pub fn clear(&mut self) {
        self.0 = 0;
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Largest index in the set.
    #[must_use]
    pub fn max(self) -> Option<usize> {
        (self.0 != 0).then(|| 31 - self.0.leading_zeros() as usize)
    }

    /// Iterate indices in ascending order.
    pub fn iter(self) -> IndexSetIter {
        IndexSetIter(self.0)
    }

    /// Indices in ascending order.
    #[must_use]
    pub fn to_indices(self) -> Indices {
        self.iter().collect()
    }
}

impl std::fmt::Debug for IndexSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Collects trusted indices, such as literals and search output.
///
/// # Panics
///
/// Panics on an index `>= INDEX_CAPACITY`. Use [`IndexSet::try_from_indices`]
/// for caller input.
impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for index in iter {
            set.insert(index);
        }
        set
    }
}

impl<'a> FromIterator<&'a usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = &'a usize>>(iter: I) -> Self {
        iter.into_iter().copied().collect()
    }
}

impl IntoIterator for IndexSet {
    type Item = usize;
    type IntoIter = IndexSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over an `IndexSet`.
#[derive(Clone, Debug)]
pub struct IndexSetIter(u32);

impl Iterator for IndexSetIter {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for IndexSetIter {}
