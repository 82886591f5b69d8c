//! Lexicographic k-combinations of board indices.
//!
//! For `n = 7, k = 2` the order is `{0,1}, {0,2}, .., {0,6}, {1,2}, ..`,
//! which is what makes solution search reproducible.

use smallvec::SmallVec;

use crate::core::{IndexSet, INDEX_CAPACITY};

/// Iterator over all `k`-element subsets of `0..n` in lexicographic order.
#[derive(Clone, Debug)]
pub struct Combinations {
    n: usize,
    positions: SmallVec<[usize; 16]>,
    done: bool,
}

impl Combinations {
    /// All `k`-subsets of `0..n`. Empty when `k > n`.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        assert!(n <= INDEX_CAPACITY, "At most {} indices supported", INDEX_CAPACITY);
        Self {
            n,
            positions: (0..k).collect(),
            done: k > n,
        }
    }

    /// Number of combinations, C(n, k).
    #[must_use]
    pub fn count_total(n: usize, k: usize) -> u64 {
        if k > n {
            return 0;
        }
        let k = k.min(n - k) as u64;
        (0..k).fold(1u64, |acc, i| acc * (n as u64 - i) / (i + 1))
    }

    fn advance(&mut self) {
        let k = self.positions.len();
        // Rightmost position that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.positions[i] < self.n - k + i) else {
            self.done = true;
            return;
        };
        self.positions[i] += 1;
        for j in i + 1..k {
            self.positions[j] = self.positions[j - 1] + 1;
        }
    }
}

impl Iterator for Combinations {
    type Item = IndexSet;

    fn next(&mut self) -> Option<IndexSet> {
        if self.done {
            return None;
        }
        let current: IndexSet = self.positions.iter().collect();
        self.advance();
        Some(current)
    }
}
