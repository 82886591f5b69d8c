//! Exhaustive solution search.
//!
//! Subsets are tried in increasing size, starting at one card, and within a
//! size in lexicographic order. The first Proset found is therefore a
//! smallest one, and the same board always yields the same answer.
//!
//! Nothing here is cached: a board of `n` cards costs at most `2^n - 1`
//! parity checks (127 for the default seven cards).

use tracing::trace;

use super::combinations::Combinations;
use crate::cards::Card;
use crate::core::{IndexSet, INDEX_CAPACITY};
use crate::parity::engine::parity_mask;

/// Iterator over every Proset on a board, smallest first.
#[derive(Clone, Debug)]
pub struct Solutions<'a> {
    cards: &'a [Card],
    size: usize,
    combos: Combinations,
}

impl<'a> Solutions<'a> {
    fn new(cards: &'a [Card]) -> Self {
        assert!(
            cards.len() <= INDEX_CAPACITY,
            "At most {} cards supported",
            INDEX_CAPACITY
        );
        Self {
            cards,
            size: 1,
            combos: Combinations::new(cards.len(), 1),
        }
    }
}

impl Iterator for Solutions<'_> {
    type Item = IndexSet;

    fn next(&mut self) -> Option<IndexSet> {
        loop {
            for candidate in self.combos.by_ref() {
                if parity_mask(self.cards, candidate) == 0 {
                    return Some(candidate);
                }
            }
            if self.size >= self.cards.len() {
                return None;
            }
            self.size += 1;
            trace!(size = self.size, "Searching larger subsets");
            self.combos = Combinations::new(self.cards.len(), self.size);
        }
    }
}

/// Every Proset on `cards`, ordered by size then lexicographically.
#[must_use]
pub fn solutions(cards: &[Card]) -> Solutions<'_> {
    Solutions::new(cards)
}

/// First Proset on `cards`, or `None` if no non-empty subset is valid.
///
/// ```
/// use proset::{find_solution, Card};
///
/// let cards = [
///     Card::from_bits(&[1, 0, 1, 0, 0, 0]),
///     Card::from_bits(&[1, 1, 0, 0, 0, 0]),
///     Card::from_bits(&[0, 1, 1, 0, 0, 0]),
/// ];
/// let found = find_solution(&cards).unwrap();
/// assert_eq!(found.iter().collect::<Vec<_>>(), vec![0, 1, 2]);
/// ```
#[must_use]
pub fn find_solution(cards: &[Card]) -> Option<IndexSet> {
    solutions(cards).next()
}

/// Number of Prosets on `cards`.
#[must_use]
pub fn count_solutions(cards: &[Card]) -> usize {
    solutions(cards).count()
}
