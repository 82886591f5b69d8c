//! Parity computation and subset validation.
//!
//! A subset of cards is a Proset when it is non-empty and every dot appears
//! an even number of times across it. With dots packed into words that is an
//! XOR fold equal to zero, which makes the result independent of order.

use super::vector::ParityVector;
use crate::cards::Card;
use crate::core::{IndexSet, ProsetError, Result};

/// Dot width of a board (0 for an empty board).
#[must_use]
pub fn board_dots(cards: &[Card]) -> u8 {
    cards.first().map_or(0, |c| c.dots())
}

/// Reject index sets that reach past the end of `cards`.
pub fn check_indices(cards: &[Card], indices: IndexSet) -> Result<()> {
    match indices.max() {
        Some(index) if index >= cards.len() => Err(ProsetError::InvalidIndex {
            index,
            len: cards.len(),
        }),
        _ => Ok(()),
    }
}

/// Parity of the cards at `indices`.
///
/// ```
/// use proset::{parity, Card, IndexSet};
///
/// let cards = [Card::from_bits(&[1, 0, 1]), Card::from_bits(&[1, 1, 0])];
/// let p = parity(&cards, [0, 1].into_iter().collect::<IndexSet>()).unwrap();
/// assert_eq!(p.to_vec(), vec![0, 1, 1]);
/// ```
pub fn parity(cards: &[Card], indices: IndexSet) -> Result<ParityVector> {
    check_indices(cards, indices)?;
    Ok(ParityVector::new(parity_mask(cards, indices), board_dots(cards)))
}

/// Is `indices` a Proset on `cards`? The empty set never is.
pub fn is_valid_subset(cards: &[Card], indices: IndexSet) -> Result<bool> {
    check_indices(cards, indices)?;
    Ok(!indices.is_empty() && parity_mask(cards, indices) == 0)
}

/// Parity of an arbitrary group of cards, in any order.
pub fn parity_of<'a, I>(cards: I, dots: u8) -> ParityVector
where
    I: IntoIterator<Item = &'a Card>,
{
    let mask = cards.into_iter().fold(0u32, |acc, card| acc ^ card.mask());
    ParityVector::new(mask, dots)
}

/// XOR of the masks at `indices`. Callers guarantee the indices are in range.
#[inline]
pub(crate) fn parity_mask(cards: &[Card], indices: IndexSet) -> u32 {
    indices.iter().fold(0u32, |acc, i| acc ^ cards[i].mask())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Card> {
        vec![
            Card::from_bits(&[1, 0, 1, 0, 0, 0]),
            Card::from_bits(&[1, 1, 0, 0, 0, 0]),
            Card::from_bits(&[0, 1, 1, 0, 0, 0]),
        ]
    }

    fn set(indices: &[usize]) -> IndexSet {
        indices.iter().collect()
    }

    #[test]
    fn test_valid_triple() {
        let cards = sample();
        assert_eq!(is_valid_subset(&cards, set(&[0, 1, 2])), Ok(true));
    }

    #[test]
    fn test_invalid_pair() {
        let cards = sample();
        assert_eq!(is_valid_subset(&cards, set(&[0, 1])), Ok(false));

        let p = parity(&cards, set(&[0, 1])).unwrap();
        assert_eq!(p.to_vec(), vec![0, 1, 1, 0, 0, 0]);
    }

    #[test]
    fn test_empty_never_valid() {
        let cards = sample();
        assert_eq!(is_valid_subset(&cards, IndexSet::new()), Ok(false));
        assert_eq!(is_valid_subset(&[], IndexSet::new()), Ok(false));

        // Empty parity is trivially even, but still not a Proset
        assert!(parity(&cards, IndexSet::new()).unwrap().is_even());
    }

    #[test]
    fn test_single_card() {
        let cards = vec![Card::from_bits(&[1, 0]), Card::blank(2)];
        assert_eq!(is_valid_subset(&cards, set(&[0])), Ok(false));
        // A blank card is a Proset on its own
        assert_eq!(is_valid_subset(&cards, set(&[1])), Ok(true));
    }

    #[test]
    fn test_invalid_index() {
        let cards = sample();
        assert_eq!(
            parity(&cards, set(&[0, 3])),
            Err(ProsetError::InvalidIndex { index: 3, len: 3 })
        );
        assert!(is_valid_subset(&cards, set(&[5])).is_err());
    }

    #[test]
    fn test_parity_of_order_independent() {
        let cards = sample();
        let forward = parity_of(&cards, 6);
        let backward = parity_of(cards.iter().rev(), 6);
        assert_eq!(forward, backward);
        assert!(forward.is_even());
    }

    #[test]
    fn test_board_dots() {
        assert_eq!(board_dots(&sample()), 6);
        assert_eq!(board_dots(&[]), 0);
    }
}
