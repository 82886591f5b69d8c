//! The board: an ordered, duplicate-free row of cards.
//!
//! Cards keep their position for the life of the board. The only mutation is
//! in-place replacement of a set of positions with freshly generated cards,
//! which never reintroduces a card that is (or just was) on the board.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::cards::{Card, CardGenerator};
use crate::core::{
    ConfigError, GameRng, IndexSet, Indices, ProsetError, Result, MAX_CARDS, MAX_DOTS,
};
use crate::parity::{self, ParityVector};
use crate::search;

/// Ordered cards in play.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
    num_dots: u8,
}

impl Board {
    /// Deal `num_cards` distinct cards.
    pub fn generate(
        num_cards: usize,
        generator: &CardGenerator,
        rng: &mut GameRng,
    ) -> Result<Self> {
        check_card_count(num_cards)?;
        let cards = generator.generate_many(&[], num_cards, rng)?;
        debug!(num_cards, num_dots = generator.num_dots(), "Dealt board");
        Ok(Self {
            cards,
            num_dots: generator.num_dots(),
        })
    }

    /// Build a board from known cards.
    ///
    /// Fails if two cards are equal, the cards disagree on dot width, or the
    /// board is larger than `MAX_CARDS` x `MAX_DOTS`.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        check_card_count(cards.len())?;
        let num_dots = cards.first().map_or(0, |c| c.dots());
        if num_dots > MAX_DOTS {
            return Err(ConfigError::DotsOutOfRange {
                num_dots,
                max: MAX_DOTS,
            }
            .into());
        }
        let mut seen: FxHashMap<Card, usize> = FxHashMap::default();

        for (index, card) in cards.iter().enumerate() {
            if card.dots() != num_dots {
                return Err(ProsetError::DotsMismatch {
                    index,
                    expected: num_dots,
                    found: card.dots(),
                });
            }
            if let Some(&first) = seen.get(card) {
                return Err(ProsetError::DuplicateCard { first, second: index });
            }
            seen.insert(*card, index);
        }

        Ok(Self { cards, num_dots })
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn num_dots(&self) -> u8 {
        self.num_dots
    }

    /// Card at `index`.
    pub fn get(&self, index: usize) -> Result<Card> {
        self.cards.get(index).copied().ok_or(ProsetError::InvalidIndex {
            index,
            len: self.cards.len(),
        })
    }

    /// Is `card` on the board?
    #[must_use]
    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    /// Reject an index outside the board.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(ProsetError::InvalidIndex {
                index,
                len: self.cards.len(),
            })
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Parity of the cards at `indices`.
    pub fn parity(&self, indices: IndexSet) -> Result<ParityVector> {
        parity::parity(&self.cards, indices)
    }

    /// Is `indices` a Proset on this board?
    pub fn is_valid(&self, indices: IndexSet) -> Result<bool> {
        parity::is_valid_subset(&self.cards, indices)
    }

    /// Smallest, first-in-order Proset on the board. Recomputed on every call.
    #[must_use]
    pub fn find_solution(&self) -> Option<IndexSet> {
        search::find_solution(&self.cards)
    }

    /// Replace the cards at `indices` with fresh ones, leaving every other
    /// position untouched.
    ///
    /// New cards differ from every card on the board before the call and from
    /// each other. Either all positions are replaced or, on error, none are.
    pub fn replace(
        &mut self,
        indices: IndexSet,
        generator: &CardGenerator,
        rng: &mut GameRng,
    ) -> Result<Indices> {
        parity::check_indices(&self.cards, indices)?;
        if generator.num_dots() != self.num_dots {
            if let Some(index) = indices.iter().next() {
                return Err(ProsetError::DotsMismatch {
                    index,
                    expected: self.num_dots,
                    found: generator.num_dots(),
                });
            }
        }

        let fresh = generator.generate_many(&self.cards, indices.len(), rng)?;
        for (index, card) in indices.iter().zip(fresh) {
            self.cards[index] = card;
        }

        debug!(replaced = ?indices, "Replaced cards");
        Ok(indices.to_indices())
    }
}

fn check_card_count(num_cards: usize) -> Result<()> {
    if num_cards > MAX_CARDS {
        return Err(ConfigError::CardsOutOfRange {
            num_cards,
            max: MAX_CARDS,
        }
        .into());
    }
    Ok(())
}

impl std::ops::Index<usize> for Board {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.cards[index]
    }
}
