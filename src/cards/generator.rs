//! Random card generation with duplicate rejection.
//!
//! A fresh card is a uniform draw over all `2^num_dots` dot vectors, redrawn
//! while it matches an excluded card (or is blank, when blanks are forbidden).
//! When the admissible set gets sparse the generator picks from it directly,
//! which gives the same uniform distribution in bounded time.

use rustc_hash::FxHashSet;
use tracing::{trace, warn};

use super::card::Card;
use crate::core::{GameRng, ProsetError, Result};

/// Below `domain / SPARSE_RATIO` admissible vectors, stop rejection sampling.
const SPARSE_RATIO: u64 = 8;

/// Draws cards of a fixed width that avoid an exclusion set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardGenerator {
    num_dots: u8,
    forbid_zero: bool,
}

impl CardGenerator {
    /// Create a generator for cards with `num_dots` dots.
    #[must_use]
    pub fn new(num_dots: u8, forbid_zero: bool) -> Self {
        assert!(num_dots <= 32, "At most 32 dots supported");
        Self { num_dots, forbid_zero }
    }

    /// Dots per generated card.
    #[must_use]
    pub fn num_dots(&self) -> u8 {
        self.num_dots
    }

    /// Whether the blank card is rejected.
    #[must_use]
    pub fn forbids_zero(&self) -> bool {
        self.forbid_zero
    }

    /// Generate a card not content-equal to any card in `existing`.
    ///
    /// Returns `ExhaustedDomain` when every vector is excluded.
    pub fn generate<'a, I>(&self, existing: I, rng: &mut GameRng) -> Result<Card>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut excluded: FxHashSet<u32> = existing
            .into_iter()
            .filter(|card| card.dots() == self.num_dots)
            .map(|card| card.mask())
            .collect();
        if self.forbid_zero {
            excluded.insert(0);
        }
        self.draw(&excluded, rng)
    }

    /// Generate `count` mutually distinct cards, also distinct from `existing`.
    pub fn generate_many<'a, I>(
        &self,
        existing: I,
        count: usize,
        rng: &mut GameRng,
    ) -> Result<Vec<Card>>
    where
        I: IntoIterator<Item = &'a Card>,
    {
        let mut drawn: Vec<Card> = Vec::with_capacity(count);
        let existing: Vec<&Card> = existing.into_iter().collect();
        for _ in 0..count {
            let card = self.generate(existing.iter().copied().chain(drawn.iter()), rng)?;
            drawn.push(card);
        }
        Ok(drawn)
    }

    fn draw(&self, excluded: &FxHashSet<u32>, rng: &mut GameRng) -> Result<Card> {
        let domain = 1u64 << self.num_dots;
        let admissible = domain - excluded.len() as u64;

        if admissible == 0 {
            warn!(num_dots = self.num_dots, excluded = excluded.len(), "Card domain exhausted");
            return Err(ProsetError::ExhaustedDomain {
                num_dots: self.num_dots,
                excluded: excluded.len(),
            });
        }

        if admissible * SPARSE_RATIO < domain {
            let candidates: Vec<u32> = (0..domain)
                .map(|m| m as u32)
                .filter(|m| !excluded.contains(m))
                .collect();
            let mask = candidates[rng.gen_range_usize(0..candidates.len())];
            trace!(admissible, mask, "Drew card from sparse admissible set");
            return Ok(Card::from_mask(mask, self.num_dots));
        }

        let mut rejections = 0u32;
        loop {
            let mask = rng.gen_bits(self.num_dots);
            if !excluded.contains(&mask) {
                trace!(mask, rejections, "Drew card");
                return Ok(Card::from_mask(mask, self.num_dots));
            }
            rejections += 1;
        }
    }
}
