//! Parity vectors.

use serde::{Deserialize, Serialize};

/// Per-dot parity (sum mod 2) over a group of cards.
///
/// Derived and ephemeral: always recomputed from a board and an index set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParityVector {
    mask: u32,
    dots: u8,
}

impl ParityVector {
    #[must_use]
    pub(crate) const fn new(mask: u32, dots: u8) -> Self {
        Self { mask, dots }
    }

    /// All-even parity of the given width.
    #[must_use]
    pub const fn even(dots: u8) -> Self {
        Self { mask: 0, dots }
    }

    /// Packed parity bits, dot `i` in bit `i`.
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.mask
    }

    #[must_use]
    pub const fn dots(self) -> u8 {
        self.dots
    }

    /// Every dot appears an even number of times.
    #[must_use]
    pub fn is_even(self) -> bool {
        self.mask == 0
    }

    /// Is dot `position` odd?
    #[must_use]
    pub fn is_odd(self, position: usize) -> bool {
        position < self.dots as usize && self.mask & (1u32 << position) != 0
    }

    /// Positions with odd parity, ascending.
    pub fn odd_positions(self) -> impl Iterator<Item = usize> {
        (0..self.dots as usize).filter(move |&i| self.is_odd(i))
    }

    /// Iterate parity as 0/1, position 0 first.
    pub fn bits(self) -> impl Iterator<Item = u8> {
        (0..self.dots as usize).map(move |i| u8::from(self.is_odd(i)))
    }

    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bits().collect()
    }
}

impl std::fmt::Display for ParityVector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}
