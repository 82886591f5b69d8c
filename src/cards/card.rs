//! Cards - fixed-length binary attribute vectors.
//!
//! Each position is one dot colour; a set bit means the dot is present.
//! Cards are immutable values whose identity is their content: two cards with
//! the same dots are duplicates.

use serde::{Deserialize, Serialize};

use crate::core::ProsetError;

/// A Proset card.
///
/// Dots are packed into a word, position `i` stored in bit `i`, so parity
/// across cards is a plain XOR. Bits at or above `dots` are always clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "CardRepr")]
pub struct Card {
    mask: u32,
    dots: u8,
}

/// Wire form of a card, checked before it becomes a `Card`.
#[derive(Deserialize)]
struct CardRepr {
    mask: u32,
    dots: u8,
}

impl TryFrom<CardRepr> for Card {
    type Error = ProsetError;

    fn try_from(repr: CardRepr) -> Result<Self, Self::Error> {
        let CardRepr { mask, dots } = repr;
        let fits = match dots {
            32 => true,
            0..=31 => mask >> dots == 0,
            _ => false,
        };
        if !fits {
            return Err(ProsetError::InvalidCard { mask, dots });
        }
        Ok(Self { mask, dots })
    }
}

impl Card {
    /// Create a card from a packed dot mask. Bits at or above `dots` are dropped.
    #[must_use]
    pub fn from_mask(mask: u32, dots: u8) -> Self {
        assert!(dots <= 32, "At most 32 dots supported");
        let keep = if dots == 32 { u32::MAX } else { (1u32 << dots) - 1 };
        Self { mask: mask & keep, dots }
    }

    /// Create a card from one entry per dot; any non-zero entry is a present dot.
    ///
    /// ```
    /// use proset::Card;
    ///
    /// let card = Card::from_bits(&[1, 0, 1, 0, 0, 0]);
    /// assert_eq!(card.dots(), 6);
    /// assert!(card.has_dot(2));
    /// ```
    #[must_use]
    pub fn from_bits(bits: &[u8]) -> Self {
        assert!(bits.len() <= 32, "At most 32 dots supported");
        let mask = bits
            .iter()
            .enumerate()
            .filter(|(_, b)| **b != 0)
            .fold(0u32, |acc, (i, _)| acc | (1u32 << i));
        Self {
            mask,
            dots: bits.len() as u8,
        }
    }

    /// The all-zero card of the given width.
    #[must_use]
    pub const fn blank(dots: u8) -> Self {
        Self { mask: 0, dots }
    }

    /// Packed dot mask.
    #[must_use]
    pub const fn mask(self) -> u32 {
        self.mask
    }

    /// Number of attribute positions.
    #[must_use]
    pub const fn dots(self) -> u8 {
        self.dots
    }

    /// Is the dot at `position` present? Out-of-range positions are absent.
    #[must_use]
    pub fn has_dot(self, position: usize) -> bool {
        position < self.dots as usize && self.mask & (1u32 << position) != 0
    }

    /// Number of present dots.
    #[must_use]
    pub fn dot_count(self) -> u32 {
        self.mask.count_ones()
    }

    /// Is this the all-zero card?
    #[must_use]
    pub fn is_blank(self) -> bool {
        self.mask == 0
    }

    /// Iterate dots as 0/1, position 0 first.
    pub fn bits(self) -> impl Iterator<Item = u8> {
        (0..self.dots as usize).map(move |i| u8::from(self.has_dot(i)))
    }

    /// Dots as a 0/1 vector.
    #[must_use]
    pub fn to_vec(self) -> Vec<u8> {
        self.bits().collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for bit in self.bits() {
            write!(f, "{}", bit)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        let card = Card::from_bits(&[1, 0, 1, 0, 0, 0]);
        assert_eq!(card.mask(), 0b101);
        assert_eq!(card.dots(), 6);
        assert_eq!(card.to_vec(), vec![1, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn test_from_mask_drops_high_bits() {
        let card = Card::from_mask(0b1100_0001, 6);
        assert_eq!(card.mask(), 0b0000_0001);
        assert_eq!(card, Card::from_bits(&[1, 0, 0, 0, 0, 0]));
    }

    #[test]
    fn test_content_identity() {
        let a = Card::from_bits(&[0, 1, 1, 0, 0, 0]);
        let b = Card::from_mask(0b110, 6);
        assert_eq!(a, b);

        // Same mask, different width is a different card
        assert_ne!(Card::from_mask(0b110, 6), Card::from_mask(0b110, 5));
    }

    #[test]
    fn test_has_dot() {
        let card = Card::from_bits(&[0, 0, 0, 1]);
        assert!(card.has_dot(3));
        assert!(!card.has_dot(0));
        assert!(!card.has_dot(10));
        assert_eq!(card.dot_count(), 1);
    }

    #[test]
    fn test_blank() {
        assert!(Card::blank(6).is_blank());
        assert_eq!(Card::blank(6).to_vec(), vec![0; 6]);
        assert!(!Card::from_bits(&[0, 0, 1]).is_blank());
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = Card::from_bits(&[1, 0, 0, 1, 0, 0]);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(json, r#"{"mask":9,"dots":6}"#);
        assert_eq!(serde_json::from_str::<Card>(&json).unwrap(), card);
    }

    #[test]
    fn test_deserialize_rejects_bits_beyond_width() {
        // 65 = 0b1000001 would render like mask 1 on a 6-dot card
        let err = serde_json::from_str::<Card>(r#"{"mask":65,"dots":6}"#).unwrap_err();
        assert!(err.to_string().contains("does not fit in 6 dots"));

        assert!(serde_json::from_str::<Card>(r#"{"mask":1,"dots":33}"#).is_err());
        assert!(serde_json::from_str::<Card>(r#"{"mask":1,"dots":0}"#).is_err());
        assert_eq!(
            serde_json::from_str::<Card>(r#"{"mask":1,"dots":6}"#).unwrap(),
            Card::from_mask(1, 6)
        );
    }

    #[test]
    fn test_display() {
        let card = Card::from_bits(&[1, 1, 0, 0, 1, 0]);
        assert_eq!(format!("{}", card), "110010");
    }
}
