//! Cards and card generation.
//!
//! ## Key Types
//!
//! - `Card`: Immutable binary attribute vector, compared by content
//! - `CardGenerator`: Draws cards that avoid an exclusion set

pub mod card;
pub mod generator;

pub use card::Card;
pub use generator::CardGenerator;
