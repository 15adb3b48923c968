//! Cards and their expansion-local numbering.

use super::rarity::Rarity;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A card's number within its expansion. Unique per expansion, not globally.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub struct CardNumber(pub u16);

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u16> for CardNumber {
    fn from(value: u16) -> Self {
        CardNumber(value)
    }
}

/// A single card. Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub number: CardNumber,
    pub name: String,
    pub rarity: Rarity,
}

impl Card {
    pub fn new(number: u16, name: &str, rarity: Rarity) -> Self {
        Self {
            number: CardNumber(number),
            name: name.to_string(),
            rarity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_numbers_compare_by_value() {
        // Two separately constructed numbers are the same card number.
        assert_eq!(CardNumber(7), CardNumber(7));
        assert!(CardNumber(7) < CardNumber(100));
    }

    #[test]
    fn test_card_construction() {
        let card = Card::new(25, "Pikachu", Rarity::OneDiamond);
        assert_eq!(card.number, CardNumber(25));
        assert_eq!(card.name, "Pikachu");
        assert_eq!(card.rarity, Rarity::OneDiamond);
    }
}
