//! Expansions: the top-level collection-completion unit.

use super::booster::Booster;
use super::card::{Card, CardNumber};

/// A release of cards, aggregated from its boosters.
///
/// Cards are deduplicated by number (a card sold in several boosters is one
/// logical card) and kept sorted by number.
#[derive(Debug, Clone)]
pub struct Expansion {
    id: String,
    name: String,
    boosters: Vec<Booster>,
    cards: Vec<Card>,
    total_secret: u16,
    total_non_secret: u16,
}

impl Expansion {
    pub fn new(id: &str, name: &str, boosters: Vec<Booster>) -> Self {
        let mut cards: Vec<Card> = Vec::new();
        for booster in &boosters {
            for card in booster.cards() {
                if !cards.iter().any(|c| c.number == card.number) {
                    cards.push(card.clone());
                }
            }
        }
        cards.sort_by_key(|c| c.number);

        let total_secret = cards.iter().filter(|c| c.rarity.is_secret()).count() as u16;
        let total_non_secret = cards.len() as u16 - total_secret;

        Self {
            id: id.to_string(),
            name: name.to_string(),
            boosters,
            cards,
            total_secret,
            total_non_secret,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn boosters(&self) -> &[Booster] {
        &self.boosters
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks a card up by its number.
    pub fn card(&self, number: CardNumber) -> Option<&Card> {
        self.cards
            .binary_search_by_key(&number, |c| c.number)
            .ok()
            .map(|i| &self.cards[i])
    }

    pub fn total_cards(&self) -> u16 {
        self.cards.len() as u16
    }

    pub fn total_secret_cards(&self) -> u16 {
        self.total_secret
    }

    pub fn total_non_secret_cards(&self) -> u16 {
        self.total_non_secret
    }

    /// The booster with the best chance of yielding one of `missing`.
    ///
    /// Ties keep the earliest-declared booster. Returns `None` when `missing`
    /// is empty or when no booster offers any of the missing numbers; the
    /// caller decides whether that is expected (nothing left to chase) or a
    /// catalog inconsistency.
    pub fn highest_offering_booster(&self, missing: &[CardNumber]) -> Option<&Booster> {
        let mut best: Option<(&Booster, f64)> = None;
        for booster in &self.boosters {
            let probability = booster.probability_of_useful_card(missing);
            if probability <= 0.0 {
                continue;
            }
            match best {
                Some((_, best_probability)) if probability <= best_probability => {}
                _ => best = Some((booster, probability)),
            }
        }
        best.map(|(booster, _)| booster)
    }
}
