//! Mutable per-user collection state: missing cards and pack points.
//!
//! A `UserCollection` holds one `ExpansionCollection` per tracked expansion.
//! Simulation runs clone the whole thing and mutate their private copy, so
//! the user's real state is never touched.

use crate::catalog::{Card, CardNumber, Expansion};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Pack points earned per opened pack.
pub const PACK_POINTS_PER_PACK: u16 = 5;
/// Hard cap on a per-expansion pack-point balance.
pub const MAX_PACK_POINTS: u16 = 2_500;

/// Missing cards and pack-point balance for one expansion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExpansionCollection {
    pack_points: u16,
    missing: Vec<CardNumber>,
}

impl ExpansionCollection {
    /// Starting balances above the cap are clamped down to it.
    pub fn new(missing: Vec<CardNumber>, pack_points: u16) -> Self {
        Self {
            pack_points: pack_points.min(MAX_PACK_POINTS),
            missing,
        }
    }

    pub fn missing(&self) -> &[CardNumber] {
        &self.missing
    }

    pub fn pack_points(&self) -> u16 {
        self.pack_points
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    /// Applies one opened pack: drawn numbers leave the missing set (numbers
    /// already collected are ignored) and the pack-point reward is credited,
    /// saturating at the cap.
    pub fn apply_pack(&mut self, drawn: &[CardNumber; 5]) {
        self.missing.retain(|number| !drawn.contains(number));
        self.pack_points = (self.pack_points + PACK_POINTS_PER_PACK).min(MAX_PACK_POINTS);
    }

    /// Trades pack points for a specific missing card.
    ///
    /// The caller must have checked that the card is still missing and the
    /// balance covers its cost; violating either is a logic bug and panics
    /// rather than corrupting the statistics.
    pub fn redeem_with_points(&mut self, card: &Card) {
        let before = self.missing.len();
        self.missing.retain(|number| *number != card.number);
        if self.missing.len() + 1 != before {
            panic!("redeeming card {} which is not missing", card.number);
        }
        let cost = card.rarity.pack_point_cost();
        if self.pack_points < cost {
            panic!(
                "redeeming card {} costs {} but only {} pack points available",
                card.number, cost, self.pack_points
            );
        }
        self.pack_points -= cost;
    }
}

/// The user's collection across all tracked expansions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserCollection {
    expansions: HashMap<String, ExpansionCollection>,
}

impl UserCollection {
    pub fn new(expansions: HashMap<String, ExpansionCollection>) -> Self {
        Self { expansions }
    }

    pub fn expansion(&self, id: &str) -> Option<&ExpansionCollection> {
        self.expansions.get(id)
    }

    pub fn expansion_mut(&mut self, id: &str) -> Option<&mut ExpansionCollection> {
        self.expansions.get_mut(id)
    }

    pub fn missing_for(&self, id: &str) -> Option<&[CardNumber]> {
        self.expansions.get(id).map(|c| c.missing())
    }

    /// First expansion, in catalog order, with anything left to collect.
    /// `None` simply means the collection is done, not an error.
    pub fn first_incomplete_expansion<'a>(
        &self,
        catalog: &'a [Expansion],
    ) -> Option<&'a Expansion> {
        catalog.iter().find(|expansion| {
            self.expansion(expansion.id())
                .is_some_and(|c| !c.is_complete())
        })
    }
}

/// A named set of specifically-desired cards per expansion.
///
/// Wishlists only influence booster ranking; the simulation always chases
/// the full missing set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Wishlist {
    name: String,
    expansions: HashMap<String, Vec<CardNumber>>,
}

impl Wishlist {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            expansions: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn add_cards(&mut self, expansion_id: &str, numbers: Vec<CardNumber>) {
        self.expansions
            .entry(expansion_id.to_string())
            .or_default()
            .extend(numbers);
    }

    pub fn cards_for(&self, expansion_id: &str) -> Option<&[CardNumber]> {
        self.expansions.get(expansion_id).map(|v| v.as_slice())
    }
}
