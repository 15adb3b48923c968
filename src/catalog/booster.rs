//! Booster offering model and pack sampling.
//!
//! A booster converts its per-rarity offering-rate table into four cumulative
//! weighted-sampling tables, one per draw context: slots 1-3, slot 4, slot 5,
//! and the rare pack. The same tables back both the random pack draws and the
//! deterministic "probability of a useful card" computation used to rank
//! boosters.

use super::card::{Card, CardNumber};
use super::rarity::Rarity;
use super::CatalogError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Chance that an opened pack is a rare pack (all five slots drawn from the
/// rare table).
pub const RARE_PACK_RATE: f64 = 0.0005;
/// Chance that an opened pack is a regular pack.
pub const REGULAR_PACK_RATE: f64 = 1.0 - RARE_PACK_RATE;

/// Raw offering percentages for one rarity tier, as published per booster:
/// slots 1-3 (drawn three times), slot 4, slot 5, and the rare-pack slot.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OfferingRates {
    pub first_three: f64,
    pub fourth: f64,
    pub fifth: f64,
    pub rare_pack: f64,
}

impl OfferingRates {
    /// Rates for a tier that does not appear in a booster at all.
    pub const NOT_PRESENT: OfferingRates = OfferingRates {
        first_three: 0.0,
        fourth: 0.0,
        fifth: 0.0,
        rare_pack: 0.0,
    };

    pub fn new(first_three: f64, fourth: f64, fifth: f64, rare_pack: f64) -> Self {
        Self {
            first_three,
            fourth,
            fifth,
            rare_pack,
        }
    }
}

/// Per-booster map of rarity tier to its raw offering rates.
pub type RateTable = HashMap<Rarity, OfferingRates>;

/// One card's share of its rarity's offering rates within a booster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardOffering {
    pub number: CardNumber,
    pub first_three: f64,
    pub fourth: f64,
    pub fifth: f64,
    pub rare: f64,
}

impl CardOffering {
    /// Expected appearances of this card in one regular pack, in percent.
    pub fn regular_pack_offering(&self) -> f64 {
        self.first_three * 3.0 + self.fourth + self.fifth
    }

    /// Expected appearances of this card in one rare pack, in percent.
    pub fn rare_pack_offering(&self) -> f64 {
        self.rare * 5.0
    }
}

/// One opened pack: five card numbers, with duplicates allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackInstance {
    pub is_rare: bool,
    pub cards: [CardNumber; 5],
}

/// Cumulative-weight sampling table over card numbers.
///
/// The total is the exact sum of the non-zero inputs. Source data sometimes
/// sums to less than 100 per draw context; that shortfall is preserved, never
/// renormalized, so sampling stays faithful to the published rates.
#[derive(Debug, Clone, Default)]
struct WeightedList {
    total: f64,
    entries: Vec<(f64, CardNumber)>,
}

impl WeightedList {
    fn push(&mut self, number: CardNumber, weight: f64) {
        // Zero-probability entries must never be sampled.
        if weight == 0.0 {
            return;
        }
        self.total += weight;
        self.entries.push((self.total, number));
    }

    fn pick(&self, rng: &mut impl Rng) -> CardNumber {
        self.lookup(rng.gen::<f64>() * self.total)
    }

    /// Returns the first entry whose cumulative weight is >= `roll`.
    ///
    /// `roll` must lie in `[0, total]`; anything past the final entry means
    /// the table was built wrong, which is unrecoverable.
    fn lookup(&self, roll: f64) -> CardNumber {
        for &(cumulative, number) in &self.entries {
            if roll <= cumulative {
                return number;
            }
        }
        unreachable!(
            "weighted draw {} exceeded table total {}",
            roll, self.total
        )
    }
}

/// A named sub-collection of an expansion's cards, drawable as one pack type.
#[derive(Debug, Clone)]
pub struct Booster {
    name: String,
    cards: Vec<Card>,
    offerings: Vec<CardOffering>,
    first_three_list: WeightedList,
    fourth_list: WeightedList,
    fifth_list: WeightedList,
    rare_list: WeightedList,
}

impl Booster {
    /// Builds the offering model for one booster.
    ///
    /// Each card's share of a draw context is its rarity's published rate
    /// divided evenly across the booster's cards of that rarity. Crown cards
    /// are shut out of the rare-pack context except for the designated
    /// `crown_exclusive` number, which alone carries the crown rare rate.
    ///
    /// A card whose rarity has no entry in `rates` is a catalog authoring
    /// bug and fails construction.
    pub fn new(
        name: &str,
        cards: Vec<Card>,
        rates: &RateTable,
        crown_exclusive: Option<CardNumber>,
    ) -> Result<Self, CatalogError> {
        let mut tier_counts: HashMap<Rarity, u32> = HashMap::new();
        for card in &cards {
            *tier_counts.entry(card.rarity).or_insert(0) += 1;
        }

        let mut offerings = Vec::with_capacity(cards.len());
        let mut first_three_list = WeightedList::default();
        let mut fourth_list = WeightedList::default();
        let mut fifth_list = WeightedList::default();
        let mut rare_list = WeightedList::default();

        for card in &cards {
            let rate = rates
                .get(&card.rarity)
                .ok_or_else(|| CatalogError::MissingOfferingRate {
                    booster: name.to_string(),
                    rarity: card.rarity,
                })?;
            let share = f64::from(tier_counts[&card.rarity]);

            let rare = if card.rarity == Rarity::Crown {
                // Only the designated crown drops in the rare slot, and it
                // carries the tier's whole rate.
                if crown_exclusive == Some(card.number) {
                    rate.rare_pack
                } else {
                    0.0
                }
            } else {
                rate.rare_pack / share
            };

            let offering = CardOffering {
                number: card.number,
                first_three: rate.first_three / share,
                fourth: rate.fourth / share,
                fifth: rate.fifth / share,
                rare,
            };

            first_three_list.push(card.number, offering.first_three);
            fourth_list.push(card.number, offering.fourth);
            fifth_list.push(card.number, offering.fifth);
            rare_list.push(card.number, offering.rare);
            offerings.push(offering);
        }

        Ok(Self {
            name: name.to_string(),
            cards,
            offerings,
            first_three_list,
            fourth_list,
            fifth_list,
            rare_list,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn offerings(&self) -> &[CardOffering] {
        &self.offerings
    }

    /// Sum of per-card shares per draw context. Expected to be ~100 each;
    /// short totals point at gaps in the published rates.
    pub fn offering_totals(&self) -> OfferingRates {
        OfferingRates {
            first_three: self.first_three_list.total,
            fourth: self.fourth_list.total,
            fifth: self.fifth_list.total,
            rare_pack: self.rare_list.total,
        }
    }

    /// Expected probability, in percent-weighted terms, that one pack from
    /// this booster contains at least one of `missing`.
    ///
    /// Deterministic: sums each missing card's per-pack offerings, weighted
    /// by the regular/rare pack split. Used to rank boosters, never to draw.
    pub fn probability_of_useful_card(&self, missing: &[CardNumber]) -> f64 {
        let mut regular = 0.0;
        let mut rare = 0.0;
        for offering in &self.offerings {
            if missing.contains(&offering.number) {
                regular += offering.regular_pack_offering();
                rare += offering.rare_pack_offering();
            }
        }
        regular * REGULAR_PACK_RATE + rare * RARE_PACK_RATE
    }

    /// Draws one pack: a single uniform roll decides rare vs regular, then
    /// each of the five physical slots draws from its designated table.
    pub fn open(&self, rng: &mut impl Rng) -> PackInstance {
        if rng.gen::<f64>() < RARE_PACK_RATE {
            return PackInstance {
                is_rare: true,
                cards: [
                    self.rare_list.pick(rng),
                    self.rare_list.pick(rng),
                    self.rare_list.pick(rng),
                    self.rare_list.pick(rng),
                    self.rare_list.pick(rng),
                ],
            };
        }

        PackInstance {
            is_rare: false,
            cards: [
                self.first_three_list.pick(rng),
                self.first_three_list.pick(rng),
                self.first_three_list.pick(rng),
                self.fourth_list.pick(rng),
                self.fifth_list.pick(rng),
            ],
        }
    }
}
