//! Single-run simulation engine.
//!
//! One run advances a cloned collection toward completion, expansion by
//! expansion, with the greedy player policy: bank pack points toward the most
//! expensive missing card, redeem it the moment it is affordable, otherwise
//! open the most useful booster.

use crate::catalog::{Card, CardNumber, Expansion};
use crate::collection::{UserCollection, PACK_POINTS_PER_PACK};
use log::trace;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use thiserror::Error;

/// Fatal simulation faults. Any of these abandons the whole batch; partial
/// statistics are discarded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// The catalog lists an expansion the user collection does not track.
    #[error("expansion {0} is not tracked by the user collection")]
    UntrackedExpansion(String),

    /// Cards are missing but no booster offers any of them. The catalog
    /// guarantees every card is obtainable somewhere, so this is a data
    /// inconsistency, not a condition to recover from.
    #[error("no booster in expansion {0} offers any missing card")]
    NoUsefulBooster(String),
}

/// What one run did for one expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionRunStats {
    pub packs_opened: u64,
    pub rare_packs: u64,
    pub pack_points_earned: u64,
    pub cards_from_pack_points: u64,
}

/// Per-expansion statistics for one completed run.
///
/// Expansions that were already complete when the run started contribute no
/// entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunResult {
    per_expansion: HashMap<String, ExpansionRunStats>,
}

impl RunResult {
    pub fn expansion_stats(&self, id: &str) -> Option<&ExpansionRunStats> {
        self.per_expansion.get(id)
    }

    pub fn expansions(&self) -> impl Iterator<Item = (&str, &ExpansionRunStats)> {
        self.per_expansion.iter().map(|(id, stats)| (id.as_str(), stats))
    }

    pub fn total_packs_opened(&self) -> u64 {
        self.per_expansion.values().map(|s| s.packs_opened).sum()
    }

    #[cfg(test)]
    pub(crate) fn from_stats(stats: Vec<(&str, ExpansionRunStats)>) -> Self {
        Self {
            per_expansion: stats
                .into_iter()
                .map(|(id, s)| (id.to_string(), s))
                .collect(),
        }
    }
}

/// Runs one simulation over every catalog expansion until `is_complete`
/// accepts each one.
///
/// The user collection is cloned up front; the caller's state is never
/// mutated. The run terminates because pack points only ever grow until
/// spent and every card's redemption cost fits under the cap.
pub fn run_single<F>(
    expansions: &[Expansion],
    collection: &UserCollection,
    is_complete: &F,
    rng: &mut impl Rng,
) -> Result<RunResult, SimError>
where
    F: Fn(&Expansion, &[CardNumber]) -> bool,
{
    let mut sim_collection = collection.clone();
    let mut per_expansion: HashMap<String, ExpansionRunStats> = HashMap::new();

    for expansion in expansions {
        let state = sim_collection
            .expansion_mut(expansion.id())
            .ok_or_else(|| SimError::UntrackedExpansion(expansion.id().to_string()))?;

        let mut stats = ExpansionRunStats::default();
        let mut touched = false;

        loop {
            if is_complete(expansion, state.missing()) {
                break;
            }
            touched = true;

            // Greedy policy: the most expensive missing card is always the
            // redemption target. Ties keep the first one found.
            let mut priciest: Option<&Card> = None;
            for number in state.missing() {
                let card = match expansion.card(*number) {
                    Some(card) => card,
                    None => panic!(
                        "collection for {} tracks card {} which is not in the catalog",
                        expansion.id(),
                        number
                    ),
                };
                let beats_best = priciest
                    .map_or(true, |best| {
                        card.rarity.pack_point_cost() > best.rarity.pack_point_cost()
                    });
                if beats_best {
                    priciest = Some(card);
                }
            }

            if let Some(card) = priciest {
                if state.pack_points() >= card.rarity.pack_point_cost() {
                    state.redeem_with_points(card);
                    stats.cards_from_pack_points += 1;
                    continue;
                }
            }

            let booster = expansion
                .highest_offering_booster(state.missing())
                .ok_or_else(|| SimError::NoUsefulBooster(expansion.id().to_string()))?;

            let pack = booster.open(rng);
            state.apply_pack(&pack.cards);
            stats.packs_opened += 1;
            stats.pack_points_earned += u64::from(PACK_POINTS_PER_PACK);
            if pack.is_rare {
                stats.rare_packs += 1;
            }
        }

        if touched {
            trace!(
                "{}: {} packs ({} rare), {} redeemed with points",
                expansion.id(),
                stats.packs_opened,
                stats.rare_packs,
                stats.cards_from_pack_points
            );
            per_expansion.insert(expansion.id().to_string(), stats);
        }
    }

    Ok(RunResult { per_expansion })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Booster, Card, OfferingRates, Rarity, RateTable};
    use crate::collection::ExpansionCollection;
    use crate::sim::complete;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn n(value: u16) -> CardNumber {
        CardNumber(value)
    }

    /// Three cards, one per slot context, so every pack is {1, 1, 1, 2, 3}
    /// (or all 1s on the rare-pack roll). Completion counts are exact.
    fn sure_thing_expansion() -> Expansion {
        let mut rates = RateTable::new();
        rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 0.0, 0.0, 100.0));
        rates.insert(Rarity::TwoDiamond, OfferingRates::new(0.0, 100.0, 0.0, 0.0));
        rates.insert(Rarity::ThreeDiamond, OfferingRates::new(0.0, 0.0, 100.0, 0.0));
        let booster = Booster::new(
            "Sure",
            vec![
                Card::new(1, "Target", Rarity::OneDiamond),
                Card::new(2, "SlotFour", Rarity::TwoDiamond),
                Card::new(3, "SlotFive", Rarity::ThreeDiamond),
            ],
            &rates,
            None,
        )
        .unwrap();
        Expansion::new("sure-set", "Sure Set", vec![booster])
    }

    fn collection_missing(id: &str, missing: Vec<CardNumber>, points: u16) -> UserCollection {
        let mut expansions = HashMap::new();
        expansions.insert(id.to_string(), ExpansionCollection::new(missing, points));
        UserCollection::new(expansions)
    }

    #[test]
    fn test_certain_card_completes_in_exactly_one_pack() {
        let expansion = sure_thing_expansion();
        let collection = collection_missing("sure-set", vec![n(1)], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &complete::fully,
            &mut rng,
        )
        .unwrap();

        let stats = result.expansion_stats("sure-set").unwrap();
        assert_eq!(stats.packs_opened, 1);
        assert_eq!(stats.cards_from_pack_points, 0);
        assert_eq!(stats.pack_points_earned, 5);
    }

    #[test]
    fn test_affordable_card_is_redeemed_without_opening_packs() {
        let expansion = sure_thing_expansion();
        // Balance preset to exactly the card's redemption cost: the engine
        // must redeem and never touch the sampler.
        let cost = Rarity::OneDiamond.pack_point_cost();
        let collection = collection_missing("sure-set", vec![n(1)], cost);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &complete::fully,
            &mut rng,
        )
        .unwrap();

        let stats = result.expansion_stats("sure-set").unwrap();
        assert_eq!(stats.packs_opened, 0);
        assert_eq!(stats.cards_from_pack_points, 1);
    }

    #[test]
    fn test_complete_expansion_contributes_no_stats() {
        let expansion = sure_thing_expansion();
        let collection = collection_missing("sure-set", vec![], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &complete::fully,
            &mut rng,
        )
        .unwrap();

        assert!(result.expansion_stats("sure-set").is_none());
        assert_eq!(result.total_packs_opened(), 0);
    }

    #[test]
    fn test_untracked_expansion_is_an_error() {
        let expansion = sure_thing_expansion();
        let collection = UserCollection::default();
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &complete::fully,
            &mut rng,
        );

        assert_eq!(
            result,
            Err(SimError::UntrackedExpansion("sure-set".to_string()))
        );
    }

    #[test]
    fn test_booster_with_nothing_useful_is_an_error() {
        // A predicate that is never satisfied forces booster selection with
        // an empty missing set, which no booster can serve.
        let expansion = sure_thing_expansion();
        let collection = collection_missing("sure-set", vec![], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        fn never_done(_: &Expansion, _: &[CardNumber]) -> bool {
            false
        }
        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &never_done,
            &mut rng,
        );

        assert_eq!(
            result,
            Err(SimError::NoUsefulBooster("sure-set".to_string()))
        );
    }

    #[test]
    fn test_points_from_packs_eventually_redeem_rare_cards() {
        // Card 2 drops at a hairs-breadth rate, so the run grinds pack
        // points from card-1 packs until card 2 (70 points) is affordable:
        // 14 packs at 5 points each, then one redemption.
        let mut rates = RateTable::new();
        rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 99.999999, 100.0, 100.0));
        rates.insert(Rarity::TwoDiamond, OfferingRates::new(0.0, 0.000001, 0.0, 0.0));
        let booster = Booster::new(
            "Grind",
            vec![
                Card::new(1, "Filler", Rarity::OneDiamond),
                Card::new(2, "Chase", Rarity::TwoDiamond),
            ],
            &rates,
            None,
        )
        .unwrap();
        let expansion = Expansion::new("grind-set", "Grind Set", vec![booster]);
        let collection = collection_missing("grind-set", vec![n(1), n(2)], 0);
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        let result = run_single(
            std::slice::from_ref(&expansion),
            &collection,
            &complete::fully,
            &mut rng,
        )
        .unwrap();

        let stats = result.expansion_stats("grind-set").unwrap();
        assert_eq!(stats.cards_from_pack_points, 1);
        assert_eq!(stats.packs_opened, 14);
        assert_eq!(stats.pack_points_earned, 70);
    }
}
