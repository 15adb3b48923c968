//! Parallel simulation runner.
//!
//! Fans R independent runs out across the rayon pool and joins them into one
//! aggregated summary. Each run owns a private clone of the collection and
//! its own seeded RNG stream, so the loop itself needs no locking; the only
//! shared data is the immutable catalog.

use super::config::SimConfig;
use super::engine::{run_single, RunResult, SimError};
use super::report::SimSummary;
use crate::catalog::{CardNumber, Expansion};
use crate::collection::UserCollection;
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

/// Runs the configured batch and averages the results.
///
/// The whole batch derives from one root seed: per-run seeds are drawn from
/// the root stream up front, so the same (seed, catalog, collection,
/// predicate) always reproduces the same summary. A failed run abandons the
/// batch; partial statistics are discarded.
///
/// `num_runs == 0` is a no-op and yields an empty summary.
pub fn run_simulations<F>(
    expansions: &[Expansion],
    collection: &UserCollection,
    is_complete: &F,
    config: &SimConfig,
) -> Result<SimSummary, SimError>
where
    F: Fn(&Expansion, &[CardNumber]) -> bool + Sync,
{
    if config.num_runs == 0 {
        return Ok(SimSummary::empty());
    }

    let mut root = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let seeds: Vec<u64> = (0..config.num_runs).map(|_| root.gen()).collect();

    debug!(
        "running {} simulations across {} expansions",
        config.num_runs,
        expansions.len()
    );

    let runs: Vec<RunResult> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            run_single(expansions, collection, is_complete, &mut rng)
        })
        .collect::<Result<_, _>>()?;

    Ok(SimSummary::from_runs(expansions, &runs, config.num_runs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Booster, Card, OfferingRates, Rarity, RateTable};
    use crate::collection::ExpansionCollection;
    use crate::sim::complete;
    use std::collections::HashMap;

    fn catalog() -> Vec<Expansion> {
        let mut rates = RateTable::new();
        rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 60.0, 80.0, 100.0));
        rates.insert(Rarity::TwoDiamond, OfferingRates::new(0.0, 40.0, 20.0, 0.0));
        let booster = Booster::new(
            "Mixed",
            vec![
                Card::new(1, "A", Rarity::OneDiamond),
                Card::new(2, "B", Rarity::OneDiamond),
                Card::new(3, "C", Rarity::TwoDiamond),
                Card::new(4, "D", Rarity::TwoDiamond),
            ],
            &rates,
            None,
        )
        .unwrap();
        vec![Expansion::new("mixed-set", "Mixed Set", vec![booster])]
    }

    fn fresh_collection() -> UserCollection {
        let mut expansions = HashMap::new();
        expansions.insert(
            "mixed-set".to_string(),
            ExpansionCollection::new(
                vec![
                    CardNumber(1),
                    CardNumber(2),
                    CardNumber(3),
                    CardNumber(4),
                ],
                0,
            ),
        );
        UserCollection::new(expansions)
    }

    #[test]
    fn test_zero_runs_is_an_empty_success() {
        let catalog = catalog();
        let summary = run_simulations(
            &catalog,
            &fresh_collection(),
            &complete::fully,
            &SimConfig::seeded(0, 1),
        )
        .unwrap();
        assert_eq!(summary.num_runs, 0);
        assert!(summary.expansions.is_empty());
    }

    #[test]
    fn test_same_seed_reproduces_identical_summaries() {
        let catalog = catalog();
        let collection = fresh_collection();
        let config = SimConfig::seeded(1, 0xDECAF);

        let first =
            run_simulations(&catalog, &collection, &complete::fully, &config).unwrap();
        let second =
            run_simulations(&catalog, &collection, &complete::fully, &config).unwrap();
        assert_eq!(first, second);
        assert!(first.total_packs_opened() > 0);
    }

    #[test]
    fn test_fully_deterministic_catalog_averages_exactly() {
        // A catalog where every pack completes the expansion: the averaged
        // figures are exact whatever the seeds say.
        let mut rates = RateTable::new();
        rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 100.0, 100.0, 100.0));
        let booster = Booster::new(
            "Single",
            vec![Card::new(1, "Only", Rarity::OneDiamond)],
            &rates,
            None,
        )
        .unwrap();
        let catalog = vec![Expansion::new("solo-set", "Solo Set", vec![booster])];
        let mut expansions = HashMap::new();
        expansions.insert(
            "solo-set".to_string(),
            ExpansionCollection::new(vec![CardNumber(1)], 0),
        );
        let collection = UserCollection::new(expansions);

        let summary = run_simulations(
            &catalog,
            &collection,
            &complete::fully,
            &SimConfig::seeded(7, 99),
        )
        .unwrap();
        assert_eq!(summary.num_runs, 7);
        assert_eq!(summary.expansions.len(), 1);
        assert_eq!(summary.expansions[0].avg_packs_opened, 1);
        assert_eq!(summary.expansions[0].avg_pack_points_earned, 5);
        assert_eq!(summary.expansions[0].avg_cards_from_pack_points, 0);
    }

    #[test]
    fn test_failed_run_abandons_the_batch() {
        let catalog = catalog();
        let collection = UserCollection::default();

        let result = run_simulations(
            &catalog,
            &collection,
            &complete::fully,
            &SimConfig::seeded(8, 1),
        );
        assert_eq!(
            result,
            Err(SimError::UntrackedExpansion("mixed-set".to_string()))
        );
    }
}
