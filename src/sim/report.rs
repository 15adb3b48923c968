//! Aggregated simulation output and catalog-facing listings.
//!
//! Everything here is plain data plus rendering; the reporting layer proper
//! (colors, layout) lives outside the crate.

use super::engine::{ExpansionRunStats, RunResult};
use crate::catalog::{CardNumber, Expansion, OfferingRates};
use crate::collection::{UserCollection, Wishlist};
use serde::Serialize;
use std::cmp::Ordering;

/// Truncating per-run averages for one expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpansionSummary {
    pub expansion_id: String,
    pub expansion_name: String,
    pub avg_packs_opened: u64,
    pub avg_rare_packs: u64,
    pub avg_pack_points_earned: u64,
    pub avg_cards_from_pack_points: u64,
}

/// Batch-level aggregation across all runs.
///
/// Averages are arithmetic means with integer truncation, matching how the
/// figures are read ("packs you will realistically open"), and expansions
/// appear in catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimSummary {
    pub num_runs: u64,
    pub expansions: Vec<ExpansionSummary>,
}

impl SimSummary {
    pub(crate) fn empty() -> Self {
        Self {
            num_runs: 0,
            expansions: Vec::new(),
        }
    }

    pub(crate) fn from_runs(expansions: &[Expansion], runs: &[RunResult], num_runs: u64) -> Self {
        let mut summaries = Vec::new();
        for expansion in expansions {
            let mut totals = ExpansionRunStats::default();
            let mut touched = false;
            for run in runs {
                if let Some(stats) = run.expansion_stats(expansion.id()) {
                    touched = true;
                    totals.packs_opened += stats.packs_opened;
                    totals.rare_packs += stats.rare_packs;
                    totals.pack_points_earned += stats.pack_points_earned;
                    totals.cards_from_pack_points += stats.cards_from_pack_points;
                }
            }
            if !touched {
                continue;
            }
            summaries.push(ExpansionSummary {
                expansion_id: expansion.id().to_string(),
                expansion_name: expansion.name().to_string(),
                avg_packs_opened: totals.packs_opened / num_runs,
                avg_rare_packs: totals.rare_packs / num_runs,
                avg_pack_points_earned: totals.pack_points_earned / num_runs,
                avg_cards_from_pack_points: totals.cards_from_pack_points / num_runs,
            });
        }

        Self {
            num_runs,
            expansions: summaries,
        }
    }

    /// Sum of the per-expansion average pack counts.
    pub fn total_packs_opened(&self) -> u64 {
        self.expansions.iter().map(|e| e.avg_packs_opened).sum()
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str(&format!(
            "Pack opening simulations ({} runs)\n",
            self.num_runs
        ));
        report.push_str("  Average packs required to finish each expansion:\n\n");

        for expansion in &self.expansions {
            report.push_str(&format!("  ── {} ──\n", expansion.expansion_name));
            report.push_str(&format!(
                "     Packs opened        {}\n",
                expansion.avg_packs_opened
            ));
            report.push_str(&format!(
                "     Rare packs          {}\n",
                expansion.avg_rare_packs
            ));
            report.push_str(&format!(
                "     Pack points earned  {}\n",
                expansion.avg_pack_points_earned
            ));
            report.push_str(&format!(
                "     Cards from points   {}\n",
                expansion.avg_cards_from_pack_points
            ));
        }

        report.push_str(&format!(
            "\n  Total pack openings: {}\n",
            self.total_packs_opened()
        ));
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// One row of the booster-usefulness ranking.
#[derive(Debug, Clone, Serialize)]
pub struct BoosterUsefulness {
    pub expansion_id: String,
    pub expansion_name: String,
    pub booster_name: String,
    pub probability: f64,
}

/// Ranks every booster by its chance of yielding a wanted card, best first.
///
/// The target set is the missing cards of each expansion, merged (without
/// double counting) with the wishlist's cards when one is given. Boosters
/// tie-break in catalog order.
pub fn rank_boosters(
    expansions: &[Expansion],
    collection: &UserCollection,
    wishlist: Option<&Wishlist>,
) -> Vec<BoosterUsefulness> {
    let mut ranking = Vec::new();
    for expansion in expansions {
        let mut targets: Vec<CardNumber> = collection
            .missing_for(expansion.id())
            .unwrap_or(&[])
            .to_vec();
        if let Some(wishlist) = wishlist {
            for number in wishlist.cards_for(expansion.id()).unwrap_or(&[]) {
                if !targets.contains(number) {
                    targets.push(*number);
                }
            }
        }
        for booster in expansion.boosters() {
            ranking.push(BoosterUsefulness {
                expansion_id: expansion.id().to_string(),
                expansion_name: expansion.name().to_string(),
                booster_name: booster.name().to_string(),
                probability: booster.probability_of_useful_card(&targets),
            });
        }
    }
    ranking.sort_by(|a, b| {
        b.probability
            .partial_cmp(&a.probability)
            .unwrap_or(Ordering::Equal)
    });
    ranking
}

/// Per-booster sums of the four offering contexts, for auditing the source
/// data.
#[derive(Debug, Clone, Serialize)]
pub struct BoosterAudit {
    pub expansion_name: String,
    pub booster_name: String,
    pub totals: OfferingRates,
}

impl BoosterAudit {
    /// True when any context's total falls short of 100%. Short tables are
    /// tolerated by the model but worth knowing about.
    pub fn is_short(&self) -> bool {
        const FULL: f64 = 100.0 - 1e-6;
        self.totals.first_three < FULL
            || self.totals.fourth < FULL
            || self.totals.fifth < FULL
            || self.totals.rare_pack < FULL
    }
}

/// Collects every booster's offering-context totals, in catalog order.
pub fn audit_offering_totals(expansions: &[Expansion]) -> Vec<BoosterAudit> {
    let mut audits = Vec::new();
    for expansion in expansions {
        for booster in expansion.boosters() {
            audits.push(BoosterAudit {
                expansion_name: expansion.name().to_string(),
                booster_name: booster.name().to_string(),
                totals: booster.offering_totals(),
            });
        }
    }
    audits
}

/// Collection progress for one expansion.
#[derive(Debug, Clone, Serialize)]
pub struct ExpansionStatus {
    pub expansion_id: String,
    pub expansion_name: String,
    pub total_cards: u16,
    pub total_secret: u16,
    pub total_non_secret: u16,
    pub missing_total: u16,
    pub missing_secret: u16,
    pub pack_points: u16,
}

impl ExpansionStatus {
    pub fn missing_non_secret(&self) -> u16 {
        self.missing_total - self.missing_secret
    }

    pub fn collected(&self) -> u16 {
        self.total_cards - self.missing_total
    }
}

/// Current completion stats per tracked expansion, in catalog order.
pub fn collection_status(
    expansions: &[Expansion],
    collection: &UserCollection,
) -> Vec<ExpansionStatus> {
    let mut statuses = Vec::new();
    for expansion in expansions {
        let Some(state) = collection.expansion(expansion.id()) else {
            continue;
        };
        let missing_secret = state
            .missing()
            .iter()
            .filter(|number| {
                match expansion.card(**number) {
                    Some(card) => card.rarity.is_secret(),
                    None => panic!(
                        "collection for {} tracks card {} which is not in the catalog",
                        expansion.id(),
                        number
                    ),
                }
            })
            .count() as u16;
        statuses.push(ExpansionStatus {
            expansion_id: expansion.id().to_string(),
            expansion_name: expansion.name().to_string(),
            total_cards: expansion.total_cards(),
            total_secret: expansion.total_secret_cards(),
            total_non_secret: expansion.total_non_secret_cards(),
            missing_total: state.missing().len() as u16,
            missing_secret,
            pack_points: state.pack_points(),
        });
    }
    statuses
}
