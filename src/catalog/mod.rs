//! Static card catalog: rarity tiers, cards, booster offering models and
//! expansions.
//!
//! Everything here is immutable after construction and shared read-only by
//! the simulation runs, so the whole catalog is safe to hand out by
//! reference across threads.

mod booster;
mod card;
mod expansion;
mod rarity;

pub use booster::{
    Booster, CardOffering, OfferingRates, PackInstance, RateTable, RARE_PACK_RATE,
    REGULAR_PACK_RATE,
};
pub use card::{Card, CardNumber};
pub use expansion::Expansion;
pub use rarity::Rarity;

use thiserror::Error;

/// Catalog authoring errors, raised at model construction time.
///
/// These always indicate a data bug, so callers fail fast instead of
/// recovering.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CatalogError {
    #[error("booster {booster} has no offering rates for rarity {rarity}")]
    MissingOfferingRate { booster: String, rarity: Rarity },
}
