//! packsim - Booster Pack Economy Simulator Library
//!
//! Models a collectible-card booster economy and estimates, by Monte Carlo
//! simulation, how many packs it takes to complete a collection. The catalog
//! (expansions, boosters, offering rates) and the user's collection state are
//! plain in-memory structures supplied by the caller; the `sample` module
//! ships a small built-in catalog for demos and tests.

pub mod build_info;
pub mod catalog;
pub mod collection;
pub mod sample;
pub mod sim;

pub use catalog::{
    Booster, Card, CardNumber, CatalogError, Expansion, OfferingRates, PackInstance, RateTable,
    Rarity,
};
pub use collection::{
    ExpansionCollection, UserCollection, Wishlist, MAX_PACK_POINTS, PACK_POINTS_PER_PACK,
};
pub use sim::{run_simulations, SimConfig, SimError, SimSummary};
