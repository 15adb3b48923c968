//! Rarity tiers and their pack-point redemption costs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The ten rarity tiers, from the most common diamond tier up to the crown.
///
/// Tiers are canonical values (not catalog objects), so two cards of the same
/// tier always compare equal. `Ord` follows tier order, not redemption cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    OneDiamond,
    TwoDiamond,
    ThreeDiamond,
    FourDiamond,
    OneStar,
    TwoStar,
    ThreeStar,
    OneShiny,
    TwoShiny,
    Crown,
}

impl Rarity {
    /// All tiers in canonical order.
    pub const ALL: [Rarity; 10] = [
        Rarity::OneDiamond,
        Rarity::TwoDiamond,
        Rarity::ThreeDiamond,
        Rarity::FourDiamond,
        Rarity::OneStar,
        Rarity::TwoStar,
        Rarity::ThreeStar,
        Rarity::OneShiny,
        Rarity::TwoShiny,
        Rarity::Crown,
    ];

    /// Pack points required to redeem a card of this tier outright.
    pub fn pack_point_cost(&self) -> u16 {
        match self {
            Rarity::OneDiamond => 35,
            Rarity::TwoDiamond => 70,
            Rarity::ThreeDiamond => 150,
            Rarity::FourDiamond => 500,
            Rarity::OneStar => 400,
            Rarity::TwoStar => 1_250,
            Rarity::ThreeStar => 1_500,
            Rarity::OneShiny => 1_000,
            Rarity::TwoShiny => 1_350,
            Rarity::Crown => 2_500,
        }
    }

    /// Secret tiers are excluded from "practical completion" accounting.
    pub fn is_secret(&self) -> bool {
        !matches!(
            self,
            Rarity::OneDiamond | Rarity::TwoDiamond | Rarity::ThreeDiamond | Rarity::FourDiamond
        )
    }

    /// Display symbol, matching the reference wiki's notation.
    pub fn symbol(&self) -> &'static str {
        match self {
            Rarity::OneDiamond => "♢",
            Rarity::TwoDiamond => "♢♢",
            Rarity::ThreeDiamond => "♢♢♢",
            Rarity::FourDiamond => "♢♢♢♢",
            Rarity::OneStar => "☆",
            Rarity::TwoStar => "☆☆",
            Rarity::ThreeStar => "☆☆☆",
            Rarity::OneShiny => "✵",
            Rarity::TwoShiny => "✵✵",
            Rarity::Crown => "♕",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
