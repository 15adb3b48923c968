//! Built-in sample catalog.
//!
//! Stands in for the excluded catalog-loading layer: a small but realistic
//! two-expansion catalog with published-style offering rates, used by the
//! `simulate` binary and the integration tests. Rates are per rarity tier
//! and split evenly across that tier's cards by the offering model.

use crate::catalog::{Booster, Card, CardNumber, Expansion, OfferingRates, Rarity, RateTable};
use crate::collection::{ExpansionCollection, UserCollection, Wishlist};
use std::collections::HashMap;

fn genetic_apex_rates(star_one: f64, star_two: f64, star_three: f64, crown: f64) -> RateTable {
    let mut rates = RateTable::new();
    rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 0.0, 0.0, 0.0));
    rates.insert(Rarity::TwoDiamond, OfferingRates::new(0.0, 90.0, 60.0, 0.0));
    rates.insert(Rarity::ThreeDiamond, OfferingRates::new(0.0, 5.0, 20.0, 0.0));
    rates.insert(Rarity::FourDiamond, OfferingRates::new(0.0, 1.666, 6.664, 0.0));
    rates.insert(Rarity::OneStar, OfferingRates::new(0.0, 2.572, 10.288, star_one));
    rates.insert(Rarity::TwoStar, OfferingRates::new(0.0, 0.5, 0.2, star_two));
    rates.insert(Rarity::ThreeStar, OfferingRates::new(0.0, 0.222, 0.888, star_three));
    rates.insert(Rarity::OneShiny, OfferingRates::NOT_PRESENT);
    rates.insert(Rarity::TwoShiny, OfferingRates::NOT_PRESENT);
    rates.insert(Rarity::Crown, OfferingRates::new(0.0, 0.4, 0.16, crown));
    rates
}

fn genetic_apex_commons() -> Vec<Card> {
    vec![
        Card::new(1, "Bulbasaur", Rarity::OneDiamond),
        Card::new(2, "Caterpie", Rarity::OneDiamond),
        Card::new(3, "Pidgey", Rarity::OneDiamond),
        Card::new(4, "Squirtle", Rarity::OneDiamond),
    ]
}

fn genetic_apex_crowns() -> Vec<Card> {
    vec![
        Card::new(30, "Pikachu ex", Rarity::Crown),
        Card::new(31, "Charizard ex", Rarity::Crown),
    ]
}

fn genetic_apex() -> Expansion {
    let mut pikachu_cards = genetic_apex_commons();
    pikachu_cards.extend([
        Card::new(5, "Pikachu", Rarity::TwoDiamond),
        Card::new(6, "Voltorb", Rarity::TwoDiamond),
        Card::new(7, "Raichu", Rarity::ThreeDiamond),
        Card::new(8, "Zapdos ex", Rarity::FourDiamond),
        Card::new(9, "Pikachu ex", Rarity::OneStar),
        Card::new(10, "Zapdos ex", Rarity::TwoStar),
        Card::new(11, "Raichu", Rarity::ThreeStar),
    ]);
    pikachu_cards.extend(genetic_apex_crowns());
    let pikachu = Booster::new(
        "Pikachu",
        pikachu_cards,
        &genetic_apex_rates(40.0, 50.0, 5.0, 5.0),
        Some(CardNumber(30)),
    )
    .expect("sample catalog rates cover every tier");

    let mut charizard_cards = genetic_apex_commons();
    charizard_cards.extend([
        Card::new(12, "Charmander", Rarity::TwoDiamond),
        Card::new(13, "Vulpix", Rarity::TwoDiamond),
        Card::new(14, "Charmeleon", Rarity::ThreeDiamond),
        Card::new(15, "Charizard ex", Rarity::FourDiamond),
        Card::new(16, "Charizard ex", Rarity::OneStar),
        Card::new(17, "Moltres ex", Rarity::TwoStar),
        Card::new(18, "Charmeleon", Rarity::ThreeStar),
    ]);
    charizard_cards.extend(genetic_apex_crowns());
    let charizard = Booster::new(
        "Charizard",
        charizard_cards,
        &genetic_apex_rates(40.0, 50.0, 5.0, 5.0),
        Some(CardNumber(31)),
    )
    .expect("sample catalog rates cover every tier");

    Expansion::new("genetic-apex", "Genetic Apex", vec![pikachu, charizard])
}

fn mythical_island() -> Expansion {
    let mew = Booster::new(
        "Mew",
        vec![
            Card::new(1, "Snivy", Rarity::OneDiamond),
            Card::new(2, "Servine", Rarity::OneDiamond),
            Card::new(3, "Pinsir", Rarity::OneDiamond),
            Card::new(4, "Serperior", Rarity::TwoDiamond),
            Card::new(5, "Exeggutor", Rarity::TwoDiamond),
            Card::new(6, "Aerodactyl", Rarity::ThreeDiamond),
            Card::new(7, "Celebi ex", Rarity::FourDiamond),
            Card::new(8, "Mew ex", Rarity::FourDiamond),
            Card::new(9, "Mew ex", Rarity::OneStar),
            Card::new(10, "Celebi ex", Rarity::TwoStar),
            Card::new(11, "Mew ex", Rarity::Crown),
        ],
        // No three-star cards exist here, so the rare context sums short of
        // 100. The data audit flags gaps like this.
        &genetic_apex_rates(42.105, 47.368, 5.263, 5.263),
        Some(CardNumber(11)),
    )
    .expect("sample catalog rates cover every tier");

    Expansion::new("mythical-island", "Mythical Island", vec![mew])
}

/// The full sample catalog, in release order.
pub fn sample_catalog() -> Vec<Expansion> {
    vec![genetic_apex(), mythical_island()]
}

/// A demonstration wishlist chasing the crown-tier cards.
pub fn sample_wishlist() -> Wishlist {
    let mut wishlist = Wishlist::new("crown chase");
    wishlist.add_cards("genetic-apex", vec![CardNumber(30), CardNumber(31)]);
    wishlist.add_cards("mythical-island", vec![CardNumber(11)]);
    wishlist
}

/// A collection missing every card of every expansion, with no pack points.
pub fn fresh_collection(expansions: &[Expansion]) -> UserCollection {
    let mut collections = HashMap::new();
    for expansion in expansions {
        let missing: Vec<CardNumber> = expansion.cards().iter().map(|c| c.number).collect();
        collections.insert(
            expansion.id().to_string(),
            ExpansionCollection::new(missing, 0),
        );
    }
    UserCollection::new(collections)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog[0].id(), "genetic-apex");
        assert_eq!(catalog[0].boosters().len(), 2);
        // Commons and crowns are shared between boosters but counted once.
        assert_eq!(catalog[0].total_cards(), 20);
        assert_eq!(catalog[0].total_secret_cards(), 8);
        assert_eq!(catalog[1].total_cards(), 11);
    }

    #[test]
    fn test_every_card_is_obtainable_from_some_booster() {
        for expansion in sample_catalog() {
            for card in expansion.cards() {
                assert!(
                    expansion.highest_offering_booster(&[card.number]).is_some(),
                    "card {} in {} has no booster offering it",
                    card.number,
                    expansion.id()
                );
            }
        }
    }

    #[test]
    fn test_sample_wishlist_names_real_cards() {
        let catalog = sample_catalog();
        let wishlist = sample_wishlist();
        for expansion in &catalog {
            for number in wishlist.cards_for(expansion.id()).unwrap_or(&[]) {
                assert!(expansion.card(*number).is_some());
            }
        }
    }

    #[test]
    fn test_fresh_collection_tracks_everything() {
        let catalog = sample_catalog();
        let collection = fresh_collection(&catalog);
        for expansion in &catalog {
            let missing = collection.missing_for(expansion.id()).unwrap();
            assert_eq!(missing.len(), expansion.cards().len());
        }
        assert!(collection.first_incomplete_expansion(&catalog).is_some());
    }
}
