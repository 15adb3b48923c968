//! Standard collection-completion predicates.
//!
//! A predicate decides, per expansion, whether the remaining missing set
//! counts as "done". Callers can supply their own; these two cover the usual
//! goals.

use crate::catalog::{CardNumber, Expansion};

/// Complete only when nothing is missing.
pub fn fully(_expansion: &Expansion, missing: &[CardNumber]) -> bool {
    missing.is_empty()
}

/// Complete once every remaining missing card is secret-tier: the
/// "practical completion" goal that ignores chase rarities.
pub fn non_secret(expansion: &Expansion, missing: &[CardNumber]) -> bool {
    missing.iter().all(|number| {
        match expansion.card(*number) {
            Some(card) => card.rarity.is_secret(),
            None => panic!(
                "collection for {} tracks card {} which is not in the catalog",
                expansion.id(),
                number
            ),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Booster, Card, OfferingRates, Rarity, RateTable};

    fn expansion() -> Expansion {
        let mut rates = RateTable::new();
        rates.insert(Rarity::OneDiamond, OfferingRates::new(100.0, 100.0, 100.0, 0.0));
        rates.insert(Rarity::OneStar, OfferingRates::new(0.0, 2.0, 10.0, 100.0));
        let booster = Booster::new(
            "Mixed",
            vec![
                Card::new(1, "Plain", Rarity::OneDiamond),
                Card::new(2, "Shiny", Rarity::OneStar),
            ],
            &rates,
            None,
        )
        .unwrap();
        Expansion::new("mixed-set", "Mixed Set", vec![booster])
    }

    #[test]
    fn test_fully_requires_empty_missing() {
        let expansion = expansion();
        assert!(fully(&expansion, &[]));
        assert!(!fully(&expansion, &[CardNumber(1)]));
        assert!(!fully(&expansion, &[CardNumber(2)]));
    }

    #[test]
    fn test_non_secret_ignores_secret_tiers() {
        let expansion = expansion();
        assert!(non_secret(&expansion, &[]));
        // Only the star card left: practically complete.
        assert!(non_secret(&expansion, &[CardNumber(2)]));
        // A plain card still missing: not complete.
        assert!(!non_secret(&expansion, &[CardNumber(1)]));
        assert!(!non_secret(&expansion, &[CardNumber(1), CardNumber(2)]));
    }
}
