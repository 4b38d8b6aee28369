use rand::Rng;
use uuid::{Builder, Uuid};

use crate::reading_engine::{
    deck::Deck,
    models::{DrawnCard, SpreadDefinition},
};

/// Fewest shuffle passes a draw will run, whatever the config asks for.
pub const MIN_DRAW_PASSES: usize = 2;

/// A v4 UUID whose random bits come from `rng`, so seeded draws reproduce ids.
pub fn card_id<R: Rng>(rng: &mut R) -> Uuid {
    Builder::from_random_bytes(rng.gen()).into_uuid()
}

/// Draw one card per position of `spread` from a freshly shuffled deck.
///
/// Cards come off the top of the shuffled deck (no replacement), each gets an
/// independent fair-coin orientation, and positions are bound by index.
pub fn draw_cards<R: Rng>(
    spread: &SpreadDefinition,
    passes: usize,
    rng: &mut R,
) -> Vec<DrawnCard> {
    let mut deck = Deck::new_shuffled(rng, passes.max(MIN_DRAW_PASSES));
    let selected = deck.deal_n(spread.card_count());

    selected
        .into_iter()
        .zip(spread.positions.iter())
        .map(|(card, &position)| DrawnCard {
            id: card_id(rng),
            card,
            reversed: rng.gen_bool(0.5),
            position: Some(position),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading_engine::spreads::{all_spreads, get_spread};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn count_and_positions_match_spread() {
        let mut rng = StdRng::seed_from_u64(11);
        for spread in all_spreads() {
            let cards = draw_cards(spread, 3, &mut rng);
            assert_eq!(cards.len(), spread.card_count(), "{}", spread.key);
            for (drawn, expected) in cards.iter().zip(spread.positions) {
                assert_eq!(drawn.position, Some(*expected));
            }
        }
    }

    #[test]
    fn no_card_repeats_within_a_draw() {
        let celtic = get_spread("celtic").expect("celtic spread");
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cards = draw_cards(celtic, 2, &mut rng);
            let names: HashSet<_> = cards.iter().map(|c| c.name()).collect();
            let ids: HashSet<_> = cards.iter().map(|c| c.id).collect();
            assert_eq!(names.len(), cards.len(), "repeat card at seed={seed}");
            assert_eq!(ids.len(), cards.len(), "repeat id at seed={seed}");
        }
    }

    #[test]
    fn ids_are_version_4() {
        let mut rng = StdRng::seed_from_u64(8);
        let id = card_id(&mut rng);
        assert_eq!(id.get_version_num(), 4);
    }

    #[test]
    fn same_seed_same_draw() {
        let three = get_spread("three").expect("three spread");
        let a = draw_cards(three, 3, &mut StdRng::seed_from_u64(77));
        let b = draw_cards(three, 3, &mut StdRng::seed_from_u64(77));
        assert_eq!(a, b);
    }
}
