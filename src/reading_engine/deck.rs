use rand::Rng;
use crate::reading_engine::{catalog::build_full_deck, models::Card};

/// Return a shuffled copy of `items`, leaving the input untouched.
///
/// Runs `passes` Fisher-Yates passes over a working copy (at least one).
/// An empty slice yields an empty `Vec`.
pub fn shuffle<T: Clone, R: Rng>(items: &[T], passes: usize, rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for _ in 0..passes.max(1) {
        for i in (1..out.len()).rev() {
            let j = rng.gen_range(0..=i);
            out.swap(i, j);
        }
    }
    out
}

/// A full 78-card deck that can be shuffled and dealt from.
pub struct Deck {
    cards: Vec<Card>,
    cursor: usize,
}

impl Deck {
    /// Build a fresh ordered deck and shuffle it `passes` times with `rng`.
    pub fn new_shuffled<R: Rng>(rng: &mut R, passes: usize) -> Self {
        Deck { cards: shuffle(&build_full_deck(), passes, rng), cursor: 0 }
    }

    /// Deal up to `n` cards from the top; fewer when the deck runs out.
    pub fn deal_n(&mut self, n: usize) -> Vec<Card> {
        let end = (self.cursor + n).min(self.cards.len());
        let dealt = self.cards[self.cursor..end].to_vec();
        self.cursor = end;
        dealt
    }
}
