//! # tarot_reading_gen
//!
//! An offline tarot draw and reading-synthesis engine.
//!
//! The library models a full 78-card deck, shuffles it, draws cards into a
//! named spread (single card, three-card, Celtic Cross), gives each card an
//! upright or reversed orientation, and composes one coherent summary from
//! the drawn cards and an optional question.
//!
//! ## How it works
//!
//! 1. Create a [`DrawRequest`] with a spread key, an optional question, an
//!    optional RNG seed, and a [`ReadingConfig`].
//! 2. Call [`draw()`]: the engine validates the spread, shuffles a fresh deck,
//!    takes one card per position, flips each card's orientation, and
//!    synthesizes a summary from suit balance, Major Arcana weight, reversals,
//!    and the cards in the key positions.
//! 3. The returned [`Reading`] holds the drawn cards in position order and the
//!    summary text, ready to display in any UI.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact same
//!   reading, card ids included.
//! - **Fail closed**: an unknown spread key returns
//!   [`ReadingError::UnknownSpread`] and draws nothing.
//! - **Tunable policy**: thresholds live in [`ReadingConfig`], loadable from JSON.
//!
//! ## Quick start
//!
//! ```rust
//! use tarot_reading_gen::{draw, get_spread, DrawRequest, ReadingError};
//!
//! let spread = get_spread("three").expect("three-card spread");
//! println!("{} needs {} cards", spread.label, spread.card_count());
//!
//! let reading = draw(DrawRequest::new("three").with_question("What should I focus on?").with_seed(42))
//!     .expect("known spread");
//! for card in &reading.cards {
//!     println!("{}: {}", card.position.unwrap_or("-"), card);
//! }
//! println!("{}", reading.summary);
//!
//! assert!(matches!(
//!     draw(DrawRequest::new("pentagram")),
//!     Err(ReadingError::UnknownSpread(_))
//! ));
//! ```

pub mod reading_engine;

// Convenience re-exports so callers can use `tarot_reading_gen::draw`
// directly without reaching into `reading_engine::`.
pub use reading_engine::{
    all_spreads, build_full_deck, draw, draw_with_rng, find_card, get_spread, shuffle,
    synthesize, Arcana, Card, DrawRequest, DrawnCard, Reading, ReadingConfig, ReadingError,
    ReadingResult, Role, SpreadDefinition, Suit,
};
