//! Core reading engine: card catalog, shuffling, drawing, and synthesis.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: cards, drawn cards, spreads, request/response structs |
//! | `catalog`   | The static 78-card table and `build_full_deck()` |
//! | `deck`      | Multi-pass Fisher-Yates shuffle and a dealable deck |
//! | `spreads`   | Spread catalog and key lookup |
//! | `draw`      | Draws one oriented card per spread position |
//! | `synthesis` | Tally, framing, role extraction, and summary assembly |
//! | `helpers`   | Excerpt and whitespace helpers used by synthesis |
//! | `config`    | `ReadingConfig` thresholds and JSON loading |
//! | `error`     | `ReadingError` |
//! | `generator` | Single entry point `draw()` |

pub mod catalog;
pub mod config;
pub mod deck;
pub mod draw;
pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod spreads;
pub mod synthesis;

// Re-export the public API surface so callers can use
// `reading_engine::draw` without reaching into sub-modules.
pub use catalog::{build_full_deck, find_card};
pub use config::ReadingConfig;
pub use deck::shuffle;
pub use error::{ReadingError, ReadingResult};
pub use generator::{draw, draw_with_rng};
pub use models::{
    Arcana, Card, DrawRequest, DrawnCard, Reading, Role, SpreadDefinition, Suit,
};
pub use spreads::{all_spreads, get_spread};
pub use synthesis::synthesize;
