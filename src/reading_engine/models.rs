use std::fmt;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::reading_engine::config::ReadingConfig;

// ---------------------------------------------------------------------------
// Card primitives
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arcana {
    Major,
    Minor,
}

impl fmt::Display for Arcana {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arcana::Major => write!(f, "Major Arcana"),
            Arcana::Minor => write!(f, "Minor Arcana"),
        }
    }
}

/// The four Minor Arcana suits, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Wands,
    Cups,
    Swords,
    Pentacles,
}

impl Suit {
    /// Declaration order; the first suit wins a tied tally.
    pub const ALL: [Suit; 4] = [Suit::Wands, Suit::Cups, Suit::Swords, Suit::Pentacles];

    pub fn index(self) -> usize {
        match self {
            Suit::Wands     => 0,
            Suit::Cups      => 1,
            Suit::Swords    => 2,
            Suit::Pentacles => 3,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Suit::Wands     => "Wands",
            Suit::Cups      => "Cups",
            Suit::Swords    => "Swords",
            Suit::Pentacles => "Pentacles",
        };
        write!(f, "{}", s)
    }
}

/// One catalog entry. Cards are compiled-in static content and never mutate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Card {
    pub name: &'static str,
    pub arcana: Arcana,
    /// `None` for Major Arcana.
    pub suit: Option<Suit>,
    pub upright: &'static str,
    pub reversed: &'static str,
    pub upright_guidance: &'static str,
    pub reversed_guidance: &'static str,
}

impl Card {
    pub fn is_major(&self) -> bool {
        self.arcana == Arcana::Major
    }

    /// Meaning text for the given orientation, falling back to the other
    /// orientation when the requested text is blank.
    pub fn meaning_for(&self, reversed: bool) -> &'static str {
        oriented_text(self.name, self.upright, self.reversed, reversed)
    }

    pub fn guidance_for(&self, reversed: bool) -> &'static str {
        oriented_text(self.name, self.upright_guidance, self.reversed_guidance, reversed)
    }
}

fn oriented_text(
    name: &str, upright: &'static str, reversed_text: &'static str, reversed: bool,
) -> &'static str {
    let (wanted, other) = if reversed { (reversed_text, upright) } else { (upright, reversed_text) };
    if wanted.trim().is_empty() {
        tracing::warn!(card = name, reversed, "missing oriented text, using opposite orientation");
        other
    } else {
        wanted
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A card as it came out of one draw: oriented and bound to a spread slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawnCard {
    pub id: Uuid,
    pub card: Card,
    pub reversed: bool,
    pub position: Option<&'static str>,
}

impl DrawnCard {
    pub fn name(&self) -> &'static str {
        self.card.name
    }

    pub fn meaning(&self) -> &'static str {
        self.card.meaning_for(self.reversed)
    }

    pub fn guidance(&self) -> &'static str {
        self.card.guidance_for(self.reversed)
    }

    pub fn orientation_label(&self) -> &'static str {
        if self.reversed { "Reversed" } else { "Upright" }
    }
}

impl fmt::Display for DrawnCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.reversed {
            write!(f, "{} (reversed)", self.card.name)
        } else {
            write!(f, "{}", self.card.name)
        }
    }
}

// ---------------------------------------------------------------------------
// Spreads and reading roles
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpreadDefinition {
    pub key: &'static str,
    pub label: &'static str,
    /// Ordered semantic slots; the spread draws exactly one card per slot.
    pub positions: &'static [&'static str],
}

impl SpreadDefinition {
    pub fn card_count(&self) -> usize {
        self.positions.len()
    }
}

/// Semantic roles the synthesis pulls out of a reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Present,
    Challenge,
    Advice,
    Outcome,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Present   => write!(f, "Present"),
            Role::Challenge => write!(f, "Challenge"),
            Role::Advice    => write!(f, "Advice"),
            Role::Outcome   => write!(f, "Outcome"),
        }
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawRequest {
    /// Spread catalog key, e.g. `"three"`.
    pub spread: String,
    pub question: Option<String>,
    pub rng_seed: Option<u64>,
    #[serde(default)]
    pub config: ReadingConfig,
}

impl DrawRequest {
    /// Minimal request: entropy seed, no question, default config.
    pub fn new(spread: impl Into<String>) -> Self {
        DrawRequest {
            spread: spread.into(),
            question: None,
            rng_seed: None,
            config: ReadingConfig::default(),
        }
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_config(mut self, config: ReadingConfig) -> Self {
        self.config = config;
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Reading {
    pub reading_id: String,
    pub spread_key: &'static str,
    pub spread_label: &'static str,
    pub question: Option<String>,
    /// One card per spread position, in position order.
    pub cards: Vec<DrawnCard>,
    pub summary: String,
}
