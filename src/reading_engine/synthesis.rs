//! Reading synthesis: turn an oriented, positioned set of cards into one
//! summary paragraph.
//!
//! ## Pipeline
//!
//! 1. [`tally`] counts suits, Major vs Minor cards, and reversals.
//! 2. [`theme_sentence`] picks one framing sentence (Major weight first, then
//!    the dominant suit, then a neutral line).
//! 3. [`resolve_role`] walks [`ROLE_RULES`] to find the present, challenge,
//!    advice and outcome cards from the position labels.
//! 4. [`synthesize`] wraps each role card's excerpt in its template and joins
//!    everything in a fixed order.
//!
//! Role lookup is table-driven: each rule lists label keyword tiers tried in
//! order, then an index fallback. Earlier tiers beat later ones, and any
//! label match beats the fallback.

use crate::reading_engine::{
    config::ReadingConfig,
    helpers::{collapse_whitespace, excerpt, label_matches},
    models::{DrawnCard, Role, Suit},
};

// ---------------------------------------------------------------------------
// Thematic tally
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Indexed by [`Suit::index`].
    pub suits: [usize; 4],
    pub major: usize,
    pub minor: usize,
    pub reversed: usize,
    pub total: usize,
}

impl Tally {
    pub fn suit_count(&self, suit: Suit) -> usize {
        self.suits[suit.index()]
    }

    /// Suit with the highest count; the first suit in [`Suit::ALL`] wins ties.
    /// `None` when no Minor Arcana card was drawn.
    pub fn dominant_suit(&self) -> Option<Suit> {
        let mut best: Option<(Suit, usize)> = None;
        for suit in Suit::ALL {
            let n = self.suit_count(suit);
            if n > 0 && best.map_or(true, |(_, b)| n > b) {
                best = Some((suit, n));
            }
        }
        best.map(|(suit, _)| suit)
    }

    /// Major count exceeds `floor(share * total)`.
    pub fn major_dominant(&self, share: f64) -> bool {
        let threshold = (share * self.total as f64).floor() as usize;
        self.total > 0 && self.major > threshold
    }

    pub fn reversal_ratio(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.reversed as f64 / self.total as f64
        }
    }
}

/// One pass over the cards.
pub fn tally(cards: &[DrawnCard]) -> Tally {
    let mut t = Tally::default();
    for drawn in cards {
        t.total += 1;
        match drawn.card.suit {
            Some(suit) => {
                t.minor += 1;
                t.suits[suit.index()] += 1;
            }
            None => t.major += 1,
        }
        if drawn.reversed {
            t.reversed += 1;
        }
    }
    t
}

// ---------------------------------------------------------------------------
// Framing sentences
// ---------------------------------------------------------------------------

pub const MAJOR_FRAMING: &str =
    "This is a fate-tinged moment: the Major Arcana carry this reading, pointing to larger life lessons moving beneath everyday events.";

pub const NEUTRAL_FRAMING: &str =
    "The cards describe a mixed landscape, with no single theme taking the lead.";

pub const HEAVY_REVERSAL: &str =
    "Many cards appear reversed, suggesting inner resistance to release: something is asking to be let go before the energy can move freely again.";

pub const LIGHT_REVERSAL: &str =
    "A few reversed cards point to course-correction: small adjustments now will keep you aligned with where you want to go.";

pub fn suit_framing(suit: Suit) -> &'static str {
    match suit {
        Suit::Wands =>
            "Wands lead this reading, putting action, drive and momentum at the center of your situation.",
        Suit::Cups =>
            "Cups lead this reading, so emotions, relationships and intuition are shaping what unfolds.",
        Suit::Swords =>
            "Swords lead this reading, pointing to mindset, clarity and honest communication as the heart of the matter.",
        Suit::Pentacles =>
            "Pentacles lead this reading, grounding the message in practical matters: work, resources and health.",
    }
}

/// Major Arcana weight beats suit framing; no suit at all falls back to neutral.
pub fn theme_sentence(t: &Tally, config: &ReadingConfig) -> &'static str {
    if t.major_dominant(config.major_dominance_share) {
        MAJOR_FRAMING
    } else if let Some(suit) = t.dominant_suit() {
        suit_framing(suit)
    } else {
        NEUTRAL_FRAMING
    }
}

/// `None` when nothing was reversed.
pub fn reversal_sentence(t: &Tally, config: &ReadingConfig) -> Option<&'static str> {
    let ratio = t.reversal_ratio();
    if ratio >= config.heavy_reversal_ratio && ratio > 0.0 {
        Some(HEAVY_REVERSAL)
    } else if ratio > 0.0 {
        Some(LIGHT_REVERSAL)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Role extraction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// Card at this index, or the first card when the reading is shorter.
    Index(usize),
    Last,
}

#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    pub role: Role,
    /// Tried in order. A label matches a tier when it contains any keyword.
    pub tiers: &'static [&'static [&'static str]],
    pub fallback: Fallback,
}

/// Lookup order for each role, in assembly order.
pub static ROLE_RULES: [RoleRule; 4] = [
    RoleRule {
        role: Role::Present,
        tiers: &[&["present"], &["significator"]],
        fallback: Fallback::Index(0),
    },
    RoleRule {
        role: Role::Challenge,
        tiers: &[&["challenge"], &["crossing"], &["past"]],
        fallback: Fallback::Index(1),
    },
    RoleRule {
        role: Role::Advice,
        tiers: &[&["advice"], &["self", "attitude"]],
        fallback: Fallback::Index(2),
    },
    RoleRule {
        // "outcome" outranks "future" so a Celtic Cross resolves to its last
        // slot rather than "Near Future".
        role: Role::Outcome,
        tiers: &[&["outcome"], &["final"], &["future"]],
        fallback: Fallback::Last,
    },
];

pub fn rule_for(role: Role) -> &'static RoleRule {
    match role {
        Role::Present   => &ROLE_RULES[0],
        Role::Challenge => &ROLE_RULES[1],
        Role::Advice    => &ROLE_RULES[2],
        Role::Outcome   => &ROLE_RULES[3],
    }
}

/// Resolve `rule` against `cards`. Only `None` for an empty reading.
pub fn resolve_role<'a>(rule: &RoleRule, cards: &'a [DrawnCard]) -> Option<&'a DrawnCard> {
    for tier in rule.tiers {
        let hit = cards.iter().find(|c| {
            c.position
                .is_some_and(|label| tier.iter().any(|kw| label_matches(label, kw)))
        });
        if hit.is_some() {
            return hit;
        }
    }
    match rule.fallback {
        Fallback::Index(i) => cards.get(i).or_else(|| cards.first()),
        Fallback::Last => cards.last(),
    }
}

fn role_clause(role: Role, drawn: &DrawnCard, limit: usize) -> String {
    let name = if drawn.reversed {
        format!("{}, reversed", drawn.name())
    } else {
        drawn.name().to_string()
    };
    let text = excerpt(drawn.meaning(), limit);
    match role {
        Role::Present   => format!("At the core ({name}): {text}"),
        Role::Challenge => format!("The challenge ({name}): {text}"),
        Role::Advice    => format!("Advice ({name}): {text}"),
        Role::Outcome   => format!("Where this is heading ({name}): {text}"),
    }
}

fn question_clause(question: Option<&str>) -> Option<String> {
    let q = collapse_whitespace(question?);
    if q.is_empty() {
        None
    } else {
        Some(format!("On your question \"{q}\":"))
    }
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

/// Compose the summary for a reading. An empty reading yields `""`.
pub fn synthesize(cards: &[DrawnCard], question: Option<&str>, config: &ReadingConfig) -> String {
    if cards.is_empty() {
        return String::new();
    }

    let t = tally(cards);
    let mut parts: Vec<String> = Vec::with_capacity(7);

    if let Some(q) = question_clause(question) {
        parts.push(q);
    }
    parts.push(theme_sentence(&t, config).to_string());

    let mut used = Vec::with_capacity(ROLE_RULES.len());
    for rule in &ROLE_RULES {
        let Some(drawn) = resolve_role(rule, cards) else { continue };
        if config.dedupe_roles && used.contains(&drawn.id) {
            continue;
        }
        used.push(drawn.id);
        parts.push(role_clause(rule.role, drawn, config.excerpt_limit));
    }

    if let Some(r) = reversal_sentence(&t, config) {
        parts.push(r.to_string());
    }

    collapse_whitespace(&parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reading_engine::catalog::find_card;
    use uuid::Uuid;

    fn card(name: &str, reversed: bool, position: Option<&'static str>) -> DrawnCard {
        DrawnCard {
            id: Uuid::new_v4(),
            card: *find_card(name).expect("catalog card"),
            reversed,
            position,
        }
    }

    #[test]
    fn tally_counts_everything_once() {
        let cards = [
            card("Ace of Cups", false, None),
            card("Two of Cups", true, None),
            card("The Sun", true, None),
        ];
        let t = tally(&cards);
        assert_eq!(t.total, 3);
        assert_eq!(t.major, 1);
        assert_eq!(t.minor, 2);
        assert_eq!(t.reversed, 2);
        assert_eq!(t.suit_count(Suit::Cups), 2);
    }

    #[test]
    fn tied_suits_go_to_declaration_order() {
        let cards = [
            card("Ace of Pentacles", false, None),
            card("Ace of Swords", false, None),
        ];
        assert_eq!(tally(&cards).dominant_suit(), Some(Suit::Swords));
    }

    #[test]
    fn single_major_does_not_dominate_three_cards() {
        let cards = [
            card("The Moon", false, None),
            card("Ace of Wands", false, None),
            card("Two of Wands", false, None),
        ];
        let config = ReadingConfig::default();
        let t = tally(&cards);
        assert!(!t.major_dominant(config.major_dominance_share));
        assert_eq!(theme_sentence(&t, &config), suit_framing(Suit::Wands));
    }

    #[test]
    fn single_major_card_dominates_a_single_reading() {
        let cards = [card("The Moon", false, None)];
        let config = ReadingConfig::default();
        assert_eq!(theme_sentence(&tally(&cards), &config), MAJOR_FRAMING);
    }

    #[test]
    fn neutral_framing_without_suits_or_major_weight() {
        let config = ReadingConfig { major_dominance_share: 1.0, ..ReadingConfig::default() };
        let cards = [card("The Moon", false, None), card("The Sun", false, None)];
        assert_eq!(theme_sentence(&tally(&cards), &config), NEUTRAL_FRAMING);
    }

    #[test]
    fn reversal_thresholds() {
        let config = ReadingConfig::default();
        let up = card("Ace of Cups", false, None);
        let down = card("Two of Cups", true, None);
        let none = tally(&[up.clone(), up.clone()]);
        let half = tally(&[up.clone(), down.clone()]);
        let third = tally(&[up.clone(), up, down]);
        assert_eq!(reversal_sentence(&none, &config), None);
        assert_eq!(reversal_sentence(&half, &config), Some(HEAVY_REVERSAL));
        assert_eq!(reversal_sentence(&third, &config), Some(LIGHT_REVERSAL));
    }

    #[test]
    fn celtic_roles_prefer_specific_labels() {
        let cards = [
            card("The Fool", false, Some("Significator")),
            card("Ace of Cups", false, Some("Crossing")),
            card("Two of Cups", false, Some("Foundation")),
            card("Three of Cups", false, Some("Recent Past")),
            card("Four of Cups", false, Some("Crowning")),
            card("Five of Cups", false, Some("Near Future")),
            card("Six of Cups", false, Some("Self/Attitude")),
            card("Seven of Cups", false, Some("Environment")),
            card("Eight of Cups", false, Some("Hopes & Fears")),
            card("Nine of Cups", false, Some("Outcome")),
        ];
        let name = |role| resolve_role(rule_for(role), &cards).map(|c| c.name());
        assert_eq!(name(Role::Present), Some("The Fool"));
        assert_eq!(name(Role::Challenge), Some("Ace of Cups"));
        assert_eq!(name(Role::Advice), Some("Six of Cups"));
        assert_eq!(name(Role::Outcome), Some("Nine of Cups"));
    }

    #[test]
    fn index_fallbacks_for_unlabelled_cards() {
        let cards = [card("The Fool", false, None), card("The Sun", false, None)];
        let name = |role| resolve_role(rule_for(role), &cards).map(|c| c.name());
        assert_eq!(name(Role::Present), Some("The Fool"));
        assert_eq!(name(Role::Challenge), Some("The Sun"));
        assert_eq!(name(Role::Advice), Some("The Fool"));
        assert_eq!(name(Role::Outcome), Some("The Sun"));
        assert!(resolve_role(rule_for(Role::Outcome), &[]).is_none());
    }

    #[test]
    fn empty_reading_has_empty_summary() {
        assert_eq!(synthesize(&[], Some("Anything?"), &ReadingConfig::default()), "");
    }

    #[test]
    fn summary_order_is_fixed() {
        let cards = [
            card("Ace of Wands", true, Some("Past")),
            card("Two of Wands", false, Some("Present")),
            card("Three of Wands", false, Some("Future")),
        ];
        let summary = synthesize(&cards, Some("  Should I   move? "), &ReadingConfig::default());
        assert!(summary.starts_with("On your question \"Should I move?\":"));
        let pos = |needle: &str| summary.find(needle).unwrap_or_else(|| panic!("missing {needle}"));
        assert!(pos("Wands lead") < pos("At the core (Two of Wands)"));
        assert!(pos("At the core") < pos("The challenge (Ace of Wands, reversed)"));
        assert!(pos("The challenge") < pos("Advice (Three of Wands)"));
        assert!(pos("Advice") < pos("Where this is heading (Three of Wands)"));
        assert!(summary.ends_with(LIGHT_REVERSAL));
        assert!(!summary.contains("  "));
    }

    #[test]
    fn reversed_cards_use_reversed_meaning() {
        let cards = [card("The Tower", true, Some("Message of the Moment"))];
        let summary = synthesize(&cards, None, &ReadingConfig::default());
        let tower = find_card("The Tower").expect("catalog card");
        assert!(summary.contains(&excerpt(tower.reversed, 180)));
        assert!(summary.contains(HEAVY_REVERSAL));
    }

    #[test]
    fn dedupe_keeps_one_clause_per_card() {
        let cards = [card("The Star", false, Some("Message of the Moment"))];
        let config = ReadingConfig { dedupe_roles: true, ..ReadingConfig::default() };
        let summary = synthesize(&cards, None, &config);
        assert_eq!(summary.matches("(The Star)").count(), 1);
        let full = synthesize(&cards, None, &ReadingConfig::default());
        assert_eq!(full.matches("(The Star)").count(), 4);
    }
}
