use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::reading_engine::{
    config::ReadingConfig,
    draw::draw_cards,
    error::{ReadingError, ReadingResult},
    helpers::collapse_whitespace,
    models::{DrawRequest, Reading, SpreadDefinition},
    spreads::get_spread,
    synthesis::synthesize,
};

/// Reading ID from the spread key plus 32 random bits, e.g. `"CELTIC-1A2B3C4D"`.
fn make_reading_id<R: Rng>(spread: &SpreadDefinition, rng: &mut R) -> String {
    format!("{}-{:08X}", spread.key.to_uppercase(), rng.next_u32())
}

/// Core entry point: validate the spread, draw it, and synthesize a summary.
///
/// `rng_seed: Some(_)` makes the whole reading reproducible; `None` seeds
/// from entropy. An unknown spread fails before any card is drawn.
pub fn draw(request: DrawRequest) -> ReadingResult<Reading> {
    request.config.validate()?;
    let mut rng: StdRng = match request.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None       => StdRng::from_entropy(),
    };
    tracing::debug!(
        spread = %request.spread,
        seeded = request.rng_seed.is_some(),
        "drawing reading"
    );
    draw_with_rng(&request.spread, request.question.as_deref(), &mut rng, &request.config)
}

/// Same as [`draw`] but with a caller-supplied random source.
pub fn draw_with_rng<R: Rng>(
    spread_key: &str,
    question: Option<&str>,
    rng: &mut R,
    config: &ReadingConfig,
) -> ReadingResult<Reading> {
    let Some(spread) = get_spread(spread_key) else {
        tracing::warn!(spread = spread_key, "unknown spread requested");
        return Err(ReadingError::UnknownSpread(spread_key.to_string()));
    };

    let reading_id = make_reading_id(spread, rng);
    let cards = draw_cards(spread, config.shuffle_passes, rng);
    let summary = synthesize(&cards, question, config);

    tracing::debug!(
        reading_id = %reading_id,
        cards = cards.len(),
        reversed = cards.iter().filter(|c| c.reversed).count(),
        "reading drawn"
    );

    Ok(Reading {
        reading_id,
        spread_key: spread.key,
        spread_label: spread.label,
        question: question.map(collapse_whitespace).filter(|q| !q.is_empty()),
        cards,
        summary,
    })
}
