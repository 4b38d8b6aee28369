//! Draw one reading per spread and print it.
//!
//! Run with: `cargo run --example reading`
//! Set `RUST_LOG=tarot_reading_gen=debug` to see the engine's draw logs.
//!
//! ## Key concepts demonstrated
//!
//! - `DrawRequest::new(key)`: minimal constructor. Defaults: entropy, no
//!   question, default config.
//! - `with_seed(u64)` makes the output fully deterministic.
//! - An unknown spread key returns `ReadingError::UnknownSpread` and draws nothing.

use tarot_reading_gen::{all_spreads, draw, DrawRequest, ReadingConfig, ReadingError};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn print_reading(key: &str, seed: u64, question: &str, config: &ReadingConfig) {
    let request = DrawRequest::new(key)
        .with_seed(seed)
        .with_question(question)
        .with_config(config.clone());
    let reading = match draw(request) {
        Ok(reading) => reading,
        Err(e) => {
            println!("  ! {e}");
            return;
        }
    };

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  [{}]  ID: {}", reading.spread_label, reading.reading_id);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if let Some(q) = &reading.question {
        println!("  Q: {q}");
    }
    for card in &reading.cards {
        println!(
            "  {:<22} {:<24} {}",
            card.position.unwrap_or("-"),
            card.name(),
            card.orientation_label()
        );
        println!("  {:<22} ↳ {}", "", card.guidance());
    }
    println!();
    println!("  {}", reading.summary);
    println!();
}

fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let config = match ReadingConfig::from_json(r#"{ "excerpt_limit": 140 }"#) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return;
        }
    };

    for (i, spread) in all_spreads().iter().enumerate() {
        print_reading(spread.key, 100 + i as u64, "What do I need to see right now?", &config);
    }

    match draw(DrawRequest::new("horseshoe")) {
        Err(ReadingError::UnknownSpread(key)) => println!("  Unknown spread rejected: {key}"),
        other => println!("  Unexpected: {other:?}"),
    }
}
