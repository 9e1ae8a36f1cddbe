//! Simple CLI that reads HTML from stdin and prints its Twitter card as JSON.
//!
//! Usage: `card_stdin [ORIGIN] < page.html`
//!
//! Prints `null` when the page declares no card. Set `RUST_LOG` to see
//! deprecation warnings and debug events on stderr.

use std::io::{self, Read};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use twitter_cards::parse_bytes;

fn setup_logging(default_log_settings: &str) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_settings.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    setup_logging("warn");

    let origin = std::env::args().nth(1).unwrap_or_default();

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let card = match parse_bytes(&html, &origin) {
        Ok(card) => card,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&card) {
        Ok(json) => println!("{json}"),
        Err(err) => {
            eprintln!("Failed to serialize card: {err}");
            std::process::exit(1);
        }
    }
}
