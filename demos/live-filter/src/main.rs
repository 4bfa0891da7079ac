//! Live-filter demo binary
//!
//! Simulates a user typing into a search field over an in-memory client
//! directory: bursts of keystrokes coalesce into one fetch, a slower
//! superseded lookup never overwrites a newer one, and the renderer only
//! ever sees the outcome for the text the user settled on.

use std::time::Duration;

use typeahead_core::cancel::CancelSignal;
use typeahead_core::config::SearchConfig;
use typeahead_core::error::FetchError;
use typeahead_core::outcome::{Item, Outcome};
use typeahead_core::query::Query;
use typeahead_runtime::SearchBox;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DIRECTORY: &[(&str, &str)] = &[
    ("Ana María Benítez", "Asunción"),
    ("Carlos Giménez", "Encarnación"),
    ("Lucía Fernández", "Ciudad del Este"),
    ("Marta Villalba", "Asunción"),
    ("Pedro Cáceres", "Luque"),
    ("Rosa Martínez", "San Lorenzo"),
    ("Víctor Ayala", "Asunción"),
];

/// Case-insensitive substring match over names and cities, with a little
/// artificial latency so the debounce and supersede behavior is visible.
async fn lookup(query: Query, _cancel: CancelSignal) -> Result<Vec<Item<String>>, FetchError> {
    tokio::time::sleep(Duration::from_millis(80)).await;

    let needle = query.as_str().to_lowercase();
    let matches = DIRECTORY
        .iter()
        .filter(|(name, city)| {
            needle.is_empty()
                || name.to_lowercase().contains(&needle)
                || city.to_lowercase().contains(&needle)
        })
        .map(|(name, city)| Item::new(*name, (*city).to_owned()))
        .collect();
    Ok(matches)
}

/// Print results the way the widget would paint them.
fn paint(query: &Query, outcome: Outcome<String>) {
    match outcome {
        Outcome::Success(items) if items.is_empty() => {
            println!("  [{query}] No se encontraron resultados.");
        }
        Outcome::Success(items) => {
            println!("  [{query}] {} resultado(s):", items.len());
            for item in items {
                println!("    - {} ({})", item.label, item.payload);
            }
        }
        Outcome::Failure(error) => {
            tracing::warn!(%error, "lookup failed");
            println!("  [{query}] No pudimos completar la búsqueda. Intenta nuevamente.");
        }
        Outcome::Cancelled => {}
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "live_filter=debug,typeahead_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Live Filter: Debounced Single-Flight Search ===\n");

    let config = SearchConfig::new()
        .with_debounce(Duration::from_millis(350))
        .with_min_length(2);
    let mut search = SearchBox::new(config, lookup, paint);

    // A typing burst: every keystroke lands inside the previous quiet
    // window, so only the final text fetches.
    println!(">>> Typing burst: \"a\" .. \"asun\"");
    for text in ["a", "as", "asu", "asun"] {
        search.input(text);
        tokio::time::sleep(Duration::from_millis(90)).await;
    }
    tokio::time::sleep(Duration::from_millis(600)).await;

    // Backspacing to something shorter, then settling on a city.
    println!("\n>>> Retyping: \"luq\"");
    search.input("luq");
    tokio::time::sleep(Duration::from_millis(600)).await;

    // Explicit submit skips the debounce window entirely.
    println!("\n>>> Submit: \"martínez\"");
    search.submit("martínez");
    tokio::time::sleep(Duration::from_millis(300)).await;

    // Clearing the field fires despite the minimum length, so the view
    // can drop the old results.
    println!("\n>>> Clearing the field");
    search.input("");
    tokio::time::sleep(Duration::from_millis(600)).await;

    search.dispose();
    println!("\n=== Done ===");
}
