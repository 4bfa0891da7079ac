//! Place-picker demo binary
//!
//! Submit-driven geocoding against canned responses: the user searches an
//! address, picks the first hit, and gets coordinates plus a map link.
//! The interesting part is the second act — a slow lookup superseded by a
//! fast one never flashes its stale hit, because settlement goes by token
//! identity, not by response arrival order.

use std::time::Duration;

use serde::Deserialize;
use typeahead_core::cancel::CancelSignal;
use typeahead_core::error::FetchError;
use typeahead_core::outcome::{Item, Outcome};
use typeahead_core::query::Query;
use typeahead_runtime::RequestCoordinator;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// One hit in the geocoder's wire format: coordinates arrive as strings.
#[derive(Debug, Deserialize)]
struct GeocodeHit {
    display_name: String,
    lat: String,
    lon: String,
}

/// Canned geocoder responses, keyed by query, with per-query latency so
/// out-of-order arrival actually happens.
fn canned_response(query: &str) -> (Duration, &'static str) {
    match query {
        "san bernardino" => (
            Duration::from_millis(400),
            r#"[{"display_name":"San Bernardino, Cordillera, Paraguay","lat":"-25.3101","lon":"-57.2974"}]"#,
        ),
        "aregua" => (
            Duration::from_millis(100),
            r#"[{"display_name":"Areguá, Central, Paraguay","lat":"-25.3125","lon":"-57.3847"},
                {"display_name":"Estación Areguá, Central, Paraguay","lat":"-25.3083","lon":"-57.3892"}]"#,
        ),
        _ => (Duration::from_millis(150), "[]"),
    }
}

/// Decode the geocoder's JSON into display rows with numeric coordinates.
async fn geocode(query: Query, _cancel: CancelSignal) -> Result<Vec<Item<(f64, f64)>>, FetchError> {
    let (latency, body) = canned_response(query.as_str());
    tokio::time::sleep(latency).await;

    let hits: Vec<GeocodeHit> = serde_json::from_str(body)
        .map_err(|e| FetchError::Transport(format!("invalid geocoder response: {e}")))?;

    hits.into_iter()
        .map(|hit| {
            let lat: f64 = hit
                .lat
                .parse()
                .map_err(|_| FetchError::Transport(format!("bad latitude: {}", hit.lat)))?;
            let lon: f64 = hit
                .lon
                .parse()
                .map_err(|_| FetchError::Transport(format!("bad longitude: {}", hit.lon)))?;
            Ok(Item::new(hit.display_name, (lat, lon)))
        })
        .collect()
}

/// Show the hits and "pick" the first one, the way the map widget drops
/// its marker on the top result.
fn pick(query: &Query, outcome: Outcome<(f64, f64)>) {
    match outcome {
        Outcome::Success(items) if items.is_empty() => {
            println!("  [{query}] No se encontraron resultados.");
        }
        Outcome::Success(items) => {
            for item in &items {
                let (lat, lon) = item.payload;
                println!("  [{query}] {} ({lat:.6}, {lon:.6})", item.label);
            }
            let (lat, lon) = items[0].payload;
            println!("  >>> picked: {}", items[0].label);
            println!("  >>> https://www.google.com/maps?q={lat},{lon}");
        }
        Outcome::Failure(error) => {
            tracing::warn!(%error, "geocoding failed");
            println!("  [{query}] No pudimos completar la búsqueda. Intenta nuevamente.");
        }
        Outcome::Cancelled => {}
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "place_picker=debug,typeahead_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Place Picker: Token-Ordered Geocoding ===\n");

    let coordinator = RequestCoordinator::new(geocode, pick);

    // A single search, settled normally.
    println!(">>> Searching: \"aregua\"");
    coordinator.start(Query::new("aregua"))?;
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Two rapid searches: the first is slower and gets superseded, so
    // its hit never reaches the map. Only Areguá renders.
    println!("\n>>> Searching: \"san bernardino\", then \"aregua\" right after");
    coordinator.start(Query::new("san bernardino"))?;
    tokio::time::sleep(Duration::from_millis(30)).await;
    coordinator.start(Query::new("aregua"))?;
    tokio::time::sleep(Duration::from_millis(600)).await;

    // An address the geocoder does not know.
    println!("\n>>> Searching: \"nowhere at all\"");
    coordinator.start(Query::new("nowhere at all"))?;
    tokio::time::sleep(Duration::from_millis(300)).await;

    coordinator.dispose();
    println!("\n=== Done ===");
    Ok(())
}
