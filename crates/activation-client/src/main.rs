//! # Activation Client Demo
//!
//! A small walk through the state layer against a live API:
//!
//! 1. Load [`Config`] from the environment (`ACTIVATION_API_URL` is required).
//! 2. Build the [`AppContext`] and subscribe a stand-in presentation layer to its
//!    notifications.
//! 3. Fetch sizes and cache them explicitly with `set_sizes`.
//! 4. Feed a burst of keystrokes into a debounced unit search; only the last one hits
//!    the API.
//! 5. Shut down.
//!
//! ```bash
//! ACTIVATION_API_URL=http://localhost:3000 RUST_LOG=debug cargo run -p activation-client
//! ```

use activation_client::config::Config;
use activation_client::helpers::truncate_text;
use activation_client::lifecycle::AppContext;
use std::time::Duration;
use store_framework::tracing::setup_tracing;
use store_framework::{ConnectivityBridge, Debounced, StoreClient};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::from_env().map_err(|e| e.to_string())?;
    info!(api_url = %config.api_url, "Starting activation client");

    let bridge = ConnectivityBridge::new(true);
    let ctx = AppContext::from_config(&config, &bridge).map_err(|e| e.to_string())?;

    // Stand-in for the toast layer
    let mut notifications = ctx.notifier.subscribe();
    let toasts = tokio::spawn(async move {
        while let Ok(notification) = notifications.recv().await {
            info!(
                severity = ?notification.severity,
                duration_ms = notification.duration.as_millis() as u64,
                "{}",
                notification.message
            );
        }
    });

    let span = tracing::info_span!("load_sizes");
    async {
        match ctx.sizes.get_all().await {
            Ok(sizes) => {
                ctx.sizes.set_sizes(sizes);
                ctx.notifier
                    .success(format!("Loaded {} sizes", ctx.sizes.sizes().len()));
            }
            Err(e) => {
                error!(error = %e, "Loading sizes failed");
                ctx.notifier.error(format!("Could not load sizes: {e}"));
            }
        }
    }
    .instrument(span)
    .await;

    let units = ctx.units.clone();
    let notifier = ctx.notifier.clone();
    let search = Debounced::new(config.search_debounce, move |query: String| {
        let units = units.clone();
        let notifier = notifier.clone();
        async move {
            match units.get_all().await {
                Ok(all) => {
                    let matches: Vec<_> = all
                        .iter()
                        .filter(|unit| unit.name.to_lowercase().contains(&query.to_lowercase()))
                        .map(|unit| truncate_text(&unit.name, 24))
                        .collect();
                    info!(query = %query, count = matches.len(), "Search finished");
                    notifier.info(format!("{} units match \"{query}\"", matches.len()));
                }
                Err(e) => notifier.error(format!("Search failed: {e}")),
            }
        }
    });

    for query in ["d", "di", "dis", "disp", "display"] {
        search.call(query.to_string());
        tokio::time::sleep(Duration::from_millis(40)).await;
    }
    // Let the debounced search fire and its request complete
    tokio::time::sleep(config.search_debounce + config.http_timeout.min(Duration::from_secs(5)))
        .await;

    bridge.close();
    ctx.shutdown().await?;
    toasts.abort();

    info!("Activation client finished");
    Ok(())
}
