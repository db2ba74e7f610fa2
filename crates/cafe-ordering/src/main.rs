//! # Cafe Ordering
//!
//! A text rendition of the student cafe's ordering view.
//!
//! ## 🚀 Core Components
//!
//! - **[gateway]**: The HTTP port to the catalog and order services, fronted by the API gateway.
//! - **[ordering_view]**: The [`OrderingView`](ordering_view::OrderingView) component holding menu, cart, and status.
//! - **[handle]**: The typed [`OrderingHandle`](handle::OrderingHandle) that hides raw event dispatch.
//! - **[lifecycle]**: The [`CafeApp`](lifecycle::CafeApp) orchestrator that mounts and shuts down the view.
//!
//! ## 📚 Quick Start
//!
//! The entry point below demonstrates:
//! 1. Mounting the view (which loads the catalog).
//! 2. Filling the cart from the menu.
//! 3. Placing an order and rendering the outcome.

use std::sync::Arc;

use cafe_ordering::gateway::HttpGateway;
use cafe_ordering::lifecycle::CafeApp;
use cafe_ordering::render;
use reqwest::Url;
use tracing::{info, Instrument};
use view_runtime::tracing::setup_tracing;

/// Address of the API gateway that fronts the catalog and order services.
const GATEWAY_URL: &str = "http://localhost:8080";

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting cafe ordering view");

    let base = Url::parse(GATEWAY_URL).map_err(|e| e.to_string())?;
    let gateway = HttpGateway::new(base).map_err(|e| e.to_string())?;
    let app = CafeApp::new(Arc::new(gateway));

    // The first snapshot observes post-mount state: the menu as loaded, or
    // empty if the catalog fetch failed (which is logged, not surfaced).
    let snapshot = app.ordering.snapshot().await.map_err(|e| e.to_string())?;
    println!("{}", render::screen(&snapshot));

    let span = tracing::info_span!("cart_filling");
    async {
        // Take the first two menu entries, then the first once more: a
        // repeated item is simply two cart entries.
        let picks: Vec<_> = snapshot
            .menu
            .iter()
            .take(2)
            .chain(snapshot.menu.first())
            .cloned()
            .collect();
        for item in picks {
            info!(item_id = %item.id, name = %item.name, "Adding to cart");
            app.ordering
                .add_to_cart(item)
                .await
                .map_err(|e| e.to_string())?;
        }
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("order_processing");
    async {
        info!("Placing order");
        app.ordering.place_order().await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await?;

    // The outcome (confirmation, failure notice, or empty-cart notice when
    // the menu never loaded) is part of the rendered screen.
    let snapshot = app.ordering.snapshot().await.map_err(|e| e.to_string())?;
    println!("{}", render::screen(&snapshot));

    app.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
