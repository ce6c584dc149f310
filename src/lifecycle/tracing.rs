//! # Observability & Tracing
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable (`info` when unset)
//! - **Compact format** with the crate/module prefix hidden (`with_target(false)`)
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and the final menu size
//! - **Actions**: Every restaurant action (debug), its success (info) or failure (warn)
//! - **Client Calls**: One span per [`RestaurantClient`](crate::clients::RestaurantClient) method
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full action payloads
//! RUST_LOG=debug cargo run
//!
//! # Filter to the actor loop
//! RUST_LOG=restaurant::framework=debug cargo run
//! ```
//!
//! **With `RUST_LOG=debug`** removing an item that is not on the menu looks like:
//!
//! ```text
//! DEBUG remove_from_menu: Sending request name="French fries"
//! DEBUG Action entity_type="Restaurant" action=RemoveFromMenu { name: "French fries" }
//! WARN Action failed entity_type="Restaurant" error=Item not found: French fries
//! ```
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact()
        .init();
}
