//! HTTP exposure of the order service

pub mod builder;
pub mod extractors;
pub mod handlers;
pub mod router;

pub use builder::ServerBuilder;
pub use handlers::AppState;
pub use router::build_order_routes;

use tracing_subscriber::EnvFilter;

/// Install a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `info` for everything and `debug` for this crate. Calling it
/// twice is harmless: the second call leaves the first subscriber in place.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,eshop=debug,tower_http=debug"));

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
