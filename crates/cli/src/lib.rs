//! Command implementations for the `constellation` and `convert` binaries.

pub mod constellation;
pub mod convert;

use std::path::Path;

use nominal_bodies::BodyCatalog;
use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber; `RUST_LOG` overrides the default `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Built-in bodies, extended with a custom catalog when one is given.
fn body_catalog(path: Option<&Path>) -> anyhow::Result<BodyCatalog> {
    match path {
        Some(path) => Ok(nominal_config::load_catalog(path)?),
        None => Ok(BodyCatalog::builtin().clone()),
    }
}
