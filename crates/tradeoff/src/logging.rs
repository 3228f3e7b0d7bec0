//! Log output setup.
//!
//! The engine emits structured `tracing` events (`event = "bound_committed"`
//! and friends). Embedders with their own subscriber need nothing from here.

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tradeoff_config::LoggingConfig;

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_FILTER: &str = "tradeoff=info,tradeoff_core=info";

/// Installs a formatting subscriber filtered by `RUST_LOG`, falling back to
/// `tradeoff=info`.
///
/// Safe to call multiple times - only the first call has effect.
pub fn init() {
    init_with(&LoggingConfig::default());
}

/// Like [`init`], using `config.filter` when `RUST_LOG` is unset.
pub fn init_with(config: &LoggingConfig) {
    INIT.get_or_init(|| {
        let fallback = config.filter.as_deref().unwrap_or(DEFAULT_FILTER);
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(fallback))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be installed by the embedder.
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init();
    });
}
