use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, prelude::*};

/// Production: `info`, with the `audit` target always on and the database and
/// HTTP client stacks quietened.
const PRODUCTION_FILTER: &str = "info,audit=info,sea_orm=warn,sqlx=warn,reqwest=warn,hyper=warn";

/// Development: the storefront crates at `debug`, their dependencies at `info`.
const DEVELOPMENT_FILTER: &str = "info,audit=info,domain_products=debug,domain_cart=debug,\
domain_reviews=debug,domain_users=debug,product_api=debug,cart_api=debug,review_api=debug,\
user_api=debug,storefront_api=debug,axum_helpers=debug,database=debug,sqlx=info";

/// Filter used when `RUST_LOG` is unset.
pub fn default_filter(environment: &Environment) -> &'static str {
    if environment.is_production() {
        PRODUCTION_FILTER
    } else {
        DEVELOPMENT_FILTER
    }
}

/// Install the color-eyre report handler. Call first thing in `main`; repeat
/// calls are ignored.
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Install the global subscriber: flattened JSON lines in production, compact
/// human output in development. Both carry span traces for eyre reports.
///
/// `RUST_LOG` replaces [`default_filter`]. A second call leaves the first
/// subscriber in place.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(environment)));

    let installed = if environment.is_production() {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_current_span(false),
            )
            .with(tracing_error::ErrorLayer::default())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().compact().with_target(true))
            .with(tracing_error::ErrorLayer::default())
            .try_init()
    };

    match installed {
        Ok(()) => info!(environment = ?environment, "Logging initialized"),
        Err(_) => debug!("Logging already initialized"),
    }
}
