pub mod budget;
pub mod config;
pub mod error;
pub mod pricing;

pub use budget::{calculate_budget, BudgetEstimator, BudgetResult, LineItem, RequestedItem};
pub use error::{AppError, Result};
pub use pricing::{parse_price_range, resolve_unit_price, PricingTable};

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// `RUST_LOG` takes precedence over `level`. Logs go to stderr so that
/// command output on stdout stays machine-readable. Can only be called once.
pub fn init_tracing(level: &str, format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let registry = tracing_subscriber::registry().with(filter);
    if format == "json" {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
