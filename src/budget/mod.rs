//! Budget estimation
//!
//! Each requested item is matched to a unit price, parsed into low/high
//! bounds, scaled by quantity and totalled. The estimator is a pure function
//! of its inputs and a read-only pricing table, so it can be shared freely
//! across threads.

pub mod estimator;
pub mod models;

pub use estimator::{calculate_budget, BudgetEstimator, EstimateOptions};
pub use models::{BudgetResult, LineItem, PriceSource, QuantityPolicy, RequestedItem};
