//! Command implementations for the CLI
//!
//! - estimate: Price a list of items and print the breakdown
//! - context: Print market pricing for a search term
//! - table: Display the active pricing table
//! - config: Configuration display and validation

pub mod config;
pub mod context;
pub mod estimate;
pub mod table;
