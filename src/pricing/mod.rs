pub mod context;
pub mod price_range;
pub mod reference;
pub mod species;
pub mod table;

pub use context::pricing_context;
pub use price_range::{format_usd, format_usd_range, parse_price_range, ParsedPrice, PriceRange};
pub use reference::{reference_species, reference_table};
pub use species::{SpeciesMatch, SpeciesTable};
pub use table::{resolve_unit_price, PriceCategory, PricingTable, Resolution, SizePrice};
