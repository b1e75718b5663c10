//! Built-in market pricing for landscaping plants and materials
//!
//! Entry order is significant: the matcher takes the first category and the
//! first size that match.

use crate::pricing::species::SpeciesTable;
use crate::pricing::table::PricingTable;

type Entries = &'static [(&'static str, &'static [(&'static str, &'static str)])];

const CATEGORIES: Entries = &[
    // Plants (per unit/pot)
    (
        "tree",
        &[
            ("15-gallon", "$80 - $150"),
            ("24-inch box", "$250 - $500"),
            ("mature", "$800+"),
        ],
    ),
    ("shrub", &[("1-gallon", "$10 - $20"), ("5-gallon", "$30 - $55")]),
    ("bush", &[("1-gallon", "$10 - $20"), ("5-gallon", "$30 - $55")]),
    ("grass", &[("1-gallon", "$8 - $15"), ("plug", "$2 - $5")]),
    (
        "palm",
        &[
            ("15-gallon", "$100 - $200"),
            ("mature (per foot of trunk)", "$100 - $300"),
        ],
    ),
    ("bamboo", &[("5-gallon", "$40 - $80"), ("15-gallon", "$120 - $200")]),
    (
        "hedge",
        &[
            ("5-gallon", "$35 - $60"),
            ("per linear foot (installed)", "$40 - $100"),
        ],
    ),
    ("flower", &[("4-inch pot", "$3 - $6"), ("1-gallon", "$10 - $15")]),
    ("perennial", &[("1-gallon", "$12 - $18")]),
    (
        "topiary",
        &[("shaped 5-gallon", "$60 - $120"), ("mature shaped", "$300+")],
    ),
    // Hardscape (per unit or area)
    (
        "paver",
        &[
            ("concrete (per sq ft)", "$5 - $10"),
            ("brick (per sq ft)", "$8 - $15"),
            ("stone (per sq ft)", "$15 - $30"),
        ],
    ),
    (
        "gravel",
        &[
            ("pea gravel (per cubic yard)", "$40 - $60"),
            ("decorative rock (per ton)", "$100 - $300"),
            ("bag (0.5 cu ft)", "$5 - $10"),
        ],
    ),
    (
        "stone",
        &[
            ("flagstone (per ton)", "$300 - $600"),
            ("boulder (each)", "$100 - $500"),
        ],
    ),
    (
        "mulch",
        &[
            ("bulk (per cubic yard)", "$30 - $50"),
            ("bag (2 cu ft)", "$4 - $8"),
        ],
    ),
    (
        "edging",
        &[
            ("plastic (per ft)", "$1 - $3"),
            ("metal (per ft)", "$3 - $8"),
            ("stone (per ft)", "$5 - $15"),
        ],
    ),
    (
        "retaining wall",
        &[
            ("block (per sq ft face)", "$15 - $25"),
            ("natural stone (per sq ft face)", "$30 - $60"),
        ],
    ),
];

const SPECIES: Entries = &[
    // Japanese maples
    (
        "Acer palmatum",
        &[
            ("1-gallon", "$25 - $35"),
            ("5-gallon", "$65 - $95"),
            ("15-gallon", "$180 - $280"),
        ],
    ),
    (
        "Acer palmatum 'Bloodgood'",
        &[("5-gallon", "$75 - $110"), ("15-gallon", "$200 - $350")],
    ),
    // Ornamental grasses
    ("Festuca glauca", &[("4-inch pot", "$5 - $8"), ("1-gallon", "$12 - $15")]),
    ("Calamagrostis", &[("1-gallon", "$15 - $22"), ("3-gallon", "$30 - $40")]),
    ("Imperata cylindrica", &[("1-gallon", "$14 - $20")]),
    // Evergreens
    ("Picea abies", &[("5-gallon", "$45 - $70"), ("15-gallon", "$120 - $180")]),
    ("Juniperus", &[("5-gallon", "$35 - $60"), ("15-gallon", "$90 - $140")]),
    // Flowering shrubs
    ("Adenium obesum", &[("4-inch pot", "$12 - $18"), ("1-gallon", "$25 - $40")]),
    ("Rosa", &[("2-gallon", "$18 - $30"), ("5-gallon", "$40 - $65")]),
    ("Lavandula", &[("1-gallon", "$10 - $16"), ("3-gallon", "$22 - $35")]),
    // Bamboo
    ("Bambusa", &[("5-gallon", "$40 - $75"), ("15-gallon", "$130 - $220")]),
    // Palms
    (
        "Washingtonia",
        &[("15-gallon", "$110 - $200"), ("per foot of trunk", "$150 - $350")],
    ),
    // Ground cover
    ("Vinca minor", &[("4-inch pot", "$4 - $7"), ("flat (18 plants)", "$25 - $40")]),
];

/// The reference category table
pub fn reference_table() -> PricingTable {
    PricingTable::from_entries(CATEGORIES)
}

/// The reference species table
pub fn reference_species() -> SpeciesTable {
    SpeciesTable::from_entries(SPECIES)
}
