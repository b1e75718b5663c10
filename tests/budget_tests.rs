/// Integration tests for budget estimation against the reference pricing data
use landscape_budget::{
    budget::{BudgetEstimator, EstimateOptions, PriceSource, QuantityPolicy, RequestedItem},
    calculate_budget, parse_price_range,
    pricing::{reference_species, reference_table, resolve_unit_price, PricingTable, Resolution},
};
use std::sync::Arc;

fn items_from_json(json: &str) -> Vec<RequestedItem> {
    serde_json::from_str(json).expect("valid item JSON")
}

#[test]
fn test_reference_scenario_from_json() {
    let items = items_from_json(
        r#"[
            {"name": "Japanese Maple", "category": "tree", "size": "15-gallon", "quantity": 2},
            {"name": "Lavender", "category": "shrub", "size": "1-gallon", "quantity": 10},
            {"name": "Pea Gravel", "category": "gravel", "size": "pea gravel", "quantity": 5}
        ]"#,
    );

    let result = calculate_budget(&items, &reference_table());

    assert_eq!(result.total_low, 460.0);
    assert_eq!(result.total_high, 800.0);
    assert_eq!(result.breakdown.len(), 3);
    assert_eq!(result.breakdown[0].item, "Japanese Maple");
    assert_eq!(result.breakdown[0].total_estimate, "$160.00 - $300.00");
    assert_eq!(result.breakdown[1].total_estimate, "$100.00 - $200.00");
    assert_eq!(result.breakdown[2].unit_price, "$40 - $60");
    assert_eq!(result.breakdown[2].total_estimate, "$200.00 - $300.00");
}

#[test]
fn test_palm_tree_resolves_to_first_listed_category() {
    let table = reference_table();

    // "tree" is listed before "palm" in the reference table
    let tree_pos = table.categories.iter().position(|c| c.name == "tree").unwrap();
    let palm_pos = table.categories.iter().position(|c| c.name == "palm").unwrap();
    assert!(tree_pos < palm_pos);

    match table.resolve("Queen Palm", "palm tree", "15-gallon") {
        Resolution::Matched {
            category, price, ..
        } => {
            assert_eq!(category, "tree");
            assert_eq!(price, "$80 - $150");
        }
        Resolution::Unmatched => panic!("Expected palm tree to match a category"),
    }
}

#[test]
fn test_name_matches_when_category_does_not() {
    let table = reference_table();
    assert_eq!(
        resolve_unit_price("Boxwood Hedge", "plant", "5-gallon", &table),
        "$35 - $60"
    );
}

#[test]
fn test_totals_are_ordered_for_reference_table() {
    let table = reference_table();
    let mut items = Vec::new();
    for category in &table.categories {
        for (idx, entry) in category.sizes.iter().enumerate() {
            items.push(RequestedItem::new(
                &format!("{} item", category.name),
                &category.name,
                &entry.size,
                (idx + 1) as f64,
            ));
        }
    }
    items.push(RequestedItem::default());

    let result = calculate_budget(&items, &table);
    assert!(result.total_low <= result.total_high);
    for line in &result.breakdown {
        assert!(line.total_low <= line.total_high, "{}", line.item);
    }
}

#[test]
fn test_doubling_quantity_doubles_line_contribution() {
    let table = reference_table();
    let base = vec![
        RequestedItem::new("Oak", "tree", "24-inch box", 3.0),
        RequestedItem::new("Mulch", "mulch", "bulk", 4.0),
    ];
    let mut doubled = base.clone();
    doubled[1].quantity = Some(8.0);

    let before = calculate_budget(&base, &table);
    let after = calculate_budget(&doubled, &table);

    assert_eq!(after.breakdown[1].total_low, 2.0 * before.breakdown[1].total_low);
    assert_eq!(after.breakdown[1].total_high, 2.0 * before.breakdown[1].total_high);
    assert_eq!(
        after.total_low - before.total_low,
        before.breakdown[1].total_low
    );
    assert_eq!(
        after.total_high - before.total_high,
        before.breakdown[1].total_high
    );
}

#[test]
fn test_empty_object_gets_defaults() {
    let items = items_from_json("[{}]");
    let result = calculate_budget(&items, &reference_table());

    let line = &result.breakdown[0];
    assert_eq!(line.item, "Unknown Item");
    assert_eq!(line.quantity, 1.0);
    assert_eq!(line.source, PriceSource::Unmatched);
    assert_eq!(result.total_low, 0.0);
}

#[test]
fn test_mature_tree_single_value_price() {
    let items = vec![RequestedItem::new("Old Oak", "tree", "mature", 2.0)];
    let result = calculate_budget(&items, &reference_table());

    assert_eq!(result.breakdown[0].unit_price, "$800+");
    assert_eq!(result.total_low, 1600.0);
    assert_eq!(result.total_high, 1600.0);
    assert_eq!(result.breakdown[0].total_estimate, "$1,600.00 - $1,600.00");
}

#[test]
fn test_parse_price_range_properties() {
    assert_eq!(parse_price_range("$800+"), (800.0, 800.0));
    assert_eq!(parse_price_range("garbage"), (0.0, 0.0));
    assert_eq!(parse_price_range(""), (0.0, 0.0));
    assert_eq!(parse_price_range("$2,500 - $4,000"), (2500.0, 4000.0));
}

#[test]
fn test_alternate_table_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pricing.toml");
    std::fs::write(
        &path,
        r#"
[[categories]]
name = "palm"
sizes = [{ size = "15-gallon", price = "$100 - $200" }]

[[categories]]
name = "tree"
sizes = [{ size = "15-gallon", price = "$80 - $150" }]
"#,
    )
    .unwrap();

    let table = PricingTable::load(&path).unwrap();
    let items = vec![RequestedItem::new("Queen Palm", "palm tree", "15-gallon", 1.0)];
    let result = calculate_budget(&items, &table);

    assert_eq!(result.breakdown[0].unit_price, "$100 - $200");
}

#[test]
fn test_missing_table_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(PricingTable::load(&dir.path().join("missing.toml")).is_err());
}

#[test]
fn test_estimator_is_shareable_across_threads() {
    let estimator = Arc::new(
        BudgetEstimator::new(Arc::new(reference_table()))
            .with_species(Arc::new(reference_species()))
            .with_options(EstimateOptions {
                quantity_policy: QuantityPolicy::ClampToZero,
                ..EstimateOptions::default()
            }),
    );

    let handles: Vec<_> = (0..4)
        .map(|n| {
            let estimator = Arc::clone(&estimator);
            std::thread::spawn(move || {
                let items = vec![RequestedItem::new("Lavandula", "shrub", "1-gallon", n as f64)];
                estimator.estimate(&items).total_high
            })
        })
        .collect();

    let totals: Vec<f64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(totals, vec![0.0, 16.0, 32.0, 48.0]);
}
