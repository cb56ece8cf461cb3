use pretty_assertions::assert_eq;
use price_scout::aggregator::{calculate_savings, compare};
use price_scout::{Availability, Listing};

fn listing(name: &str, price: f64, store: &str) -> Listing {
    Listing::new(name, price, "MAD", store, Availability::InStock, "").unwrap()
}

fn prices(listings: &[Listing]) -> Vec<f64> {
    listings.iter().map(Listing::price).collect()
}

#[test]
fn test_compare_reference_example() {
    let result = compare(vec![
        listing("Model A", 450.0, "Jumia"),
        listing("Model B", 350.0, "Jumia"),
        listing("Premium", 520.0, "Marjane"),
        listing("Marjane Brand", 380.0, "Marjane"),
    ]);

    assert_eq!(prices(result.ordered()), vec![350.0, 380.0, 450.0, 520.0]);

    let savings = result.savings().unwrap();
    assert_eq!(savings.amount, 170.0);
    assert_eq!(format!("{:.1}", savings.percentage), "32.7");
}

#[test]
fn test_compare_single_listing_has_no_savings() {
    let result = compare(vec![listing("Solo", 300.0, "Jumia")]);

    assert_eq!(prices(result.ordered()), vec![300.0]);
    assert!(result.savings().is_none());
    assert!(result.cheapest().is_none());
}

#[test]
fn test_compare_empty_input() {
    let result = compare(Vec::new());

    assert!(result.ordered().is_empty());
    assert!(result.savings().is_none());
    assert!(result.most_expensive().is_none());
}

#[test]
fn test_compare_keeps_equal_prices_in_input_order() {
    let result = compare(vec![
        listing("Jumia copy", 199.0, "Jumia"),
        listing("Marjane copy", 199.0, "Marjane"),
        listing("Cheaper", 150.0, "Electroplanet"),
        listing("Electroplanet copy", 199.0, "Electroplanet"),
    ]);

    let stores: Vec<&str> = result.ordered().iter().map(Listing::store).collect();
    assert_eq!(stores, vec!["Electroplanet", "Jumia", "Marjane", "Electroplanet"]);
}

#[test]
fn test_compare_treats_signed_zero_prices_as_equal() {
    let result = compare(vec![
        listing("first", 0.0, "Jumia"),
        listing("second", -0.0, "Marjane"),
    ]);

    let names: Vec<&str> = result.ordered().iter().map(Listing::name).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert!(result.ordered().iter().all(|l| l.price().is_sign_positive()));
}

#[test]
fn test_compare_does_not_deduplicate() {
    let result = compare(vec![
        listing("Same phone", 999.0, "Jumia"),
        listing("Same phone", 999.0, "Jumia"),
    ]);

    assert_eq!(result.len(), 2);
    assert_eq!(result.savings().unwrap().amount, 0.0);
}

#[test]
fn test_compare_all_free_listings() {
    let result = compare(vec![listing("Gift", 0.0, "Jumia"), listing("Sample", 0.0, "Marjane")]);

    let savings = result.savings().unwrap();
    assert_eq!(savings.amount, 0.0);
    assert_eq!(savings.percentage, 0.0);
}

#[test]
fn test_compare_properties_on_mixed_batch() {
    let input: Vec<Listing> = [12.5, 0.0, 999.99, 12.5, 47.0, 3.2, 999.99, 150.0]
        .iter()
        .enumerate()
        .map(|(i, price)| listing(&format!("item-{}", i), *price, "Store"))
        .collect();

    let result = compare(input.clone());
    let ordered = result.ordered();

    assert_eq!(ordered.len(), input.len());
    assert!(ordered.windows(2).all(|pair| pair[0].price() <= pair[1].price()));

    let savings = result.savings().unwrap();
    assert_eq!(savings.amount, ordered[ordered.len() - 1].price() - ordered[0].price());
    assert!(savings.amount >= 0.0);

    // Every input listing appears exactly once.
    for item in &input {
        let count = ordered.iter().filter(|l| l.name() == item.name()).count();
        assert_eq!(count, 1, "{} appears {} times", item.name(), count);
    }
}

#[test]
fn test_calculate_savings_against_most_expensive() {
    let savings = calculate_savings(&listing("low", 80.0, "A"), &listing("high", 200.0, "B"));

    assert_eq!(savings.amount, 120.0);
    assert_eq!(savings.percentage, 60.0);
}
