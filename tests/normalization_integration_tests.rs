//! End-to-end tests for the rider name normalization pipeline, covering the
//! feed conventions seen in real result and roster data.

use std::num::NonZeroUsize;

use rider_names::testing_utils::TestDataBuilder;
use rider_names::{
    AllUpperSplit, NameError, NameRecord, display_name_or_unknown, normalize_rider_display_name,
    normalize_with_policy,
};

#[test]
fn test_surname_first_feed_convention() {
    let record = TestDataBuilder::create_surname_first_record();
    assert_eq!(
        normalize_rider_display_name(&record).unwrap(),
        "Mathieu Van Der Poel"
    );

    let record = NameRecord::from_raw("GARCIA LOPEZ Maria Fernanda");
    assert_eq!(
        normalize_rider_display_name(&record).unwrap(),
        "Maria Fernanda Garcia Lopez"
    );

    let record = NameRecord::from_raw("O'CONNOR Liam");
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "Liam O'Connor");
}

#[test]
fn test_all_uppercase_feed_convention() {
    let record = TestDataBuilder::create_all_uppercase_record();
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "John Smith");
}

#[test]
fn test_natural_order_input_is_only_recapitalized() {
    let record = TestDataBuilder::create_natural_order_record();
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "Loana Lecomte");

    // Order is preserved for longer natural-order names too
    let record = NameRecord::from_raw("Anna van der Breggen");
    assert_eq!(
        normalize_rider_display_name(&record).unwrap(),
        "Anna Van Der Breggen"
    );
}

#[test]
fn test_normalization_is_idempotent_on_display_output() {
    let inputs = [
        "VAN DER POEL Mathieu",
        "GARCIA LOPEZ Maria Fernanda",
        "SMITH JOHN",
        "Loana lecomte",
        "O'CONNOR Liam",
    ];

    for input in inputs {
        let first = normalize_rider_display_name(&NameRecord::from_raw(input)).unwrap();
        let second = normalize_rider_display_name(&NameRecord::from_raw(first.as_str())).unwrap();
        assert_eq!(first, second, "re-normalizing {first:?} changed it");
    }
}

#[test]
fn test_explicit_fields_override_raw_string() {
    let record = TestDataBuilder::create_explicit_fields_record();
    assert_eq!(
        normalize_rider_display_name(&record).unwrap(),
        "Demi Vollering"
    );
}

#[test]
fn test_explicit_fields_are_title_cased() {
    let record = NameRecord {
        raw_name: None,
        first_name: Some("WOUT".to_string()),
        last_name: Some("VAN AERT".to_string()),
    };
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "Wout Van Aert");
}

#[test]
fn test_single_token_name() {
    let record = TestDataBuilder::create_mononym_record();
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "Pogacar");
}

#[test]
fn test_apostrophes_and_hyphens_survive_normalization() {
    let record = NameRecord::from_raw("JEAN-PIERRE Dumont");
    assert_eq!(
        normalize_rider_display_name(&record).unwrap(),
        "Dumont Jean-Pierre"
    );

    let record = NameRecord::from_raw("VAN'T HOF Sven");
    assert_eq!(normalize_rider_display_name(&record).unwrap(), "Sven Van't Hof");
}

#[test]
fn test_missing_name_surfaces_to_caller() {
    let record = TestDataBuilder::create_empty_record();
    assert_eq!(
        normalize_rider_display_name(&record),
        Err(NameError::MissingName)
    );

    // Display layers substitute the fallback label instead
    assert_eq!(display_name_or_unknown(&record), "Unknown Rider");
}

#[test]
fn test_all_uppercase_split_policy_is_tunable() {
    let record = NameRecord::from_raw("GARCIA LOPEZ MARIA FERNANDA");

    assert_eq!(
        normalize_with_policy(&record, AllUpperSplit::TrailingToken).unwrap(),
        "Fernanda Garcia Lopez Maria"
    );
    assert_eq!(
        normalize_with_policy(
            &record,
            AllUpperSplit::TrailingTokens(NonZeroUsize::new(2).unwrap())
        )
        .unwrap(),
        "Maria Fernanda Garcia Lopez"
    );
}

#[test]
fn test_normalization_from_feed_json() {
    // Records arrive as JSON with the upstream camelCase field names
    let payload = r#"[
        {"name": "VAN DER POEL Mathieu"},
        {"name": "ignored", "firstName": "Puck", "lastName": "PIETERSE"},
        {"name": "FERRAND PREVOT Pauline", "firstName": "", "lastName": "Ferrand Prevot"}
    ]"#;

    let records: Vec<NameRecord> = serde_json::from_str(payload).unwrap();
    let display_names: Vec<String> = records
        .iter()
        .map(|record| normalize_rider_display_name(record).unwrap())
        .collect();

    assert_eq!(
        display_names,
        vec![
            "Mathieu Van Der Poel",
            "Puck Pieterse",
            "Pauline Ferrand Prevot",
        ]
    );
}

#[test]
fn test_determinism_across_repeated_calls() {
    let record = TestDataBuilder::create_surname_first_record();
    let first = normalize_rider_display_name(&record).unwrap();
    for _ in 0..100 {
        assert_eq!(normalize_rider_display_name(&record).unwrap(), first);
    }
    println!("✓ Repeated normalization of the same record is stable");
}
