//! Property tests for the comparison core.
//!
//! These tests exercise the pure domain services over the built-in tables
//! and over randomly generated score tables:
//! 1. Archetype resolution falls back to the default for unhinted customers
//! 2. Capability activation stays within the product map
//! 3. The comparison matrix covers the master list with correct positioning
//! 4. Industry weight classification follows the thresholds

use proptest::prelude::*;
use std::collections::HashSet;

use capability_compare::domain::analysis::{
    ComparisonEngine, ComparisonError, IndustryWeightCalculator, Positioning, Scope,
    SelectionResolver, VendorScore, WeightLevel, HIGH_WEIGHT_THRESHOLD, MEDIUM_WEIGHT_THRESHOLD,
};
use capability_compare::domain::foundation::Score;
use capability_compare::domain::reference::{FactorWeight, ReferenceData, VendorProfile};

// =============================================================================
// Test Infrastructure
// =============================================================================

const CAPABILITIES: [&str; 6] = [
    "Network Security",
    "Email Security",
    "Threat Prevention",
    "Identity & Zero Trust",
    "Cloud Security (SSE)",
    "Compliance & Sovereignty",
];

fn master() -> Vec<String> {
    CAPABILITIES.iter().map(|c| c.to_string()).collect()
}

fn profile(name: &str, scores: &[u8]) -> VendorProfile {
    let mut profile = VendorProfile::new(name);
    for (capability, score) in CAPABILITIES.iter().zip(scores) {
        profile.set_score(*capability, Score::try_new(*score).unwrap());
    }
    profile
}

fn demo_product_names() -> Vec<String> {
    ReferenceData::demo()
        .products
        .names()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn scores() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(1u8..=5, CAPABILITIES.len())
}

// =============================================================================
// Archetype resolution
// =============================================================================

proptest! {
    #[test]
    fn unhinted_customers_resolve_to_default(customer in "[A-Za-z .&]{0,40}") {
        let data = ReferenceData::demo();
        prop_assume!(data.hints.lookup(&customer).is_none());

        let archetype = SelectionResolver::resolve_archetype(
            &customer,
            &data.hints,
            &data.archetypes,
            "PSU Large Bank",
        );
        prop_assert_eq!(archetype, "PSU Large Bank");
    }

    #[test]
    fn activation_is_subset_of_product_map(
        selection in prop::sample::subsequence(demo_product_names(), 0..=4),
        unknown in prop::collection::btree_set("Unknown [a-z]{1,8}", 0..3),
    ) {
        let data = ReferenceData::demo();
        let unknown: Vec<String> = unknown.into_iter().collect();
        let mut products = selection.clone();
        products.extend(unknown.iter().cloned());

        let activated = SelectionResolver::activate_capabilities(&products, &data.products);
        let universe: HashSet<&str> = data
            .products
            .iter()
            .flat_map(|p| p.capabilities.iter().map(String::as_str))
            .collect();

        prop_assert!(activated.iter().all(|c| universe.contains(c.as_str())));
        if selection.is_empty() {
            prop_assert!(activated.is_empty());
        }
        prop_assert_eq!(
            SelectionResolver::unknown_products(&products, &data.products),
            unknown
        );
    }
}

// =============================================================================
// Comparison matrix
// =============================================================================

proptest! {
    #[test]
    fn matrix_covers_master_list_and_positions_by_sign(
        vendor_scores in scores(),
        competitor_scores in scores(),
        mask in prop::collection::vec(any::<bool>(), CAPABILITIES.len()),
    ) {
        let vendor = profile("Cisco", &vendor_scores);
        let competitor = profile("Rival", &competitor_scores);
        let activated: HashSet<String> = CAPABILITIES
            .iter()
            .zip(&mask)
            .filter(|(_, active)| **active)
            .map(|(c, _)| c.to_string())
            .collect();

        let rows = ComparisonEngine::build_comparison(&master(), &activated, &vendor, &competitor)
            .unwrap();

        prop_assert_eq!(rows.len(), CAPABILITIES.len());
        for (i, row) in rows.iter().enumerate() {
            prop_assert_eq!(&row.capability, CAPABILITIES[i]);
            prop_assert_eq!(row.competitor_score.value(), competitor_scores[i]);

            if activated.contains(&row.capability) {
                prop_assert_eq!(row.scope, Scope::InScope);
                let expected = match vendor_scores[i].cmp(&competitor_scores[i]) {
                    std::cmp::Ordering::Greater => Positioning::VendorAdvantage,
                    std::cmp::Ordering::Less => Positioning::CompetitorAdvantage,
                    std::cmp::Ordering::Equal => Positioning::Comparable,
                };
                prop_assert_eq!(row.positioning, expected);
                prop_assert_eq!(
                    row.vendor_score,
                    VendorScore::Scored(Score::try_new(vendor_scores[i]).unwrap())
                );
            } else {
                prop_assert_eq!(row.scope, Scope::OutOfScope);
                prop_assert_eq!(row.positioning, Positioning::NotCompared);
                prop_assert_eq!(row.vendor_score, VendorScore::Unscored);
            }
        }

        let summary = ComparisonEngine::summarize(&rows);
        prop_assert_eq!(
            summary.advantages.len() + summary.pressures.len() + summary.out_of_scope.len(),
            rows.iter().filter(|r| r.positioning != Positioning::Comparable).count()
        );
    }

    #[test]
    fn empty_activation_summarizes_everything_out_of_scope(
        vendor_scores in scores(),
        competitor_scores in scores(),
    ) {
        let vendor = profile("Cisco", &vendor_scores);
        let competitor = profile("Rival", &competitor_scores);

        let rows =
            ComparisonEngine::build_comparison(&master(), &HashSet::new(), &vendor, &competitor)
                .unwrap();
        let summary = ComparisonEngine::summarize(&rows);

        prop_assert!(summary.advantages.is_empty());
        prop_assert!(summary.pressures.is_empty());
        prop_assert_eq!(summary.out_of_scope, master());
    }
}

#[test]
fn missing_competitor_score_is_data_integrity_error() {
    let vendor = profile("Cisco", &[5, 5, 4, 5, 4, 5]);
    let competitor = profile("Rival", &[5, 3]);

    let result = ComparisonEngine::build_comparison(&master(), &HashSet::new(), &vendor, &competitor);
    assert_eq!(
        result,
        Err(ComparisonError::DataIntegrity {
            vendor: "Rival".to_string(),
            capability: "Threat Prevention".to_string(),
        })
    );
}

// =============================================================================
// Industry weight
// =============================================================================

fn weights(values: &[u8]) -> Vec<FactorWeight> {
    values
        .iter()
        .enumerate()
        .map(|(i, w)| FactorWeight::new(format!("Factor {}", i), Score::try_new(*w).unwrap()))
        .collect()
}

proptest! {
    #[test]
    fn weight_level_follows_unrounded_mean(values in prop::collection::vec(1u8..=5, 1..12)) {
        let weight = IndustryWeightCalculator::derive_industry_weight(&weights(&values)).unwrap();
        let mean = values.iter().map(|v| f64::from(*v)).sum::<f64>() / values.len() as f64;

        prop_assert!((weight.average - mean).abs() < 1e-9);
        let expected = if mean >= HIGH_WEIGHT_THRESHOLD {
            WeightLevel::High
        } else if mean >= MEDIUM_WEIGHT_THRESHOLD {
            WeightLevel::Medium
        } else {
            WeightLevel::Low
        };
        prop_assert_eq!(weight.level, expected);
        prop_assert!((1.0..=5.0).contains(&weight.display_average()));
    }
}

#[test]
fn weight_examples() {
    let high = IndustryWeightCalculator::derive_industry_weight(&weights(&[5, 5, 4, 2])).unwrap();
    assert_eq!(high.level, WeightLevel::High);
    assert_eq!(high.to_string(), "HIGH (Avg: 4.0)");

    let medium = IndustryWeightCalculator::derive_industry_weight(&weights(&[4, 3, 2, 4])).unwrap();
    assert_eq!(medium.level, WeightLevel::Medium);
    assert!((medium.average - 3.25).abs() < 1e-9);

    let low = IndustryWeightCalculator::derive_industry_weight(&weights(&[1, 1, 1])).unwrap();
    assert_eq!(low.level, WeightLevel::Low);
    assert_eq!(low.to_string(), "LOW (Avg: 1.0)");
}

#[test]
fn empty_weights_are_rejected() {
    assert!(matches!(
        IndustryWeightCalculator::derive_industry_weight(&[]),
        Err(ComparisonError::EmptyWeights { .. })
    ));
}
