//! Property-based tests using proptest
//! Invariants of concern derivation, filtering, scoring and rationale text

use glowmatch_core::{
    derive_concerns, explain, recommend, AttributeSeverities, BudgetTier, ConcernLabel, Product,
    ProductId, ProductPreference, SkinAttribute, SkinType, UserPreferences,
};
use proptest::prelude::*;
use rust_decimal::Decimal;

const SKIN_TYPE_ENTRIES: &[&str] =
    &["all", "ALL", "dry", "oily", "normal", "combination", "sensitive", "Oily to combination"];

const CONCERN_ENTRIES: &[&str] = &[
    "Acne",
    "acne-prone",
    "Dark Spots",
    "Wrinkles",
    "Fine Lines",
    "Dryness",
    "Oil",
    "Large Pores",
    "Redness",
    "Irritation",
];

const INGREDIENT_ENTRIES: &[&str] = &[
    "Niacinamide",
    "Retinol",
    "Jojoba Oil",
    "Green Tea Extract",
    "Shea Butter",
    "Peptides",
    "Water",
    "Vitamin C",
];

fn skin_type_strategy() -> impl Strategy<Value = SkinType> {
    prop::sample::select(SkinType::ALL.to_vec())
}

fn attribute_strategy() -> impl Strategy<Value = SkinAttribute> {
    prop::sample::select(SkinAttribute::CANONICAL_ORDER.to_vec())
}

fn severities_strategy() -> impl Strategy<Value = AttributeSeverities> {
    prop::collection::btree_map(attribute_strategy(), 1i64..=10, 0..=9).prop_map(|pairs| {
        AttributeSeverities::from_pairs(pairs).expect("generated severities are in range")
    })
}

fn concerns_strategy() -> impl Strategy<Value = Vec<ConcernLabel>> {
    prop::sample::subsequence(ConcernLabel::ALL.to_vec(), 0..=ConcernLabel::ALL.len())
}

fn preferences_strategy() -> impl Strategy<Value = UserPreferences> {
    (
        prop::sample::select(BudgetTier::ALL.to_vec()),
        prop::sample::select(ProductPreference::ALL.to_vec()),
    )
        .prop_map(|(tier, preference)| UserPreferences::new(tier, preference))
}

fn strings(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

fn product_strategy() -> impl Strategy<Value = Product> {
    (
        prop::option::of(0i64..30_000),
        prop::option::of(0.0f64..=5.0),
        0u32..5_000,
        prop::sample::subsequence(SKIN_TYPE_ENTRIES.to_vec(), 0..=3),
        prop::sample::subsequence(CONCERN_ENTRIES.to_vec(), 0..=6),
        prop::sample::subsequence(INGREDIENT_ENTRIES.to_vec(), 0..=3),
        prop::bool::ANY,
    )
        .prop_map(
            |(price_cents, rating, review_count, skin_types, concerns, ingredients, natural)| {
                Product {
                    id: ProductId::from("generated"),
                    name: "Generated".to_string(),
                    brand: "Proptest".to_string(),
                    category: if natural { "Natural Serum" } else { "Serum" }.to_string(),
                    price_min: price_cents.map(|cents| Decimal::new(cents, 2)),
                    price_max: None,
                    currency: "USD".to_string(),
                    rating,
                    review_count,
                    key_ingredients: strings(ingredients),
                    skin_types: strings(skin_types),
                    concerns_addressed: strings(concerns),
                }
            },
        )
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(product_strategy(), 0..25).prop_map(|products| {
        products
            .into_iter()
            .enumerate()
            .map(|(index, mut product)| {
                product.id = ProductId(format!("p-{index}"));
                product
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn concern_derivation_is_deterministic(severities in severities_strategy()) {
        prop_assert_eq!(derive_concerns(&severities), derive_concerns(&severities));
    }

    #[test]
    fn severities_below_threshold_never_emit_labels(
        attribute in attribute_strategy(),
        value in 1i64..=10,
    ) {
        let severities = AttributeSeverities::from_pairs([(attribute, value)])
            .expect("generated severity is in range");
        let concerns = derive_concerns(&severities);
        if value < 5 {
            prop_assert!(concerns.is_empty());
        } else {
            prop_assert!(!concerns.is_empty());
        }
    }

    #[test]
    fn out_of_budget_products_never_surface(
        catalog in catalog_strategy(),
        skin_type in skin_type_strategy(),
        concerns in concerns_strategy(),
        preferences in preferences_strategy(),
    ) {
        let range = preferences.budget_tier.price_range();
        let results = recommend(&catalog, skin_type, &concerns, &preferences, catalog.len());
        for item in &results {
            prop_assert!(range.contains(item.product.price_min.unwrap_or(Decimal::ZERO)));
        }
    }

    #[test]
    fn all_sentinel_always_earns_full_skin_type_points(
        product in product_strategy(),
        skin_type in skin_type_strategy(),
        sentinel in prop::sample::select(vec!["all", "All", "ALL"]),
    ) {
        let mut product = product;
        product.skin_types = vec![sentinel.to_string()];
        product.price_min = Some(Decimal::from(40));

        let results = recommend(
            &[product],
            skin_type,
            &[],
            &UserPreferences::new(BudgetTier::Medium, ProductPreference::Any),
            1,
        );
        prop_assert_eq!(results.len(), 1);
        prop_assert_eq!(results[0].component_scores.skin_type, 40.0);
    }

    #[test]
    fn scores_are_bounded_sorted_and_limited(
        catalog in catalog_strategy(),
        skin_type in skin_type_strategy(),
        concerns in concerns_strategy(),
        preferences in preferences_strategy(),
        limit in 0usize..30,
    ) {
        let results = recommend(&catalog, skin_type, &concerns, &preferences, limit);

        prop_assert!(results.len() <= limit);
        for item in &results {
            prop_assert!(item.recommendation_score <= 100);
        }
        for pair in results.windows(2) {
            prop_assert!(pair[0].recommendation_score >= pair[1].recommendation_score);
        }
    }

    #[test]
    fn rationale_is_never_empty(
        product in product_strategy(),
        skin_type in skin_type_strategy(),
        concerns in concerns_strategy(),
    ) {
        let text = explain(&product, skin_type, &concerns);
        prop_assert!(!text.is_empty());
        prop_assert!(text.ends_with('.'));
    }
}

#[test]
fn scenario_c_sebum_only_yields_both_oil_labels() {
    let severities = AttributeSeverities::from_pairs([(SkinAttribute::Sebum, 7)])
        .expect("sebum severity is valid");
    assert_eq!(derive_concerns(&severities), vec![ConcernLabel::OilySkin, ConcernLabel::ExcessOil]);
}
