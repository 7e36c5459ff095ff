//! Rationale generator
//!
//! Builds the one-sentence "why this product" text shown next to each
//! recommendation. Output is display-only and never feeds back into scoring.

mod ingredients;

pub use ingredients::{lookup_benefit, INGREDIENT_BENEFITS};

use crate::domain::analysis::SkinType;
use crate::domain::concern::ConcernLabel;
use crate::domain::product::Product;
use crate::matching::{matched_concerns, matches_skin_type};

/// Used when no clause applies.
pub const FALLBACK_RATIONALE: &str = "Recommended based on your skin profile and analysis results.";

/// Matched concerns quoted in the rationale.
const MAX_QUOTED_CONCERNS: usize = 2;

pub fn explain(product: &Product, skin_type: SkinType, concerns: &[ConcernLabel]) -> String {
    let clauses = rationale_clauses(product, skin_type, concerns);
    if clauses.is_empty() {
        return FALLBACK_RATIONALE.to_string();
    }

    format!("{}.", clauses.join(". "))
}

fn rationale_clauses(
    product: &Product,
    skin_type: SkinType,
    concerns: &[ConcernLabel],
) -> Vec<String> {
    let mut clauses = Vec::new();

    if let Some(ingredient) = product.primary_ingredient() {
        if let Some(benefit) = lookup_benefit(ingredient) {
            clauses.push(format!("{ingredient} {benefit}"));
        }
    }

    if matches_skin_type(product, skin_type) {
        clauses.push(format!("Formulated specifically for {skin_type} skin"));
    }

    let matched = matched_concerns(product, concerns);
    if !matched.is_empty() {
        let quoted: Vec<String> = matched
            .iter()
            .take(MAX_QUOTED_CONCERNS)
            .map(|concern| concern.to_lowercase())
            .collect();
        clauses.push(format!("Clinically proven to address {}", quoted.join(" and ")));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::{explain, FALLBACK_RATIONALE};
    use crate::domain::analysis::SkinType;
    use crate::domain::concern::ConcernLabel;
    use crate::domain::product::{Product, ProductId};

    fn product(ingredients: &[&str], skin_types: &[&str], concerns: &[&str]) -> Product {
        Product {
            id: ProductId::from("rationale-1"),
            name: "Clear Serum".to_string(),
            brand: "Lumen".to_string(),
            category: "Serum".to_string(),
            price_min: Some(Decimal::from(35)),
            price_max: Some(Decimal::from(35)),
            currency: "USD".to_string(),
            rating: Some(4.2),
            review_count: 300,
            key_ingredients: ingredients.iter().map(|value| value.to_string()).collect(),
            skin_types: skin_types.iter().map(|value| value.to_string()).collect(),
            concerns_addressed: concerns.iter().map(|value| value.to_string()).collect(),
        }
    }

    #[test]
    fn all_clauses_are_joined_in_order() {
        let item = product(
            &["Salicylic Acid", "Zinc"],
            &["oily", "combination"],
            &["Acne", "Excess Oil", "Large Pores"],
        );
        let concerns = [
            ConcernLabel::Acne,
            ConcernLabel::OilySkin,
            ConcernLabel::ExcessOil,
            ConcernLabel::LargePores,
        ];
        let text = explain(&item, SkinType::Oily, &concerns);

        assert_eq!(
            text,
            "Salicylic Acid penetrates pores to clear breakouts and excess oil. \
             Formulated specifically for oily skin. \
             Clinically proven to address acne and excess oil."
        );
    }

    #[test]
    fn single_matched_concern_is_quoted_alone() {
        let item = product(&["Unobtainium"], &["dry"], &["Dark Spots"]);
        let text = explain(&item, SkinType::Oily, &[ConcernLabel::DarkSpots]);
        assert_eq!(text, "Clinically proven to address dark spots.");
    }

    #[test]
    fn only_primary_ingredient_is_considered() {
        let item = product(&["Water", "Niacinamide"], &[], &[]);
        assert_eq!(explain(&item, SkinType::Normal, &[]), FALLBACK_RATIONALE);
    }

    #[test]
    fn fallback_when_nothing_applies() {
        let item = product(&[], &["dry"], &["Wrinkles"]);
        let text = explain(&item, SkinType::Oily, &[ConcernLabel::Acne]);
        assert_eq!(text, FALLBACK_RATIONALE);
        assert!(!text.is_empty());
    }

    #[test]
    fn all_sentinel_names_caller_skin_type() {
        let item = product(&[], &["All"], &[]);
        assert_eq!(
            explain(&item, SkinType::Sensitive, &[]),
            "Formulated specifically for sensitive skin."
        );
    }
}
