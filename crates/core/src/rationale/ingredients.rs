//! Static ingredient-benefit knowledge used for rationale text.

/// Lowercase ingredient keys and their benefit phrases. Lookup order matters:
/// substring fallback takes the first key that matches.
pub const INGREDIENT_BENEFITS: &[(&str, &str)] = &[
    ("niacinamide", "helps minimize pores, regulate oil and even out skin tone"),
    ("hyaluronic acid", "draws in moisture for deep, lasting hydration"),
    ("retinol", "boosts cell turnover to smooth fine lines and refine texture"),
    ("vitamin c", "brightens dull skin and fades dark spots"),
    ("salicylic acid", "penetrates pores to clear breakouts and excess oil"),
    ("glycolic acid", "gently exfoliates to reveal smoother, brighter skin"),
    ("ceramides", "restore the skin barrier and lock in moisture"),
    ("peptides", "support firmness and reduce the look of wrinkles"),
    ("azelaic acid", "calms redness and evens out discoloration"),
    ("benzoyl peroxide", "targets acne-causing bacteria to reduce breakouts"),
    ("centella asiatica", "soothes irritation and supports skin repair"),
    ("squalane", "provides lightweight, non-greasy hydration"),
    ("zinc oxide", "offers gentle broad-spectrum sun protection"),
    ("tea tree oil", "naturally helps control blemishes"),
    ("bakuchiol", "offers retinol-like smoothing with less irritation"),
    ("snail mucin", "repairs and hydrates for a plumper complexion"),
];

/// Exact lowercase key first, then the first key that contains or is contained
/// by the ingredient.
pub fn lookup_benefit(ingredient: &str) -> Option<&'static str> {
    let normalized = ingredient.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    INGREDIENT_BENEFITS
        .iter()
        .find(|(key, _)| *key == normalized)
        .or_else(|| {
            INGREDIENT_BENEFITS
                .iter()
                .find(|(key, _)| normalized.contains(key) || key.contains(normalized.as_str()))
        })
        .map(|(_, benefit)| *benefit)
}

#[cfg(test)]
mod tests {
    use super::{lookup_benefit, INGREDIENT_BENEFITS};

    #[test]
    fn exact_match_is_case_insensitive() {
        assert_eq!(
            lookup_benefit("Niacinamide"),
            Some("helps minimize pores, regulate oil and even out skin tone")
        );
    }

    #[test]
    fn substring_match_works_in_both_directions() {
        assert_eq!(
            lookup_benefit("Niacinamide 10%"),
            Some("helps minimize pores, regulate oil and even out skin tone")
        );
        assert_eq!(
            lookup_benefit("Ceramide"),
            Some("restore the skin barrier and lock in moisture")
        );
    }

    #[test]
    fn substring_fallback_prefers_table_order() {
        // "acid" is contained by several keys; the first one defined wins.
        assert_eq!(lookup_benefit("acid"), Some(INGREDIENT_BENEFITS[1].1));
    }

    #[test]
    fn unknown_or_blank_ingredients_have_no_benefit() {
        assert_eq!(lookup_benefit("Water"), None);
        assert_eq!(lookup_benefit("   "), None);
    }

    #[test]
    fn table_keys_are_lowercase_and_unique() {
        for (index, (key, benefit)) in INGREDIENT_BENEFITS.iter().enumerate() {
            assert_eq!(*key, key.to_lowercase());
            assert!(!benefit.is_empty());
            assert!(INGREDIENT_BENEFITS[index + 1..].iter().all(|(other, _)| other != key));
        }
    }
}
