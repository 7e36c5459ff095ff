//! Case-insensitive substring heuristics shared by scoring and rationale text.

use crate::domain::analysis::SkinType;
use crate::domain::concern::ConcernLabel;
use crate::domain::product::Product;

/// Skin-type entry that makes a product suitable for every skin type.
pub const ALL_SKIN_TYPES: &str = "all";

/// Ingredient fragments that mark a product as botanical.
pub const BOTANICAL_MARKERS: [&str; 4] = ["oil", "extract", "butter", "botanical"];

/// True when either lowercase string contains the other.
pub fn overlaps(left: &str, right: &str) -> bool {
    let left = left.to_lowercase();
    let right = right.to_lowercase();
    left.contains(&right) || right.contains(&left)
}

pub fn matches_skin_type(product: &Product, skin_type: SkinType) -> bool {
    product.skin_types.iter().any(|entry| {
        let entry = entry.to_lowercase();
        entry == ALL_SKIN_TYPES || entry.contains(skin_type.as_str())
    })
}

/// Product concern entries that match at least one caller concern, in product order.
pub fn matched_concerns<'a>(product: &'a Product, concerns: &[ConcernLabel]) -> Vec<&'a str> {
    product
        .concerns_addressed
        .iter()
        .filter(|entry| concerns.iter().any(|concern| overlaps(entry, concern.as_str())))
        .map(String::as_str)
        .collect()
}

pub fn is_natural(product: &Product) -> bool {
    if product.category.to_lowercase().contains("natural") {
        return true;
    }

    product.key_ingredients.iter().any(|ingredient| {
        let ingredient = ingredient.to_lowercase();
        BOTANICAL_MARKERS.iter().any(|marker| ingredient.contains(marker))
    })
}
