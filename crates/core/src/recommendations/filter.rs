//! Budget and ingredient-philosophy predicates

use crate::domain::preferences::{PriceRange, ProductPreference, UserPreferences};
use crate::domain::product::Product;
use crate::matching::is_natural;

pub fn passes_budget(product: &Product, range: &PriceRange) -> bool {
    range.contains(product.effective_min_price())
}

pub fn passes_preference(product: &Product, preference: ProductPreference) -> bool {
    match preference {
        ProductPreference::Any => true,
        ProductPreference::Natural => is_natural(product),
        ProductPreference::Scientific => !is_natural(product),
    }
}

/// Both predicates resolved from one set of preferences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogFilter {
    range: PriceRange,
    preference: ProductPreference,
}

impl CatalogFilter {
    pub fn new(preferences: &UserPreferences) -> Self {
        Self {
            range: preferences.budget_tier.price_range(),
            preference: preferences.product_preference,
        }
    }

    pub fn accepts(&self, product: &Product) -> bool {
        passes_budget(product, &self.range) && passes_preference(product, self.preference)
    }
}
