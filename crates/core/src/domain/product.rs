use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: String,
    pub category: String,
    #[serde(default, alias = "priceMin")]
    pub price_min: Option<Decimal>,
    #[serde(default, alias = "priceMax")]
    pub price_max: Option<Decimal>,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default, alias = "reviewCount")]
    pub review_count: u32,
    #[serde(default, alias = "keyIngredients")]
    pub key_ingredients: Vec<String>,
    #[serde(default, alias = "skinTypes")]
    pub skin_types: Vec<String>,
    #[serde(default, alias = "concernsAddressed")]
    pub concerns_addressed: Vec<String>,
}

impl Product {
    pub const MAX_RATING: f64 = 5.0;

    /// Price used for budget filtering; unpriced products count as free.
    pub fn effective_min_price(&self) -> Decimal {
        self.price_min.unwrap_or(Decimal::ZERO)
    }

    pub fn primary_ingredient(&self) -> Option<&str> {
        self.key_ingredients.first().map(String::as_str)
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        let invalid =
            |reason: String| DomainError::InvalidProduct { id: self.id.0.clone(), reason };

        if self.id.0.trim().is_empty() {
            return Err(invalid("id must not be empty".to_string()));
        }
        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty".to_string()));
        }
        if let Some(price_min) = self.price_min {
            if price_min < Decimal::ZERO {
                return Err(invalid(format!("price_min must be >= 0, got {price_min}")));
            }
        }
        if let Some(price_max) = self.price_max {
            if price_max < Decimal::ZERO {
                return Err(invalid(format!("price_max must be >= 0, got {price_max}")));
            }
        }
        if let (Some(price_min), Some(price_max)) = (self.price_min, self.price_max) {
            if price_min > price_max {
                return Err(invalid(format!(
                    "price_min ({price_min}) must not exceed price_max ({price_max})"
                )));
            }
        }
        if let Some(rating) = self.rating {
            if !(0.0..=Self::MAX_RATING).contains(&rating) {
                return Err(invalid(format!("rating must be in range 0..=5, got {rating}")));
            }
        }

        Ok(())
    }
}
