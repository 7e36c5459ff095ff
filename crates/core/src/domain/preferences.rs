use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Half-open price bracket `[min, max)`; `max == None` means unbounded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Option<Decimal>,
}

impl PriceRange {
    pub fn contains(&self, price: Decimal) -> bool {
        price >= self.min && self.max.map_or(true, |max| price < max)
    }

    pub fn label(&self) -> String {
        match self.max {
            Some(max) => format!("${} - ${}", self.min, max),
            None => format!("${}+", self.min),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetTier {
    Low,
    #[default]
    Medium,
    High,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 4] = [Self::Low, Self::Medium, Self::High, Self::Luxury];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Luxury => "luxury",
        }
    }

    /// Price bracket in USD.
    pub fn price_range(self) -> PriceRange {
        match self {
            Self::Low => PriceRange { min: Decimal::ZERO, max: Some(Decimal::from(30)) },
            Self::Medium => PriceRange { min: Decimal::from(30), max: Some(Decimal::from(70)) },
            Self::High => PriceRange { min: Decimal::from(70), max: Some(Decimal::from(150)) },
            Self::Luxury => PriceRange { min: Decimal::from(150), max: None },
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BudgetTier {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|tier| tier.as_str() == normalized).ok_or_else(|| {
            DomainError::UnknownEnumerant {
                kind: "budget tier",
                value: value.to_string(),
                expected: "low|medium|high|luxury",
            }
        })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductPreference {
    #[default]
    Any,
    Natural,
    Scientific,
}

impl ProductPreference {
    pub const ALL: [ProductPreference; 3] = [Self::Any, Self::Natural, Self::Scientific];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Any => "any",
            Self::Natural => "natural",
            Self::Scientific => "scientific",
        }
    }
}

impl fmt::Display for ProductPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductPreference {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|preference| preference.as_str() == normalized).ok_or_else(
            || DomainError::UnknownEnumerant {
                kind: "product preference",
                value: value.to_string(),
                expected: "any|natural|scientific",
            },
        )
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default)]
    pub budget_tier: BudgetTier,
    #[serde(default)]
    pub product_preference: ProductPreference,
}

impl UserPreferences {
    pub fn new(budget_tier: BudgetTier, product_preference: ProductPreference) -> Self {
        Self { budget_tier, product_preference }
    }
}

/// Caller-supplied preferences before enumerant validation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct PreferencesInput {
    #[serde(default, alias = "budgetTier", alias = "budget")]
    pub budget_tier: Option<String>,
    #[serde(default, alias = "productPreference")]
    pub product_preference: Option<String>,
}

impl PreferencesInput {
    /// Missing fields fall back to `defaults`; present fields must be known enumerants.
    pub fn validate_with(&self, defaults: UserPreferences) -> Result<UserPreferences, DomainError> {
        let budget_tier = match self.budget_tier.as_deref() {
            Some(raw) => raw.parse()?,
            None => defaults.budget_tier,
        };
        let product_preference = match self.product_preference.as_deref() {
            Some(raw) => raw.parse()?,
            None => defaults.product_preference,
        };
        Ok(UserPreferences { budget_tier, product_preference })
    }

    pub fn validate(&self) -> Result<UserPreferences, DomainError> {
        self.validate_with(UserPreferences::default())
    }
}
