//! Product catalog
//!
//! Read-only product list handed to the recommendation engine. Catalogs come
//! from the built-in seed list or a JSON file and are validated on load.

mod seed;

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::domain::product::{Product, ProductId};
use crate::errors::DomainError;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("could not read catalog file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Validates every product and rejects duplicate ids.
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        let mut seen = HashSet::new();
        for product in &products {
            product.validate()?;
            if !seen.insert(&product.id) {
                return Err(DomainError::InvalidProduct {
                    id: product.id.0.clone(),
                    reason: "duplicate product id".to_string(),
                });
            }
        }
        Ok(Self { products })
    }

    pub fn seed() -> Self {
        Self { products: seed::seed_products() }
    }

    /// Accepts either a bare JSON array or an object with a `products` array.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(raw)?;
        let products = match document {
            CatalogDocument::Products(products) => products,
            CatalogDocument::Wrapped { products } => products,
        };
        Ok(Self::new(products)?)
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogError::ReadFile { path: path.to_path_buf(), source })?;
        let catalog = Self::from_json_str(&raw)?;

        info!(
            event_name = "catalog.loaded",
            path = %path.display(),
            product_count = catalog.len(),
            "catalog loaded from file"
        );

        Ok(catalog)
    }

    /// File catalog when a path is given, otherwise the seed list.
    pub fn load_or_seed(path: Option<&Path>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::seed()),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn find(&self, product_id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == product_id)
    }

    /// Sorted, de-duplicated category names.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> =
            self.products.iter().map(|product| product.category.as_str()).collect();
        categories.sort_unstable();
        categories.dedup();
        categories
    }

    /// Case-insensitive match on name, brand, category or any key ingredient.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.products.iter().collect();
        }

        self.products
            .iter()
            .filter(|product| {
                [&product.name, &product.brand, &product.category]
                    .into_iter()
                    .chain(product.key_ingredients.iter())
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Products(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::{Catalog, CatalogError};
    use crate::domain::product::ProductId;
    use crate::errors::DomainError;

    const TWO_PRODUCTS: &str = r#"[
        {"id":"a","name":"Hydra Gel","brand":"Aqua","category":"Moisturizer",
         "priceMin":32,"priceMax":32,"rating":4.4,"reviewCount":812,
         "keyIngredients":["Hyaluronic Acid"],"skinTypes":["all"],"concernsAddressed":["Dryness"]},
        {"id":"b","name":"Calm Balm","brand":"Verde","category":"Natural Balm",
         "price_min":"18.50","key_ingredients":["Shea Butter"],"skin_types":["dry","sensitive"]}
    ]"#;

    #[test]
    fn parses_camel_and_snake_case_payloads() {
        let catalog = Catalog::from_json_str(TWO_PRODUCTS).expect("catalog parses");
        assert_eq!(catalog.len(), 2);

        let balm = catalog.find(&ProductId::from("b")).expect("balm present");
        assert_eq!(balm.price_min.map(|price| price.to_string()), Some("18.50".to_string()));
        assert_eq!(balm.review_count, 0);
    }

    #[test]
    fn accepts_wrapped_products_object() {
        let wrapped = format!(r#"{{"products": {TWO_PRODUCTS}}}"#);
        let catalog = Catalog::from_json_str(&wrapped).expect("wrapped catalog parses");
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let duplicated = r#"[
            {"id":"a","name":"One","brand":"B","category":"Serum"},
            {"id":"a","name":"Two","brand":"B","category":"Serum"}
        ]"#;
        assert!(matches!(
            Catalog::from_json_str(duplicated),
            Err(CatalogError::Invalid(DomainError::InvalidProduct { ref reason, .. }))
                if reason == "duplicate product id"
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(Catalog::from_json_str("{not json"), Err(CatalogError::Parse(_))));
    }

    #[test]
    fn load_reads_file_and_reports_missing_path() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("catalog.json");
        fs::write(&path, TWO_PRODUCTS).expect("write catalog");

        let catalog = Catalog::load(&path).expect("catalog loads");
        assert_eq!(catalog.categories(), vec!["Moisturizer", "Natural Balm"]);

        let missing = Catalog::load(&dir.path().join("absent.json"));
        assert!(matches!(missing, Err(CatalogError::ReadFile { .. })));
    }

    #[test]
    fn search_covers_name_brand_category_and_ingredients() {
        let catalog = Catalog::from_json_str(TWO_PRODUCTS).expect("catalog parses");

        let ids = |query: &str| -> Vec<String> {
            catalog.search(query).iter().map(|product| product.id.0.clone()).collect()
        };
        assert_eq!(ids("hydra"), vec!["a"]);
        assert_eq!(ids("VERDE"), vec!["b"]);
        assert_eq!(ids("natural"), vec!["b"]);
        assert_eq!(ids("acid"), vec!["a"]);
        assert_eq!(ids(""), vec!["a", "b"]);
        assert!(ids("retinol").is_empty());
    }

    #[test]
    fn seed_catalog_is_valid() {
        let seed = Catalog::seed();
        assert!(!seed.is_empty());
        let revalidated = Catalog::new(seed.products().to_vec()).expect("seed products validate");
        assert_eq!(revalidated, seed);
    }
}
