use rust_decimal::Decimal;

use crate::domain::product::{Product, ProductId};

/// Lightweight catalog seed used when no catalog file is configured.
#[derive(Debug, Clone, Copy)]
struct ProductSeed {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    category: &'static str,
    /// Cents
    price_min: i64,
    /// Cents
    price_max: i64,
    rating: f64,
    review_count: u32,
    key_ingredients: &'static [&'static str],
    skin_types: &'static [&'static str],
    concerns_addressed: &'static [&'static str],
}

const PRODUCT_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "cerave-foaming-cleanser",
        name: "Foaming Facial Cleanser",
        brand: "CeraVe",
        category: "Cleanser",
        price_min: 1_499,
        price_max: 1_799,
        rating: 4.6,
        review_count: 18_420,
        key_ingredients: &["Niacinamide", "Ceramides", "Hyaluronic Acid"],
        skin_types: &["normal", "oily", "combination"],
        concerns_addressed: &["Excess Oil", "Large Pores"],
    },
    ProductSeed {
        id: "paulas-choice-bha",
        name: "Skin Perfecting 2% BHA Liquid Exfoliant",
        brand: "Paula's Choice",
        category: "Exfoliant",
        price_min: 3_400,
        price_max: 3_400,
        rating: 4.5,
        review_count: 9_870,
        key_ingredients: &["Salicylic Acid", "Green Tea Extract"],
        skin_types: &["oily", "combination"],
        concerns_addressed: &["Acne", "Large Pores", "Uneven Texture"],
    },
    ProductSeed {
        id: "the-ordinary-niacinamide",
        name: "Niacinamide 10% + Zinc 1%",
        brand: "The Ordinary",
        category: "Serum",
        price_min: 600,
        price_max: 1_200,
        rating: 4.2,
        review_count: 25_300,
        key_ingredients: &["Niacinamide", "Zinc PCA"],
        skin_types: &["all"],
        concerns_addressed: &["Oily Skin", "Acne", "Large Pores"],
    },
    ProductSeed {
        id: "la-roche-posay-cicaplast",
        name: "Cicaplast Baume B5",
        brand: "La Roche-Posay",
        category: "Moisturizer",
        price_min: 1_599,
        price_max: 1_599,
        rating: 4.7,
        review_count: 6_140,
        key_ingredients: &["Panthenol", "Madecassoside", "Shea Butter"],
        skin_types: &["dry", "sensitive"],
        concerns_addressed: &["Dryness", "Redness", "Irritation"],
    },
    ProductSeed {
        id: "skinceuticals-ce-ferulic",
        name: "C E Ferulic",
        brand: "SkinCeuticals",
        category: "Serum",
        price_min: 18_200,
        price_max: 18_200,
        rating: 4.6,
        review_count: 3_250,
        key_ingredients: &["Vitamin C", "Vitamin E", "Ferulic Acid"],
        skin_types: &["normal", "dry", "combination"],
        concerns_addressed: &["Dark Spots", "Wrinkles", "Dullness"],
    },
    ProductSeed {
        id: "drunk-elephant-marula",
        name: "Virgin Marula Luxury Facial Oil",
        brand: "Drunk Elephant",
        category: "Face Oil",
        price_min: 7_200,
        price_max: 7_200,
        rating: 4.4,
        review_count: 1_480,
        key_ingredients: &["Marula Oil"],
        skin_types: &["dry", "normal"],
        concerns_addressed: &["Dryness", "Uneven Texture"],
    },
    ProductSeed {
        id: "neutrogena-retinol",
        name: "Rapid Wrinkle Repair Retinol Serum",
        brand: "Neutrogena",
        category: "Serum",
        price_min: 2_499,
        price_max: 2_999,
        rating: 4.1,
        review_count: 7_930,
        key_ingredients: &["Retinol", "Hyaluronic Acid"],
        skin_types: &["normal", "dry", "combination"],
        concerns_addressed: &["Wrinkles", "Fine Lines", "Uneven Texture"],
    },
    ProductSeed {
        id: "herbivore-blue-tansy",
        name: "Blue Tansy Resurfacing Clarity Mask",
        brand: "Herbivore",
        category: "Natural Mask",
        price_min: 4_800,
        price_max: 4_800,
        rating: 4.3,
        review_count: 820,
        key_ingredients: &["Blue Tansy Oil", "Willow Bark Extract"],
        skin_types: &["oily", "combination", "sensitive"],
        concerns_addressed: &["Large Pores", "Acne", "Redness"],
    },
    ProductSeed {
        id: "kiehls-avocado-eye",
        name: "Creamy Eye Treatment with Avocado",
        brand: "Kiehl's",
        category: "Eye Cream",
        price_min: 3_600,
        price_max: 5_600,
        rating: 4.4,
        review_count: 2_760,
        key_ingredients: &["Avocado Oil", "Shea Butter", "Beta-Carotene"],
        skin_types: &["all"],
        concerns_addressed: &["Dark Circles", "Dryness"],
    },
    ProductSeed {
        id: "paulas-choice-azelaic",
        name: "10% Azelaic Acid Booster",
        brand: "Paula's Choice",
        category: "Treatment",
        price_min: 3_900,
        price_max: 3_900,
        rating: 4.3,
        review_count: 640,
        key_ingredients: &["Azelaic Acid", "Salicylic Acid", "Licorice Root"],
        skin_types: &["all"],
        concerns_addressed: &["Redness", "Dark Spots", "Uneven Texture"],
    },
    ProductSeed {
        id: "cosrx-snail-essence",
        name: "Advanced Snail 96 Mucin Power Essence",
        brand: "COSRX",
        category: "Essence",
        price_min: 2_100,
        price_max: 2_500,
        rating: 4.5,
        review_count: 14_600,
        key_ingredients: &["Snail Mucin", "Sodium Hyaluronate"],
        skin_types: &["all"],
        concerns_addressed: &["Dryness", "Uneven Texture", "Redness"],
    },
    ProductSeed {
        id: "la-mer-creme",
        name: "Creme de la Mer",
        brand: "La Mer",
        category: "Moisturizer",
        price_min: 19_000,
        price_max: 38_000,
        rating: 4.2,
        review_count: 2_050,
        key_ingredients: &["Miracle Broth", "Sea Kelp Extract"],
        skin_types: &["dry", "normal"],
        concerns_addressed: &["Wrinkles", "Dryness"],
    },
    ProductSeed {
        id: "supergoop-unseen",
        name: "Unseen Sunscreen SPF 40",
        brand: "Supergoop!",
        category: "Sunscreen",
        price_min: 3_800,
        price_max: 3_800,
        rating: 4.5,
        review_count: 11_200,
        key_ingredients: &["Avobenzone", "Homosalate", "Meadowfoam Seed Extract"],
        skin_types: &["all"],
        concerns_addressed: &["Dark Spots", "Wrinkles"],
    },
    ProductSeed {
        id: "peter-thomas-roth-peptide",
        name: "Peptide 21 Wrinkle Resist Serum",
        brand: "Peter Thomas Roth",
        category: "Serum",
        price_min: 9_500,
        price_max: 9_500,
        rating: 4.0,
        review_count: 430,
        key_ingredients: &["Peptides", "Hyaluronic Acid"],
        skin_types: &["normal", "dry", "combination"],
        concerns_addressed: &["Wrinkles", "Fine Lines", "Firmness"],
    },
];

pub(super) fn seed_products() -> Vec<Product> {
    PRODUCT_SEEDS.iter().map(product_from_seed).collect()
}

fn product_from_seed(seed: &ProductSeed) -> Product {
    Product {
        id: ProductId::from(seed.id),
        name: seed.name.to_string(),
        brand: seed.brand.to_string(),
        category: seed.category.to_string(),
        price_min: Some(Decimal::new(seed.price_min, 2)),
        price_max: Some(Decimal::new(seed.price_max, 2)),
        currency: "USD".to_string(),
        rating: Some(seed.rating),
        review_count: seed.review_count,
        key_ingredients: to_strings(seed.key_ingredients),
        skin_types: to_strings(seed.skin_types),
        concerns_addressed: to_strings(seed.concerns_addressed),
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
