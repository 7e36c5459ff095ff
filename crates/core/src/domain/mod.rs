pub mod analysis;
pub mod concern;
pub mod preferences;
pub mod product;
pub mod recommendation;
