//! Concern derivation
//!
//! Maps per-attribute severities onto the coarse concern vocabulary used for
//! display and product matching.

use crate::domain::analysis::{AttributeSeverities, SkinAttribute};
use crate::domain::concern::ConcernLabel;

/// Severities at or above this value count as a concern.
pub const CONCERN_THRESHOLD: u8 = 5;

/// Labels an attribute contributes once it crosses the threshold. Multi-label
/// attributes always emit every label, in this order.
pub fn labels_for(attribute: SkinAttribute) -> &'static [ConcernLabel] {
    match attribute {
        SkinAttribute::Wrinkles => &[ConcernLabel::Wrinkles],
        SkinAttribute::Spots => &[ConcernLabel::DarkSpots],
        SkinAttribute::Acne => &[ConcernLabel::Acne],
        SkinAttribute::Texture => &[ConcernLabel::UnevenTexture],
        SkinAttribute::Hydration => &[ConcernLabel::Dryness],
        SkinAttribute::Sebum => &[ConcernLabel::OilySkin, ConcernLabel::ExcessOil],
        SkinAttribute::Pores => &[ConcernLabel::LargePores],
        SkinAttribute::Redness => &[ConcernLabel::Redness],
        SkinAttribute::DarkCircles => &[ConcernLabel::DarkCircles],
    }
}

pub fn derive_concerns(severities: &AttributeSeverities) -> Vec<ConcernLabel> {
    SkinAttribute::CANONICAL_ORDER
        .into_iter()
        .filter(|attribute| {
            severities
                .get(*attribute)
                .is_some_and(|severity| severity.value() >= CONCERN_THRESHOLD)
        })
        .flat_map(|attribute| labels_for(attribute).iter().copied())
        .collect()
}
