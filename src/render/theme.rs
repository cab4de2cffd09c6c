//! Per-category styling table consulted once per render.

use crate::foundation::core::Rgba8;
use crate::model::category::Category;
use crate::text::measure::FontWeight;

/// Top-to-bottom overlay gradient stops.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GradientStops {
    /// Color at the top edge.
    pub top: Rgba8,
    /// Color at the bottom edge.
    pub bottom: Rgba8,
}

/// Styling that depends only on the category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryTheme {
    /// Full-canvas overlay.
    pub gradient: GradientStops,
    /// Headline weight.
    pub weight: FontWeight,
    /// Outlined text gets a second, thin stroke in the accent color.
    pub accent_outline: bool,
}

/// Width of the accent outline drawn over the black stroke.
pub const ACCENT_OUTLINE_WIDTH: f64 = 2.0;

const BREAKING_RED: Rgba8 = Rgba8::rgba(204, 0, 0, 102);
const GOVERNMENT_NAVY: Rgba8 = Rgba8::rgba(27, 54, 93, 77);

/// Look up the theme for `category`.
pub fn theme(category: Category) -> CategoryTheme {
    match category {
        Category::BreakingNews => CategoryTheme {
            gradient: GradientStops {
                top: BREAKING_RED,
                bottom: Rgba8::BLACK.with_alpha_f32(0.6),
            },
            weight: FontWeight::Bold,
            accent_outline: true,
        },
        Category::GovernmentUpdates => CategoryTheme {
            gradient: GradientStops {
                top: GOVERNMENT_NAVY,
                bottom: Rgba8::BLACK.with_alpha_f32(0.5),
            },
            weight: FontWeight::SemiBold,
            accent_outline: false,
        },
        Category::PoliticalAnalysis | Category::ElectionCoverage | Category::PolicyUpdates => {
            CategoryTheme {
                gradient: GradientStops {
                    top: Rgba8::BLACK.with_alpha_f32(0.2),
                    bottom: Rgba8::BLACK.with_alpha_f32(0.4),
                },
                weight: FontWeight::SemiBold,
                accent_outline: false,
            }
        }
    }
}
