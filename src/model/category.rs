use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8;

/// Content classification selecting the visual theme of a thumbnail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Urgent red styling, bold headline with an accent outline.
    BreakingNews,
    /// Official navy styling.
    GovernmentUpdates,
    /// Neutral commentary styling.
    #[serde(alias = "analysis")]
    PoliticalAnalysis,
    /// Election styling.
    ElectionCoverage,
    /// Policy announcement styling.
    PolicyUpdates,
}

/// Caller-facing defaults for a [`Category`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preset {
    /// Human readable category name.
    pub name: &'static str,
    /// Headline fill color.
    pub text_color: Rgba8,
    /// Badge and text box background color.
    pub background_color: Rgba8,
    /// Badge strips and breaking-news outline color.
    pub accent_color: Rgba8,
    /// Headline font family.
    pub font_family: &'static str,
    /// Badge label.
    pub badge_text: &'static str,
    /// One-line description of the theme.
    pub description: &'static str,
}

const PRESETS: [Preset; 5] = [
    Preset {
        name: "Breaking News",
        text_color: Rgba8::rgb(0xFF, 0xFF, 0xFF),
        background_color: Rgba8::rgb(0xCC, 0x00, 0x00),
        accent_color: Rgba8::rgb(0xFF, 0xD7, 0x00),
        font_family: "Times New Roman",
        badge_text: "BREAKING",
        description: "Urgent red alert styling for breaking political news",
    },
    Preset {
        name: "Government Updates",
        text_color: Rgba8::rgb(0xFF, 0xFF, 0xFF),
        background_color: Rgba8::rgb(0x1B, 0x36, 0x5D),
        accent_color: Rgba8::rgb(0xFF, 0xD7, 0x00),
        font_family: "Georgia",
        badge_text: "OFFICIAL",
        description: "Presidential blue with gold accents for official updates",
    },
    Preset {
        name: "Political Analysis",
        text_color: Rgba8::rgb(0x2D, 0x37, 0x48),
        background_color: Rgba8::rgb(0xE2, 0xE8, 0xF0),
        accent_color: Rgba8::rgb(0x4A, 0x55, 0x68),
        font_family: "Crimson Text",
        badge_text: "ANALYSIS",
        description: "Neutral analytical design for political commentary",
    },
    Preset {
        name: "Election Coverage",
        text_color: Rgba8::rgb(0xFF, 0xFF, 0xFF),
        background_color: Rgba8::rgb(0x1E, 0x40, 0xAF),
        accent_color: Rgba8::rgb(0xDC, 0x26, 0x26),
        font_family: "Times New Roman",
        badge_text: "ELECTION",
        description: "Patriotic red, white, and blue for election content",
    },
    Preset {
        name: "Policy Updates",
        text_color: Rgba8::rgb(0xF7, 0xFA, 0xFC),
        background_color: Rgba8::rgb(0x2A, 0x43, 0x65),
        accent_color: Rgba8::rgb(0xFF, 0xD7, 0x00),
        font_family: "Georgia",
        badge_text: "POLICY",
        description: "Professional navy and gold for policy announcements",
    },
];

impl Category {
    /// Every category, in presentation order.
    pub const ALL: [Category; 5] = [
        Category::BreakingNews,
        Category::GovernmentUpdates,
        Category::PoliticalAnalysis,
        Category::ElectionCoverage,
        Category::PolicyUpdates,
    ];

    fn index(self) -> usize {
        match self {
            Category::BreakingNews => 0,
            Category::GovernmentUpdates => 1,
            Category::PoliticalAnalysis => 2,
            Category::ElectionCoverage => 3,
            Category::PolicyUpdates => 4,
        }
    }

    /// Stable kebab-case key, as used in JSON requests and on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Category::BreakingNews => "breaking-news",
            Category::GovernmentUpdates => "government-updates",
            Category::PoliticalAnalysis => "political-analysis",
            Category::ElectionCoverage => "election-coverage",
            Category::PolicyUpdates => "policy-updates",
        }
    }

    /// Parse a kebab-case key (`analysis` is accepted for [`Category::PoliticalAnalysis`]).
    pub fn from_key(key: &str) -> Option<Self> {
        let key = key.trim();
        if key.eq_ignore_ascii_case("analysis") {
            return Some(Category::PoliticalAnalysis);
        }
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Preset row for this category.
    pub fn preset(self) -> &'static Preset {
        &PRESETS[self.index()]
    }

    /// Display name, e.g. `"Breaking News"`.
    pub fn display_name(self) -> &'static str {
        self.preset().name
    }

    /// Display name lowercased with whitespace runs replaced by `-`.
    pub fn slug(self) -> String {
        self.display_name()
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-")
    }

    /// File name offered for the rendered thumbnail: `<slug>-thumbnail.png`.
    pub fn download_file_name(self) -> String {
        format!("{}-thumbnail.png", self.slug())
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/category.rs"]
mod tests;
