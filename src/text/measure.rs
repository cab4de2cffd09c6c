use serde::{Deserialize, Serialize};

/// Requested font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    /// CSS 400.
    Regular,
    /// CSS 600.
    SemiBold,
    /// CSS 700.
    Bold,
}

impl FontWeight {
    /// Numeric CSS weight.
    pub fn css(self) -> u16 {
        match self {
            FontWeight::Regular => 400,
            FontWeight::SemiBold => 600,
            FontWeight::Bold => 700,
        }
    }
}

/// Generic family used when the named family is unavailable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GenericFamily {
    /// Headline fallback.
    Serif,
    /// Badge face.
    SansSerif,
}

/// Font selection plus size, as handed to a [`TextMeasure`].
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Preferred family name; empty means "generic only".
    pub family: String,
    /// Fallback when `family` cannot be found.
    pub generic: GenericFamily,
    /// Requested weight.
    pub weight: FontWeight,
    /// Font size in pixels.
    pub size_px: f32,
}

impl FontSpec {
    /// Headline font: the configured family falling back to serif.
    pub fn headline(family: impl Into<String>, weight: FontWeight, size_px: f32) -> Self {
        Self {
            family: family.into(),
            generic: GenericFamily::Serif,
            weight,
            size_px,
        }
    }

    /// Badge font: bold generic sans-serif.
    pub fn badge(size_px: f32) -> Self {
        Self {
            family: String::new(),
            generic: GenericFamily::SansSerif,
            weight: FontWeight::Bold,
            size_px,
        }
    }
}

/// Text metrics capability: pixel advance width of a string in a font.
///
/// The layout code only depends on this trait so it can run against a deterministic fake.
pub trait TextMeasure {
    /// Horizontal advance of `text` set in `font`, in pixels.
    fn measure(&mut self, text: &str, font: &FontSpec) -> f32;
}

impl<T: TextMeasure + ?Sized> TextMeasure for &mut T {
    fn measure(&mut self, text: &str, font: &FontSpec) -> f32 {
        (**self).measure(text, font)
    }
}

/// Monospace fake: every character advances by `advance_px`, regardless of font.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedAdvanceMeasure {
    /// Advance per character in pixels.
    pub advance_px: f32,
}

impl FixedAdvanceMeasure {
    /// Fake with the given per-character advance.
    pub fn new(advance_px: f32) -> Self {
        Self { advance_px }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&mut self, text: &str, _font: &FontSpec) -> f32 {
        text.chars().count() as f32 * self.advance_px
    }
}
