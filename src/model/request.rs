use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::foundation::core::{CanvasSize, Rgba8};
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::layout::sizer;
use crate::model::category::Category;

/// Longest headline accepted; longer input is truncated.
pub const MAX_HEADLINE_CHARS: usize = 120;
/// Longest badge label accepted; longer input is truncated.
pub const MAX_BADGE_CHARS: usize = 12;
/// Font size range accepted from callers.
pub const FONT_SIZE_RANGE: std::ops::RangeInclusive<u32> = 20..=80;
/// Horizontal anchor range, in percent of canvas width.
pub const POSITION_X_RANGE: std::ops::RangeInclusive<f64> = 10.0..=90.0;
/// Vertical anchor range, in percent of canvas height.
pub const POSITION_Y_RANGE: std::ops::RangeInclusive<f64> = 10.0..=80.0;

/// How each headline line is made legible over the photo.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextStyle {
    /// Black stroke (plus an accent stroke for breaking news) under the fill.
    #[default]
    Outlined,
    /// Semi-transparent box in the background color behind each line.
    #[serde(alias = "background")]
    BackgroundBox,
}

/// Text block anchor in percent of the canvas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextPosition {
    /// Horizontal center of the block, percent of width.
    pub x: f64,
    /// Vertical anchor, percent of height.
    pub y: f64,
}

impl TextPosition {
    /// Anchor at `(x%, y%)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Clamp into the accepted anchor ranges; NaN falls back to the default anchor.
    pub fn clamped(self) -> Self {
        let d = Self::default();
        let clamp = |v: f64, fallback: f64, r: &std::ops::RangeInclusive<f64>| {
            if v.is_nan() {
                fallback
            } else {
                v.clamp(*r.start(), *r.end())
            }
        };
        Self {
            x: clamp(self.x, d.x, &POSITION_X_RANGE),
            y: clamp(self.y, d.y, &POSITION_Y_RANGE),
        }
    }
}

impl Default for TextPosition {
    fn default() -> Self {
        Self { x: 50.0, y: 20.0 }
    }
}

/// Corner label drawn independently of the headline.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    /// Draw the badge at all.
    pub enabled: bool,
    /// Label, at most [`MAX_BADGE_CHARS`] characters.
    #[serde(default)]
    pub text: String,
}

impl Badge {
    /// Enabled badge with `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            enabled: true,
            text: text.into(),
        }
    }

    /// Disabled badge.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            text: String::new(),
        }
    }

    /// A badge is only drawn when enabled and labelled.
    pub fn is_visible(&self) -> bool {
        self.enabled && !self.text.is_empty()
    }
}

/// Visual options for one render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Headline and badge label color.
    pub text_color: Rgba8,
    /// Badge fill and text box color.
    pub background_color: Rgba8,
    /// Badge strips and breaking-news outline.
    pub accent_color: Rgba8,
    /// Headline font family; falls back to a serif face.
    pub font_family: String,
    /// Headline size in px, 20..=80.
    pub font_size: u32,
    /// Outline or background box.
    pub text_style: TextStyle,
    /// Black outline stroke width in px.
    pub shadow_intensity: u32,
    /// Text block anchor.
    pub text_position: TextPosition,
    /// Allow wrapping headlines longer than 40 characters.
    pub text_wrapping: bool,
    /// Corner badge.
    pub badge: Badge,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let preset = Category::BreakingNews.preset();
        Self {
            text_color: preset.text_color,
            background_color: preset.background_color,
            accent_color: preset.accent_color,
            font_family: preset.font_family.to_owned(),
            font_size: 48,
            text_style: TextStyle::Outlined,
            shadow_intensity: 4,
            text_position: TextPosition::default(),
            text_wrapping: true,
            badge: Badge::new(preset.badge_text),
        }
    }
}

impl StyleConfig {
    /// Defaults for `category`, sized for `headline`.
    pub fn from_preset(category: Category, headline: &str) -> Self {
        let mut style = Self::default();
        style.apply_preset(category, headline);
        style
    }

    /// Copy the category's colors, font and badge label, then re-run the font sizer.
    ///
    /// Layout options (position, style, stroke width, wrapping, badge visibility) are kept.
    pub fn apply_preset(&mut self, category: Category, headline: &str) {
        let preset = category.preset();
        self.text_color = preset.text_color;
        self.background_color = preset.background_color;
        self.accent_color = preset.accent_color;
        self.font_family = preset.font_family.to_owned();
        self.badge.text = preset.badge_text.to_owned();
        self.font_size = sizer::recommend_for(headline);
    }

    /// Accept the font sizer's recommendation for `headline`.
    pub fn with_recommended_font_size(mut self, headline: &str) -> Self {
        self.font_size = sizer::recommend_for(headline);
        self
    }

    /// Clamp every ranged field into its accepted range.
    pub fn normalized(&self) -> Self {
        let mut out = self.clone();
        out.font_size = out
            .font_size
            .clamp(*FONT_SIZE_RANGE.start(), *FONT_SIZE_RANGE.end());
        out.text_position = out.text_position.clamped();
        out.badge.text = truncate_chars(&out.badge.text, MAX_BADGE_CHARS).to_owned();
        out
    }
}

/// Source picture for a render.
#[derive(Clone, Debug)]
pub enum ImageSource {
    /// Encoded bytes (PNG, JPEG, ...), decoded at render time.
    Encoded(Arc<Vec<u8>>),
    /// Already decoded straight-alpha RGBA8 pixels.
    Decoded(Arc<image::RgbaImage>),
}

impl ImageSource {
    /// Encoded bytes.
    pub fn encoded(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Encoded(Arc::new(bytes.into()))
    }

    /// Decoded pixels.
    pub fn decoded(image: image::RgbaImage) -> Self {
        Self::Decoded(Arc::new(image))
    }
}

/// Immutable input to one render pass.
#[derive(Clone, Debug)]
pub struct RenderRequest {
    /// Background picture.
    pub source: ImageSource,
    /// Headline text, at most [`MAX_HEADLINE_CHARS`] characters.
    pub headline: String,
    /// Content category.
    pub category: Category,
    /// Visual options.
    pub style: StyleConfig,
    /// Output size; [`CanvasSize::THUMBNAIL`] unless overridden.
    pub canvas: CanvasSize,
}

impl RenderRequest {
    /// Request on the default 1280x720 canvas.
    pub fn new(
        source: ImageSource,
        headline: impl Into<String>,
        category: Category,
        style: StyleConfig,
    ) -> Self {
        Self {
            source,
            headline: headline.into(),
            category,
            style,
            canvas: CanvasSize::THUMBNAIL,
        }
    }

    /// Request built from the category preset, sized for the headline.
    pub fn from_preset(source: ImageSource, headline: impl Into<String>, category: Category) -> Self {
        let headline = headline.into();
        let style = StyleConfig::from_preset(category, &headline);
        Self::new(source, headline, category, style)
    }

    /// Override the output canvas.
    pub fn with_canvas(mut self, canvas: CanvasSize) -> Self {
        self.canvas = canvas;
        self
    }

    /// Headline truncated to [`MAX_HEADLINE_CHARS`].
    pub fn clamped_headline(&self) -> &str {
        truncate_chars(&self.headline, MAX_HEADLINE_CHARS)
    }

    /// Load a [`RequestDocument`] from JSON, resolving its image path next to the file.
    pub fn from_json_path(path: &Path) -> ThumbResult<Self> {
        let raw = std::fs::read(path)
            .with_context(|| format!("read request '{}'", path.display()))?;
        let doc: RequestDocument = serde_json::from_slice(&raw)
            .map_err(|e| ThumbError::serde(format!("parse request '{}': {e}", path.display())))?;
        let root = path.parent().unwrap_or_else(|| Path::new("."));
        doc.into_request(root)
    }
}

/// On-disk form of a [`RenderRequest`]: the image is referenced by a relative path.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestDocument {
    /// Image path relative to the document.
    pub source: String,
    /// Headline text.
    pub headline: String,
    /// Content category.
    pub category: Category,
    /// Visual options; the category preset when absent.
    #[serde(default)]
    pub style: Option<StyleConfig>,
    /// Output size.
    #[serde(default)]
    pub canvas: CanvasSize,
}

impl RequestDocument {
    /// Read the referenced image and build the request.
    pub fn into_request(self, root: &Path) -> ThumbResult<RenderRequest> {
        let image_path = resolve_source_path(root, &self.source)?;
        let bytes = std::fs::read(&image_path)
            .with_context(|| format!("read source image '{}'", image_path.display()))?;
        let style = match self.style {
            Some(style) => style,
            None => StyleConfig::from_preset(self.category, &self.headline),
        };
        Ok(RenderRequest::new(
            ImageSource::encoded(bytes),
            self.headline,
            self.category,
            style,
        )
        .with_canvas(self.canvas))
    }
}

/// Normalize a document-relative path, rejecting absolute paths and `..` segments.
pub fn resolve_source_path(root: &Path, source: &str) -> ThumbResult<PathBuf> {
    let s = source.replace('\\', "/");
    if s.starts_with('/') {
        return Err(ThumbError::invalid_configuration(
            "source image path must be relative",
        ));
    }

    let mut out = PathBuf::from(root);
    let mut parts = 0usize;
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ThumbError::invalid_configuration(
                "source image path must not contain '..'",
            ));
        }
        out.push(part);
        parts += 1;
    }
    if parts == 0 {
        return Err(ThumbError::invalid_configuration(
            "source image path must contain a file name",
        ));
    }
    Ok(out)
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/request.rs"]
mod tests;
