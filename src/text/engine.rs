use std::borrow::Cow;
use std::collections::HashMap;

use usvg::fontdb;

use crate::foundation::core::Point;
use crate::foundation::error::{ThumbError, ThumbResult};
use crate::text::fonts::{FontLibrary, ResolvedFace};
use crate::text::measure::{FontSpec, TextMeasure};

/// Weight at or above which a lighter face gets emboldened by stroking.
pub const SYNTHETIC_BOLD_THRESHOLD: u16 = 600;

/// A single line of shaped text, positioned relative to its own origin.
#[derive(Clone)]
pub struct ShapedLine {
    /// Advance width including any trailing whitespace.
    pub width: f32,
    /// Baseline offset from the top of the layout box.
    pub baseline: f32,
    /// Font size the glyphs were shaped at.
    pub font_size: f32,
    /// Glyphs in layout coordinates.
    pub glyphs: Vec<vello_cpu::Glyph>,
    /// Face the glyph ids belong to.
    pub font: vello_cpu::peniko::FontData,
    /// The face is lighter than requested.
    pub embolden: bool,
}

impl std::fmt::Debug for ShapedLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShapedLine")
            .field("width", &self.width)
            .field("baseline", &self.baseline)
            .field("font_size", &self.font_size)
            .field("glyphs", &self.glyphs.len())
            .field("embolden", &self.embolden)
            .finish()
    }
}

impl ShapedLine {
    /// Glyphs translated so the line is horizontally centered on `anchor.x` with its baseline
    /// on `anchor.y`.
    pub fn centered_at(&self, anchor: Point) -> impl Iterator<Item = vello_cpu::Glyph> + '_ {
        let dx = anchor.x as f32 - self.width / 2.0;
        let dy = anchor.y as f32 - self.baseline;
        self.glyphs.iter().map(move |g| vello_cpu::Glyph {
            id: g.id,
            x: g.x + dx,
            y: g.y + dy,
        })
    }
}

struct RegisteredFace {
    family: String,
    font: vello_cpu::peniko::FontData,
}

/// Shapes single lines of text with Parley using faces picked by a [`FontLibrary`].
pub struct TextEngine {
    fonts: FontLibrary,
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    registered: HashMap<fontdb::ID, RegisteredFace>,
}

impl Default for TextEngine {
    fn default() -> Self {
        Self::new(FontLibrary::new())
    }
}

impl TextEngine {
    pub fn new(fonts: FontLibrary) -> Self {
        Self {
            fonts,
            font_ctx: parley::FontContext::default(),
            layout_ctx: parley::LayoutContext::new(),
            registered: HashMap::new(),
        }
    }

    pub fn fonts(&self) -> &FontLibrary {
        &self.fonts
    }

    /// Mutable access to the font set. Already shaped faces stay registered.
    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        &mut self.fonts
    }

    /// Resolve `wanted` to a concrete face without shaping anything.
    pub fn resolve(&mut self, wanted: &FontSpec) -> ThumbResult<ResolvedFace> {
        self.fonts.resolve(wanted)
    }

    /// Shape `text` as one unbroken line.
    pub fn shape(&mut self, text: &str, wanted: &FontSpec) -> ThumbResult<ShapedLine> {
        if !wanted.size_px.is_finite() || wanted.size_px <= 0.0 {
            return Err(ThumbError::font("font size must be finite and > 0"));
        }
        let face = self.fonts.resolve(wanted)?;
        let embolden =
            wanted.weight.css() >= SYNTHETIC_BOLD_THRESHOLD && face.weight < SYNTHETIC_BOLD_THRESHOLD;
        let (family, font) = self.register(&face)?;

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(format!("\"{family}\""))),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(wanted.size_px));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::style::FontWeight::new(f32::from(face.weight)),
        ));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);

        let mut glyphs = Vec::new();
        let mut baseline = None;
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                baseline.get_or_insert(run.baseline());
                glyphs.extend(run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                }));
            }
        }

        Ok(ShapedLine {
            width: layout.full_width(),
            baseline: baseline.unwrap_or(0.0),
            font_size: wanted.size_px,
            glyphs,
            font,
            embolden,
        })
    }

    fn register(
        &mut self,
        face: &ResolvedFace,
    ) -> ThumbResult<(String, vello_cpu::peniko::FontData)> {
        if let Some(r) = self.registered.get(&face.id) {
            return Ok((r.family.clone(), r.font.clone()));
        }

        let families = self.font_ctx.collection.register_fonts(
            parley::fontique::Blob::from(face.data.to_vec()),
            None,
        );
        let mut names = Vec::with_capacity(families.len());
        for (id, _) in &families {
            if let Some(name) = self.font_ctx.collection.family_name(*id) {
                names.push(name.to_string());
            }
        }
        let family = names
            .iter()
            .find(|n| n.eq_ignore_ascii_case(&face.family))
            .or_else(|| names.first())
            .cloned()
            .ok_or_else(|| {
                ThumbError::font(format!("no font family registered for '{}'", face.family))
            })?;

        let font = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(face.data.to_vec()),
            face.index,
        );
        tracing::debug!(family = %family, weight = face.weight, "registered font face");
        self.registered.insert(
            face.id,
            RegisteredFace {
                family: family.clone(),
                font: font.clone(),
            },
        );
        Ok((family, font))
    }
}

impl TextMeasure for TextEngine {
    fn measure(&mut self, text: &str, font: &FontSpec) -> f32 {
        match self.shape(text, font) {
            Ok(line) => line.width,
            Err(e) => {
                tracing::warn!(error = %e, "text measurement failed");
                0.0
            }
        }
    }
}
