use std::sync::Arc;

use crate::assets::decode::decode_image;
use crate::encode::png::{Frame, RenderedImage, encode_png};
use crate::foundation::error::ThumbResult;
use crate::model::request::{ImageSource, RenderRequest};
use crate::render::cpu::CpuRasterizer;
use crate::render::scene::{DrawOp, Scene, build_scene};
use crate::text::engine::TextEngine;
use crate::text::fonts::FontLibrary;

/// Turns [`RenderRequest`]s into finished thumbnails.
///
/// Every call starts from a freshly drawn background; only font state (loaded faces and shaping
/// caches) carries over between calls. Callers that render concurrently should use one
/// `Compositor` per thread.
pub struct Compositor {
    raster: CpuRasterizer,
}

impl Compositor {
    pub fn new(fonts: FontLibrary) -> Self {
        Self {
            raster: CpuRasterizer::new(TextEngine::new(fonts)),
        }
    }

    /// Compositor over the platform's installed fonts.
    pub fn with_system_fonts() -> Self {
        Self::new(FontLibrary::with_system_fonts())
    }

    pub fn fonts(&self) -> &FontLibrary {
        self.raster.text().fonts()
    }

    pub fn fonts_mut(&mut self) -> &mut FontLibrary {
        self.raster.text_mut().fonts_mut()
    }

    /// Lay out `request` without drawing anything.
    pub fn scene(&mut self, request: &RenderRequest) -> ThumbResult<Scene> {
        build_scene(request, self.raster.text_mut())
    }

    /// Composite `request` into raw pixels.
    #[tracing::instrument(
        skip(self, request),
        fields(category = %request.category, width = request.canvas.width, height = request.canvas.height)
    )]
    pub fn compose(&mut self, request: &RenderRequest) -> ThumbResult<Frame> {
        request.canvas.validate()?;
        let source = match &request.source {
            ImageSource::Encoded(bytes) => ImageSource::Decoded(Arc::new(decode_image(bytes.as_slice())?)),
            decoded @ ImageSource::Decoded(_) => decoded.clone(),
        };

        let scene = self.scene(request)?;
        for op in scene.text_ops() {
            if let DrawOp::StrokeText { font, .. } | DrawOp::FillText { font, .. } = op {
                self.raster.text_mut().resolve(font)?;
            }
        }

        let data = self.raster.rasterize(&scene, &source)?;
        tracing::debug!(ops = scene.ops.len(), "composited thumbnail");
        Frame::new(scene.canvas.width, scene.canvas.height, data)
    }

    /// Composite and PNG-encode `request`.
    #[tracing::instrument(skip(self, request), fields(category = %request.category))]
    pub fn render(&mut self, request: &RenderRequest) -> ThumbResult<RenderedImage> {
        let frame = self.compose(request)?;
        encode_png(&frame)
    }
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new(FontLibrary::new())
    }
}
