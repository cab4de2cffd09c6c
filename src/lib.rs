//! Thumbsmith renders 16:9 news thumbnails: a background photo, a category-tinted gradient,
//! an optional badge and a sized, wrapped headline.
//!
//! The pipeline is a pure function of its [`RenderRequest`]:
//!
//! - [`layout`] sizes, wraps and places the headline against a [`TextMeasure`]
//! - [`render::scene`] turns the layout into an ordered display list
//! - [`Compositor`] rasterizes it with `vello_cpu` and encodes a PNG
#![forbid(unsafe_code)]

pub mod assets;
pub mod encode;
pub mod foundation;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod render;
pub mod text;

pub use crate::encode::png::{Frame, RenderedImage};
pub use crate::foundation::core::{CanvasSize, Point, Rect, Rgba8};
pub use crate::foundation::error::{ThumbError, ThumbResult};
pub use crate::layout::sizer::recommend;
pub use crate::model::category::{Category, Preset};
pub use crate::model::request::{
    Badge, ImageSource, RenderRequest, RequestDocument, StyleConfig, TextPosition, TextStyle,
};
pub use crate::pipeline::Compositor;
pub use crate::text::fonts::FontLibrary;
pub use crate::text::measure::{FixedAdvanceMeasure, FontSpec, TextMeasure};
