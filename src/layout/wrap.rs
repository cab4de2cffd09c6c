//! Greedy word wrapping against measured pixel widths.

use crate::text::measure::{FontSpec, TextMeasure};

/// Headlines longer than this many characters are wrapped (when wrapping is enabled).
pub const WRAP_THRESHOLD_CHARS: usize = 40;

/// Fraction of the canvas width a wrapped line may occupy.
pub const MAX_LINE_WIDTH_FRACTION: f64 = 0.8;

/// One committed line of headline text, trailing separator removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedLine {
    /// Line content.
    pub text: String,
}

impl WrappedLine {
    /// Wrap an owned line.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Whether [`wrap`] applies to `headline`.
pub fn wrapping_applies(headline: &str, wrapping_enabled: bool) -> bool {
    wrapping_enabled && headline.chars().count() > WRAP_THRESHOLD_CHARS
}

/// Greedy word wrap.
///
/// Words (separated by single spaces) accumulate into a candidate line; each candidate is
/// measured with its trailing space. When appending a word pushes the candidate past
/// `max_width_px` and the candidate already holds a word, the candidate is committed and
/// the word starts the next line. A word wider than `max_width_px` is never split and
/// overflows on its own line. Empty tokens from repeated spaces are skipped, so no
/// committed line is ever empty.
pub fn wrap<M: TextMeasure + ?Sized>(
    text: &str,
    font: &FontSpec,
    max_width_px: f32,
    measure: &mut M,
) -> Vec<WrappedLine> {
    let mut lines = Vec::new();
    let mut line = String::new();

    for word in text.split(' ').filter(|w| !w.is_empty()) {
        let candidate = format!("{line}{word} ");
        let width = measure.measure(&candidate, font);
        if width > max_width_px && !line.is_empty() {
            lines.push(commit(&line));
            line = format!("{word} ");
        } else {
            line = candidate;
        }
    }
    if !line.is_empty() {
        lines.push(commit(&line));
    }
    lines
}

/// Headline split into drawable lines.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct HeadlineLines {
    /// Lines in top-to-bottom order.
    pub lines: Vec<WrappedLine>,
    /// `true` when the lines came out of [`wrap`]; wrapped blocks are vertically centered
    /// on the anchor and use the tighter box padding.
    pub wrapped: bool,
}

impl HeadlineLines {
    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// `true` when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Apply the activation policy, then [`wrap`] or keep the headline as one unwrapped line.
pub fn wrap_headline<M: TextMeasure + ?Sized>(
    headline: &str,
    wrapping_enabled: bool,
    font: &FontSpec,
    max_width_px: f32,
    measure: &mut M,
) -> HeadlineLines {
    if headline.trim().is_empty() {
        return HeadlineLines::default();
    }
    if wrapping_applies(headline, wrapping_enabled) {
        HeadlineLines {
            lines: wrap(headline, font, max_width_px, measure),
            wrapped: true,
        }
    } else {
        HeadlineLines {
            lines: vec![WrappedLine::new(headline)],
            wrapped: false,
        }
    }
}

fn commit(line: &str) -> WrappedLine {
    WrappedLine::new(line.strip_suffix(' ').unwrap_or(line))
}

#[cfg(test)]
#[path = "../../tests/unit/layout/wrap.rs"]
mod tests;
