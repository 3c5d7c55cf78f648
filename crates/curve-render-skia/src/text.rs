// File: crates/curve-render-skia/src/text.rs
// Summary: Label text shaping via Skia textlayout; anchored drawing for axis labels and tooltips.

use curve_core::Anchor;
use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Families tried after the configured one.
const FALLBACK_FAMILIES: [&str; 5] = ["Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, family: &str) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        let mut families = vec![family];
        families.extend(FALLBACK_FAMILIES.iter().copied().filter(|f| *f != family));
        ts.set_font_families(families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, family: &str) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        let style = Self::make_style(size, color, family);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, family: &str) -> f32 {
        let p = self.layout(text, size, skia::Color::from_argb(0, 0, 0, 0), family);
        // width of the longest line
        p.longest_line()
    }

    /// Draw `text` vertically centered on `y`, aligned on `x` per `anchor`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_anchored(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        size: f32,
        color: skia::Color,
        family: &str,
        anchor: Anchor,
    ) {
        let mut p = self.layout(text, size, color, family);
        let width = p.longest_line();
        let left = match anchor {
            Anchor::Start => x,
            Anchor::Middle => x - width / 2.0,
            Anchor::End => x - width,
        };
        // Paragraph draws from top-left; labels are vertically centered on y
        p.paint(canvas, (left, y - size * 0.5));
    }
}
