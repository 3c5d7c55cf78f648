// File: crates/curve-render-skia/src/theme.rs
// Summary: Light/Dark theming for curve rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub curve_stroke: skia::Color,
    pub marker_fill: skia::Color,
    pub marker_stroke: skia::Color,
    pub axis_line: skia::Color,
    pub tick: skia::Color,
    pub axis_label: skia::Color,
    pub tooltip_fill: skia::Color,
    pub tooltip_border: skia::Color,
    pub tooltip_text: skia::Color,
}

impl Theme {
    /// Black curve, white markers, gray guides on white.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            curve_stroke: skia::Color::from_argb(255, 0, 0, 0),
            marker_fill: skia::Color::from_argb(255, 255, 255, 255),
            marker_stroke: skia::Color::from_argb(255, 0, 0, 0),
            axis_line: skia::Color::from_argb(255, 128, 128, 128),
            tick: skia::Color::from_argb(255, 128, 128, 128),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            tooltip_fill: skia::Color::from_argb(235, 250, 250, 252),
            tooltip_border: skia::Color::from_argb(255, 60, 60, 70),
            tooltip_text: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            curve_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker_fill: skia::Color::from_argb(255, 18, 18, 20),
            marker_stroke: skia::Color::from_argb(255, 235, 235, 245),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tooltip_fill: skia::Color::from_argb(235, 40, 40, 45),
            tooltip_border: skia::Color::from_argb(255, 255, 230, 70),
            tooltip_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
