//! Scalar bar (color legend) drawing.

use glam::Vec3;

use crate::color_maps::ColorMap;
use crate::error::{RenderError, RenderResult};
use crate::font::{draw_text, text_width, GLYPH_HEIGHT};
use crate::framebuffer::{to_rgba8, Framebuffer};

/// Arguments controlling a scalar bar.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarBarArgs {
    /// Title shown above the bar. Defaults to the field name.
    pub title: Option<String>,
    /// Number of evenly spaced numeric labels.
    pub n_labels: usize,
    /// Bar width as a fraction of the image width.
    pub width_fraction: f32,
}

impl Default for ScalarBarArgs {
    fn default() -> Self {
        Self {
            title: None,
            n_labels: 5,
            width_fraction: 0.6,
        }
    }
}

impl ScalarBarArgs {
    /// Default arguments with an explicit title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Checks the arguments before anything is drawn.
    pub fn validate(&self) -> RenderResult<()> {
        if matches!(&self.title, Some(t) if t.trim().is_empty()) {
            return Err(RenderError::InvalidScalarBar(
                "title must not be empty".to_string(),
            ));
        }
        if !(2..=10).contains(&self.n_labels) {
            return Err(RenderError::InvalidScalarBar(format!(
                "label count must be between 2 and 10, got {}",
                self.n_labels
            )));
        }
        if !(self.width_fraction > 0.0 && self.width_fraction <= 1.0) {
            return Err(RenderError::InvalidScalarBar(format!(
                "width fraction must be in (0, 1], got {}",
                self.width_fraction
            )));
        }
        Ok(())
    }

    /// The title to draw for a field named `field_name`.
    #[must_use]
    pub fn resolved_title<'a>(&'a self, field_name: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(field_name)
    }
}

/// Formats a label value.
#[must_use]
pub fn format_label(value: f64) -> String {
    if value != 0.0 && !(1e-2..1e4).contains(&value.abs()) {
        format!("{value:.2e}")
    } else {
        format!("{value:.2}")
    }
}

/// Black or white, whichever reads better on `background`.
#[must_use]
pub fn text_color(background: Vec3) -> [u8; 4] {
    let luminance = background.dot(Vec3::new(0.299, 0.587, 0.114));
    if luminance > 0.5 {
        [0, 0, 0, 255]
    } else {
        [255, 255, 255, 255]
    }
}

/// Draws a horizontal scalar bar near the bottom of the image.
///
/// `slot` stacks several bars upwards, 0 being the lowest.
pub fn draw_scalar_bar(
    fb: &mut Framebuffer,
    args: &ScalarBarArgs,
    title: &str,
    range: (f64, f64),
    colormap: &ColorMap,
    ink: [u8; 4],
    slot: u32,
) {
    let (width, height) = (fb.width(), fb.height());
    let scale = (height / 384).max(1);
    let text_height = GLYPH_HEIGHT * scale;

    let bar_width = ((width as f32 * args.width_fraction).round() as u32).clamp(1, width);
    let bar_height = (height / 40).max(4);
    let block = bar_height + 2 * text_height + 8 * scale;

    let x0 = (width - bar_width) / 2;
    let bottom = (height as f32 * 0.95) as u32;
    let y0 = bottom
        .saturating_sub(text_height + 4 * scale + bar_height)
        .saturating_sub(slot * block);

    for dx in 0..bar_width {
        let t = if bar_width > 1 {
            dx as f32 / (bar_width - 1) as f32
        } else {
            0.5
        };
        let color = to_rgba8(colormap.sample(t));
        for dy in 0..bar_height {
            fb.set(x0 + dx, y0 + dy, color);
        }
    }
    draw_border(fb, x0, y0, bar_width, bar_height, ink);

    let title_y = y0 as i32 - (text_height + 4 * scale) as i32;
    let title_x = (width as i32 - text_width(title, scale) as i32) / 2;
    draw_text(fb, title, title_x, title_y, scale, ink);

    let label_y = (y0 + bar_height + 4 * scale) as i32;
    let (min, max) = range;
    let n = args.n_labels.max(2);
    for i in 0..n {
        let f = i as f64 / (n - 1) as f64;
        let label = format_label(min + (max - min) * f);
        let cx = x0 as f64 + f * f64::from(bar_width - 1);
        let lx = cx as i32 - text_width(&label, scale) as i32 / 2;
        draw_text(fb, &label, lx, label_y, scale, ink);
    }
}

fn draw_border(fb: &mut Framebuffer, x0: u32, y0: u32, w: u32, h: u32, ink: [u8; 4]) {
    let (x1, y1) = (x0 + w - 1, y0 + h - 1);
    for x in x0..=x1 {
        fb.set(x, y0, ink);
        fb.set(x, y1, ink);
    }
    for y in y0..=y1 {
        fb.set(x0, y, ink);
        fb.set(x1, y, ink);
    }
}
