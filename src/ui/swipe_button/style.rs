// SPDX-License-Identifier: MPL-2.0
//! Visual configuration of a swipe button.
//!
//! Built once from style attributes and never mutated afterwards. Every field
//! has a default, and malformed attributes resolve to that default.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};

use iced::font::{Family, Weight};
use iced::widget::svg;
use iced::{Color, Font};

use crate::config::{self, SwipeAttributes};
use crate::ui::design_tokens::{palette, sizing, typography};

/// Built-in arrow glyph drawn on the thumb.
pub const SWIPE_ARROW_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"><path fill="#FFFFFF" d="M12 4l-1.41 1.41L16.17 11H4v2h12.17l-5.58 5.59L12 20l8-8z"/></svg>"##;

/// Icon shown on the thumb.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Drawable {
    #[default]
    Arrow,
    Svg(PathBuf),
}

impl Drawable {
    #[must_use]
    pub fn handle(&self) -> svg::Handle {
        match self {
            Drawable::Arrow => svg::Handle::from_memory(SWIPE_ARROW_SVG.as_bytes()),
            Drawable::Svg(path) => svg::Handle::from_path(path),
        }
    }
}

/// Immutable look of the control.
#[derive(Debug, Clone, PartialEq)]
pub struct VisualConfig {
    pub drawable: Drawable,
    pub thumb_color: Color,
    pub progress_color: Color,
    /// Initial label, also remembered as the default text.
    pub text: String,
    pub font: Font,
    pub text_color: Color,
    pub text_size: f32,
    pub height: f32,
}

/// Medium-weight sans serif used when no family is configured.
pub const DEFAULT_FONT: Font = Font {
    weight: Weight::Medium,
    ..Font::DEFAULT
};

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            drawable: Drawable::Arrow,
            thumb_color: palette::ACCENT,
            progress_color: palette::ACCENT,
            text: String::new(),
            font: DEFAULT_FONT,
            text_color: palette::ACCENT,
            text_size: typography::SWIPE_TEXT,
            height: sizing::SWIPE_HEIGHT,
        }
    }
}

impl VisualConfig {
    /// Resolves style attributes, falling back per attribute.
    #[must_use]
    pub fn from_attributes(attrs: &SwipeAttributes) -> Self {
        let defaults = Self::default();

        let drawable = match &attrs.swipe_drawable {
            Some(path) if path.is_file() => Drawable::Svg(path.clone()),
            Some(path) => {
                log::warn!(
                    "swipeDrawable {} is not a file, using the built-in arrow",
                    path.display()
                );
                Drawable::Arrow
            }
            None => Drawable::Arrow,
        };

        Self {
            drawable,
            thumb_color: color_or(
                "swipeThumbColor",
                attrs.swipe_thumb_color.as_deref(),
                defaults.thumb_color,
            ),
            progress_color: color_or(
                "swipeProgressColor",
                attrs.swipe_progress_color.as_deref(),
                defaults.progress_color,
            ),
            text: attrs.swipe_text.clone().unwrap_or_default(),
            font: attrs
                .swipe_font_family
                .as_deref()
                .map_or(defaults.font, font_for_family),
            text_color: color_or(
                "swipeTextColor",
                attrs.swipe_text_color.as_deref(),
                defaults.text_color,
            ),
            text_size: dimension_or("swipeTextSize", attrs.swipe_text_size, defaults.text_size),
            height: dimension_or("swipeHeight", attrs.swipe_height, defaults.height),
        }
    }
}

fn color_or(name: &str, raw: Option<&str>, fallback: Color) -> Color {
    let Some(raw) = raw else {
        return fallback;
    };
    config::parse_color(raw).unwrap_or_else(|| {
        log::warn!("{name} has malformed color {raw:?}, using default");
        fallback
    })
}

fn dimension_or(name: &str, raw: Option<f32>, fallback: f32) -> f32 {
    match raw {
        Some(value) if value.is_finite() && value > 0.0 => value,
        Some(value) => {
            log::warn!("{name} must be a positive size, got {value}, using default");
            fallback
        }
        None => fallback,
    }
}

/// Maps a family name onto an iced font with medium weight.
///
/// Generic names map to iced's generic families; anything else is looked up
/// by name among the fonts loaded into the renderer.
#[must_use]
pub fn font_for_family(name: &str) -> Font {
    let family = match name.trim().to_ascii_lowercase().as_str() {
        "" | "sans-serif" | "sans" => Family::SansSerif,
        "serif" => Family::Serif,
        "monospace" | "mono" => Family::Monospace,
        "cursive" => Family::Cursive,
        "fantasy" => Family::Fantasy,
        _ => Family::Name(interned_family(name.trim())),
    };

    Font {
        family,
        ..DEFAULT_FONT
    }
}

/// Returns a `'static` copy of `name`, leaking each distinct name once.
fn interned_family(name: &str) -> &'static str {
    static NAMES: OnceLock<Mutex<HashMap<String, &'static str>>> = OnceLock::new();

    let mut names = NAMES
        .get_or_init(|| Mutex::new(HashMap::new()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    if let Some(interned) = names.get(name) {
        return interned;
    }
    let interned: &'static str = Box::leak(name.to_owned().into_boxed_str());
    names.insert(name.to_owned(), interned);
    interned
}
