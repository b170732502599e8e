// SPDX-License-Identifier: MPL-2.0
//! Style attributes of the swipe button, stored in a `swipe.toml` file.
//!
//! Keys follow the attribute names of the control (`swipeText`,
//! `swipeThumbColor`, ...). Every attribute is optional; missing or malformed
//! values resolve to documented defaults in
//! [`VisualConfig::from_attributes`](crate::ui::swipe_button::VisualConfig::from_attributes).
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `SWIPE_BUTTON_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use swipe_button::config::{self, SwipeAttributes};
//!
//! // Load attributes (returns tuple with optional warning)
//! let (mut attrs, _warning) = config::load();
//!
//! attrs.swipe_text = Some("Swipe to confirm".to_string());
//! config::save(&attrs).expect("Failed to save attributes");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::{Error, Result};
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Construction-time attributes of a swipe button.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SwipeAttributes {
    /// SVG file drawn on the thumb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_drawable: Option<PathBuf>,

    /// Thumb tint, `#RRGGBB` or `#AARRGGBB`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_thumb_color: Option<String>,

    /// Progress fill color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_progress_color: Option<String>,

    /// Initial and default label text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_text: Option<String>,

    /// Label font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_font_family: Option<String>,

    /// Label color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_text_color: Option<String>,

    /// Label size in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_text_size: Option<f32>,

    /// Track height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swipe_height: Option<f32>,
}

impl SwipeAttributes {
    /// Reads attributes one by one, dropping values of the wrong type.
    ///
    /// Returns the attributes together with the names that were ignored.
    fn from_table_lenient(table: &toml::Table) -> (Self, Vec<&'static str>) {
        let mut ignored = Vec::new();

        let mut string = |key: &'static str| -> Option<String> {
            let value = table.get(key)?;
            match value.as_str() {
                Some(s) => Some(s.to_string()),
                None => {
                    ignored.push(key);
                    None
                }
            }
        };

        let swipe_drawable = string("swipeDrawable").map(PathBuf::from);
        let swipe_thumb_color = string("swipeThumbColor");
        let swipe_progress_color = string("swipeProgressColor");
        let swipe_text = string("swipeText");
        let swipe_font_family = string("swipeFontFamily");
        let swipe_text_color = string("swipeTextColor");

        let mut dimension = |key: &'static str| -> Option<f32> {
            let value = table.get(key)?;
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            // pixel sizes, far inside f32 range
            let number = value
                .as_float()
                .map(|f| f as f32)
                .or_else(|| value.as_integer().map(|i| i as f32));
            if number.is_none() {
                ignored.push(key);
            }
            number
        };

        let swipe_text_size = dimension("swipeTextSize");
        let swipe_height = dimension("swipeHeight");

        (
            Self {
                swipe_drawable,
                swipe_thumb_color,
                swipe_progress_color,
                swipe_text,
                swipe_font_family,
                swipe_text_color,
                swipe_text_size,
                swipe_height,
            },
            ignored,
        )
    }
}

// =============================================================================
// Color Parsing
// =============================================================================

/// Parses `#RGB`, `#ARGB`, `#RRGGBB` or `#AARRGGBB` (alpha first).
#[must_use]
pub fn parse_color(raw: &str) -> Option<Color> {
    let hex = raw.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

    let (a, r, g, b) = match hex.len() {
        3 => (255, nibble(0)?, nibble(1)?, nibble(2)?),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (255, byte(0)?, byte(2)?, byte(4)?),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };

    Some(Color::from_rgba8(r, g, b, f32::from(a) / 255.0))
}

// =============================================================================
// Path Resolution
// =============================================================================

/// Returns the config directory with an optional override.
fn get_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    get_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the attributes from the default path.
///
/// Returns a tuple of (attributes, optional_warning). If loading fails,
/// returns default attributes with a warning key explaining what went wrong.
pub fn load() -> (SwipeAttributes, Option<String>) {
    load_with_override(None)
}

/// Loads the attributes from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (SwipeAttributes, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            return load_file(&path);
        }
    }
    (SwipeAttributes::default(), None)
}

/// Loads an attribute file the user pointed at explicitly.
pub fn load_file(path: &Path) -> (SwipeAttributes, Option<String>) {
    match load_from_path_lenient(path) {
        Ok((attrs, ignored)) if ignored.is_empty() => (attrs, None),
        Ok((attrs, ignored)) => {
            log::warn!(
                "Ignoring malformed attributes in {}: {}",
                path.display(),
                ignored.join(", ")
            );
            (attrs, Some(WARNING_PARTIAL.to_string()))
        }
        Err(err) => {
            log::warn!("Failed to load {}: {err}", path.display());
            (SwipeAttributes::default(), Some(WARNING_LOAD_FAILED.to_string()))
        }
    }
}

/// Loads attributes from a specific path, failing on any type mismatch.
pub fn load_from_path(path: &Path) -> Result<SwipeAttributes> {
    let content = fs::read_to_string(path)?;
    let attrs: SwipeAttributes = toml::from_str(&content)?;
    Ok(attrs)
}

/// Loads attributes from a specific path, skipping values of the wrong type.
///
/// Only unreadable files and invalid TOML syntax are errors.
pub fn load_from_path_lenient(path: &Path) -> Result<(SwipeAttributes, Vec<&'static str>)> {
    let content = fs::read_to_string(path)?;

    if let Ok(attrs) = toml::from_str::<SwipeAttributes>(&content) {
        return Ok((attrs, Vec::new()));
    }

    let table: toml::Table = toml::from_str(&content)?;
    Ok(SwipeAttributes::from_table_lenient(&table))
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the attributes to the default path.
pub fn save(attrs: &SwipeAttributes) -> Result<()> {
    save_with_override(attrs, None)
}

/// Saves the attributes to a custom directory.
pub fn save_with_override(attrs: &SwipeAttributes, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(attrs, &path);
    }
    Ok(())
}

/// Saves attributes to a specific path.
pub fn save_to_path(attrs: &SwipeAttributes, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(attrs).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
