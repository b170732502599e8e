// SPDX-License-Identifier: MPL-2.0
//! Default values and names for the style attribute file.

/// Application name used for the platform config directory.
pub const APP_NAME: &str = "SwipeButton";

/// File holding the style attributes.
pub const CONFIG_FILE: &str = "swipe.toml";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "SWIPE_BUTTON_CONFIG_DIR";

/// Warning key returned when the attribute file exists but cannot be read.
pub const WARNING_LOAD_FAILED: &str = "swipe-attributes-load-error";

/// Warning key returned when some attributes had the wrong type.
pub const WARNING_PARTIAL: &str = "swipe-attributes-partially-ignored";
