// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::swipe_button::SwipeEvent;
use std::path::PathBuf;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer input translated by the swipe track.
    Swipe(SwipeEvent),
    Tick(Instant), // Drives the return animation
    /// Put the thumb back at the start, keeping the current label.
    Reload,
    /// Put the thumb back at the start and restore the default label.
    ReloadWithDefaultText,
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Attribute file to load instead of the default location.
    pub config_path: Option<PathBuf>,
    /// Overrides `swipeText` from the attribute file.
    pub text: Option<String>,
}
