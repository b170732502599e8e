// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Visual and motion constants shared by the swipe button controller, its iced
widget and the demo application.

## Organization

- **Palette**: Base colors, including the accent used for every color default
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Motion**: Gesture and animation constants

## Examples

```
use swipe_button::ui::design_tokens::{motion, palette, sizing};

let accent = palette::ACCENT;
assert_eq!(motion::RETURN_DURATION_MS, 200);
assert!(sizing::SWIPE_HEIGHT > 0.0);
# let _ = accent;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Light blue accent: default thumb tint, progress fill and label color.
    pub const ACCENT: Color = Color::from_rgb(0.012, 0.663, 0.957); // #03A9F4

    /// Background of the track behind the progress fill.
    pub const TRACK: Color = Color::from_rgb(0.91, 0.96, 0.99);

    /// Demo window background.
    pub const SURFACE: Color = Color::from_rgb(0.97, 0.97, 0.97);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OPAQUE: f32 = 1.0;

    /// Peak alpha of the shimmer highlight band.
    pub const SHIMMER_HIGHLIGHT: f32 = 0.45;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Default height of the track; the thumb is a square of the same size.
    pub const SWIPE_HEIGHT: f32 = 56.0;

    /// Icon drawn inside the thumb.
    pub const THUMB_ICON: f32 = 24.0;

    /// Width of the track in the demo window.
    pub const DEMO_TRACK_WIDTH: f32 = 360.0;

    /// Width of the moving shimmer band, relative to the track width.
    pub const SHIMMER_BAND_RATIO: f32 = 0.3;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Default label size, in pixels.
    pub const SWIPE_TEXT: f32 = 16.0;

    /// Standard body - demo labels.
    pub const BODY: f32 = 14.0;

    /// Medium title - demo heading.
    pub const TITLE_MD: f32 = 20.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Motion
// ============================================================================

pub mod motion {
    /// Duration of the return-to-start animation, in milliseconds.
    pub const RETURN_DURATION_MS: u64 = 200;

    /// One full shimmer sweep across the track, in milliseconds.
    pub const SHIMMER_PERIOD_MS: u64 = 1200;

    /// Distance over which the label fades in or out, in pixels.
    pub const LABEL_FADE_DISTANCE: f32 = 100.0;

    /// Extra width added past the thumb center when sizing the progress fill.
    pub const PROGRESS_PADDING: f32 = 15.0;

    /// Interval between animation ticks requested by hosts.
    pub const FRAME_INTERVAL_MS: u64 = 16;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    // Opacity validation
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHIMMER_HIGHLIGHT > 0.0 && opacity::SHIMMER_HIGHLIGHT < 1.0);

    // Sizing validation
    assert!(sizing::SWIPE_HEIGHT > sizing::THUMB_ICON);
    assert!(sizing::DEMO_TRACK_WIDTH > sizing::SWIPE_HEIGHT);
    assert!(sizing::SHIMMER_BAND_RATIO > 0.0 && sizing::SHIMMER_BAND_RATIO < 1.0);

    // Motion validation
    assert!(motion::RETURN_DURATION_MS > 0);
    assert!(motion::SHIMMER_PERIOD_MS > motion::RETURN_DURATION_MS);
    assert!(motion::LABEL_FADE_DISTANCE > 0.0);

    // Color validation
    assert!(palette::ACCENT.b >= 0.0 && palette::ACCENT.b <= 1.0);
};
