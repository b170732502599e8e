// SPDX-License-Identifier: MPL-2.0
//! Label fade policy.
//!
//! The label fades out as the thumb approaches it from the left, stays hidden
//! while the thumb overlaps it, and fades back in once the thumb has moved
//! past it on the right.

use super::gesture::Metrics;
use crate::ui::design_tokens::motion::LABEL_FADE_DISTANCE;

/// Computes the label opacity for a thumb at `thumb_x`.
///
/// Returns `None` when the opacity must be left as it is. That happens only
/// when the thumb's right edge sits at or past the label's end while its
/// shifted origin is still left of it.
#[must_use]
pub fn label_opacity(thumb_x: f32, metrics: &Metrics) -> Option<f32> {
    let right = thumb_x + metrics.thumb_width;

    let gap = metrics.label_start - right;
    if gap > LABEL_FADE_DISTANCE {
        return Some(1.0);
    }
    if (0.0..=LABEL_FADE_DISTANCE).contains(&gap) {
        return Some(gap / LABEL_FADE_DISTANCE);
    }
    if right > metrics.label_start && right < metrics.label_end {
        return Some(0.0);
    }

    let delta = (thumb_x + metrics.thumb_left) - metrics.label_end;
    if delta > LABEL_FADE_DISTANCE {
        Some(1.0)
    } else if (0.0..=LABEL_FADE_DISTANCE).contains(&delta) {
        Some(delta / LABEL_FADE_DISTANCE)
    } else {
        None
    }
}
