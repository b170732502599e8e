// SPDX-License-Identifier: MPL-2.0
//! Drag gesture state
//!
//! Tracks the thumb while the pointer is down and keeps its position inside
//! the track.

/// Where the swipe button is in its gesture lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Dragging,
    SnappingBack,
    Locked,
}

/// Layout snapshot delivered by the host with every pointer event.
///
/// All values are in track-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Metrics {
    /// Right edge of the track.
    pub track_end: f32,
    /// Layout origin of the thumb, before any drag offset.
    pub thumb_left: f32,
    pub thumb_width: f32,
    /// Left edge of the label.
    pub label_start: f32,
    /// Right edge of the label.
    pub label_end: f32,
}

impl Metrics {
    /// Largest thumb offset that keeps the thumb inside the track.
    #[must_use]
    pub fn max_thumb_x(&self) -> f32 {
        (self.track_end - self.thumb_width).max(0.0)
    }
}

/// Pointer events translated by the host widget.
///
/// `x` is the absolute pointer position; only differences between events of
/// the same gesture matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipeEvent {
    Pressed { x: f32, metrics: Metrics },
    Moved { x: f32, metrics: Metrics },
    Released { x: f32, metrics: Metrics },
}

impl SwipeEvent {
    #[must_use]
    pub fn metrics(&self) -> Metrics {
        match self {
            SwipeEvent::Pressed { metrics, .. }
            | SwipeEvent::Moved { metrics, .. }
            | SwipeEvent::Released { metrics, .. } => *metrics,
        }
    }
}

/// Manages the thumb drag state
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Whether a drag operation is currently active
    pub is_dragging: bool,

    /// Distance from the pointer to the thumb origin when the drag started
    pub pointer_offset: f32,

    /// Current horizontal offset of the thumb
    pub thumb_x: f32,
}

impl GestureState {
    /// Starts a drag with the pointer at `pointer_x`
    pub fn start(&mut self, pointer_x: f32) {
        self.is_dragging = true;
        self.pointer_offset = pointer_x - self.thumb_x;
    }

    /// Stops the drag, leaving the thumb where it is
    pub fn stop(&mut self) {
        self.is_dragging = false;
    }

    /// Thumb offset that keeps the grab point under the pointer
    #[must_use]
    pub fn target_x(&self, pointer_x: f32) -> f32 {
        pointer_x - self.pointer_offset
    }

    /// Moves the thumb back to the start of the track
    pub fn reset(&mut self) {
        self.is_dragging = false;
        self.pointer_offset = 0.0;
        self.thumb_x = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_gesture_state_is_not_dragging() {
        let state = GestureState::default();
        assert!(!state.is_dragging);
        assert_eq!(state.thumb_x, 0.0);
        assert_eq!(state.pointer_offset, 0.0);
    }

    #[test]
    fn start_records_offset_from_thumb() {
        let mut state = GestureState {
            thumb_x: 40.0,
            ..GestureState::default()
        };
        state.start(100.0);

        assert!(state.is_dragging);
        assert_eq!(state.pointer_offset, 60.0);
        assert_eq!(state.target_x(130.0), 70.0);
    }

    #[test]
    fn stop_keeps_thumb_position() {
        let mut state = GestureState::default();
        state.start(10.0);
        state.thumb_x = 80.0;
        state.stop();

        assert!(!state.is_dragging);
        assert_eq!(state.thumb_x, 80.0);
    }

    #[test]
    fn reset_returns_thumb_to_start() {
        let mut state = GestureState::default();
        state.start(10.0);
        state.thumb_x = 80.0;
        state.reset();

        assert!(!state.is_dragging);
        assert_eq!(state.thumb_x, 0.0);
    }

    #[test]
    fn max_thumb_x_never_negative() {
        let metrics = Metrics {
            track_end: 40.0,
            thumb_width: 60.0,
            ..Metrics::default()
        };
        assert_eq!(metrics.max_thumb_x(), 0.0);

        let metrics = Metrics {
            track_end: 300.0,
            thumb_width: 60.0,
            ..Metrics::default()
        };
        assert_eq!(metrics.max_thumb_x(), 240.0);
    }

    #[test]
    fn event_exposes_its_metrics() {
        let metrics = Metrics {
            track_end: 300.0,
            ..Metrics::default()
        };
        let event = SwipeEvent::Released { x: 5.0, metrics };
        assert_eq!(event.metrics(), metrics);
    }
}
