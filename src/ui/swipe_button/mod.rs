// SPDX-License-Identifier: MPL-2.0
//! Swipe-to-confirm button.
//!
//! [`SwipeButton`] owns everything the control remembers between events: the
//! drag gesture, the return animation, the label text and the completion
//! listener. It knows nothing about the toolkit; hosts feed it
//! [`SwipeEvent`]s and animation ticks, and render it with
//! [`SwipeButton::view`].
//!
//! # Gesture lifecycle
//!
//! ```text
//! Idle ──press──▶ Dragging ──release──▶ SnappingBack ──finished──▶ Idle
//!                    │                       │
//!                    │                       └──press (cancels)──▶ Dragging
//!                    └──reach end──▶ Locked ──reload──▶ Idle
//! ```
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//! use std::time::Instant;
//! use swipe_button::ui::swipe_button::{Metrics, Phase, SwipeButton, SwipeEvent, VisualConfig};
//!
//! let metrics = Metrics {
//!     track_end: 300.0,
//!     thumb_left: 0.0,
//!     thumb_width: 60.0,
//!     label_start: 110.0,
//!     label_end: 190.0,
//! };
//!
//! let confirmed = Rc::new(Cell::new(0));
//! let mut button = SwipeButton::new(VisualConfig::default());
//! let counter = Rc::clone(&confirmed);
//! button.set_listener(move || counter.set(counter.get() + 1));
//!
//! let now = Instant::now();
//! button.handle(SwipeEvent::Pressed { x: 10.0, metrics }, now);
//! let phase = button.handle(SwipeEvent::Moved { x: 260.0, metrics }, now);
//!
//! assert_eq!(phase, Phase::Locked);
//! assert_eq!(button.thumb_x(), 240.0);
//! assert_eq!(confirmed.get(), 1);
//! ```

mod animation;
mod fade;
mod gesture;
mod shimmer;
mod style;

pub use animation::{AnimationSpec, AnimationStep, Easing, Lerp, ReturnAnimation};
pub use fade::label_opacity;
pub use gesture::{GestureState, Metrics, Phase, SwipeEvent};
pub use shimmer::Shimmer;
pub use style::{font_for_family, Drawable, VisualConfig, DEFAULT_FONT, SWIPE_ARROW_SVG};

use crate::config::SwipeAttributes;
use crate::ui::design_tokens::motion;
use crate::ui::widgets::SwipeTrack;
use iced::Element;
use std::fmt;
use std::time::Instant;

/// Callback fired once when the thumb reaches the end of the track.
pub type OnSwipeCompleted = Box<dyn FnMut()>;

/// State of one swipe-to-confirm control.
pub struct SwipeButton {
    visual: VisualConfig,
    gesture: GestureState,
    phase: Phase,
    metrics: Metrics,
    progress_width: f32,
    label_alpha: f32,
    text: String,
    default_text: String,
    thumb_enabled: bool,
    animation: Option<ReturnAnimation>,
    listener: Option<OnSwipeCompleted>,
    shimmer: Shimmer,
    attached: bool,
}

impl fmt::Debug for SwipeButton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeButton")
            .field("phase", &self.phase)
            .field("thumb_x", &self.gesture.thumb_x)
            .field("progress_width", &self.progress_width)
            .field("label_alpha", &self.label_alpha)
            .field("text", &self.text)
            .field("thumb_enabled", &self.thumb_enabled)
            .field("has_listener", &self.listener.is_some())
            .field("attached", &self.attached)
            .finish()
    }
}

impl Default for SwipeButton {
    fn default() -> Self {
        Self::new(VisualConfig::default())
    }
}

impl SwipeButton {
    /// Creates a button showing `visual.text`, which also becomes the
    /// default text restored by [`reload`](Self::reload).
    #[must_use]
    pub fn new(visual: VisualConfig) -> Self {
        let text = visual.text.clone();
        Self {
            default_text: text.clone(),
            text,
            visual,
            gesture: GestureState::default(),
            phase: Phase::Idle,
            metrics: Metrics::default(),
            progress_width: 0.0,
            label_alpha: 1.0,
            thumb_enabled: true,
            animation: None,
            listener: None,
            shimmer: Shimmer::new(Instant::now()),
            attached: true,
        }
    }

    /// Creates a button from style attributes, using defaults for anything
    /// missing or malformed.
    #[must_use]
    pub fn from_attributes(attrs: &SwipeAttributes) -> Self {
        Self::new(VisualConfig::from_attributes(attrs))
    }

    // ------------------------------------------------------------------
    // Gesture handling
    // ------------------------------------------------------------------

    /// Routes a host event to the matching gesture operation and returns the
    /// phase afterwards.
    pub fn handle(&mut self, event: SwipeEvent, now: Instant) -> Phase {
        match event {
            SwipeEvent::Pressed { x, metrics } => self.drag_start(x, metrics),
            SwipeEvent::Moved { x, metrics } => self.drag_move(x, metrics),
            SwipeEvent::Released { metrics, .. } => self.drag_end(now, metrics),
        }
        self.phase
    }

    /// Pointer went down on the thumb.
    ///
    /// Cancels a running return animation without its completion effects.
    pub fn drag_start(&mut self, pointer_x: f32, metrics: Metrics) {
        if !self.attached || !self.thumb_enabled {
            return;
        }
        self.metrics = metrics;

        if self.animation.take().is_some() {
            log::debug!("Return animation cancelled at x={}", self.gesture.thumb_x);
        }

        self.gesture.start(pointer_x);
        self.phase = Phase::Dragging;
        self.update_progress(self.gesture.thumb_x);
    }

    /// Pointer moved while the thumb is held.
    pub fn drag_move(&mut self, pointer_x: f32, metrics: Metrics) {
        if !self.attached || self.phase != Phase::Dragging {
            return;
        }
        self.metrics = metrics;

        let mut x = self.gesture.target_x(pointer_x);
        if x + metrics.thumb_width >= metrics.track_end {
            x = metrics.track_end - metrics.thumb_width;
            self.lock();
        }
        self.gesture.thumb_x = x.max(0.0);

        self.update_progress(self.gesture.thumb_x);
        if let Some(alpha) = label_opacity(self.gesture.thumb_x, &metrics) {
            self.label_alpha = alpha.clamp(0.0, 1.0);
        }
    }

    /// Pointer released before the end was reached.
    pub fn drag_end(&mut self, now: Instant, metrics: Metrics) {
        if !self.attached || self.phase != Phase::Dragging {
            return;
        }
        self.metrics = metrics;
        self.gesture.stop();

        let from = self.gesture.thumb_x;
        self.animation = Some(ReturnAnimation::start(
            from,
            0.0,
            now,
            AnimationSpec::linear(motion::RETURN_DURATION_MS),
        ));
        self.phase = Phase::SnappingBack;
        self.update_progress(from);
        log::debug!("Thumb released at x={from}, returning to start");
    }

    /// Advances the return animation to `now`.
    pub fn tick(&mut self, now: Instant) {
        let Some(animation) = &self.animation else {
            return;
        };

        match animation.sample(now) {
            AnimationStep::Running(x) => {
                self.gesture.thumb_x = x;
                self.update_progress(x);
            }
            AnimationStep::Finished(x) => {
                self.animation = None;
                self.gesture.thumb_x = x;
                self.update_progress(x);
                self.label_alpha = 1.0;
                self.phase = Phase::Idle;
            }
        }
    }

    fn lock(&mut self) {
        self.gesture.stop();
        self.thumb_enabled = false;
        self.phase = Phase::Locked;
        log::debug!("Swipe completed");

        if let Some(listener) = self.listener.as_mut() {
            listener();
        }
    }

    fn update_progress(&mut self, thumb_x: f32) {
        self.progress_width = thumb_x + self.metrics.thumb_width / 2.0 + motion::PROGRESS_PADDING;
    }

    // ------------------------------------------------------------------
    // Public API
    // ------------------------------------------------------------------

    /// Replaces the completion callback.
    pub fn set_listener(&mut self, listener: impl FnMut() + 'static) {
        self.listener = Some(Box::new(listener));
    }

    /// Removes the completion callback.
    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Replaces the displayed label without touching the default text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Replaces the text restored by `reload(true)`.
    pub fn set_default_text(&mut self, text: impl Into<String>) {
        self.default_text = text.into();
    }

    /// Re-enables the thumb and moves it back to the start.
    ///
    /// With `restore_default_text` the label shows the default text again,
    /// otherwise the current label is kept.
    pub fn reload(&mut self, restore_default_text: bool) {
        self.thumb_enabled = true;
        self.animation = None;
        self.gesture.reset();
        self.progress_width = 0.0;
        self.phase = Phase::Idle;

        if restore_default_text {
            self.text = self.default_text.clone();
        }
        log::debug!("Swipe button reloaded (restore_default_text={restore_default_text})");
    }

    /// Teardown: drops the listener and any running animation.
    ///
    /// After detaching, events and ticks are ignored.
    pub fn detach(&mut self) {
        if !self.attached {
            return;
        }
        self.attached = false;
        self.listener = None;
        self.animation = None;
        self.gesture.stop();
        if self.phase != Phase::Locked {
            self.phase = Phase::Idle;
        }
        log::debug!("Swipe button detached");
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn thumb_x(&self) -> f32 {
        self.gesture.thumb_x
    }

    #[must_use]
    pub fn progress_width(&self) -> f32 {
        self.progress_width
    }

    #[must_use]
    pub fn label_alpha(&self) -> f32 {
        self.label_alpha
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn default_text(&self) -> &str {
        &self.default_text
    }

    #[must_use]
    pub fn is_thumb_enabled(&self) -> bool {
        self.thumb_enabled
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.phase == Phase::Locked
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.attached
    }

    #[must_use]
    pub fn has_listener(&self) -> bool {
        self.listener.is_some()
    }

    #[must_use]
    pub fn visual(&self) -> &VisualConfig {
        &self.visual
    }

    #[must_use]
    pub fn shimmer(&self) -> Shimmer {
        self.shimmer
    }

    /// Renders the control; pointer events come back through `on_event`.
    pub fn view<'a, Message: 'a>(
        &'a self,
        on_event: impl Fn(SwipeEvent) -> Message + 'a,
    ) -> Element<'a, Message> {
        SwipeTrack::new(self, on_event).into()
    }
}

impl Drop for SwipeButton {
    fn drop(&mut self) {
        self.detach();
    }
}
