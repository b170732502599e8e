// SPDX-License-Identifier: MPL-2.0
use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use swipe_button::config::{self, SwipeAttributes};
use swipe_button::ui::design_tokens::palette;
use swipe_button::ui::swipe_button::{Drawable, Metrics, Phase, SwipeButton, SwipeEvent};
use tempfile::tempdir;

fn metrics() -> Metrics {
    Metrics {
        track_end: 300.0,
        thumb_left: 0.0,
        thumb_width: 60.0,
        label_start: 110.0,
        label_end: 190.0,
    }
}

fn counted_button(text: &str) -> (SwipeButton, Rc<Cell<u32>>) {
    let calls = Rc::new(Cell::new(0));
    let mut button = SwipeButton::from_attributes(&SwipeAttributes {
        swipe_text: Some(text.to_string()),
        ..SwipeAttributes::default()
    });
    let counter = Rc::clone(&calls);
    button.set_listener(move || counter.set(counter.get() + 1));
    (button, calls)
}

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn dragging_to_the_end_locks_and_notifies_once() {
    let (mut button, calls) = counted_button("Swipe to pay");
    let m = metrics();
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    let phase = button.handle(SwipeEvent::Moved { x: 250.0, metrics: m }, now);

    assert_eq!(phase, Phase::Locked);
    assert_eq!(button.thumb_x(), 240.0);
    assert!(!button.is_thumb_enabled());
    assert_eq!(calls.get(), 1);

    // The locked thumb ignores further input.
    button.handle(SwipeEvent::Moved { x: 280.0, metrics: m }, now);
    button.handle(SwipeEvent::Released { x: 280.0, metrics: m }, now);
    button.handle(SwipeEvent::Pressed { x: 250.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 300.0, metrics: m }, now);

    assert_eq!(button.phase(), Phase::Locked);
    assert_eq!(button.thumb_x(), 240.0);
    assert!(!button.is_animating());
    assert_eq!(calls.get(), 1);
}

#[test]
fn early_release_returns_to_start_in_200ms() {
    let (mut button, calls) = counted_button("Swipe to pay");
    let m = metrics();
    let start = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 20.0, metrics: m }, start);
    button.handle(SwipeEvent::Moved { x: 120.0, metrics: m }, start);
    assert_eq!(button.thumb_x(), 100.0);
    assert_close(button.progress_width(), 100.0 + 30.0 + 15.0);

    let phase = button.handle(SwipeEvent::Released { x: 120.0, metrics: m }, start);
    assert_eq!(phase, Phase::SnappingBack);
    assert!(button.is_animating());

    button.tick(start + Duration::from_millis(100));
    assert_close(button.thumb_x(), 50.0);
    assert_close(button.progress_width(), 50.0 + 30.0 + 15.0);

    button.tick(start + Duration::from_millis(200));
    assert_eq!(button.phase(), Phase::Idle);
    assert_eq!(button.thumb_x(), 0.0);
    assert_eq!(button.label_alpha(), 1.0);
    assert!(!button.is_animating());
    assert_eq!(calls.get(), 0);
}

#[test]
fn pressing_during_return_cancels_the_animation() {
    let (mut button, calls) = counted_button("Swipe to pay");
    let m = metrics();
    let start = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, start);
    button.handle(SwipeEvent::Moved { x: 100.0, metrics: m }, start);
    button.handle(SwipeEvent::Released { x: 100.0, metrics: m }, start);
    button.tick(start + Duration::from_millis(100));
    let resumed_at = button.thumb_x();

    let phase = button.handle(SwipeEvent::Pressed { x: 200.0, metrics: m }, start);
    assert_eq!(phase, Phase::Dragging);
    assert!(!button.is_animating());

    // Late ticks from the old animation change nothing.
    button.tick(start + Duration::from_millis(300));
    assert_eq!(button.thumb_x(), resumed_at);
    assert_eq!(button.phase(), Phase::Dragging);

    // The grab point stays under the pointer.
    button.handle(SwipeEvent::Moved { x: 210.0, metrics: m }, start);
    assert_close(button.thumb_x(), resumed_at + 10.0);
    assert_eq!(calls.get(), 0);
}

#[test]
fn thumb_never_leaves_the_track() {
    let (mut button, _calls) = counted_button("");
    let m = metrics();
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 150.0, metrics: m }, now);
    for step in 0..=30 {
        let x = 150.0 - 10.0 * step as f32;
        button.handle(SwipeEvent::Moved { x, metrics: m }, now);
        assert!(button.thumb_x() >= 0.0);
        assert!(button.thumb_x() <= m.max_thumb_x());
    }
    assert_eq!(button.thumb_x(), 0.0);

    for step in 0..=30 {
        let x = 150.0 + 10.0 * step as f32;
        button.handle(SwipeEvent::Moved { x, metrics: m }, now);
        assert!(button.thumb_x() >= 0.0);
        assert!(button.thumb_x() <= m.max_thumb_x());
        assert!((0.0..=1.0).contains(&button.label_alpha()));
    }
    assert!(button.is_locked());
}

#[test]
fn label_fades_while_approaching() {
    let (mut button, _calls) = counted_button("Swipe to pay");
    let m = Metrics {
        track_end: 600.0,
        thumb_left: 0.0,
        thumb_width: 60.0,
        label_start: 250.0,
        label_end: 350.0,
    };
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 140.0, metrics: m }, now);
    assert_close(button.label_alpha(), 0.5);

    button.handle(SwipeEvent::Moved { x: 250.0, metrics: m }, now);
    assert_eq!(button.label_alpha(), 0.0);

    button.handle(SwipeEvent::Moved { x: 400.0, metrics: m }, now);
    assert_close(button.label_alpha(), 0.5);
}

#[test]
fn no_attributes_resolve_to_defaults() {
    let button = SwipeButton::from_attributes(&SwipeAttributes::default());

    assert_eq!(button.text(), "");
    assert_eq!(button.default_text(), "");
    assert_eq!(button.visual().drawable, Drawable::Arrow);
    assert_eq!(button.visual().thumb_color, palette::ACCENT);
    assert_eq!(button.visual().progress_color, palette::ACCENT);
    assert_eq!(button.visual().text_size, 16.0);
    assert_eq!(button.visual().height, 56.0);
    assert_eq!(button.phase(), Phase::Idle);
}

#[test]
fn reload_restores_text_only_when_asked() {
    let (mut button, calls) = counted_button("Swipe to pay");
    let m = metrics();
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 300.0, metrics: m }, now);
    button.set_text("Paid");

    button.reload(false);
    assert_eq!(button.phase(), Phase::Idle);
    assert_eq!(button.thumb_x(), 0.0);
    assert!(button.is_thumb_enabled());
    assert_eq!(button.text(), "Paid");

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 300.0, metrics: m }, now);
    assert_eq!(calls.get(), 2);

    button.reload(true);
    assert_eq!(button.text(), "Swipe to pay");
}

#[test]
fn cleared_listener_is_not_called() {
    let (mut button, calls) = counted_button("");
    button.clear_listener();
    let m = metrics();
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 300.0, metrics: m }, now);

    assert!(button.is_locked());
    assert_eq!(calls.get(), 0);
}

#[test]
fn detached_button_ignores_events() {
    let (mut button, calls) = counted_button("");
    let m = metrics();
    let now = Instant::now();

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 100.0, metrics: m }, now);
    button.handle(SwipeEvent::Released { x: 100.0, metrics: m }, now);
    button.detach();

    assert!(!button.is_attached());
    assert!(!button.is_animating());
    assert!(!button.has_listener());

    button.handle(SwipeEvent::Pressed { x: 0.0, metrics: m }, now);
    button.handle(SwipeEvent::Moved { x: 300.0, metrics: m }, now);
    assert_eq!(button.phase(), Phase::Idle);
    assert_eq!(calls.get(), 0);
}

#[test]
fn attribute_file_styles_the_button() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("swipe.toml");

    let attrs = SwipeAttributes {
        swipe_text: Some("Slide to unlock".to_string()),
        swipe_thumb_color: Some("#FF0000".to_string()),
        swipe_text_size: Some(18.0),
        ..SwipeAttributes::default()
    };
    config::save_to_path(&attrs, &path).expect("Failed to write attribute file");

    let (loaded, warning) = config::load_file(&path);
    assert_eq!(warning, None);

    let button = SwipeButton::from_attributes(&loaded);
    assert_eq!(button.text(), "Slide to unlock");
    assert_eq!(button.visual().thumb_color, iced::Color::from_rgb8(255, 0, 0));
    assert_eq!(button.visual().progress_color, palette::ACCENT);
    assert_eq!(button.visual().text_size, 18.0);
}

#[test]
fn malformed_attributes_fall_back_individually() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("swipe.toml");
    std::fs::write(
        &path,
        "swipeText = \"Go\"\nswipeThumbColor = \"not-a-color\"\nswipeHeight = \"tall\"\n",
    )
    .expect("Failed to write attribute file");

    let (loaded, warning) = config::load_file(&path);
    assert_eq!(warning.as_deref(), Some(config::WARNING_PARTIAL));

    let button = SwipeButton::from_attributes(&loaded);
    assert_eq!(button.text(), "Go");
    assert_eq!(button.visual().thumb_color, palette::ACCENT);
    assert_eq!(button.visual().height, 56.0);
}
