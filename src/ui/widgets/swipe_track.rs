// SPDX-License-Identifier: MPL-2.0
//! Track widget of the swipe button.
//!
//! Draws the track, the shimmer sweep, the progress fill, the label and the
//! thumb from a snapshot of a [`SwipeButton`], and turns raw mouse and touch
//! input into [`SwipeEvent`]s carrying the live layout metrics.

use crate::ui::design_tokens::{opacity, palette, radius, sizing};
use crate::ui::swipe_button::{Metrics, Shimmer, SwipeButton, SwipeEvent};
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::renderer::{self, Renderer as _};
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::alignment::{Horizontal, Vertical};
use iced::gradient::{self, Gradient};
use iced::widget::{container, svg, text};
use iced::{
    touch, window, Background, Border, Color, Degrees, Element, Event, Length, Point, Rectangle,
    Renderer, Size, Theme,
};

const EMPTY: Rectangle = Rectangle {
    x: 0.0,
    y: 0.0,
    width: 0.0,
    height: 0.0,
};

/// Per-instance widget state kept in the iced tree.
#[derive(Debug, Clone, Copy, Default)]
struct State {
    /// Pointer holding the thumb, if any.
    grab: Option<Source>,
    /// Last pointer x seen during the gesture.
    last_x: f32,
    /// Shimmer sweep position in [0, 1).
    shimmer_phase: f32,
}

impl State {
    /// Feeds one pointer action into the current grab.
    ///
    /// Only the pointer that grabbed the thumb can move or release it.
    fn route(
        &mut self,
        pointer: Pointer,
        thumb: Rectangle,
        enabled: bool,
        metrics: Metrics,
    ) -> Option<SwipeEvent> {
        match pointer {
            Pointer::Down(source, position) => {
                if !enabled || self.grab.is_some() || !thumb.contains(position) {
                    return None;
                }
                self.grab = Some(source);
                self.last_x = position.x;
                Some(SwipeEvent::Pressed {
                    x: position.x,
                    metrics,
                })
            }
            Pointer::Move(source, x) if self.grab == Some(source) => {
                self.last_x = x;
                Some(SwipeEvent::Moved { x, metrics })
            }
            Pointer::Up(source, x) if self.grab == Some(source) => {
                self.grab = None;
                Some(SwipeEvent::Released {
                    x: x.unwrap_or(self.last_x),
                    metrics,
                })
            }
            Pointer::Move(..) | Pointer::Up(..) => None,
        }
    }
}

/// Device that produced a pointer action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Mouse,
    Finger(touch::Finger),
}

/// Pointer input relevant to the thumb.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pointer {
    Down(Source, Point),
    Move(Source, f32),
    Up(Source, Option<f32>),
}

/// Swipe button track, built by [`SwipeButton::view`].
pub struct SwipeTrack<'a, Message> {
    thumb: Element<'a, Message>,
    label: Element<'a, Message>,
    thumb_x: f32,
    progress_width: f32,
    enabled: bool,
    height: f32,
    progress_color: Color,
    shimmer: Shimmer,
    on_event: Box<dyn Fn(SwipeEvent) -> Message + 'a>,
}

impl<'a, Message: 'a> SwipeTrack<'a, Message> {
    /// Snapshots `button` for one frame.
    pub fn new(button: &'a SwipeButton, on_event: impl Fn(SwipeEvent) -> Message + 'a) -> Self {
        let visual = button.visual();
        let height = visual.height;
        let thumb_color = visual.thumb_color;

        let icon = svg::Svg::new(visual.drawable.handle())
            .width(Length::Fixed(sizing::THUMB_ICON))
            .height(Length::Fixed(sizing::THUMB_ICON));

        let thumb = container(icon)
            .width(Length::Fixed(height))
            .height(Length::Fixed(height))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(thumb_color.into()),
                border: Border {
                    radius: radius::FULL.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            });

        let label = text(button.text())
            .size(visual.text_size)
            .font(visual.font)
            .color(Color {
                a: visual.text_color.a * button.label_alpha(),
                ..visual.text_color
            });

        Self {
            thumb: thumb.into(),
            label: label.into(),
            thumb_x: button.thumb_x(),
            progress_width: button.progress_width(),
            enabled: button.is_thumb_enabled(),
            height,
            progress_color: visual.progress_color,
            shimmer: button.shimmer(),
            on_event: Box::new(on_event),
        }
    }
}

impl<Message> SwipeTrack<'_, Message> {
    fn metrics(&self, layout: Layout<'_>) -> Metrics {
        let mut children = layout.children();
        let thumb = children.next().map_or(EMPTY, |l| l.bounds());
        let label = children.next().map_or(EMPTY, |l| l.bounds());
        metrics_for(layout.bounds(), thumb, label, self.thumb_x)
    }
}

impl<Message> Widget<Message, Theme, Renderer> for SwipeTrack<'_, Message> {
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<State>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(State::default())
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.thumb), widget::Tree::new(&self.label)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.thumb, &self.label]);
    }

    fn size(&self) -> Size<Length> {
        Size::new(Length::Fill, Length::Fixed(self.height))
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let size = limits.resolve(Length::Fill, Length::Fixed(self.height), Size::ZERO);

        let thumb_limits = layout::Limits::new(Size::ZERO, Size::new(self.height, self.height));
        let thumb = self
            .thumb
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, &thumb_limits);
        let max_x = (size.width - thumb.size().width).max(0.0);
        let thumb = thumb.move_to(Point::new(self.thumb_x.clamp(0.0, max_x), 0.0));

        let label_limits = layout::Limits::new(Size::ZERO, size);
        let label = self
            .label
            .as_widget_mut()
            .layout(&mut tree.children[1], renderer, &label_limits);
        let label_size = label.size();
        let label = label.move_to(Point::new(
            ((size.width - label_size.width) / 2.0).max(0.0),
            ((size.height - label_size.height) / 2.0).max(0.0),
        ));

        layout::Node::with_children(size, vec![thumb, label])
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        let state = tree.state.downcast_ref::<State>();
        let bounds = layout.bounds();
        let rounded = Border {
            radius: (bounds.height / 2.0).into(),
            ..Border::default()
        };

        renderer.fill_quad(
            renderer::Quad {
                bounds,
                border: rounded,
                ..renderer::Quad::default()
            },
            palette::TRACK,
        );

        renderer.with_layer(bounds, |renderer| {
            let highlight = Color {
                a: opacity::SHIMMER_HIGHLIGHT,
                ..palette::WHITE
            };
            let sweep = gradient::Linear::new(Degrees(90.0))
                .add_stop(0.0, Color::TRANSPARENT)
                .add_stop(0.5, highlight)
                .add_stop(1.0, Color::TRANSPARENT);
            renderer.fill_quad(
                renderer::Quad {
                    bounds: shimmer_band(bounds, state.shimmer_phase),
                    ..renderer::Quad::default()
                },
                Background::Gradient(Gradient::Linear(sweep)),
            );

            if self.progress_width > 0.0 {
                renderer.fill_quad(
                    renderer::Quad {
                        bounds: Rectangle {
                            width: self.progress_width.min(bounds.width),
                            ..bounds
                        },
                        border: rounded,
                        ..renderer::Quad::default()
                    },
                    self.progress_color,
                );
            }
        });

        let mut children = layout.children().zip(&tree.children);
        if let Some((thumb_layout, thumb_tree)) = children.next() {
            if let Some((label_layout, label_tree)) = children.next() {
                self.label.as_widget().draw(
                    label_tree,
                    renderer,
                    theme,
                    style,
                    label_layout,
                    cursor,
                    viewport,
                );
            }
            self.thumb.as_widget().draw(
                thumb_tree,
                renderer,
                theme,
                style,
                thumb_layout,
                cursor,
                viewport,
            );
        }
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        if let Event::Window(window::Event::RedrawRequested(now)) = event {
            let state = tree.state.downcast_mut::<State>();
            state.shimmer_phase = self.shimmer.phase(*now);
            shell.request_redraw();
            return;
        }

        let Some(pointer) = pointer_action(event, cursor) else {
            return;
        };
        let metrics = self.metrics(layout);
        let thumb_bounds = layout
            .children()
            .next()
            .map_or(EMPTY, |l| l.bounds());
        let state = tree.state.downcast_mut::<State>();

        if let Some(swipe) = state.route(pointer, thumb_bounds, self.enabled, metrics) {
            shell.publish((self.on_event)(swipe));
            shell.capture_event();
        }
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &Renderer,
    ) -> mouse::Interaction {
        let state = tree.state.downcast_ref::<State>();
        if state.grab.is_some() {
            return mouse::Interaction::Grabbing;
        }
        let over_thumb = layout
            .children()
            .next()
            .is_some_and(|thumb| cursor.is_over(thumb.bounds()));
        if self.enabled && over_thumb {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message: 'a> From<SwipeTrack<'a, Message>> for Element<'a, Message> {
    fn from(track: SwipeTrack<'a, Message>) -> Self {
        Self::new(track)
    }
}

/// Track-local metrics from absolute layout bounds.
///
/// The thumb node is placed at its drag offset, so its layout origin is the
/// node position minus `thumb_x`.
fn metrics_for(track: Rectangle, thumb: Rectangle, label: Rectangle, thumb_x: f32) -> Metrics {
    let label_start = label.x - track.x;
    Metrics {
        track_end: track.width,
        thumb_left: (thumb.x - track.x - thumb_x).max(0.0),
        thumb_width: thumb.width,
        label_start,
        label_end: label_start + label.width,
    }
}

/// Bounds of the shimmer highlight band at `phase`.
///
/// The band enters from the left edge at phase 0 and leaves past the right
/// edge at phase 1.
fn shimmer_band(track: Rectangle, phase: f32) -> Rectangle {
    let band = track.width * sizing::SHIMMER_BAND_RATIO;
    Rectangle {
        x: track.x - band + phase * (track.width + band),
        y: track.y,
        width: band,
        height: track.height,
    }
}

fn pointer_action(event: &Event, cursor: mouse::Cursor) -> Option<Pointer> {
    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
            cursor
                .position()
                .map(|position| Pointer::Down(Source::Mouse, position))
        }
        Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Pointer::Move(Source::Mouse, position.x))
        }
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => Some(Pointer::Up(
            Source::Mouse,
            cursor.position().map(|p| p.x),
        )),
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            Some(Pointer::Down(Source::Finger(*id), *position))
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            Some(Pointer::Move(Source::Finger(*id), position.x))
        }
        Event::Touch(
            touch::Event::FingerLifted { id, position } | touch::Event::FingerLost { id, position },
        ) => Some(Pointer::Up(Source::Finger(*id), Some(position.x))),
        _ => None,
    }
}
