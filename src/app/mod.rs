// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting a single swipe button.
//!
//! The `App` struct owns the [`SwipeButton`] controller, forwards pointer
//! events and animation ticks to it, and exposes the reload operations as
//! buttons. Confirmations are counted through the completion listener.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, SwipeAttributes};
use crate::ui::swipe_button::{Phase, SwipeButton};
use iced::{window, Element, Subscription, Task, Theme};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Instant;

/// Label shown once the swipe completed, until a reload restores the default.
pub const CONFIRMED_TEXT: &str = "Confirmed";

pub const WINDOW_DEFAULT_WIDTH: f32 = 480.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 320.0;

/// Root application state.
pub struct App {
    swipe: SwipeButton,
    confirmations: Rc<Cell<u32>>,
    /// Warning key from loading the attribute file, if any.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("swipe", &self.swipe)
            .field("confirmations", &self.confirmations.get())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_attributes(&SwipeAttributes::default(), None)
    }
}

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 boots through an `Fn`; the flags are consumed on first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut attrs, warning) = match &flags.config_path {
            Some(path) => config::load_file(path),
            None => config::load(),
        };
        if let Some(text) = flags.text {
            attrs.swipe_text = Some(text);
        }

        (Self::with_attributes(&attrs, warning), Task::none())
    }

    fn with_attributes(attrs: &SwipeAttributes, config_warning: Option<String>) -> Self {
        let confirmations = Rc::new(Cell::new(0));
        let mut swipe = SwipeButton::from_attributes(attrs);

        let counter = Rc::clone(&confirmations);
        swipe.set_listener(move || {
            counter.set(counter.get() + 1);
            log::info!("Swipe confirmed ({} total)", counter.get());
        });

        Self {
            swipe,
            confirmations,
            config_warning,
        }
    }

    fn title(&self) -> String {
        String::from("Swipe Button")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Swipe(event) => {
                let was_locked = self.swipe.is_locked();
                let phase = self.swipe.handle(event, Instant::now());
                if phase == Phase::Locked && !was_locked {
                    self.swipe.set_text(CONFIRMED_TEXT);
                }
            }
            Message::Tick(now) => self.swipe.tick(now),
            Message::Reload => self.swipe.reload(false),
            Message::ReloadWithDefaultText => self.swipe.reload(true),
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            swipe: &self.swipe,
            confirmations: self.confirmations.get(),
            warning: self.config_warning.as_deref(),
        })
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription(self.swipe.is_animating())
    }

    /// Number of completed swipes since startup.
    #[must_use]
    pub fn confirmations(&self) -> u32 {
        self.confirmations.get()
    }
}
