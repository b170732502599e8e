// SPDX-License-Identifier: MPL-2.0
//! Timer subscriptions for the demo application.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{time, Subscription};
use std::time::Duration;

/// Ticks at frame rate while the thumb is returning to the start.
///
/// Pointer input reaches the app through the swipe track itself, so no
/// native event routing is needed here.
pub fn create_tick_subscription(is_animating: bool) -> Subscription<Message> {
    if is_animating {
        time::every(Duration::from_millis(motion::FRAME_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
