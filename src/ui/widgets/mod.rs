// SPDX-License-Identifier: MPL-2.0
//! Custom widgets.

pub mod swipe_track;

pub use swipe_track::SwipeTrack;
