// SPDX-License-Identifier: MPL-2.0
//! `swipe_button` is a swipe-to-confirm control built with the Iced GUI framework.
//!
//! The user drags a thumb along a track; reaching the end locks the control
//! and fires a completion callback, while releasing early animates the thumb
//! back to the start. The crate also ships the attribute file loader used to
//! style the control and a small demo application.

pub mod app;
pub mod config;
pub mod error;
pub mod ui;
