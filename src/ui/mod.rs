// SPDX-License-Identifier: MPL-2.0
//! User interface modules.

pub mod design_tokens;
pub mod styles;
pub mod swipe_button;
pub mod widgets;
