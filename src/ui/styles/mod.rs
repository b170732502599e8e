// SPDX-License-Identifier: MPL-2.0
//! Centralized styling.

pub mod button;
