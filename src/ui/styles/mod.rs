// SPDX-License-Identifier: MPL-2.0
//! Styles for the player components.

pub mod button;
pub mod container;
pub mod tooltip;
