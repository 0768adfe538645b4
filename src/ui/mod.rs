// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Elm-style "state down, messages up": views read the playback machine and
//! emit [`controls::Message`], which the application turns into machine
//! events.
//!
//! - [`player`] - Player screen with loading and failure views
//! - [`controls`] - Play/pause/restart button, time readout, progress track
//! - [`video_canvas`] - Surface showing the latest decoded frame
//! - [`styles`] - Button, container and tooltip styles
//! - [`design_tokens`] - Colors, spacing, sizing
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - Playback icons

pub mod controls;
pub mod design_tokens;
pub mod icons;
pub mod player;
pub mod styles;
pub mod theming;
pub mod video_canvas;
