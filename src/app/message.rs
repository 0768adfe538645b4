// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::MediaMessage;
use crate::ui::controls;
use iced::keyboard::key::Named;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Notification from the media element.
    Media(MediaMessage),
    /// The user pressed the playback control.
    Controls(controls::Message),
    /// A keyboard shortcut not captured by a widget.
    KeyPressed(Named),
}

/// Runtime flags passed in from the launcher.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Path or URL to play instead of the configured source.
    pub source: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_PLAYBACK_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
