// SPDX-License-Identifier: MPL-2.0
//! Playback icons.
//!
//! Icons are small inline SVGs tinted with the theme's text color, so one
//! asset serves both light and dark themes. Handles are cached using
//! `OnceLock`.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static, Theme> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            let handle = HANDLE.get_or_init(|| {
                Handle::from_memory(concat!(
                    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24"><path fill="black" d=""#,
                    $path,
                    r#""/></svg>"#
                ).as_bytes())
            });
            Svg::new(handle.clone()).style(tinted)
        }
    };
}

define_icon!(play, "M8 5v14l11-7z", "Play icon: triangle pointing right.");
define_icon!(
    pause,
    "M6 5h4v14H6zm8 0h4v14h-4z",
    "Pause icon: two vertical bars."
);
define_icon!(
    replay,
    "M12 5V1L7 6l5 5V7c3.31 0 6 2.69 6 6s-2.69 6-6 6-6-2.69-6-6H4c0 4.42 3.58 8 8 8s8-3.58 8-8-3.58-8-8-8z",
    "Replay icon: circular arrow."
);

fn tinted(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.palette().text),
    }
}

/// Sizes an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'static, Theme>, size: f32) -> Svg<'static, Theme> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
