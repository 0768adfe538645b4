// SPDX-License-Identifier: MPL-2.0
//! Playback controls bar.
//!
//! One button whose meaning follows the machine state (play, pause or
//! restart), an `elapsed / duration` readout and a read-only progress track.

use crate::i18n::fluent::I18n;
use crate::machine::{Event, Ready, State};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, container, progress_bar, row, text, tooltip};
use iced::{alignment, Element, Length};

/// The action offered by the control button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackControl {
    Play,
    Pause,
    Restart,
}

impl PlaybackControl {
    /// Control shown for `state`.
    ///
    /// Loading and failure show Play; the machine ignores it there.
    pub fn for_state(state: &State) -> Self {
        match state {
            State::Ready(Ready::Playing) => PlaybackControl::Pause,
            State::Ready(Ready::Ended) => PlaybackControl::Restart,
            State::Loading | State::Ready(Ready::Paused) | State::Failure => PlaybackControl::Play,
        }
    }

    /// Machine event dispatched when the control is pressed.
    pub fn event<H>(self) -> Event<H> {
        match self {
            PlaybackControl::Play => Event::Play,
            PlaybackControl::Pause => Event::Pause,
            PlaybackControl::Restart => Event::Restart,
        }
    }

    /// i18n key of the control's label.
    pub fn label_key(self) -> &'static str {
        match self {
            PlaybackControl::Play => "video-play",
            PlaybackControl::Pause => "video-pause",
            PlaybackControl::Restart => "video-restart",
        }
    }

    fn icon(self) -> iced::widget::Svg<'static, iced::Theme> {
        match self {
            PlaybackControl::Play => icons::play(),
            PlaybackControl::Pause => icons::pause(),
            PlaybackControl::Restart => icons::replay(),
        }
    }
}

/// Formats seconds as `m:ss`, truncating fractions.
///
/// Minutes are not padded and keep growing past an hour.
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Clone)]
pub enum Message {
    Pressed(PlaybackControl),
}

/// Values the controls bar displays.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: State,
    pub elapsed: f64,
    pub duration: f64,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let control = PlaybackControl::for_state(&ctx.state);
    let label = ctx.i18n.tr(control.label_key());

    let control_button = button(icons::sized(control.icon(), sizing::ICON_MD))
        .on_press(Message::Pressed(control))
        .padding(spacing::XS)
        .style(styles::button::playback_control);

    let readout = text(format!(
        "{} / {}",
        format_time(ctx.elapsed),
        format_time(ctx.duration)
    ))
    .size(typography::BODY)
    .width(Length::Fixed(sizing::TIME_READOUT))
    .align_x(alignment::Horizontal::Center);

    // Unknown duration keeps the track empty
    let track_end = if ctx.duration > 0.0 { ctx.duration as f32 } else { 1.0 };
    let track = progress_bar(0.0..=track_end, (ctx.elapsed as f32).clamp(0.0, track_end))
        .girth(sizing::TIMELINE_TRACK);

    let bar = row![
        styles::tooltip::styled(control_button, label, tooltip::Position::Top),
        readout,
        container(track).width(Length::Fill).center_y(Length::Shrink),
    ]
    .spacing(spacing::SM)
    .padding(spacing::XS)
    .align_y(alignment::Vertical::Center);

    container(bar)
        .width(Length::Fill)
        .style(styles::container::controls_bar)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_follows_state() {
        assert_eq!(
            PlaybackControl::for_state(&State::Loading),
            PlaybackControl::Play
        );
        assert_eq!(
            PlaybackControl::for_state(&State::Ready(Ready::Paused)),
            PlaybackControl::Play
        );
        assert_eq!(
            PlaybackControl::for_state(&State::Ready(Ready::Playing)),
            PlaybackControl::Pause
        );
        assert_eq!(
            PlaybackControl::for_state(&State::Ready(Ready::Ended)),
            PlaybackControl::Restart
        );
        assert_eq!(
            PlaybackControl::for_state(&State::Failure),
            PlaybackControl::Play
        );
    }

    #[test]
    fn control_dispatches_matching_event() {
        assert!(matches!(PlaybackControl::Play.event::<()>(), Event::Play));
        assert!(matches!(PlaybackControl::Pause.event::<()>(), Event::Pause));
        assert!(matches!(
            PlaybackControl::Restart.event::<()>(),
            Event::Restart
        ));
    }

    #[test]
    fn labels_are_translated() {
        let i18n = I18n::new(Some("en-US".to_string()), &Default::default());
        assert_eq!(i18n.tr(PlaybackControl::Play.label_key()), "Play");
        assert_eq!(i18n.tr(PlaybackControl::Pause.label_key()), "Pause");
        assert_eq!(i18n.tr(PlaybackControl::Restart.label_key()), "Restart");
    }

    #[test]
    fn format_time_truncates_to_seconds() {
        assert_eq!(format_time(596.5), "9:56");
        assert_eq!(format_time(12.3), "0:12");
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.999), "0:59");
        assert_eq!(format_time(60.0), "1:00");
        assert_eq!(format_time(3725.0), "62:05");
    }

    #[test]
    fn format_time_handles_invalid_input() {
        assert_eq!(format_time(-4.0), "0:00");
        assert_eq!(format_time(f64::NAN), "0:00");
        assert_eq!(format_time(f64::INFINITY), "0:00");
    }
}
