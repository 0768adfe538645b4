// SPDX-License-Identifier: MPL-2.0
//! Player screen: video surface, controls, and the loading/failure views.

use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::machine::State;
use crate::ui::controls::{self, ViewContext};
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::video_canvas::VideoCanvas;
use iced::widget::{column, container, text};
use iced::{Element, Length};

/// Everything the player screen shows.
pub struct PlayerView<'a> {
    pub i18n: &'a I18n,
    pub state: State,
    pub canvas: &'a VideoCanvas,
    pub elapsed: f64,
    pub duration: f64,
    pub load_error: Option<&'a VideoError>,
}

pub fn view(player: PlayerView<'_>) -> Element<'_, controls::Message> {
    match player.state {
        State::Failure => failure(player.i18n, player.load_error),
        State::Loading if !player.canvas.has_frame() => loading(player.i18n),
        _ => {
            let bar = controls::view(ViewContext {
                i18n: player.i18n,
                state: player.state,
                elapsed: player.elapsed,
                duration: player.duration,
            });

            column![player.canvas.view(), container(bar).padding(spacing::XS)]
                .width(Length::Fill)
                .height(Length::Fill)
                .into()
        }
    }
}

fn loading<'a, Message: 'a>(i18n: &I18n) -> Element<'a, Message> {
    container(text(i18n.tr("video-loading")).size(typography::TITLE_MD))
        .center(Length::Fill)
        .style(styles::container::stage)
        .into()
}

fn failure<'a, Message: 'a>(i18n: &I18n, error: Option<&VideoError>) -> Element<'a, Message> {
    let mut content = column![text(i18n.tr("video-load-failed"))
        .size(typography::TITLE_MD)
        .color(palette::ERROR_500)]
    .spacing(spacing::XS);

    if let Some(error) = error {
        content = content.push(text(i18n.tr(error.i18n_key())).size(typography::BODY));
    }
    content = content.push(text(i18n.tr("video-load-failed-hint")).size(typography::CAPTION));

    container(
        container(content)
            .padding(spacing::LG)
            .style(styles::container::failure_panel),
    )
    .center(Length::Fill)
    .into()
}
