// SPDX-License-Identifier: MPL-2.0
//! Root view.

use super::Message;
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::machine::{PlaybackMachine, State};
use crate::media::MediaElement;
use crate::ui::player::{self, PlayerView};
use crate::ui::video_canvas::VideoCanvas;
use iced::Element;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub machine: &'a PlaybackMachine<MediaElement>,
    pub canvas: &'a VideoCanvas,
    pub load_error: Option<&'a VideoError>,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let state: State = ctx.machine.state();

    player::view(PlayerView {
        i18n: ctx.i18n,
        state,
        canvas: ctx.canvas,
        elapsed: ctx.machine.elapsed(),
        duration: ctx.machine.duration(),
        load_error: ctx.load_error,
    })
    .map(Message::Controls)
}
