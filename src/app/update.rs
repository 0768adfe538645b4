// SPDX-License-Identifier: MPL-2.0
//! Translates application messages into playback machine events.

use crate::error::VideoError;
use crate::machine::{Event, PlaybackMachine};
use crate::media::{MediaElement, MediaMessage};
use crate::ui::controls::{self, PlaybackControl};
use crate::ui::video_canvas::VideoCanvas;
use iced::keyboard::key::Named;

/// Mutable application state touched by message handlers.
pub struct UpdateContext<'a> {
    pub machine: &'a mut PlaybackMachine<MediaElement>,
    pub canvas: &'a mut VideoCanvas,
    pub load_error: &'a mut Option<VideoError>,
}

/// Maps media element notifications onto machine events.
///
/// Frames bypass the machine and go straight to the video surface.
pub fn handle_media(ctx: &mut UpdateContext<'_>, message: MediaMessage) {
    match message {
        MediaMessage::CanPlay(element) => {
            ctx.machine.send(Event::Loaded(element));
        }
        MediaMessage::Error(error) => {
            if ctx.machine.send(Event::Failed) {
                log::error!("Video failed to load: {error}");
                *ctx.load_error = Some(error);
            } else {
                log::warn!("Media error after load: {error}");
            }
        }
        MediaMessage::Ended => {
            ctx.machine.send(Event::End);
        }
        MediaMessage::TimeUpdate(_) => {
            // The machine reads the position from the handle itself
            ctx.machine.send(Event::Timing);
        }
        MediaMessage::FrameReady {
            rgba_data,
            width,
            height,
            pts_secs,
        } => {
            if !ctx.machine.state().is_final() {
                ctx.canvas.set_frame(rgba_data, width, height, pts_secs);
            }
        }
    }
}

pub fn handle_controls(ctx: &mut UpdateContext<'_>, message: controls::Message) {
    match message {
        controls::Message::Pressed(control) => {
            ctx.machine.send(control.event());
        }
    }
}

/// Space triggers whatever the control button currently offers.
pub fn handle_key(ctx: &mut UpdateContext<'_>, key: Named) {
    if key == Named::Space {
        let control = PlaybackControl::for_state(&ctx.machine.state());
        ctx.machine.send(control.event());
    }
}
