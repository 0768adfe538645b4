// SPDX-License-Identifier: MPL-2.0
//! Media handle given to the playback machine once a source can play.

use super::decoder::{DecoderCommand, StreamInfo};
use super::position::SharedPosition;
use crate::machine::MediaHandle;
use tokio::sync::mpsc;

/// Handle to a running decoder worker.
///
/// Cloning shares the same worker. Commands sent after the worker has exited
/// are logged and dropped.
#[derive(Debug, Clone)]
pub struct MediaElement {
    commands: mpsc::UnboundedSender<DecoderCommand>,
    position: SharedPosition,
    info: StreamInfo,
}

impl MediaElement {
    pub fn new(
        commands: mpsc::UnboundedSender<DecoderCommand>,
        position: SharedPosition,
        info: StreamInfo,
    ) -> Self {
        Self {
            commands,
            position,
            info,
        }
    }

    /// Frame size in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.info.width, self.info.height)
    }

    fn send(&self, command: DecoderCommand) {
        if self.commands.send(command).is_err() {
            log::warn!("Dropping {command:?}: decoder is not running");
        }
    }
}

impl MediaHandle for MediaElement {
    fn play(&mut self) {
        self.send(DecoderCommand::Play);
    }

    fn pause(&mut self) {
        self.send(DecoderCommand::Pause);
    }

    fn current_time(&self) -> f64 {
        self.position.get()
    }

    fn duration(&self) -> f64 {
        self.info.duration_secs
    }
}
