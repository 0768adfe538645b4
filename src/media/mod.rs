// SPDX-License-Identifier: MPL-2.0
//! Media playback backed by FFmpeg.
//!
//! The decoder runs on a blocking Tokio thread and talks to the UI through
//! the [`media_events`] subscription. Once a source can play, the UI receives
//! a [`MediaElement`], the handle the playback machine drives.

pub mod decoder;
pub mod element;
pub mod ffmpeg;
pub mod position;
pub mod source;
pub mod subscription;

pub use decoder::{AsyncDecoder, DecodedFrame, DecoderCommand, DecoderEvent, StreamInfo};
pub use element::MediaElement;
pub use position::{PlaybackPosition, SharedPosition};
pub use source::MediaSource;
pub use subscription::{media_events, MediaMessage, MediaSessionId};
