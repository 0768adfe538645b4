// SPDX-License-Identifier: MPL-2.0
//! Iced subscription for media events.
//!
//! Connects the decoder worker to the UI event loop. The worker's events are
//! translated into the notifications a `<video>` element would fire:
//! `canplay`, `error`, `timeupdate` and `ended`, plus decoded frames.

use super::decoder::{AsyncDecoder, DecoderEvent};
use super::element::MediaElement;
use super::position::PlaybackPosition;
use super::source::MediaSource;
use crate::error::VideoError;
use iced::futures::SinkExt;
use iced::stream;
use std::sync::Arc;
use std::time::Duration;

/// Subscription ID for one load of a source.
///
/// A new ID makes iced drop the old worker and start a fresh one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MediaSessionId(u64);

/// Messages emitted by the media subscription.
#[derive(Debug, Clone)]
pub enum MediaMessage {
    /// The source is open and can be played.
    CanPlay(MediaElement),

    /// The source could not be loaded.
    Error(VideoError),

    /// Playback reached the end.
    Ended,

    /// Position report while playing, in seconds.
    TimeUpdate(f64),

    /// A new frame is ready for display.
    FrameReady {
        /// RGBA pixel data.
        rgba_data: Arc<Vec<u8>>,
        width: u32,
        height: u32,
        /// Presentation timestamp in seconds.
        pts_secs: f64,
    },
}

impl MediaMessage {
    fn from_decoder(event: DecoderEvent, element: &mut Option<MediaElement>) -> Option<Self> {
        match event {
            DecoderEvent::Ready(_) => element.take().map(MediaMessage::CanPlay),
            DecoderEvent::FrameReady(frame) => Some(MediaMessage::FrameReady {
                rgba_data: frame.rgba_data,
                width: frame.width,
                height: frame.height,
                pts_secs: frame.pts_secs,
            }),
            DecoderEvent::TimeUpdate(secs) => Some(MediaMessage::TimeUpdate(secs)),
            DecoderEvent::EndOfStream => Some(MediaMessage::Ended),
            DecoderEvent::Error(error) => Some(MediaMessage::Error(error)),
        }
    }
}

/// Creates a media subscription for `source`.
///
/// `session_id` must change whenever the source should be reloaded.
/// `time_update_interval` throttles [`MediaMessage::TimeUpdate`] while playing.
pub fn media_events(
    source: MediaSource,
    session_id: u64,
    time_update_interval: Duration,
) -> iced::Subscription<MediaMessage> {
    iced::Subscription::run_with_id(
        MediaSessionId(session_id),
        stream::channel(100, move |mut output| async move {
            let position = PlaybackPosition::shared();

            match AsyncDecoder::new(&source, Arc::clone(&position), time_update_interval) {
                Ok(mut decoder) => {
                    log::info!("Loading {source}");
                    let mut pending_element = None;

                    while let Some(event) = decoder.recv_event().await {
                        if let DecoderEvent::Ready(info) = &event {
                            pending_element = Some(MediaElement::new(
                                decoder.command_sender(),
                                Arc::clone(&position),
                                *info,
                            ));
                        }

                        let Some(message) = MediaMessage::from_decoder(event, &mut pending_element)
                        else {
                            continue;
                        };
                        if output.send(message).await.is_err() {
                            break;
                        }
                    }
                    log::debug!("Media worker for {source} exited");
                }
                Err(e) => {
                    log::warn!("Cannot load {source}: {e}");
                    let _ = output.send(MediaMessage::Error(VideoError::from(e))).await;
                }
            }

            // Keep subscription alive but idle
            std::future::pending::<()>().await;
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::decoder::{DecodedFrame, StreamInfo};

    #[test]
    fn media_message_can_be_cloned() {
        let msg = MediaMessage::TimeUpdate(1.5);
        let cloned = msg.clone();
        assert!(matches!(cloned, MediaMessage::TimeUpdate(t) if t == 1.5));
    }

    #[test]
    fn decoder_events_map_to_media_messages() {
        let mut element = None;

        let frame = DecodedFrame {
            rgba_data: Arc::new(vec![0; 16]),
            width: 2,
            height: 2,
            pts_secs: 0.5,
        };
        assert!(matches!(
            MediaMessage::from_decoder(DecoderEvent::FrameReady(frame), &mut element),
            Some(MediaMessage::FrameReady { width: 2, height: 2, .. })
        ));
        assert!(matches!(
            MediaMessage::from_decoder(DecoderEvent::EndOfStream, &mut element),
            Some(MediaMessage::Ended)
        ));
        assert!(matches!(
            MediaMessage::from_decoder(
                DecoderEvent::Error(VideoError::NoVideoStream),
                &mut element
            ),
            Some(MediaMessage::Error(VideoError::NoVideoStream))
        ));
    }

    #[test]
    fn ready_hands_out_the_element_once() {
        let (tx, _rx) = tokio::sync::mpsc::unbounded_channel();
        let info = StreamInfo {
            duration_secs: 15.0,
            width: 2,
            height: 2,
        };
        let mut element = Some(MediaElement::new(tx, PlaybackPosition::shared(), info));

        assert!(matches!(
            MediaMessage::from_decoder(DecoderEvent::Ready(info), &mut element),
            Some(MediaMessage::CanPlay(_))
        ));
        assert!(MediaMessage::from_decoder(DecoderEvent::Ready(info), &mut element).is_none());
    }

    #[test]
    fn session_ids_compare_by_value() {
        assert_eq!(MediaSessionId(1), MediaSessionId(1));
        assert_ne!(MediaSessionId(1), MediaSessionId(2));
    }
}
