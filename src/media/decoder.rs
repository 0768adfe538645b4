// SPDX-License-Identifier: MPL-2.0
//! Async video decoder using FFmpeg.
//!
//! The decoder is the Rust counterpart of a `<video>` element: it opens the
//! source, shows a poster frame, reports when it can play, and then follows
//! play/pause commands while publishing its position.

use super::ffmpeg::init_ffmpeg;
use super::position::SharedPosition;
use super::source::MediaSource;
use crate::error::{Error, Result, VideoError};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// FFmpeg container durations are expressed in microseconds.
const MICROS_PER_SECOND: f64 = 1_000_000.0;

/// Idle sleep while paused, keeps the command loop responsive.
const IDLE_POLL: Duration = Duration::from_millis(10);

/// Represents a decoded video frame ready for display.
#[derive(Debug, Clone)]
pub struct DecodedFrame {
    /// RGBA pixel data (width × height × 4 bytes).
    pub rgba_data: Arc<Vec<u8>>,

    pub width: u32,
    pub height: u32,

    /// Presentation timestamp in seconds.
    pub pts_secs: f64,
}

/// Stream properties known once the source is playable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamInfo {
    /// Total length in seconds, 0 when the container does not say.
    pub duration_secs: f64,
    pub width: u32,
    pub height: u32,
}

/// Commands sent to the decoder task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecoderCommand {
    /// Start or resume presenting frames. Rewinds first if the end was reached;
    /// ignored while already playing.
    Play,

    /// Stop presenting frames, keeping the position.
    Pause,

    /// Shut the worker down.
    Stop,
}

/// Events sent from the decoder to the UI.
#[derive(Debug, Clone)]
pub enum DecoderEvent {
    /// The source is open and the poster frame was decoded.
    Ready(StreamInfo),

    /// A new frame is ready for display.
    FrameReady(DecodedFrame),

    /// The playback position changed (throttled).
    TimeUpdate(f64),

    /// Playback reached the end of the stream.
    EndOfStream,

    /// The source could not be opened or decoded.
    Error(VideoError),
}

/// Async video decoder running on a blocking Tokio thread.
pub struct AsyncDecoder {
    command_tx: mpsc::UnboundedSender<DecoderCommand>,

    /// Bounded so a slow UI applies backpressure to the decoder.
    event_rx: mpsc::Receiver<DecoderEvent>,
}

impl AsyncDecoder {
    /// Spawns the decoder worker for `source`.
    ///
    /// Local sources are validated up front; anything FFmpeg rejects later
    /// is reported as a [`DecoderEvent::Error`].
    pub fn new(
        source: &MediaSource,
        position: SharedPosition,
        time_update_interval: Duration,
    ) -> Result<Self> {
        source.validate()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (event_tx, event_rx) = mpsc::channel(2);
        let source = source.clone();

        // FFmpeg types are not Send, everything lives on this thread
        tokio::task::spawn_blocking(move || {
            let error_tx = event_tx.clone();
            if let Err(e) =
                Self::decoder_loop_blocking(&source, command_rx, event_tx, position, time_update_interval)
            {
                log::error!("Decoder for {source} failed: {e}");
                let _ = error_tx.blocking_send(DecoderEvent::Error(VideoError::from(e)));
            }
        });

        Ok(Self {
            command_tx,
            event_rx,
        })
    }

    pub fn send_command(&self, command: DecoderCommand) -> Result<()> {
        self.command_tx
            .send(command)
            .map_err(|_| Error::Io("Decoder task is not running".into()))
    }

    /// Returns a sender for handing out to the media handle.
    pub fn command_sender(&self) -> mpsc::UnboundedSender<DecoderCommand> {
        self.command_tx.clone()
    }

    /// Receives the next event, or `None` once the worker has exited.
    pub async fn recv_event(&mut self) -> Option<DecoderEvent> {
        self.event_rx.recv().await
    }

    fn decoder_loop_blocking(
        source: &MediaSource,
        mut command_rx: mpsc::UnboundedReceiver<DecoderCommand>,
        event_tx: mpsc::Sender<DecoderEvent>,
        position: SharedPosition,
        time_update_interval: Duration,
    ) -> Result<()> {
        let mut reader = FrameReader::open(source)?;

        let poster = reader.next_frame().ok_or_else(|| {
            Error::Video(VideoError::DecodingFailed(
                "no decodable frame in stream".to_string(),
            ))
        })?;
        position.set(poster.pts_secs);
        let info = reader.info();
        log::info!(
            "Opened {source}: {}x{}, {:.1}s",
            info.width,
            info.height,
            info.duration_secs
        );

        if event_tx.blocking_send(DecoderEvent::FrameReady(poster)).is_err()
            || event_tx.blocking_send(DecoderEvent::Ready(info)).is_err()
        {
            return Ok(());
        }

        let mut transport = Transport::default();
        let mut pacing: Option<Pacing> = None;
        let mut last_report: Option<Instant> = None;

        loop {
            let command = match command_rx.try_recv() {
                Ok(command) => Some(command),
                Err(mpsc::error::TryRecvError::Empty) => None,
                Err(mpsc::error::TryRecvError::Disconnected) => Some(DecoderCommand::Stop),
            };

            match command.map(|command| transport.apply(command)) {
                None | Some(CommandOutcome::Unchanged) => {}
                Some(CommandOutcome::Resume { rewind }) => {
                    if rewind {
                        if let Err(e) = reader.rewind() {
                            log::error!("Rewind failed: {e}");
                            transport.halt();
                            continue;
                        }
                        position.set(0.0);
                        // Report the jump right away, the next frame may be throttled
                        if event_tx.blocking_send(DecoderEvent::TimeUpdate(0.0)).is_err() {
                            break;
                        }
                    }
                    pacing = None;
                }
                Some(CommandOutcome::Halt) => pacing = None,
                Some(CommandOutcome::Stop) => {
                    log::debug!("Decoder for {source} stopping");
                    break;
                }
            }

            if !transport.playing {
                std::thread::sleep(IDLE_POLL);
                continue;
            }

            let Some(frame) = reader.next_frame() else {
                let _ = event_tx.blocking_send(DecoderEvent::TimeUpdate(position.get()));
                if event_tx.blocking_send(DecoderEvent::EndOfStream).is_err() {
                    break;
                }
                transport.reached_end();
                pacing = None;
                continue;
            };

            pacing
                .get_or_insert_with(|| Pacing::start(frame.pts_secs))
                .wait_for(frame.pts_secs);

            let pts_secs = frame.pts_secs;
            position.set(pts_secs);
            if event_tx.blocking_send(DecoderEvent::FrameReady(frame)).is_err() {
                break;
            }

            if last_report.is_none_or(|at| at.elapsed() >= time_update_interval) {
                last_report = Some(Instant::now());
                if event_tx.blocking_send(DecoderEvent::TimeUpdate(pts_secs)).is_err() {
                    break;
                }
            }
        }

        Ok(())
    }
}

impl Drop for AsyncDecoder {
    fn drop(&mut self) {
        // Media handles keep the command channel open, stop the worker explicitly
        let _ = self.command_tx.send(DecoderCommand::Stop);
    }
}

/// Maps presentation timestamps onto wall-clock time.
struct Pacing {
    started: Instant,
    first_pts: f64,
}

impl Pacing {
    fn start(first_pts: f64) -> Self {
        Self {
            started: Instant::now(),
            first_pts,
        }
    }

    /// Sleeps until the frame at `pts_secs` is due.
    fn wait_for(&self, pts_secs: f64) {
        let offset = (pts_secs - self.first_pts).max(0.0);
        let due = self.started + Duration::from_secs_f64(offset);
        let now = Instant::now();
        if due > now {
            std::thread::sleep(due - now);
        }
    }
}

/// Play/pause bookkeeping of the worker loop.
///
/// `at_end` survives a Pause: an ended `<video>` that is paused and played
/// again starts over, whether or not the UI noticed the end.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Transport {
    playing: bool,
    at_end: bool,
}

/// What the worker loop does after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandOutcome {
    /// Nothing changed, frame pacing carries on.
    Unchanged,
    /// Start presenting frames, seeking to the start first if `rewind`.
    Resume { rewind: bool },
    /// Stop presenting frames.
    Halt,
    /// Leave the loop.
    Stop,
}

impl Transport {
    fn apply(&mut self, command: DecoderCommand) -> CommandOutcome {
        match command {
            DecoderCommand::Play if self.playing => CommandOutcome::Unchanged,
            DecoderCommand::Play => {
                let rewind = std::mem::take(&mut self.at_end);
                self.playing = true;
                CommandOutcome::Resume { rewind }
            }
            DecoderCommand::Pause if !self.playing => CommandOutcome::Unchanged,
            DecoderCommand::Pause => {
                self.playing = false;
                CommandOutcome::Halt
            }
            DecoderCommand::Stop => CommandOutcome::Stop,
        }
    }

    fn halt(&mut self) {
        self.playing = false;
    }

    fn reached_end(&mut self) {
        self.playing = false;
        self.at_end = true;
    }
}

/// Demuxer, decoder and RGBA scaler for the best video stream.
struct FrameReader {
    input: ffmpeg_next::format::context::Input,
    decoder: ffmpeg_next::decoder::Video,
    scaler: ffmpeg_next::software::scaling::Context,
    stream_index: usize,
    time_base: f64,
    info: StreamInfo,
    drained: bool,
}

impl FrameReader {
    fn open(source: &MediaSource) -> Result<Self> {
        init_ffmpeg()?;

        let input = ffmpeg_next::format::input(source.local_path())
            .map_err(|e| Error::Io(format!("Failed to open video: {e}")))?;

        let stream = input
            .streams()
            .best(ffmpeg_next::media::Type::Video)
            .ok_or_else(|| Error::Video(VideoError::NoVideoStream))?;
        let stream_index = stream.index();
        let stream_time_base = stream.time_base();
        let time_base =
            f64::from(stream_time_base.numerator()) / f64::from(stream_time_base.denominator());
        let stream_duration = stream.duration();

        let context = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
            .map_err(|e| Error::Io(format!("Failed to create codec context: {e}")))?;
        let decoder = context
            .decoder()
            .video()
            .map_err(|e| Error::Io(format!("Failed to create video decoder: {e}")))?;

        let width = decoder.width();
        let height = decoder.height();
        if width == 0 || height == 0 {
            return Err(Error::Video(VideoError::DecodingFailed(format!(
                "invalid video dimensions: {width}x{height}"
            ))));
        }

        let scaler = ffmpeg_next::software::scaling::Context::get(
            decoder.format(),
            width,
            height,
            ffmpeg_next::format::Pixel::RGBA,
            width,
            height,
            ffmpeg_next::software::scaling::Flags::BILINEAR,
        )
        .map_err(|e| Error::Io(format!("Failed to create scaler: {e}")))?;

        let duration_secs = if input.duration() > 0 {
            input.duration() as f64 / MICROS_PER_SECOND
        } else if stream_duration > 0 {
            stream_duration as f64 * time_base
        } else {
            0.0
        };

        Ok(Self {
            input,
            decoder,
            scaler,
            stream_index,
            time_base,
            info: StreamInfo {
                duration_secs,
                width,
                height,
            },
            drained: false,
        })
    }

    fn info(&self) -> StreamInfo {
        self.info
    }

    /// Decodes the next frame, or returns `None` at end of stream.
    fn next_frame(&mut self) -> Option<DecodedFrame> {
        loop {
            let mut decoded = ffmpeg_next::frame::Video::empty();
            if self.decoder.receive_frame(&mut decoded).is_ok() {
                match self.convert(&decoded) {
                    Some(frame) => return Some(frame),
                    None => continue,
                }
            }
            if self.drained {
                return None;
            }

            let mut fed = false;
            for (stream, packet) in self.input.packets() {
                if stream.index() != self.stream_index {
                    continue;
                }
                if let Err(e) = self.decoder.send_packet(&packet) {
                    log::warn!("Packet send failed: {e}");
                    continue;
                }
                fed = true;
                break;
            }

            if !fed {
                // Flush frames still buffered in the decoder
                if let Err(e) = self.decoder.send_eof() {
                    log::debug!("Sending EOF to decoder failed: {e}");
                }
                self.drained = true;
            }
        }
    }

    fn convert(&mut self, decoded: &ffmpeg_next::frame::Video) -> Option<DecodedFrame> {
        let mut rgba_frame = ffmpeg_next::frame::Video::empty();
        if let Err(e) = self.scaler.run(decoded, &mut rgba_frame) {
            log::warn!("Scaling failed: {e}");
            return None;
        }

        let pts_secs = decoded
            .timestamp()
            .map(|pts| pts as f64 * self.time_base)
            .unwrap_or(0.0);

        Some(DecodedFrame {
            rgba_data: Arc::new(extract_rgba_data(&rgba_frame)),
            width: rgba_frame.width(),
            height: rgba_frame.height(),
            pts_secs,
        })
    }

    /// Seeks back to the first frame.
    fn rewind(&mut self) -> Result<()> {
        self.input
            .seek(0, ..0)
            .map_err(|e| Error::Io(format!("Seek failed: {e}")))?;
        self.decoder.flush();
        self.drained = false;
        Ok(())
    }
}

/// Copies RGBA rows out of a frame, dropping stride padding.
fn extract_rgba_data(frame: &ffmpeg_next::frame::Video) -> Vec<u8> {
    let width = frame.width() as usize;
    let height = frame.height() as usize;
    let data = frame.data(0);
    let stride = frame.stride(0);

    let mut rgba_bytes = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        let row_start = y * stride;
        rgba_bytes.extend_from_slice(&data[row_start..row_start + width * 4]);
    }
    rgba_bytes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::position::PlaybackPosition;

    fn interval() -> Duration {
        Duration::from_millis(250)
    }

    #[tokio::test]
    async fn decoder_fails_for_nonexistent_file() {
        let source = MediaSource::from("/nonexistent/video.mp4");
        let result = AsyncDecoder::new(&source, PlaybackPosition::shared(), interval());
        assert!(matches!(
            result,
            Err(Error::Video(VideoError::SourceNotFound(_)))
        ));
    }

    #[tokio::test]
    async fn decoder_reports_error_for_garbage_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let video_path = temp_dir.path().join("test.mp4");
        std::fs::write(&video_path, b"fake video data").unwrap();

        let source = MediaSource::new(video_path.to_string_lossy().to_string());
        let mut decoder =
            AsyncDecoder::new(&source, PlaybackPosition::shared(), interval()).unwrap();

        let event = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("timeout waiting for decoder event");
        assert!(
            matches!(event, Some(DecoderEvent::Error(_))),
            "expected an error event, got {event:?}"
        );
    }

    #[tokio::test]
    async fn decoder_sends_poster_then_ready() {
        let video_path = "tests/data/sample.mp4";
        if !std::path::Path::new(video_path).exists() {
            eprintln!("Test video not found, skipping test");
            return;
        }

        let position = PlaybackPosition::shared();
        let mut decoder =
            AsyncDecoder::new(&MediaSource::from(video_path), position, interval()).unwrap();

        let first = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("timeout waiting for poster");
        assert!(matches!(first, Some(DecoderEvent::FrameReady(_))));

        let second = tokio::time::timeout(Duration::from_secs(5), decoder.recv_event())
            .await
            .expect("timeout waiting for ready");
        match second {
            Some(DecoderEvent::Ready(info)) => {
                assert!(info.width > 0 && info.height > 0);
                assert!(info.duration_secs > 0.0);
            }
            other => panic!("expected Ready, got {other:?}"),
        }

        decoder.send_command(DecoderCommand::Stop).unwrap();
    }

    #[test]
    fn play_while_playing_keeps_pacing() {
        let mut transport = Transport::default();
        assert_eq!(
            transport.apply(DecoderCommand::Play),
            CommandOutcome::Resume { rewind: false }
        );
        assert_eq!(transport.apply(DecoderCommand::Play), CommandOutcome::Unchanged);
        assert!(transport.playing);
    }

    #[test]
    fn pause_and_resume() {
        let mut transport = Transport::default();
        assert_eq!(transport.apply(DecoderCommand::Pause), CommandOutcome::Unchanged);
        transport.apply(DecoderCommand::Play);
        assert_eq!(transport.apply(DecoderCommand::Pause), CommandOutcome::Halt);
        assert!(!transport.playing);
        assert_eq!(
            transport.apply(DecoderCommand::Play),
            CommandOutcome::Resume { rewind: false }
        );
    }

    #[test]
    fn play_after_end_rewinds_once() {
        let mut transport = Transport::default();
        transport.apply(DecoderCommand::Play);
        transport.reached_end();
        assert!(!transport.playing);

        // Pause sent after the end, either on entering ended or by the user
        assert_eq!(transport.apply(DecoderCommand::Pause), CommandOutcome::Unchanged);
        assert_eq!(
            transport.apply(DecoderCommand::Play),
            CommandOutcome::Resume { rewind: true }
        );
        transport.apply(DecoderCommand::Pause);
        assert_eq!(
            transport.apply(DecoderCommand::Play),
            CommandOutcome::Resume { rewind: false }
        );
    }

    #[test]
    fn stop_always_leaves() {
        let mut transport = Transport::default();
        assert_eq!(transport.apply(DecoderCommand::Stop), CommandOutcome::Stop);
        transport.apply(DecoderCommand::Play);
        assert_eq!(transport.apply(DecoderCommand::Stop), CommandOutcome::Stop);
    }

    #[test]
    fn pacing_does_not_wait_for_past_frames() {
        let pacing = Pacing::start(10.0);
        let before = Instant::now();
        pacing.wait_for(9.0);
        pacing.wait_for(10.0);
        assert!(before.elapsed() < Duration::from_millis(50));
    }
}
