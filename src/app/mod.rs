// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct owns the playback machine, the video surface and the
//! localization bundle, and turns media notifications and user input into
//! machine events.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::machine::PlaybackMachine;
use crate::media::{MediaElement, MediaSource};
use crate::ui::theming::ThemeMode;
use crate::ui::video_canvas::VideoCanvas;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Duration;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    machine: PlaybackMachine<MediaElement>,
    canvas: VideoCanvas,
    source: MediaSource,
    /// Identifies the media subscription for the current source.
    session_id: u64,
    time_update_interval: Duration,
    theme_mode: ThemeMode,
    /// Cause of the load failure, shown next to the generic message.
    load_error: Option<VideoError>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("source", &self.source)
            .field("state", &self.machine.state())
            .field("has_frame", &self.canvas.has_frame())
            .finish()
    }
}

/// Builds the window settings from the `[window]` config section.
pub fn window_settings(config: &Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config.window.width.max(config::MIN_WINDOW_WIDTH) as f32,
            config.window.height.max(config::MIN_WINDOW_HEIGHT) as f32,
        ),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let window = window_settings(&config);

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        (App::new(flags, &config, config_warning), Task::none())
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application in the loading state.
    ///
    /// The source comes from the command line, then the config file, then the
    /// bundled sample clip.
    pub fn new(flags: Flags, config: &Config, config_warning: Option<String>) -> Self {
        let i18n = I18n::new(flags.lang, config);
        if let Some(key) = config_warning {
            log::warn!("{}", i18n.tr(&key));
        }

        let source = MediaSource::new(
            flags
                .source
                .unwrap_or_else(|| config.video.source_or_default()),
        );
        log::info!("Playing {source}");

        Self {
            i18n,
            machine: PlaybackMachine::new(),
            canvas: VideoCanvas::new(),
            source,
            session_id: 0,
            time_update_interval: config.video.time_update_interval(),
            theme_mode: config.general.theme_mode,
            load_error: None,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        format!("{} - {app_name}", self.source.display_name())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_media_subscription(
                &self.source,
                self.session_id,
                self.time_update_interval,
                self.machine.is_done(),
            ),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            machine: &mut self.machine,
            canvas: &mut self.canvas,
            load_error: &mut self.load_error,
        };

        match message {
            Message::Media(media_message) => update::handle_media(&mut ctx, media_message),
            Message::Controls(controls_message) => {
                update::handle_controls(&mut ctx, controls_message)
            }
            Message::KeyPressed(key) => update::handle_key(&mut ctx, key),
        }

        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            machine: &self.machine,
            canvas: &self.canvas,
            load_error: self.load_error.as_ref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{Ready, State};
    use crate::media::{DecoderCommand, MediaMessage, PlaybackPosition, StreamInfo};
    use crate::ui::controls::{self, PlaybackControl};
    use iced::keyboard::key::Named;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn test_app() -> App {
        let flags = Flags {
            lang: Some("en-US".to_string()),
            source: Some("/videos/clip.mp4".to_string()),
            config_dir: None,
        };
        App::new(flags, &Config::default(), None)
    }

    fn element() -> (
        MediaElement,
        mpsc::UnboundedReceiver<DecoderCommand>,
        Arc<PlaybackPosition>,
    ) {
        let (tx, rx) = mpsc::unbounded_channel();
        let position = PlaybackPosition::shared();
        let info = StreamInfo {
            duration_secs: 596.5,
            width: 1280,
            height: 720,
        };
        (MediaElement::new(tx, Arc::clone(&position), info), rx, position)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<DecoderCommand>) -> Vec<DecoderCommand> {
        std::iter::from_fn(|| rx.try_recv().ok()).collect()
    }

    #[test]
    fn new_app_starts_loading() {
        let app = test_app();
        assert_eq!(app.machine.state(), State::Loading);
        assert!(app.load_error.is_none());
        assert_eq!(app.title(), "clip.mp4 - Video Player");
    }

    #[test]
    fn source_falls_back_to_config() {
        let mut config = Config::default();
        config.video.source = Some("/videos/from-config.mp4".to_string());
        let app = App::new(Flags::default(), &config, None);
        assert_eq!(app.source.as_str(), "/videos/from-config.mp4");
    }

    #[test]
    fn can_play_pauses_the_element() {
        let mut app = test_app();
        let (media, mut rx, _position) = element();

        let _ = app.update(Message::Media(MediaMessage::CanPlay(media)));

        assert_eq!(app.machine.state(), State::Ready(Ready::Paused));
        assert_eq!(app.machine.duration(), 596.5);
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Pause]);
    }

    #[test]
    fn error_while_loading_records_cause() {
        let mut app = test_app();

        let _ = app.update(Message::Media(MediaMessage::Error(
            VideoError::NoVideoStream,
        )));

        assert_eq!(app.machine.state(), State::Failure);
        assert_eq!(app.load_error, Some(VideoError::NoVideoStream));
    }

    #[test]
    fn error_after_load_is_ignored() {
        let mut app = test_app();
        let (media, _rx, _position) = element();
        let _ = app.update(Message::Media(MediaMessage::CanPlay(media)));

        let _ = app.update(Message::Media(MediaMessage::Error(
            VideoError::CorruptedFile,
        )));

        assert_eq!(app.machine.state(), State::Ready(Ready::Paused));
        assert!(app.load_error.is_none());
    }

    #[test]
    fn controls_drive_playback() {
        let mut app = test_app();
        let (media, mut rx, position) = element();
        let _ = app.update(Message::Media(MediaMessage::CanPlay(media)));
        drain(&mut rx);

        let _ = app.update(Message::Controls(controls::Message::Pressed(
            PlaybackControl::Play,
        )));
        assert!(app.machine.is_playing());
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Play]);

        position.set(12.3);
        let _ = app.update(Message::Media(MediaMessage::TimeUpdate(12.3)));
        assert_eq!(app.machine.elapsed(), 12.3);
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Play]);

        let _ = app.update(Message::Media(MediaMessage::Ended));
        assert!(app.machine.has_ended());
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Pause]);

        let _ = app.update(Message::Controls(controls::Message::Pressed(
            PlaybackControl::Restart,
        )));
        assert!(app.machine.is_playing());
        assert_eq!(drain(&mut rx), vec![DecoderCommand::Play]);
    }

    #[test]
    fn space_toggles_current_control() {
        let mut app = test_app();

        // Ignored while loading
        let _ = app.update(Message::KeyPressed(Named::Space));
        assert_eq!(app.machine.state(), State::Loading);

        let (media, _rx, _position) = element();
        let _ = app.update(Message::Media(MediaMessage::CanPlay(media)));

        let _ = app.update(Message::KeyPressed(Named::Space));
        assert!(app.machine.is_playing());
        let _ = app.update(Message::KeyPressed(Named::Space));
        assert_eq!(app.machine.state(), State::Ready(Ready::Paused));

        let _ = app.update(Message::KeyPressed(Named::Enter));
        assert_eq!(app.machine.state(), State::Ready(Ready::Paused));
    }

    #[test]
    fn frames_reach_the_canvas() {
        let mut app = test_app();
        let _ = app.update(Message::Media(MediaMessage::FrameReady {
            rgba_data: Arc::new(vec![0; 16]),
            width: 2,
            height: 2,
            pts_secs: 0.0,
        }));
        assert!(app.canvas.has_frame());
        assert_eq!(app.canvas.dimensions(), (2, 2));
    }

    #[test]
    fn window_settings_respect_minimum() {
        let mut config = Config::default();
        config.window.width = 10;
        config.window.height = 10;

        let settings = window_settings(&config);
        assert_eq!(settings.size.width, config::MIN_WINDOW_WIDTH as f32);
        assert_eq!(settings.size.height, config::MIN_WINDOW_HEIGHT as f32);
    }
}
