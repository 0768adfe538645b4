// SPDX-License-Identifier: MPL-2.0
//! Mutable data owned by the playback machine.

/// Playable resource driven by the machine.
///
/// Implemented by [`MediaElement`](crate::media::MediaElement) for the FFmpeg
/// worker and by recording fakes in tests.
pub trait MediaHandle {
    /// Starts playback.
    fn play(&mut self);

    /// Stops playback, keeping the current position.
    fn pause(&mut self);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total media length in seconds.
    fn duration(&self) -> f64;
}

/// Context carried alongside the machine state.
///
/// `elapsed` only means something once `media` is set. `duration` is written
/// once, on the loading to ready transition.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackContext<H> {
    pub(crate) media: Option<H>,
    pub(crate) elapsed: f64,
    pub(crate) duration: f64,
}

impl<H> Default for PlaybackContext<H> {
    fn default() -> Self {
        Self {
            media: None,
            elapsed: 0.0,
            duration: 0.0,
        }
    }
}

impl<H> PlaybackContext<H> {
    /// Creates an empty context (no media, zero times).
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the media handle, if loaded.
    pub fn media(&self) -> Option<&H> {
        self.media.as_ref()
    }

    /// Current playback position in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Total media length in seconds (0 until loaded or when unknown).
    pub fn duration(&self) -> f64 {
        self.duration
    }
}

/// Normalizes a duration reported by a handle.
///
/// Live or unseekable sources report NaN or infinity; those become 0.
pub(crate) fn sanitize_duration(secs: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        0.0
    }
}

/// Normalizes a position read from a handle, keeping `previous` when the
/// reading is unusable.
pub(crate) fn sanitize_position(secs: f64, previous: f64) -> f64 {
    if secs.is_finite() {
        secs.max(0.0)
    } else {
        previous
    }
}
