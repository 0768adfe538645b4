// SPDX-License-Identifier: MPL-2.0
//! Playback position shared between the decoder worker and the UI.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Position in seconds, stored as f64 bits for lock-free access.
///
/// Written by the decoder thread for every presented frame and read
/// synchronously by [`MediaElement::current_time`](super::MediaElement).
#[derive(Debug, Default)]
pub struct PlaybackPosition(AtomicU64);

/// Shared handle to a [`PlaybackPosition`].
pub type SharedPosition = Arc<PlaybackPosition>;

impl PlaybackPosition {
    pub fn new() -> Self {
        Self(AtomicU64::new(0.0f64.to_bits()))
    }

    pub fn shared() -> SharedPosition {
        Arc::new(Self::new())
    }

    pub fn get(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    pub fn set(&self, secs: f64) {
        self.0.store(secs.to_bits(), Ordering::Relaxed);
    }
}
