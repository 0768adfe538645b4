// SPDX-License-Identifier: MPL-2.0
//! Events accepted by the playback machine and effects it produces.

/// Events sent to the playback machine.
///
/// Media events (`Loaded`, `Failed`, `End`, `Timing`) come from the media
/// element; user intents (`Play`, `Pause`, `Restart`) come from the controls.
#[derive(Debug, Clone, PartialEq)]
pub enum Event<H> {
    /// The media became playable. Carries the handle the machine takes over.
    Loaded(H),

    /// The media could not be loaded.
    Failed,

    /// Start playback.
    Play,

    /// Stop playback.
    Pause,

    /// The playback position changed.
    Timing,

    /// The stream reached its end.
    End,

    /// Play again after the end was reached.
    Restart,
}

impl<H> Event<H> {
    /// Upper-case event name, as shown in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Loaded(_) => "LOADED",
            Event::Failed => "FAILED",
            Event::Play => "PLAY",
            Event::Pause => "PAUSE",
            Event::Timing => "TIMING",
            Event::End => "END",
            Event::Restart => "RESTART",
        }
    }
}

/// Commands issued to the media handle after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Start playback on the handle.
    Play,

    /// Stop playback on the handle.
    Pause,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_match_event_names() {
        assert_eq!(Event::Loaded(()).kind(), "LOADED");
        assert_eq!(Event::<()>::Failed.kind(), "FAILED");
        assert_eq!(Event::<()>::Timing.kind(), "TIMING");
        assert_eq!(Event::<()>::Restart.kind(), "RESTART");
    }
}
