// SPDX-License-Identifier: MPL-2.0
//! Hierarchical playback states.
//!
//! The chart has three top-level states:
//! - Loading: waiting for the media to become playable (initial)
//! - Ready: media handle exists, split into Paused, Playing and Ended
//! - Failure: the media could not be loaded (final)

use std::fmt;

/// Sub-states of [`State::Ready`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Ready {
    /// Playback stopped. Initial sub-state entered right after loading.
    #[default]
    Paused,

    /// Playback active.
    Playing,

    /// The stream reached its end; the handle is paused.
    Ended,
}

/// Playback state machine states.
///
/// Exactly one variant is active at a time, which makes "the machine never
/// occupies two states" a property of the type rather than of the code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    /// Waiting for the media resource to become playable.
    #[default]
    Loading,

    /// The media loaded successfully.
    Ready(Ready),

    /// Loading failed. No transition leaves this state.
    Failure,
}

impl State {
    /// State entered when loading succeeds.
    pub const READY: State = State::Ready(Ready::Paused);

    /// Returns the dotted state path, e.g. `"ready.playing"`.
    pub fn path(self) -> &'static str {
        match self {
            State::Loading => "loading",
            State::Ready(Ready::Paused) => "ready.paused",
            State::Ready(Ready::Playing) => "ready.playing",
            State::Ready(Ready::Ended) => "ready.ended",
            State::Failure => "failure",
        }
    }

    /// Returns true once the media handle exists.
    pub fn is_ready(self) -> bool {
        matches!(self, State::Ready(_))
    }

    /// Returns true if the state has no outgoing transitions.
    pub fn is_final(self) -> bool {
        matches!(self, State::Failure)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_loading() {
        assert_eq!(State::default(), State::Loading);
    }

    #[test]
    fn ready_enters_paused_sub_state() {
        assert_eq!(State::READY, State::Ready(Ready::Paused));
    }

    #[test]
    fn paths_are_dotted() {
        assert_eq!(State::Loading.path(), "loading");
        assert_eq!(State::Ready(Ready::Playing).to_string(), "ready.playing");
        assert_eq!(State::Ready(Ready::Ended).path(), "ready.ended");
        assert_eq!(State::Failure.path(), "failure");
    }

    #[test]
    fn only_failure_is_final() {
        assert!(State::Failure.is_final());
        assert!(!State::Loading.is_final());
        assert!(!State::Ready(Ready::Ended).is_final());
    }

    #[test]
    fn ready_sub_states_are_ready() {
        for sub in [Ready::Paused, Ready::Playing, Ready::Ended] {
            assert!(State::Ready(sub).is_ready());
        }
        assert!(!State::Loading.is_ready());
        assert!(!State::Failure.is_ready());
    }
}
