// SPDX-License-Identifier: MPL-2.0
//! Playback state machine.
//!
//! The machine owns the media handle once loading succeeds and keeps the
//! elapsed time and duration in a [`PlaybackContext`]. Transitions are
//! computed by the pure [`transition`] function; [`PlaybackMachine::send`]
//! stores the result and then runs the returned effects on the handle.
//!
//! ```text
//! loading ──LOADED──▶ ready.paused ──PLAY──▶ ready.playing ──END──▶ ready.ended
//!    │                     ▲                   │      ▲                  │
//!  FAILED                  └──────PAUSE────────┘      └─────RESTART──────┘
//!    ▼
//! failure
//! ```

mod context;
mod event;
mod state;
mod transition;

pub use context::{MediaHandle, PlaybackContext};
pub use event::{Effect, Event};
pub use state::{Ready, State};
pub use transition::{transition, Step};

/// Playback machine bound to a media handle type.
#[derive(Debug)]
pub struct PlaybackMachine<H> {
    state: State,
    context: PlaybackContext<H>,
}

impl<H> Default for PlaybackMachine<H> {
    fn default() -> Self {
        Self {
            state: State::Loading,
            context: PlaybackContext::default(),
        }
    }
}

impl<H: MediaHandle> PlaybackMachine<H> {
    /// Creates a machine in the `loading` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one event to the machine.
    ///
    /// Returns true if the event was handled. Unhandled events are dropped
    /// without touching the state, the context or the handle.
    pub fn send(&mut self, event: Event<H>) -> bool {
        let kind = event.kind();
        let from = self.state;
        let context = std::mem::take(&mut self.context);

        let step = transition(from, context, event);
        self.state = step.state;
        self.context = step.context;

        if !step.handled {
            log::trace!("{kind} ignored in {from}");
            return false;
        }

        if from != self.state {
            log::debug!("{from} --{kind}--> {}", self.state);
        }

        if let Some(media) = self.context.media.as_mut() {
            for effect in &step.effects {
                match effect {
                    Effect::Play => media.play(),
                    Effect::Pause => media.pause(),
                }
            }
        }

        true
    }

    /// Returns the current state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Returns the machine context.
    pub fn context(&self) -> &PlaybackContext<H> {
        &self.context
    }

    /// Current playback position in seconds.
    pub fn elapsed(&self) -> f64 {
        self.context.elapsed
    }

    /// Total media length in seconds.
    pub fn duration(&self) -> f64 {
        self.context.duration
    }

    /// Returns the media handle, if loaded.
    pub fn media(&self) -> Option<&H> {
        self.context.media.as_ref()
    }

    /// Returns true if the machine is in `state`.
    pub fn matches(&self, state: State) -> bool {
        self.state == state
    }

    /// Returns true in `ready.playing`.
    pub fn is_playing(&self) -> bool {
        self.matches(State::Ready(Ready::Playing))
    }

    /// Returns true in `ready.ended`.
    pub fn has_ended(&self) -> bool {
        self.matches(State::Ready(Ready::Ended))
    }

    /// Returns true once the machine reached its final state.
    pub fn is_done(&self) -> bool {
        self.state.is_final()
    }
}
