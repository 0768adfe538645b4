// SPDX-License-Identifier: MPL-2.0
//! Pure transition function of the playback chart.
//!
//! Entry actions are expressed as effects returned with the next state
//! instead of callbacks: entering `ready.paused` or `ready.ended` yields
//! [`Effect::Pause`], entering `ready.playing` yields [`Effect::Play`].
//! TIMING re-enters `ready.playing`, so it yields [`Effect::Play`] too.

use super::context::{sanitize_duration, sanitize_position, MediaHandle, PlaybackContext};
use super::event::{Effect, Event};
use super::state::{Ready, State};

/// Result of feeding one event to [`transition`].
#[derive(Debug, Clone, PartialEq)]
pub struct Step<H> {
    /// State after the event.
    pub state: State,

    /// Context after the event.
    pub context: PlaybackContext<H>,

    /// Commands to issue to the media handle, in order.
    pub effects: Vec<Effect>,

    /// False when the event is not listed for the current state.
    pub handled: bool,
}

impl<H> Step<H> {
    fn ignored(state: State, context: PlaybackContext<H>) -> Self {
        Self {
            state,
            context,
            effects: Vec::new(),
            handled: false,
        }
    }

    fn enter(target: Ready, context: PlaybackContext<H>) -> Self {
        Self {
            state: State::Ready(target),
            context,
            effects: vec![entry_effect(target)],
            handled: true,
        }
    }
}

/// Entry action of a ready sub-state.
fn entry_effect(state: Ready) -> Effect {
    match state {
        Ready::Playing => Effect::Play,
        Ready::Paused | Ready::Ended => Effect::Pause,
    }
}

/// Computes the next state and context for `event`.
///
/// Events not listed for the current state leave everything unchanged and
/// produce no effect. A handle carried by an ignored `Loaded` is dropped.
pub fn transition<H: MediaHandle>(
    state: State,
    mut context: PlaybackContext<H>,
    event: Event<H>,
) -> Step<H> {
    match (state, event) {
        (State::Loading, Event::Loaded(media)) => {
            context.duration = sanitize_duration(media.duration());
            context.media = Some(media);
            Step::enter(Ready::Paused, context)
        }
        (State::Loading, Event::Failed) => Step {
            state: State::Failure,
            context,
            effects: Vec::new(),
            handled: true,
        },
        (State::Ready(Ready::Paused), Event::Play) => Step::enter(Ready::Playing, context),
        (State::Ready(Ready::Playing), Event::Pause) => Step::enter(Ready::Paused, context),
        (State::Ready(Ready::Playing), Event::Timing) => {
            if let Some(media) = context.media.as_ref() {
                context.elapsed = sanitize_position(media.current_time(), context.elapsed);
            }
            // External self-transition: playing is re-entered
            Step::enter(Ready::Playing, context)
        }
        (State::Ready(Ready::Playing), Event::End) => Step::enter(Ready::Ended, context),
        (State::Ready(Ready::Ended), Event::Restart) => Step::enter(Ready::Playing, context),
        (state, _) => Step::ignored(state, context),
    }
}
