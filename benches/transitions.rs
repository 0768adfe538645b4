// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the playback transition function.
//!
//! Measures:
//! - A single TIMING step while playing (the hot path during playback)
//! - A full load/play/end/restart session through `PlaybackMachine`

use criterion::{criterion_group, criterion_main, Criterion};
use iced_playback::machine::{transition, Event, MediaHandle, PlaybackContext, PlaybackMachine, State};
use std::hint::black_box;

#[derive(Debug, Clone, Copy)]
struct StaticMedia {
    position: f64,
}

impl MediaHandle for StaticMedia {
    fn play(&mut self) {}
    fn pause(&mut self) {}

    fn current_time(&self) -> f64 {
        self.position
    }

    fn duration(&self) -> f64 {
        596.5
    }
}

fn playing_context() -> (State, PlaybackContext<StaticMedia>) {
    let loaded = transition(
        State::Loading,
        PlaybackContext::new(),
        Event::Loaded(StaticMedia { position: 12.3 }),
    );
    let playing = transition(loaded.state, loaded.context, Event::Play);
    (playing.state, playing.context)
}

fn bench_timing_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitions");

    group.bench_function("timing_while_playing", |b| {
        b.iter_batched(
            playing_context,
            |(state, context)| black_box(transition(state, context, Event::Timing)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("transitions");

    group.bench_function("full_session", |b| {
        b.iter(|| {
            let mut machine = PlaybackMachine::new();
            machine.send(Event::Loaded(StaticMedia { position: 0.0 }));
            machine.send(Event::Play);
            for _ in 0..100 {
                machine.send(Event::Timing);
            }
            machine.send(Event::End);
            machine.send(Event::Restart);
            black_box(machine.state())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_timing_step, bench_session);
criterion_main!(benches);
