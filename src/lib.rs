// SPDX-License-Identifier: MPL-2.0
//! `iced_playback` is a minimal video player built with the Iced GUI framework.
//!
//! Playback is modeled as a small state machine (loading, ready with paused,
//! playing and ended sub-states, and failure) driving an FFmpeg-backed media
//! element. The machine lives in [`machine`] and has no GUI dependencies.

#![doc(html_root_url = "https://docs.rs/iced_playback/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod machine;
pub mod media;
pub mod ui;
