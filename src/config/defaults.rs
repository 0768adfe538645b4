// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.
//!
//! # Categories
//!
//! - **Source**: Video loaded when none is given on the command line
//! - **Time updates**: How often the media element reports its position
//! - **Window**: Initial and minimum window size

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Sample clip played when no source is configured.
pub const DEFAULT_VIDEO_SOURCE: &str =
    "http://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ForBiggerEscapes.mp4";

// ==========================================================================
// Time Update Defaults
// ==========================================================================

/// Default interval between position reports (milliseconds).
/// Browsers fire `timeupdate` every 15 to 250 ms; 250 ms keeps redraws cheap.
pub const DEFAULT_TIME_UPDATE_INTERVAL_MS: u64 = 250;

/// Minimum interval between position reports (milliseconds).
pub const MIN_TIME_UPDATE_INTERVAL_MS: u64 = 15;

/// Maximum interval between position reports (milliseconds).
pub const MAX_TIME_UPDATE_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const DEFAULT_WINDOW_WIDTH: u32 = 800;
pub const DEFAULT_WINDOW_HEIGHT: u32 = 520;
pub const MIN_WINDOW_WIDTH: u32 = 360;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
