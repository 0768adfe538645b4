// SPDX-License-Identifier: MPL-2.0
//! Location of the video to play.

use crate::error::{Error, Result, VideoError};
use std::fmt;
use std::path::Path;

/// A local file path or a URL understood by FFmpeg (`http://`, `rtsp://`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MediaSource(String);

impl MediaSource {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for URLs, which are handed to FFmpeg's network layer.
    pub fn is_remote(&self) -> bool {
        self.scheme().is_some_and(|scheme| scheme != "file")
    }

    fn scheme(&self) -> Option<&str> {
        let (scheme, _) = self.0.split_once("://")?;
        let valid = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        valid.then_some(scheme)
    }

    /// Short name for the window title: the last path or URL segment.
    pub fn display_name(&self) -> &str {
        let trimmed = self.0.split(['?', '#']).next().unwrap_or(&self.0);
        trimmed
            .rsplit(['/', '\\'])
            .find(|segment| !segment.is_empty())
            .unwrap_or(&self.0)
    }

    /// Checks that a local source exists before FFmpeg is involved.
    ///
    /// Remote sources are only checked when FFmpeg opens them.
    pub fn validate(&self) -> Result<()> {
        if self.0.trim().is_empty() {
            return Err(Error::Video(VideoError::SourceNotFound(
                "empty source".to_string(),
            )));
        }
        if !self.is_remote() && !Path::new(self.local_path()).exists() {
            return Err(Error::Video(VideoError::SourceNotFound(format!(
                "Video file not found: {}",
                self.0
            ))));
        }
        Ok(())
    }

    /// Path handed to FFmpeg.
    pub(crate) fn local_path(&self) -> &str {
        self.0.strip_prefix("file://").unwrap_or(&self.0)
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for MediaSource {
    fn from(value: String) -> Self {
        Self(value)
    }
}
