// SPDX-License-Identifier: MPL-2.0
//! Widget for rendering video frames.
//!
//! Holds the latest decoded frame and renders it with Iced's Image widget,
//! scaled to fit the available space.

use crate::ui::styles;
use iced::widget::{container, image, Space};
use iced::{ContentFit, Element, Length};
use std::sync::Arc;

/// Video frame surface.
///
/// A new `image::Handle` is created for every frame.
#[derive(Debug, Default)]
pub struct VideoCanvas {
    frame_handle: Option<image::Handle>,
    width: u32,
    height: u32,
    pts_secs: f64,
}

impl VideoCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the displayed frame.
    ///
    /// Takes ownership of the pixel buffer when this is the last reference,
    /// otherwise copies it.
    pub fn set_frame(&mut self, rgba_data: Arc<Vec<u8>>, width: u32, height: u32, pts_secs: f64) {
        let data = Arc::try_unwrap(rgba_data).unwrap_or_else(|arc| (*arc).clone());
        self.frame_handle = Some(image::Handle::from_rgba(width, height, data));
        self.width = width;
        self.height = height;
        self.pts_secs = pts_secs;
    }

    /// Drops the current frame.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn has_frame(&self) -> bool {
        self.frame_handle.is_some()
    }

    /// Frame size in pixels, `(0, 0)` when empty.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Timestamp of the displayed frame in seconds.
    pub fn pts_secs(&self) -> f64 {
        self.pts_secs
    }

    pub fn view<'a, Message: 'a>(&self) -> Element<'a, Message> {
        let content: Element<'a, Message> = match &self.frame_handle {
            Some(handle) => image::Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Space::new().width(Length::Fill).height(Length::Fill).into(),
        };

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .style(styles::container::stage)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_starts_empty() {
        let canvas = VideoCanvas::new();
        assert!(!canvas.has_frame());
        assert_eq!(canvas.dimensions(), (0, 0));
    }

    #[test]
    fn set_frame_updates_dimensions() {
        let mut canvas = VideoCanvas::new();
        canvas.set_frame(Arc::new(vec![0u8; 1920 * 1080 * 4]), 1920, 1080, 0.04);

        assert!(canvas.has_frame());
        assert_eq!(canvas.dimensions(), (1920, 1080));
        assert_eq!(canvas.pts_secs(), 0.04);
    }

    #[test]
    fn set_frame_accepts_shared_buffer() {
        let mut canvas = VideoCanvas::new();
        let data = Arc::new(vec![255u8; 4 * 4 * 4]);
        let kept = Arc::clone(&data);

        canvas.set_frame(data, 4, 4, 0.0);
        assert!(canvas.has_frame());
        assert_eq!(kept.len(), 64);
    }

    #[test]
    fn clear_releases_frame() {
        let mut canvas = VideoCanvas::new();
        canvas.set_frame(Arc::new(vec![0u8; 16]), 2, 2, 1.0);
        canvas.clear();

        assert!(!canvas.has_frame());
        assert_eq!(canvas.dimensions(), (0, 0));
        assert_eq!(canvas.pts_secs(), 0.0);
    }
}
