//! Shared resources, system ordering and layout state

use atelier_core::Gallery;
use bevy::prelude::*;

/// The gallery engine, stored in the world so every system sees one state
#[derive(Resource, Deref, DerefMut)]
pub struct GalleryState(pub Gallery);

/// Per-frame ordering: input is buffered first, the engine ticks once, then
/// the scene reads the result.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GallerySystems {
    Input,
    Advance,
    Apply,
}

/// Catalog index of the unselected artwork under the pointer, if any
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HoveredArtwork(pub Option<usize>);

/// UI layout settings for responsive design
#[derive(Debug, Clone, Resource)]
pub struct UiLayout {
    pub is_mobile: bool,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for UiLayout {
    fn default() -> Self {
        Self {
            is_mobile: false,
            screen_width: 1920.0,
            screen_height: 1080.0,
        }
    }
}

impl UiLayout {
    pub fn update_from_window(&mut self, width: f32, height: f32) {
        self.screen_width = width;
        self.screen_height = height;
        // Consider mobile if width < 800 or in portrait orientation
        self.is_mobile = width < 800.0 || (height > width * 1.2);
    }

    /// The detail panel covers the whole width on small screens
    pub fn detail_panel_width(&self) -> f32 {
        if self.is_mobile {
            self.screen_width
        } else {
            450.0
        }
    }

    pub fn ui_scale(&self) -> f32 {
        if self.is_mobile { 1.2 } else { 1.0 }
    }

    pub fn margin(&self) -> f32 {
        if self.is_mobile { 24.0 } else { 48.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_switches_to_mobile() {
        let mut layout = UiLayout::default();
        assert!(!layout.is_mobile);
        assert_eq!(layout.detail_panel_width(), 450.0);

        layout.update_from_window(400.0, 800.0);
        assert!(layout.is_mobile);
        assert_eq!(layout.detail_panel_width(), 400.0);
        assert!(layout.ui_scale() > 1.0);

        // Wide but short stays desktop
        layout.update_from_window(1280.0, 720.0);
        assert!(!layout.is_mobile);
    }
}
