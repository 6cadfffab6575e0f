//! Atelier Scene - Bevy presentation of the gallery
//!
//! Renders the room, the hung artworks and the avatar from the state held in
//! [`GalleryState`], and feeds keyboard and pointer input back into it. The
//! app must insert a [`GalleryState`] before adding [`AtelierScenePlugin`].

pub mod camera;
pub mod input;
pub mod models;
pub mod scene;
pub mod types;
pub mod ui;

use bevy::prelude::*;

/// Plugin that sets up the gallery scene and its frame loop
pub struct AtelierScenePlugin;

impl Plugin for AtelierScenePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GallerySystems::Input,
                GallerySystems::Advance,
                GallerySystems::Apply,
            )
                .chain(),
        )
        .init_resource::<UiLayout>()
        .add_plugins(camera::CameraPlugin)
        .add_plugins(scene::SceneSetupPlugin)
        .add_plugins(models::ModelsPlugin)
        .add_plugins(input::InputPlugin)
        .add_systems(Update, advance_gallery.in_set(GallerySystems::Advance))
        .add_systems(Update, update_ui_layout);
    }
}

/// The one gallery tick per rendered frame
fn advance_gallery(time: Res<Time>, mut gallery: ResMut<GalleryState>) {
    gallery.tick(time.delta_secs());
}

/// Update UI layout based on window size
fn update_ui_layout(windows: Query<&Window>, mut ui_layout: ResMut<UiLayout>) {
    if let Ok(window) = windows.single() {
        let width = window.width();
        let height = window.height();

        // Only update if dimensions changed significantly
        if (ui_layout.screen_width - width).abs() > 1.0
            || (ui_layout.screen_height - height).abs() > 1.0
        {
            ui_layout.update_from_window(width, height);
        }
    }
}

// Re-export commonly used types
pub use camera::MainCamera;
pub use types::*;
pub use ui::PanelAction;
