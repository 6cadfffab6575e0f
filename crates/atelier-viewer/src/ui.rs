//! UI overlays using bevy_egui

use atelier_core::{Gallery, SelectionError};
use atelier_scene::ui::{
    render_artwork_panel, render_explore_hint, render_header, render_plaque, PLAQUE_TEXT_HEIGHT,
};
use atelier_scene::{GalleryState, HoveredArtwork, MainCamera, PanelAction, UiLayout};
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts, EguiPrimaryContextPass};
use tracing::warn;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Main UI system runs in EguiPrimaryContextPass for proper input handling (bevy_egui 0.38+)
        app.add_systems(EguiPrimaryContextPass, ui_system);
    }
}

/// Apply a detail panel button to the gallery
pub fn apply_panel_action(gallery: &mut Gallery, action: PanelAction) -> Result<(), SelectionError> {
    match action {
        PanelAction::Previous => gallery.select_previous(),
        PanelAction::Next => gallery.select_next(),
        PanelAction::Close => {
            gallery.clear_selection();
            Ok(())
        }
    }
}

/// Pin a title plaque under each artwork facing the camera
fn render_plaques(
    ctx: &egui::Context,
    gallery: &Gallery,
    camera: &Camera,
    camera_transform: &GlobalTransform,
    hidden_from_x: f32,
) {
    let eye = camera_transform.translation();

    for (index, artwork) in gallery.catalog().iter().enumerate() {
        if !artwork.faces(eye) {
            continue;
        }
        let anchor = artwork.plaque_position();
        let (Ok(at), Ok(above)) = (
            camera.world_to_viewport(camera_transform, anchor),
            camera.world_to_viewport(camera_transform, anchor + Vec3::Y * PLAQUE_TEXT_HEIGHT),
        ) else {
            continue;
        };
        if at.x >= hidden_from_x {
            continue;
        }
        render_plaque(ctx, index, egui::pos2(at.x, at.y), at.distance(above), artwork);
    }
}

fn ui_system(
    mut contexts: EguiContexts,
    mut gallery: ResMut<GalleryState>,
    layout: Res<UiLayout>,
    hovered: Res<HoveredArtwork>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
) {
    // Get the egui context - early return if not available
    let Ok(ctx) = contexts.ctx_mut() else { return };

    if hovered.0.is_some() {
        ctx.set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    // Plaques stay out from under the detail panel
    let hidden_from_x = if gallery.panel_visible() {
        layout.screen_width - layout.detail_panel_width()
    } else {
        f32::INFINITY
    };
    if let Ok((camera, camera_transform)) = camera_query.single() {
        render_plaques(ctx, &gallery, camera, camera_transform, hidden_from_x);
    }

    let selection = gallery.selection();
    render_header(ctx, &layout, selection.is_selected());

    let action = match selection.index() {
        Some(index) if gallery.panel_visible() => {
            let label = gallery.catalog().position_label(index);
            gallery
                .selected_artwork()
                .and_then(|artwork| render_artwork_panel(ctx, &layout, artwork, &label))
        }
        Some(_) => None,
        None => {
            render_explore_hint(ctx, &layout);
            None
        }
    };

    if let Some(action) = action {
        if let Err(err) = apply_panel_action(&mut gallery, action) {
            warn!(?action, "Panel action ignored: {err}");
        }
    }
}
