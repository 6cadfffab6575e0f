//! Keyboard and pointer input forwarded into the gallery

use bevy::input::keyboard::KeyCode;
use bevy::prelude::*;
use bevy::window::WindowFocused;
use bevy_egui::EguiContexts;
use tracing::debug;

use crate::camera::MainCamera;
use crate::types::{GalleryState, GallerySystems, HoveredArtwork};

/// Touch movement beyond this many pixels is a drag, not a tap
const TAP_SLOP: f32 = 10.0;

/// Plugin for keyboard and pointer handling
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TouchState>()
            .init_resource::<HoveredArtwork>()
            .add_systems(
                Update,
                (
                    release_on_focus_loss,
                    forward_keyboard,
                    handle_deselection,
                    pick_artwork,
                    track_hover,
                )
                    .chain()
                    .in_set(GallerySystems::Input),
            );
    }
}

/// Track touch state for tap detection
#[derive(Resource, Default)]
pub struct TouchState {
    /// Position where touch started
    start_position: Option<Vec2>,
    /// Whether this touch has moved significantly (is a drag, not a tap)
    is_dragging: bool,
}

/// `KeyboardEvent.code` style name for a key, e.g. `KeyW` or `ArrowUp`
pub fn key_code_name(key: KeyCode) -> String {
    format!("{key:?}")
}

fn release_on_focus_loss(
    mut focus_events: MessageReader<WindowFocused>,
    mut gallery: ResMut<GalleryState>,
) {
    for event in focus_events.read() {
        if !event.focused {
            gallery.release_all_keys();
        }
    }
}

fn forward_keyboard(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut gallery: ResMut<GalleryState>,
    mut contexts: EguiContexts,
) {
    // Releases always go through so keys never stick after typing into the UI
    for key in keyboard.get_just_released() {
        gallery.key_up(&key_code_name(*key));
    }

    let egui_wants_keyboard = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_keyboard_input())
        .unwrap_or(false);
    if egui_wants_keyboard {
        return;
    }

    for key in keyboard.get_just_pressed() {
        gallery.key_down(&key_code_name(*key));
    }
}

fn handle_deselection(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut gallery: ResMut<GalleryState>,
) {
    if keyboard.just_pressed(KeyCode::Escape) && gallery.selection().is_selected() {
        gallery.clear_selection();
    }
}

/// Select the artwork under a mouse click or touch tap
fn pick_artwork(
    mut gallery: ResMut<GalleryState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    touch_input: Res<Touches>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut touch_state: ResMut<TouchState>,
) {
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);
    if egui_wants_pointer {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let mut selection_pos: Option<Vec2> = None;

    if let Some(touch) = touch_input.iter().next() {
        if touch_input.just_pressed(touch.id()) {
            touch_state.start_position = Some(touch.position());
            touch_state.is_dragging = false;
        } else if let Some(start) = touch_state.start_position {
            if touch.position().distance(start) > TAP_SLOP {
                touch_state.is_dragging = true;
            }
        }
    }

    for touch in touch_input.iter_just_released() {
        if !touch_state.is_dragging {
            selection_pos = touch_state.start_position.or(Some(touch.position()));
        }
        touch_state.start_position = None;
        touch_state.is_dragging = false;
    }

    if mouse_button.just_pressed(MouseButton::Left) {
        if let Some(cursor_pos) = window.cursor_position() {
            selection_pos = Some(cursor_pos);
        }
    }

    let Some(pos) = selection_pos else {
        return;
    };
    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };
    let Ok(ray) = camera.viewport_to_world(camera_transform, pos) else {
        return;
    };

    if let Some(id) = gallery.select_at_ray(ray.origin, *ray.direction) {
        debug!(artwork = %id, "Picked artwork");
    }
}

/// Track which clickable artwork the mouse is over
fn track_hover(
    gallery: Res<GalleryState>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    windows: Query<&Window>,
    mut contexts: EguiContexts,
    mut hovered: ResMut<HoveredArtwork>,
) {
    let egui_wants_pointer = contexts
        .ctx_mut()
        .map(|ctx| ctx.wants_pointer_input())
        .unwrap_or(false);

    let over = if egui_wants_pointer {
        None
    } else {
        windows
            .single()
            .ok()
            .and_then(|window| window.cursor_position())
            .zip(camera_query.single().ok())
            .and_then(|(pos, (camera, camera_transform))| {
                camera.viewport_to_world(camera_transform, pos).ok()
            })
            .and_then(|ray| gallery.hover_at_ray(ray.origin, *ray.direction))
    };

    hovered.set_if_neq(HoveredArtwork(over));
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::config::InputConfig;

    #[test]
    fn test_key_names_match_default_bindings() {
        let bindings = InputConfig::default();
        let pairs = [
            (KeyCode::ArrowUp, &bindings.forward),
            (KeyCode::KeyW, &bindings.forward),
            (KeyCode::ArrowDown, &bindings.back),
            (KeyCode::KeyS, &bindings.back),
            (KeyCode::ArrowLeft, &bindings.left),
            (KeyCode::KeyA, &bindings.left),
            (KeyCode::ArrowRight, &bindings.right),
            (KeyCode::KeyD, &bindings.right),
        ];
        for (key, bound) in pairs {
            let name = key_code_name(key);
            assert!(bound.contains(&name), "{name} not bound");
        }
    }
}
