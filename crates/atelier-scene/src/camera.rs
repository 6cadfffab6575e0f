//! Main camera, driven each frame by the gallery's camera rig

use bevy::pbr::{DistanceFog, FogFalloff};
use bevy::prelude::*;

use crate::scene::BACKDROP;
use crate::types::{GalleryState, GallerySystems};

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Plugin for the gallery camera
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(Update, apply_camera.in_set(GallerySystems::Apply));
    }
}

fn spawn_camera(mut commands: Commands, gallery: Res<GalleryState>) {
    let start = gallery.snapshot().camera;

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: 45.0_f32.to_radians(),
            near: 0.1,
            far: 200.0,
            ..default()
        }),
        Transform::from_translation(start.position).looking_at(start.look_at, Vec3::Y),
        DistanceFog {
            color: BACKDROP,
            falloff: FogFalloff::Linear {
                start: 5.0,
                end: 25.0,
            },
            ..default()
        },
        MainCamera,
    ));
}

fn apply_camera(
    gallery: Res<GalleryState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };

    let camera = gallery.snapshot().camera;
    transform.translation = camera.position;
    transform.look_at(camera.look_at, Vec3::Y);
}
