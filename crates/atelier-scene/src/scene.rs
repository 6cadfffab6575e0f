//! Scene setup - floor, room lighting and background

use bevy::prelude::*;

/// Warm near-black used for the background and the fog
pub const BACKDROP: Color = Color::srgb(0.102, 0.094, 0.086);

/// Side length of the square floor plane
const FLOOR_SIZE: f32 = 50.0;

/// Marker component for the floor plane
#[derive(Component)]
pub struct Floor;

/// Marker component for the main key light above the room
#[derive(Component)]
pub struct KeyLight;

/// Plugin for scene setup
pub struct SceneSetupPlugin;

impl Plugin for SceneSetupPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BACKDROP))
            .add_systems(Startup, setup_scene);
    }
}

fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Soft warm fill so unlit walls never go fully black
    commands.insert_resource(AmbientLight {
        color: Color::srgb_u8(0xfa, 0xed, 0xcd),
        brightness: 300.0,
        ..default()
    });

    commands.spawn((
        SpotLight {
            intensity: 4_000_000.0,
            range: 40.0,
            color: Color::srgb_u8(0xff, 0xf0, 0xd0),
            outer_angle: 0.5,
            inner_angle: 0.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(5.0, 10.0, 5.0).looking_at(Vec3::ZERO, Vec3::Y),
        KeyLight,
    ));

    commands.spawn((
        PointLight {
            intensity: 200_000.0,
            color: Color::srgb_u8(0xd4, 0xa3, 0x73),
            shadows_enabled: false,
            ..default()
        },
        Transform::from_xyz(-5.0, 5.0, -5.0),
    ));

    // Sits a hair below y = 0 so the avatar's shadow blob never z-fights it
    commands.spawn((
        Mesh3d(meshes.add(Plane3d::default().mesh().size(FLOOR_SIZE, FLOOR_SIZE))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: Color::srgb_u8(0x3d, 0x34, 0x2b),
            perceptual_roughness: 0.6,
            metallic: 0.1,
            ..default()
        })),
        Transform::from_xyz(0.0, -0.01, 0.0),
        Floor,
    ));
}
