//! Artwork frames and the avatar rig

use atelier_core::{Artwork, AvatarTransform, Pose, FRAME_BORDER};
use bevy::math::EulerRot;
use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};
use tracing::{debug, info};

use crate::types::{GalleryState, GallerySystems};

/// Frame depth behind the image plane
const FRAME_DEPTH: f32 = 0.1;

/// Spotlight output for an artwork in lumens
const SPOT_IDLE: f32 = 60_000.0;
const SPOT_SELECTED: f32 = 360_000.0;

/// Root entity of one hung artwork
#[derive(Component)]
pub struct ArtworkFrame {
    /// Index into the catalog
    pub index: usize,
}

/// Spotlight aimed at one artwork
#[derive(Component)]
pub struct ArtworkSpotlight {
    pub index: usize,
}

/// Root of the avatar rig, carries position and yaw
#[derive(Component)]
pub struct AvatarRoot;

/// Posable parts of the avatar rig
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RigPart {
    Torso,
    Head,
    RightArm,
    LeftArm,
}

impl RigPart {
    /// Local offset from the avatar root. Arms are shoulder pivots.
    pub fn rest_translation(self) -> Vec3 {
        match self {
            RigPart::Torso => Vec3::new(0.0, 0.75, 0.0),
            RigPart::Head => Vec3::new(0.0, 1.45, 0.0),
            RigPart::RightArm => Vec3::new(0.3, 1.3, 0.0),
            RigPart::LeftArm => Vec3::new(-0.3, 1.3, 0.0),
        }
    }

    /// Local transform for `pose`
    pub fn transform(self, pose: &Pose) -> Transform {
        let mut transform = Transform::from_translation(self.rest_translation());
        match self {
            RigPart::Torso => {
                transform.translation.y = pose.torso_height;
                transform.rotation = Quat::from_rotation_x(pose.torso_lean);
            }
            RigPart::Head => {
                transform.rotation = Quat::from_rotation_x(pose.head_pitch);
            }
            RigPart::RightArm => {
                transform.rotation = Quat::from_euler(
                    EulerRot::XYZ,
                    pose.right_arm_pitch,
                    0.0,
                    pose.right_arm_roll,
                );
            }
            RigPart::LeftArm => {
                transform.rotation = Quat::from_rotation_x(pose.left_arm_pitch);
            }
        }
        transform
    }
}

/// World transform of the avatar root
pub fn avatar_root_transform(avatar: &AvatarTransform) -> Transform {
    Transform::from_translation(avatar.position).with_rotation(Quat::from_rotation_y(avatar.yaw))
}

/// World transform of an artwork's image center
pub fn artwork_transform(artwork: &Artwork) -> Transform {
    Transform::from_translation(artwork.position()).with_rotation(Quat::from_rotation_y(artwork.yaw()))
}

pub fn spotlight_intensity(selected: bool) -> f32 {
    if selected { SPOT_SELECTED } else { SPOT_IDLE }
}

/// Plugin for artwork and avatar models
pub struct ModelsPlugin;

impl Plugin for ModelsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_artworks, spawn_avatar))
            .add_systems(
                Update,
                (apply_avatar, apply_spotlights).in_set(GallerySystems::Apply),
            );
    }
}

fn spawn_artworks(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    gallery: Res<GalleryState>,
) {
    let frame_material = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x2a, 0x28, 0x26),
        perceptual_roughness: 0.8,
        ..default()
    });

    for (index, artwork) in gallery.catalog().iter().enumerate() {
        let (width, height) = (artwork.width(), artwork.height());
        let image: Handle<Image> = asset_server.load(artwork.image_url.clone());

        commands
            .spawn((artwork_transform(artwork), Visibility::default(), ArtworkFrame { index }))
            .with_children(|parent| {
                parent.spawn((
                    Mesh3d(meshes.add(Cuboid::new(
                        width + 2.0 * FRAME_BORDER,
                        height + 2.0 * FRAME_BORDER,
                        FRAME_DEPTH,
                    ))),
                    MeshMaterial3d(frame_material.clone()),
                    Transform::from_xyz(0.0, 0.0, -FRAME_DEPTH / 2.0),
                ));

                parent.spawn((
                    Mesh3d(meshes.add(Rectangle::new(width, height))),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color_texture: Some(image),
                        perceptual_roughness: 0.9,
                        ..default()
                    })),
                    Transform::from_xyz(0.0, 0.0, 0.01),
                ));

                parent.spawn((
                    SpotLight {
                        intensity: spotlight_intensity(false),
                        range: 10.0,
                        outer_angle: 0.6,
                        inner_angle: 0.3,
                        shadows_enabled: false,
                        ..default()
                    },
                    Transform::from_xyz(0.0, 2.0, 2.0).looking_at(Vec3::ZERO, Vec3::Y),
                    ArtworkSpotlight { index },
                ));
            });

        debug!(artwork = %artwork.id, "Spawned artwork frame");
    }

    info!(count = gallery.catalog().len(), "Hung artworks");
}

fn spawn_avatar(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    gallery: Res<GalleryState>,
) {
    let snapshot = gallery.snapshot();

    let smock = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xe0, 0xcd, 0xa7),
        perceptual_roughness: 0.9,
        ..default()
    });
    let skin = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0xd4, 0xa3, 0x73),
        perceptual_roughness: 0.6,
        ..default()
    });
    let dark = materials.add(StandardMaterial {
        base_color: Color::srgb_u8(0x2a, 0x28, 0x26),
        perceptual_roughness: 0.8,
        ..default()
    });
    let shadow = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.0, 0.0, 0.3),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let beret = materials.add(Color::srgb_u8(0x4a, 0x40, 0x36));
    let wood = materials.add(Color::srgb_u8(0x8b, 0x45, 0x13));
    let palette = materials.add(Color::srgb_u8(0xd2, 0xb4, 0x8c));

    let arm = meshes.add(Capsule3d::new(0.08, 0.6));
    let leg = meshes.add(Cylinder::new(0.085, 0.7));

    commands
        .spawn((
            avatar_root_transform(&snapshot.avatar),
            Visibility::default(),
            AvatarRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Mesh3d(meshes.add(Circle::new(0.4))),
                MeshMaterial3d(shadow),
                Transform::from_xyz(0.0, 0.02, 0.0).with_rotation(Quat::from_rotation_x(-FRAC_PI_2)),
            ));

            root.spawn((
                Mesh3d(meshes.add(Capsule3d::new(0.25, 0.6))),
                MeshMaterial3d(smock.clone()),
                RigPart::Torso.transform(&snapshot.pose),
                RigPart::Torso,
            ));

            root.spawn((
                Mesh3d(meshes.add(Sphere::new(0.15))),
                MeshMaterial3d(skin),
                RigPart::Head.transform(&snapshot.pose),
                RigPart::Head,
            ))
            .with_children(|head| {
                head.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.16, 0.05))),
                    MeshMaterial3d(beret),
                    Transform::from_xyz(0.05, 0.12, 0.0).with_rotation(Quat::from_rotation_z(-0.2)),
                ));
            });

            root.spawn((
                RigPart::RightArm.transform(&snapshot.pose),
                Visibility::default(),
                RigPart::RightArm,
            ))
            .with_children(|shoulder| {
                shoulder.spawn((
                    Mesh3d(arm.clone()),
                    MeshMaterial3d(smock.clone()),
                    Transform::from_xyz(0.0, -0.35, 0.0),
                ));
                // Brush
                shoulder.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.01, 0.4))),
                    MeshMaterial3d(wood),
                    Transform::from_xyz(0.0, -0.75, 0.1).with_rotation(Quat::from_rotation_x(FRAC_PI_2)),
                ));
            });

            root.spawn((
                RigPart::LeftArm.transform(&snapshot.pose),
                Visibility::default(),
                RigPart::LeftArm,
            ))
            .with_children(|shoulder| {
                shoulder.spawn((
                    Mesh3d(arm.clone()),
                    MeshMaterial3d(smock.clone()),
                    Transform::from_xyz(0.0, -0.35, 0.0),
                ));
                shoulder.spawn((
                    Mesh3d(meshes.add(Cylinder::new(0.2, 0.01))),
                    MeshMaterial3d(palette),
                    Transform::from_xyz(0.0, -0.6, 0.2)
                        .with_rotation(Quat::from_euler(EulerRot::XYZ, FRAC_PI_2, 0.0, FRAC_PI_4)),
                ));
            });

            for x in [0.15, -0.15] {
                root.spawn((
                    Mesh3d(leg.clone()),
                    MeshMaterial3d(dark.clone()),
                    Transform::from_xyz(x, 0.2, 0.0),
                ));
            }
        });
}

fn apply_avatar(
    gallery: Res<GalleryState>,
    mut root_query: Query<&mut Transform, (With<AvatarRoot>, Without<RigPart>)>,
    mut part_query: Query<(&RigPart, &mut Transform), Without<AvatarRoot>>,
) {
    let snapshot = gallery.snapshot();

    if let Ok(mut root) = root_query.single_mut() {
        *root = avatar_root_transform(&snapshot.avatar);
    }

    for (part, mut transform) in part_query.iter_mut() {
        *transform = part.transform(&snapshot.pose);
    }
}

fn apply_spotlights(
    gallery: Res<GalleryState>,
    mut spot_query: Query<(&ArtworkSpotlight, &mut SpotLight)>,
) {
    let selected = gallery.selection().index();

    for (spot, mut light) in spot_query.iter_mut() {
        let intensity = spotlight_intensity(selected == Some(spot.index));
        if light.intensity != intensity {
            light.intensity = intensity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::Catalog;

    #[test]
    fn test_pointing_arm_reaches_forward() {
        let mut pose = Pose::neutral(0.75);
        pose.right_arm_pitch = -1.5;

        let shoulder = RigPart::RightArm.transform(&pose);
        // The arm hangs along -Y at rest; pointing swings it toward +Z, the facing side
        let hand = shoulder.rotation * Vec3::NEG_Y;
        assert!(hand.z > 0.99);
        assert_eq!(shoulder.translation, RigPart::RightArm.rest_translation());
    }

    #[test]
    fn test_torso_follows_pose_height() {
        let mut pose = Pose::neutral(0.75);
        pose.torso_height = 0.8;
        pose.torso_lean = 0.2;

        let torso = RigPart::Torso.transform(&pose);
        assert_eq!(torso.translation, Vec3::new(0.0, 0.8, 0.0));
        // Positive lean tips the top of the torso forward
        assert!((torso.rotation * Vec3::Y).z > 0.0);
    }

    #[test]
    fn test_artwork_faces_its_normal() {
        let catalog = Catalog::bundled().unwrap();
        for artwork in catalog.iter() {
            let transform = artwork_transform(artwork);
            let facing = transform.rotation * Vec3::Z;
            assert!((facing - artwork.normal()).length() < 1e-5, "{}", artwork.id);
        }
    }

    #[test]
    fn test_avatar_yaw_zero_faces_positive_z() {
        let avatar = AvatarTransform {
            position: Vec3::new(1.0, 0.0, 2.0),
            yaw: 0.0,
        };
        let root = avatar_root_transform(&avatar);
        assert!((root.rotation * Vec3::Z - Vec3::Z).length() < 1e-6);
        assert_eq!(root.translation, avatar.position);
    }

    #[test]
    fn test_selected_spotlight_is_brighter() {
        assert!(spotlight_intensity(true) > spotlight_intensity(false));
    }
}
