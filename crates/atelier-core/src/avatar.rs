//! Avatar locomotion: keyboard steering in roam mode, auto-walk in inspect mode

use glam::{Vec2, Vec3};
use tracing::debug;

use crate::catalog::Artwork;
use crate::config::AvatarConfig;
use crate::math::{heading, smooth_angle, smoothing_fraction};

/// Live avatar placement on the floor
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarTransform {
    pub position: Vec3,
    /// Rotation about +Y in radians, 0 facing +Z
    pub yaw: f32,
}

/// Per-frame locomotion classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gait {
    #[default]
    Idle,
    Walking,
}

/// Where and which way to stand when inspecting an artwork
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandingSpot {
    pub position: Vec3,
    pub facing: f32,
}

/// Spot in front of and slightly beside `artwork`, on the floor, facing it
pub fn standing_spot(artwork: &Artwork, config: &AvatarConfig) -> StandingSpot {
    let art = artwork.position();
    let mut position =
        art + artwork.normal() * config.stand_distance + artwork.right() * config.stand_side_offset;
    position.y = 0.0;

    let facing = heading(art.x - position.x, art.z - position.z);
    StandingSpot { position, facing }
}

/// Owns and evolves the avatar transform
#[derive(Debug, Clone)]
pub struct AvatarController {
    config: AvatarConfig,
    transform: AvatarTransform,
    gait: Gait,
}

impl AvatarController {
    pub fn new(config: AvatarConfig) -> Self {
        let transform = AvatarTransform {
            position: Vec3::from_array(config.spawn),
            yaw: 0.0,
        };
        Self {
            config,
            transform,
            gait: Gait::Idle,
        }
    }

    pub fn transform(&self) -> AvatarTransform {
        self.transform
    }

    pub fn gait(&self) -> Gait {
        self.gait
    }

    pub fn config(&self) -> &AvatarConfig {
        &self.config
    }

    /// Advance one frame.
    ///
    /// With a target the avatar walks to its standing spot and ignores
    /// `intent`; without one it follows `intent` as (x, z).
    pub fn update(&mut self, target: Option<&Artwork>, intent: Vec2, dt: f32) -> Gait {
        let gait = match target {
            Some(artwork) => self.walk_to(artwork, dt),
            None => self.steer(intent, dt),
        };

        if let (Some(artwork), Gait::Walking, Gait::Idle) = (target, self.gait, gait) {
            debug!(artwork = %artwork.id, "Avatar arrived at standing spot");
        }

        self.gait = gait;
        gait
    }

    /// Walking iff the step was accepted
    fn steer(&mut self, intent: Vec2, dt: f32) -> Gait {
        if intent == Vec2::ZERO {
            return Gait::Idle;
        }

        let step = intent.normalize() * self.config.walk_speed * dt;
        let proposed = self.transform.position + Vec3::new(step.x, 0.0, step.y);

        let before = self.transform.position;

        // Out-of-bounds steps are dropped whole, not clipped to the edge
        if self.config.floor.contains(proposed.x, proposed.z) {
            self.transform.position = proposed;
        }

        let fraction = smoothing_fraction(self.config.manual_turn_rate, dt);
        self.transform.yaw = smooth_angle(self.transform.yaw, heading(intent.x, intent.y), fraction);

        if self.transform.position != before {
            Gait::Walking
        } else {
            Gait::Idle
        }
    }

    /// Walking iff the spot lies beyond the arrival threshold, even on a
    /// zero-length frame
    fn walk_to(&mut self, artwork: &Artwork, dt: f32) -> Gait {
        let spot = standing_spot(artwork, &self.config);
        let to_spot = spot.position - self.transform.position;
        let distance = to_spot.length();

        if distance > self.config.arrival_threshold {
            let direction = to_spot / distance;
            let step = (self.config.walk_speed * dt).min(distance);
            self.transform.position += direction * step;

            let fraction = smoothing_fraction(self.config.walk_turn_rate, dt);
            self.transform.yaw = smooth_angle(
                self.transform.yaw,
                heading(direction.x, direction.z),
                fraction,
            );
            Gait::Walking
        } else {
            let fraction = smoothing_fraction(self.config.arrive_turn_rate, dt);
            self.transform.yaw = smooth_angle(self.transform.yaw, spot.facing, fraction);
            Gait::Idle
        }
    }
}
