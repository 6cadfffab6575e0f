//! Camera rig that follows the avatar or frames the inspected artwork

use glam::Vec3;

use crate::catalog::Artwork;
use crate::config::CameraConfig;
use crate::math::smoothing_fraction;

/// Which framing the rig is steering toward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraMode {
    Roam,
    Inspect,
}

/// Camera position and the point it looks at
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTransform {
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    config: CameraConfig,
    transform: CameraTransform,
    mode: CameraMode,
}

impl CameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let transform = CameraTransform {
            position: Vec3::from_array(config.start_position),
            look_at: Vec3::from_array(config.start_look_at),
        };
        Self {
            config,
            transform,
            mode: CameraMode::Roam,
        }
    }

    pub fn transform(&self) -> CameraTransform {
        self.transform
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Where the rig wants to be for the given avatar position and selection
    pub fn desired(&self, avatar: Vec3, target: Option<&Artwork>) -> CameraTransform {
        match target {
            None => CameraTransform {
                position: avatar + Vec3::from_array(self.config.follow_offset),
                look_at: avatar + Vec3::Y * self.config.look_height,
            },
            Some(artwork) => {
                // Off to the artwork's right so the avatar, leaning in from the left, stays visible
                let art = artwork.position();
                CameraTransform {
                    position: art
                        + artwork.normal() * self.config.inspect_distance
                        + artwork.right() * self.config.inspect_side_offset,
                    look_at: art,
                }
            }
        }
    }

    /// Ease toward the desired framing. Never snaps.
    pub fn update(&mut self, avatar: Vec3, target: Option<&Artwork>, dt: f32) -> CameraTransform {
        self.mode = if target.is_some() {
            CameraMode::Inspect
        } else {
            CameraMode::Roam
        };

        let desired = self.desired(avatar, target);
        let position_f = smoothing_fraction(self.config.position_rate, dt);
        let look_f = smoothing_fraction(self.config.look_rate, dt);

        let t = &mut self.transform;
        t.position += (desired.position - t.position) * position_f;
        t.look_at += (desired.look_at - t.look_at) * look_f;
        self.transform
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_roam_targets() {
        let rig = CameraRig::new(CameraConfig::default());
        let avatar = Vec3::new(1.0, 0.0, -2.0);
        let desired = rig.desired(avatar, None);
        assert_eq!(desired.position, Vec3::new(1.0, 3.0, 4.0));
        assert_eq!(desired.look_at, Vec3::new(1.0, 1.5, -2.0));
    }

    #[test]
    fn test_inspect_targets() {
        let catalog = Catalog::bundled().unwrap();
        let art = catalog.find("art-2").unwrap();
        let rig = CameraRig::new(CameraConfig::default());
        let desired = rig.desired(Vec3::ZERO, Some(art));
        assert!((desired.position - Vec3::new(1.0, 2.0, -2.5)).length() < 1e-5);
        assert_eq!(desired.look_at, art.position());
    }

    #[test]
    fn test_converges_monotonically() {
        let catalog = Catalog::bundled().unwrap();
        let art = catalog.find("art-4").unwrap();
        let mut rig = CameraRig::new(CameraConfig::default());
        let desired = rig.desired(Vec3::ZERO, Some(art));

        let mut last_pos = (rig.transform().position - desired.position).length();
        let mut last_look = (rig.transform().look_at - desired.look_at).length();
        for i in 0..600 {
            // Vary frame time to cover uneven frame pacing
            let dt = if i % 7 == 0 { 0.1 } else { DT };
            let t = rig.update(Vec3::ZERO, Some(art), dt);
            let d_pos = (t.position - desired.position).length();
            let d_look = (t.look_at - desired.look_at).length();
            assert!(d_pos <= last_pos);
            assert!(d_look <= last_look);
            last_pos = d_pos;
            last_look = d_look;
        }
        assert!(last_pos < 1e-3);
        assert!(last_look < 1e-3);
        assert_eq!(rig.mode(), CameraMode::Inspect);
    }

    #[test]
    fn test_mode_switch_has_no_jump() {
        let catalog = Catalog::bundled().unwrap();
        let art = catalog.find("art-1").unwrap();
        let mut rig = CameraRig::new(CameraConfig::default());
        let avatar = Vec3::new(0.0, 0.0, 2.0);

        for _ in 0..20 {
            rig.update(avatar, Some(art), DT);
        }
        let before = rig.transform();
        let after = rig.update(avatar, None, DT);
        assert_eq!(rig.mode(), CameraMode::Roam);

        // A single frame moves at most the frame's share of the remaining gap
        let desired = rig.desired(avatar, None);
        let max_step = (desired.position - before.position).length()
            * smoothing_fraction(CameraConfig::default().position_rate, DT);
        assert!((after.position - before.position).length() <= max_step + 1e-5);
        assert!((after.position - before.position).length() > 0.0);
    }

    #[test]
    fn test_zero_dt_holds_still() {
        let mut rig = CameraRig::new(CameraConfig::default());
        let before = rig.transform();
        let after = rig.update(Vec3::new(5.0, 0.0, 5.0), None, 0.0);
        assert_eq!(before, after);
    }
}
