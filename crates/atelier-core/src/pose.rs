//! Procedural body animation: walk cycle, breathing and the inspect gesture

use crate::avatar::Gait;
use crate::config::PoseConfig;
use crate::math::{ease, smoothing_fraction};

/// Joint values applied to the avatar rig. Angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Torso center height above the avatar origin
    pub torso_height: f32,
    /// Torso rotation about X (positive leans forward)
    pub torso_lean: f32,
    pub head_pitch: f32,
    pub right_arm_pitch: f32,
    pub right_arm_roll: f32,
    pub left_arm_pitch: f32,
}

impl Pose {
    pub fn neutral(torso_height: f32) -> Self {
        Self {
            torso_height,
            torso_lean: 0.0,
            head_pitch: 0.0,
            right_arm_pitch: 0.0,
            right_arm_roll: 0.0,
            left_arm_pitch: 0.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PoseAnimator {
    config: PoseConfig,
    pose: Pose,
}

impl PoseAnimator {
    pub fn new(config: PoseConfig) -> Self {
        let pose = Pose::neutral(config.torso_height);
        Self { config, pose }
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Advance one frame. `clock` is total elapsed seconds.
    pub fn update(&mut self, gait: Gait, inspecting: bool, clock: f32, dt: f32) -> Pose {
        let c = &self.config;
        let p = &mut self.pose;

        match gait {
            Gait::Walking => {
                let phase = clock * c.walk_frequency;
                p.torso_height = c.torso_height + phase.sin() * c.walk_bob;
                p.right_arm_pitch = phase.sin() * c.arm_swing;
                p.left_arm_pitch = -phase.sin() * c.arm_swing;
                p.head_pitch = (phase * 2.0).sin() * c.head_bob;
            }
            Gait::Idle => {
                p.torso_height = c.torso_height + (clock * c.breath_frequency).sin() * c.breath_depth;

                let f = smoothing_fraction(c.ease_rate, dt);
                let (lean, pitch, roll) = if inspecting {
                    (c.inspect_lean, c.point_pitch, c.point_roll)
                } else {
                    (0.0, 0.0, 0.0)
                };
                p.torso_lean = ease(p.torso_lean, lean, f);
                p.right_arm_pitch = ease(p.right_arm_pitch, pitch, f);
                p.right_arm_roll = ease(p.right_arm_roll, roll, f);

                p.left_arm_pitch = ease(p.left_arm_pitch, 0.0, f);
                p.head_pitch = ease(p.head_pitch, 0.0, f);
            }
        }

        self.pose
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_walk_cycle_arms_in_antiphase() {
        let config = PoseConfig::default();
        let mut animator = PoseAnimator::new(config.clone());

        for i in 0..120 {
            let clock = i as f32 * DT;
            let pose = animator.update(Gait::Walking, false, clock, DT);
            assert!((pose.right_arm_pitch + pose.left_arm_pitch).abs() < 1e-6);
            assert!(pose.right_arm_pitch.abs() <= config.arm_swing + 1e-6);
            assert!((pose.torso_height - config.torso_height).abs() <= config.walk_bob + 1e-6);
            assert!(pose.head_pitch.abs() <= config.head_bob + 1e-6);
        }
    }

    #[test]
    fn test_inspect_gesture_eases_in() {
        let config = PoseConfig::default();
        let mut animator = PoseAnimator::new(config.clone());

        let first = animator.update(Gait::Idle, true, 0.0, DT);
        // One frame moves part of the way, not all of it
        assert!(first.torso_lean > 0.0 && first.torso_lean < config.inspect_lean);
        assert!(first.right_arm_pitch < 0.0 && first.right_arm_pitch > config.point_pitch);

        let mut pose = first;
        for i in 1..600 {
            pose = animator.update(Gait::Idle, true, i as f32 * DT, DT);
        }
        assert!((pose.torso_lean - config.inspect_lean).abs() < 1e-3);
        assert!((pose.right_arm_pitch - config.point_pitch).abs() < 1e-3);
        assert!((pose.right_arm_roll - config.point_roll).abs() < 1e-3);
        assert!(pose.left_arm_pitch.abs() < 1e-3);
    }

    #[test]
    fn test_idle_without_selection_returns_to_neutral() {
        let config = PoseConfig::default();
        let mut animator = PoseAnimator::new(config.clone());

        for i in 0..600 {
            animator.update(Gait::Idle, true, i as f32 * DT, DT);
        }
        for i in 0..30 {
            animator.update(Gait::Walking, true, i as f32 * DT, DT);
        }
        let mut pose = animator.pose();
        for i in 0..900 {
            pose = animator.update(Gait::Idle, false, i as f32 * DT, DT);
        }
        assert!(pose.torso_lean.abs() < 1e-3);
        assert!(pose.right_arm_pitch.abs() < 1e-3);
        assert!(pose.right_arm_roll.abs() < 1e-3);
        assert!(pose.left_arm_pitch.abs() < 1e-3);
        assert!(pose.head_pitch.abs() < 1e-3);
    }

    #[test]
    fn test_breathing_is_shallow() {
        let config = PoseConfig::default();
        let mut animator = PoseAnimator::new(config.clone());
        for i in 0..240 {
            let pose = animator.update(Gait::Idle, false, i as f32 * DT, DT);
            assert!((pose.torso_height - config.torso_height).abs() <= config.breath_depth + 1e-6);
        }
    }
}
