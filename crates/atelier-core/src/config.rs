//! Tunable motion, camera and input constants
//!
//! Every field has a default, so a partial `atelier.toml` (or none at all)
//! is valid. Rates are per second and applied with the frame delta.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to serialize configuration: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub avatar: AvatarConfig,
    #[serde(default)]
    pub pose: PoseConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub panel: PanelConfig,
}

/// Walkable floor rectangle (exclusive bounds)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FloorBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl Default for FloorBounds {
    fn default() -> Self {
        Self {
            min_x: -20.0,
            max_x: 20.0,
            min_z: -20.0,
            max_z: 10.0,
        }
    }
}

impl FloorBounds {
    pub fn contains(&self, x: f32, z: f32) -> bool {
        x > self.min_x && x < self.max_x && z > self.min_z && z < self.max_z
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AvatarConfig {
    /// Where the avatar stands when the gallery opens
    #[serde(default = "default_spawn")]
    pub spawn: [f32; 3],
    /// Walking speed in units per second
    #[serde(default = "default_walk_speed")]
    pub walk_speed: f32,
    /// Distance at which the avatar counts as arrived at a standing spot
    #[serde(default = "default_arrival_threshold")]
    pub arrival_threshold: f32,
    /// Distance in front of an artwork to stand
    #[serde(default = "default_stand_distance")]
    pub stand_distance: f32,
    /// Offset along the artwork's right vector (negative = to its left)
    #[serde(default = "default_stand_side_offset")]
    pub stand_side_offset: f32,
    /// Turn rate while steering with the keyboard
    #[serde(default = "default_manual_turn_rate")]
    pub manual_turn_rate: f32,
    /// Turn rate while walking to a standing spot
    #[serde(default = "default_walk_turn_rate")]
    pub walk_turn_rate: f32,
    /// Turn rate toward the artwork once arrived
    #[serde(default = "default_arrive_turn_rate")]
    pub arrive_turn_rate: f32,
    #[serde(default)]
    pub floor: FloorBounds,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            spawn: default_spawn(),
            walk_speed: default_walk_speed(),
            arrival_threshold: default_arrival_threshold(),
            stand_distance: default_stand_distance(),
            stand_side_offset: default_stand_side_offset(),
            manual_turn_rate: default_manual_turn_rate(),
            walk_turn_rate: default_walk_turn_rate(),
            arrive_turn_rate: default_arrive_turn_rate(),
            floor: FloorBounds::default(),
        }
    }
}

fn default_spawn() -> [f32; 3] {
    [0.0, 0.0, 2.0]
}

fn default_walk_speed() -> f32 {
    4.8 // 0.08 per frame at 60 Hz
}

fn default_arrival_threshold() -> f32 {
    0.1
}

fn default_stand_distance() -> f32 {
    2.0
}

fn default_stand_side_offset() -> f32 {
    -0.8
}

fn default_manual_turn_rate() -> f32 {
    9.75
}

fn default_walk_turn_rate() -> f32 {
    6.3
}

fn default_arrive_turn_rate() -> f32 {
    3.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseConfig {
    /// Resting torso height
    #[serde(default = "default_torso_height")]
    pub torso_height: f32,
    /// Walk cycle frequency in radians per second
    #[serde(default = "default_walk_frequency")]
    pub walk_frequency: f32,
    #[serde(default = "default_walk_bob")]
    pub walk_bob: f32,
    #[serde(default = "default_arm_swing")]
    pub arm_swing: f32,
    #[serde(default = "default_head_bob")]
    pub head_bob: f32,
    #[serde(default = "default_breath_frequency")]
    pub breath_frequency: f32,
    #[serde(default = "default_breath_depth")]
    pub breath_depth: f32,
    /// Forward lean while inspecting
    #[serde(default = "default_inspect_lean")]
    pub inspect_lean: f32,
    /// Right arm pitch of the pointing gesture
    #[serde(default = "default_point_pitch")]
    pub point_pitch: f32,
    /// Right arm roll of the pointing gesture
    #[serde(default = "default_point_roll")]
    pub point_roll: f32,
    /// Rate at which idle pose angles ease toward their targets
    #[serde(default = "default_ease_rate")]
    pub ease_rate: f32,
}

impl Default for PoseConfig {
    fn default() -> Self {
        Self {
            torso_height: default_torso_height(),
            walk_frequency: default_walk_frequency(),
            walk_bob: default_walk_bob(),
            arm_swing: default_arm_swing(),
            head_bob: default_head_bob(),
            breath_frequency: default_breath_frequency(),
            breath_depth: default_breath_depth(),
            inspect_lean: default_inspect_lean(),
            point_pitch: default_point_pitch(),
            point_roll: default_point_roll(),
            ease_rate: default_ease_rate(),
        }
    }
}

fn default_torso_height() -> f32 {
    0.75
}

fn default_walk_frequency() -> f32 {
    15.0
}

fn default_walk_bob() -> f32 {
    0.05
}

fn default_arm_swing() -> f32 {
    0.5
}

fn default_head_bob() -> f32 {
    0.05
}

fn default_breath_frequency() -> f32 {
    2.0
}

fn default_breath_depth() -> f32 {
    0.01
}

fn default_inspect_lean() -> f32 {
    0.2
}

fn default_point_pitch() -> f32 {
    -1.5
}

fn default_point_roll() -> f32 {
    -0.2
}

fn default_ease_rate() -> f32 {
    3.1
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraConfig {
    #[serde(default = "default_start_position")]
    pub start_position: [f32; 3],
    #[serde(default = "default_start_look_at")]
    pub start_look_at: [f32; 3],
    /// Roam mode: camera offset from the avatar
    #[serde(default = "default_follow_offset")]
    pub follow_offset: [f32; 3],
    /// Roam mode: look-at height above the avatar
    #[serde(default = "default_look_height")]
    pub look_height: f32,
    /// Inspect mode: distance in front of the artwork
    #[serde(default = "default_inspect_distance")]
    pub inspect_distance: f32,
    /// Inspect mode: offset along the artwork's right vector
    #[serde(default = "default_inspect_side_offset")]
    pub inspect_side_offset: f32,
    #[serde(default = "default_position_rate")]
    pub position_rate: f32,
    #[serde(default = "default_look_rate")]
    pub look_rate: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            start_position: default_start_position(),
            start_look_at: default_start_look_at(),
            follow_offset: default_follow_offset(),
            look_height: default_look_height(),
            inspect_distance: default_inspect_distance(),
            inspect_side_offset: default_inspect_side_offset(),
            position_rate: default_position_rate(),
            look_rate: default_look_rate(),
        }
    }
}

fn default_start_position() -> [f32; 3] {
    [0.0, 4.0, 10.0]
}

fn default_start_look_at() -> [f32; 3] {
    [0.0, 1.5, -5.0]
}

fn default_follow_offset() -> [f32; 3] {
    [0.0, 3.0, 6.0]
}

fn default_look_height() -> f32 {
    1.5
}

fn default_inspect_distance() -> f32 {
    3.5
}

fn default_inspect_side_offset() -> f32 {
    1.0
}

fn default_position_rate() -> f32 {
    2.5
}

fn default_look_rate() -> f32 {
    3.0
}

/// Key bindings as W3C `KeyboardEvent.code` names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_forward_keys")]
    pub forward: Vec<String>,
    #[serde(default = "default_back_keys")]
    pub back: Vec<String>,
    #[serde(default = "default_left_keys")]
    pub left: Vec<String>,
    #[serde(default = "default_right_keys")]
    pub right: Vec<String>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            forward: default_forward_keys(),
            back: default_back_keys(),
            left: default_left_keys(),
            right: default_right_keys(),
        }
    }
}

fn keys(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn default_forward_keys() -> Vec<String> {
    keys(&["ArrowUp", "KeyW"])
}

fn default_back_keys() -> Vec<String> {
    keys(&["ArrowDown", "KeyS"])
}

fn default_left_keys() -> Vec<String> {
    keys(&["ArrowLeft", "KeyA"])
}

fn default_right_keys() -> Vec<String> {
    keys(&["ArrowRight", "KeyD"])
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Seconds between selecting an artwork and showing its detail panel
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_secs: f32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            reveal_delay_secs: default_reveal_delay(),
        }
    }
}

fn default_reveal_delay() -> f32 {
    1.5
}

impl GalleryConfig {
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Load configuration from file, falling back to defaults when it does not exist
pub fn load_config(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if path.exists() {
        let content = std::fs::read_to_string(path)?;
        let config = GalleryConfig::from_toml(&content)?;
        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    } else {
        info!(
            path = %path.display(),
            "Configuration file not found, using defaults"
        );
        Ok(GalleryConfig::default())
    }
}

/// Save default configuration to file
pub fn save_default_config(path: &Path) -> Result<(), ConfigError> {
    let content = GalleryConfig::default().to_toml()?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let toml = r#"
[avatar]
walk_speed = 6.0

[avatar.floor]
min_x = -5.0
max_x = 5.0
min_z = -5.0
max_z = 5.0

[panel]
reveal_delay_secs = 0.5
"#;
        let config = GalleryConfig::from_toml(toml).unwrap();
        assert_eq!(config.avatar.walk_speed, 6.0);
        assert_eq!(config.avatar.arrival_threshold, 0.1);
        assert_eq!(config.avatar.floor.max_z, 5.0);
        assert_eq!(config.panel.reveal_delay_secs, 0.5);
        assert_eq!(config.camera, CameraConfig::default());
        assert_eq!(config.input.forward, ["ArrowUp", "KeyW"]);
    }

    #[test]
    fn test_floor_bounds_are_exclusive() {
        let floor = FloorBounds::default();
        assert!(floor.contains(0.0, 0.0));
        assert!(floor.contains(19.99, 9.99));
        assert!(!floor.contains(20.0, 0.0));
        assert!(!floor.contains(0.0, 10.0));
        assert!(!floor.contains(-20.0, -20.0));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("atelier.toml")).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_save_and_load_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        save_default_config(&path).unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config, GalleryConfig::default());
    }

    #[test]
    fn test_bad_config_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atelier.toml");
        std::fs::write(&path, "[avatar]\nwalk_speed = \"fast\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::ParseError(_))));
    }
}
