//! Held-key buffer, sampled once per frame into a movement intent

use glam::Vec2;
use std::collections::HashSet;

use crate::config::InputConfig;

/// Keys currently held down, keyed by `KeyboardEvent.code` name.
///
/// Press/release events may arrive at any time; the frame loop reads the
/// set once per tick through [`HeldKeys::intent`].
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<String>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: &str) {
        if !self.held.contains(code) {
            self.held.insert(code.to_string());
        }
    }

    pub fn release(&mut self, code: &str) {
        self.held.remove(code);
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    pub fn is_held(&self, code: &str) -> bool {
        self.held.contains(code)
    }

    fn any_held(&self, codes: &[String]) -> bool {
        codes.iter().any(|c| self.held.contains(c))
    }

    /// Movement intent on the floor plane as (x, z).
    ///
    /// Forward is -Z and right is +X. Opposing keys cancel out. The result
    /// is not normalized.
    pub fn intent(&self, bindings: &InputConfig) -> Vec2 {
        let mut intent = Vec2::ZERO;
        if self.any_held(&bindings.forward) {
            intent.y -= 1.0;
        }
        if self.any_held(&bindings.back) {
            intent.y += 1.0;
        }
        if self.any_held(&bindings.left) {
            intent.x -= 1.0;
        }
        if self.any_held(&bindings.right) {
            intent.x += 1.0;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_binding_schemes() {
        let bindings = InputConfig::default();
        let mut keys = HeldKeys::new();

        keys.press("KeyW");
        assert_eq!(keys.intent(&bindings), Vec2::new(0.0, -1.0));
        keys.release("KeyW");

        keys.press("ArrowUp");
        keys.press("ArrowRight");
        assert_eq!(keys.intent(&bindings), Vec2::new(1.0, -1.0));

        keys.press("KeyD");
        keys.release("ArrowRight");
        assert_eq!(keys.intent(&bindings), Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let bindings = InputConfig::default();
        let mut keys = HeldKeys::new();
        keys.press("KeyA");
        keys.press("KeyD");
        keys.press("ArrowDown");
        keys.press("KeyW");
        assert_eq!(keys.intent(&bindings), Vec2::ZERO);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let bindings = InputConfig::default();
        let mut keys = HeldKeys::new();
        keys.press("Space");
        keys.press("KeyQ");
        assert!(keys.is_held("Space"));
        assert_eq!(keys.intent(&bindings), Vec2::ZERO);

        keys.release_all();
        assert!(!keys.is_held("Space"));
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = InputConfig {
            forward: vec!["KeyI".to_string()],
            back: vec!["KeyK".to_string()],
            left: vec!["KeyJ".to_string()],
            right: vec!["KeyL".to_string()],
        };
        let mut keys = HeldKeys::new();
        keys.press("KeyW");
        assert_eq!(keys.intent(&bindings), Vec2::ZERO);
        keys.press("KeyJ");
        assert_eq!(keys.intent(&bindings), Vec2::new(-1.0, 0.0));
    }
}
