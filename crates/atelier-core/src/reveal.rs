//! Delayed reveal of the artwork detail panel

use crate::selection::Selection;

/// Hides the detail panel on every selection change and shows it again
/// once `delay` seconds of frame time have passed with the selection held.
///
/// A newer selection replaces any pending reveal; a stale one never fires.
#[derive(Debug, Clone)]
pub struct PanelReveal {
    delay: f32,
    /// Seconds waited so far for the current selection, `None` when nothing is pending
    pending: Option<f32>,
    visible: bool,
}

impl PanelReveal {
    pub fn new(delay: f32) -> Self {
        Self {
            delay: delay.max(0.0),
            pending: None,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Restart for a new selection
    pub fn restart(&mut self, selection: Selection) {
        self.visible = false;
        self.pending = selection.is_selected().then_some(0.0);
    }

    pub fn advance(&mut self, dt: f32) -> bool {
        if let Some(waited) = self.pending.as_mut() {
            *waited += dt;
            if *waited >= self.delay {
                self.pending = None;
                self.visible = true;
            }
        }
        self.visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_after_delay() {
        let mut reveal = PanelReveal::new(1.5);
        reveal.restart(Selection::Selected(0));
        assert!(!reveal.advance(1.0));
        assert!(reveal.is_pending());
        assert!(reveal.advance(0.5));
        assert!(!reveal.is_pending());
        assert!(reveal.advance(10.0));
    }

    #[test]
    fn test_reselect_discards_pending() {
        let mut reveal = PanelReveal::new(1.5);
        reveal.restart(Selection::Selected(0));
        reveal.advance(1.4);
        reveal.restart(Selection::Selected(1));
        // The first reveal would have fired here
        assert!(!reveal.advance(0.2));
        assert!(reveal.advance(1.4));
    }

    #[test]
    fn test_clear_hides_without_pending() {
        let mut reveal = PanelReveal::new(1.5);
        reveal.restart(Selection::Selected(2));
        reveal.advance(2.0);
        assert!(reveal.is_visible());

        reveal.restart(Selection::None);
        assert!(!reveal.is_visible());
        assert!(!reveal.is_pending());
        assert!(!reveal.advance(5.0));
    }

    #[test]
    fn test_clear_before_delay_never_shows() {
        let mut reveal = PanelReveal::new(1.5);
        reveal.restart(Selection::Selected(2));
        reveal.advance(1.0);
        reveal.restart(Selection::None);
        assert!(!reveal.advance(1.0));
    }
}
