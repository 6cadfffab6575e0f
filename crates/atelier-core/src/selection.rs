//! Currently inspected artwork

use thiserror::Error;
use tracing::debug;

use crate::catalog::{Artwork, Catalog};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No artwork with id {0}")]
    UnknownArtwork(String),
    #[error("Navigation requires a selected artwork")]
    NothingSelected,
}

/// Either roaming freely or inspecting one catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    None,
    /// Index into the catalog
    Selected(usize),
}

impl Selection {
    pub fn index(&self) -> Option<usize> {
        match self {
            Selection::None => None,
            Selection::Selected(index) => Some(*index),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::Selected(_))
    }

    /// Look up the selected artwork
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Option<&'a Artwork> {
        self.index().and_then(|i| catalog.get(i))
    }
}

/// Single-writer selection slot
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Selection {
        self.current
    }

    /// Select an artwork by id. Unknown ids leave the state untouched.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> Result<Selection, SelectionError> {
        let index = catalog
            .index_of(id)
            .ok_or_else(|| SelectionError::UnknownArtwork(id.to_string()))?;
        Ok(self.set(Selection::Selected(index)))
    }

    pub fn clear(&mut self) -> Selection {
        self.set(Selection::None)
    }

    /// Move to the following artwork, wrapping past the end
    pub fn next(&mut self, catalog: &Catalog) -> Result<Selection, SelectionError> {
        let index = self.current.index().ok_or(SelectionError::NothingSelected)?;
        Ok(self.set(Selection::Selected(catalog.next_index(index))))
    }

    /// Move to the preceding artwork, wrapping past the start
    pub fn previous(&mut self, catalog: &Catalog) -> Result<Selection, SelectionError> {
        let index = self.current.index().ok_or(SelectionError::NothingSelected)?;
        Ok(self.set(Selection::Selected(catalog.previous_index(index))))
    }

    fn set(&mut self, selection: Selection) -> Selection {
        if selection != self.current {
            debug!(from = ?self.current, to = ?selection, "Selection changed");
        }
        self.current = selection;
        selection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_and_clear() {
        let catalog = Catalog::bundled().unwrap();
        let mut state = SelectionState::new();
        assert_eq!(state.current(), Selection::None);

        state.select(&catalog, "art-3").unwrap();
        assert_eq!(state.current(), Selection::Selected(2));
        assert_eq!(state.current().resolve(&catalog).unwrap().title, "Winter Solstice");

        state.clear();
        assert_eq!(state.current(), Selection::None);
        assert!(state.current().resolve(&catalog).is_none());
    }

    #[test]
    fn test_unknown_id_keeps_state() {
        let catalog = Catalog::bundled().unwrap();
        let mut state = SelectionState::new();
        state.select(&catalog, "art-2").unwrap();

        let err = state.select(&catalog, "art-99").unwrap_err();
        assert_eq!(err, SelectionError::UnknownArtwork("art-99".to_string()));
        assert_eq!(state.current(), Selection::Selected(1));
    }

    #[test]
    fn test_navigation_wraps() {
        let catalog = Catalog::bundled().unwrap();
        let mut state = SelectionState::new();

        state.select(&catalog, "art-5").unwrap();
        state.next(&catalog).unwrap();
        assert_eq!(state.current().resolve(&catalog).unwrap().id, "art-1");

        state.previous(&catalog).unwrap();
        assert_eq!(state.current().resolve(&catalog).unwrap().id, "art-5");

        state.select(&catalog, "art-1").unwrap();
        state.previous(&catalog).unwrap();
        assert_eq!(state.current().resolve(&catalog).unwrap().id, "art-5");
    }

    #[test]
    fn test_navigation_without_selection() {
        let catalog = Catalog::bundled().unwrap();
        let mut state = SelectionState::new();
        assert_eq!(state.next(&catalog), Err(SelectionError::NothingSelected));
        assert_eq!(state.previous(&catalog), Err(SelectionError::NothingSelected));
        assert_eq!(state.current(), Selection::None);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let catalog = Catalog::bundled().unwrap();
        let mut state = SelectionState::new();
        state.select(&catalog, "art-2").unwrap();
        for _ in 0..catalog.len() {
            state.next(&catalog).unwrap();
        }
        assert_eq!(state.current(), Selection::Selected(1));
    }
}
