//! View selector.
//!
//! A two-valued flag choosing between the landing page and the customer
//! dashboard. This is deliberately not a state machine: `set` is an
//! unconditional overwrite and the flag is independent of the session. In
//! particular it is NOT reset on logout.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Which top-level view a customer has selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CurrentView {
    /// The public landing page.
    #[default]
    Home,
    /// The customer dashboard.
    Dashboard,
}

/// Holder of the current view selection.
#[derive(Debug, Default)]
pub struct ViewSelector {
    current: RwLock<CurrentView>,
}

impl ViewSelector {
    /// Create a selector starting at [`CurrentView::Home`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current selection.
    #[must_use]
    pub fn get(&self) -> CurrentView {
        self.current.read().map(|v| *v).unwrap_or_default()
    }

    /// Overwrite the selection. No validation, no guarded transitions.
    pub fn set(&self, view: CurrentView) {
        if let Ok(mut guard) = self.current.write() {
            *guard = view;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        assert_eq!(ViewSelector::new().get(), CurrentView::Home);
    }

    #[test]
    fn test_set_is_unconditional_overwrite() {
        let selector = ViewSelector::new();
        selector.set(CurrentView::Dashboard);
        assert_eq!(selector.get(), CurrentView::Dashboard);
        selector.set(CurrentView::Dashboard);
        assert_eq!(selector.get(), CurrentView::Dashboard);
        selector.set(CurrentView::Home);
        assert_eq!(selector.get(), CurrentView::Home);
    }

    #[test]
    fn test_serde_form_values() {
        // The /view form posts these exact strings.
        assert_eq!(
            serde_json::from_str::<CurrentView>("\"home\"").ok(),
            Some(CurrentView::Home)
        );
        assert_eq!(
            serde_json::from_str::<CurrentView>("\"dashboard\"").ok(),
            Some(CurrentView::Dashboard)
        );
    }
}
