//! Application state definitions

use crate::docs::SearchHit;
use crate::generator::Kind;
use crate::state::{BossForm, ItemForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    BossForm,
    ItemForm,
    Docs,
}

/// State of the documentation search view
#[derive(Debug, Clone, Default)]
pub struct DocsState {
    /// Search input buffer
    pub query: String,
    /// Hits from the last executed search
    pub hits: Vec<SearchHit>,
    /// Selected hit index
    pub selected: usize,
    /// Whether a search has been run (distinguishes "no results" from
    /// "not searched yet")
    pub searched: bool,
}

impl DocsState {
    pub fn select_next(&mut self) {
        if !self.hits.is_empty() {
            self.selected = (self.selected + 1) % self.hits.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.hits.is_empty() {
            if self.selected == 0 {
                self.selected = self.hits.len() - 1;
            } else {
                self.selected -= 1;
            }
        }
    }

    pub fn run_search(&mut self) {
        self.hits = crate::docs::search(&self.query);
        self.selected = 0;
        self.searched = true;
    }
}

/// Placeholder shown in the output panel before the first generation
pub const OUTPUT_PLACEHOLDER: &str =
    "YAML output will appear here.\nFill out the form and press Ctrl+G (or Enter) to generate.";

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub current_view: View,
    /// Kind used by the generate action; follows the last form view
    pub kind: Kind,
    pub boss_form: BossForm,
    pub item_form: ItemForm,
    /// Output panel content: generated YAML or error text, verbatim
    pub generated: String,
    /// Output panel scroll offset
    pub output_scroll: usize,
    pub docs: DocsState,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_view: View::default(),
            kind: Kind::Boss,
            boss_form: BossForm::new(),
            item_form: ItemForm::new(),
            generated: OUTPUT_PLACEHOLDER.to_string(),
            output_scroll: 0,
            docs: DocsState::default(),
        }
    }
}

impl AppState {
    /// Switch to a form view, updating the active kind
    pub fn select_kind(&mut self, kind: Kind) {
        self.kind = kind;
        self.current_view = match kind {
            Kind::Boss => View::BossForm,
            Kind::Item => View::ItemForm,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::BossForm);
        assert_eq!(state.kind, Kind::Boss);
        assert_eq!(state.generated, OUTPUT_PLACEHOLDER);
    }

    #[test]
    fn test_select_kind_switches_view() {
        let mut state = AppState::default();
        state.select_kind(Kind::Item);
        assert_eq!(state.current_view, View::ItemForm);
        assert_eq!(state.kind, Kind::Item);
    }

    #[test]
    fn test_docs_selection_wraps() {
        let mut docs = DocsState {
            query: "health".to_string(),
            ..Default::default()
        };
        docs.run_search();
        assert!(docs.searched);
        assert!(!docs.hits.is_empty());

        let last = docs.hits.len() - 1;
        docs.select_prev();
        assert_eq!(docs.selected, last);
        docs.select_next();
        assert_eq!(docs.selected, 0);
    }

    #[test]
    fn test_docs_search_resets_selection() {
        let mut docs = DocsState {
            query: "damage".to_string(),
            selected: 5,
            ..Default::default()
        };
        docs.run_search();
        assert_eq!(docs.selected, 0);
    }
}
