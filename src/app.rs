//! Application state and core logic

use crate::config::TuiConfig;
use crate::generator::{self, Kind};
use crate::state::{AppState, Form, View};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Copy/status feedback message for the status bar
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance, restoring the last selected kind
    pub fn new() -> Self {
        let mut state = AppState::default();

        match TuiConfig::load() {
            Ok(config) => {
                if let Some(kind) = config
                    .last_kind
                    .as_deref()
                    .and_then(|k| Kind::parse(k).ok())
                {
                    state.select_kind(kind);
                }
            }
            Err(err) => tracing::warn!("failed to load config: {err:#}"),
        }

        Self {
            state,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Persist the selected kind for the next session
    pub fn save_config(&self) {
        let config = TuiConfig {
            last_kind: Some(self.state.kind.as_str().to_string()),
        };
        if let Err(err) = config.save() {
            tracing::warn!("failed to save config: {err:#}");
        }
    }

    fn active_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self.state.current_view {
            View::BossForm => Some(&mut self.state.boss_form),
            View::ItemForm => Some(&mut self.state.item_form),
            View::Docs => None,
        }
    }

    /// Generate YAML for the active form. Success text and error text
    /// both land in the output panel verbatim.
    pub fn generate(&mut self) {
        let snapshot = match self.state.kind {
            Kind::Boss => self.state.boss_form.snapshot(),
            Kind::Item => self.state.item_form.snapshot(),
        };
        self.state.generated = match generator::generate(self.state.kind.as_str(), &snapshot) {
            Ok(text) => text,
            Err(err) => err.to_string(),
        };
        self.state.output_scroll = 0;
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }

    /// Copy the output panel content to the system clipboard
    pub fn copy_output(&mut self) {
        let text = self.state.generated.clone();
        match self.copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some("Copied to clipboard".to_string()),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err:#}");
                self.copy_message = Some(format!("Copy failed: {err}"));
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        self.copy_message = None;

        // Global shortcuts
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('b') => {
                    self.state.select_kind(Kind::Boss);
                    return Ok(());
                }
                // ^T, not ^I: terminals deliver ^I as Tab
                KeyCode::Char('t') => {
                    self.state.select_kind(Kind::Item);
                    return Ok(());
                }
                KeyCode::Char('d') => {
                    self.state.current_view = View::Docs;
                    return Ok(());
                }
                KeyCode::Char('g') => {
                    self.generate();
                    return Ok(());
                }
                KeyCode::Char('y') => {
                    self.copy_output();
                    return Ok(());
                }
                KeyCode::Char('u') => {
                    if let Some(form) = self.active_form_mut() {
                        form.get_active_field_mut().clear();
                    }
                    return Ok(());
                }
                _ => {}
            }
        }

        match self.state.current_view {
            View::Docs => self.handle_docs_key(key),
            View::BossForm | View::ItemForm => self.handle_form_key(key),
        }

        Ok(())
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => {
                if let Some(form) = self.active_form_mut() {
                    form.next_field();
                }
            }
            KeyCode::BackTab | KeyCode::Up => {
                if let Some(form) = self.active_form_mut() {
                    form.prev_field();
                }
            }
            KeyCode::Right => match self.state.current_view {
                View::BossForm => self.state.boss_form.next_category(),
                View::ItemForm => self.state.item_form.next_category(),
                View::Docs => {}
            },
            KeyCode::Left => match self.state.current_view {
                View::BossForm => self.state.boss_form.prev_category(),
                View::ItemForm => self.state.item_form.prev_category(),
                View::Docs => {}
            },
            KeyCode::PageDown => {
                self.state.output_scroll = self.state.output_scroll.saturating_add(5);
            }
            KeyCode::PageUp => {
                self.state.output_scroll = self.state.output_scroll.saturating_sub(5);
            }
            KeyCode::Enter => {
                // Enter adds an entry in list fields, generates elsewhere
                let multiline = self
                    .active_form_mut()
                    .map(|form| {
                        let active = form.active_field();
                        form.get_field(active).is_some_and(|f| f.is_multiline)
                    })
                    .unwrap_or(false);
                if multiline {
                    if let Some(form) = self.active_form_mut() {
                        form.get_active_field_mut().push_line();
                    }
                } else {
                    self.generate();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = self.active_form_mut() {
                    form.get_active_field_mut().pop_char();
                }
            }
            KeyCode::Char(' ') => {
                if let Some(form) = self.active_form_mut() {
                    let field = form.get_active_field_mut();
                    if field.is_toggle() {
                        field.cycle_toggle();
                    } else {
                        field.push_char(' ');
                    }
                }
            }
            KeyCode::Char(c) => {
                if let Some(form) = self.active_form_mut() {
                    form.get_active_field_mut().push_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_docs_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                // Back to the form that was active before
                self.state.select_kind(self.state.kind);
            }
            KeyCode::Enter => self.state.docs.run_search(),
            KeyCode::Backspace => {
                self.state.docs.query.pop();
            }
            KeyCode::Down => self.state.docs.select_next(),
            KeyCode::Up => self.state.docs.select_prev(),
            KeyCode::Char(c) => self.state.docs.query.push(c),
            _ => {}
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::OUTPUT_PLACEHOLDER;
    use pretty_assertions::assert_eq;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app() -> App {
        // Build state directly so tests don't touch the config file
        App {
            state: AppState::default(),
            quit: false,
            copy_message: None,
        }
    }

    #[test]
    fn test_view_switch_shortcuts() {
        let mut app = app();
        app.handle_key(ctrl('t')).unwrap();
        assert_eq!(app.state.current_view, View::ItemForm);
        assert_eq!(app.state.kind, Kind::Item);

        app.handle_key(ctrl('d')).unwrap();
        assert_eq!(app.state.current_view, View::Docs);
        // Docs does not change the generation kind
        assert_eq!(app.state.kind, Kind::Item);

        app.handle_key(ctrl('b')).unwrap();
        assert_eq!(app.state.current_view, View::BossForm);
        assert_eq!(app.state.kind, Kind::Boss);
    }

    #[test]
    fn test_typing_reaches_active_field() {
        let mut app = app();
        // Field 0 is the internal name
        app.handle_key(ctrl('u')).unwrap();
        for c in "Zed".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.state.boss_form.internal_name.as_text(), "Zed");
    }

    #[test]
    fn test_generate_success_fills_output() {
        let mut app = app();
        assert_eq!(app.state.generated, OUTPUT_PLACEHOLDER);
        app.handle_key(ctrl('g')).unwrap();
        assert_eq!(
            app.state.generated,
            "MyCoolBoss:\n  Options:\n    Type: ZOMBIE\n    Health: 100\n"
        );
    }

    #[test]
    fn test_generate_error_fills_output_verbatim() {
        let mut app = app();
        app.state.boss_form.internal_name.clear();
        app.handle_key(ctrl('g')).unwrap();
        assert!(app.state.generated.starts_with("Error:"));
    }

    #[test]
    fn test_enter_generates_on_single_line_field() {
        let mut app = app();
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.generated.starts_with("MyCoolBoss:"));
    }

    #[test]
    fn test_enter_adds_line_in_list_field() {
        let mut app = app();
        // Move to the Equipment category and its single list field
        app.handle_key(ctrl('g')).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Right)).unwrap();
        app.handle_key(key(KeyCode::Tab)).unwrap();
        for c in "a b".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();
        for c in "c d".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(app.state.boss_form.equipment[0].display_value(), "a b\nc d");
        // Enter edited the field; it did not regenerate
        assert!(!app.state.generated.contains("Equipment"));
    }

    #[test]
    fn test_space_cycles_toggle_fields() {
        let mut app = app();
        app.handle_key(ctrl('t')).unwrap();
        // Unbreakable is options[6]; field index is offset by the name field
        app.state.item_form.set_active_field(7);
        app.handle_key(key(KeyCode::Char(' '))).unwrap();
        assert_eq!(
            app.state.item_form.options[6].display_value(),
            "true"
        );
    }

    #[test]
    fn test_category_navigation_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::Right)).unwrap();
        assert_eq!(
            app.state.boss_form.active_category.label(),
            "Display"
        );
        app.handle_key(key(KeyCode::Left)).unwrap();
        app.handle_key(key(KeyCode::Left)).unwrap();
        assert_eq!(
            app.state.boss_form.active_category.label(),
            "Disguise"
        );
    }

    #[test]
    fn test_docs_flow() {
        let mut app = app();
        app.handle_key(ctrl('d')).unwrap();
        for c in "health".chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
        app.handle_key(key(KeyCode::Enter)).unwrap();
        assert!(app.state.docs.searched);
        assert!(!app.state.docs.hits.is_empty());
        assert_eq!(app.state.docs.hits[0].entry.option, "Health");

        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(app.state.current_view, View::BossForm);
    }

    #[test]
    fn test_esc_quits_from_form_view() {
        let mut app = app();
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(app.should_quit());
    }

    #[test]
    fn test_esc_in_docs_returns_to_form() {
        let mut app = app();
        app.handle_key(ctrl('d')).unwrap();
        app.handle_key(key(KeyCode::Esc)).unwrap();
        assert!(!app.should_quit());
        assert_eq!(app.state.current_view, View::BossForm);
    }

    #[test]
    fn test_output_scroll_keys() {
        let mut app = app();
        app.handle_key(key(KeyCode::PageDown)).unwrap();
        assert_eq!(app.state.output_scroll, 5);
        app.handle_key(key(KeyCode::PageUp)).unwrap();
        app.handle_key(key(KeyCode::PageUp)).unwrap();
        assert_eq!(app.state.output_scroll, 0);
    }
}
