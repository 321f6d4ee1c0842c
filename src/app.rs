//! Application state and key handling

use crate::config::AppConfig;
use crate::state::{AddonId, Advance, PricingTable, Step, StepController, Submission};
use crate::submit::Submitter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use strum::IntoEnumIterator;

/// Main application struct
pub struct App {
    /// The signup session
    pub controller: StepController,
    /// Where confirmed signups go
    submitter: Box<dyn Submitter>,
    /// Whether the app should quit
    quit: bool,
    /// Message shown in the status bar
    pub status_message: Option<String>,
    /// Highlighted row on the add-on step
    pub addon_cursor: usize,
    /// Set once the user confirms
    pub submission: Option<Submission>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &AppConfig, submitter: Box<dyn Submitter>) -> Self {
        let controller = StepController::new(PricingTable::standard())
            .with_defaults(config.plan(), config.cycle());
        tracing::debug!(session = %controller.session_id(), "Session started");

        Self {
            controller,
            submitter,
            quit: false,
            status_message: None,
            addon_cursor: 0,
            submission: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn step(&self) -> Step {
        self.controller.step()
    }

    /// Add-on under the cursor on the add-on step
    pub fn selected_addon(&self) -> Option<AddonId> {
        AddonId::iter().nth(self.addon_cursor)
    }

    /// Handle a key press for the current step
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.controller.step() {
            Step::PersonalInfo => self.handle_personal_info_key(key),
            Step::PlanSelect => self.handle_plan_key(key),
            Step::AddonSelect => self.handle_addon_key(key),
            Step::Summary => self.handle_summary_key(key),
            Step::Confirmation => self.handle_confirmation_key(key),
        }
    }

    fn handle_personal_info_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.controller.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.controller.prev_field(),
            KeyCode::Enter => self.next_step(),
            KeyCode::Backspace => self.controller.pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.controller.push_char(c)
            }
            _ => {}
        }
    }

    fn handle_plan_key(&mut self, key: KeyEvent) {
        let current = self.controller.state().plan();
        match key.code {
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') | KeyCode::Char('h') => {
                self.controller.pick_plan(current.prev())
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') | KeyCode::Char('l') => {
                self.controller.pick_plan(current.next())
            }
            KeyCode::Char(' ') => self.controller.pick_plan(current),
            KeyCode::Char('b') => self.toggle_billing(),
            KeyCode::Enter => self.next_step(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_addon_key(&mut self, key: KeyEvent) {
        let count = AddonId::iter().count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.addon_cursor = if self.addon_cursor == 0 {
                    count - 1
                } else {
                    self.addon_cursor - 1
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.addon_cursor = (self.addon_cursor + 1) % count;
            }
            KeyCode::Char(' ') => {
                if let Some(addon) = self.selected_addon() {
                    self.controller.toggle_addon(addon);
                }
            }
            KeyCode::Enter => self.next_step(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_summary_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.confirm(),
            KeyCode::Char('c') => self.change_plan(),
            KeyCode::Char('b') => self.toggle_billing(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('c') => self.change_plan(),
            _ => {}
        }
    }

    // === Actions ===

    fn next_step(&mut self) {
        match self.controller.advance() {
            Ok(Advance::Moved(_)) => self.status_message = None,
            Ok(Advance::Rejected(_)) => {
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    fn go_back(&mut self) {
        self.controller.back();
        self.status_message = None;
    }

    fn change_plan(&mut self) {
        match self.controller.change_plan() {
            Ok(()) => self.status_message = None,
            Err(err) => self.status_message = Some(err.to_string()),
        }
    }

    fn toggle_billing(&mut self) {
        let cycle = self.controller.toggle_cycle();
        tracing::debug!(cycle = cycle.label(), "Billing cycle toggled");
    }

    fn confirm(&mut self) {
        let submission = match self.controller.confirm() {
            Ok(submission) => submission,
            Err(err) => {
                self.status_message = Some(err.to_string());
                return;
            }
        };
        match self.submitter.submit(&submission) {
            Ok(()) => self.status_message = None,
            Err(err) => {
                tracing::warn!("Submission failed: {err:#}");
                self.status_message = Some(format!("Submission failed: {err}"));
            }
        }
        self.submission = Some(submission);
    }
}
