//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Step;
use components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Draw the main layout with sidebar
    let (sidebar_area, main_area) = layout::create_layout(area);

    // Draw sidebar
    layout::draw_sidebar(frame, sidebar_area, app);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Navigation buttons
        ])
        .margin(1)
        .split(main_area);

    // Draw main content based on current step
    match app.step() {
        Step::PersonalInfo => forms::draw_personal_info(frame, chunks[0], app),
        Step::PlanSelect => forms::draw_plan_select(frame, chunks[0], app),
        Step::AddonSelect => forms::draw_addon_select(frame, chunks[0], app),
        Step::Summary => forms::draw_summary(frame, chunks[0], app),
        Step::Confirmation => forms::draw_confirmation(frame, chunks[0], app),
    }

    draw_navigation(frame, chunks[1], app.step());

    // Draw status bar
    layout::draw_status_bar(frame, app);
}

/// "Go Back" on the left, "Next Step"/"Confirm" on the right
fn draw_navigation(frame: &mut Frame, area: Rect, step: Step) {
    if step == Step::Confirmation {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(14), // Go Back
            Constraint::Min(0),     // Spacer
            Constraint::Length(14), // Next Step / Confirm
        ])
        .split(area);

    if step != Step::PersonalInfo {
        render_action_button(frame, chunks[0], "Go Back", Color::Gray, false);
    }

    let (label, accent) = if step == Step::Summary {
        ("Confirm", Color::LightBlue)
    } else {
        ("Next Step", Color::Cyan)
    };
    render_action_button(frame, chunks[2], label, accent, true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::submit::MockSubmitter;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let backend = TestBackend::new(110, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app() -> App {
        let mut submitter = MockSubmitter::new();
        submitter.expect_submit().returning(|_| Ok(()));
        App::new(&AppConfig::default(), Box::new(submitter))
    }

    fn advance_past_personal_info(app: &mut App) {
        for c in "Ada Lovelace".chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Tab);
        for c in "ada@example.com".chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Tab);
        for c in "0123456789".chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn test_personal_info_screen() {
        let screen = render(&app());
        assert!(screen.contains("Personal info"));
        assert!(screen.contains("YOUR INFO"));
        assert!(screen.contains("Next Step"));
        assert!(!screen.contains("Go Back"));
    }

    #[test]
    fn test_validation_errors_are_drawn() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("This field is required"));
    }

    #[test]
    fn test_plan_screen_shows_cycle_prices() {
        let mut app = app();
        advance_past_personal_info(&mut app);
        let screen = render(&app);
        assert!(screen.contains("Select your plan"));
        assert!(screen.contains("$9/mo"));

        press(&mut app, KeyCode::Char('b'));
        let screen = render(&app);
        assert!(screen.contains("$90/yr"));
        assert!(screen.contains("2 months free"));
    }

    #[test]
    fn test_summary_screen_shows_total() {
        let mut app = app();
        advance_past_personal_info(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Arcade (Monthly)"));
        assert!(screen.contains("Online service"));
        assert!(screen.contains("Total (per month)"));
        assert!(screen.contains("+$10/mo"));
        assert!(screen.contains("Confirm"));
    }

    #[test]
    fn test_confirmation_screen() {
        let mut app = app();
        advance_past_personal_info(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Thank you!"));
        assert!(!screen.contains("Next Step"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let backend = TestBackend::new(10, 4);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = app();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
    }
}
