//! Layout components (step sidebar, status bar)

use super::components::{render_step_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Sidebar width in columns
pub const SIDEBAR_WIDTH: u16 = 22;

/// Sidebar items, one per numbered step
const SIDEBAR_ITEMS: &[&str] = &["YOUR INFO", "SELECT PLAN", "ADD-ONS", "SUMMARY"];

/// Create the main layout with sidebar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(SIDEBAR_WIDTH), // Sidebar
            Constraint::Min(0),                // Main content
        ])
        .split(rows[0]);

    (chunks[0], chunks[1])
}

/// Sidebar entry highlighted for a step; the confirmation screen keeps "SUMMARY" lit
pub fn highlighted_item(step: Step) -> usize {
    step.index().min(SIDEBAR_ITEMS.len() - 1)
}

/// Draw the sidebar with one box per step
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Length(1)]; // Top padding
    constraints.extend(SIDEBAR_ITEMS.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let current = highlighted_item(app.step());
    for (idx, label) in SIDEBAR_ITEMS.iter().enumerate() {
        render_step_button(frame, chunks[idx + 1], idx + 1, label, idx == current);
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_step_hints(app.step())),
        Style::default().fg(Color::Gray),
    )];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(msg, Style::default().fg(Color::LightRed)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current step
fn get_step_hints(step: Step) -> &'static str {
    match step {
        Step::PersonalInfo => "Tab:next field  Enter:next step",
        Step::PlanSelect => "j/k:plan  b:monthly/yearly  Enter:next step  Esc:back",
        Step::AddonSelect => "j/k:nav  Space:toggle  Enter:next step  Esc:back",
        Step::Summary => "c:change plan  b:monthly/yearly  Enter:confirm  Esc:back",
        Step::Confirmation => "c:change plan  q:quit",
    }
}
