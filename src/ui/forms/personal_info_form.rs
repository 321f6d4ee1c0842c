//! Personal info step rendering

use super::field_renderer::{draw_field, draw_heading};
use crate::app::App;
use crate::state::Field;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use strum::IntoEnumIterator;

/// Draw the name, email and phone inputs
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Phone
            Constraint::Min(0),
        ])
        .split(area);

    draw_heading(
        frame,
        chunks[0],
        "Personal info",
        "Please provide your name, email address, and phone number.",
    );

    let draft = &app.controller.draft().personal;
    let active = draft.active_field();
    for (idx, field) in Field::iter().enumerate() {
        draw_field(
            frame,
            chunks[idx + 1],
            draft.get(field),
            field == active,
            app.controller.field_error(field),
        );
    }
}
