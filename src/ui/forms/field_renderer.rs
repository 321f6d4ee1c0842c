//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw a text input with its label and, when present, the validation error
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let border_style = match (error, is_active) {
        (Some(_), _) => Style::default().fg(Color::LightRed),
        (None, true) => Style::default().fg(Color::Cyan),
        (None, false) => Style::default().fg(Color::DarkGray),
    };

    let value_style = if field.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    // Placeholder only shows while the input is empty and unfocused
    let value = if field.is_empty() && is_active {
        ""
    } else {
        field.display_value()
    };
    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title_top(Line::from(format!(" {} ", field.label())))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(message) = error {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {message} "),
                Style::default().fg(Color::LightRed),
            ))
            .right_aligned(),
        );
    }

    frame.render_widget(content.block(block), area);
}

/// Draw a checkbox row
pub fn draw_checkbox_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    detail: &str,
    price: &str,
    checked: bool,
    focused: bool,
) {
    let checkbox = if checked { "[x]" } else { "[ ]" };

    let style = if focused {
        Style::default().fg(Color::Yellow)
    } else if checked {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else if checked {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_top(Line::from(format!(" {price} ")).right_aligned());

    let paragraph = Paragraph::new(Line::from(vec![
        Span::styled(format!("{checkbox} {label}  "), style),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
    ]))
    .block(block);
    frame.render_widget(paragraph, area);
}

/// Draw the step title with its one-line description underneath
pub fn draw_heading(frame: &mut Frame, area: Rect, title: &str, description: &str) {
    let heading = Paragraph::new(vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            description.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(heading, area);
}
