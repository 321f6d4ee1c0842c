//! Summary step rendering

use super::field_renderer::draw_heading;
use crate::app::App;
use crate::state::SummarySnapshot;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the order summary with a right-aligned price column
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Min(6),    // Summary box
        ])
        .split(area);

    draw_heading(
        frame,
        chunks[0],
        "Finishing up",
        "Double-check everything looks OK before confirming.",
    );

    let Some(summary) = app.controller.summary() else {
        return;
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner_width = block.inner(chunks[1]).width as usize;

    let paragraph = Paragraph::new(summary_lines(summary, inner_width)).block(block);
    frame.render_widget(paragraph, chunks[1]);
}

/// Left label, right price, padded to `width`
fn row(
    label: String,
    price: String,
    label_style: Style,
    price_style: Style,
    width: usize,
) -> Line<'static> {
    let used = label.chars().count() + price.chars().count();
    let padding = " ".repeat(width.saturating_sub(used));
    Line::from(vec![
        Span::styled(label, label_style),
        Span::raw(padding),
        Span::styled(price, price_style),
    ])
}

fn summary_lines(summary: &SummarySnapshot, width: usize) -> Vec<Line<'static>> {
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        row(
            summary.plan_label.clone(),
            summary.plan_price_text(),
            bold,
            bold,
            width,
        ),
        Line::from(Span::styled(
            "Change (c)",
            muted.add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(Span::styled("─".repeat(width), muted)),
    ];

    for line in &summary.addon_lines {
        lines.push(row(
            line.label.clone(),
            summary.line_price_text(line),
            muted,
            Style::default(),
            width,
        ));
    }

    lines.push(Line::raw(""));
    lines.push(row(
        summary.total_label.clone(),
        summary.total_text(),
        muted,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        width,
    ));
    lines
}
