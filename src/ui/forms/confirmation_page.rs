//! Thank-you screen

use crate::app::App;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const SUPPORT_EMAIL: &str = "support@loremgaming.com";

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = vec![
        Line::raw(""),
        Line::from(Span::styled(
            "Thank you!",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!(
                "Thanks for confirming your subscription! We hope you have fun using our \
                 platform. If you ever need support, please feel free to email us at {SUPPORT_EMAIL}."
            ),
            Style::default().fg(Color::Gray),
        )),
    ];

    if let Some(submission) = &app.submission {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            format!("Reference: {}", submission.session_id),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(paragraph, area);
}
