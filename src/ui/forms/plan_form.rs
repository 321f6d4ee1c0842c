//! Plan selection step rendering

use super::field_renderer::draw_heading;
use crate::app::App;
use crate::state::{Cycle, PlanId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;

/// Draw the plan cards and the billing toggle
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Heading
            Constraint::Length(6), // Plan cards
            Constraint::Length(3), // Billing toggle
            Constraint::Min(0),
        ])
        .split(area);

    draw_heading(
        frame,
        chunks[0],
        "Select your plan",
        "You have the option of monthly or yearly billing.",
    );

    let plans: Vec<PlanId> = PlanId::iter().collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(plans.iter().map(|_| Constraint::Ratio(1, plans.len() as u32)))
        .split(chunks[1]);

    let state = app.controller.state();
    for (plan, card_area) in plans.iter().zip(cards.iter()) {
        draw_plan_card(frame, *card_area, app, *plan, *plan == state.plan());
    }

    draw_billing_toggle(frame, chunks[2], state.cycle());
}

fn draw_plan_card(frame: &mut Frame, area: Rect, app: &App, plan: PlanId, selected: bool) {
    let cycle = app.controller.state().cycle();
    let border_style = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            plan.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            app.controller.table().price_tag(plan, cycle),
            Style::default().fg(Color::Gray),
        )),
    ];
    if cycle.is_yearly() {
        lines.push(Line::from(Span::styled(
            "2 months free",
            Style::default().fg(Color::Cyan),
        )));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_billing_toggle(frame: &mut Frame, area: Rect, cycle: Cycle) {
    let active = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);

    let (monthly_style, yearly_style, knob) = match cycle {
        Cycle::Monthly => (active, inactive, "(●  )"),
        Cycle::Yearly => (inactive, active, "(  ●)"),
    };

    let toggle = Paragraph::new(Line::from(vec![
        Span::styled(Cycle::Monthly.label(), monthly_style),
        Span::raw("  "),
        Span::styled(knob, Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(Cycle::Yearly.label(), yearly_style),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).border_style(inactive));
    frame.render_widget(toggle, area);
}
