//! Add-on selection step rendering

use super::field_renderer::{draw_checkbox_field, draw_heading};
use crate::app::App;
use crate::state::AddonId;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};
use strum::IntoEnumIterator;

fn addon_detail(addon: AddonId) -> &'static str {
    match addon {
        AddonId::OnlineService => "Access to multiplayer games",
        AddonId::LargerStorage => "Extra 1TB of cloud save",
        AddonId::CustomizableProfile => "Custom theme on your profile",
    }
}

/// Draw one checkbox row per add-on
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let addons: Vec<AddonId> = AddonId::iter().collect();

    let mut constraints = vec![Constraint::Length(3)]; // Heading
    constraints.extend(addons.iter().map(|_| Constraint::Length(3)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    draw_heading(
        frame,
        chunks[0],
        "Pick add-ons",
        "Add-ons help enhance your gaming experience.",
    );

    let cycle = app.controller.state().cycle();
    for (idx, addon) in addons.iter().enumerate() {
        draw_checkbox_field(
            frame,
            chunks[idx + 1],
            &addon.label(),
            addon_detail(*addon),
            &app.controller.table().price_tag(*addon, cycle),
            app.controller.draft().is_checked(*addon),
            idx == app.addon_cursor,
        );
    }
}
