//! Derived order summary

use super::{Cycle, FormState, Money, PricingTable};

/// One add-on row of the summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddonLine {
    pub label: String,
    pub price: Money,
}

/// Display-ready totals for the summary step.
///
/// Recomputed from [`FormState`] whenever the summary is shown or a
/// selection changes while it is visible; never edited directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarySnapshot {
    /// e.g. "Arcade (Monthly)"
    pub plan_label: String,
    pub plan_price: Money,
    pub addon_lines: Vec<AddonLine>,
    pub total: Money,
    /// "/mo" or "/yr"
    pub billing_suffix: &'static str,
    /// e.g. "Total (per month)"
    pub total_label: String,
}

impl SummarySnapshot {
    pub fn compute(state: &FormState, table: &PricingTable) -> Self {
        let cycle: Cycle = state.cycle();
        let plan_price = table.price_of(state.plan(), cycle);

        let addon_lines: Vec<AddonLine> = state
            .addons()
            .iter()
            .map(|id| AddonLine {
                label: humanize(id.as_ref()),
                price: table.price_of(*id, cycle),
            })
            .collect();

        let total = plan_price + addon_lines.iter().map(|line| line.price).sum::<Money>();

        Self {
            plan_label: format!("{} ({})", capitalize(state.plan().as_ref()), cycle.label()),
            plan_price,
            addon_lines,
            total,
            billing_suffix: cycle.suffix(),
            total_label: format!("Total (per {})", cycle.period()),
        }
    }

    /// "$9/mo"
    pub fn plan_price_text(&self) -> String {
        format!("{}{}", self.plan_price, self.billing_suffix)
    }

    /// "+$1/mo"
    pub fn line_price_text(&self, line: &AddonLine) -> String {
        format!("+{}{}", line.price, self.billing_suffix)
    }

    /// "+$12/mo"
    pub fn total_text(&self) -> String {
        format!("+{}{}", self.total, self.billing_suffix)
    }
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "online-service" -> "Online service"
pub fn humanize(id: &str) -> String {
    capitalize(&id.replace('-', " "))
}
