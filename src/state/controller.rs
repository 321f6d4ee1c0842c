//! Step navigation for the signup flow

use super::{
    AddonId, Cycle, Draft, Field, FormError, FormState, PatternValidator, PlanId, PricingTable,
    Step, Step1Validation, Submission, SummarySnapshot, Validator,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Result of a successful `advance()` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved forward to this step
    Moved(Step),
    /// Personal info did not validate; nothing was committed
    Rejected(Step1Validation),
}

/// Owns one signup session and is the only thing that mutates its [`FormState`].
#[derive(Debug)]
pub struct StepController<V: Validator = PatternValidator> {
    state: FormState,
    draft: Draft,
    errors: HashMap<Field, String>,
    summary: Option<SummarySnapshot>,
    table: PricingTable,
    validator: V,
    session_id: Uuid,
}

impl StepController<PatternValidator> {
    pub fn new(table: PricingTable) -> Self {
        Self::with_validator(table, PatternValidator)
    }
}

impl<V: Validator> StepController<V> {
    pub fn with_validator(table: PricingTable, validator: V) -> Self {
        Self {
            state: FormState::default(),
            draft: Draft::default(),
            errors: HashMap::new(),
            summary: None,
            table,
            validator,
            session_id: Uuid::new_v4(),
        }
    }

    /// Start the session on a different plan and billing cycle
    pub fn with_defaults(mut self, plan: PlanId, cycle: Cycle) -> Self {
        self.state.plan = plan;
        self.state.cycle = cycle;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn step(&self) -> Step {
        self.state.step
    }

    pub fn table(&self) -> &PricingTable {
        &self.table
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    /// Latest summary, present once the summary step has been entered
    pub fn summary(&self) -> Option<&SummarySnapshot> {
        self.summary.as_ref()
    }

    /// Error message currently shown under a field
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    // === Navigation ===

    /// Commit the current step's inputs and move forward
    pub fn advance(&mut self) -> Result<Advance, FormError> {
        match self.state.step {
            Step::PersonalInfo => {
                let result = {
                    let personal = &self.draft.personal;
                    self.validator.validate_step1(
                        personal.name.as_text(),
                        personal.email.as_text(),
                        personal.phone.as_text(),
                    )
                };
                self.record_errors(&result);
                if !result.valid {
                    tracing::debug!("Personal info rejected");
                    return Ok(Advance::Rejected(result));
                }
                let personal = &self.draft.personal;
                self.state.name = personal.name.as_text().trim().to_string();
                self.state.email = personal.email.as_text().trim().to_string();
                self.state.phone = personal.phone.as_text().trim().to_string();
                self.enter(Step::PlanSelect);
            }
            Step::PlanSelect => {
                if let Some(plan) = self.draft.plan {
                    self.state.plan = plan;
                }
                self.enter(Step::AddonSelect);
            }
            Step::AddonSelect => {
                let addons = self.draft.addons.clone();
                self.state.replace_addons(&addons);
                self.enter(Step::Summary);
            }
            step @ (Step::Summary | Step::Confirmation) => {
                return Err(FormError::TerminalStepReached(step));
            }
        }
        Ok(Advance::Moved(self.state.step))
    }

    /// Go one step back without validation; no-op on the first step
    pub fn back(&mut self) -> Step {
        let target = self.state.step.prev();
        if target != self.state.step {
            self.enter(target);
        }
        self.state.step
    }

    /// Jump straight to an earlier step (or stay on the current one)
    pub fn jump_to(&mut self, target: Step) -> Result<(), FormError> {
        if target > self.state.step {
            return Err(FormError::InvalidTransition {
                from: self.state.step,
                action: "jump forward",
            });
        }
        self.enter(target);
        Ok(())
    }

    /// The "Change" link on the summary
    pub fn change_plan(&mut self) -> Result<(), FormError> {
        self.jump_to(Step::PlanSelect)
    }

    /// Finish the session and return the snapshot to submit
    pub fn confirm(&mut self) -> Result<Submission, FormError> {
        if self.state.step != Step::Summary {
            return Err(FormError::InvalidTransition {
                from: self.state.step,
                action: "confirm",
            });
        }
        let total = SummarySnapshot::compute(&self.state, &self.table).total;
        self.enter(Step::Confirmation);
        tracing::info!(session = %self.session_id, total = total.amount(), "Signup confirmed");
        Ok(Submission::from_state(self.session_id, &self.state, total))
    }

    // === Selections ===

    pub fn pick_plan(&mut self, plan: PlanId) {
        self.draft.plan = Some(plan);
        self.state.plan = plan;
        self.refresh_summary();
    }

    /// Pick a plan by id, rejecting ids outside the table
    pub fn pick_plan_id(&mut self, id: &str) -> Result<(), FormError> {
        let plan = PlanId::parse(id).inspect_err(|_| {
            tracing::warn!("Rejected unknown plan id {id:?}");
        })?;
        self.pick_plan(plan);
        Ok(())
    }

    /// Flip one add-on checkbox. Returns whether it is now checked.
    pub fn toggle_addon(&mut self, id: AddonId) -> bool {
        let checked = !self.draft.is_checked(id);
        self.draft.set_addon(id, checked);
        self.state.set_addon(id, checked);
        self.refresh_summary();
        checked
    }

    pub fn toggle_addon_id(&mut self, id: &str) -> Result<bool, FormError> {
        let addon = AddonId::parse(id).inspect_err(|_| {
            tracing::warn!("Rejected unknown add-on id {id:?}");
        })?;
        Ok(self.toggle_addon(addon))
    }

    pub fn set_cycle(&mut self, cycle: Cycle) {
        self.state.cycle = cycle;
        self.refresh_summary();
    }

    pub fn toggle_cycle(&mut self) -> Cycle {
        self.set_cycle(self.state.cycle.toggle());
        self.state.cycle
    }

    // === Personal info inputs ===

    pub fn set_field(&mut self, field: Field, value: String) {
        self.draft.personal.get_mut(field).set_text(value);
        self.revalidate(field);
    }

    /// Type a character into the active input
    pub fn push_char(&mut self, c: char) {
        let field = self.draft.personal.active_field();
        self.draft.personal.get_mut(field).push_char(c);
        self.revalidate(field);
    }

    pub fn pop_char(&mut self) {
        let field = self.draft.personal.active_field();
        self.draft.personal.get_mut(field).pop_char();
        self.revalidate(field);
    }

    pub fn next_field(&mut self) {
        self.draft.personal.next_field();
    }

    pub fn prev_field(&mut self) {
        self.draft.personal.prev_field();
    }

    pub fn set_active_field(&mut self, field: Field) {
        self.draft.personal.set_active_field(field);
    }

    // === Internals ===

    fn enter(&mut self, step: Step) {
        tracing::debug!(from = %self.state.step, to = %step, "Step transition");
        self.state.step = step;
        if step == Step::Summary {
            self.summary = Some(SummarySnapshot::compute(&self.state, &self.table));
        }
    }

    fn refresh_summary(&mut self) {
        if self.state.step == Step::Summary {
            self.summary = Some(SummarySnapshot::compute(&self.state, &self.table));
        }
    }

    fn record_errors(&mut self, result: &Step1Validation) {
        for field in [Field::Name, Field::Email, Field::Phone] {
            match &result.field(field).message {
                Some(message) => {
                    self.errors.insert(field, message.clone());
                }
                None => {
                    self.errors.remove(&field);
                }
            }
        }
    }

    /// Clear a shown error once the edited value passes; never raise one mid-typing
    fn revalidate(&mut self, field: Field) {
        if !self.errors.contains_key(&field) {
            return;
        }
        let raw = self.draft.personal.get(field).as_text();
        if self.validator.validate_field(field, raw).valid {
            self.errors.remove(&field);
        }
    }
}
