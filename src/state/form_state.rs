//! Form state and draft inputs

use super::field::FormField;
use super::{AddonId, Cycle, Field, PlanId};
use strum::{Display, EnumCount, EnumIter, IntoEnumIterator};

/// Steps of the signup flow, in order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumCount,
)]
#[strum(serialize_all = "title_case")]
pub enum Step {
    #[default]
    PersonalInfo,
    PlanSelect,
    AddonSelect,
    Summary,
    Confirmation,
}

impl Step {
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    pub fn next(&self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous step, saturating at the first one
    pub fn prev(&self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or_default()
    }

    pub fn is_last(&self) -> bool {
        self.index() + 1 == Self::COUNT
    }
}

/// Values committed so far in one signup session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub(super) step: Step,
    pub(super) name: String,
    pub(super) email: String,
    pub(super) phone: String,
    pub(super) plan: PlanId,
    pub(super) addons: Vec<AddonId>,
    pub(super) cycle: Cycle,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(PlanId::default(), Cycle::default())
    }
}

impl FormState {
    pub fn new(plan: PlanId, cycle: Cycle) -> Self {
        Self {
            step: Step::PersonalInfo,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            plan,
            addons: Vec::new(),
            cycle,
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn plan(&self) -> PlanId {
        self.plan
    }

    /// Selected add-ons in selection order
    pub fn addons(&self) -> &[AddonId] {
        &self.addons
    }

    pub fn has_addon(&self, id: AddonId) -> bool {
        self.addons.contains(&id)
    }

    pub fn cycle(&self) -> Cycle {
        self.cycle
    }

    /// Add or remove one add-on, keeping the order of earlier selections
    pub(super) fn set_addon(&mut self, id: AddonId, selected: bool) {
        set_in_order(&mut self.addons, id, selected);
    }

    pub(super) fn replace_addons(&mut self, ids: &[AddonId]) {
        self.addons.clear();
        for id in ids {
            set_in_order(&mut self.addons, *id, true);
        }
    }
}

fn set_in_order(list: &mut Vec<AddonId>, id: AddonId, selected: bool) {
    let present = list.contains(&id);
    if selected && !present {
        list.push(id);
    } else if !selected && present {
        list.retain(|a| *a != id);
    }
}

/// Personal info inputs as typed, before validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfoDraft {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub active_field_index: usize,
}

impl Default for PersonalInfoDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonalInfoDraft {
    pub fn new() -> Self {
        Self {
            name: FormField::new(Field::Name),
            email: FormField::new(Field::Email),
            phone: FormField::new(Field::Phone),
            active_field_index: 0,
        }
    }

    pub fn active_field(&self) -> Field {
        Field::from_index(self.active_field_index)
    }

    pub fn set_active_field(&mut self, field: Field) {
        self.active_field_index = field.index();
    }

    /// Move to the next input (wraps around)
    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % Field::count();
    }

    /// Move to the previous input (wraps around)
    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = Field::count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn get(&self, field: Field) -> &FormField {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    pub fn get_mut(&mut self, field: Field) -> &mut FormField {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
        }
    }
}

/// Widget values the user has not confirmed with "Next Step" yet
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub personal: PersonalInfoDraft,
    /// Radio pick on the plan step; `None` keeps the committed plan
    pub plan: Option<PlanId>,
    /// Checked add-ons in the order they were checked
    pub addons: Vec<AddonId>,
}

impl Draft {
    pub fn is_checked(&self, id: AddonId) -> bool {
        self.addons.contains(&id)
    }

    pub(super) fn set_addon(&mut self, id: AddonId, checked: bool) {
        set_in_order(&mut self.addons, id, checked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod step {
        use super::*;

        #[test]
        fn test_default_is_personal_info() {
            assert_eq!(Step::default(), Step::PersonalInfo);
        }

        #[test]
        fn test_indices_are_zero_based() {
            assert_eq!(Step::PersonalInfo.index(), 0);
            assert_eq!(Step::Summary.index(), 3);
            assert_eq!(Step::from_index(4), Some(Step::Confirmation));
            assert_eq!(Step::from_index(5), None);
        }

        #[test]
        fn test_next_and_prev() {
            assert_eq!(Step::PlanSelect.next(), Some(Step::AddonSelect));
            assert_eq!(Step::Confirmation.next(), None);
            assert_eq!(Step::PersonalInfo.prev(), Step::PersonalInfo);
            assert_eq!(Step::Confirmation.prev(), Step::Summary);
        }

        #[test]
        fn test_display_is_title_case() {
            assert_eq!(Step::PersonalInfo.to_string(), "Personal Info");
            assert_eq!(Step::AddonSelect.to_string(), "Addon Select");
        }

        #[test]
        fn test_only_confirmation_is_last() {
            assert!(Step::Confirmation.is_last());
            assert!(!Step::Summary.is_last());
        }
    }

    mod form_state {
        use super::*;

        #[test]
        fn test_defaults() {
            let state = FormState::default();
            assert_eq!(state.step(), Step::PersonalInfo);
            assert_eq!(state.plan(), PlanId::Arcade);
            assert_eq!(state.cycle(), Cycle::Monthly);
            assert!(state.name().is_empty());
            assert!(state.addons().is_empty());
        }

        #[test]
        fn test_set_addon_keeps_selection_order() {
            let mut state = FormState::default();
            state.set_addon(AddonId::LargerStorage, true);
            state.set_addon(AddonId::OnlineService, true);
            state.set_addon(AddonId::LargerStorage, true);
            assert_eq!(
                state.addons(),
                &[AddonId::LargerStorage, AddonId::OnlineService]
            );
            state.set_addon(AddonId::LargerStorage, false);
            assert_eq!(state.addons(), &[AddonId::OnlineService]);
        }

        #[test]
        fn test_replace_addons_drops_duplicates() {
            let mut state = FormState::default();
            state.replace_addons(&[
                AddonId::CustomizableProfile,
                AddonId::OnlineService,
                AddonId::CustomizableProfile,
            ]);
            assert_eq!(
                state.addons(),
                &[AddonId::CustomizableProfile, AddonId::OnlineService]
            );
        }
    }

    mod personal_info_draft {
        use super::*;

        #[test]
        fn test_next_field_cycles() {
            let mut draft = PersonalInfoDraft::new();
            assert_eq!(draft.active_field(), Field::Name);
            draft.next_field();
            assert_eq!(draft.active_field(), Field::Email);
            draft.next_field();
            draft.next_field();
            assert_eq!(draft.active_field(), Field::Name);
        }

        #[test]
        fn test_prev_field_wraps_to_last() {
            let mut draft = PersonalInfoDraft::new();
            draft.prev_field();
            assert_eq!(draft.active_field(), Field::Phone);
        }

        #[test]
        fn test_get_mut_edits_matching_field() {
            let mut draft = PersonalInfoDraft::new();
            draft.get_mut(Field::Phone).push_char('5');
            assert_eq!(draft.get(Field::Phone).as_text(), "5");
            assert!(draft.get(Field::Name).is_empty());
        }
    }
}
