//! Final snapshot handed off at confirmation

use super::{AddonId, Cycle, FormState, Money, PlanId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Everything the user confirmed, frozen at `confirm()` time
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub session_id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: PlanId,
    pub addons: Vec<AddonId>,
    pub cycle: Cycle,
    pub total: Money,
}

impl Submission {
    pub fn from_state(session_id: Uuid, state: &FormState, total: Money) -> Self {
        Self {
            session_id,
            submitted_at: Utc::now(),
            name: state.name().to_string(),
            email: state.email().to_string(),
            phone: state.phone().to_string(),
            plan: state.plan(),
            addons: state.addons().to_vec(),
            cycle: state.cycle(),
            total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_ids_as_strings() {
        let mut state = FormState::new(PlanId::Pro, Cycle::Yearly);
        state.replace_addons(&[AddonId::OnlineService]);
        let submission = Submission::from_state(Uuid::new_v4(), &state, Money::new(160));

        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["plan"], "pro");
        assert_eq!(json["cycle"], "yearly");
        assert_eq!(json["addons"][0], "online-service");
        assert_eq!(json["total"], 160);
    }
}
