//! Domain-level inputs and outputs used by the service layer.

pub mod goal {
    use shared::GoalType;

    use crate::domain::models::goal::GoalError;

    /// Input for adding a goal, as received from the client.
    #[derive(Debug, Clone, Default)]
    pub struct AddGoalCommand {
        pub goal_type: Option<String>,
        pub text: Option<String>,
    }

    impl AddGoalCommand {
        /// A missing type means weekly; anything other than weekly/daily is rejected.
        pub fn resolve_type(&self) -> Result<GoalType, GoalError> {
            match self.goal_type.as_deref() {
                None => Ok(GoalType::default()),
                Some(raw) => raw
                    .parse::<GoalType>()
                    .map_err(|e| GoalError::UnknownType(e.0)),
            }
        }
    }
}

pub mod dashboard {
    use crate::domain::models::goal::DomainGoal;

    /// Result of assembling the dashboard.
    #[derive(Debug, Clone)]
    pub struct GetDashboardResult {
        pub greeting: String,
        pub quote: String,
        pub date: String,
        pub weekly_progress: u8,
        pub daily_progress: u8,
        pub weekly_goals: Vec<DomainGoal>,
        pub daily_goals: Vec<DomainGoal>,
    }
}
