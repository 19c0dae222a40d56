use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single trackable goal as it travels over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Millisecond-epoch derived identifier, unique across both lists
    pub id: i64,
    /// Trimmed, non-empty goal text
    pub text: String,
    pub completed: bool,
    /// Creation timestamp (RFC 3339), never changes after creation
    pub created_at: String,
}

/// Which list a goal belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    #[default]
    Weekly,
    Daily,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Weekly => "weekly",
            GoalType::Daily => "daily",
        }
    }
}

impl fmt::Display for GoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownGoalType(pub String);

impl fmt::Display for UnknownGoalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown goal type: {}", self.0)
    }
}

impl std::error::Error for UnknownGoalType {}

impl FromStr for GoalType {
    type Err = UnknownGoalType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(GoalType::Weekly),
            "daily" => Ok(GoalType::Daily),
            _ => Err(UnknownGoalType(s.to_string())),
        }
    }
}

/// Everything the dashboard page renders in one round trip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub greeting: String,
    pub quote: String,
    /// Human readable date, e.g. "Monday, 19 October"
    pub date: String,
    /// Floor percentage of completed weekly goals (0 when the list is empty)
    pub weekly_progress: u8,
    /// Floor percentage of completed daily goals (0 when the list is empty)
    pub daily_progress: u8,
    pub weekly_goals: Vec<Goal>,
    pub daily_goals: Vec<Goal>,
}

/// Body of POST /api/add-goal
///
/// Both fields are optional on the wire: a missing type means weekly and a
/// missing text is rejected as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddGoalRequest {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub goal_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddGoalResponse {
    pub success: bool,
    pub goal: Goal,
}

/// Plain acknowledgement for toggle and delete
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
