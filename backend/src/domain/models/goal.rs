use serde::{Deserialize, Serialize};
use shared::GoalType;

use crate::storage::StorageError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DomainGoal {
    pub id: i64,
    pub text: String,
    pub completed: bool,
    pub created_at: String,
}

impl DomainGoal {
    /// Millisecond timestamp id, bumped past `last_id` when the clock has not
    /// moved on since the newest stored goal.
    pub fn generate_id(now_millis: i64, last_id: Option<i64>) -> i64 {
        match last_id {
            Some(last) if last >= now_millis => last + 1,
            _ => now_millis,
        }
    }

    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// Both goal lists, persisted together as one record
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DomainGoalCollection {
    pub weekly_goals: Vec<DomainGoal>,
    pub daily_goals: Vec<DomainGoal>,
}

impl DomainGoalCollection {
    pub fn goals(&self, goal_type: GoalType) -> &[DomainGoal] {
        match goal_type {
            GoalType::Weekly => &self.weekly_goals,
            GoalType::Daily => &self.daily_goals,
        }
    }

    fn goals_mut(&mut self, goal_type: GoalType) -> &mut Vec<DomainGoal> {
        match goal_type {
            GoalType::Weekly => &mut self.weekly_goals,
            GoalType::Daily => &mut self.daily_goals,
        }
    }

    /// Append to the end of the selected list
    pub fn push(&mut self, goal_type: GoalType, goal: DomainGoal) {
        self.goals_mut(goal_type).push(goal);
    }

    /// Largest id across both lists
    pub fn max_id(&self) -> Option<i64> {
        self.weekly_goals
            .iter()
            .chain(self.daily_goals.iter())
            .map(|g| g.id)
            .max()
    }

    /// First goal with `id`, weekly list searched before daily
    pub fn find_mut(&mut self, id: i64) -> Option<&mut DomainGoal> {
        self.weekly_goals
            .iter_mut()
            .chain(self.daily_goals.iter_mut())
            .find(|g| g.id == id)
    }

    /// Drop every goal carrying `id` from both lists, returning how many went
    pub fn remove(&mut self, id: i64) -> usize {
        let before = self.len();
        self.weekly_goals.retain(|g| g.id != id);
        self.daily_goals.retain(|g| g.id != id);
        before - self.len()
    }

    pub fn len(&self) -> usize {
        self.weekly_goals.len() + self.daily_goals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("goal text must not be empty")]
    EmptyText,
    #[error("unknown goal type: {0}")]
    UnknownType(String),
    #[error("goal not found")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
