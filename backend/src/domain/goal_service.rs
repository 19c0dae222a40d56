//! Goal service domain logic.
//!
//! Owns every mutation of the goal collection. Each mutation re-loads the
//! persisted record, changes the local copy and writes it back in full, so
//! the file on disk is always the source of truth.
//!
//! ## Business Rules
//!
//! - Goal text is trimmed and must not be empty
//! - Ids come from the millisecond clock and are never reused
//! - Toggle flips `completed` and nothing else
//! - Delete is idempotent and always rewrites the record
//! - Mutations are serialized through one write lock; a failed save leaves the
//!   previous record in place and is reported to the caller

use chrono::{Local, Utc};
use shared::GoalType;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::domain::commands::goal::AddGoalCommand;
use crate::domain::models::goal::{DomainGoal, DomainGoalCollection, GoalError};
use crate::storage::GoalStorage;

/// Service for adding, toggling and deleting goals
#[derive(Clone)]
pub struct GoalService {
    storage: Arc<dyn GoalStorage>,
    write_lock: Arc<Mutex<()>>,
}

impl GoalService {
    pub fn new(storage: Arc<dyn GoalStorage>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current persisted collection
    pub async fn snapshot(&self) -> Result<DomainGoalCollection, GoalError> {
        Ok(self.storage.load().await?)
    }

    /// Add a goal from raw client input
    pub async fn create_goal(&self, command: AddGoalCommand) -> Result<DomainGoal, GoalError> {
        let goal_type = command.resolve_type()?;
        self.add_goal(goal_type, command.text.as_deref().unwrap_or_default())
            .await
    }

    /// Append a new, not yet completed goal to the `goal_type` list
    pub async fn add_goal(&self, goal_type: GoalType, text: &str) -> Result<DomainGoal, GoalError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(GoalError::EmptyText);
        }

        let _guard = self.write_lock.lock().await;
        let mut collection = self.storage.load().await?;

        let goal = DomainGoal {
            id: DomainGoal::generate_id(Utc::now().timestamp_millis(), collection.max_id()),
            text: text.to_string(),
            completed: false,
            created_at: Local::now().to_rfc3339(),
        };
        collection.push(goal_type, goal.clone());

        self.storage.save(&collection).await?;

        info!("Added {} goal {}: {:?}", goal_type, goal.id, goal.text);
        Ok(goal)
    }

    /// Flip `completed` on the goal with `id`. Returns false, without writing,
    /// when no such goal exists.
    pub async fn toggle_goal(&self, id: i64) -> Result<bool, GoalError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.storage.load().await?;

        let completed = match collection.find_mut(id) {
            Some(goal) => {
                goal.toggle();
                goal.completed
            }
            None => {
                debug!("Toggle requested for unknown goal {}", id);
                return Ok(false);
            }
        };

        self.storage.save(&collection).await?;

        info!("Goal {} is now {}", id, if completed { "completed" } else { "open" });
        Ok(true)
    }

    /// Remove the goal with `id` from whichever list holds it
    pub async fn delete_goal(&self, id: i64) -> Result<(), GoalError> {
        let _guard = self.write_lock.lock().await;
        let mut collection = self.storage.load().await?;

        let removed = collection.remove(id);
        self.storage.save(&collection).await?;

        info!("Deleted goal {} ({} removed)", id, removed);
        Ok(())
    }
}
