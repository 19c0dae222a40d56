//! # JSON Goal Repository
//!
//! Stores the whole goal collection in a single human-readable JSON file.
//!
//! ## File Format
//!
//! ```json
//! {
//!   "weekly_goals": [
//!     {"id": 1737367200000, "text": "Close Q1 hiring", "completed": false, "created_at": "2025-01-20T10:00:00+03:00"}
//!   ],
//!   "daily_goals": []
//! }
//! ```
//!
//! ## Features
//!
//! - Missing file reads as an empty collection; the file is created on first save
//! - Full rewrite on every save through a temp file and an atomic rename
//! - Unparseable content is reported as corrupt and never overwritten by a load

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::models::goal::{DomainGoal, DomainGoalCollection};
use crate::storage::{GoalStorage, StorageError};

/// On-disk shape of a single goal
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GoalRecord {
    id: i64,
    text: String,
    completed: bool,
    created_at: String,
}

impl From<&DomainGoal> for GoalRecord {
    fn from(goal: &DomainGoal) -> Self {
        GoalRecord {
            id: goal.id,
            text: goal.text.clone(),
            completed: goal.completed,
            created_at: goal.created_at.clone(),
        }
    }
}

impl From<GoalRecord> for DomainGoal {
    fn from(record: GoalRecord) -> Self {
        DomainGoal {
            id: record.id,
            text: record.text,
            completed: record.completed,
            created_at: record.created_at,
        }
    }
}

/// On-disk shape of the whole collection
#[derive(Debug, Default, Serialize, Deserialize)]
struct GoalCollectionRecord {
    #[serde(default)]
    weekly_goals: Vec<GoalRecord>,
    #[serde(default)]
    daily_goals: Vec<GoalRecord>,
}

impl From<&DomainGoalCollection> for GoalCollectionRecord {
    fn from(collection: &DomainGoalCollection) -> Self {
        GoalCollectionRecord {
            weekly_goals: collection.weekly_goals.iter().map(GoalRecord::from).collect(),
            daily_goals: collection.daily_goals.iter().map(GoalRecord::from).collect(),
        }
    }
}

impl From<GoalCollectionRecord> for DomainGoalCollection {
    fn from(record: GoalCollectionRecord) -> Self {
        DomainGoalCollection {
            weekly_goals: record.weekly_goals.into_iter().map(DomainGoal::from).collect(),
            daily_goals: record.daily_goals.into_iter().map(DomainGoal::from).collect(),
        }
    }
}

/// File-backed goal repository
#[derive(Debug, Clone)]
pub struct GoalRepository {
    goals_file: PathBuf,
}

impl GoalRepository {
    /// Create a repository persisting to `goals_file`. Nothing is touched on disk yet.
    pub fn new<P: Into<PathBuf>>(goals_file: P) -> Self {
        Self {
            goals_file: goals_file.into(),
        }
    }

    pub fn goals_file(&self) -> &Path {
        &self.goals_file
    }

    fn temp_file_path(&self) -> PathBuf {
        let mut name = self
            .goals_file
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.goals_file.with_file_name(name)
    }

    fn write_error(&self, source: io::Error) -> StorageError {
        StorageError::Write {
            path: self.goals_file.clone(),
            source,
        }
    }

    /// Write `content` next to the record and rename it into place.
    fn write_atomically(&self, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.goals_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let temp_file_path = self.temp_file_path();
        let result = (|| -> io::Result<()> {
            let mut file = std::fs::File::create(&temp_file_path)?;
            file.write_all(content)?;
            file.sync_all()?;
            std::fs::rename(&temp_file_path, &self.goals_file)
        })();

        if result.is_err() {
            let _ = std::fs::remove_file(&temp_file_path);
        }
        result
    }
}

#[async_trait]
impl GoalStorage for GoalRepository {
    async fn load(&self) -> Result<DomainGoalCollection, StorageError> {
        let contents = match tokio::fs::read(&self.goals_file).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No goal record at {:?} yet, starting empty", self.goals_file);
                return Ok(DomainGoalCollection::default());
            }
            Err(source) => {
                return Err(StorageError::Read {
                    path: self.goals_file.clone(),
                    source,
                })
            }
        };

        // Bytes that are not UTF-8 JSON are corrupt content, not a read failure
        let record: GoalCollectionRecord = serde_json::from_slice(&contents).map_err(|source| {
            warn!("Goal record {:?} could not be parsed: {}", self.goals_file, source);
            StorageError::Corrupt {
                path: self.goals_file.clone(),
                source,
            }
        })?;

        Ok(record.into())
    }

    async fn save(&self, collection: &DomainGoalCollection) -> Result<(), StorageError> {
        let record = GoalCollectionRecord::from(collection);
        let content = serde_json::to_string_pretty(&record).map_err(StorageError::Encode)?;

        let repository = self.clone();
        tokio::task::spawn_blocking(move || repository.write_atomically(content.as_bytes()))
            .await
            .map_err(|e| {
                self.write_error(io::Error::other(format!("spawn_blocking failed: {}", e)))
            })?
            .map_err(|e| self.write_error(e))?;

        debug!(
            "Wrote {} weekly and {} daily goals to {:?}",
            collection.weekly_goals.len(),
            collection.daily_goals.len(),
            self.goals_file
        );
        Ok(())
    }
}
