//! Test utilities: an isolated goal record per test, cleaned up on drop.

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;

use super::goal_repository::GoalRepository;
use crate::domain::{DashboardService, GoalService, QuoteBook};
use crate::AppState;

/// RAII test environment owning a temporary directory with one goal record
///
/// The record itself is not created until something saves to it.
pub struct TestEnvironment {
    /// Kept alive so the directory survives until the environment is dropped
    _temp_dir: TempDir,
    pub base_path: PathBuf,
    pub goals_file: PathBuf,
    pub repository: GoalRepository,
    goal_service: GoalService,
}

impl TestEnvironment {
    /// The only quote served by [`TestEnvironment::app_state`]
    pub const QUOTE: &'static str = "Discipline beats motivation";

    pub fn new() -> Result<Self> {
        Self::from_temp_dir(TempDir::new()?)
    }

    /// Same as [`TestEnvironment::new`] with a recognisable directory name
    pub fn new_with_prefix(prefix: &str) -> Result<Self> {
        Self::from_temp_dir(TempDir::with_prefix(prefix)?)
    }

    fn from_temp_dir(temp_dir: TempDir) -> Result<Self> {
        let base_path = temp_dir.path().to_path_buf();
        let goals_file = base_path.join("user_goals.json");
        let repository = GoalRepository::new(&goals_file);
        let goal_service = GoalService::new(Arc::new(repository.clone()));

        Ok(TestEnvironment {
            _temp_dir: temp_dir,
            base_path,
            goals_file,
            repository,
            goal_service,
        })
    }

    pub fn base_directory(&self) -> &Path {
        &self.base_path
    }

    /// Goal service sharing this environment's record and write lock
    pub fn goal_service(&self) -> GoalService {
        self.goal_service.clone()
    }

    /// Application state backed by this environment and a single fixed quote
    pub fn app_state(&self) -> AppState {
        let quote_book = QuoteBook::new([Self::QUOTE]).expect("fixed quote is not blank");
        AppState {
            goal_service: self.goal_service(),
            dashboard_service: DashboardService::new(self.goal_service(), Arc::new(quote_book)),
        }
    }

    /// Raw record contents, `None` when nothing has been written yet
    pub fn read_raw(&self) -> Option<String> {
        std::fs::read_to_string(&self.goals_file).ok()
    }

    pub fn write_raw(&self, contents: &str) -> Result<()> {
        std::fs::write(&self.goals_file, contents)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_cleanup() -> Result<()> {
        let base_path;

        {
            let env = TestEnvironment::new_with_prefix("goal_dashboard_test_")?;
            base_path = env.base_directory().to_path_buf();
            assert!(base_path.exists());

            env.write_raw("{}")?;
            assert_eq!(env.read_raw().as_deref(), Some("{}"));
        }

        assert!(!base_path.exists());
        Ok(())
    }
}
