//! JSON flat-file storage backend.

pub mod goal_repository;

#[cfg(test)]
pub mod test_utils;

pub use goal_repository::GoalRepository;
