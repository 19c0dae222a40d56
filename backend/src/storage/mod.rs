//! # Storage Module
//!
//! Persistence of the goal collection.
//!
//! The domain layer only talks to the [`GoalStorage`] trait; the JSON flat
//! file repository in [`json`] is the implementation used by the server.
//! The whole collection is read on every load and rewritten in full on every
//! save, which is fine for lists of tens of goals.

pub mod json;
pub mod traits;

pub use json::GoalRepository;
pub use traits::*;
