//! # Domain Module
//!
//! Business logic of the goal dashboard, independent of HTTP and of the
//! storage format.
//!
//! ## Module Organization
//!
//! - **goal_service**: adding, toggling and deleting goals (the goal store)
//! - **dashboard_service**: greeting, quote, date and progress for the dashboard
//! - **quotes**: the immutable quote source loaded at startup
//! - **models**: domain goal types and errors
//! - **commands**: service inputs and results
//!
//! ## Business Rules
//!
//! - Goal text is trimmed and never stored empty
//! - Goal ids are unique across the weekly and daily lists
//! - A goal never moves between lists
//! - Progress is the floor percentage of completed goals, 0 for an empty list

pub mod commands;
pub mod dashboard_service;
pub mod goal_service;
pub mod models;
pub mod quotes;

pub use commands::*;
pub use dashboard_service::*;
pub use goal_service::*;
pub use quotes::*;
