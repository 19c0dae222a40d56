pub mod dashboard_mapper;
pub mod goal_mapper;
