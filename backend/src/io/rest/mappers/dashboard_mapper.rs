use shared::DashboardResponse;

use super::goal_mapper::GoalMapper;
use crate::domain::commands::dashboard::GetDashboardResult;

pub struct DashboardMapper;

impl DashboardMapper {
    pub fn to_dashboard_response(result: GetDashboardResult) -> DashboardResponse {
        DashboardResponse {
            greeting: result.greeting,
            quote: result.quote,
            date: result.date,
            weekly_progress: result.weekly_progress,
            daily_progress: result.daily_progress,
            weekly_goals: GoalMapper::to_dto_list(result.weekly_goals),
            daily_goals: GoalMapper::to_dto_list(result.daily_goals),
        }
    }
}
