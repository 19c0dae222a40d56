use shared::{AddGoalRequest, AddGoalResponse, Goal};

use crate::domain::commands::goal::AddGoalCommand;
use crate::domain::models::goal::DomainGoal;

pub struct GoalMapper;

impl GoalMapper {
    /// Convert domain DomainGoal to shared Goal DTO
    pub fn to_dto(domain: DomainGoal) -> Goal {
        Goal {
            id: domain.id,
            text: domain.text,
            completed: domain.completed,
            created_at: domain.created_at,
        }
    }

    pub fn to_dto_list(domain_goals: Vec<DomainGoal>) -> Vec<Goal> {
        domain_goals.into_iter().map(Self::to_dto).collect()
    }

    pub fn to_add_goal_command(request: AddGoalRequest) -> AddGoalCommand {
        AddGoalCommand {
            goal_type: request.goal_type,
            text: request.text,
        }
    }

    pub fn to_add_goal_response(domain_goal: DomainGoal) -> AddGoalResponse {
        AddGoalResponse {
            success: true,
            goal: Self::to_dto(domain_goal),
        }
    }
}
