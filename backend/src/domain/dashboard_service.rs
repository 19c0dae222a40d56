//! Read-only view data for the dashboard page: greeting, quote, date and the
//! completion progress of both goal lists.

use chrono::{DateTime, Local, TimeZone, Timelike};
use std::fmt::Display;
use std::sync::Arc;

use crate::domain::commands::dashboard::GetDashboardResult;
use crate::domain::goal_service::GoalService;
use crate::domain::models::goal::{DomainGoal, DomainGoalCollection, GoalError};
use crate::domain::quotes::QuoteBook;

pub const MORNING_GREETING: &str = "Доброе утро, стратег";
pub const AFTERNOON_GREETING: &str = "Добрый день, лидер";
pub const EVENING_GREETING: &str = "Добрый вечер, CEO";

/// Percentage of completed goals, rounded down. An empty list is 0%.
pub fn compute_progress(goals: &[DomainGoal]) -> u8 {
    if goals.is_empty() {
        return 0;
    }
    let completed = goals.iter().filter(|g| g.completed).count();
    // completed <= len, so the result is at most 100
    (completed * 100 / goals.len()) as u8
}

/// Greeting for an hour of the day: [0,12) morning, [12,18) afternoon, [18,24) evening
pub fn greeting_for(hour: u32) -> &'static str {
    match hour {
        0..=11 => MORNING_GREETING,
        12..=17 => AFTERNOON_GREETING,
        _ => EVENING_GREETING,
    }
}

/// Weekday, day of month and month name, e.g. "Monday, 20 January"
pub fn format_date<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%A, %d %B").to_string()
}

pub fn format_today() -> String {
    format_date(&Local::now())
}

/// Assembles the dashboard from the current goal snapshot
#[derive(Clone)]
pub struct DashboardService {
    goal_service: GoalService,
    quote_book: Arc<QuoteBook>,
}

impl DashboardService {
    pub fn new(goal_service: GoalService, quote_book: Arc<QuoteBook>) -> Self {
        Self {
            goal_service,
            quote_book,
        }
    }

    pub async fn get_dashboard(&self) -> Result<GetDashboardResult, GoalError> {
        self.get_dashboard_at(&Local::now()).await
    }

    /// Dashboard as it looks at `now`
    pub async fn get_dashboard_at<Tz>(
        &self,
        now: &DateTime<Tz>,
    ) -> Result<GetDashboardResult, GoalError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let collection = self.goal_service.snapshot().await?;
        Ok(self.build_dashboard(collection, now))
    }

    pub fn build_dashboard<Tz>(
        &self,
        collection: DomainGoalCollection,
        now: &DateTime<Tz>,
    ) -> GetDashboardResult
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        GetDashboardResult {
            greeting: greeting_for(now.hour()).to_string(),
            quote: self.quote_book.random_quote().to_string(),
            date: format_date(now),
            weekly_progress: compute_progress(&collection.weekly_goals),
            daily_progress: compute_progress(&collection.daily_goals),
            weekly_goals: collection.weekly_goals,
            daily_goals: collection.daily_goals,
        }
    }
}
