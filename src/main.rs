//! scholar-track - prints a JSON progress report for one student.
//!
//! Usage: `scholar-track <user-id> [year]`

use serde::Serialize;
use std::error::Error;
use std::sync::Arc;

use scholar_track::adapters::{
    load_pillar_catalog, FileActivityStore, FileGoalRepository, InMemoryPillarCatalog, SystemClock,
};
use scholar_track::application::{
    GetGoalAnalyticsHandler, GetGoalAnalyticsQuery, GetMonthlyRollupHandler,
    GetMonthlyRollupQuery, GetProgressSummaryHandler, GetProgressSummaryQuery, ListGoalsHandler,
    ListGoalsQuery, ProgressSummary,
};
use scholar_track::config::{AppConfig, LoggingConfig};
use scholar_track::domain::foundation::UserId;
use scholar_track::domain::goal::{Goal, GoalAnalytics};
use scholar_track::domain::progress::MonthlyBucket;
use scholar_track::ports::{ActivityStore, Clock, GoalRepository, PillarCatalog};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProgressReport {
    summary: ProgressSummary,
    monthly: Vec<MonthlyBucket>,
    goals: Vec<Goal>,
    goal_analytics: GoalAnalytics,
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error>> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter()?)
        .with_writer(std::io::stderr);

    let installed = if logging.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    installed.map_err(|e| e as Box<dyn Error>)
}

fn parse_args() -> Result<(UserId, Option<i32>), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let user = args.next().ok_or("usage: scholar-track <user-id> [year]")?;
    let year = args.next().map(|y| y.parse::<i32>()).transpose()?;
    Ok((UserId::new(user)?, year))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    init_tracing(&config.logging)?;

    let (user_id, year) = parse_args()?;

    let data_dir = &config.storage.data_dir;
    let activities: Arc<dyn ActivityStore> = Arc::new(FileActivityStore::new(data_dir));
    let goals: Arc<dyn GoalRepository> = Arc::new(FileGoalRepository::new(data_dir));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let catalog: Arc<dyn PillarCatalog> = match &config.storage.pillar_catalog {
        Some(path) => Arc::new(load_pillar_catalog(path).await?),
        None => {
            tracing::warn!("no pillar catalog configured, pillar breakdown will be empty");
            Arc::new(InMemoryPillarCatalog::empty())
        }
    };

    tracing::info!(user_id = %user_id, data_dir = %data_dir.display(), "building progress report");

    let summary = GetProgressSummaryHandler::new(activities.clone(), catalog)
        .handle(GetProgressSummaryQuery {
            user_id: user_id.clone(),
            year,
            period: None,
        })
        .await?;
    let monthly = GetMonthlyRollupHandler::new(activities, clock)
        .with_default_months(config.report.trailing_months)
        .handle(GetMonthlyRollupQuery::current(user_id.clone()))
        .await?;
    let user_goals = ListGoalsHandler::new(goals.clone())
        .handle(ListGoalsQuery::all(user_id.clone()))
        .await?;
    let goal_analytics = GetGoalAnalyticsHandler::new(goals)
        .handle(GetGoalAnalyticsQuery { user_id })
        .await?;

    let report = ProgressReport {
        summary,
        monthly,
        goals: user_goals,
        goal_analytics,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
