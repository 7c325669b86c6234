use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::MatchResult,
    repository::ResultRepository,
    types::{ResultRequest, ScorerRequest},
};
use crate::manager::{models::Manager, repository::ManagerRepository, service::require_manager};
use crate::season::{repository::SeasonRepository, service::require_season};
use crate::shared::AppError;

/// Service for recording fixtures into a season
pub struct ResultService {
    results: Arc<dyn ResultRepository + Send + Sync>,
    managers: Arc<dyn ManagerRepository + Send + Sync>,
    seasons: Arc<dyn SeasonRepository + Send + Sync>,
}

impl ResultService {
    pub fn new(
        results: Arc<dyn ResultRepository + Send + Sync>,
        managers: Arc<dyn ManagerRepository + Send + Sync>,
        seasons: Arc<dyn SeasonRepository + Send + Sync>,
    ) -> Self {
        Self {
            results,
            managers,
            seasons,
        }
    }

    /// Records a result and appends it to both managers and the season
    #[instrument(skip(self))]
    pub async fn record_result(&self, request: ResultRequest) -> Result<MatchResult, AppError> {
        validate(&request)?;

        let home = require_manager(self.managers.as_ref(), &request.home).await?;
        let away = require_manager(self.managers.as_ref(), &request.away).await?;
        let season = require_season(self.seasons.as_ref(), &request.season).await?;

        let mut result = MatchResult::between(&home.name, &away.name, request.score.clone());
        result.season = season.id.clone();
        result.home = home.id.clone();
        result.away = away.id.clone();
        result.season_type = season.kind.clone();
        result.season_title = season.title.clone();

        for entry in &request.scorer {
            result = attribute_scorer(result, entry, &home, &away);
        }

        self.results.create_result(&result).await?;
        self.managers.append_result(&home.id, &result).await?;
        self.managers.append_result(&away.id, &result).await?;
        self.seasons.append_result(&season.id, &result).await?;

        info!(
            result_id = %result.id,
            season_id = %season.id,
            home = %home.name,
            away = %away.name,
            score = ?result.score,
            "Result recorded"
        );
        Ok(result)
    }
}

/// Highest goal count accepted for one side or one scorer in a single match
pub const MAX_GOALS: u32 = 99;

fn validate(request: &ResultRequest) -> Result<(), AppError> {
    if request.score.len() != 2 {
        return Err(AppError::BadRequest(format!(
            "score must hold exactly two values, got {}",
            request.score.len()
        )));
    }
    if request.score.iter().any(|goals| *goals > MAX_GOALS) {
        return Err(AppError::BadRequest(format!(
            "score values must not exceed {}",
            MAX_GOALS
        )));
    }
    if request.home == request.away {
        return Err(AppError::BadRequest(
            "home and away managers must differ".to_string(),
        ));
    }
    if let Some(entry) = request.scorer.iter().find(|s| s.count == 0) {
        return Err(AppError::BadRequest(format!(
            "scorer {} has a goal count of zero",
            entry.player
        )));
    }
    if let Some(entry) = request.scorer.iter().find(|s| s.count > MAX_GOALS) {
        return Err(AppError::BadRequest(format!(
            "scorer {} has a goal count above {}",
            entry.player, MAX_GOALS
        )));
    }
    Ok(())
}

/// Looks the scorer up in the roster of the side it was submitted for
///
/// Entries naming the home manager go to the home roster, everything else
/// to the away roster. Players missing from that roster are skipped.
fn attribute_scorer(
    result: MatchResult,
    entry: &ScorerRequest,
    home: &Manager,
    away: &Manager,
) -> MatchResult {
    let is_home = entry.manager == home.id;
    let roster = if is_home { home } else { away };

    match roster.roster_player(&entry.player) {
        Some(player) if is_home => result.with_home_scorer(player.clone(), entry.count),
        Some(player) => result.with_away_scorer(player.clone(), entry.count),
        None => {
            warn!(
                player_id = %entry.player,
                manager_id = %roster.id,
                "Scorer not in roster, skipping"
            );
            result
        }
    }
}
