use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::{
    models::Season,
    repository::SeasonRepository,
    types::{SeasonCreateRequest, SeasonSummary},
};
use crate::shared::AppError;
use crate::standings::SeasonStatistics;

/// Loads a season or fails with NotFound
pub async fn require_season(
    repository: &(dyn SeasonRepository + Send + Sync),
    season_id: &str,
) -> Result<Season, AppError> {
    repository
        .get_season(season_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Get season error: {} not found", season_id)))
}

/// Service for seasons and their computed statistics
pub struct SeasonService {
    repository: Arc<dyn SeasonRepository + Send + Sync>,
}

impl SeasonService {
    pub fn new(repository: Arc<dyn SeasonRepository + Send + Sync>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn create_season(&self, request: SeasonCreateRequest) -> Result<Season, AppError> {
        if request.title.trim().is_empty() {
            return Err(AppError::BadRequest("Season title is required".to_string()));
        }

        let season = Season::new(request.kind, request.title);
        self.repository.create_season(&season).await?;

        info!(season_id = %season.id, kind = %season.kind, "Season created");
        Ok(season)
    }

    pub async fn list_seasons(&self) -> Result<Vec<SeasonSummary>, AppError> {
        let seasons = self.repository.list_seasons().await?;
        Ok(seasons.iter().map(SeasonSummary::from).collect())
    }

    /// Standings and top scorers for a season, rebuilt from its results
    #[instrument(skip(self))]
    pub async fn statistics(&self, season_id: &str) -> Result<SeasonStatistics, AppError> {
        let season = require_season(self.repository.as_ref(), season_id).await?;

        let statistics = SeasonStatistics::compute(&season.results).map_err(|e| {
            warn!(season_id = %season_id, error = %e, "Season holds a malformed result");
            AppError::from(e)
        })?;

        info!(
            season_id = %season_id,
            result_count = season.results.len(),
            standing_rows = statistics.standing.len(),
            scorer_rows = statistics.stats.len(),
            "Season statistics computed"
        );
        Ok(statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::models::MatchResult;
    use crate::season::repository::InMemorySeasonRepository;

    fn service_with(seasons: Vec<Season>) -> SeasonService {
        SeasonService::new(Arc::new(InMemorySeasonRepository::with_seasons(seasons)))
    }

    #[tokio::test]
    async fn test_create_and_list_summaries() {
        let service = service_with(Vec::new());
        let season = service
            .create_season(SeasonCreateRequest {
                kind: "league".to_string(),
                title: "Autumn".to_string(),
            })
            .await
            .unwrap();

        let summaries = service.list_seasons().await.unwrap();
        assert_eq!(
            summaries,
            vec![SeasonSummary {
                id: season.id,
                kind: "league".to_string(),
                title: "Autumn".to_string(),
                result_count: 0,
            }]
        );
    }

    #[tokio::test]
    async fn test_create_requires_title() {
        let service = service_with(Vec::new());
        let result = service
            .create_season(SeasonCreateRequest {
                kind: "league".to_string(),
                title: "".to_string(),
            })
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn test_statistics_for_missing_season() {
        let service = service_with(Vec::new());
        let result = service.statistics("missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_statistics_from_results() {
        let mut season = Season::new("league".to_string(), "Autumn".to_string());
        season.add_result(MatchResult::between("A", "B", vec![2, 0]));
        season.add_result(MatchResult::between("B", "A", vec![1, 1]));
        let season_id = season.id.clone();

        let statistics = service_with(vec![season]).statistics(&season_id).await.unwrap();
        assert_eq!(statistics.standing.len(), 2);
        assert_eq!(statistics.standing[0].manager, "A");
        assert_eq!(statistics.standing[0].points, 4);
        assert!(statistics.stats.is_empty());
    }

    #[tokio::test]
    async fn test_statistics_with_malformed_result() {
        let mut season = Season::new("league".to_string(), "Broken".to_string());
        season.add_result(MatchResult::between("A", "B", vec![2]));
        let season_id = season.id.clone();

        let result = service_with(vec![season]).statistics(&season_id).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
