use serde::{Deserialize, Serialize};

use super::models::Season;

/// Request payload for creating a season
#[derive(Debug, Deserialize, Serialize)]
pub struct SeasonCreateRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
}

/// Request payload for season statistics
#[derive(Debug, Deserialize, Serialize)]
pub struct StatisticRequest {
    pub season: String,
}

/// Season listing entry without the result history
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SeasonSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub result_count: usize,
}

impl From<&Season> for SeasonSummary {
    fn from(season: &Season) -> Self {
        Self {
            id: season.id.clone(),
            kind: season.kind.clone(),
            title: season.title.clone(),
            result_count: season.results.len(),
        }
    }
}
