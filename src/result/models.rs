use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::player::models::Player;

/// Goals attributed to one player within one match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scorer {
    pub player: Player,
    pub count: u32,
}

impl Scorer {
    pub fn new(player: Player, count: u32) -> Self {
        Self { player, count }
    }
}

/// One completed fixture between two managers
///
/// Manager names and season metadata are copied in at record time so a
/// season's result list can be aggregated without further lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub id: String,
    pub season: String, // Season ID
    pub home: String,   // Home manager ID
    pub away: String,   // Away manager ID
    pub season_type: String,
    pub season_title: String,
    pub home_manager_name: String,
    pub away_manager_name: String,
    pub score: Vec<u32>, // [home_goals, away_goals]
    #[serde(default)]
    pub home_scorers: Vec<Scorer>,
    #[serde(default)]
    pub away_scorers: Vec<Scorer>,
    pub recorded_at: DateTime<Utc>,
}

impl MatchResult {
    /// Creates a result between two named managers with a fresh ID
    pub fn between(home_manager_name: &str, away_manager_name: &str, score: Vec<u32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            season: String::new(),
            home: String::new(),
            away: String::new(),
            season_type: String::new(),
            season_title: String::new(),
            home_manager_name: home_manager_name.to_string(),
            away_manager_name: away_manager_name.to_string(),
            score,
            home_scorers: Vec::new(),
            away_scorers: Vec::new(),
            recorded_at: Utc::now(),
        }
    }

    pub fn with_home_scorer(mut self, player: Player, count: u32) -> Self {
        self.home_scorers.push(Scorer::new(player, count));
        self
    }

    pub fn with_away_scorer(mut self, player: Player, count: u32) -> Self {
        self.away_scorers.push(Scorer::new(player, count));
        self
    }
}
