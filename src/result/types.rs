use serde::{Deserialize, Serialize};

/// One scorer entry as submitted with a result
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScorerRequest {
    pub player: String,  // Catalog player ID
    pub manager: String, // Manager ID whose roster holds the player
    pub count: u32,
}

/// Request payload for recording a fixture
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResultRequest {
    pub season: String,
    pub home: String,
    pub away: String,
    pub score: Vec<u32>,
    #[serde(default)]
    pub scorer: Vec<ScorerRequest>,
}
