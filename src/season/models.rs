use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::result::models::MatchResult;

/// A competition grouping results, e.g. a league or a cup run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Season {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    pub created_at: DateTime<Utc>,
}

impl Season {
    pub fn new(kind: String, title: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            title,
            results: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn add_result(&mut self, result: MatchResult) {
        self.results.push(result);
    }
}
