use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::player::models::Player;
use crate::result::models::MatchResult;

/// A player-controlled team: roster, point balance and match history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manager {
    pub id: String, // UUID v4 as string
    pub name: String,
    pub points: u32, // Spendable balance, never negative
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub results: Vec<MatchResult>,
    pub created_at: DateTime<Utc>,
}

impl Manager {
    /// Creates a manager with an empty roster and no points
    pub fn new(name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            points: 0,
            players: Vec::new(),
            results: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn has_player(&self, player_id: &str) -> bool {
        self.players.iter().any(|p| p.id == player_id)
    }

    pub fn roster_player(&self, player_id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == player_id)
    }

    /// Adds a player to the roster unless already present
    pub fn add_player(&mut self, player: Player) -> bool {
        if self.has_player(&player.id) {
            return false;
        }
        self.players.push(player);
        true
    }

    /// Removes a player from the roster, returning whether it was there
    pub fn remove_player(&mut self, player_id: &str) -> bool {
        let before = self.players.len();
        self.players.retain(|p| p.id != player_id);
        self.players.len() != before
    }

    pub fn credit(&mut self, points: u32) {
        self.points = self.points.saturating_add(points);
    }

    /// Deducts points; refuses when the balance would go negative
    pub fn spend(&mut self, points: u32) -> bool {
        match self.points.checked_sub(points) {
            Some(remaining) => {
                self.points = remaining;
                true
            }
            None => false,
        }
    }

    pub fn add_result(&mut self, result: MatchResult) {
        self.results.push(result);
    }
}
