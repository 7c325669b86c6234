use serde::{Deserialize, Serialize};

use super::models::Player;

/// Prefix shared by every cached player pool, so the pools can be cleared together
pub const CACHE_KEY_PREFIX: &str = "players:";

/// Search filter for the player catalog
///
/// Text fields match case-insensitively anywhere in the corresponding
/// catalog field; empty means "any". Numeric fields take either
/// `[min, max]` (inclusive) or `[exact]`; any other length is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerFilter {
    pub name: String,
    pub club: String,
    pub league: String,
    pub nationality: String,
    pub position: String,
    pub age: Vec<u32>,
    pub overall: Vec<u32>,
    pub potential: Vec<u32>,
}

impl PlayerFilter {
    /// Filter on overall rating only
    pub fn overall_between(min: u32, max: u32) -> Self {
        Self {
            overall: vec![min, max],
            ..Self::default()
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        text_matches(&self.name, &player.long_name)
            && text_matches(&self.club, &player.club)
            && text_matches(&self.league, &player.league)
            && text_matches(&self.nationality, &player.nationality)
            && text_matches(&self.position, &player.positions)
            && range_matches(&self.age, player.age)
            && range_matches(&self.overall, player.overall)
            && range_matches(&self.potential, player.potential)
    }

    /// True when no field narrows the search down
    pub fn is_unfiltered(&self) -> bool {
        [
            &self.name,
            &self.club,
            &self.league,
            &self.nationality,
            &self.position,
        ]
        .iter()
        .all(|text| text.is_empty())
            && [&self.age, &self.overall, &self.potential]
                .iter()
                .all(|bounds| !matches!(bounds.len(), 1 | 2))
    }

    /// Deterministic cache key covering every field of the filter
    pub fn cache_key(&self) -> String {
        format!(
            "{}{}-{}-{}-{}-{}-{:?}-{:?}-{:?}",
            CACHE_KEY_PREFIX,
            self.name,
            self.club,
            self.nationality,
            self.league,
            self.position,
            self.age,
            self.overall,
            self.potential
        )
    }
}

fn text_matches(needle: &str, haystack: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn range_matches(bounds: &[u32], value: u32) -> bool {
    match bounds {
        [min, max] => (*min..=*max).contains(&value),
        [exact] => value == *exact,
        _ => true,
    }
}

/// Response for every player listing endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayersResponse {
    pub count: usize,
    pub players: Vec<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(long_name: &str, club: &str, age: u32, overall: u32) -> Player {
        Player {
            long_name: long_name.to_string(),
            club: club.to_string(),
            positions: "CAM, CM".to_string(),
            age,
            overall,
            potential: overall + 2,
            ..Player::default()
        }
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = PlayerFilter::default();
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&player("Kevin De Bruyne", "Manchester City", 30, 91)));
    }

    #[test]
    fn test_text_match_is_case_insensitive_substring() {
        let filter = PlayerFilter {
            name: "bruyne".to_string(),
            club: "MANCHESTER".to_string(),
            ..PlayerFilter::default()
        };
        assert!(filter.matches(&player("Kevin De Bruyne", "Manchester City", 30, 91)));
        assert!(!filter.matches(&player("Bruno Fernandes", "Manchester United", 27, 88)));
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        let filter = PlayerFilter::overall_between(87, 99);
        assert!(filter.matches(&player("A", "X", 20, 87)));
        assert!(filter.matches(&player("B", "X", 20, 99)));
        assert!(!filter.matches(&player("C", "X", 20, 86)));
    }

    #[test]
    fn test_single_bound_is_exact_match() {
        let filter = PlayerFilter {
            age: vec![21],
            ..PlayerFilter::default()
        };
        assert!(filter.matches(&player("A", "X", 21, 70)));
        assert!(!filter.matches(&player("B", "X", 22, 70)));
    }

    #[test]
    fn test_bounds_of_other_lengths_are_ignored() {
        let filter = PlayerFilter {
            overall: vec![1, 2, 3],
            ..PlayerFilter::default()
        };
        assert!(filter.is_unfiltered());
        assert!(filter.matches(&player("A", "X", 21, 70)));
    }

    #[test]
    fn test_position_matches_any_listed_position() {
        let filter = PlayerFilter {
            position: "cm".to_string(),
            ..PlayerFilter::default()
        };
        assert!(filter.matches(&player("A", "X", 21, 70)));
        assert!(!filter.is_unfiltered());
    }

    #[test]
    fn test_cache_key_distinguishes_filters() {
        let top = PlayerFilter::overall_between(87, 99);
        let young = PlayerFilter {
            age: vec![18, 21],
            ..PlayerFilter::default()
        };

        assert!(top.cache_key().starts_with(CACHE_KEY_PREFIX));
        assert_ne!(top.cache_key(), young.cache_key());
        assert_eq!(top.cache_key(), PlayerFilter::overall_between(87, 99).cache_key());
    }
}
