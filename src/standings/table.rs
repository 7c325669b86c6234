use std::collections::hash_map::Entry;
use std::collections::HashMap;

use super::{models::StandingRow, StandingsError};
use crate::result::models::MatchResult;

/// Builds the league table for a season's results
///
/// Rows are keyed by manager name. The table is ordered by points, then
/// goal difference, then goals scored, then manager name.
pub fn compute_standings(results: &[MatchResult]) -> Result<Vec<StandingRow>, StandingsError> {
    let mut table: HashMap<String, StandingRow> = HashMap::new();

    for (index, result) in results.iter().enumerate() {
        let (home_goals, away_goals) = final_score(result, index)?;

        let home = StandingRow::from_fixture(&result.home_manager_name, home_goals, away_goals);
        let away = StandingRow::from_fixture(&result.away_manager_name, away_goals, home_goals);

        for row in [home, away] {
            match table.entry(row.manager.clone()) {
                Entry::Occupied(mut existing) => existing.get_mut().absorb(row),
                Entry::Vacant(slot) => {
                    slot.insert(row);
                }
            }
        }
    }

    let mut standing: Vec<StandingRow> = table.into_values().collect();
    standing.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then_with(|| b.goal_difference.cmp(&a.goal_difference))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
            .then_with(|| a.manager.cmp(&b.manager))
    });

    Ok(standing)
}

fn final_score(result: &MatchResult, index: usize) -> Result<(u32, u32), StandingsError> {
    match result.score.as_slice() {
        [home, away] => Ok((*home, *away)),
        other => Err(StandingsError::MalformedResult {
            index,
            len: other.len(),
        }),
    }
}
