use std::collections::HashMap;

use super::models::ScorerRow;
use crate::result::models::{MatchResult, Scorer};

/// Builds the top-scorer list for a season's results
///
/// Rows are keyed by player name. The first entry seen for a player fixes
/// the manager and face image; later entries only add to the count. Home
/// scorers are visited before away scorers within each result.
pub fn compute_scorers(results: &[MatchResult]) -> Vec<ScorerRow> {
    let mut tally: HashMap<String, ScorerRow> = HashMap::new();

    for result in results {
        let sides = [
            (&result.home_manager_name, &result.home_scorers),
            (&result.away_manager_name, &result.away_scorers),
        ];

        for (manager, scorers) in sides {
            for scorer in scorers {
                record_goals(&mut tally, manager, scorer);
            }
        }
    }

    let mut stats: Vec<ScorerRow> = tally.into_values().collect();
    stats.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.player.cmp(&b.player)));
    stats
}

fn record_goals(tally: &mut HashMap<String, ScorerRow>, manager: &str, scorer: &Scorer) {
    tally
        .entry(scorer.player.name.clone())
        .and_modify(|row| row.count += u64::from(scorer.count))
        .or_insert_with(|| ScorerRow {
            player: scorer.player.name.clone(),
            manager: manager.to_string(),
            face_image_url: scorer.player.face_url.clone(),
            count: u64::from(scorer.count),
        });
}
