//! Season standings and top-scorer aggregation
//!
//! Both lists are rebuilt from a season's full result history on every
//! call; nothing here touches storage or shares state between calls.

mod errors;
pub mod models;
pub mod scorers;
pub mod table;

pub use errors::StandingsError;
pub use models::{FormCode, ScorerRow, SeasonStatistics, StandingRow};
pub use scorers::compute_scorers;
pub use table::compute_standings;

use crate::result::models::MatchResult;

impl SeasonStatistics {
    /// Computes the league table and scorer list together
    ///
    /// A malformed result fails the whole computation.
    pub fn compute(results: &[MatchResult]) -> Result<Self, StandingsError> {
        Ok(Self {
            standing: compute_standings(results)?,
            stats: compute_scorers(results),
        })
    }
}
