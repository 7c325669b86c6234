use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum_macros::Display;

/// Single-character outcome code kept in a manager's form guide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum FormCode {
    #[serde(rename = "W")]
    #[strum(serialize = "W")]
    Win,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    Draw,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    Loss,
}

impl FormCode {
    pub fn from_goals(goals_for: u32, goals_against: u32) -> Self {
        match goals_for.cmp(&goals_against) {
            Ordering::Greater => FormCode::Win,
            Ordering::Equal => FormCode::Draw,
            Ordering::Less => FormCode::Loss,
        }
    }

    pub fn points(self) -> u32 {
        match self {
            FormCode::Win => 3,
            FormCode::Draw => 1,
            FormCode::Loss => 0,
        }
    }
}

/// A manager's accumulated season record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    pub manager: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u64,
    pub goals_against: u64,
    pub goal_difference: i64,
    pub points: u32,
    pub form: Vec<FormCode>,
}

impl StandingRow {
    /// Row holding exactly one fixture, seen from `manager`'s side
    pub fn from_fixture(manager: &str, goals_for: u32, goals_against: u32) -> Self {
        let outcome = FormCode::from_goals(goals_for, goals_against);

        Self {
            manager: manager.to_string(),
            played: 1,
            won: u32::from(outcome == FormCode::Win),
            drawn: u32::from(outcome == FormCode::Draw),
            lost: u32::from(outcome == FormCode::Loss),
            goals_for: u64::from(goals_for),
            goals_against: u64::from(goals_against),
            goal_difference: i64::from(goals_for) - i64::from(goals_against),
            points: outcome.points(),
            form: vec![outcome],
        }
    }

    /// Adds another row's counters into this one and appends its form
    pub fn absorb(&mut self, other: StandingRow) {
        self.played += other.played;
        self.won += other.won;
        self.drawn += other.drawn;
        self.lost += other.lost;
        self.goals_for += other.goals_for;
        self.goals_against += other.goals_against;
        self.goal_difference += other.goal_difference;
        self.points += other.points;
        self.form.extend(other.form);
    }
}

/// A player's accumulated goal tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorerRow {
    pub player: String,
    pub manager: String, // Manager the player first scored for
    pub face_image_url: String,
    pub count: u64,
}

/// Both ranked lists for one season, in the shape the statistics endpoint returns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonStatistics {
    pub standing: Vec<StandingRow>,
    pub stats: Vec<ScorerRow>,
}
