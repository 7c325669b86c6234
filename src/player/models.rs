use serde::{Deserialize, Serialize};

/// Catalog entry for a football player
///
/// Field names follow the catalog documents, so a stored document
/// deserializes without a mapping layer. Missing attributes fall back to
/// their defaults because goalkeepers carry no outfield face stats.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Player {
    pub id: String,
    pub long_name: String,
    #[serde(rename = "short_name")]
    pub name: String, // Display name, also the key scorer stats group by
    #[serde(rename = "player_positions")]
    pub positions: String,
    pub club_position: String,
    #[serde(rename = "club_name")]
    pub club: String,
    #[serde(rename = "league_name")]
    pub league: String,
    #[serde(rename = "nationality_name")]
    pub nationality: String,
    pub age: u32,
    pub overall: u32,
    pub potential: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passing: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physic: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shooting: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dribbling: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defending: Option<u32>,
    #[serde(rename = "player_face_url")]
    pub face_url: String,
    #[serde(rename = "club_logo_url")]
    pub club_logo: String,
    #[serde(rename = "nation_flag_url")]
    pub nation_flag: String,
    pub weak_foot: u32,
    pub skill_moves: u32,
    pub work_rate: String,
    pub preferred_foot: String,
}
