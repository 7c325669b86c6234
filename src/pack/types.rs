use serde::{Deserialize, Serialize};

use crate::player::models::Player;

/// Request payload for opening a pack
#[derive(Debug, Deserialize, Serialize)]
pub struct PackRequest {
    pub manager: String,
    #[serde(rename = "type")]
    pub kind: u8,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PackResponse {
    pub player: Player,
    pub point: u32, // Balance left after paying for the pack
    pub message: String,
}
