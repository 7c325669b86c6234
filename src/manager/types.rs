use serde::{Deserialize, Serialize};

/// Request payload for creating a manager
#[derive(Debug, Deserialize, Serialize)]
pub struct ManagerCreateRequest {
    pub name: String,
}

/// Request payload for adding or removing a roster player
///
/// `type` 0 removes the player, any other value adds it.
#[derive(Debug, Deserialize, Serialize)]
pub struct ManagePlayerRequest {
    pub manager: String,
    pub player: String,
    #[serde(rename = "type", default)]
    pub action: u8,
}

/// Request payload for spending or crediting points
///
/// `type` 0 spends, any other value credits.
#[derive(Debug, Deserialize, Serialize)]
pub struct ManagePointRequest {
    pub manager: String,
    pub point: u32,
    #[serde(rename = "type", default)]
    pub action: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterAction {
    Remove,
    Add,
}

impl From<u8> for RosterAction {
    fn from(code: u8) -> Self {
        if code == 0 {
            RosterAction::Remove
        } else {
            RosterAction::Add
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointAction {
    Spend,
    Credit,
}

impl From<u8> for PointAction {
    fn from(code: u8) -> Self {
        if code == 0 {
            PointAction::Spend
        } else {
            PointAction::Credit
        }
    }
}
