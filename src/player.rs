// player.rs
use crate::board::Board;
use crate::mission::{self, Mission};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: usize,
    pub name: String,
    pub faction: String,
    pub mission: Mission,
}

impl Player {
    pub fn new(id: usize, name: &str, faction: &str, mission: Mission) -> Self {
        Self {
            id,
            name: name.to_string(),
            faction: faction.to_string(),
            mission,
        }
    }

    pub fn has_completed_mission(&self, board: &Board) -> bool {
        mission::is_satisfied(&self.mission, board, &self.faction)
    }

    pub fn territories_owned(&self, board: &Board) -> usize {
        board.owned_by(&self.faction)
    }

    pub fn total_troops(&self, board: &Board) -> u64 {
        board.troops_of(&self.faction)
    }
}
