// turn_phase.rs
use crate::error::GameError;
use crate::game::Game;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    InProgress,
    Won { faction: String },
}

impl Game {
    /// Leaves setup once every player has seen their mission.
    pub fn start(&mut self) -> Result<(), GameError> {
        match self.phase {
            GamePhase::Setup => {
                self.phase = GamePhase::InProgress;
                self.round = 1;
                info!(players = self.players.len(), "game started");
                Ok(())
            }
            GamePhase::InProgress => Ok(()),
            GamePhase::Won { .. } => Err(GameError::GameOver),
        }
    }

    /// Checks each player's mission in player order and stops at the first
    /// one that holds. Only acts while the game is in progress.
    pub fn check_winner(&mut self) -> Option<&str> {
        if self.phase != GamePhase::InProgress {
            return self.winner();
        }

        let winner = self
            .players
            .iter()
            .find(|p| p.has_completed_mission(&self.board))
            .map(|p| p.faction.clone());

        if let Some(faction) = winner {
            info!(faction = %faction, "mission accomplished");
            self.phase = GamePhase::Won { faction };
        }
        self.winner()
    }

    pub fn winner(&self) -> Option<&str> {
        match &self.phase {
            GamePhase::Won { faction } => Some(faction),
            _ => None,
        }
    }

    pub fn end_turn(&mut self) {
        if self.phase != GamePhase::InProgress {
            return;
        }
        self.current_turn = (self.current_turn + 1) % self.players.len();
        if self.current_turn == 0 {
            self.round += 1;
        }
    }
}
