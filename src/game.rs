use crate::board::Board;
use crate::combat::{CombatOutcome, RandomSource};
use crate::error::GameError;
use crate::mission::{self, Mission};
use crate::player::Player;
use crate::territory::MAX_FACTION_LEN;
use crate::turn_phase::GamePhase;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    pub board: Board,
    pub players: Vec<Player>,
    pub phase: GamePhase,
    pub current_turn: usize,
    pub round: u32,
}

impl Game {
    /// Creates a game in the setup phase and draws one mission per player.
    ///
    /// `players` are `(name, faction)` pairs; factions must be unique.
    pub fn new<D: RandomSource + ?Sized>(
        board: Board,
        players: &[(String, String)],
        catalog: &[Mission],
        dice: &mut D,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::NoPlayers);
        }
        for (name, faction) in players {
            if faction.is_empty() {
                return Err(GameError::PlayerWithoutFaction {
                    player: name.clone(),
                });
            }
            if faction.chars().count() > MAX_FACTION_LEN {
                return Err(GameError::PlayerFactionTooLong {
                    player: name.clone(),
                    max: MAX_FACTION_LEN,
                });
            }
        }
        if let Some(faction) = players.iter().map(|(_, faction)| faction).duplicates().next() {
            return Err(GameError::DuplicateFaction(faction.clone()));
        }

        let mut assigned = Vec::with_capacity(players.len());
        for (id, (name, faction)) in players.iter().enumerate() {
            let mission = mission::assign(catalog, dice)?;
            info!(player = %name, faction = %faction, mission = mission.id, "mission assigned");
            assigned.push(Player::new(id, name, faction, mission));
        }

        Ok(Self {
            board,
            players: assigned,
            phase: GamePhase::Setup,
            current_turn: 0,
            round: 0,
        })
    }

    /// One player per faction present on the board, in order of first appearance.
    pub fn from_board<D: RandomSource + ?Sized>(
        board: Board,
        catalog: &[Mission],
        dice: &mut D,
    ) -> Result<Self, GameError> {
        let players: Vec<(String, String)> = board
            .factions()
            .into_iter()
            .enumerate()
            .map(|(i, faction)| (format!("Player {}", i + 1), faction))
            .collect();
        Game::new(board, &players, catalog, dice)
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_turn]
    }

    pub fn player_for(&self, faction: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.faction == faction)
    }

    /// Attack on behalf of `faction`. Every attack, resolved or rejected by a
    /// rule check, is followed by a mission check for all players.
    pub fn attack<D: RandomSource + ?Sized>(
        &mut self,
        faction: &str,
        from: usize,
        to: usize,
        dice: &mut D,
    ) -> Result<CombatOutcome, GameError> {
        match self.phase {
            GamePhase::Setup => return Err(GameError::NotStarted),
            GamePhase::Won { .. } => return Err(GameError::GameOver),
            GamePhase::InProgress => {}
        }

        let result = self.try_attack(faction, from, to, dice);
        if let Err(e) = &result {
            warn!(faction = %faction, from, to, "attack rejected: {}", e);
        }
        self.check_winner();
        result
    }

    fn try_attack<D: RandomSource + ?Sized>(
        &mut self,
        faction: &str,
        from: usize,
        to: usize,
        dice: &mut D,
    ) -> Result<CombatOutcome, GameError> {
        if self.player_for(faction).is_none() {
            return Err(GameError::UnknownFaction(faction.to_string()));
        }
        let attacker = self.board.get(from)?;
        if !attacker.is_owned_by(faction) {
            return Err(GameError::NotOwner {
                territory: attacker.name.clone(),
                faction: faction.to_string(),
            });
        }
        self.board.attack(from, to, dice)
    }
}
