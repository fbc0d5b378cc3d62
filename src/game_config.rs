use crate::board::Board;
use crate::combat::RandomSource;
use crate::error::GameError;
use crate::game::Game;
use crate::mission::{Mission, DEFAULT_CATALOG};
use crate::territory::Territory;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

const DEFAULT_CONFIG: &str = include_str!("config.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameConfig {
    pub territories: Vec<TerritoryConfig>,
    #[serde(default)]
    pub players: Vec<PlayerConfig>,
    /// Replaces the built-in mission catalog when present.
    #[serde(default)]
    pub missions: Option<Vec<Mission>>,
    #[serde(default)]
    pub script: Vec<ScriptedAttack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryConfig {
    pub name: String,
    pub faction: String,
    pub troops: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub faction: String,
}

/// One attack of a scripted game, by territory name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptedAttack {
    pub faction: String,
    pub from: String,
    pub to: String,
}

/// A scripted attack resolved to board indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptedMove {
    pub faction: String,
    pub from: usize,
    pub to: usize,
}

impl GameConfig {
    pub fn to_board_and_players(&self) -> Result<(Board, Vec<(String, String)>), GameError> {
        let mut names = HashSet::new();
        for territory in &self.territories {
            if !names.insert(territory.name.as_str()) {
                return Err(GameError::DuplicateTerritory(territory.name.clone()));
            }
        }

        let board = Board::from_territories(
            self.territories
                .iter()
                .map(|t| Territory::new(&t.name, &t.faction, t.troops))
                .collect(),
        )?;
        let players = self
            .players
            .iter()
            .map(|p| (p.name.clone(), p.faction.clone()))
            .collect();

        Ok((board, players))
    }

    pub fn catalog(&self) -> &[Mission] {
        match &self.missions {
            Some(missions) => missions.as_slice(),
            None => DEFAULT_CATALOG.as_slice(),
        }
    }

    /// Builds a game in the setup phase. Without configured players, every
    /// faction on the map gets one.
    pub fn build<D: RandomSource + ?Sized>(&self, dice: &mut D) -> Result<Game, GameError> {
        let (board, players) = self.to_board_and_players()?;
        if players.is_empty() {
            Game::from_board(board, self.catalog(), dice)
        } else {
            Game::new(board, &players, self.catalog(), dice)
        }
    }

    pub fn script_moves(&self) -> Result<Vec<ScriptedMove>, GameError> {
        let position = |name: &str| {
            self.territories
                .iter()
                .position(|t| t.name == name)
                .ok_or_else(|| GameError::UnknownTerritory(name.to_string()))
        };

        self.script
            .iter()
            .map(|attack| -> Result<ScriptedMove, GameError> {
                Ok(ScriptedMove {
                    faction: attack.faction.clone(),
                    from: position(&attack.from)?,
                    to: position(&attack.to)?,
                })
            })
            .collect()
    }

    pub fn load_from_file<P: AsRef<Path>>(filename: P) -> Result<Self, GameError> {
        let data = std::fs::read_to_string(filename)?;
        let config: GameConfig = serde_json::from_str(&data)?;
        Ok(config)
    }

    /// The bundled four-territory map with two players and a demo script.
    pub fn default_map() -> Result<Self, GameError> {
        Ok(serde_json::from_str(DEFAULT_CONFIG)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::MissionKind;
    use crate::testing::ScriptedDice;
    use crate::turn_phase::GamePhase;

    #[test]
    fn default_map_builds() {
        let config = GameConfig::default_map().unwrap();
        let mut dice = ScriptedDice::new(vec![], vec![0, 3]);
        let game = config.build(&mut dice).unwrap();

        assert_eq!(game.board.count(), 4);
        assert_eq!(game.players.len(), 2);
        assert_eq!(game.phase, GamePhase::Setup);
        assert_eq!(game.players[0].mission, DEFAULT_CATALOG[0]);
        assert_eq!(game.players[1].mission, DEFAULT_CATALOG[3]);

        let moves = config.script_moves().unwrap();
        assert_eq!(
            moves[0],
            ScriptedMove {
                faction: "Green".to_string(),
                from: 0,
                to: 1
            }
        );
    }

    #[test]
    fn duplicate_territories_are_rejected() {
        let config: GameConfig = serde_json::from_str(
            r#"{
                "territories": [
                    {"name": "Brasil", "faction": "Green", "troops": 3},
                    {"name": "Brasil", "faction": "Red", "troops": 2}
                ]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            config.to_board_and_players(),
            Err(GameError::DuplicateTerritory(name)) if name == "Brasil"
        ));
    }

    #[test]
    fn players_default_to_map_factions_and_custom_missions_apply() {
        let config: GameConfig = serde_json::from_str(
            r#"{
                "territories": [
                    {"name": "Lisboa", "faction": "Blue", "troops": 3},
                    {"name": "Porto", "faction": "Red", "troops": 2}
                ],
                "missions": [
                    {"id": 1, "kind": {"type": "own_all"}, "description": "Take Portugal"}
                ]
            }"#,
        )
        .unwrap();
        let mut dice = ScriptedDice::new(vec![], vec![0, 0]);
        let game = config.build(&mut dice).unwrap();

        assert_eq!(game.players.len(), 2);
        assert_eq!(game.players[1].faction, "Red");
        assert_eq!(game.players[0].mission.kind, MissionKind::OwnAll);
        assert_eq!(game.players[0].mission.description, "Take Portugal");
    }

    #[test]
    fn script_with_unknown_territory_fails() {
        let config: GameConfig = serde_json::from_str(
            r#"{
                "territories": [{"name": "Lisboa", "faction": "Blue", "troops": 3}],
                "script": [{"faction": "Blue", "from": "Lisboa", "to": "Madrid"}]
            }"#,
        )
        .unwrap();
        assert!(matches!(
            config.script_moves(),
            Err(GameError::UnknownTerritory(name)) if name == "Madrid"
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            GameConfig::load_from_file("/nonexistent/war.json"),
            Err(GameError::Io(_))
        ));
    }
}
