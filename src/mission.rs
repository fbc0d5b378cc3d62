// mission.rs
use crate::board::Board;
use crate::combat::RandomSource;
use crate::error::GameError;
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MissionKind {
    /// No territory of `faction` may keep any troops.
    EliminateFaction { faction: String },
    ConquerNamed { territory: String },
    OwnCount { count: usize },
    OwnAll,
    TroopThresholdNamed { territory: String, troops: u32 },
    FactionTroopTotal { troops: u64 },
    /// A kind this engine does not know. Never satisfied.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Mission {
    pub id: u32,
    pub kind: MissionKind,
    pub description: String,
}

impl Mission {
    pub fn new(id: u32, kind: MissionKind, description: &str) -> Self {
        Self {
            id,
            kind,
            description: description.to_string(),
        }
    }
}

lazy_static! {
    pub static ref DEFAULT_CATALOG: Vec<Mission> = vec![
        Mission::new(
            1,
            MissionKind::EliminateFaction {
                faction: "Red".to_string(),
            },
            "Eliminate every Red troop",
        ),
        Mission::new(
            2,
            MissionKind::ConquerNamed {
                territory: "Brasil".to_string(),
            },
            "Conquer the territory 'Brasil'",
        ),
        Mission::new(3, MissionKind::OwnCount { count: 3 }, "Control 3 territories"),
        Mission::new(
            4,
            MissionKind::TroopThresholdNamed {
                territory: "Canada".to_string(),
                troops: 10,
            },
            "Hold 10 troops in the territory 'Canada'",
        ),
        Mission::new(
            5,
            MissionKind::EliminateFaction {
                faction: "Blue".to_string(),
            },
            "Eliminate every Blue troop",
        ),
        Mission::new(6, MissionKind::OwnAll, "Conquer the whole map"),
        Mission::new(
            7,
            MissionKind::FactionTroopTotal { troops: 20 },
            "Command 20 troops across your territories",
        ),
    ];
}

/// Draws one mission uniformly from `catalog`. Draws are independent, so two
/// players may receive the same mission.
pub fn assign<D: RandomSource + ?Sized>(
    catalog: &[Mission],
    dice: &mut D,
) -> Result<Mission, GameError> {
    if catalog.is_empty() {
        return Err(GameError::EmptyCatalog);
    }
    let mission = catalog[dice.pick(catalog.len())].clone();
    debug!(id = mission.id, "mission drawn");
    Ok(mission)
}

pub fn is_satisfied(mission: &Mission, board: &Board, faction: &str) -> bool {
    match &mission.kind {
        MissionKind::EliminateFaction { faction: target } => !board
            .territories()
            .iter()
            .any(|t| t.is_owned_by(target) && t.troops > 0),
        MissionKind::ConquerNamed { territory } => board
            .find_by_name(territory)
            .map_or(false, |t| t.is_owned_by(faction)),
        MissionKind::OwnCount { count } => board.owned_by(faction) >= *count,
        MissionKind::OwnAll => board.owned_by(faction) == board.count(),
        MissionKind::TroopThresholdNamed { territory, troops } => board
            .find_by_name(territory)
            .map_or(false, |t| t.is_owned_by(faction) && t.troops >= *troops),
        MissionKind::FactionTroopTotal { troops } => board.troops_of(faction) >= *troops,
        MissionKind::Unknown => false,
    }
}

pub fn describe(mission: &Mission) -> &str {
    &mission.description
}
