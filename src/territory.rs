// territory.rs
use crate::error::GameError;
use serde::{Deserialize, Serialize};

pub const MAX_NAME_LEN: usize = 29;
pub const MAX_FACTION_LEN: usize = 9;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Territory {
    pub name: String,
    pub faction: String,
    pub troops: u32,
}

impl Territory {
    pub fn new(name: &str, faction: &str, troops: u32) -> Self {
        Self {
            name: name.to_string(),
            faction: faction.to_string(),
            troops,
        }
    }

    pub fn is_owned_by(&self, faction: &str) -> bool {
        self.faction == faction
    }

    pub fn remove_troops(&mut self, troops: u32) {
        self.troops = self.troops.saturating_sub(troops);
    }

    /// Hands the territory over to `faction`, garrisoned by exactly `troops`.
    pub fn occupy(&mut self, faction: &str, troops: u32) {
        self.faction = faction.to_string();
        self.troops = troops;
    }

    pub(crate) fn validate(&self, index: usize) -> Result<(), GameError> {
        if self.faction.is_empty() {
            return Err(GameError::MissingFaction { index });
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(GameError::FieldTooLong {
                index,
                field: "name",
                max: MAX_NAME_LEN,
            });
        }
        if self.faction.chars().count() > MAX_FACTION_LEN {
            return Err(GameError::FieldTooLong {
                index,
                field: "faction",
                max: MAX_FACTION_LEN,
            });
        }
        Ok(())
    }
}
