// board.rs
use crate::combat::{self, CombatOutcome, RandomSource};
use crate::error::GameError;
use crate::territory::Territory;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// The territory registry: a fixed-size, index-addressed list of territories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Board {
    territories: Vec<Territory>,
}

impl Board {
    /// Builds a board of exactly `count` territories, asking `init` for each index in order.
    pub fn new<F>(count: usize, mut init: F) -> Result<Self, GameError>
    where
        F: FnMut(usize) -> Result<Territory, GameError>,
    {
        if count < 1 {
            return Err(GameError::EmptyBoard);
        }
        let mut territories = Vec::with_capacity(count);
        for index in 0..count {
            territories.push(init(index)?);
        }
        Self::from_territories(territories)
    }

    pub fn from_territories(territories: Vec<Territory>) -> Result<Self, GameError> {
        if territories.is_empty() {
            return Err(GameError::EmptyBoard);
        }
        for (index, territory) in territories.iter().enumerate() {
            territory.validate(index)?;
        }
        Ok(Self { territories })
    }

    pub fn count(&self) -> usize {
        self.territories.len()
    }

    pub fn get(&self, index: usize) -> Result<&Territory, GameError> {
        let count = self.count();
        self.territories
            .get(index)
            .ok_or(GameError::InvalidIndex { index, count })
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut Territory, GameError> {
        let count = self.count();
        self.territories
            .get_mut(index)
            .ok_or(GameError::InvalidIndex { index, count })
    }

    pub fn territories(&self) -> &[Territory] {
        &self.territories
    }

    /// First territory (lowest index) whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&Territory> {
        self.territories.iter().find(|t| t.name == name)
    }

    pub fn owned_by(&self, faction: &str) -> usize {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .count()
    }

    pub fn troops_of(&self, faction: &str) -> u64 {
        self.territories
            .iter()
            .filter(|t| t.is_owned_by(faction))
            .map(|t| u64::from(t.troops))
            .sum()
    }

    /// Distinct factions in order of first appearance.
    pub fn factions(&self) -> Vec<String> {
        self.territories
            .iter()
            .map(|t| t.faction.clone())
            .unique()
            .collect()
    }

    /// Resolves an attack from territory `from` on territory `to`.
    ///
    /// Both entries are borrowed mutably for the duration of this call only.
    /// A rejected attack leaves the board untouched.
    pub fn attack<D: RandomSource + ?Sized>(
        &mut self,
        from: usize,
        to: usize,
        dice: &mut D,
    ) -> Result<CombatOutcome, GameError> {
        self.get(from)?;
        self.get(to)?;
        if from == to {
            return Err(GameError::SelfAttack);
        }

        let (attacker, defender) = if from < to {
            let (left, right) = self.territories.split_at_mut(to);
            (&mut left[from], &mut right[0])
        } else {
            let (left, right) = self.territories.split_at_mut(from);
            (&mut right[0], &mut left[to])
        };

        combat::resolve(attacker, defender, dice)
    }
}
