// combat.rs
use crate::error::GameError;
use crate::territory::Territory;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Source of randomness shared by dice rolls and mission draws.
pub trait RandomSource {
    fn roll(&mut self) -> u8;
    /// Uniform index in `0..n`. `n` must be non-zero.
    fn pick(&mut self, n: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededDice {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }

    fn pick(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Side {
    Attacker,
    Defender,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CombatOutcome {
    pub attacker_roll: u8,
    pub defender_roll: u8,
    pub winner: Side,
    pub transferred: u32,
    /// State of the attacking territory after the combat.
    pub attacker: Territory,
    /// State of the defending territory after the combat.
    pub defender: Territory,
}

/// Troops that move into a conquered territory: half the attacker's garrison, at least one.
pub fn troops_to_transfer(attacker_troops: u32) -> u32 {
    std::cmp::max(1, attacker_troops / 2)
}

/// Resolves one attack with a single die per side. Ties go to the defender.
///
/// Two live `&mut` borrows can never alias, so the self-attack rule is
/// enforced by index in [`crate::board::Board::attack`].
pub fn resolve<D: RandomSource + ?Sized>(
    attacker: &mut Territory,
    defender: &mut Territory,
    dice: &mut D,
) -> Result<CombatOutcome, GameError> {
    if attacker.faction == defender.faction {
        return Err(GameError::SameFactionAttack {
            faction: attacker.faction.clone(),
        });
    }
    if attacker.troops < 2 {
        return Err(GameError::InsufficientTroops {
            territory: attacker.name.clone(),
            troops: attacker.troops,
        });
    }

    let attacker_roll = dice.roll();
    let defender_roll = dice.roll();
    debug!(
        attacker = %attacker.name,
        defender = %defender.name,
        attacker_roll,
        defender_roll,
        "dice rolled"
    );

    let (winner, transferred) = if attacker_roll > defender_roll {
        let transferred = troops_to_transfer(attacker.troops);
        defender.occupy(&attacker.faction, transferred);
        attacker.remove_troops(transferred);
        info!(
            attacker = %attacker.name,
            defender = %defender.name,
            faction = %attacker.faction,
            transferred,
            "territory conquered"
        );
        (Side::Attacker, transferred)
    } else {
        attacker.remove_troops(1);
        (Side::Defender, 0)
    };

    Ok(CombatOutcome {
        attacker_roll,
        defender_roll,
        winner,
        transferred,
        attacker: attacker.clone(),
        defender: defender.clone(),
    })
}
