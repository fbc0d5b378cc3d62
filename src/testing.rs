// testing.rs
use crate::combat::RandomSource;
use std::collections::VecDeque;

/// Random source that replays fixed rolls and picks, in order.
///
/// Panics when a sequence runs dry, so a test that consumes more randomness
/// than it scripted fails loudly.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<u8>,
    picks: VecDeque<usize>,
}

impl ScriptedDice {
    pub fn new(rolls: Vec<u8>, picks: Vec<usize>) -> Self {
        Self {
            rolls: rolls.into(),
            picks: picks.into(),
        }
    }

    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedDice {
    fn roll(&mut self) -> u8 {
        self.rolls.pop_front().expect("scripted rolls exhausted")
    }

    fn pick(&mut self, n: usize) -> usize {
        let pick = self.picks.pop_front().expect("scripted picks exhausted");
        assert!(pick < n, "scripted pick {} out of range 0..{}", pick, n);
        pick
    }
}
