// display.rs
use crate::board::Board;
use crate::combat::{CombatOutcome, Side};
use crate::mission::{self, Mission};
use crate::player::Player;

pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("\n--- Territory Map ---\n");
    out.push_str("Index | Name                          | Faction   | Troops\n");
    out.push_str("-----------------------------------------------------------\n");
    for (index, territory) in board.territories().iter().enumerate() {
        out.push_str(&format!(
            "{:>5} | {:<29} | {:<9} | {:>6}\n",
            index, territory.name, territory.faction, territory.troops
        ));
    }
    out
}

pub fn render_mission(mission: &Mission) -> String {
    format!("Your mission: {}", mission::describe(mission))
}

pub fn render_players(players: &[Player], board: &Board) -> String {
    players
        .iter()
        .map(|player| {
            format!(
                "{} ({}): {} territories, {} troops\n",
                player.name,
                player.faction,
                player.territories_owned(board),
                player.total_troops(board)
            )
        })
        .collect()
}

pub fn render_outcome(outcome: &CombatOutcome) -> String {
    let verdict = match outcome.winner {
        Side::Attacker => format!(
            "Victory! {} conquered {} and moved {} troops.",
            outcome.attacker.name, outcome.defender.name, outcome.transferred
        ),
        Side::Defender => format!("Defeat! {} lost 1 troop.", outcome.attacker.name),
    };
    format!(
        "Attacker die: {} | Defender die: {}\n{}\n{} ({}): {} troops | {} ({}): {} troops\n",
        outcome.attacker_roll,
        outcome.defender_roll,
        verdict,
        outcome.attacker.name,
        outcome.attacker.faction,
        outcome.attacker.troops,
        outcome.defender.name,
        outcome.defender.faction,
        outcome.defender.troops
    )
}
