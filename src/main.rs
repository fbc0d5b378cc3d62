use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

use war_mission_engine::{
    board::Board,
    combat::{RandomSource, SeededDice},
    display::{render_board, render_mission, render_outcome, render_players},
    error::GameError,
    game::Game,
    game_config::{GameConfig, ScriptedMove},
    input::{ConsoleInput, InputProvider},
    territory::{Territory, MAX_FACTION_LEN, MAX_NAME_LEN},
};

const DEMO_ROUNDS: u32 = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "WAR-style territory conquest with secret missions", long_about = None)]
struct Args {
    /// JSON game configuration (territories, players, missions, attack script)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for dice and mission draws (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Replay the configured attack script instead of the interactive menu
    #[arg(long)]
    demo: bool,

    /// Type the territories in at startup; one player per faction entered
    #[arg(long, conflicts_with = "demo")]
    enter_map: bool,

    /// Stop after this many rounds (demo default: 5)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = tracing::Level::from_str(&args.log_level).unwrap_or(tracing::Level::WARN);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    let seed = args
        .seed
        .unwrap_or_else(|| chrono::Utc::now().timestamp().unsigned_abs());
    info!(seed, "dice seeded");
    let mut dice = SeededDice::from_seed(seed);

    let config = match &args.config {
        Some(path) => GameConfig::load_from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default_map().context("bundled config is invalid")?,
    };

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut out = io::stdout();

    let mut game = if args.enter_map {
        let board = enter_map(&mut input, &mut out).context("failed to set up the map")?;
        Game::from_board(board, config.catalog(), &mut dice)?
    } else {
        config.build(&mut dice).context("invalid game configuration")?
    };

    writeln!(out, "=== WAR: territory conquest ===")?;
    for player in &game.players {
        writeln!(out, "\n[{} - {}]", player.name, player.faction)?;
        writeln!(out, "{}", render_mission(&player.mission))?;
    }
    game.start()?;

    if args.demo {
        let moves = config.script_moves()?;
        if moves.is_empty() {
            bail!("the configuration has no attack script to replay");
        }
        run_demo(
            &mut game,
            &moves,
            args.max_rounds.unwrap_or(DEMO_ROUNDS),
            &mut dice,
            &mut out,
        )?;
    } else {
        run_interactive(&mut game, &mut input, &mut out, &mut dice, args.max_rounds)?;
    }

    writeln!(out, "\n--- Final standings ---")?;
    write!(out, "{}", render_players(&game.players, &game.board))?;
    Ok(())
}

fn enter_map<I: InputProvider, W: Write>(input: &mut I, out: &mut W) -> Result<Board, GameError> {
    let count = input.read_int("How many territories? (min 2): ", 2, 1000)? as usize;
    Board::new(count, |index| {
        writeln!(out, "\n--- Territory {} ---", index)?;
        let name = input.read_text("Name: ", MAX_NAME_LEN)?;
        let faction = input.read_text("Faction (e.g. Red, Blue, Green): ", MAX_FACTION_LEN)?;
        let troops = input.read_int("Troops (>0): ", 1, 1_000_000)? as u32;
        Ok(Territory::new(&name, &faction, troops))
    })
}

fn announce_winner<W: Write>(game: &Game, out: &mut W) -> io::Result<bool> {
    let Some(player) = game.winner().and_then(|faction| game.player_for(faction)) else {
        return Ok(false);
    };
    writeln!(
        out,
        "\n!!! {} ({}) WINS THE GAME !!!",
        player.name, player.faction
    )?;
    writeln!(out, "{}", render_mission(&player.mission))?;
    Ok(true)
}

fn run_demo<D: RandomSource, W: Write>(
    game: &mut Game,
    moves: &[ScriptedMove],
    max_rounds: u32,
    dice: &mut D,
    out: &mut W,
) -> Result<()> {
    for round in 1..=max_rounds {
        writeln!(out, "\n----------------------------------")?;
        writeln!(out, "--- ROUND {} ---", round)?;
        writeln!(out, "----------------------------------")?;
        write!(out, "{}", render_board(&game.board))?;

        for scripted in moves {
            let attacker = &game.board.get(scripted.from)?.name;
            let defender = &game.board.get(scripted.to)?.name;
            writeln!(
                out,
                "\n{} attacks {} from {}",
                scripted.faction, defender, attacker
            )?;
            match game.attack(&scripted.faction, scripted.from, scripted.to, dice) {
                Ok(outcome) => write!(out, "{}", render_outcome(&outcome))?,
                Err(e) => writeln!(out, "Attack not possible: {}", e)?,
            }
            if announce_winner(game, out)? {
                return Ok(());
            }
        }
    }

    writeln!(out, "\n--- Round limit reached, no winner ---")?;
    Ok(())
}

/// Reads a number, mapping closed input to `None` so the caller can stop cleanly.
fn ask<I: InputProvider>(
    input: &mut I,
    prompt: &str,
    min: i64,
    max: i64,
) -> Result<Option<i64>, GameError> {
    match input.read_int(prompt, min, max) {
        Ok(value) => Ok(Some(value)),
        Err(GameError::InputClosed) => Ok(None),
        Err(e) => Err(e),
    }
}

fn run_interactive<I: InputProvider, W: Write, D: RandomSource>(
    game: &mut Game,
    input: &mut I,
    out: &mut W,
    dice: &mut D,
    max_rounds: Option<u32>,
) -> Result<()> {
    loop {
        if max_rounds.map_or(false, |limit| game.round > limit) {
            writeln!(out, "\n--- Round limit reached, no winner ---")?;
            return Ok(());
        }

        let player = game.current_player().clone();
        writeln!(
            out,
            "\n--- Round {} | {} ({}) ---",
            game.round, player.name, player.faction
        )?;
        writeln!(out, "1 - Show map")?;
        writeln!(out, "2 - Attack")?;
        writeln!(out, "3 - Show my mission")?;
        writeln!(out, "4 - End turn")?;
        writeln!(out, "5 - Quit")?;

        let Some(choice) = ask(input, "Choose an option: ", 1, 5)? else {
            writeln!(out, "\nInput closed, leaving the game.")?;
            return Ok(());
        };

        match choice {
            1 => write!(out, "{}", render_board(&game.board))?,
            2 => {
                write!(out, "{}", render_board(&game.board))?;
                let last = game.board.count() as i64 - 1;
                let (Some(from), Some(to)) = (
                    ask(input, "Attacking territory index: ", 0, last)?,
                    ask(input, "Defending territory index: ", 0, last)?,
                ) else {
                    writeln!(out, "\nInput closed, leaving the game.")?;
                    return Ok(());
                };
                let (from, to) = (from as usize, to as usize);
                match game.attack(&player.faction, from, to, dice) {
                    Ok(outcome) => {
                        write!(out, "{}", render_outcome(&outcome))?;
                        write!(out, "{}", render_board(&game.board))?;
                    }
                    Err(e) => writeln!(out, "Error: {}", e)?,
                }
                if announce_winner(game, out)? {
                    return Ok(());
                }
            }
            3 => writeln!(out, "{}", render_mission(&player.mission))?,
            4 => game.end_turn(),
            _ => {
                writeln!(out, "Leaving the game.")?;
                return Ok(());
            }
        }
    }
}
