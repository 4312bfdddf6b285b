//! # Parlor Arena - Terminal Front End
//!
//! A thin interactive shell over the game engines: pick a game, read
//! moves from the prompt, validate them through the controller, and let
//! bot seats act through each engine's own heuristic.
//!
//! ## Usage
//! ```text
//! play --list
//! play --game othello
//! play --game uno --players 4 --stacking --jump-in --seven-zero
//! play --game war --bots --seed 42
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use parlor::game_controller::{GameController, MoveResult};
use parlor::game_wrapper::GameWrapper;
use parlor::games::farkle::FarkleState;
use parlor::games::fifteen::FifteenState;
use parlor::games::hangman::HangmanState;
use parlor::games::mancala::MancalaState;
use parlor::games::minesweeper::MinesweeperState;
use parlor::games::othello::OthelloState;
use parlor::games::pentago::PentagoState;
use parlor::games::picross::PicrossState;
use parlor::games::sokoban::SokobanState;
use parlor::games::uno::{HouseRules, UnoGame};
use parlor::games::war::WarState;
use parlor::games::yahtzee::YahtzeeState;
use parlor::GameState;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Safety valve for bot-only sessions.
const MAX_BOT_MOVES: usize = 10_000;

/// The game roster with seat ranges and bot availability.
const ROSTER: &[(&str, &str, bool)] = &[
    ("uno", "2-10 seats", true),
    ("war", "2 seats", true),
    ("farkle", "2-6 seats", true),
    ("yahtzee", "2-6 seats", true),
    ("mancala", "2 seats", true),
    ("othello", "2 seats", true),
    ("pentago", "2 seats", true),
    ("minesweeper", "solitaire", false),
    ("sokoban", "solitaire", false),
    ("picross", "solitaire", false),
    ("fifteen", "solitaire", false),
    ("hangman", "solitaire", true),
];

#[derive(Parser, Debug)]
#[command(
    name = "play",
    about = "A collection of parlor game engines with heuristic opponents"
)]
struct Args {
    /// List the available games and exit
    #[arg(long)]
    list: bool,

    /// Which game to play (see --list)
    #[arg(long, short)]
    game: Option<String>,

    /// Number of seats, where the game supports a range
    #[arg(long, default_value_t = 2)]
    players: usize,

    /// Seed for shuffles, dice and layouts (default: OS entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Let every seat be played by the built-in heuristic
    #[arg(long)]
    bots: bool,

    /// Seats (1-based, comma separated) played by the heuristic
    #[arg(long, value_delimiter = ',')]
    bot_seats: Vec<i32>,

    /// Uno house rule: penalty cards stack
    #[arg(long)]
    stacking: bool,

    /// Uno house rule: identical cards may be played out of turn
    #[arg(long)]
    jump_in: bool,

    /// Uno house rule: sevens swap hands, zeros rotate them
    #[arg(long)]
    seven_zero: bool,

    /// Board side length where the game supports one (othello, fifteen)
    #[arg(long)]
    size: Option<usize>,

    /// Minesweeper grid width
    #[arg(long, default_value_t = 9)]
    width: usize,

    /// Minesweeper grid height
    #[arg(long, default_value_t = 9)]
    height: usize,

    /// Minesweeper mine count
    #[arg(long, default_value_t = 10)]
    mines: usize,

    /// Built-in level/puzzle index (sokoban, picross)
    #[arg(long, default_value_t = 0)]
    level: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.list {
        print_roster();
        return Ok(());
    }

    let name = args
        .game
        .as_deref()
        .ok_or_else(|| anyhow!("Pick a game with --game <name>, or see --list"))?;
    let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let game = build_game(name, &args, seed)?;
    let bot_seats = resolve_bot_seats(&args, &game)?;

    println!(
        "{} (seed {})",
        format!("=== {} ===", game.name()).bold(),
        seed
    );
    run_game(game, &bot_seats)
}

fn print_roster() {
    println!("{}", "available games:".bold());
    for (name, seats, bot) in ROSTER {
        let bot_note = if *bot { "bot available" } else { "no bot" };
        println!("  {:12} {:10} {}", name, seats, bot_note);
    }
}

/// Builds the requested game from the command line options.
fn build_game(name: &str, args: &Args, seed: u64) -> Result<GameWrapper> {
    let game = match name.to_lowercase().as_str() {
        "uno" => {
            let rules = HouseRules {
                stacking: args.stacking,
                jump_in: args.jump_in,
                seven_zero: args.seven_zero,
            };
            GameWrapper::Uno(UnoGame::new(args.players, rules, seed))
        }
        "war" => GameWrapper::War(WarState::new(seed)),
        "farkle" => GameWrapper::Farkle(FarkleState::new(args.players, seed)),
        "yahtzee" => GameWrapper::Yahtzee(YahtzeeState::new(args.players, seed)),
        "mancala" => GameWrapper::Mancala(MancalaState::new()),
        "othello" | "reversi" => GameWrapper::Othello(OthelloState::new(args.size.unwrap_or(8))),
        "pentago" => GameWrapper::Pentago(PentagoState::new()),
        "minesweeper" => GameWrapper::Minesweeper(MinesweeperState::new(
            args.width,
            args.height,
            args.mines,
            seed,
        )),
        "sokoban" => {
            GameWrapper::Sokoban(SokobanState::builtin(args.level).map_err(|e| anyhow!(e))?)
        }
        "picross" => {
            GameWrapper::Picross(PicrossState::builtin(args.level).map_err(|e| anyhow!(e))?)
        }
        "fifteen" => GameWrapper::Fifteen(FifteenState::new(args.size.unwrap_or(4), seed)),
        "hangman" => GameWrapper::Hangman(HangmanState::new(seed)),
        other => bail!("Unknown game '{}'; see --list", other),
    };
    Ok(game)
}

/// Which seats the heuristic plays, from --bots / --bot-seats.
fn resolve_bot_seats(args: &Args, game: &GameWrapper) -> Result<Vec<i32>> {
    let seats: Vec<i32> = if args.bots {
        (1..=game.get_num_players()).collect()
    } else {
        args.bot_seats.clone()
    };
    if !seats.is_empty() && game.suggest_move().is_none() && !game.is_terminal() {
        bail!("{} has no bot; play it yourself", game.name());
    }
    for &seat in &seats {
        if seat < 1 || seat > game.get_num_players() {
            bail!("Bot seat {} is out of range", seat);
        }
    }
    Ok(seats)
}

fn run_game(game: GameWrapper, bot_seats: &[i32]) -> Result<()> {
    let mut controller = GameController::new(game);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut bot_moves = 0usize;

    while !controller.is_game_over() {
        let seat = controller.get_current_player();

        if bot_seats.contains(&seat) {
            let mv = controller
                .get_render_state()
                .suggest_move()
                .context("bot found no move in a running game")?;
            println!(
                "{}",
                format!(
                    "[bot] {} plays: {}",
                    controller.get_render_state().player_name(seat),
                    mv
                )
                .dimmed()
            );
            controller.apply_trusted_move(mv);
            bot_moves += 1;
            if bot_moves > MAX_BOT_MOVES {
                println!("{}", "stopping: bot session ran too long".yellow());
                break;
            }
            continue;
        }

        println!();
        println!("{}", controller.get_render_state());
        println!(
            "{} {}",
            format!(
                "{} to move.",
                controller.get_render_state().player_name(seat)
            )
            .cyan(),
            format!("({})", controller.get_render_state().prompt()).dimmed()
        );
        print!("> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                println!("{}", "input closed, leaving the game".yellow());
                return Ok(());
            }
        };
        let input = line.trim();

        match input {
            "quit" | "exit" => {
                println!("{}", "leaving the game".yellow());
                return Ok(());
            }
            "history" => {
                println!("{}", controller.format_history());
                continue;
            }
            "moves" => {
                let moves = controller.get_legal_moves();
                println!("{} legal moves:", moves.len());
                for mv in moves {
                    println!("  {}", mv);
                }
                continue;
            }
            _ => {}
        }

        let mv = match controller.get_render_state().parse_move(input) {
            Ok(mv) => mv,
            Err(e) => {
                // A bare enter only means something in War; elsewhere
                // just show the prompt again.
                if !input.is_empty() {
                    println!("{}", e.red());
                }
                continue;
            }
        };
        match controller.try_make_move(mv) {
            MoveResult::Success { .. } => {}
            MoveResult::Invalid { reason } => println!("{}", reason.to_string().red()),
            MoveResult::GameOver => break,
        }
    }

    println!();
    println!("{}", controller.get_render_state());
    announce_result(&controller);
    Ok(())
}

fn announce_result(controller: &GameController) {
    let state = controller.get_render_state();
    if !controller.is_game_over() {
        println!("{}", "(game left unfinished)".yellow());
        return;
    }
    match controller.get_winner() {
        Some(_) if state.get_num_players() == 1 => {
            println!("{}", "solved!".green().bold());
        }
        Some(seat) => {
            let mut line = format!("{} wins!", state.player_name(seat));
            if let GameWrapper::Uno(uno) = state {
                line.push_str(&format!(" ({} points)", uno.winning_score()));
            }
            println!("{}", line.green().bold());
        }
        None if state.get_num_players() == 1 => {
            let mut line = "puzzle failed.".to_string();
            if let GameWrapper::Hangman(h) = state {
                line.push_str(&format!(" the word was '{}'", h.reveal()));
            }
            println!("{}", line.yellow().bold());
        }
        None => println!("{}", "it's a draw.".yellow().bold()),
    }
}
