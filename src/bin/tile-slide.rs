//! Terminal driver: reads moves from stdin and prints the board.
//!
//! Moves are typed one per line (`w`/`a`/`s`/`d`, `h`/`j`/`k`/`l` or the
//! direction name). `u` undoes the last move, `q` quits.
//! Set `RUST_LOG=debug` to trace engine decisions.

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use clap::Parser;
use log::warn;

use tile_slide::core::{BoardConfig, Direction, GameRng, ScoreRule};
use tile_slide::game::{GameSession, TurnOutcome};

#[derive(Parser, Debug)]
#[command(about = "Play a tile-sliding puzzle in the terminal")]
struct Args {
    /// Number of columns
    #[arg(long, default_value_t = 4)]
    width: usize,

    /// Number of rows
    #[arg(long, default_value_t = 4)]
    height: usize,

    /// RNG seed; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Chance that a spawned tile is a 4
    #[arg(long, default_value_t = 0.1)]
    four_probability: f64,

    /// Score merged tiles instead of spawned tiles
    #[arg(long)]
    merge_score: bool,
}

impl Args {
    fn config(&self) -> BoardConfig {
        let rule = if self.merge_score {
            ScoreRule::Merged
        } else {
            ScoreRule::Spawned
        };
        BoardConfig::new(self.width, self.height)
            .with_four_probability(self.four_probability)
            .with_score_rule(rule)
    }
}

fn render(game: &GameSession) {
    println!("{}", game.board());
    println!("score: {}  moves: {}", game.score(), game.moves());
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = args.config();
    if let Err(err) = config.validate() {
        eprintln!("error: {}", err);
        return ExitCode::FAILURE;
    }

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    let mut game = GameSession::with_rng(config, rng);
    game.start();
    render(&game);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let command = line.trim();

        match command {
            "" => continue,
            "q" | "quit" => break,
            "u" | "undo" => {
                if !game.undo() {
                    println!("nothing to undo");
                }
            }
            _ => match command.parse::<Direction>() {
                Ok(direction) => match game.play(direction) {
                    TurnOutcome::Rejected => println!("can't move {}", direction),
                    TurnOutcome::Moved { .. } => {}
                    TurnOutcome::GameOver { .. } => {
                        render(&game);
                        println!("game over");
                        return ExitCode::SUCCESS;
                    }
                },
                Err(err) => {
                    warn!("bad input: {}", err);
                    println!("{}", err);
                    continue;
                }
            },
        }

        render(&game);
        let _ = io::stdout().flush();
    }

    ExitCode::SUCCESS
}
