//! Othello on the terminal, played by humans, the Lookahead engine, or chance.

use std::error::Error;
use std::io::{self, Write};

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use lookahead_engine::coretypes::{Color, Move};
use lookahead_engine::othello::{heuristic_eval, order_corners_first, UTIL_MAX, UTIL_MIN};
use lookahead_engine::{AlphaBetaSearch, Othello, Position, SearchBuilder};

/// Exhaustive engines solve the game once this few squares are left empty.
const EXHAUSTIVE_EMPTIES: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Controller {
    /// Moves are read from standard input.
    Human,
    /// Moves are chosen by alpha-beta search.
    Engine,
    /// Moves are picked uniformly from the legal moves.
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "lookahead")]
#[command(version, about = "Play Othello against an alpha-beta search engine", long_about = None)]
struct Args {
    /// Who plays black, the side that moves first.
    #[arg(long, value_enum, default_value_t = Controller::Human)]
    black: Controller,

    /// Who plays white.
    #[arg(long, value_enum, default_value_t = Controller::Engine)]
    white: Controller,

    /// Deepest depth limit an engine searches to.
    #[arg(long, default_value_t = 1)]
    depth: u32,

    /// Engines evaluate by weighted disc share and search corners first.
    #[arg(long)]
    heuristic: bool,

    /// Engines search to the end of the game once few squares are empty.
    #[arg(long)]
    exhaustive: bool,

    /// Seed of the random controller.
    #[arg(long)]
    seed: Option<u64>,
}

/// Whatever picks moves for one color.
enum Player {
    Human,
    Engine {
        search: AlphaBetaSearch<Othello>,
        exhaustive: bool,
    },
    Random(StdRng),
}

impl Player {
    fn new(controller: Controller, args: &Args) -> Result<Self, Box<dyn Error>> {
        Ok(match controller {
            Controller::Human => Player::Human,
            Controller::Engine => {
                let mut builder =
                    SearchBuilder::new(Othello, UTIL_MIN, UTIL_MAX).max_depth(args.depth);
                if args.heuristic {
                    builder = builder.eval(heuristic_eval).order_actions(order_corners_first);
                }
                Player::Engine {
                    search: builder.build()?,
                    exhaustive: args.exhaustive,
                }
            }
            Controller::Random => Player::Random(match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }),
        })
    }

    /// Next move for the side to move in `position`, or None if a human quit.
    fn choose(&mut self, position: &Position) -> Result<Option<Move>, Box<dyn Error>> {
        match self {
            Player::Human => read_move(position),
            Player::Engine { search, exhaustive } => {
                let result = if *exhaustive && position.empty_count() <= EXHAUSTIVE_EMPTIES {
                    search.decide_without_depth(position)?
                } else {
                    search.decide(position)?
                };
                info!(best = %result.best_action, score = result.score, "engine decided");
                debug!("{result}");
                Ok(Some(result.best_action))
            }
            Player::Random(rng) => Ok(position.legal_moves().choose(rng).copied()),
        }
    }
}

/// Prompts until a legal move is typed. None on end of input or `quit`.
fn read_move(position: &Position) -> Result<Option<Move>, Box<dyn Error>> {
    let mut input = String::new();
    loop {
        print!("{} > ", position.side_to_move());
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            return Ok(None);
        }

        let trimmed = input.trim();
        match trimmed {
            "" => continue,
            "quit" | "exit" => return Ok(None),
            "help" => {
                println!("Type a square such as d3, or pass when no placement is possible.");
                let moves: Vec<String> = position
                    .legal_moves()
                    .iter()
                    .map(ToString::to_string)
                    .collect();
                println!("Legal moves: {}", moves.join(" "));
                continue;
            }
            _ => (),
        }

        match trimmed.parse::<Move>() {
            Ok(move_) if position.do_move(move_).is_ok() => return Ok(Some(move_)),
            Ok(move_) => println!("{move_} is not legal here, type help to list legal moves."),
            Err(err) => println!("{err}"),
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    println!("Lookahead {}\n", env!("CARGO_PKG_VERSION"));

    let mut black = Player::new(args.black, &args)?;
    let mut white = Player::new(args.white, &args)?;
    let mut position = Position::start_position();

    while !position.is_game_over() {
        println!("{position}");

        let color = position.side_to_move();
        let player = match color {
            Color::Black => &mut black,
            Color::White => &mut white,
        };
        let Some(move_) = player.choose(&position)? else {
            println!("Game abandoned.");
            return Ok(());
        };

        position = position.do_move(move_)?;
        println!("{color} played {move_}.\n");
    }

    println!("{position}");
    let (black_discs, white_discs) = (position.count(Color::Black), position.count(Color::White));
    match black_discs.cmp(&white_discs) {
        std::cmp::Ordering::Greater => println!("Black wins {black_discs} to {white_discs}."),
        std::cmp::Ordering::Less => println!("White wins {white_discs} to {black_discs}."),
        std::cmp::Ordering::Equal => println!("Draw at {black_discs} each."),
    }
    Ok(())
}
