//! Command-line game of Pins.
//!
//! `pins play` starts an interactive game against the computer;
//! `pins simulate` pits two computer difficulties against each other.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pins::core::{Difficulty, GameConfig, PlayerId, DEFAULT_EXPERT_PROBABILITY};
use pins::session::{run_match, MatchConfig, Session};
use pins::ui::{render, Prompter};

/// Play Pins, a misère Nim variant: whoever takes the last pin loses.
#[derive(Parser)]
#[command(name = "pins", about = "The game of Pins against a computer opponent")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the computer
    Play(PlayArgs),

    /// Run computer-vs-computer games and report the results
    Simulate(SimulateArgs),
}

#[derive(Args, Default)]
struct PlayArgs {
    /// Opponent difficulty: novice, intermediate, expert (or 1-3). Asked if omitted.
    #[arg(long)]
    difficulty: Option<Difficulty>,

    /// Random seed (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Who moves first (random if omitted)
    #[arg(long, value_enum)]
    first: Option<FirstMover>,

    /// Probability that the intermediate opponent plays an expert move
    #[arg(long, default_value_t = DEFAULT_EXPERT_PROBABILITY)]
    expert_probability: f64,
}

#[derive(Args)]
struct SimulateArgs {
    /// Difficulty of the first seat
    #[arg(long, default_value = "expert")]
    first: Difficulty,

    /// Difficulty of the second seat
    #[arg(long, default_value = "novice")]
    second: Difficulty,

    /// Number of games
    #[arg(long, default_value_t = 100)]
    games: u32,

    /// Match seed
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Probability that intermediate seats play an expert move
    #[arg(long, default_value_t = DEFAULT_EXPERT_PROBABILITY)]
    expert_probability: f64,
}

#[derive(Clone, Copy, ValueEnum)]
enum FirstMover {
    Human,
    Cpu,
}

const HUMAN: PlayerId = PlayerId::FIRST;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Some(Command::Simulate(args)) => simulate(args),
        Some(Command::Play(args)) => play(args),
        None => play(PlayArgs {
            expert_probability: DEFAULT_EXPERT_PROBABILITY,
            ..PlayArgs::default()
        }),
    }
}

fn play(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    writeln!(prompter.output(), "Welcome to the Game of Pins!")?;
    writeln!(prompter.output(), "The player who is forced to take the last pin loses.")?;

    let difficulty = match args.difficulty {
        Some(difficulty) => difficulty,
        None => match prompter.read_difficulty()? {
            Some(difficulty) => difficulty,
            None => return goodbye(&mut prompter),
        },
    };

    let mut config = GameConfig::default()
        .with_difficulty(difficulty)
        .with_expert_probability(args.expert_probability)
        .with_seed(args.seed.unwrap_or_else(rand::random));
    if let Some(first) = args.first {
        config = config.with_first_player(match first {
            FirstMover::Human => HUMAN,
            FirstMover::Cpu => HUMAN.opponent(),
        });
    }

    let mut session = Session::human_vs_cpu(&config).context("invalid game configuration")?;
    let starter = if session.first_player() == HUMAN { "Player" } else { "Cpu" };
    writeln!(prompter.output(), "\n{starter} will go first.")?;

    while !session.is_over() {
        writeln!(prompter.output(), "\n{}", render(session.board()))?;

        if session.awaiting_human() {
            writeln!(prompter.output(), "Your turn.")?;
            let Some(mv) = prompter.read_move(session.board())? else {
                return goodbye(&mut prompter);
            };
            session.play(mv).context("applying player move")?;
        } else {
            writeln!(prompter.output(), "CPU's turn...")?;
            session.play_cpu().context("applying computer move")?;
            writeln!(prompter.output(), "CPU has made its move.")?;
        }
    }

    if let Some(result) = session.result() {
        let winner = if result.is_winner(HUMAN) { "Player" } else { "CPU" };
        writeln!(prompter.output(), "All pins are gone! {winner} wins!")?;
    }
    Ok(())
}

fn goodbye<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<()> {
    writeln!(prompter.output(), "\nGame exited. Goodbye!")?;
    Ok(())
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let config = MatchConfig::new(args.first, args.second)
        .with_games(args.games)
        .with_seed(args.seed)
        .with_expert_probability(args.expert_probability);

    let report = run_match(&config).context("running match")?;

    println!("{} games, {} vs {}", report.games, config.first, config.second);
    println!(
        "  seat 1 ({}): {} wins ({:.1}%)",
        config.first,
        report.wins[PlayerId::FIRST],
        report.win_rate(PlayerId::FIRST) * 100.0
    );
    println!(
        "  seat 2 ({}): {} wins ({:.1}%)",
        config.second,
        report.wins[PlayerId::SECOND],
        report.win_rate(PlayerId::SECOND) * 100.0
    );
    println!("  first mover won {} games", report.first_mover_wins);
    println!("  average game length: {:.1} moves", report.average_turns());
    Ok(())
}
