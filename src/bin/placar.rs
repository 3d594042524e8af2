//! Interactive scoreboard for running a show from a terminal.
//!
//! Keeps the show in a JSON file so a crashed or closed session picks up
//! where it left off.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use placar::core::parse_name_list;
use placar::{EliminationOutcome, Game, GameConfig, GameRng, JsonFileStore, Phase, StateStore};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// File the running show is saved to.
    #[arg(long, default_value = "placar-state.json")]
    state: PathBuf,

    /// JSON game config; missing fields use defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Players per scene when `draw` is given no count.
    #[arg(long)]
    scene_size: Option<usize>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start a show: start Ana, Bia, Caio
    Start {
        #[arg(required = true, num_args = 1..)]
        names: Vec<String>,
    },
    /// Draw players into the next scene.
    Draw { count: Option<usize> },
    /// Score the players on stage.
    Score {
        #[arg(value_parser = clap::value_parser!(i64).range(1..=5))]
        points: i64,
    },
    /// Cut the lowest scorers.
    Eliminate { count: usize },
    /// Undo the last change.
    Undo,
    /// Abandon the show and clear the saved state.
    Reset,
    /// Print the scoreboard.
    Show,
    /// Leave (the show stays saved).
    #[command(alias = "exit")]
    Quit,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    if let Some(size) = cli.scene_size {
        config = config.with_scene_size(size);
    }
    let rng = cli.seed.map(GameRng::new).unwrap_or_default();
    info!(seed = rng.seed(), state = %cli.state.display(), "starting");

    let mut game = Game::resume(config, JsonFileStore::new(&cli.state), rng);
    match game.phase() {
        Phase::Setup => println!("No show in progress. Start one with: start Ana, Bia, Caio"),
        _ => print!("{}", game.scoreboard()),
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let command = match Line::try_parse_from(tokens) {
            Ok(parsed) => parsed.command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };
        if matches!(command, Command::Quit) {
            break;
        }
        run(&mut game, command);
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    GameConfig::from_json(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn run<S: StateStore>(game: &mut Game<S>, command: Command) {
    let result = match command {
        Command::Start { names } => game
            .start_game(&parse_name_list(&names.join(" ")))
            .map(|()| print!("{}", game.scoreboard())),
        Command::Draw { count } => {
            let count = count.unwrap_or(game.config().default_scene_size);
            game.draw_scene(count).map(|outcome| {
                if outcome.round_rolled_over {
                    println!("Round {} begins.", outcome.round);
                }
                print!("{}", game.scoreboard());
            })
        }
        Command::Score { points } => game.apply_score(points).map(|scored| {
            println!("+{points} for {} player(s).", scored.len());
            print!("{}", game.scoreboard());
        }),
        Command::Eliminate { count } => game.eliminate(count).map(|outcome| match outcome {
            EliminationOutcome::Unchanged => {
                println!("Tie at the cut: nobody is eliminated.");
            }
            EliminationOutcome::Eliminated { players, winner, .. } => {
                println!("{} player(s) eliminated.", players.len());
                print!("{}", game.scoreboard());
                if let Some(winner) = winner {
                    println!("*** WINNER: {winner} ***");
                }
            }
        }),
        Command::Undo => {
            if game.undo() {
                print!("{}", game.scoreboard());
            } else {
                println!("Nothing to undo.");
            }
            Ok(())
        }
        Command::Reset => {
            game.reset();
            println!("Show reset.");
            Ok(())
        }
        Command::Show => {
            match game.phase() {
                Phase::Setup => println!("No show in progress."),
                _ => print!("{}", game.scoreboard()),
            }
            Ok(())
        }
        Command::Quit => Ok(()),
    };

    if let Err(err) = result {
        println!("error: {err}");
    }
}
