use clap::Parser;
use scriptoria::ansi::{self, paint};
use scriptoria::config::Config;
use scriptoria::{Game, RngDice};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scriptoria", version, about = "Explore the mysterious land of Scriptoria")]
struct Cli {
    /// TOML configuration file (defaults to SCRIPTORIA_* environment variables)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed the dice for a reproducible adventure
    #[arg(short, long)]
    seed: Option<u64>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::from_env()?,
    };
    if cli.seed.is_some() {
        cfg.seed = cli.seed;
    }
    if cli.no_color {
        cfg.color = false;
    }

    init_tracing(&cfg.log_filter)?;

    let dice = match cfg.seed {
        Some(seed) => {
            tracing::info!(seed, "using fixed seed");
            RngDice::from_seed(seed)
        }
        None => RngDice::from_entropy(),
    };

    let mut game = Game::new(dice)?;
    println!("{}", paint("Welcome to Scriptoria!", ansi::BOLD, cfg.color));
    println!("{}", game.initialize_game()?);

    run(&mut game, &cfg, io::stdin().lock(), io::stdout().lock())
}

fn run(game: &mut Game, cfg: &Config, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let mut lines = input.lines();

    while !game.is_over() {
        writeln!(out, "\n{}", paint(&format!("Status: {}", game.game_status()), ansi::FG_CYAN, cfg.color))?;
        write!(out, "{} ", paint(&format!("{} >", cfg.prompt), ansi::FG_GREEN, cfg.color))?;
        out.flush()?;

        let Some(line) = lines.next() else {
            writeln!(out, "\n\nThanks for playing Scriptoria!")?;
            return Ok(());
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let output = game.process(&line);
        let color = if output.is_error { ansi::FG_YELLOW } else { "" };
        writeln!(out, "{}", paint(&output.message, color, cfg.color))?;
    }

    let ending = if game.is_won() {
        paint("🎉 Congratulations! You have mastered Scriptoria! 🎉", ansi::BOLD, cfg.color)
    } else {
        paint("💀 Game Over! Restart to try again. 💀", ansi::FG_RED, cfg.color)
    };
    writeln!(out, "\n{}", paint(&game.game_status(), ansi::DIM, cfg.color))?;
    writeln!(out, "\n{ending}")?;

    Ok(())
}

fn init_tracing(filter: &str) -> anyhow::Result<()> {
    use tracing_subscriber::{EnvFilter, prelude::*};

    color_eyre::install().map_err(|e| anyhow::anyhow!("{e}"))?;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(filter))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::uptime()),
        )
        .with(tracing_error::ErrorLayer::default())
        .init();

    Ok(())
}
