use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use price_snake::game::SnakeGame;
use price_snake::term::TermManager;

/// Turn-based snake on a fixed 15x15 board.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Append every frame instead of redrawing the screen in place
    #[arg(long)]
    plain: bool,

    /// Skip the banner and start prompt
    #[arg(long)]
    no_intro: bool,

    /// Log filter directive, overriding RUST_LOG (logs go to stderr)
    #[arg(long)]
    log_filter: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    setup_tracing(args.log_filter.as_deref())?;

    let mut game = SnakeGame::new(TermManager::stdio(args.plain));

    if !args.no_intro && !game.show_intro().context("Failed to show intro")? {
        return Ok(());
    }

    game.play().context("Game loop failed")?;
    Ok(())
}

fn setup_tracing(filter: Option<&str>) -> anyhow::Result<()> {
    let filter = match filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("Invalid log filter: {}", directive))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
