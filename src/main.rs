mod cli;
mod commands;
mod config;
mod dispatch;
mod repl;
mod session;
mod style;
mod table;
mod testutil;
mod tokenizer;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = config::resolve(&cli)?;
    init_tracing(&settings.log_filter)?;

    let session = session::Session::new(&settings.start_dir)?;
    let palette = style::Palette::new(settings.color);
    let mut repl = repl::Repl::new(session, palette, settings.json);

    let stdin = std::io::stdin();
    repl.run(stdin.lock(), std::io::stdout(), std::io::stderr())
}

fn init_tracing(filter: &str) -> Result<()> {
    let env_filter = EnvFilter::try_new(filter).or_else(|_| EnvFilter::try_new("warn"))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
    Ok(())
}
