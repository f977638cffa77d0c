use std::{io::Write, process::ExitCode};

use clap::Parser;
use colored::Colorize;
use docsearch::{
    cli::Cli,
    config::{self, Config},
    error::{Error, Result},
    query,
    render::{self, RenderOptions},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let filter = if let Ok(env) = std::env::var(config::LOG_VAR) {
        EnvFilter::new(env)
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(Error::Io(err)) if err.kind() == std::io::ErrorKind::BrokenPipe => {
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err}", "[-]".red().bold());
            match err {
                Error::Config(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_env()?;
    let options = cli.options(&config);
    tracing::debug!(roots = config.roots.len(), "configuration loaded");

    if options.colored || options.match_colored {
        colored::control::set_override(true);
    }

    let outcome = query::run(&options, &config)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    render::render(&outcome, RenderOptions::from(&options), &mut out)?;
    out.flush()?;
    Ok(())
}
