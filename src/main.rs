mod cli;

use crate::cli::app::App;
use anyhow::Result;
use clap::{ArgAction, Parser};
use rustmemkv::config::{DEFAULT_PROMPT, ReplConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{Level, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "rustmemkv")]
#[command(about = "Interactive in-memory key/value store with nested transactions")]
#[command(version)]
struct Cli {
    /// Prompt written before each command
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Do not write a prompt (useful when piping commands in)
    #[arg(long)]
    no_prompt: bool,

    /// Read commands from a file instead of standard input
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ReplConfig::new()
        .prompt(&cli.prompt)
        .show_prompt(!cli.no_prompt);
    if let Some(path) = cli.script {
        config = config.script(path);
    }

    App::new(config).run()
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => match EnvFilter::try_new(&directives) {
            Ok(filter) => tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init(),
            Err(err) => {
                tracing_subscriber::fmt()
                    .with_max_level(level)
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .init();
                warn!(%err, directives = %directives, "ignoring malformed RUST_LOG");
            }
        },
        Err(_) => tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init(),
    }
}
