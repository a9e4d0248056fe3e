/// sha256 — print the SHA-256 digest of a file or of standard input.
use clap::Parser; // trait import enables Sha256Cli::parse()
use colored::Colorize;
use std::process::ExitCode;

use sha256_project::cli::{exit_code_for, Sha256Cli};
use sha256_project::commands;
use sha256_project::config;
use sha256_project::core::debug;
use sha256_project::debug_log;
use sha256_project::io::input::InputSource;

fn run(args: Sha256Cli) -> anyhow::Result<()> {
    let cfg = config::load(&args.config)?;
    if cfg.debug {
        debug::enable();
    }
    debug_log!(
        "config: {}",
        config::resolve_config_path(&args.config)
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string())
    );

    let source = InputSource::from_arg(args.input);
    let stdout = std::io::stdout();
    commands::digest::main_with_opts(&source, &cfg, &mut stdout.lock())
}

fn main() -> ExitCode {
    let args = Sha256Cli::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".bright_red().bold(), e);
            // clap has already exited with EXIT_USAGE for bad arguments.
            ExitCode::from(exit_code_for(&e))
        }
    }
}
