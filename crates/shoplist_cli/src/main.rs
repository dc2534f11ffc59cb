//! Shopping list shell entry point.
//!
//! # Responsibility
//! - Parse flags, bootstrap optional file logging, seed the store.
//! - Hand stdin/stdout to the line shell.

mod cli;
mod shell;

use clap::Parser;
use log::warn;
use shoplist_core::{default_log_level, init_logging, RenderOptions, Store, StoreOptions};
use std::io;

use crate::cli::Cli;
use crate::shell::run_shell;

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging_from_cli(&cli) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }

    let mut store = Store::with_options(StoreOptions {
        show_checked: !cli.hide_checked,
        ..StoreOptions::default()
    });
    for rejection in store.seed(&cli.seed) {
        warn!(
            "event=seed_rejected module=cli status=error index={} error_code={}",
            rejection.index,
            rejection.error.code()
        );
        eprintln!(
            "error: cannot add seed item #{}: {}",
            rejection.index + 1,
            rejection.error
        );
    }

    let options = RenderOptions {
        full_ids: cli.full_ids,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(error) = run_shell(&mut store, stdin.lock(), stdout.lock(), options) {
        eprintln!("error: {error}");
        std::process::exit(1);
    }
}

/// Starts file logging when `--log-dir` is given; otherwise leaves the `log`
/// facade uninitialized.
fn init_logging_from_cli(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Some(dir) = cli.log_dir.as_deref() else {
        if cli.log_level.is_some() {
            eprintln!("warning: --log-level has no effect without --log-dir");
        }
        return Ok(());
    };
    let dir = std::path::absolute(dir)?;
    let level = cli.log_level.as_deref().unwrap_or(default_log_level());
    init_logging(level, dir)?;
    Ok(())
}
