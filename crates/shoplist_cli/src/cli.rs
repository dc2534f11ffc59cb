//! CLI argument definitions for the shopping list shell.

use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "shoplist",
    version,
    about = "Interactive shopping list shell",
    long_about = "Reads one command per line from stdin and prints the current list \
                  after every change. Type `help` for the command list."
)]
pub struct Cli {
    /// Item to add before the shell starts (repeatable).
    #[arg(long = "seed", value_name = "NAME")]
    pub seed: Vec<String>,

    /// Start with checked items hidden.
    #[arg(long = "hide-checked")]
    pub hide_checked: bool,

    /// Print full item ids instead of the 8-char short form.
    #[arg(long = "full-ids")]
    pub full_ids: bool,

    /// Log level (trace|debug|info|warn|error). Only used with --log-dir.
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Write rolling log files into this directory.
    #[arg(long = "log-dir", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::Cli;
    use clap::Parser;

    #[test]
    fn parses_repeated_seed_flags() {
        let cli = Cli::try_parse_from([
            "shoplist",
            "--seed",
            "apples",
            "--seed",
            "pears",
            "--hide-checked",
        ])
        .expect("valid args");
        assert_eq!(cli.seed, vec!["apples", "pears"]);
        assert!(cli.hide_checked);
        assert!(!cli.full_ids);
        assert!(cli.log_dir.is_none());
    }
}
