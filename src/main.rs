// src/main.rs
mod canvas;
mod config;
mod driver;
mod error;
mod icon;
mod logging;
mod render;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use config::{Config, DEFAULT_OUTPUT_DIR};
use logging::{init_logging, LoggingConfig};

/// Generate the Hedaya iOS app icon set.
#[derive(Parser, Debug)]
#[command(name = "hedaya-icons", version, about)]
struct Cli {
    /// Directory the PNG files are written to
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Print the icon table and exit without writing anything
    #[arg(long)]
    list: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Explicit log filter in env_logger syntax; overrides -v
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

impl Cli {
    fn logging_config(&self) -> LoggingConfig {
        let default_level = match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        // -v beats RUST_LOG, so turn it into an explicit filter
        let env_filter = self.log.clone().or_else(|| {
            (self.verbose > 0).then(|| default_level.to_string().to_lowercase())
        });
        LoggingConfig {
            env_filter,
            default_level,
        }
    }

    fn config(&self) -> Config {
        Config::new(&self.output_dir)
    }
}

/// Carry out the parsed command and return the process exit status.
fn execute(cli: &Cli) -> u8 {
    if cli.list {
        driver::list();
        return 0;
    }

    match driver::run(&cli.config()) {
        Ok(records) => {
            log::debug!("generated {} icons", records.len());
            0
        }
        Err(err) => {
            let code = err.exit_code();
            eprintln!("❌ {:#}", anyhow::Error::new(err));
            code
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.logging_config());
    ExitCode::from(execute(&cli))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["hedaya-icons"]);
        assert_eq!(cli.config(), Config::default());
        assert!(!cli.list);

        let logging = cli.logging_config();
        assert_eq!(logging.env_filter, None);
        assert_eq!(logging.default_level, LevelFilter::Warn);
    }

    #[test]
    fn test_output_dir_override() {
        let cli = Cli::parse_from(["hedaya-icons", "-o", "out/icons"]);
        assert_eq!(cli.config().output_dir, PathBuf::from("out/icons"));
    }

    #[test]
    fn test_verbosity_filters() {
        let cases = [
            ("-v", "info"),
            ("-vv", "debug"),
            ("-vvv", "trace"),
            ("-vvvv", "trace"),
        ];
        for (flag, expected) in cases {
            let cli = Cli::parse_from(["hedaya-icons", flag]);
            let filter = cli.logging_config().env_filter;
            assert_eq!(filter.as_deref(), Some(expected), "{}", flag);
        }

        let cli = Cli::parse_from(["hedaya-icons", "-v"]);
        assert_eq!(cli.logging_config().default_level, LevelFilter::Info);
    }

    #[test]
    fn test_list_leaves_filesystem_alone() {
        let out = std::env::temp_dir().join(format!(
            "hedaya-icons-list-{}/AppIcon.appiconset",
            std::process::id()
        ));
        let root = out.parent().unwrap().to_path_buf();
        let _ = std::fs::remove_dir_all(&root);

        let cli = Cli::parse_from(["hedaya-icons", "--list", "-o", out.to_str().unwrap()]);
        assert!(cli.list);
        assert_eq!(execute(&cli), 0);
        assert!(!root.exists());
        assert!(!out.exists());
    }

    #[test]
    fn test_explicit_filter_wins() {
        let cli = Cli::parse_from(["hedaya-icons", "-vv", "--log", "hedaya_icons=info"]);
        assert_eq!(
            cli.logging_config().env_filter.as_deref(),
            Some("hedaya_icons=info")
        );
    }
}
