use std::fs::File;
use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};
use pagekit::config::{ConfigError, PageConfig};
use pagekit::runtime::{ClockMode, RuntimeError};
use pagekit::Runtime;
use simplelog::{Config, WriteLogger};
use tokio::io::BufReader;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("failed to create log file {}: {source}", path.display())]
    LogFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to open script {}: {source}", path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

/// Drive the interactive demo page from the terminal or a script.
#[derive(Parser, Debug)]
#[command(name = "interactive-page", version)]
struct Cli {
    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// JSON file overriding page timings and colors.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, default_value = "interactive-page.log")]
    log: PathBuf,

    #[arg(long, default_value = "debug")]
    log_level: LevelFilter,

    /// Never color the output.
    #[arg(long)]
    plain: bool,

    /// Only `wait` moves time, even when reading stdin.
    #[arg(long)]
    virtual_time: bool,
}

impl Cli {
    fn clock(&self) -> ClockMode {
        if self.script.is_some() || self.virtual_time {
            ClockMode::Virtual
        } else {
            ClockMode::Realtime
        }
    }
}

fn init_logging(cli: &Cli) -> Result<(), HostError> {
    let log_file = File::create(&cli.log).map_err(|source| HostError::LogFile {
        path: cli.log.clone(),
        source,
    })?;
    WriteLogger::init(cli.log_level, Config::default(), log_file)?;
    Ok(())
}

async fn run(cli: Cli) -> Result<(), HostError> {
    init_logging(&cli)?;

    let config = match &cli.config {
        Some(path) => {
            info!("Loading config from {}", path.display());
            PageConfig::load(path)?
        }
        None => PageConfig::default(),
    };

    let stdout = io::stdout();
    let runtime = Runtime::new()
        .config(config)
        .clock(cli.clock())
        .styled(!cli.plain && stdout.is_terminal());

    match &cli.script {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .map_err(|source| HostError::Script {
                    path: path.clone(),
                    source,
                })?;
            runtime.run(BufReader::new(file), stdout).await?;
        }
        None => {
            let interactive = io::stdin().is_terminal();
            runtime
                .banner(interactive)
                .run(BufReader::new(tokio::io::stdin()), stdout)
                .await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["interactive-page"]).unwrap();
        assert_eq!(cli.log, PathBuf::from("interactive-page.log"));
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.clock(), ClockMode::Realtime);
        assert!(!cli.plain);
    }

    #[test]
    fn script_runs_on_virtual_time() {
        let cli = Cli::try_parse_from(["interactive-page", "--script", "demo.txt"]).unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("demo.txt")));
        assert_eq!(cli.clock(), ClockMode::Virtual);
    }

    #[test]
    fn log_level_is_parsed() {
        let cli = Cli::try_parse_from(["interactive-page", "--log-level", "trace", "--virtual-time"])
            .unwrap();
        assert_eq!(cli.log_level, LevelFilter::Trace);
        assert_eq!(cli.clock(), ClockMode::Virtual);
        assert!(Cli::try_parse_from(["interactive-page", "--log-level", "loud"]).is_err());
    }
}
