use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cmd::config::Config;
use cmd::config::LogLevel;
use cmd::config::Mode;
use tracing::error;
use tracing::info;

#[derive(Parser)]
#[command(propagate_version = true)]
#[command(author, version, about = "Synthetic e-commerce dataset generator", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value = "all")]
    mode: Mode,
    /// Optional TOML file overriding the default counts, periods and output path
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides log.level from the config file
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // nothing is logged until the subscriber is installed
    let cfg = match Config::load(cli.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = cmd::init_tracing(cli.log_level.unwrap_or(cfg.log.level)) {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    let version = env!("CARGO_PKG_VERSION");
    info!("ecomm-gen v{version}");

    match cmd::run(cli.mode, cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
