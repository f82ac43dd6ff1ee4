use chrono::Utc;
use ecomm_gen::store::scenario::Scenario;
use ecomm_gen::store::scenario::Summary;
use tracing::debug;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::FmtSubscriber;

use crate::config::Config;
use crate::config::Mode;
use crate::error::Error;
use crate::error::Result;

pub mod config;
pub mod error;

pub fn init_tracing(level: impl Into<LevelFilter>) -> Result<()> {
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).map_err(Error::SetGlobalDefaultError)
}

/// Generates the dataset for `mode` as described by `cfg`.
pub fn run(mode: Mode, cfg: Config) -> Result<Summary> {
    debug!("out path: {:?}", cfg.output.path);
    debug!("backfill: {:?}", cfg.backfill);
    debug!("incremental: {:?}", cfg.incremental);

    let scenario_cfg = cfg.try_into_scenario(mode)?;
    debug!("now: {}", scenario_cfg.now);
    debug!(
        "per step: {} customer(s), {} product(s), {} order(s)",
        scenario_cfg.incremental.customers,
        scenario_cfg.incremental.products,
        scenario_cfg.incremental.orders
    );

    let mut scenario = Scenario::new(scenario_cfg);
    let start = Utc::now();
    let summary = scenario.run()?;
    let took = (Utc::now() - start).to_std()?;

    for file in summary.files.iter() {
        info!("{}: {} row(s)", file.name, file.rows);
    }
    info!(
        "generated {} file(s) in {}",
        summary.files.len(),
        humantime::format_duration(took)
    );

    Ok(summary)
}
