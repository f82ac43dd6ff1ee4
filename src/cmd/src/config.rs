use std::path::Path;
use std::path::PathBuf;

use chrono::SubsecRound;
use chrono::Utc;
use clap::ValueEnum;
use dateparser::DateTimeUtc;
use ecomm_gen::store::scenario;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Error;
use crate::error::Result;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Log {
    pub level: LogLevel,
}

impl Default for Log {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Output {
    pub path: PathBuf,
}

impl Default for Output {
    fn default() -> Self {
        Self {
            path: PathBuf::from("datasets/syn_ecomm_dataset"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Backfill {
    pub period: String,
    pub customers: usize,
    pub products: usize,
    pub orders: usize,
}

impl Default for Backfill {
    fn default() -> Self {
        Self {
            period: "365 days".to_string(),
            customers: 1000,
            products: 500,
            orders: 5000,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Incremental {
    pub period: String,
    pub step: String,
    pub customers_ratio: f64,
    pub products_ratio: f64,
    pub orders_ratio: f64,
    pub update_rate: f64,
}

impl Default for Incremental {
    fn default() -> Self {
        Self {
            period: "7 days".to_string(),
            step: "1 day".to_string(),
            customers_ratio: 0.1,
            products_ratio: 0.1,
            orders_ratio: 0.2,
            update_rate: 0.05,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Generator {
    pub seed: Option<u64>,
    pub now: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub output: Output,
    pub backfill: Backfill,
    pub incremental: Incremental,
    pub generator: Generator,
}

impl Config {
    /// Defaults overlaid with the optional config file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path.to_path_buf()));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn try_into_scenario(self, mode: Mode) -> Result<scenario::Config<StdRng>> {
        let now = match &self.generator.now {
            None => Utc::now(),
            Some(dt) => dt.parse::<DateTimeUtc>()?.0.with_timezone(&Utc),
        }
        .trunc_subsecs(6);

        let rng = match self.generator.seed {
            None => StdRng::from_entropy(),
            Some(seed) => StdRng::seed_from_u64(seed),
        };

        let step = parse_duration(&self.incremental.step)?;
        if step <= chrono::Duration::zero() {
            return Err(Error::BadRequest(format!(
                "incremental step {:?} must be positive",
                self.incremental.step
            )));
        }

        let inc = &self.incremental;
        for (name, value) in [
            ("customers_ratio", inc.customers_ratio),
            ("products_ratio", inc.products_ratio),
            ("orders_ratio", inc.orders_ratio),
        ] {
            if !value.is_finite() || value < 0. {
                return Err(Error::BadRequest(format!(
                    "incremental {name} must be a non-negative number, got {value}"
                )));
            }
        }
        if !(0.0..=1.0).contains(&inc.update_rate) {
            return Err(Error::BadRequest(format!(
                "incremental update_rate must be within [0, 1], got {}",
                inc.update_rate
            )));
        }

        Ok(scenario::Config {
            rng,
            mode: mode.into(),
            out_path: self.output.path,
            now,
            backfill_period: parse_duration(&self.backfill.period)?,
            incremental_period: parse_duration(&inc.period)?,
            step,
            backfill: scenario::Counts {
                customers: self.backfill.customers,
                products: self.backfill.products,
                orders: self.backfill.orders,
            },
            incremental: scenario::Counts {
                customers: ratio_of(self.backfill.customers, inc.customers_ratio),
                products: ratio_of(self.backfill.products, inc.products_ratio),
                orders: ratio_of(self.backfill.orders, inc.orders_ratio),
            },
            update_rate: inc.update_rate,
        })
    }
}

/// `ratio` share of `count`, truncated toward zero.
pub fn ratio_of(count: usize, ratio: f64) -> usize {
    (count as f64 * ratio) as usize
}

fn parse_duration(s: &str) -> Result<chrono::Duration> {
    Ok(chrono::Duration::from_std(parse_duration::parse(s)?)?)
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}

#[derive(Copy, Debug, Clone, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Backfill followed by the incremental steps
    All,
    /// Backfill only
    Backfill,
    /// Incremental steps seeded by an in-memory backfill
    Incremental,
}

impl From<Mode> for scenario::Mode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::All => scenario::Mode::All,
            Mode::Backfill => scenario::Mode::Backfill,
            Mode::Incremental => scenario::Mode::Incremental,
        }
    }
}
