use std::result;

use chrono::OutOfRangeError;
use ecomm_gen::error::EcommGenError;
use thiserror::Error;
use tracing::subscriber::SetGlobalDefaultError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    EcommGen(#[from] EcommGenError),
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("BadRequest: {0:?}")]
    BadRequest(String),
    #[error("Config: {0:?}")]
    Config(#[from] config::ConfigError),
    #[error("TimeDurationOutOfRange: {0:?}")]
    TimeDurationOutOfRange(#[from] OutOfRangeError),
    #[error("ParseDuration: {0:?}")]
    ParseDuration(#[from] parse_duration::parse::Error),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(#[from] SetGlobalDefaultError),
    #[error("other: {0:?}")]
    Other(#[from] anyhow::Error),
}
