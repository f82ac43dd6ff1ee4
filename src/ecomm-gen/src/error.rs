use std::result;

use thiserror::Error;
pub type Result<T> = result::Result<T, EcommGenError>;

#[derive(Error, Debug)]
pub enum EcommGenError {
    #[error("Internal: {0:?}")]
    Internal(String),
    #[error("CSVError: {0:?}")]
    CSVError(#[from] csv::Error),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("FileNotFound: {0:?}")]
    FileNotFound(String),
    #[error("no customers to place orders for")]
    EmptyCustomerPool,
    #[error("no products to place orders with")]
    EmptyProductPool,
    #[error("InvalidUpdateRate: {0} is outside of [0, 1]")]
    InvalidUpdateRate(f64),
}
