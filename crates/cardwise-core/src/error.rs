//! Error types for CardWise

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no cards provided: add at least one card before requesting a recommendation")]
    NoCards,

    #[error("purchase amount must be a positive number, got {0}")]
    InvalidAmount(f64),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("invalid merchant rule pattern: {0}")]
    InvalidRule(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
