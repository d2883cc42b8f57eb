use thiserror::Error;

use crate::board::Square;

#[derive(Error, Debug)]
pub enum SimError {
    #[error("Square {0} is not a Chance square; no card can be resolved there")]
    NotADrawSquare(Square),

    #[error("Distribution has {0} squares, expected 40")]
    MalformedDistribution(usize),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, SimError>;
