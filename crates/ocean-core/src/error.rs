use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum OceanError {
    /// The drawing surface is missing or has no area.
    #[error("drawing surface unavailable ({width}x{height})")]
    SurfaceUnavailable { width: u32, height: u32 },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, OceanError>;
