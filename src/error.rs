use thiserror::Error;

/// Construction-time configuration errors.
///
/// Runtime operations on a carousel never fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("viewport height must be a positive finite number, got {0}")]
    InvalidViewportHeight(f32),
}

pub type Result<T, E = CarouselError> = std::result::Result<T, E>;
