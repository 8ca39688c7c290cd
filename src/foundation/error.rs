pub type StickerFxResult<T> = Result<T, StickerFxError>;

#[derive(thiserror::Error, Debug)]
pub enum StickerFxError {
    /// A pixel region that is zero-sized or reaches outside the surface.
    #[error(
        "invalid region: {width}x{height} at ({x}, {y}) on a {surface_width}x{surface_height} surface"
    )]
    InvalidRegion {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        surface_width: u32,
        surface_height: u32,
    },

    #[error("validation error: {0}")]
    Validation(String),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StickerFxError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    pub fn is_invalid_region(&self) -> bool {
        matches!(self, Self::InvalidRegion { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
