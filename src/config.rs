use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context as _;

use crate::{
    effects::id::EffectId,
    foundation::{
        core::FrameSize,
        error::{StickerFxError, StickerFxResult},
    },
};

fn default_extent() -> u32 {
    128
}

fn default_frames() -> u32 {
    12
}

/// Frame-by-frame inspection settings read from JSON.
///
/// Missing fields take defaults (128x128, 12 frames, seed 0, no effects); unknown fields are
/// rejected.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TraceConfig {
    #[serde(default = "default_extent")]
    pub width: u32,
    #[serde(default = "default_extent")]
    pub height: u32,
    /// Frames per loop; frame `i` is drawn at progress `i / frames`.
    #[serde(default = "default_frames")]
    pub frames: u32,
    #[serde(default)]
    pub seed: u64,
    #[serde(default)]
    pub effects: Vec<EffectId>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            width: default_extent(),
            height: default_extent(),
            frames: default_frames(),
            seed: 0,
            effects: Vec::new(),
        }
    }
}

impl TraceConfig {
    pub fn from_json_str(s: &str) -> StickerFxResult<Self> {
        serde_json::from_str(s).map_err(|e| StickerFxError::serde(e.to_string()))
    }

    pub fn from_json_file(path: &Path) -> StickerFxResult<Self> {
        let f = File::open(path)
            .with_context(|| format!("open trace config '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(f))
            .map_err(|e| StickerFxError::serde(e.to_string()))
    }

    pub fn to_json_pretty(&self) -> StickerFxResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| StickerFxError::serde(e.to_string()))
    }

    pub fn validate(&self) -> StickerFxResult<()> {
        FrameSize::new(self.width, self.height)?;
        if self.frames == 0 {
            return Err(StickerFxError::validation("trace frames must be > 0"));
        }
        Ok(())
    }

    pub fn frame_size(&self) -> FrameSize {
        FrameSize {
            width: self.width,
            height: self.height,
        }
    }

    pub fn progress_at(&self, frame: u32) -> f64 {
        f64::from(frame) / f64::from(self.frames.max(1))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
