use crate::{
    catalog::apply_effects,
    config::TraceConfig,
    effects::contract::EffectState,
    foundation::error::StickerFxResult,
    surface::cpu::{CpuSurface, SurfaceSnapshot},
};

/// Surface state after one traced frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameTrace {
    pub frame: u32,
    pub progress: f64,
    pub surface: SurfaceSnapshot,
}

/// Runs the configured selection over one loop on a blank [`CpuSurface`].
///
/// Drawing state is reset before every frame; pixels and the [`EffectState`] carry over, the
/// same way a host driver would keep them.
#[tracing::instrument(skip(config), fields(frames = config.frames, effects = config.effects.len()))]
pub fn trace_frames(config: &TraceConfig) -> StickerFxResult<Vec<FrameTrace>> {
    config.validate()?;
    let size = config.frame_size();
    let mut surface = CpuSurface::new(size)?;
    let mut state = EffectState::new(config.seed);

    let mut out = Vec::with_capacity(config.frames as usize);
    for frame in 0..config.frames {
        let progress = config.progress_at(frame);
        surface.reset_state();
        apply_effects(&config.effects, progress, &mut surface, size, &mut state)?;
        out.push(FrameTrace {
            frame,
            progress,
            surface: surface.snapshot(),
        });
    }
    tracing::debug!(frames = out.len(), "trace complete");
    Ok(out)
}

#[cfg(test)]
#[path = "../tests/unit/trace.rs"]
mod tests;
