//! Stickerfx is a catalog of per-frame sticker effects for a 2D drawing surface.
//!
//! Every effect receives a normalized animation progress (`0.0..=1.0`) and mutates the
//! caller's [`Surface`] right before a single frame is drawn: it composes an affine transform,
//! appends filter primitives, sets shadow state, or rewrites the pixel buffer in place.
//!
//! # Frame contract
//!
//! 1. The driver resets surface state (see [`CpuSurface::reset_state`]).
//! 2. It invokes each selected effect in its own order ([`apply_effects`]).
//! 3. It draws the frame with the accumulated state.
//!
//! Effects compose by accumulation, so the order of non-commuting transforms is up to the caller.
//! Cross-frame state (the jitter direction toggle and the random source) lives in an explicit
//! [`EffectState`] owned by the driver, never in process-wide globals.
#![forbid(unsafe_code)]

mod catalog;
mod color;
mod config;
mod effects;
mod foundation;
mod surface;
mod trace;

pub use catalog::{
    EFFECTS, EffectCategory, EffectDescriptor, PRO_EFFECTS, STATIC_EFFECTS, all_descriptors,
    apply_effects, find_by_id, find_by_label,
};
pub use color::hsv::{Rgb8, hsv_to_rgb};
pub use config::TraceConfig;
pub use effects::contract::{
    EffectClass, EffectFn, EffectState, mirror_horizontal, mirror_vertical, rotate_about,
    scale_centered, turn, wrap_progress,
};
pub use effects::id::EffectId;
pub use foundation::core::{Affine, FrameSize, Point, Vec2};
pub use foundation::error::{StickerFxError, StickerFxResult};
pub use foundation::math::Rng64;
pub use surface::Surface;
pub use surface::cpu::{CpuSurface, SurfaceSnapshot};
pub use surface::filter::{FilterChain, FilterOp, NO_FILTER};
pub use surface::pixels::{PixelBuffer, PixelRegion};
pub use surface::shadow::{Shadow, ShadowColor};
pub use trace::{FrameTrace, trace_frames};
