//! Static effect lists handed to the host for presentation and selection.

use crate::{
    effects::{
        contract::{EffectClass, EffectState},
        id::EffectId,
    },
    foundation::{core::FrameSize, error::StickerFxResult},
    surface::Surface,
};

/// A label paired with the effect it invokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EffectDescriptor {
    pub id: EffectId,
    pub label: &'static str,
}

impl EffectDescriptor {
    pub const fn new(id: EffectId, label: &'static str) -> Self {
        Self { id, label }
    }

    pub fn class(&self) -> EffectClass {
        self.id.class()
    }

    pub fn apply(
        &self,
        progress: f64,
        surface: &mut dyn Surface,
        size: FrameSize,
        state: &mut EffectState,
    ) -> StickerFxResult<()> {
        self.id.apply(progress, surface, size, state)
    }
}

/// Named, ordered group of descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct EffectCategory {
    pub label: &'static str,
    pub effects: &'static [EffectDescriptor],
}

/// Toggleable animated effects, grouped by what they touch.
pub static EFFECTS: &[EffectCategory] = &[
    EffectCategory {
        label: "フィルタ (Chrome のみ動作確認)",
        effects: &[
            EffectDescriptor::new(EffectId::Kira, "キラ"),
            EffectDescriptor::new(EffectId::Moyamoya, "もやもや"),
            EffectDescriptor::new(EffectId::Foil, "Foil"),
        ],
    },
    EffectCategory {
        label: "変形",
        effects: &[
            EffectDescriptor::new(EffectId::Gatagata, "ガタガタ"),
            EffectDescriptor::new(EffectId::Zoom, "びょいんびょいん"),
            EffectDescriptor::new(EffectId::Rotate, "ルーレット"),
            EffectDescriptor::new(EffectId::Kurukuru, "ねるねる"),
            EffectDescriptor::new(EffectId::Yurayura, "ゆらゆら"),
            EffectDescriptor::new(EffectId::Patapata, "ぱたぱた"),
            EffectDescriptor::new(EffectId::Dokaben, "ドカベン"),
            EffectDescriptor::new(EffectId::Yatta, "ヤッタ"),
            EffectDescriptor::new(EffectId::Poyon, "ぽよーん"),
            EffectDescriptor::new(EffectId::Motimoti, "もちもち"),
            EffectDescriptor::new(EffectId::Blink, "BLINK"),
            EffectDescriptor::new(EffectId::Straight, "直球"),
        ],
    },
    EffectCategory {
        label: "シャドウ",
        effects: &[
            EffectDescriptor::new(EffectId::ShadowRotate, "ぐるぐる"),
            EffectDescriptor::new(EffectId::NaturalBlur, "ブラー"),
            EffectDescriptor::new(EffectId::Neon, "ネオン"),
        ],
    },
];

/// One-shot presentation changes.
pub static STATIC_EFFECTS: &[EffectDescriptor] = &[
    EffectDescriptor::new(EffectId::FlipHoriz, "左右を反転"),
    EffectDescriptor::new(EffectId::FlipVert, "上下を反転"),
];

/// Bonus background effects that rewrite pixels.
pub static PRO_EFFECTS: &[EffectCategory] = &[EffectCategory {
    label: "背景エフェクト",
    effects: &[
        EffectDescriptor::new(EffectId::Tiritiri, "チリチリ"),
        EffectDescriptor::new(EffectId::Psych, "ディスコ"),
        EffectDescriptor::new(EffectId::Dizzy, "サイケ"),
    ],
}];

/// Every descriptor across the three lists, in presentation order.
pub fn all_descriptors() -> impl Iterator<Item = &'static EffectDescriptor> {
    EFFECTS
        .iter()
        .flat_map(|c| c.effects.iter())
        .chain(STATIC_EFFECTS.iter())
        .chain(PRO_EFFECTS.iter().flat_map(|c| c.effects.iter()))
}

pub fn find_by_id(id: EffectId) -> Option<&'static EffectDescriptor> {
    all_descriptors().find(|d| d.id == id)
}

pub fn find_by_label(label: &str) -> Option<&'static EffectDescriptor> {
    all_descriptors().find(|d| d.label == label)
}

/// Applies `ids` to one frame in the given order.
///
/// Nothing is reordered: transforms that do not commute give different results depending on
/// the caller's order. Stops at the first failing effect.
#[tracing::instrument(level = "debug", skip(surface, state))]
pub fn apply_effects(
    ids: &[EffectId],
    progress: f64,
    surface: &mut dyn Surface,
    size: FrameSize,
    state: &mut EffectState,
) -> StickerFxResult<()> {
    for &id in ids {
        id.apply(progress, surface, size, state)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/catalog.rs"]
mod tests;
