use std::{fmt, str::FromStr};

use crate::{
    effects::{
        contract::{EffectClass, EffectFn, EffectState},
        filter, fixed, pixel, shadow, transform,
    },
    foundation::{
        core::FrameSize,
        error::{StickerFxError, StickerFxResult},
    },
    surface::Surface,
};

/// Stable identifier of every effect in the catalog.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EffectId {
    Kira,
    Moyamoya,
    Foil,
    Gatagata,
    Zoom,
    Rotate,
    Kurukuru,
    Yurayura,
    Patapata,
    Dokaben,
    Yatta,
    Poyon,
    Motimoti,
    Blink,
    Straight,
    ShadowRotate,
    NaturalBlur,
    Neon,
    FlipHoriz,
    FlipVert,
    Tiritiri,
    Psych,
    Dizzy,
}

impl EffectId {
    pub const ALL: [EffectId; 23] = [
        EffectId::Kira,
        EffectId::Moyamoya,
        EffectId::Foil,
        EffectId::Gatagata,
        EffectId::Zoom,
        EffectId::Rotate,
        EffectId::Kurukuru,
        EffectId::Yurayura,
        EffectId::Patapata,
        EffectId::Dokaben,
        EffectId::Yatta,
        EffectId::Poyon,
        EffectId::Motimoti,
        EffectId::Blink,
        EffectId::Straight,
        EffectId::ShadowRotate,
        EffectId::NaturalBlur,
        EffectId::Neon,
        EffectId::FlipHoriz,
        EffectId::FlipVert,
        EffectId::Tiritiri,
        EffectId::Psych,
        EffectId::Dizzy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EffectId::Kira => "kira",
            EffectId::Moyamoya => "moyamoya",
            EffectId::Foil => "foil",
            EffectId::Gatagata => "gatagata",
            EffectId::Zoom => "zoom",
            EffectId::Rotate => "rotate",
            EffectId::Kurukuru => "kurukuru",
            EffectId::Yurayura => "yurayura",
            EffectId::Patapata => "patapata",
            EffectId::Dokaben => "dokaben",
            EffectId::Yatta => "yatta",
            EffectId::Poyon => "poyon",
            EffectId::Motimoti => "motimoti",
            EffectId::Blink => "blink",
            EffectId::Straight => "straight",
            EffectId::ShadowRotate => "shadow_rotate",
            EffectId::NaturalBlur => "natural_blur",
            EffectId::Neon => "neon",
            EffectId::FlipHoriz => "flip_horiz",
            EffectId::FlipVert => "flip_vert",
            EffectId::Tiritiri => "tiritiri",
            EffectId::Psych => "psych",
            EffectId::Dizzy => "dizzy",
        }
    }

    pub fn class(self) -> EffectClass {
        match self {
            EffectId::Kira | EffectId::Moyamoya | EffectId::Foil => EffectClass::Filter,
            EffectId::ShadowRotate | EffectId::NaturalBlur | EffectId::Neon => EffectClass::Shadow,
            EffectId::FlipHoriz | EffectId::FlipVert => EffectClass::Static,
            EffectId::Tiritiri | EffectId::Psych | EffectId::Dizzy => EffectClass::Pixel,
            _ => EffectClass::Transform,
        }
    }

    /// Whether progress `0.0` and `1.0` leave the surface in the same state.
    ///
    /// False for threshold/one-shot effects (`yatta`, `blink`, `straight`), for the
    /// `natural_blur` ramp, for `gatagata`, which is random per call, and for the pixel effects.
    pub fn loops_seamlessly(self) -> bool {
        match self {
            EffectId::Kira
            | EffectId::Moyamoya
            | EffectId::Foil
            | EffectId::Zoom
            | EffectId::Rotate
            | EffectId::Kurukuru
            | EffectId::Yurayura
            | EffectId::Patapata
            | EffectId::Dokaben
            | EffectId::Poyon
            | EffectId::Motimoti
            | EffectId::ShadowRotate
            | EffectId::Neon
            | EffectId::FlipHoriz
            | EffectId::FlipVert => true,
            EffectId::Gatagata
            | EffectId::Yatta
            | EffectId::Blink
            | EffectId::Straight
            | EffectId::NaturalBlur
            | EffectId::Tiritiri
            | EffectId::Psych
            | EffectId::Dizzy => false,
        }
    }

    pub fn effect_fn(self) -> EffectFn {
        match self {
            EffectId::Kira => filter::kira,
            EffectId::Moyamoya => filter::moyamoya,
            EffectId::Foil => filter::foil,
            EffectId::Gatagata => transform::gatagata,
            EffectId::Zoom => transform::zoom,
            EffectId::Rotate => transform::rotate,
            EffectId::Kurukuru => transform::kurukuru,
            EffectId::Yurayura => transform::yurayura,
            EffectId::Patapata => transform::patapata,
            EffectId::Dokaben => transform::dokaben,
            EffectId::Yatta => transform::yatta,
            EffectId::Poyon => transform::poyon,
            EffectId::Motimoti => transform::motimoti,
            EffectId::Blink => transform::blink,
            EffectId::Straight => transform::straight,
            EffectId::ShadowRotate => shadow::shadow_rotate,
            EffectId::NaturalBlur => shadow::natural_blur,
            EffectId::Neon => shadow::neon,
            EffectId::FlipHoriz => fixed::flip_horiz,
            EffectId::FlipVert => fixed::flip_vert,
            EffectId::Tiritiri => pixel::tiritiri,
            EffectId::Psych => pixel::psych,
            EffectId::Dizzy => pixel::dizzy,
        }
    }

    pub fn apply(
        self,
        progress: f64,
        surface: &mut dyn Surface,
        size: FrameSize,
        state: &mut EffectState,
    ) -> StickerFxResult<()> {
        (self.effect_fn())(progress, surface, size, state)
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EffectId {
    type Err = StickerFxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        EffectId::ALL
            .into_iter()
            .find(|id| id.as_str() == key)
            .ok_or_else(|| StickerFxError::validation(format!("unknown effect id '{}'", s.trim())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/id.rs"]
mod tests;
