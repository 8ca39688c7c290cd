//! The effect functions, grouped by what they touch on the surface.

pub(crate) mod contract;
pub(crate) mod filter;
pub(crate) mod fixed;
pub(crate) mod id;
pub(crate) mod pixel;
pub(crate) mod shadow;
pub(crate) mod transform;
