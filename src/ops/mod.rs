pub mod interpolate;
pub mod morph;
pub mod occlusion;

pub use self::interpolate::{interpolate, interpolate_with, lerp_position};
pub use self::morph::{morph_function, morph_lamination, remove_occluded, result, MorphMap};
pub use self::occlusion::Occlusion;

#[cfg(test)]
mod __test__;
