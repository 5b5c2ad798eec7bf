//! Filter parameters and their GPU layout.
//!
//! `FilterState` is what the controller mutates; `FilterUniforms` is the same
//! data packed for the fragment shader together with the surface and
//! background sizes.

use crate::constants::*;

/// Clamp `value` into `[min, max]`.
///
/// Applies the upper bound first, then the lower one, so with `min > max` the
/// result is `min`.
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    value.min(max).max(min)
}

/// Closed range a filter parameter is kept in after a drag update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        clamp(value, self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

pub const GRID_SIZE_RANGE: ParamRange = ParamRange::new(GRID_SIZE_MIN, GRID_SIZE_MAX);
pub const DISTORT_RANGE: ParamRange = ParamRange::new(DISTORT_MIN, DISTORT_MAX);
pub const BLUR_RANGE: ParamRange = ParamRange::new(BLUR_MIN, BLUR_MAX);

/// The four uniforms read by the raindrop shader.
///
/// `time` accumulates in `f64` and is narrowed to `f32` in `to_uniforms`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FilterState {
    pub time: f64,
    pub grid_size: f32,
    pub blur: f32,
    pub distort: f32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            time: INITIAL_TIME,
            grid_size: INITIAL_GRID_SIZE,
            blur: INITIAL_BLUR,
            distort: INITIAL_DISTORT,
        }
    }
}

impl FilterState {
    pub fn to_uniforms(&self, resolution: [f32; 2], image_size: [f32; 2]) -> FilterUniforms {
        FilterUniforms {
            time: self.time as f32,
            grid_size: self.grid_size,
            blur: self.blur,
            distort: self.distort,
            resolution,
            image_size,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct FilterUniforms {
    pub time: f32,
    pub grid_size: f32,
    pub blur: f32,
    pub distort: f32,
    pub resolution: [f32; 2],
    pub image_size: [f32; 2],
}
