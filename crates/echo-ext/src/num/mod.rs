// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Numeric extensions: integer number theory, float helpers and scalar
//! interpolation.

mod float;
mod int;
mod interp;

pub use float::FloatExt;
pub use int::IntExt;
pub use interp::{
    bias, exponential_decay, gamma_to_linear, inverse_lerp, lerp, linear_to_gamma, pulse,
    sawtooth, scale_range, sigmoid, smooth_step, Real, DEFAULT_GAMMA,
};
