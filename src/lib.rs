//! A generic two dimensional vector for geometry, graphics and physics code.
//!
//! [`Vector2`] holds any [`Scalar`] kind. Operations mixing two kinds produce
//! a vector of their [`Promoted`] kind:
//!
//! ```
//! use geom::{length, Vec2d, Vec2f, Vec2i};
//!
//! let v = Vec2i::new(1, 2) + Vec2d::new(0.5, 0.5);
//! assert_eq!(v, Vec2d::new(1.5, 2.5));
//!
//! let len: f32 = length(Vec2f::new(3.0, 4.0));
//! assert_eq!(len, 5.0);
//! ```
//!
//! Type errors are compile errors. A refraction index must be a
//! [`FloatingPoint`] kind:
//!
//! ```compile_fail
//! use geom::{refract, Vec2d};
//!
//! let _ = refract(Vec2d::new(0.0, -1.0), Vec2d::new(0.0, 1.0), 1_i32);
//! ```
//!
//! and a vector is never accepted where a scalar is expected:
//!
//! ```compile_fail
//! use geom::Vec2d;
//!
//! let mut v = Vec2d::new(1.0, 2.0);
//! v *= Vec2d::new(2.0, 2.0);
//! ```
//!
//! Numeric edge cases are left to the scalar kind: normalizing the zero
//! vector gives NaN components and integer division by zero panics.

pub mod math;
pub mod num;

pub use math::*;
pub use num::{FloatOf, FloatingPoint, Promote, Promoted, Scalar, ToFloat};

#[cfg(test)]
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
