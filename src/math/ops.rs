//! Binary operators and the geometric free functions.
//!
//! None of these intercept numeric edge cases. Integer division by zero
//! panics, integer overflow panics in debug builds and wraps in release, and
//! floating point kinds produce infinities or NaN. Hiding those would hide
//! bugs in the calling code.

use std::ops::*;

use num_traits::{Float, One, Zero};

use super::vector::{promote_pair, vec2, Vector2};
use crate::num::{FloatOf, FloatingPoint, Promote, Promoted, Scalar, ToFloat};

macro_rules! piecewise_op {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl<L, R> $trait<Vector2<R>> for Vector2<L>
            where
                L: Promote<R>,
                R: Scalar,
            {
                type Output = Vector2<Promoted<L, R>>;

                #[inline]
                fn $method(self, rhs: Vector2<R>) -> Self::Output {
                    let (lhs, rhs) = promote_pair(self, rhs);
                    vec2(lhs.x $op rhs.x, lhs.y $op rhs.y)
                }
            }
        )*
    };
}

piecewise_op! {
    Add, add, +;
    Sub, sub, -;
    Mul, mul, *;
    Div, div, /;
}

// Scalar operands are spelled out per kind so that a vector can never reach
// the scaling path. Custom kinds go through `Vector2::scale`/`unscale`.
macro_rules! scalar_ops {
    ($($k:ty),* $(,)?) => {
        $(
            impl<L: Promote<$k>> Mul<$k> for Vector2<L> {
                type Output = Vector2<Promoted<L, $k>>;

                #[inline]
                fn mul(self, scale: $k) -> Self::Output {
                    self.scale(scale)
                }
            }

            impl<R: Scalar> Mul<Vector2<R>> for $k
            where
                $k: Promote<R>,
            {
                type Output = Vector2<Promoted<$k, R>>;

                #[inline]
                fn mul(self, v: Vector2<R>) -> Self::Output {
                    let k = <$k as Promote<R>>::promote(self);
                    v.map(|c| <$k as Promote<R>>::promote_rhs(c) * k)
                }
            }

            impl<L: Promote<$k>> Div<$k> for Vector2<L> {
                type Output = Vector2<Promoted<L, $k>>;

                #[inline]
                fn div(self, scale: $k) -> Self::Output {
                    self.unscale(scale)
                }
            }
        )*
    };
}

scalar_ops!(i32, u32, i64, u64, f32, f64);

#[cfg(feature = "half")]
scalar_ops!(half::f16);

/// Length of `v`.
///
/// Integer kinds are converted to `f64` component by component before
/// squaring, so the sum cannot overflow the integer kind. `f32` vectors stay
/// in `f32`.
#[inline]
pub fn length<S: ToFloat>(v: Vector2<S>) -> FloatOf<S> {
    v.to_float().square_length().sqrt()
}

/// Dot product of two vectors of any kinds, in their promoted kind.
#[inline]
pub fn dot<L, R>(lhs: Vector2<L>, rhs: Vector2<R>) -> Promoted<L, R>
where
    L: Promote<R>,
    R: Scalar,
{
    let (lhs, rhs) = promote_pair(lhs, rhs);
    lhs.dot(rhs)
}

/// Divides `v` by its own length.
///
/// Integer kinds normalize into `f64`, `f32` stays `f32`. The zero vector is
/// not special-cased: dividing by a zero length yields NaN components. Use
/// [`Vector2::try_normalize`] to get `None` instead.
#[inline]
pub fn normalize<S: ToFloat>(v: Vector2<S>) -> Vector2<FloatOf<S>> {
    let len = length(v);
    if len.is_zero() {
        log::trace!("normalizing zero-length vector {:?}", v);
    }
    v.to_float().map(|c| c / len)
}

/// Reflect `incident` about the surface `normal`.
///
/// Computes `i - 2 * dot(i, n) * n` after converting both inputs into the
/// floating kind of their promoted kind.
pub fn reflect<L, R>(incident: Vector2<L>, normal: Vector2<R>) -> Vector2<FloatOf<Promoted<L, R>>>
where
    L: Promote<R>,
    R: Scalar,
    Promoted<L, R>: ToFloat,
{
    let (i, n) = promote_pair(incident, normal);
    let (i, n) = (i.to_float(), n.to_float());
    let one: FloatOf<Promoted<L, R>> = One::one();
    let d = (one + one) * i.dot(n);
    vec2(i.x - d * n.x, i.y - d * n.y)
}

/// Refract `incident` through a surface with the given `normal` and ratio of
/// indices of refraction `eta`.
///
/// With `k = 1 - eta² * (1 - dot(n, i)²)`, returns the zero vector when
/// `k < 0` (total internal reflection) and
/// `eta * i - (eta * dot(n, i) + sqrt(k)) * n` otherwise.
///
/// `eta` must be a [`FloatingPoint`] kind; anything else is rejected at
/// compile time. The result kind is the promotion of both vector kinds and
/// the kind of `eta`.
pub fn refract<L, R, F>(
    incident: Vector2<L>,
    normal: Vector2<R>,
    eta: F,
) -> Vector2<Promoted<Promoted<L, R>, F>>
where
    F: FloatingPoint,
    L: Promote<R>,
    R: Scalar,
    Promoted<L, R>: Promote<F>,
    Promoted<Promoted<L, R>, F>: FloatingPoint,
{
    let (i, n) = promote_pair(incident, normal);
    let i = i.map(<Promoted<L, R> as Promote<F>>::promote);
    let n = n.map(<Promoted<L, R> as Promote<F>>::promote);
    let eta = <Promoted<L, R> as Promote<F>>::promote_rhs(eta);

    let one: Promoted<Promoted<L, R>, F> = One::one();
    let zero: Promoted<Promoted<L, R>, F> = Zero::zero();
    let dot_ni = n.dot(i);
    let k = one - eta * eta * (one - dot_ni * dot_ni);
    if k < zero {
        log::trace!("total internal reflection of {:?} (k = {:?})", i, k);
        return Vector2::zero();
    }

    let s = eta * dot_ni + k.sqrt();
    vec2(eta * i.x - s * n.x, eta * i.y - s * n.y)
}
