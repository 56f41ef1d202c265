//! Scalar kinds and the rules for combining them.
//!
//! Every binary vector operation resolves its result kind through
//! [`Promote`]. A narrower integer widens to the wider one, any integer
//! meeting a float becomes that float, and `f32` meeting `f64` becomes `f64`.
//!
//! Mixed signedness widens to a signed kind that holds both operands:
//! `i32` with `u32` becomes `i64`, `u32` with `i64` stays `i64`. There is no
//! signed kind wider than 64 bits, so `i32` or `i64` meeting `u64` becomes
//! `u64`, and a negative operand wraps when converted. Arithmetic on the
//! wrapped value overflows, which panics in debug builds.

use std::fmt::Debug;

use num_traits::{AsPrimitive, Float, Num, NumCast};

/// A numeric kind a vector can hold.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a scalar kind",
    label = "expected a scalar here, found `{Self}`",
    note = "vector-by-vector products use the piecewise operators or `component_mul`/`component_div`"
)]
pub trait Scalar: Num + NumCast + PartialOrd + Copy + Debug + 'static {}

/// Marks a scalar kind as having floating point semantics.
///
/// Custom numeric kinds opt in with an empty impl once they implement
/// [`num_traits::Float`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a floating point kind",
    label = "the type of a refraction index must be floating point",
    note = "custom kinds opt in with `impl geom::FloatingPoint for {Self} {{}}`"
)]
pub trait FloatingPoint: Scalar + Float {}

/// Resolves the scalar kind produced by combining `Self` with `Rhs`.
#[diagnostic::on_unimplemented(
    message = "no promotion rule combines `{Self}` with `{Rhs}`",
    label = "cannot mix `{Self}` and `{Rhs}` here"
)]
pub trait Promote<Rhs: Scalar = Self>: Scalar {
    type Output: Scalar;

    /// Convert a left hand operand into the promoted kind.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Convert a right hand operand into the promoted kind.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;
}

/// The kind resulting from combining `L` with `R`.
pub type Promoted<L, R> = <L as Promote<R>>::Output;

/// The floating kind a scalar kind is measured in.
///
/// Integers measure in `f64`; floating kinds stay in their own precision.
pub trait ToFloat: Scalar {
    type Float: FloatingPoint;

    fn to_float(self) -> Self::Float;
}

pub type FloatOf<S> = <S as ToFloat>::Float;

macro_rules! scalar {
    ($($ty:ty),*) => {
        $(impl Scalar for $ty {})*
    };
}

macro_rules! floating_point {
    ($($ty:ty),*) => {
        $(impl FloatingPoint for $ty {})*
    };
}

macro_rules! to_float {
    ($($ty:ty => $float:ty),* $(,)?) => {
        $(
            impl ToFloat for $ty {
                type Float = $float;

                #[inline]
                fn to_float(self) -> $float {
                    self.as_()
                }
            }
        )*
    };
}

macro_rules! promote {
    (@impl $lhs:ty, $rhs:ty => $out:ty) => {
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote(self) -> $out {
                self.as_()
            }

            #[inline]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs.as_()
            }
        }
    };
    // same kind on both sides
    ($($ty:ty),* $(,)?) => {
        $(promote!(@impl $ty, $ty => $ty);)*
    };
}

macro_rules! promote_pair {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            promote!(@impl $a, $b => $out);
            promote!(@impl $b, $a => $out);
        )*
    };
}

scalar!(i32, u32, i64, u64, f32, f64);
floating_point!(f32, f64);

to_float! {
    i32 => f64,
    u32 => f64,
    i64 => f64,
    u64 => f64,
    f32 => f32,
    f64 => f64,
}

promote!(i32, u32, i64, u64, f32, f64);

promote_pair! {
    i32, u32 => i64;
    i32, i64 => i64;
    i32, u64 => u64;
    u32, i64 => i64;
    u32, u64 => u64;
    i64, u64 => u64;

    i32, f32 => f32;
    u32, f32 => f32;
    i64, f32 => f32;
    u64, f32 => f32;

    i32, f64 => f64;
    u32, f64 => f64;
    i64, f64 => f64;
    u64, f64 => f64;

    f32, f64 => f64;
}

#[cfg(feature = "half")]
mod half_impls {
    use half::f16;
    use num_traits::AsPrimitive;

    use super::{FloatingPoint, Promote, Scalar, ToFloat};

    scalar!(f16);
    floating_point!(f16);
    to_float!(f16 => f16);
    promote!(f16);

    // half precision only meets the other floating kinds
    promote_pair! {
        f16, f32 => f32;
        f16, f64 => f64;
    }
}

#[cfg(test)]
mod tests {
    use std::any::TypeId;

    use super::*;

    fn promotes_to<L: Promote<R>, R: Scalar, O: 'static>() -> bool {
        TypeId::of::<Promoted<L, R>>() == TypeId::of::<O>()
    }

    #[test]
    fn same_kind_is_identity() {
        assert!(promotes_to::<i32, i32, i32>());
        assert!(promotes_to::<u64, u64, u64>());
        assert!(promotes_to::<f32, f32, f32>());
        assert!(promotes_to::<f64, f64, f64>());
    }

    #[test]
    fn integers_widen() {
        assert!(promotes_to::<i32, i64, i64>());
        assert!(promotes_to::<u32, u64, u64>());
        assert!(promotes_to::<u32, i64, i64>());
        assert!(promotes_to::<i64, u32, i64>());
    }

    #[test]
    fn signed_meets_unsigned_widens() {
        assert!(promotes_to::<i32, u32, i64>());
        assert!(promotes_to::<u32, i32, i64>());
        assert!(promotes_to::<u64, i64, u64>());
    }

    #[test]
    fn integer_meets_float() {
        assert!(promotes_to::<i32, f64, f64>());
        assert!(promotes_to::<u64, f32, f32>());
        assert!(promotes_to::<f32, i64, f32>());
        assert!(promotes_to::<f32, f64, f64>());
    }

    #[test]
    fn promote_converts_both_sides() {
        assert_eq!(<i32 as Promote<f64>>::promote(3), 3.0);
        assert_eq!(<i32 as Promote<f64>>::promote_rhs(2.5), 2.5);
        assert_eq!(<u32 as Promote<i32>>::promote_rhs(-1), -1_i64);
        // no wider signed kind than i64, so u64 wraps
        assert_eq!(<i64 as Promote<u64>>::promote(-1), u64::MAX);
    }

    #[test]
    fn measured_kinds() {
        assert_eq!(TypeId::of::<FloatOf<i32>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<FloatOf<u64>>(), TypeId::of::<f64>());
        assert_eq!(TypeId::of::<FloatOf<f32>>(), TypeId::of::<f32>());
        assert_eq!(7_i64.to_float(), 7.0_f64);
    }

    #[cfg(feature = "half")]
    #[test]
    fn half_precision() {
        use half::f16;

        assert!(promotes_to::<f16, f16, f16>());
        assert!(promotes_to::<f16, f32, f32>());
        assert!(promotes_to::<f64, f16, f64>());
        assert_eq!(TypeId::of::<FloatOf<f16>>(), TypeId::of::<f16>());
    }
}
