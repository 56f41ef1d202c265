use crate::num::Scalar;

use super::Vector2;

/// Shape information shared by the fixed-dimension vector families.
///
/// The promotion rules live on scalar kinds, so any family implementing this
/// trait resolves mixed-kind results the same way `Vector2` does.
pub trait VectorKind: Copy {
    type Scalar: Scalar;

    const DIMENSION: usize;
}

impl<S: Scalar> VectorKind for Vector2<S> {
    type Scalar = S;

    const DIMENSION: usize = 2;
}
