use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::*;

use num_traits::{AsPrimitive, NumCast, ToPrimitive, Zero};

use crate::num::{FloatOf, Promote, Promoted, Scalar, ToFloat};

/// A two dimensional vector over the scalar kind `S`.
///
/// Mixed-kind operations resolve their result kind through
/// [`Promote`](crate::num::Promote), so `Vec2i + Vec2d` is a `Vec2d`.
///
/// Comparison operators are componentwise and only hold when they hold for
/// both components. This is a partial order: `(1, 5)` is neither less than,
/// greater than nor equal to `(5, 1)`. In particular `a <= b` is *not*
/// `a < b || a == b`; `(1, 1) <= (1, 2)` holds while both of those are false.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct Vector2<S> {
    /// The `x` (traditionally, horizontal) component.
    pub x: S,
    /// The `y` (traditionally, vertical) component.
    pub y: S,
}

pub type Vec2i = Vector2<i32>;
pub type Vec2u = Vector2<u32>;
pub type Vec2l = Vector2<i64>;
pub type Vec2ul = Vector2<u64>;
pub type Vec2f = Vector2<f32>;
pub type Vec2d = Vector2<f64>;

impl<S> Vector2<S> {
    /// Constructor taking scalar values directly.
    #[inline]
    pub const fn new(x: S, y: S) -> Self {
        Vector2 { x, y }
    }

    /// Constructor, setting all components to zero.
    #[inline]
    pub fn zero() -> Self
    where
        S: Zero,
    {
        Vector2::new(Zero::zero(), Zero::zero())
    }

    /// Constructor setting all components to the same value.
    #[inline]
    pub fn splat(v: S) -> Self
    where
        S: Clone,
    {
        Vector2 { x: v.clone(), y: v }
    }

    #[inline]
    #[must_use]
    pub fn map<R>(self, f: impl Fn(S) -> R) -> Vector2<R> {
        Vector2::new(f(self.x), f(self.y))
    }
}

impl<S: Copy + 'static> Vector2<S> {
    /// Converting constructor.
    ///
    /// Each component goes through an `as` conversion, so narrowing truncates:
    /// `Vec2i::from_vector(vec2(1.9, -2.9))` is `(1, -2)`.
    #[inline]
    pub fn from_vector<T: AsPrimitive<S>>(source: Vector2<T>) -> Self {
        Vector2::new(source.x.as_(), source.y.as_())
    }

    /// Overwrite both components with converted values from `source`.
    #[inline]
    pub fn assign_from<T: AsPrimitive<S>>(&mut self, source: Vector2<T>) -> &mut Self {
        self.x = source.x.as_();
        self.y = source.y.as_();
        self
    }

    /// Cast into another scalar kind with `as` semantics.
    #[inline]
    pub fn cast<T>(self) -> Vector2<T>
    where
        S: AsPrimitive<T>,
        T: Copy + 'static,
    {
        Vector2::from_vector(self)
    }

    /// Cast into another scalar kind, or `None` if a component does not fit.
    #[inline]
    pub fn try_cast<T: NumCast>(self) -> Option<Vector2<T>>
    where
        S: ToPrimitive,
    {
        Some(Vector2::new(
            <T as NumCast>::from(self.x)?,
            <T as NumCast>::from(self.y)?,
        ))
    }

    /// Swap x and y.
    #[inline]
    pub fn yx(self) -> Self {
        vec2(self.y, self.x)
    }

    /// Cast into an array with x and y.
    #[inline]
    pub fn to_array(self) -> [S; 2] {
        [self.x, self.y]
    }

    /// Cast into a tuple with x and y.
    #[inline]
    pub fn to_tuple(self) -> (S, S) {
        (self.x, self.y)
    }
}

impl<S: Scalar> Vector2<S> {
    /// Dot product with a vector of the same kind. See [`dot`](super::dot)
    /// for mixed kinds.
    #[inline]
    pub fn dot(self, other: Self) -> S {
        self.x * other.x + self.y * other.y
    }

    /// Returns the norm of the cross product [self.x, self.y, 0] x [other.x, other.y, 0].
    #[inline]
    pub fn cross(self, other: Self) -> S {
        self.x * other.y - self.y * other.x
    }

    /// Returns the vector's length squared, in the vector's own kind.
    #[inline]
    pub fn square_length(self) -> S {
        self.dot(self)
    }

    /// Returns the component-wise multiplication of the two vectors.
    #[inline]
    pub fn component_mul<R: Scalar>(self, other: Vector2<R>) -> Vector2<Promoted<S, R>>
    where
        S: Promote<R>,
    {
        self * other
    }

    /// Returns the component-wise division of the two vectors.
    #[inline]
    pub fn component_div<R: Scalar>(self, other: Vector2<R>) -> Vector2<Promoted<S, R>>
    where
        S: Promote<R>,
    {
        self / other
    }

    /// Multiply both components by a scalar of any kind.
    ///
    /// Unlike the `*` operator this also accepts custom scalar kinds.
    #[inline]
    pub fn scale<K: Scalar>(self, k: K) -> Vector2<Promoted<S, K>>
    where
        S: Promote<K>,
    {
        let k = <S as Promote<K>>::promote_rhs(k);
        self.map(<S as Promote<K>>::promote).map(|c| c * k)
    }

    /// Divide both components by a scalar of any kind.
    #[inline]
    pub fn unscale<K: Scalar>(self, k: K) -> Vector2<Promoted<S, K>>
    where
        S: Promote<K>,
    {
        let k = <S as Promote<K>>::promote_rhs(k);
        self.map(<S as Promote<K>>::promote).map(|c| c / k)
    }

    /// `true` if each component is strictly less than the other's.
    #[inline]
    pub fn all_lt<R: Scalar>(self, other: Vector2<R>) -> bool
    where
        S: Promote<R>,
    {
        let (a, b) = promote_pair(self, other);
        a.x < b.x && a.y < b.y
    }

    /// `true` if each component is strictly greater than the other's.
    #[inline]
    pub fn all_gt<R: Scalar>(self, other: Vector2<R>) -> bool
    where
        S: Promote<R>,
    {
        let (a, b) = promote_pair(self, other);
        a.x > b.x && a.y > b.y
    }

    #[inline]
    pub fn all_le<R: Scalar>(self, other: Vector2<R>) -> bool
    where
        S: Promote<R>,
    {
        let (a, b) = promote_pair(self, other);
        a.x <= b.x && a.y <= b.y
    }

    #[inline]
    pub fn all_ge<R: Scalar>(self, other: Vector2<R>) -> bool
    where
        S: Promote<R>,
    {
        let (a, b) = promote_pair(self, other);
        a.x >= b.x && a.y >= b.y
    }
}

impl<S: ToFloat> Vector2<S> {
    /// Convert into the floating kind this vector is measured in.
    #[inline]
    pub fn to_float(self) -> Vector2<FloatOf<S>> {
        self.map(ToFloat::to_float)
    }

    /// Returns the vector length. See [`length`](super::length).
    #[inline]
    pub fn length(self) -> FloatOf<S> {
        super::length(self)
    }

    /// Returns the vector with length of one unit. See
    /// [`normalize`](super::normalize).
    #[inline]
    #[must_use]
    pub fn normalize(self) -> Vector2<FloatOf<S>> {
        super::normalize(self)
    }

    /// Returns the vector with length of one unit.
    ///
    /// Unlike [`Vector2::normalize`], this returns `None` in the case that the
    /// length of the vector is zero.
    #[inline]
    #[must_use]
    pub fn try_normalize(self) -> Option<Vector2<FloatOf<S>>> {
        if self.length().is_zero() {
            None
        } else {
            Some(self.normalize())
        }
    }
}

/// Convert both operands into their promoted kind.
#[inline]
pub(crate) fn promote_pair<L, R>(
    lhs: Vector2<L>,
    rhs: Vector2<R>,
) -> (Vector2<Promoted<L, R>>, Vector2<Promoted<L, R>>)
where
    L: Promote<R>,
    R: Scalar,
{
    (
        lhs.map(<L as Promote<R>>::promote),
        rhs.map(<L as Promote<R>>::promote_rhs),
    )
}

impl<S: Zero> Default for Vector2<S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<L, R> PartialEq<Vector2<R>> for Vector2<L>
where
    L: Promote<R>,
    R: Scalar,
{
    #[inline]
    fn eq(&self, other: &Vector2<R>) -> bool {
        let (a, b) = promote_pair(*self, *other);
        a.x == b.x && a.y == b.y
    }
}

impl<S: Promote + Eq> Eq for Vector2<S> {}

/// The operators are componentwise, and `<=`/`>=` can hold where
/// `partial_cmp` returns `None` (`(1, 1)` against `(1, 2)`). Code that is
/// generic over `PartialOrd` and only calls `partial_cmp` sees the stricter
/// answer; use [`Vector2::all_le`] and friends to ask per relation.
impl<L, R> PartialOrd<Vector2<R>> for Vector2<L>
where
    L: Promote<R>,
    R: Scalar,
{
    /// `Less`/`Greater` only when both components agree, `None` when they
    /// disagree.
    fn partial_cmp(&self, other: &Vector2<R>) -> Option<Ordering> {
        if self.all_lt(*other) {
            Some(Ordering::Less)
        } else if self.all_gt(*other) {
            Some(Ordering::Greater)
        } else if self == other {
            Some(Ordering::Equal)
        } else {
            None
        }
    }

    #[inline]
    fn lt(&self, other: &Vector2<R>) -> bool {
        self.all_lt(*other)
    }

    #[inline]
    fn le(&self, other: &Vector2<R>) -> bool {
        self.all_le(*other)
    }

    #[inline]
    fn gt(&self, other: &Vector2<R>) -> bool {
        self.all_gt(*other)
    }

    #[inline]
    fn ge(&self, other: &Vector2<R>) -> bool {
        self.all_ge(*other)
    }
}

impl<S: Neg> Neg for Vector2<S> {
    type Output = Vector2<S::Output>;

    #[inline]
    fn neg(self) -> Self::Output {
        Vector2::new(-self.x, -self.y)
    }
}

impl<L, R> AddAssign<Vector2<R>> for Vector2<L>
where
    L: Promote<R>,
    R: Scalar,
    Promoted<L, R>: AsPrimitive<L>,
{
    #[inline]
    fn add_assign(&mut self, rhs: Vector2<R>) {
        self.assign_from(*self + rhs);
    }
}

impl<L, R> SubAssign<Vector2<R>> for Vector2<L>
where
    L: Promote<R>,
    R: Scalar,
    Promoted<L, R>: AsPrimitive<L>,
{
    #[inline]
    fn sub_assign(&mut self, rhs: Vector2<R>) {
        self.assign_from(*self - rhs);
    }
}

// `K: Scalar` keeps vectors out: `v *= w` does not compile.
impl<L, K> MulAssign<K> for Vector2<L>
where
    L: Promote<K>,
    K: Scalar,
    Promoted<L, K>: AsPrimitive<L>,
{
    #[inline]
    fn mul_assign(&mut self, rhs: K) {
        self.assign_from(self.scale(rhs));
    }
}

impl<L, K> DivAssign<K> for Vector2<L>
where
    L: Promote<K>,
    K: Scalar,
    Promoted<L, K>: AsPrimitive<L>,
{
    #[inline]
    fn div_assign(&mut self, rhs: K) {
        self.assign_from(self.unscale(rhs));
    }
}

impl<S: Scalar> Sum for Vector2<S> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, v| vec2(acc.x + v.x, acc.y + v.y))
    }
}

impl<'a, S: Scalar> Sum<&'a Self> for Vector2<S> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl<S: fmt::Display> fmt::Display for Vector2<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl<S> From<Vector2<S>> for [S; 2] {
    fn from(v: Vector2<S>) -> Self {
        [v.x, v.y]
    }
}

impl<S> From<[S; 2]> for Vector2<S> {
    fn from([x, y]: [S; 2]) -> Self {
        vec2(x, y)
    }
}

impl<S> From<Vector2<S>> for (S, S) {
    fn from(v: Vector2<S>) -> Self {
        (v.x, v.y)
    }
}

impl<S> From<(S, S)> for Vector2<S> {
    fn from(tuple: (S, S)) -> Self {
        vec2(tuple.0, tuple.1)
    }
}

impl<S> Index<usize> for Vector2<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("Index out of bounds"),
        }
    }
}

impl<S> IndexMut<usize> for Vector2<S> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("Index out of bounds"),
        }
    }
}

#[cfg(feature = "bytemuck")]
unsafe impl<S: bytemuck::Zeroable> bytemuck::Zeroable for Vector2<S> {}

#[cfg(feature = "bytemuck")]
unsafe impl<S: bytemuck::Pod> bytemuck::Pod for Vector2<S> {}

#[inline]
pub const fn vec2<S>(x: S, y: S) -> Vector2<S> {
    Vector2::new(x, y)
}
