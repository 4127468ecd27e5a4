//! Vectors.

use crate::num::{self, Float, Scalar};
use approx::{AbsDiffEq, RelativeEq};
use bytemuck::{Pod, Zeroable};
use num_traits::AsPrimitive;
use std::{
    fmt,
    mem::MaybeUninit,
    ops::{Index, IndexMut},
};
use thiserror::Error;

/// Errors from the checked vector operations.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    #[error("Cannot normalize null vector")]
    NullVector,

    #[error("Cannot normalize point at infinity")]
    PointAtInfinity,
}

/// Metadata shared by the fixed-size vector types, so that generic code can
/// refer to the base type and dimension count of a vector type `V` as
/// `V::BaseType` and `V::DIMENSIONS`.
pub trait Vector {
    type BaseType;
    const DIMENSIONS: usize;
}

/// A 3-dimensional vector.
///
/// This type only supports a few basic operations, as it is primarily intended
/// as the source and target of conversions to and from [`Vec4`].
#[repr(C)]
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Vec3<T> {
    x: T,
    y: T,
    z: T,
}

/// A 4-dimensional vector.
///
/// All four components are always initialized. The [`Default`] vector is all
/// zeros; code that fills large buffers of vectors and wants to skip the
/// zeroing must go through [`Vec4::uninit`] explicitly.
///
/// Length and normalization are only available when the base type is a
/// [`Float`]:
///
/// ```compile_fail
/// use vec4::Vec4i;
/// let _ = Vec4i::new(1, 2, 3, 4).length();
/// ```
#[repr(C)]
#[derive(Clone, Copy, Default)]
pub struct Vec4<T> {
    x: T,
    y: T,
    z: T,
    w: T,
}

pub type Vec3s = Vec3<i16>;
pub type Vec3i = Vec3<i32>;
pub type Vec3i64 = Vec3<i64>;
pub type Vec3f = Vec3<f32>;
pub type Vec3d = Vec3<f64>;

pub type Vec4s = Vec4<i16>;
pub type Vec4i = Vec4<i32>;
pub type Vec4i64 = Vec4<i64>;
pub type Vec4f = Vec4<f32>;
pub type Vec4d = Vec4<f64>;

impl<T: Scalar> Vec3<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// Converts the vector to 4D by appending the given w-component.
    #[inline]
    pub const fn extended(&self, w: T) -> Vec4<T> {
        Vec4::new(self.x, self.y, self.z, w)
    }

    /// The number of components, i.e. 3.
    #[inline]
    pub const fn dimensions() -> usize {
        3
    }
}

impl<T> Vector for Vec3<T> {
    type BaseType = T;
    const DIMENSIONS: usize = 3;
}

impl<T: Scalar> From<[T; 3]> for Vec3<T> {
    #[inline]
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T: Scalar> From<Vec3<T>> for [T; 3] {
    #[inline]
    fn from(vector: Vec3<T>) -> Self {
        [vector.x, vector.y, vector.z]
    }
}

impl<T> Index<usize> for Vec3<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} is out of bounds for a 3-dimensional vector"),
        }
    }
}

impl<T> IndexMut<usize> for Vec3<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} is out of bounds for a 3-dimensional vector"),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec3")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.x, self.y, self.z)
    }
}

// SAFETY: `Vec3` is `repr(C)` with three fields of type `T`, so it has no
// padding and any bit pattern valid for `T` is valid for each field.
unsafe impl<T: Zeroable> Zeroable for Vec3<T> {}
unsafe impl<T: Pod> Pod for Vec3<T> {}

impl<T: Scalar> Vec4<T> {
    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a new vector with all zeros.
    #[inline]
    pub const fn zeros() -> Self {
        Self::same(T::ZERO)
    }

    /// Creates a new vector with the same value for all components.
    #[inline]
    pub const fn same(value: T) -> Self {
        Self::new(value, value, value, value)
    }

    /// The x-axis unit vector.
    #[inline]
    pub const fn unit_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// The y-axis unit vector.
    #[inline]
    pub const fn unit_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO, T::ZERO)
    }

    /// The z-axis unit vector.
    #[inline]
    pub const fn unit_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE, T::ZERO)
    }

    /// The w-axis unit vector.
    #[inline]
    pub const fn unit_w() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO, T::ONE)
    }

    /// Returns storage for a vector whose components are left uninitialized.
    ///
    /// Writing the vector and calling [`MaybeUninit::assume_init`] is up to
    /// the caller. Reading any component before it has been written is
    /// undefined behavior.
    #[inline]
    pub const fn uninit() -> MaybeUninit<Self> {
        MaybeUninit::uninit()
    }

    /// Returns an array of `N` uninitialized vectors. See [`Self::uninit`].
    #[inline]
    pub const fn uninit_array<const N: usize>() -> [MaybeUninit<Self>; N] {
        [const { MaybeUninit::uninit() }; N]
    }

    /// Creates a vector by casting each component of a vector with another
    /// base type, with the semantics of an `as` cast (truncation, saturation
    /// and rounding as for the primitive types, no range checks).
    #[inline]
    pub fn from_other<S>(other: &Vec4<S>) -> Self
    where
        S: Scalar + AsPrimitive<T>,
    {
        let cast = |component: S| AsPrimitive::<T>::as_(component);
        Self::new(cast(other.x), cast(other.y), cast(other.z), cast(other.w))
    }

    /// Casts each component to the base type `U`. See [`Self::from_other`].
    #[inline]
    pub fn cast<U>(&self) -> Vec4<U>
    where
        U: Scalar,
        T: AsPrimitive<U>,
    {
        Vec4::from_other(self)
    }

    /// Creates a homogeneous vector from a 3D vector by casting its components
    /// and setting w to one.
    #[inline]
    pub fn from_vec3<S>(vector: &Vec3<S>) -> Self
    where
        S: Scalar + AsPrimitive<T>,
    {
        let cast = |component: S| AsPrimitive::<T>::as_(component);
        Self::new(cast(vector.x), cast(vector.y), cast(vector.z), T::ONE)
    }

    /// The x-component.
    #[inline]
    pub const fn x(&self) -> T {
        self.x
    }

    /// The y-component.
    #[inline]
    pub const fn y(&self) -> T {
        self.y
    }

    /// The z-component.
    #[inline]
    pub const fn z(&self) -> T {
        self.z
    }

    /// The w-component.
    #[inline]
    pub const fn w(&self) -> T {
        self.w
    }

    /// A mutable reference to the x-component.
    #[inline]
    pub const fn x_mut(&mut self) -> &mut T {
        &mut self.x
    }

    /// A mutable reference to the y-component.
    #[inline]
    pub const fn y_mut(&mut self) -> &mut T {
        &mut self.y
    }

    /// A mutable reference to the z-component.
    #[inline]
    pub const fn z_mut(&mut self) -> &mut T {
        &mut self.z
    }

    /// A mutable reference to the w-component.
    #[inline]
    pub const fn w_mut(&mut self) -> &mut T {
        &mut self.w
    }

    /// The components as an array.
    #[inline]
    pub const fn components(&self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Computes the dot product of this vector with another.
    #[inline]
    pub fn dot(&self, other: &Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Negates every component in place.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        *self = -*self;
        self
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by at most `e`.
    pub fn equal_with_abs_error(&self, other: &Self, e: T) -> bool {
        (0..4).all(|i| num::equal_with_abs_error(self[i], other[i], e))
    }

    /// Whether every component differs from the corresponding component of
    /// `other` by at most `e` times the magnitude of the component of `self`.
    ///
    /// The error is relative to `self`, not to `other`, so swapping the
    /// operands can change the result.
    pub fn equal_with_rel_error(&self, other: &Self, e: T) -> bool {
        (0..4).all(|i| num::equal_with_rel_error(self[i], other[i], e))
    }

    /// Returns a vector with the given closure applied to each component.
    #[inline]
    pub fn mapped(&self, mut f: impl FnMut(T) -> T) -> Self {
        Self::new(f(self.x), f(self.y), f(self.z), f(self.w))
    }

    /// Returns a vector with the given closure applied to each pair of
    /// corresponding components.
    #[inline]
    fn zipped_with(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::new(
            f(self.x, other.x),
            f(self.y, other.y),
            f(self.z, other.z),
            f(self.w, other.w),
        )
    }

    /// The most negative finite value of the base type.
    #[inline]
    pub const fn base_type_lowest() -> T {
        T::LOWEST
    }

    /// The largest finite value of the base type.
    #[inline]
    pub const fn base_type_max() -> T {
        T::MAX
    }

    /// The smallest positive normal value of a float base type, or the
    /// minimum value of an integer base type.
    #[inline]
    pub const fn base_type_smallest() -> T {
        T::SMALLEST
    }

    /// The smallest `e` for which `1 + e != 1` in the base type.
    #[inline]
    pub const fn base_type_epsilon() -> T {
        T::EPSILON
    }

    /// The number of components, i.e. 4.
    #[inline]
    pub const fn dimensions() -> usize {
        4
    }
}

impl<T: Float> Vec4<T> {
    /// Computes the square of the length of the vector.
    #[inline]
    pub fn length2(&self) -> T {
        self.dot(self)
    }

    /// Computes the length of the vector.
    ///
    /// When the squared length underflows below twice the smallest normal
    /// value, or overflows to infinity, the length is instead computed from
    /// the components scaled by the largest magnitude, which gives the correct
    /// result as long as it is representable.
    pub fn length(&self) -> T {
        let length2 = self.length2();

        if Self::squared_length_out_of_range(length2) {
            return self.length_scaled();
        }

        length2.sqrt()
    }

    /// Whether [`Self::length`] has to fall back to scaling the components
    /// because the squared length underflows or overflows.
    #[inline]
    pub fn uses_scaled_length(&self) -> bool {
        Self::squared_length_out_of_range(self.length2())
    }

    fn squared_length_out_of_range(length2: T) -> bool {
        length2 < T::TWO * T::SMALLEST || length2.is_infinite()
    }

    fn length_scaled(&self) -> T {
        let abs = self.mapped(|component| {
            if component >= T::ZERO {
                component
            } else {
                -component
            }
        });

        let mut max = abs.x;
        for component in [abs.y, abs.z, abs.w] {
            if max < component {
                max = component;
            }
        }

        if max == T::ZERO {
            return T::ZERO;
        }
        if max.is_infinite() {
            return max;
        }

        // Divide rather than multiply by the reciprocal, which may overflow.
        let scaled = abs.mapped(|component| component / max);

        max * scaled.dot(&scaled).sqrt()
    }

    /// Normalizes the vector in place. A zero vector is left unchanged.
    pub fn normalize(&mut self) -> &mut Self {
        let length = self.length();

        if length != T::ZERO {
            *self /= length;
        }
        self
    }

    /// Normalizes the vector in place.
    ///
    /// # Errors
    /// Returns [`VectorError::NullVector`] if the vector has zero length, in
    /// which case it is left unchanged.
    pub fn normalize_exc(&mut self) -> Result<&mut Self, VectorError> {
        let length = self.length();

        if length == T::ZERO {
            return Err(VectorError::NullVector);
        }

        *self /= length;
        Ok(self)
    }

    /// Normalizes the vector in place without checking for zero length.
    ///
    /// The vector must have non-zero length. A zero vector ends up with NaN
    /// components.
    #[inline]
    pub fn normalize_non_null(&mut self) -> &mut Self {
        let length = self.length();
        *self /= length;
        self
    }

    /// Computes the normalized version of the vector. A zero vector gives a
    /// zero vector.
    pub fn normalized(&self) -> Self {
        let length = self.length();

        if length == T::ZERO {
            return Self::zeros();
        }

        self / length
    }

    /// Computes the normalized version of the vector.
    ///
    /// # Errors
    /// Returns [`VectorError::NullVector`] if the vector has zero length.
    pub fn normalized_exc(&self) -> Result<Self, VectorError> {
        let length = self.length();

        if length == T::ZERO {
            return Err(VectorError::NullVector);
        }

        Ok(self / length)
    }

    /// Computes the normalized version of the vector without checking for
    /// zero length. See [`Self::normalize_non_null`].
    #[inline]
    pub fn normalized_non_null(&self) -> Self {
        self / self.length()
    }

    /// Projects the homogeneous vector to 3D by dividing x, y and z by w.
    #[inline]
    pub fn to_vec3(&self) -> Vec3<T> {
        Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
    }

    /// Projects the homogeneous vector to 3D by dividing x, y and z by w.
    ///
    /// # Errors
    /// Returns [`VectorError::PointAtInfinity`] if any of the divisions would
    /// overflow, which includes every case with a zero w.
    pub fn try_to_vec3(&self) -> Result<Vec3<T>, VectorError> {
        let abs_w = if self.w >= T::ZERO { self.w } else { -self.w };

        if abs_w < T::ONE {
            let bound = T::MAX * abs_w;
            if [self.x, self.y, self.z]
                .into_iter()
                .any(|component| component <= -bound || component >= bound)
            {
                return Err(VectorError::PointAtInfinity);
            }
        }

        Ok(self.to_vec3())
    }
}

impl<T> Vector for Vec4<T> {
    type BaseType = T;
    const DIMENSIONS: usize = 4;
}

impl<T: Scalar> From<[T; 4]> for Vec4<T> {
    #[inline]
    fn from([x, y, z, w]: [T; 4]) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vec4<T>> for [T; 4] {
    #[inline]
    fn from(vector: Vec4<T>) -> Self {
        vector.components()
    }
}

impl<T: Scalar> From<(T, T, T, T)> for Vec4<T> {
    #[inline]
    fn from((x, y, z, w): (T, T, T, T)) -> Self {
        Self::new(x, y, z, w)
    }
}

impl<T: Scalar> From<Vec3<T>> for Vec4<T> {
    #[inline]
    fn from(vector: Vec3<T>) -> Self {
        Self::from_vec3(&vector)
    }
}

impl<T, S> PartialEq<Vec4<S>> for Vec4<T>
where
    T: Scalar,
    S: Scalar + AsPrimitive<T>,
{
    /// Compares after casting the components of `other` to the base type of
    /// `self`.
    #[inline]
    fn eq(&self, other: &Vec4<S>) -> bool {
        let other = Self::from_other(other);
        self.x == other.x && self.y == other.y && self.z == other.z && self.w == other.w
    }
}

impl_binop!(Add, add, [T: Scalar], Vec4<T>, Vec4<T>, Vec4<T>, |a, b| {
    a.zipped_with(b, |u, v| u + v)
});

impl_binop!(Sub, sub, [T: Scalar], Vec4<T>, Vec4<T>, Vec4<T>, |a, b| {
    a.zipped_with(b, |u, v| u - v)
});

impl_binop!(Mul, mul, [T: Scalar], Vec4<T>, Vec4<T>, Vec4<T>, |a, b| {
    a.zipped_with(b, |u, v| u * v)
});

impl_binop!(Div, div, [T: Scalar], Vec4<T>, Vec4<T>, Vec4<T>, |a, b| {
    a.zipped_with(b, |u, v| u / v)
});

impl_binop!(Mul, mul, [T: Scalar], Vec4<T>, T, Vec4<T>, |a, b| {
    a.mapped(|u| u * *b)
});

impl_binop!(Div, div, [T: Scalar], Vec4<T>, T, Vec4<T>, |a, b| {
    a.mapped(|u| u / *b)
});

impl_scalar_left_mul!(Vec4; i8, i16, i32, i64, f32, f64);

// The dot product as an operator.
impl_binop!(BitXor, bitxor, [T: Scalar], Vec4<T>, Vec4<T>, T, |a, b| {
    a.dot(b)
});

impl_binop_assign!(AddAssign, add_assign, [T: Scalar], Vec4<T>, Vec4<T>, |a, b| {
    *a = &*a + b;
});

impl_binop_assign!(SubAssign, sub_assign, [T: Scalar], Vec4<T>, Vec4<T>, |a, b| {
    *a = &*a - b;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar], Vec4<T>, Vec4<T>, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(DivAssign, div_assign, [T: Scalar], Vec4<T>, Vec4<T>, |a, b| {
    *a = &*a / b;
});

impl_binop_assign!(MulAssign, mul_assign, [T: Scalar], Vec4<T>, T, |a, b| {
    *a = &*a * b;
});

impl_binop_assign!(DivAssign, div_assign, [T: Scalar], Vec4<T>, T, |a, b| {
    *a = &*a / b;
});

impl_unary_op!(Neg, neg, [T: Scalar], Vec4<T>, Vec4<T>, |val| {
    val.mapped(|u| -u)
});

impl<T> Index<usize> for Vec4<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index {index} is out of bounds for a 4-dimensional vector"),
        }
    }
}

impl<T> IndexMut<usize> for Vec4<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index {index} is out of bounds for a 4-dimensional vector"),
        }
    }
}

impl<T> AbsDiffEq for Vec4<T>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon {
        T::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        (0..4).all(|i| self[i].abs_diff_eq(&other[i], epsilon))
    }
}

impl<T> RelativeEq for Vec4<T>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon {
        T::default_max_relative()
    }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        (0..4).all(|i| self[i].relative_eq(&other[i], epsilon, max_relative))
    }
}

impl<T: fmt::Debug> fmt::Debug for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vec4")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Vec4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {} {})", self.x, self.y, self.z, self.w)
    }
}

// SAFETY: `Vec4` is `repr(C)` with four fields of type `T`, so it has no
// padding and any bit pattern valid for `T` is valid for each field.
unsafe impl<T: Zeroable> Zeroable for Vec4<T> {}
unsafe impl<T: Pod> Pod for Vec4<T> {}
