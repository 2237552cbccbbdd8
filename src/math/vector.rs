use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{impl_abs_diff_eq, Tuple, Xyz};

/// A free direction or displacement in 3D space.
///
/// The homogeneous coordinate is always 0 and is not stored.
///
/// Operators consume their operands and return a new value. The `*Assign`
/// operators and [`Vector::normalize`] update in place instead.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector(Xyz);

impl Vector {
    /// Creates a new vector.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Xyz::new(x, y, z))
    }

    /// Wraps raw three-component storage as a vector.
    #[must_use]
    pub fn from_xyz(xyz: Xyz) -> Self {
        Self(xyz)
    }

    /// The zero vector.
    #[must_use]
    pub fn zero() -> Self {
        Self(Xyz::zeros())
    }

    /// The vector `(1, 1, 1)`.
    #[must_use]
    pub fn ones() -> Self {
        Self(Xyz::repeat(1.0))
    }

    /// Multiplies every component by `scalar`.
    ///
    /// Negation is `scale(-1.0)`.
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        self * scalar
    }

    /// Dot product.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f64 {
        self.0.dot(&other.0)
    }

    /// Right-handed cross product. Not commutative: `a.cross(b) == -b.cross(a)`.
    #[must_use]
    pub fn cross(&self, other: &Self) -> Self {
        let (a, b) = (&self.0, &other.0);
        Self::new(
            a.y * b.z - a.z * b.y,
            a.z * b.x - a.x * b.z,
            a.x * b.y - a.y * b.x,
        )
    }

    /// Euclidean length, `sqrt(dot(v, v))`.
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Returns this vector scaled to unit length.
    ///
    /// The zero vector yields NaN components.
    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    /// Scales this vector to unit length in place.
    ///
    /// The zero vector yields NaN components.
    pub fn normalize(&mut self) -> &mut Self {
        *self /= self.magnitude();
        self
    }

    /// Reflects this vector about `normal`.
    ///
    /// `normal` is expected to be unit length.
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        self - normal * 2.0 * self.dot(&normal)
    }
}

impl Tuple for Vector {
    const W: f64 = 0.0;

    fn xyz(&self) -> &Xyz {
        &self.0
    }
}

impl_abs_diff_eq!(Vector);

impl Add for Vector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Vector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Vector {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<f64> for Vector {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl MulAssign<f64> for Vector {
    fn mul_assign(&mut self, scalar: f64) {
        self.0 *= scalar;
    }
}

impl Div<f64> for Vector {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

impl DivAssign<f64> for Vector {
    fn div_assign(&mut self, scalar: f64) {
        self.0 /= scalar;
    }
}

impl Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
