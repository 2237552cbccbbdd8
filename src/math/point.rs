use std::ops::{Add, AddAssign, Sub, SubAssign};

use super::{impl_abs_diff_eq, Tuple, Vector, Xyz};

/// A location in 3D space.
///
/// The homogeneous coordinate is always 1 and is not stored. Subtracting two
/// points yields a [`Vector`]; translating by a vector yields another point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(Xyz);

impl Point {
    /// Creates a new point.
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Xyz::new(x, y, z))
    }

    /// The origin `(0, 0, 0)`.
    #[must_use]
    pub fn origin() -> Self {
        Self(Xyz::zeros())
    }

    /// The point reached by translating the origin by `translation`.
    #[must_use]
    pub fn from_translation(translation: Vector) -> Self {
        Self(*translation.xyz())
    }
}

impl Tuple for Point {
    const W: f64 = 1.0;

    fn xyz(&self) -> &Xyz {
        &self.0
    }
}

impl_abs_diff_eq!(Point);

impl Sub for Point {
    type Output = Vector;

    fn sub(self, other: Self) -> Vector {
        Vector::from_xyz(self.0 - other.0)
    }
}

impl Sub<Vector> for Point {
    type Output = Self;

    fn sub(self, vector: Vector) -> Self {
        Self(self.0 - vector.xyz())
    }
}

impl SubAssign<Vector> for Point {
    fn sub_assign(&mut self, vector: Vector) {
        self.0 -= vector.xyz();
    }
}

impl Add<Vector> for Point {
    type Output = Self;

    fn add(self, vector: Vector) -> Self {
        Self(self.0 + vector.xyz())
    }
}

impl AddAssign<Vector> for Point {
    fn add_assign(&mut self, vector: Vector) {
        self.0 += vector.xyz();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn w_is_always_one() {
        for p in [
            Point::new(4.3, -4.2, 3.1),
            Point::origin(),
            Point::new(f64::NAN, f64::NEG_INFINITY, 1e-300),
        ] {
            assert_abs_diff_eq!(p.w(), 1.0);
        }
    }

    #[test]
    fn components() {
        let p = Point::new(4.3, -4.2, 3.1);
        assert_abs_diff_eq!(p.x(), 4.3);
        assert_abs_diff_eq!(p.y(), -4.2);
        assert_abs_diff_eq!(p.z(), 3.1);
    }

    #[test]
    fn subtract_two_points() {
        let a = Point::new(3.0, 2.0, 1.0);
        let b = Point::new(5.0, 6.0, 7.0);
        let d: Vector = a - b;
        assert_abs_diff_eq!(d, Vector::new(-2.0, -4.0, -6.0));
        assert_abs_diff_eq!(d.w(), 0.0);
    }

    #[test]
    fn subtract_vector_from_point() {
        let p = Point::new(3.0, 2.0, 1.0);
        let v = Vector::new(5.0, 6.0, 7.0);
        let q: Point = p - v;
        assert_abs_diff_eq!(q, Point::new(-2.0, -4.0, -6.0));
        assert_abs_diff_eq!(q.w(), 1.0);
    }

    #[test]
    fn add_vector_to_point() {
        let p = Point::new(3.0, -2.0, 5.0);
        let v = Vector::new(-2.0, 3.0, 1.0);
        assert_abs_diff_eq!(p + v, Point::new(1.0, 1.0, 6.0));
    }

    #[test]
    fn translate_in_place() {
        let mut p = Point::origin();
        p += Vector::new(1.0, 2.0, 3.0);
        p -= Vector::new(0.5, 0.5, 0.5);
        assert_abs_diff_eq!(p, Point::new(0.5, 1.5, 2.5));
    }

    #[test]
    fn from_translation_matches_origin_plus_vector() {
        let v = Vector::new(1.5, -0.5, 2.0);
        assert_abs_diff_eq!(Point::from_translation(v), Point::origin() + v);
    }
}
