/// Implements [`approx::AbsDiffEq`] for a newtype over [`Xyz`], defaulting to
/// [`EPSILON`].
macro_rules! impl_abs_diff_eq {
    ($ty:ty) => {
        impl approx::AbsDiffEq for $ty {
            type Epsilon = f64;

            fn default_epsilon() -> f64 {
                $crate::math::EPSILON
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
                approx::AbsDiffEq::abs_diff_eq(&self.0, &other.0, epsilon)
            }
        }
    };
}

pub(crate) use impl_abs_diff_eq;

mod interval;
mod point;
mod vector;

pub use interval::Interval;
pub use point::Point;
pub use vector::Vector;

/// Shared three-component storage behind points, vectors and colors.
pub type Xyz = nalgebra::Vector3<f64>;

/// Absolute per-component threshold for approximate comparisons.
pub const EPSILON: f64 = 0.00001;

/// A value stored as three numbers with an implicit homogeneous coordinate.
///
/// The fourth component is never stored; each implementor fixes it through
/// [`Tuple::W`].
pub trait Tuple {
    /// The homogeneous coordinate shared by every value of this type.
    const W: f64;

    /// Returns the underlying three-component storage.
    fn xyz(&self) -> &Xyz;

    /// Returns the first component.
    fn x(&self) -> f64 {
        self.xyz().x
    }

    /// Returns the second component.
    fn y(&self) -> f64 {
        self.xyz().y
    }

    /// Returns the third component.
    fn z(&self) -> f64 {
        self.xyz().z
    }

    /// Returns the homogeneous coordinate.
    fn w(&self) -> f64 {
        Self::W
    }
}
