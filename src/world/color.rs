use std::fmt::{self, Display, Formatter};
use std::io::Write;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::math::{impl_abs_diff_eq, Interval, Tuple, Xyz};

use super::Drawable;

/// Lowest channel value written to a PPM image.
pub const MIN_COLOR: f64 = 0.0;

/// Highest channel value written to a PPM image.
pub const MAX_COLOR: f64 = 255.0;

const OUTPUT: Interval = Interval::new(MIN_COLOR, MAX_COLOR);

/// An RGB color sharing the three-component storage of points and vectors.
///
/// Channels are unconstrained reals; they are only clamped to `[0, 1]` when
/// the color is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(Xyz);

impl Color {
    /// Creates a new color from red, green and blue channels.
    #[must_use]
    pub fn new(red: f64, green: f64, blue: f64) -> Self {
        Self(Xyz::new(red, green, blue))
    }

    /// Opaque black, the default canvas fill.
    #[must_use]
    pub fn black() -> Self {
        Self(Xyz::zeros())
    }

    /// White.
    #[must_use]
    pub fn white() -> Self {
        Self(Xyz::repeat(1.0))
    }

    #[must_use]
    pub fn red(&self) -> f64 {
        self.0.x
    }

    #[must_use]
    pub fn green(&self) -> f64 {
        self.0.y
    }

    #[must_use]
    pub fn blue(&self) -> f64 {
        self.0.z
    }

    /// Multiplies every channel by `scalar`.
    #[must_use]
    pub fn scale(self, scalar: f64) -> Self {
        self * scalar
    }

    /// Converts to output channel values in `[MIN_COLOR, MAX_COLOR]`.
    ///
    /// Each channel is clamped to `[0, 1]`, rescaled and rounded to the
    /// nearest integer. NaN channels become 0.
    #[must_use]
    pub fn to_rgb8(&self) -> [u8; 3] {
        [self.red(), self.green(), self.blue()].map(channel_to_u8)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_to_u8(channel: f64) -> u8 {
    let clamped = Interval::UNIT.clamp(channel);
    // `as` saturates and maps NaN to 0.
    Interval::remap(clamped, Interval::UNIT, OUTPUT).round() as u8
}

impl Tuple for Color {
    const W: f64 = 0.0;

    fn xyz(&self) -> &Xyz {
        &self.0
    }
}

impl_abs_diff_eq!(Color);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.to_rgb8();
        write!(f, "{r} {g} {b}")
    }
}

impl Drawable for Color {
    fn write_ppm(&self, out: &mut dyn Write) -> std::io::Result<()> {
        write!(out, "{self}")
    }
}

impl Add for Color {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Color {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Color {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Color {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Hadamard (per-channel) product.
impl Mul for Color {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0.component_mul(&other.0))
    }
}

impl MulAssign for Color {
    fn mul_assign(&mut self, other: Self) {
        self.0.component_mul_assign(&other.0);
    }
}

impl Mul<f64> for Color {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self(self.0 * scalar)
    }
}

impl MulAssign<f64> for Color {
    fn mul_assign(&mut self, scalar: f64) {
        self.0 *= scalar;
    }
}

impl Div<f64> for Color {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self(self.0 / scalar)
    }
}

impl DivAssign<f64> for Color {
    fn div_assign(&mut self, scalar: f64) {
        self.0 /= scalar;
    }
}

impl Neg for Color {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}
