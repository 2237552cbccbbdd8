/// A closed range of reals `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Self = Self::new(0.0, 1.0);

    /// Creates a new interval.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the interval.
    ///
    /// NaN is returned unchanged.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Linearly maps `value` from the `from` interval onto the `to` interval.
    ///
    /// Values outside `from` map outside `to`; clamp first if that matters.
    #[must_use]
    pub fn remap(value: f64, from: Self, to: Self) -> f64 {
        to.min + ((to.max - to.min) / (from.max - from.min)) * (value - from.min)
    }
}
