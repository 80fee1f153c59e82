//! Closed numeric intervals.
use crate::{ErrorKind, Result};
use std::cmp::Ordering;
use std::fmt;
use std::ops::Sub;

/// Closed interval `[min, max]`.
///
/// The bounds are always comparable and ordered (`min <= max`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MinMax<T> {
    min: T,
    max: T,
}
impl<T> MinMax<T>
where
    T: PartialOrd + fmt::Debug,
{
    /// Makes a new `MinMax` instance.
    ///
    /// # Errors
    ///
    /// If `min` and `max` are incomparable (e.g., NaN) or `min > max`,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn new(min: T, max: T) -> Result<Self> {
        let ordered = match min.partial_cmp(&max) {
            Some(Ordering::Less) | Some(Ordering::Equal) => true,
            _ => false,
        };
        track_assert!(ordered, ErrorKind::InvalidInput; min, max);
        Ok(Self { min, max })
    }
}
impl<T> MinMax<T> {
    pub(crate) const fn new_unchecked(min: T, max: T) -> Self {
        Self { min, max }
    }
}
impl<T: Copy> MinMax<T> {
    /// Returns the lower bound.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns the bounds as a `(min, max)` pair.
    pub fn interval(&self) -> (T, T) {
        (self.min, self.max)
    }
}
impl<T: PartialOrd> MinMax<T> {
    /// Returns `true` if `min <= x <= max`.
    pub fn contains(&self, x: &T) -> bool {
        self.min <= *x && *x <= self.max
    }
}
impl<T> MinMax<T>
where
    T: Copy + Sub<Output = T>,
{
    /// Returns the width of this interval (`max - min`).
    pub fn bracket(&self) -> T {
        self.max - self.min
    }
}
impl MinMax<f64> {
    /// Returns the middle point of this interval.
    pub fn center(&self) -> f64 {
        (self.min + self.max) / 2.0
    }

    /// Multiplies both bounds by `factor`.
    ///
    /// # Errors
    ///
    /// A negative or NaN `factor` would invert or break the interval,
    /// so an `ErrorKind::InvalidInput` error will be returned in that case.
    pub fn scale(&self, factor: f64) -> Result<Self> {
        track!(Self::new(self.min * factor, self.max * factor); factor)
    }

    /// Adds `delta` to both bounds.
    ///
    /// # Errors
    ///
    /// If `delta` is NaN or the shifted bounds are not comparable,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn shift(&self, delta: f64) -> Result<Self> {
        track!(Self::new(self.min + delta, self.max + delta); delta)
    }
}
impl MinMax<u64> {
    /// Adds `delta` to both bounds.
    ///
    /// # Errors
    ///
    /// If a shifted bound would fall outside of the `u64` range,
    /// an `ErrorKind::InvalidInput` error will be returned.
    pub fn shift(&self, delta: i64) -> Result<Self> {
        let apply = |x: u64| {
            if delta < 0 {
                x.checked_sub(delta.wrapping_neg() as u64)
            } else {
                x.checked_add(delta as u64)
            }
        };
        let min = track_assert_some!(apply(self.min), ErrorKind::InvalidInput);
        let max = track_assert_some!(apply(self.max), ErrorKind::InvalidInput);
        Ok(Self::new_unchecked(min, max))
    }
}
impl<T: fmt::Display> fmt::Display for MinMax<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}
#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for MinMax<T>
where
    T: serde::Deserialize<'de> + PartialOrd + fmt::Debug,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Bounds<T> {
            min: T,
            max: T,
        }

        let b = Bounds::<T>::deserialize(deserializer)?;
        Self::new(b.min, b.max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackable::result::TestResult;

    #[test]
    fn new_works() -> TestResult {
        let x = track!(MinMax::new(1.0, 2.0))?;
        assert_eq!(x.min(), 1.0);
        assert_eq!(x.max(), 2.0);
        assert_eq!(x.interval(), (1.0, 2.0));

        let x = track!(MinMax::new(3, 3))?;
        assert_eq!(x.bracket(), 0);
        Ok(())
    }

    #[test]
    fn new_rejects_bad_bounds() {
        let e = MinMax::new(2, 1).err().map(|e| e.kind().clone());
        assert_eq!(e, Some(ErrorKind::InvalidInput));

        assert!(MinMax::new(std::f64::NAN, 1.0).is_err());
        assert!(MinMax::new(0.0, std::f64::NAN).is_err());
    }

    #[test]
    fn contains_is_inclusive() -> TestResult {
        let x = track!(MinMax::new(10u64, 20))?;
        assert!(x.contains(&10));
        assert!(x.contains(&15));
        assert!(x.contains(&20));
        assert!(!x.contains(&9));
        assert!(!x.contains(&21));
        Ok(())
    }

    #[test]
    fn center_and_scale_work() -> TestResult {
        let x = track!(MinMax::new(2.0, 6.0))?;
        assert_eq!(x.center(), 4.0);
        assert_eq!(x.bracket(), 4.0);

        let y = track!(x.scale(0.5))?;
        assert_eq!(y.interval(), (1.0, 3.0));

        assert!(x.scale(-1.0).is_err());
        assert!(x.scale(std::f64::NAN).is_err());
        Ok(())
    }

    #[test]
    fn shift_works() -> TestResult {
        let x = track!(MinMax::new(3u64, 4))?;
        assert_eq!(track!(x.shift(10))?.interval(), (13, 14));
        assert_eq!(track!(x.shift(-3))?.interval(), (0, 1));

        let y = track!(MinMax::new(1.0, 2.0))?;
        assert_eq!(track!(y.shift(-0.5))?.interval(), (0.5, 1.5));
        Ok(())
    }

    #[test]
    fn shift_rejects_out_of_range_bounds() -> TestResult {
        let x = track!(MinMax::new(1u64, 4))?;
        let e = x.shift(-3).err().map(|e| e.kind().clone());
        assert_eq!(e, Some(ErrorKind::InvalidInput));
        assert!(x.shift(std::i64::MIN).is_err());

        let x = track!(MinMax::new(1u64, std::u64::MAX - 1))?;
        assert!(x.shift(2).is_err());
        assert_eq!(track!(x.shift(1))?.max(), std::u64::MAX);

        let y = track!(MinMax::new(1.0, 2.0))?;
        let e = y.shift(std::f64::NAN).err().map(|e| e.kind().clone());
        assert_eq!(e, Some(ErrorKind::InvalidInput));
        Ok(())
    }

    #[test]
    fn display_works() -> TestResult {
        assert_eq!(track!(MinMax::new(1, 2))?.to_string(), "[1, 2]");
        assert_eq!(track!(MinMax::new(0.5, 1.5))?.to_string(), "[0.5, 1.5]");
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_validates_bounds() -> TestResult {
        let json = r#"{"min": 1.5, "max": 2.5}"#;
        let x: MinMax<f64> = track_any_err!(serde_json::from_str(json))?;
        assert_eq!(x.interval(), (1.5, 2.5));

        let e = serde_json::from_str::<MinMax<f64>>(r#"{"min": 3.0, "max": 2.0}"#);
        assert!(e.is_err());
        Ok(())
    }
}
