//! S1/S2 pulse search parameters.
use crate::MinMax;

/// This trait exposes the fields of a pulse search window that `unpack_s12params` reads.
pub trait PulseWindow {
    /// Returns the time window in which pulses are searched.
    fn time(&self) -> MinMax<f64>;

    /// Returns the allowed pulse length (in samples).
    fn length(&self) -> MinMax<u64>;

    /// Returns the rebinning factor applied to the pulse samples.
    fn rebin_stride(&self) -> u64;
}
impl<'a, P: PulseWindow + ?Sized> PulseWindow for &'a P {
    fn time(&self) -> MinMax<f64> {
        (**self).time()
    }

    fn length(&self) -> MinMax<u64> {
        (**self).length()
    }

    fn rebin_stride(&self) -> u64 {
        (**self).rebin_stride()
    }
}

/// Search parameters of either S1 or S2 pulses.
///
/// No consistency check is made between the fields.
/// Every field has a default, so a subset can be given via struct update syntax:
///
/// ```
/// use s12params::S12Params;
///
/// let s2 = S12Params {
///     rebin_stride: 40,
///     ..S12Params::default()
/// };
/// assert_eq!(s2.time.interval(), (1.0, 2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct S12Params {
    /// Time window. Defaults to `[1, 2]`.
    pub time: MinMax<f64>,

    /// Pulse length in samples. Defaults to `[3, 4]`.
    pub length: MinMax<u64>,

    /// Defaults to `1`.
    pub stride: u64,

    /// Defaults to `1`.
    pub rebin_stride: u64,
}
impl S12Params {
    /// Makes a new `S12Params` instance with every field given explicitly.
    pub const fn new(
        time: MinMax<f64>,
        length: MinMax<u64>,
        stride: u64,
        rebin_stride: u64,
    ) -> Self {
        Self {
            time,
            length,
            stride,
            rebin_stride,
        }
    }
}
impl Default for S12Params {
    fn default() -> Self {
        Self::new(
            MinMax::new_unchecked(1.0, 2.0),
            MinMax::new_unchecked(3, 4),
            1,
            1,
        )
    }
}
impl PulseWindow for S12Params {
    fn time(&self) -> MinMax<f64> {
        self.time
    }

    fn length(&self) -> MinMax<u64> {
        self.length
    }

    fn rebin_stride(&self) -> u64 {
        self.rebin_stride
    }
}
