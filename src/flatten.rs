//! Flattening of S1/S2 parameter pairs.
use crate::{ErrorKind, PulseWindow, Result};
use std::collections::BTreeMap;
use std::fmt;

/// Scalar value of a flattened parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    /// Floating point number (time bounds).
    Float(f64),

    /// Integer (lengths and strides).
    Int(u64),
}
impl Scalar {
    /// Returns the value as `f64`.
    pub fn as_f64(self) -> f64 {
        match self {
            Scalar::Float(x) => x,
            Scalar::Int(x) => x as f64,
        }
    }
}
impl From<f64> for Scalar {
    fn from(f: f64) -> Self {
        Scalar::Float(f)
    }
}
impl From<u64> for Scalar {
    fn from(f: u64) -> Self {
        Scalar::Int(f)
    }
}
impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Int(x) => write!(f, "{}", x),
        }
    }
}

/// Flat view of an S1/S2 parameter pair, as consumed by the pulse finder.
///
/// Note that neither `stride` is carried, and `rebin_stride` is only carried for S2.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(deny_unknown_fields)
)]
pub struct FlatParams {
    pub s1_tmin: f64,
    pub s1_tmax: f64,
    pub s1_lmin: u64,
    pub s1_lmax: u64,
    pub s2_tmin: f64,
    pub s2_tmax: f64,
    pub s2_rebin_stride: u64,
    pub s2_lmin: u64,
    pub s2_lmax: u64,
}
impl FlatParams {
    /// Keys of the flattened parameters.
    pub const KEYS: [&'static str; 9] = [
        "s1_tmin",
        "s1_tmax",
        "s1_lmin",
        "s1_lmax",
        "s2_tmin",
        "s2_tmax",
        "s2_rebin_stride",
        "s2_lmin",
        "s2_lmax",
    ];

    /// Returns the `(key, value)` pairs in the order of `FlatParams::KEYS`.
    pub fn entries(&self) -> [(&'static str, Scalar); 9] {
        [
            ("s1_tmin", self.s1_tmin.into()),
            ("s1_tmax", self.s1_tmax.into()),
            ("s1_lmin", self.s1_lmin.into()),
            ("s1_lmax", self.s1_lmax.into()),
            ("s2_tmin", self.s2_tmin.into()),
            ("s2_tmax", self.s2_tmax.into()),
            ("s2_rebin_stride", self.s2_rebin_stride.into()),
            ("s2_lmin", self.s2_lmin.into()),
            ("s2_lmax", self.s2_lmax.into()),
        ]
    }

    /// Returns the value associated with `key`.
    pub fn get(&self, key: &str) -> Option<Scalar> {
        self.entries()
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
    }

    /// Returns the parameters as a map.
    pub fn to_map(&self) -> BTreeMap<&'static str, Scalar> {
        self.entries().iter().cloned().collect()
    }
}
impl fmt::Display for FlatParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, (k, v)) in self.entries().iter().enumerate() {
            if i != 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={}", k, v)?;
        }
        Ok(())
    }
}

/// Flattens the S1 parameters `s1` and the S2 parameters `s2` into a `FlatParams`.
///
/// The values are copied as is.
pub fn unpack_s12params<A, B>(s1: &A, s2: &B) -> FlatParams
where
    A: PulseWindow + ?Sized,
    B: PulseWindow + ?Sized,
{
    if s1.rebin_stride() != 1 {
        trace!(
            "S1 rebin_stride is not carried over: s1_rebin_stride={}",
            s1.rebin_stride()
        );
    }

    let (s1_time, s1_length) = (s1.time(), s1.length());
    let (s2_time, s2_length) = (s2.time(), s2.length());
    FlatParams {
        s1_tmin: s1_time.min(),
        s1_tmax: s1_time.max(),
        s1_lmin: s1_length.min(),
        s1_lmax: s1_length.max(),
        s2_tmin: s2_time.min(),
        s2_tmax: s2_time.max(),
        s2_rebin_stride: s2.rebin_stride(),
        s2_lmin: s2_length.min(),
        s2_lmax: s2_length.max(),
    }
}

/// Flattens a pair of parameters given as a slice.
///
/// `params[0]` is regarded as S1 and `params[1]` as S2.
///
/// # Errors
///
/// If `params.len() != 2`, an `ErrorKind::InvalidInput` error will be returned.
pub fn unpack_s12params_slice<P: PulseWindow>(params: &[P]) -> Result<FlatParams> {
    track_assert_eq!(params.len(), 2, ErrorKind::InvalidInput);
    Ok(unpack_s12params(&params[0], &params[1]))
}
