//! Pulse search parameters for S1 and S2 signals.
//!
//! `S12Params` holds the search window of one signal kind, and
//! `unpack_s12params` flattens an S1/S2 pair into the keyword-style
//! parameters consumed by pulse finders.
#[macro_use]
extern crate log;
#[macro_use]
extern crate trackable;

pub use self::error::{Error, ErrorKind};
pub use self::flatten::{unpack_s12params, unpack_s12params_slice, FlatParams, Scalar};
pub use self::minmax::MinMax;
pub use self::s12params::{PulseWindow, S12Params};

pub mod flatten;
pub mod minmax;
pub mod s12params;

mod error;

/// This crate specific `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
