//! MARS-to-GRIB2 encoding engine: dictionary-driven classification and
//! template resolution.
//!
//! This crate is the public facade over `mars2grib-concepts` (what applies
//! to a request), `mars2grib-resolver` (which GRIB2 template each section
//! takes) and `mars2grib-encoder` (turning a resolved layout into a
//! populated handle). [`Encoder`] is the single entry point most callers
//! need; [`Options`] controls sanitization and packing defaults.

pub mod encoder;
pub mod options;
pub mod sanitize;

pub use encoder::Encoder;
pub use mars2grib_core::{aux_dict, mars_dict, AuxDict, Dictionary, MarsDict, MockHandle, Value};
pub use mars2grib_encoder::{EncoderError, Values};
pub use options::Options;
