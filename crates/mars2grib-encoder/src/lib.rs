//! Executes a resolved GRIB2 header layout against a concrete MARS/aux/
//! options request, producing a populated handle.
//!
//! This crate sits directly above `mars2grib-resolver`: given the
//! `HeaderLayout` the resolver computed for a request's active concepts, it
//! builds an [`EncodingPlan`] (a grid of per-stage, per-section callbacks),
//! runs it via [`SpecializedEncoder`], and injects the payload via
//! [`inject_values`]. The `mars2grib` facade crate owns sanitization and
//! the top-level `Encoder` entry point; this crate only knows how to turn
//! an already-resolved layout into GRIB keys.

pub mod callbacks;
pub mod error;
pub mod plan;
pub mod specialized_encoder;
pub mod value_injector;

pub use error::EncoderError;
pub use plan::{EncodingPlan, N_STAGES};
pub use specialized_encoder::SpecializedEncoder;
pub use value_injector::{inject_values, Values};
