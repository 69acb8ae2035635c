#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Dictionary abstraction, value model and error taxonomy shared by every
//! mars2grib crate.
//!
//! `mars2grib-core` has no knowledge of concepts, recipes or encoding plans —
//! it only defines the vocabulary everything else is built on:
//!
//! - [`Value`]: the dynamically-typed scalar/array kind dictionaries exchange
//! - [`Dictionary`]: the trait unifying MARS, Aux, Options and GRIB-handle access
//! - [`MockHandle`]: an in-memory GRIB handle used in place of the real codec library
//! - [`error`]: the shared `Frame`/chain-printing machinery other crates' error
//!   enums build on

pub mod dictionary;
pub mod error;
pub mod handle;
mod invariants;
pub mod value;

pub use dictionary::{AuxDict, Dictionary, MapDict, MarsDict, OptionsDict, aux_dict, mars_dict, options_dict};
pub use error::{DictError, DictionarySnapshot, Frame, print_frame_chain};
pub use handle::MockHandle;
pub use value::Value;
