//! Section 0 (Indicator Section) callbacks.
//!
//! Grounded on `section0Recipes.h` via the resolver's `sections::section0`:
//! one recipe, gated on the always-applicable `nil` concept, so there is
//! nothing to branch on. The only thing this section ever writes is the
//! discipline code.

use mars2grib_core::MockHandle;

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize(template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    debug_assert_eq!(template_number, 0, "section 0 has exactly one recipe, always template 0");
    handle.set_long("discipline", 0); // meteorological products
    Ok(())
}

pub fn phase(_concept: usize, _stage: usize) -> Option<PhaseFn> {
    None
}
