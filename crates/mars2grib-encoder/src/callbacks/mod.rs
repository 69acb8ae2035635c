//! Phase-callback dispatch: which function handles `(conceptId, stage,
//! section)` for a resolved global variant id.
//!
//! A concept's callback re-derives its own matcher result from `mars`/
//! `options` rather than being handed the already-resolved local variant id
//! directly. The resolver's `SectionLayout` already proves the concept is
//! active in this section; re-deriving which variant applies and branching
//! on it inside one function is simpler than minting one distinct function
//! pointer per variant, and is safe because nothing mutates `mars`/
//! `options` between resolution and encoding.

pub mod section0;
pub mod section1;
pub mod section2;
pub mod section3;
pub mod section4;
pub mod section5;

use mars2grib_concepts::registry;
use mars2grib_core::MockHandle;

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize_section(section: usize, template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    match section {
        0 => section0::initialize(template_number, handle),
        1 => section1::initialize(template_number, handle),
        2 => section2::initialize(template_number, handle),
        3 => section3::initialize(template_number, handle),
        4 => section4::initialize(template_number, handle),
        5 => section5::initialize(template_number, handle),
        _ => unreachable!("N_SECTIONS is fixed at 6"),
    }
}

pub fn phase_callback(global_variant_id: usize, stage: usize, section: usize) -> Option<PhaseFn> {
    let concept = registry::concept_of(global_variant_id);
    match section {
        0 => section0::phase(concept, stage),
        1 => section1::phase(concept, stage),
        2 => section2::phase(concept, stage),
        3 => section3::phase(concept, stage),
        4 => section4::phase(concept, stage),
        5 => section5::phase(concept, stage),
        _ => None,
    }
}
