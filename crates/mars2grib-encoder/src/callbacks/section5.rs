//! Section 5 (Data Representation Section) callbacks.
//!
//! Grounded on `section5Recipes.h` via the resolver's `sections::section5`:
//! template selection is purely a function of `packing`, the only concept
//! ever active here.

use mars2grib_concepts::concepts::packing::{self, PackingType};
use mars2grib_concepts::registry::PACKING;
use mars2grib_core::{frame_here, AuxDict, Dictionary, MarsDict, MockHandle, OptionsDict};

use crate::error::EncoderError;
use crate::plan::PhaseFn;

const DEFAULT_BITS_PER_VALUE: i64 = 16;

pub fn initialize(template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    handle.set_long("dataRepresentationTemplateNumber", template_number as i64);
    Ok(())
}

pub fn phase(concept: usize, stage: usize) -> Option<PhaseFn> {
    if stage != 1 {
        return None;
    }
    match concept {
        PACKING => Some(set_packing),
        _ => None,
    }
}

fn set_packing(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = packing::match_packing(mars, options).map_err(|e| EncoderError::stage(frame_here!().with_concept(packing::NAME), e))?;
    let ty = local.and_then(|l| packing::ALL.get(l).copied()).unwrap_or(PackingType::Simple);

    let bits_per_value = if options.get_long("enableBitsPerValueCompression").unwrap_or(0) != 0 {
        mars.get_long("accuracy").unwrap_or(DEFAULT_BITS_PER_VALUE)
    } else {
        DEFAULT_BITS_PER_VALUE
    };
    handle.set_long("bitsPerValue", bits_per_value);

    match ty {
        PackingType::Simple => {}
        PackingType::Ccsds => {
            handle.set_long("ccsdsFlags", 0);
            handle.set_long("ccsdsBlockSize", 16);
            handle.set_long("ccsdsRsi", 128);
        }
        PackingType::SpectralComplex => {
            if let Ok(truncation) = mars.get_long("truncation") {
                handle.set_long("JS", truncation);
                handle.set_long("KS", truncation);
                handle.set_long("MS", truncation);
            }
        }
    }
    Ok(())
}
