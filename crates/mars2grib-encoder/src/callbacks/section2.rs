//! Section 2 (Local Use Section) callbacks.
//!
//! Grounded on `section2Recipes.h` via the resolver's `sections::section2`:
//! `mars` is always present and carries the base ECMWF local-definition
//! fields (class/type/stream/experiment version); `longrange`, `satellite`
//! and `analysis` narrow the standard local definition (1) with their own
//! extra fields; `destine` selects one of the two virtual local-definition
//! numbers (1001/1002) via the section initializer directly.
//!
//! Open question (recorded in DESIGN.md): the virtual template numbers
//! 1001/1002 are not real GRIB2 local-definition numbers. This crate passes
//! them through to `localDefinitionNumber` unchanged rather than inventing
//! a virtual-to-real mapping table the source doesn't specify.

use mars2grib_concepts::concepts::analysis::{self, AnalysisType};
use mars2grib_concepts::concepts::longrange::{self, LongrangeType};
use mars2grib_concepts::concepts::satellite::{self, SatelliteType};
use mars2grib_concepts::registry::{ANALYSIS, LONGRANGE, MARS, SATELLITE};
use mars2grib_core::{frame_here, AuxDict, Dictionary, MarsDict, MockHandle, OptionsDict};

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize(template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    handle.set_long("setLocalDefinition", 1);
    handle.set_long("localDefinitionNumber", template_number as i64);
    Ok(())
}

pub fn phase(concept: usize, stage: usize) -> Option<PhaseFn> {
    if stage != 1 {
        return None;
    }
    match concept {
        MARS => Some(set_mars_fields),
        LONGRANGE => Some(set_longrange),
        SATELLITE => Some(set_satellite),
        ANALYSIS => Some(set_analysis),
        _ => None,
    }
}

fn set_mars_fields(mars: &MarsDict, _aux: &AuxDict, _options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    handle.set_string("marsClass", mars.get_str("class").unwrap_or("od"));
    handle.set_string("marsType", mars.get_str("type").unwrap_or(""));
    handle.set_string("marsStream", mars.get_str("stream").unwrap_or(""));
    if let Ok(expver) = mars.get_str("expver") {
        handle.set_string("experimentVersionNumber", expver);
    }
    Ok(())
}

fn set_longrange(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = longrange::match_longrange(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(longrange::NAME), e))?;
    let ty = local.and_then(|l| longrange::ALL.get(l).copied());
    let system_number = match ty {
        Some(LongrangeType::Monthly) => 1,
        Some(LongrangeType::Seasonal) => 2,
        None => 0,
    };
    handle.set_long("systemNumber", system_number);
    Ok(())
}

fn set_satellite(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = satellite::match_satellite(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(satellite::NAME), e))?;
    let ty = local.and_then(|l| satellite::ALL.get(l).copied());
    if matches!(ty, Some(SatelliteType::BrightnessTemperature)) {
        if let Ok(channel) = mars.get_long("channel") {
            handle.set_long("channelNumber", channel);
        }
    }
    Ok(())
}

fn set_analysis(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = analysis::match_analysis(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(analysis::NAME), e))?;
    let ty = local.and_then(|l| analysis::ALL.get(l).copied());
    let analysis_offset = match ty {
        Some(AnalysisType::FourDVar) => 0,
        Some(AnalysisType::Optimal) => 1,
        None => 0,
    };
    handle.set_long("analysisOffset", analysis_offset);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn mars_local_use_fields_echo_the_request() {
        let mut mars = mars_dict();
        mars.set("class", Value::from("od"));
        mars.set("type", Value::from("fc"));
        mars.set("stream", Value::from("oper"));
        let opts = options_dict();
        let aux = mars2grib_core::aux_dict();
        let mut handle = MockHandle::new();
        set_mars_fields(&mars, &aux, &opts, &mut handle).unwrap();
        assert_eq!(handle.string("marsClass"), Some("od"));
        assert_eq!(handle.string("marsStream"), Some("oper"));
    }

    #[test]
    fn destine_virtual_template_number_passes_through() {
        let mut handle = MockHandle::new();
        initialize(1001, &mut handle).unwrap();
        assert_eq!(handle.long("localDefinitionNumber"), Some(1001));
    }
}
