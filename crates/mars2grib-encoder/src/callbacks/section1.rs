//! Section 1 (Identification Section) callbacks.
//!
//! Grounded on `section1Recipes.h` via the resolver's `sections::section1`:
//! the Cartesian product of `origin`, `tables`, `reference-time` and
//! `data-type` — all four are always-applicable concepts (their matchers
//! never resolve to `Missing`), so all four callbacks fire on every
//! request, in a single stage.

use mars2grib_concepts::concepts::data_type::{self, DataTypeType};
use mars2grib_concepts::concepts::origin::{self, OriginType};
use mars2grib_concepts::concepts::reference_time::{self, ReferenceTimeType};
use mars2grib_concepts::concepts::tables::{self, TablesType};
use mars2grib_concepts::registry::{DATA_TYPE, ORIGIN, REFERENCE_TIME, TABLES};
use mars2grib_core::{frame_here, AuxDict, Dictionary, MarsDict, MockHandle, OptionsDict};

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize(template_number: usize, _handle: &mut MockHandle) -> Result<(), EncoderError> {
    debug_assert_eq!(template_number, 0, "section 1 has exactly one recipe, always template 0");
    Ok(())
}

pub fn phase(concept: usize, stage: usize) -> Option<PhaseFn> {
    if stage != 1 {
        return None;
    }
    match concept {
        ORIGIN => Some(set_origin),
        TABLES => Some(set_tables),
        REFERENCE_TIME => Some(set_reference_time),
        DATA_TYPE => Some(set_data_type),
        _ => None,
    }
}

fn set_origin(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = origin::match_origin(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(origin::NAME), e))?;
    let ty = local.and_then(|l| origin::ALL.get(l).copied()).unwrap_or(OriginType::Ecmwf);
    let sub_centre = match ty {
        OriginType::Ecmwf | OriginType::Operational => 0,
        OriginType::Experimental => 1,
    };
    handle.set_long("centre", 98); // ECMWF
    handle.set_long("subCentre", sub_centre);
    Ok(())
}

fn set_tables(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = tables::match_tables(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(tables::NAME), e))?;
    let ty = local.and_then(|l| tables::ALL.get(l).copied()).unwrap_or(TablesType::Current);
    let version = match ty {
        TablesType::Current => mars.get_long("tablesVersion").unwrap_or(32),
        TablesType::Legacy => mars.get_long("tablesVersion").unwrap_or(19),
    };
    handle.set_long("tablesVersion", version);
    Ok(())
}

fn set_reference_time(
    mars: &MarsDict,
    _aux: &AuxDict,
    options: &OptionsDict,
    handle: &mut MockHandle,
) -> Result<(), EncoderError> {
    let local = reference_time::match_reference_time(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(reference_time::NAME), e))?;
    let ty = local.and_then(|l| reference_time::ALL.get(l).copied()).unwrap_or(ReferenceTimeType::Default);
    let _ = ty; // both variants share significanceOfReferenceTime = 1 (start of forecast); they diverge in section 4 instead.
    handle.set_long("significanceOfReferenceTime", 1);
    handle.set_long("dataDate", mars.get_long("date").unwrap_or(0));
    handle.set_long("dataTime", mars.get_long("time").unwrap_or(0));
    Ok(())
}

fn set_data_type(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = data_type::match_data_type(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(data_type::NAME), e))?;
    let ty = local.and_then(|l| data_type::ALL.get(l).copied()).unwrap_or(DataTypeType::Forecast);
    // GRIB2 code table 1.4.
    let type_of_processed_data = match ty {
        DataTypeType::Analysis => 0,
        DataTypeType::Forecast => 1,
        DataTypeType::ControlForecast => 3,
        DataTypeType::PerturbedForecast => 4,
        DataTypeType::Climatology => 1,
    };
    handle.set_long("productionStatusOfProcessedData", 0); // operational products
    handle.set_long("typeOfProcessedData", type_of_processed_data);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_concepts::registry;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn all_four_section1_concepts_have_stage1_callbacks() {
        for concept in [ORIGIN, TABLES, REFERENCE_TIME, DATA_TYPE] {
            assert!(phase(concept, 1).is_some());
        }
        assert!(phase(registry::LEVEL, 1).is_none());
        assert!(phase(ORIGIN, 2).is_none());
    }

    #[test]
    fn set_data_type_writes_expected_forecast_code() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("fc"));
        let opts = options_dict();
        let aux = mars2grib_core::aux_dict();
        let mut handle = MockHandle::new();
        set_data_type(&mars, &aux, &opts, &mut handle).unwrap();
        assert_eq!(handle.long("typeOfProcessedData"), Some(1));
    }
}
