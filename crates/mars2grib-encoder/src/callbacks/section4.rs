//! Section 4 (Product Definition Section) callbacks.
//!
//! Grounded on `section4Recipes.h` via the resolver's `sections::section4`:
//! the largest and most combinatorial section. `generating-process`,
//! `point-in-time`/`level` and `param` establish the base instantaneous
//! product in stage 1; `ensemble`, `statistics` and `derived` overlay
//! ensemble/statistical processing in stage 2 (they may need the base
//! fields already written, e.g. `typeOfStatisticalProcessing` alongside the
//! already-set vertical level); `composition`, `satellite`, `wave` and
//! `reference-time` (reforecast) narrow further in stage 3.
//!
//! The GRIB2 code-table mappings below (surface types, statistical
//! processing codes, ensemble types) are representative rather than an
//! exhaustive reproduction of WMO tables 4.5/4.6/4.7/4.10 — this mirrors
//! how `mars2grib-concepts`'s own matchers already document themselves as
//! representative constructions where no source ground truth exists.

use mars2grib_concepts::concepts::composition::{self, CompositionType};
use mars2grib_concepts::concepts::derived::{self, DerivedType};
use mars2grib_concepts::concepts::ensemble::{self, EnsembleType};
use mars2grib_concepts::concepts::generating_process::{self, GeneratingProcessType};
use mars2grib_concepts::concepts::level::{self, LevelType};
use mars2grib_concepts::concepts::point_in_time;
use mars2grib_concepts::concepts::reference_time::{self, ReferenceTimeType};
use mars2grib_concepts::concepts::satellite::{self, SatelliteType};
use mars2grib_concepts::concepts::statistics::{self, StatisticsType};
use mars2grib_concepts::concepts::wave::{self, WaveType};
use mars2grib_concepts::registry::{
    COMPOSITION, DERIVED, ENSEMBLE, GENERATING_PROCESS, LEVEL, PARAM, POINT_IN_TIME, REFERENCE_TIME, SATELLITE,
    STATISTICS, WAVE,
};
use mars2grib_core::{frame_here, AuxDict, Dictionary, MarsDict, MockHandle, OptionsDict};

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize(template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    handle.set_long("productDefinitionTemplateNumber", template_number as i64);
    Ok(())
}

pub fn phase(concept: usize, stage: usize) -> Option<PhaseFn> {
    match (concept, stage) {
        (GENERATING_PROCESS, 1) => Some(set_generating_process),
        (POINT_IN_TIME, 1) => Some(set_point_in_time),
        (LEVEL, 1) => Some(set_level),
        (PARAM, 1) => Some(set_param),
        (ENSEMBLE, 2) => Some(set_ensemble),
        (STATISTICS, 2) => Some(set_statistics),
        (DERIVED, 2) => Some(set_derived),
        (COMPOSITION, 3) => Some(set_composition),
        (SATELLITE, 3) => Some(set_satellite),
        (WAVE, 3) => Some(set_wave),
        (REFERENCE_TIME, 3) => Some(set_reforecast),
        _ => None,
    }
}

fn set_generating_process(
    mars: &MarsDict,
    _aux: &AuxDict,
    options: &OptionsDict,
    handle: &mut MockHandle,
) -> Result<(), EncoderError> {
    let local = generating_process::match_generating_process(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(generating_process::NAME), e))?;
    let ty = local.and_then(|l| generating_process::ALL.get(l).copied()).unwrap_or(GeneratingProcessType::Deterministic);
    // GRIB2 code table 4.3, with 192 standing in for ECMWF's local seasonal code.
    let type_of_generating_process = match ty {
        GeneratingProcessType::Deterministic => 2, // forecast
        GeneratingProcessType::EnsembleForecast => 4,
        GeneratingProcessType::Seasonal => 192,
    };
    handle.set_long("typeOfGeneratingProcess", type_of_generating_process);
    handle.set_long("forecastTime", mars.get_long("step").unwrap_or(0));
    handle.set_long("indicatorOfUnitOfTimeRange", 1); // hour
    Ok(())
}

fn set_point_in_time(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = point_in_time::match_point_in_time(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(point_in_time::NAME), e))?;
    if local.is_some() {
        handle.set_long("stepType", 0); // instant
    }
    Ok(())
}

fn set_param(mars: &MarsDict, _aux: &AuxDict, _options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    if let Ok(param_id) = mars.get_param_id("param") {
        handle.set_long("paramId", param_id);
    }
    Ok(())
}

fn set_level(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = level::match_level(mars, options).map_err(|e| EncoderError::stage(frame_here!().with_concept(level::NAME), e))?;
    let Some(local) = local else {
        // wave/satellite fields carry no vertical level.
        return Ok(());
    };
    let ty = level::ALL.get(local).copied().unwrap_or(LevelType::Surface);
    let levelist = mars.get_long("levelist").unwrap_or(0);

    let (code, scale, value) = level_surface_params(ty, levelist);
    handle.set_long("typeOfFirstFixedSurface", code);
    handle.set_long("scaleFactorOfFirstFixedSurface", scale);
    handle.set_long("scaledValueOfFirstFixedSurface", value);
    handle.set_long("typeOfSecondFixedSurface", 255); // missing: single-surface levels only
    Ok(())
}

/// `(typeOfFirstFixedSurface, scaleFactorOfFirstFixedSurface, scaledValueOfFirstFixedSurface)`
/// for each level family, following GRIB2 code table 4.5 where a standard
/// code exists and a plausible ECMWF local code (200+) otherwise.
fn level_surface_params(ty: LevelType, levelist: i64) -> (i64, i64, i64) {
    match ty {
        LevelType::Surface => (1, 0, 0),
        LevelType::EntireAtmosphere => (10, 0, 0),
        LevelType::EntireLake => (1, 0, 0),
        LevelType::CloudBase => (2, 0, 0),
        LevelType::Tropopause => (7, 0, 0),
        LevelType::NominalTop => (8, 0, 0),
        LevelType::MostUnstableParcel => (246, 0, 0),
        LevelType::MixedLayerParcel => (247, 0, 0),
        LevelType::Isothermal => (20, 2, levelist),
        LevelType::IsobaricInPa => (100, 0, levelist * 100),
        LevelType::IsobaricInHpa => (100, -2, levelist),
        LevelType::LowCloudLayer => (214, 0, 0),
        LevelType::MediumCloudLayer => (224, 0, 0),
        LevelType::HighCloudLayer => (234, 0, 0),
        LevelType::MeanSea => (101, 0, 0),
        LevelType::HeightAboveSea => (102, 0, levelist),
        LevelType::HeightAboveGround => (103, 0, levelist),
        LevelType::Hybrid => (105, 0, levelist),
        LevelType::Theta => (107, 0, levelist),
        LevelType::PotentialVorticity => (109, 3, levelist),
        LevelType::SnowLayer => (114, 0, levelist),
        LevelType::SoilLayer => (106, 2, levelist),
        LevelType::SeaIceLayer => (174, 0, levelist),
        LevelType::DepthBelowSeaLayer => (160, 0, levelist),
        LevelType::LakeBottom => (162, 0, 0),
        LevelType::MixingLayer => (167, 0, 0),
        LevelType::IceTopOnWater => (175, 0, 0),
        LevelType::IceLayerOnWater => (176, 0, 0),
        LevelType::AbstractSingleLevel => (150, 0, levelist),
        LevelType::AbstractMultipleLevel => (151, 0, levelist),
        LevelType::HeightAboveSeaAt10M => (102, 0, 10),
        LevelType::HeightAboveSeaAt2M => (102, 0, 2),
        LevelType::HeightAboveGroundAt10M => (103, 0, 10),
        LevelType::HeightAboveGroundAt2M => (103, 0, 2),
        LevelType::Default => (1, 0, 0),
    }
}

fn set_ensemble(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = ensemble::match_ensemble(mars, options).map_err(|e| EncoderError::stage(frame_here!().with_concept(ensemble::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = ensemble::ALL.get(local).copied().unwrap_or(EnsembleType::Individual);
    // GRIB2 code table 4.6, with 192/193 standing in for ECMWF's local
    // perturbed-parameters/random-patterns variants.
    let type_of_ensemble_forecast = match ty {
        EnsembleType::Individual => 3,
        EnsembleType::PerturbedParameters => 192,
        EnsembleType::RandomPatterns => 193,
    };
    handle.set_long("typeOfEnsembleForecast", type_of_ensemble_forecast);
    handle.set_long("perturbationNumber", mars.get_long("number").unwrap_or(0));
    Ok(())
}

fn set_statistics(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = statistics::match_statistics(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(statistics::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = statistics::ALL.get(local).copied().unwrap_or(StatisticsType::Accumulation);
    // GRIB2 code table 4.10, with 192 standing in for mode/severity (no
    // standard code exists for either).
    let type_of_statistical_processing = match ty {
        StatisticsType::Average => 0,
        StatisticsType::Accumulation => 1,
        StatisticsType::Maximum => 2,
        StatisticsType::Minimum => 3,
        StatisticsType::StandardDeviation => 6,
        StatisticsType::Mode | StatisticsType::Severity => 192,
    };
    handle.set_long("typeOfStatisticalProcessing", type_of_statistical_processing);
    handle.set_long("numberOfTimeRange", 1);
    handle.set_long("lengthOfTimeRange", mars.get_long("timespan").or_else(|_| mars.get_long("step")).unwrap_or(0));
    Ok(())
}

fn set_derived(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = derived::match_derived(mars, options).map_err(|e| EncoderError::stage(frame_here!().with_concept(derived::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = derived::ALL.get(local).copied().unwrap_or(DerivedType::Mean);
    // GRIB2 code table 4.7, with 192 standing in for probability products
    // (which this crate models as a `derived` variant rather than a
    // separate probability-forecast template).
    let derived_forecast = match ty {
        DerivedType::Mean => 0,
        DerivedType::Spread => 4,
        DerivedType::Probability => 192,
    };
    handle.set_long("derivedForecast", derived_forecast);
    Ok(())
}

fn set_composition(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = composition::match_composition(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(composition::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = composition::ALL.get(local).copied().unwrap_or(CompositionType::Chem);
    let constituent_type = match ty {
        CompositionType::Chem => 0,
        CompositionType::Aerosol => 1,
        CompositionType::AerosolOptical => 2,
        CompositionType::ChemicalSource => 3,
    };
    handle.set_long("constituentType", constituent_type);
    Ok(())
}

fn set_satellite(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = satellite::match_satellite(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(satellite::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = satellite::ALL.get(local).copied().unwrap_or(SatelliteType::Radiance);
    handle.set_long("numberOfContributingSpectralBands", if ty == SatelliteType::BrightnessTemperature { 1 } else { 0 });
    if let Ok(ident) = mars.get_str("ident") {
        handle.set_string("satelliteSeries", ident);
    }
    if let Ok(instrument) = mars.get_long("instrument") {
        handle.set_long("instrumentType", instrument);
    }
    Ok(())
}

fn set_wave(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = wave::match_wave(mars, options).map_err(|e| EncoderError::stage(frame_here!().with_concept(wave::NAME), e))?;
    let Some(local) = local else {
        return Ok(());
    };
    let ty = wave::ALL.get(local).copied().unwrap_or(WaveType::Period);
    match ty {
        WaveType::Period => {
            handle.set_long("typeOfWaveProduct", 0);
        }
        WaveType::Spectra => {
            handle.set_long("typeOfWaveProduct", 1);
            handle.set_long("numberOfFrequencies", mars.get_long("frequency").unwrap_or(0));
            handle.set_long("numberOfDirections", mars.get_long("direction").unwrap_or(0));
        }
    }
    Ok(())
}

fn set_reforecast(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = reference_time::match_reference_time(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(reference_time::NAME), e))?;
    let ty = local.and_then(|l| reference_time::ALL.get(l).copied()).unwrap_or(ReferenceTimeType::Default);
    if ty == ReferenceTimeType::Reforecast {
        handle.set_long("numberOfReforecastYearsInModelClimate", mars.get_long("hdate").map(|_| 20).unwrap_or(20));
        handle.set_long("yearOfModelVersion", mars.get_long("date").unwrap_or(0) / 10000);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn isobaric_in_hpa_scales_levelist_by_minus_two() {
        let (code, scale, value) = level_surface_params(LevelType::IsobaricInHpa, 500);
        assert_eq!((code, scale, value), (100, -2, 500));
    }

    #[test]
    fn surface_temperature_writes_height_above_ground_at_2m() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let opts = options_dict();
        let aux = mars2grib_core::aux_dict();
        let mut handle = MockHandle::new();
        set_level(&mars, &aux, &opts, &mut handle).unwrap();
        assert_eq!(handle.long("typeOfFirstFixedSurface"), Some(103));
        assert_eq!(handle.long("scaledValueOfFirstFixedSurface"), Some(2));
    }

    #[test]
    fn accumulated_precip_sets_accumulation_processing_code() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(228228));
        mars.set("timespan", Value::Long(24));
        let opts = options_dict();
        let aux = mars2grib_core::aux_dict();
        let mut handle = MockHandle::new();
        set_statistics(&mars, &aux, &opts, &mut handle).unwrap();
        assert_eq!(handle.long("typeOfStatisticalProcessing"), Some(1));
        assert_eq!(handle.long("lengthOfTimeRange"), Some(24));
    }
}
