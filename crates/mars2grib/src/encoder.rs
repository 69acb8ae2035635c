//! The public orchestrator: `Encoder::new`/`Encoder::encode`.
//!
//! Grounded on SPEC_FULL.md §4.9 ("Orchestrator") and the original
//! backend's top-level `mars2grib::encode` entry point: sanitize, resolve
//! active concepts, resolve the header layout, build-or-reuse a
//! specialized encoder keyed by the layout's template-number signature,
//! encode the header, inject the payload.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use mars2grib_core::{frame_here, AuxDict, DictionarySnapshot, Dictionary, MarsDict};
use mars2grib_encoder::{inject_values, EncoderError, SpecializedEncoder, Values};
use mars2grib_resolver::N_SECTIONS;

use crate::options::Options;
use crate::sanitize;

/// The six resolved template numbers, in section order. Two requests that
/// resolve to the same signature share a `SpecializedEncoder`: its plan
/// dispatches on concept identity rather than on the specific local variant
/// a request resolved to (see `mars2grib-encoder`'s `callbacks` module), so
/// same template numbers implies same callback lists regardless of which
/// concrete variant of each concept is in play.
type LayoutSignature = [usize; N_SECTIONS];

pub struct Encoder {
    options: Options,
    cache: RwLock<HashMap<LayoutSignature, Arc<SpecializedEncoder>>>,
}

impl Encoder {
    pub fn new(options: Options) -> Result<Self, EncoderError> {
        Ok(Self {
            options,
            cache: RwLock::new(HashMap::new()),
        })
    }

    pub fn encode(&self, mars: &MarsDict, aux: &AuxDict, values: Values<'_>) -> Result<mars2grib_core::MockHandle, EncoderError> {
        self.try_encode(mars, aux, values).map_err(|source| self.wrap_failure(mars, aux, source))
    }

    fn try_encode(&self, mars: &MarsDict, aux: &AuxDict, values: Values<'_>) -> Result<mars2grib_core::MockHandle, EncoderError> {
        let mars = self.prepare_mars(mars);
        let aux = self.prepare_aux(aux);
        let options_dict = self.options.to_dict();

        let active = mars2grib_concepts::resolve_active_concepts_or_throw(&mars, &options_dict)
            .map_err(|e| EncoderError::stage(frame_here!().with_concept("active-concepts"), e))?;

        let layout = mars2grib_resolver::resolve(&active).map_err(|e| EncoderError::stage(frame_here!(), e))?;

        let signature: LayoutSignature = std::array::from_fn(|s| layout.section(s).template_number);
        let specialized = self.encoder_for(signature, layout)?;

        let mut handle = specialized.encode(&mars, &aux, &options_dict)?;
        inject_values(&aux, &mut handle, values)?;
        Ok(handle)
    }

    fn encoder_for(&self, signature: LayoutSignature, layout: mars2grib_resolver::HeaderLayout) -> Result<Arc<SpecializedEncoder>, EncoderError> {
        if let Some(existing) = self.cache.read().expect("encoder cache lock poisoned").get(&signature) {
            return Ok(Arc::clone(existing));
        }

        let built = Arc::new(SpecializedEncoder::new(layout)?);
        let mut cache = self.cache.write().expect("encoder cache lock poisoned");
        Ok(Arc::clone(cache.entry(signature).or_insert(built)))
    }

    fn prepare_mars(&self, mars: &MarsDict) -> MarsDict {
        let mut mars = if self.options.sanitize_mars {
            sanitize::sanitize(mars)
        } else {
            mars.clone()
        };
        if self.options.fix_mars_grid {
            mars = sanitize::fix_mars_grid(&mars);
        }
        mars
    }

    fn prepare_aux(&self, aux: &AuxDict) -> AuxDict {
        if self.options.sanitize_misc {
            sanitize::sanitize(aux)
        } else {
            aux.clone()
        }
    }

    fn wrap_failure(&self, mars: &MarsDict, aux: &AuxDict, source: EncoderError) -> EncoderError {
        if matches!(source, EncoderError::Failed { .. }) {
            return source;
        }
        let snapshot = DictionarySnapshot {
            mars: mars.to_json(),
            aux: aux.to_json(),
            options: self.options.to_dict().to_json(),
        };
        EncoderError::failed(frame_here!(), snapshot, source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{aux_dict, mars_dict, Value};

    fn surface_temperature_request() -> (MarsDict, AuxDict) {
        let mut mars = mars_dict();
        mars.set("class", Value::from("od"));
        mars.set("type", Value::from("fc"));
        mars.set("stream", Value::from("oper"));
        mars.set("expver", Value::from("0001"));
        mars.set("date", Value::Long(20250101));
        mars.set("time", Value::Long(0));
        mars.set("step", Value::Long(12));
        mars.set("param", Value::Long(167));
        mars.set("levtype", Value::from("sfc"));
        mars.set("grid", Value::from("1/1"));
        (mars, aux_dict())
    }

    #[test]
    fn encodes_a_surface_temperature_forecast() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let (mars, aux) = surface_temperature_request();
        let data = vec![280.0; 65160];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("discipline"), Some(0));
        assert_eq!(handle.long("gridDefinitionTemplateNumber"), Some(0));
        assert_eq!(handle.long("dataRepresentationTemplateNumber"), Some(0));
    }

    #[test]
    fn reuses_the_specialized_encoder_across_same_signature_requests() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let (mars, aux) = surface_temperature_request();
        let data = vec![280.0; 4];

        encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        let cached_before = encoder.cache.read().unwrap().len();
        encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        let cached_after = encoder.cache.read().unwrap().len();
        assert_eq!(cached_before, cached_after);
    }

    #[test]
    fn accumulated_precipitation_selects_statistics_template() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let mut mars = mars_dict();
        mars.set("class", Value::from("od"));
        mars.set("type", Value::from("fc"));
        mars.set("stream", Value::from("oper"));
        mars.set("date", Value::Long(20250101));
        mars.set("time", Value::Long(0));
        mars.set("step", Value::Long(24));
        mars.set("timespan", Value::Long(24));
        mars.set("param", Value::Long(228228));
        mars.set("levtype", Value::from("sfc"));
        mars.set("grid", Value::from("1/1"));
        let aux = aux_dict();
        let data = vec![0.0; 4];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("typeOfStatisticalProcessing"), Some(1));
    }

    #[test]
    fn ensemble_perturbed_forecast_selects_individual_with_perturbation_number() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let (mut mars, aux) = surface_temperature_request();
        mars.set("stream", Value::from("enfo"));
        mars.set("type", Value::from("pf"));
        mars.set("number", Value::Long(5));
        let data = vec![280.0; 65160];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("productDefinitionTemplateNumber"), Some(1));
        assert_eq!(handle.long("typeOfEnsembleForecast"), Some(3), "type pf with a member number is Individual, not PerturbedParameters");
        assert_eq!(handle.long("perturbationNumber"), Some(5));
    }

    #[test]
    fn reduced_gaussian_analysis_selects_grid_template_40() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let mut mars = mars_dict();
        mars.set("type", Value::from("an"));
        mars.set("param", Value::Long(129));
        mars.set("levtype", Value::from("sfc"));
        mars.set("grid", Value::from("N320"));
        let aux = aux_dict();
        let data = vec![0.0; 4];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("gridDefinitionTemplateNumber"), Some(40));
        assert_eq!(handle.long("productDefinitionTemplateNumber"), Some(0));
    }

    #[test]
    fn wave_spectra_selects_template_99_with_no_level() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let mut mars = mars_dict();
        mars.set("param", Value::Long(140251));
        mars.set("frequency", Value::Long(25));
        mars.set("direction", Value::Long(24));
        mars.set("levtype", Value::from("sfc"));
        mars.set("type", Value::from("fc"));
        let aux = aux_dict();
        let data = vec![0.0; 4];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("productDefinitionTemplateNumber"), Some(99));
        assert!(handle.long("typeOfFirstFixedSurface").is_none(), "wave spectra fields carry no level");
    }

    #[test]
    fn already_expanded_wind_component_request_encodes_as_an_ordinary_isobaric_param() {
        // The retrieval frontend's U/V -> vorticity/divergence expansion
        // (windConversion) is out of scope here; the core only ever sees
        // the already-expanded request and treats 131/132 as plain
        // isobaric params (see DESIGN.md Open Question resolution 2).
        let encoder = Encoder::new(Options::default()).unwrap();
        let mut mars = mars_dict();
        mars.set("param", Value::Long(131));
        mars.set("levtype", Value::from("pl"));
        mars.set("levelist", Value::Long(500));
        mars.set("type", Value::from("fc"));
        mars.set("grid", Value::from("1/1"));
        let aux = aux_dict();
        let data = vec![0.0; 4];
        let handle = encoder.encode(&mars, &aux, Values::F64(&data)).unwrap();
        assert_eq!(handle.long("typeOfFirstFixedSurface"), Some(100));
    }

    #[test]
    fn a_matcher_failure_is_wrapped_in_a_top_level_failed_error() {
        let encoder = Encoder::new(Options::default()).unwrap();
        let mut mars = mars_dict();
        mars.set("type", Value::from("bogus"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let aux = aux_dict();
        let err = encoder.encode(&mars, &aux, Values::F64(&[1.0])).unwrap_err();
        assert!(matches!(err, EncoderError::Failed { .. }));
        assert!(std::error::Error::source(&err).is_some());
    }
}
