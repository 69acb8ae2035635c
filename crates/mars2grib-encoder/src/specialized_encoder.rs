//! `SpecializedEncoder`: executes a resolved [`HeaderLayout`]'s
//! [`EncodingPlan`] against a concrete `(mars, aux, options)` request.
//!
//! Grounded on the original backend's `SpecializedEncoder.h`/`.cc`: acquire
//! a fresh handle from the GRIB sample, run the section initializers
//! (stage 0), then run stages 1 through [`N_STAGES`] in order, each stage
//! visiting sections 0..N_SECTIONS ascending and each section's callbacks in
//! recipe-declaration order. The handle is explicitly cloned and the
//! original dropped after every stage, mirroring the reference's
//! "clone, discard" handle-refresh step even though this backend's
//! `MockHandle::clone` is just a map copy.

use mars2grib_core::{AuxDict, MarsDict, MockHandle, OptionsDict};
use mars2grib_resolver::HeaderLayout;

use crate::error::EncoderError;
use crate::plan::{EncodingPlan, N_STAGES};

/// Not `Clone`: one `SpecializedEncoder` is built once per resolved header
/// layout and reused across encodes of requests that share that layout.
pub struct SpecializedEncoder {
    layout: HeaderLayout,
    plan: EncodingPlan,
}

impl SpecializedEncoder {
    pub fn new(layout: HeaderLayout) -> Result<Self, EncoderError> {
        let plan = EncodingPlan::build(&layout)?;
        Ok(Self { layout, plan })
    }

    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    pub fn encode(&self, mars: &MarsDict, aux: &AuxDict, options: &OptionsDict) -> Result<MockHandle, EncoderError> {
        let mut handle = MockHandle::from_sample("GRIB2");

        for stage in 0..=N_STAGES {
            for section in 0..self.layout.sections.len() {
                if stage == 0 {
                    let init = self.plan.initializer(section);
                    init(&mut handle).map_err(|e| e.augment(stage, section))?;
                    continue;
                }

                for callback in self.plan.phase_callbacks(stage - 1, section) {
                    callback(mars, aux, options, &mut handle).map_err(|e| e.augment(stage, section))?;
                }
            }

            let cloned = handle.clone();
            drop(handle);
            handle = cloned;
        }

        Ok(handle)
    }
}

impl std::fmt::Debug for SpecializedEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpecializedEncoder")
            .field("sections", &self.layout.sections.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Dictionary, Value};

    fn surface_analysis_request() -> (MarsDict, AuxDict, OptionsDict) {
        let mut mars = mars_dict();
        mars.set("class", Value::from("od"));
        mars.set("type", Value::from("an"));
        mars.set("stream", Value::from("oper"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        mars.set("grid", Value::from("1/1"));
        mars.set("packing", Value::from("simple"));
        mars.set("date", Value::Long(20260101));
        mars.set("time", Value::Long(0));
        (mars, mars2grib_core::aux_dict(), options_dict())
    }

    #[test]
    fn encodes_a_surface_analysis_request_end_to_end() {
        let (mars, aux, options) = surface_analysis_request();
        let active = mars2grib_concepts::resolve_active_concepts_or_throw(&mars, &options).unwrap();
        let layout = mars2grib_resolver::resolve(&active).unwrap();
        let encoder = SpecializedEncoder::new(layout).unwrap();

        let handle = encoder.encode(&mars, &aux, &options).unwrap();
        assert_eq!(handle.long("discipline"), Some(0));
        assert_eq!(handle.long("centre"), Some(98));
        assert_eq!(handle.long("typeOfProcessedData"), Some(0)); // analysis
        assert_eq!(handle.long("dataDate"), Some(20260101));
    }

    #[test]
    fn encoder_is_reusable_across_multiple_encodes() {
        let (mars, aux, options) = surface_analysis_request();
        let active = mars2grib_concepts::resolve_active_concepts_or_throw(&mars, &options).unwrap();
        let layout = mars2grib_resolver::resolve(&active).unwrap();
        let encoder = SpecializedEncoder::new(layout).unwrap();

        let first = encoder.encode(&mars, &aux, &options).unwrap();
        let second = encoder.encode(&mars, &aux, &options).unwrap();
        assert_eq!(first.long("discipline"), second.long("discipline"));
    }
}
