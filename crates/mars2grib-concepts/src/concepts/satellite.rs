//! The `satellite` concept: satellite-instrument product classification.
//!
//! Incidentally referenced by section-2 recipe `S2_R24` in the retrieval
//! pack (`Select<SatelliteConcept>` with no explicit variant list); the
//! variant set is a representative construction, but the short-circuit
//! itself is grounded on `levelMatcher.h`'s own satellite gate (SPEC_FULL.md
//! §4.3): a satellite product is identified by `channel`, `ident` and
//! `instrument` all being present, not by any `levtype` value (`sat` is not
//! part of the `levtype` taxonomy).

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "satellite";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SatelliteType {
    Radiance,
    BrightnessTemperature,
}

pub const ALL: &[SatelliteType] = &[SatelliteType::Radiance, SatelliteType::BrightnessTemperature];

impl SatelliteType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("SatelliteType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            SatelliteType::Radiance => "radiance",
            SatelliteType::BrightnessTemperature => "brightnessTemperature",
        }
    }
}

pub fn is_satellite_product(mars: &dyn Dictionary) -> bool {
    mars.has("channel") && mars.has("ident") && mars.has("instrument")
}

pub fn match_satellite(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    if !is_satellite_product(mars) {
        return Ok(None);
    }

    let resolved = SatelliteType::BrightnessTemperature;

    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn channel_ident_instrument_resolves_to_brightness_temperature() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("channel", Value::Long(5));
        mars.set("ident", Value::Long(3));
        mars.set("instrument", Value::Long(207));
        let opts = options_dict();
        assert_eq!(
            match_satellite(&mars, &opts).unwrap(),
            Some(SatelliteType::BrightnessTemperature.local_id())
        );
    }

    #[test]
    fn missing_instrument_key_is_not_satellite() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("channel", Value::Long(5));
        mars.set("ident", Value::Long(3));
        let opts = options_dict();
        assert!(match_satellite(&mars, &opts).unwrap().is_none());
    }
}
