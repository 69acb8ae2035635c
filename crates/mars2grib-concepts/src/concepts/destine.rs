//! The `destine` concept: Destination Earth project variant classification.
//!
//! Variant names are grounded verbatim in the retrieval pack's section-2
//! recipes (`ClimateDT`, `ExtremesDT`; `OnDemandExtremesDT` exists in source
//! but its recipe is commented out there and is kept unreachable here too,
//! see the resolver's section-2 recipe table). The matcher dispatches on the
//! `activity`/`project` MARS keys, a representative construction.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "destine";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestineType {
    ClimateDT,
    ExtremesDT,
    OnDemandExtremesDT,
}

pub const ALL: &[DestineType] = &[
    DestineType::ClimateDT,
    DestineType::ExtremesDT,
    DestineType::OnDemandExtremesDT,
];

impl DestineType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("DestineType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            DestineType::ClimateDT => "climateDT",
            DestineType::ExtremesDT => "extremesDT",
            DestineType::OnDemandExtremesDT => "onDemandExtremesDT",
        }
    }
}

pub fn match_destine(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("activity") {
        Ok("climatedt") | Ok("scenariodt") => DestineType::ClimateDT,
        Ok("extremesdt") => DestineType::ExtremesDT,
        Ok("extremesdt-ondemand") => DestineType::OnDemandExtremesDT,
        _ => return Ok(None),
    };
    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn climate_dt_activity_resolves() {
        let mut mars = mars_dict();
        mars.set("activity", Value::from("climatedt"));
        let opts = options_dict();
        assert_eq!(match_destine(&mars, &opts).unwrap(), Some(DestineType::ClimateDT.local_id()));
    }

    #[test]
    fn absent_activity_is_missing() {
        let mars = mars_dict();
        let opts = options_dict();
        assert!(match_destine(&mars, &opts).unwrap().is_none());
    }
}
