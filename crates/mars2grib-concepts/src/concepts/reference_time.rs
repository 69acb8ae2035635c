//! The `reference-time` concept: how the forecast reference time should be interpreted.
//!
//! Grounded only incidentally (the `Reforecast` variant name appears in a
//! section-1 recipe selector in the retrieval pack); the rest of the variant
//! set and the matcher logic are a representative construction over the
//! `stream` MARS key.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "reference-time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceTimeType {
    Default,
    Reforecast,
}

pub const ALL: &[ReferenceTimeType] = &[ReferenceTimeType::Default, ReferenceTimeType::Reforecast];

impl ReferenceTimeType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("ReferenceTimeType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            ReferenceTimeType::Default => "default",
            ReferenceTimeType::Reforecast => "reforecast",
        }
    }
}

pub fn match_reference_time(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("stream") {
        Ok("enfh") | Ok("efhs") => ReferenceTimeType::Reforecast,
        _ => ReferenceTimeType::Default,
    };
    Ok(Some(resolved.local_id()))
}
