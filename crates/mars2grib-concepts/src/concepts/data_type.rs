//! The `data-type` concept: the fundamental kind of data a request carries
//! (deterministic/analysis, ensemble member, perturbation, etc. as expressed
//! by the MARS `type` key).
//!
//! Not present as source in the retrieval pack; constructed from the
//! standard MARS `type` vocabulary. Unlike most concepts, `data-type`
//! throws on an unrecognized `type`: every request must carry a MARS `type`
//! this encoder knows how to classify.

use mars2grib_core::Dictionary;

use crate::matcher::{MatcherError, MatchResult};

pub const NAME: &str = "data-type";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataTypeType {
    Analysis,
    Forecast,
    PerturbedForecast,
    ControlForecast,
    Climatology,
}

pub const ALL: &[DataTypeType] = &[
    DataTypeType::Analysis,
    DataTypeType::Forecast,
    DataTypeType::PerturbedForecast,
    DataTypeType::ControlForecast,
    DataTypeType::Climatology,
];

impl DataTypeType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("DataTypeType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            DataTypeType::Analysis => "analysis",
            DataTypeType::Forecast => "forecast",
            DataTypeType::PerturbedForecast => "perturbedForecast",
            DataTypeType::ControlForecast => "controlForecast",
            DataTypeType::Climatology => "climatology",
        }
    }
}

pub fn match_data_type(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let ty = mars.get_str("type").map_err(|_| MatcherError::RequiredKeyMissing {
        concept: NAME,
        key: "type",
    })?;

    let resolved = match ty {
        "an" => DataTypeType::Analysis,
        "fc" => DataTypeType::Forecast,
        "pf" => DataTypeType::PerturbedForecast,
        "cf" => DataTypeType::ControlForecast,
        "cl" => DataTypeType::Climatology,
        other => {
            return Err(MatcherError::UnrecognizedValue {
                concept: NAME,
                key: "type",
                value: other.to_owned(),
            });
        }
    };

    Ok(Some(resolved.local_id()))
}
