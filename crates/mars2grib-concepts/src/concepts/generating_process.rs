//! The `generating-process` concept: the numerical process that generated the field.
//!
//! Not present as source in the retrieval pack; constructed over the
//! `stream`/`expver` MARS keys.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "generating-process";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratingProcessType {
    Deterministic,
    EnsembleForecast,
    Seasonal,
}

pub const ALL: &[GeneratingProcessType] = &[
    GeneratingProcessType::Deterministic,
    GeneratingProcessType::EnsembleForecast,
    GeneratingProcessType::Seasonal,
];

impl GeneratingProcessType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("GeneratingProcessType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            GeneratingProcessType::Deterministic => "deterministic",
            GeneratingProcessType::EnsembleForecast => "ensembleForecast",
            GeneratingProcessType::Seasonal => "seasonal",
        }
    }
}

pub fn match_generating_process(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("stream") {
        Ok("enfo") | Ok("efas") => GeneratingProcessType::EnsembleForecast,
        Ok("mnfc") | Ok("mnfh") | Ok("msmm") => GeneratingProcessType::Seasonal,
        _ => GeneratingProcessType::Deterministic,
    };
    Ok(Some(resolved.local_id()))
}
