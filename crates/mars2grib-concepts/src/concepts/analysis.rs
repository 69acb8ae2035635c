//! The `analysis` concept: the kind of analysis procedure used to produce the field.
//!
//! Not present as source in the retrieval pack; constructed over the
//! `type`/`method` MARS keys.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "analysis";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    FourDVar,
    Optimal,
}

pub const ALL: &[AnalysisType] = &[AnalysisType::FourDVar, AnalysisType::Optimal];

impl AnalysisType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("AnalysisType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            AnalysisType::FourDVar => "fourDVar",
            AnalysisType::Optimal => "optimal",
        }
    }
}

pub fn match_analysis(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    if mars.get_str("type").unwrap_or("") != "an" {
        return Ok(None);
    }

    let resolved = match mars.get_str("method") {
        Ok("oi") => AnalysisType::Optimal,
        _ => AnalysisType::FourDVar,
    };

    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn analysis_defaults_to_four_d_var() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("an"));
        let opts = options_dict();
        assert_eq!(match_analysis(&mars, &opts).unwrap(), Some(AnalysisType::FourDVar.local_id()));
    }

    #[test]
    fn non_analysis_type_is_missing() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("fc"));
        let opts = options_dict();
        assert!(match_analysis(&mars, &opts).unwrap().is_none());
    }
}
