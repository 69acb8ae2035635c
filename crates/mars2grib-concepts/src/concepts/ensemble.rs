//! The `ensemble` concept: whether and how a field belongs to an ensemble.
//!
//! The variant names, and the fact that `Individual` is the variant forced by
//! every ordinary section-4 ensemble recipe (templates 1, 11, 33, ...) while
//! `PerturbedParameters` and `RandomPatterns` are each forced only by their
//! own dedicated template (142, 143), are grounded in the retrieval pack's
//! section-4 recipe selectors. A plain perturbed/control forecast (`type`
//! `pf`/`cf`, with or without a member `number`) is `Individual`; the other
//! two variants are distinct ensemble-generation methods, not "has a member
//! number", so `number` alone must never select them. The `origin`/`method`
//! based dispatch onto `RandomPatterns`/`PerturbedParameters` below is a
//! representative construction standing in for that descriptor.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "ensemble";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsembleType {
    Individual,
    PerturbedParameters,
    RandomPatterns,
}

pub const ALL: &[EnsembleType] = &[
    EnsembleType::Individual,
    EnsembleType::PerturbedParameters,
    EnsembleType::RandomPatterns,
];

impl EnsembleType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("EnsembleType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            EnsembleType::Individual => "individual",
            EnsembleType::PerturbedParameters => "perturbedParameters",
            EnsembleType::RandomPatterns => "randomPatterns",
        }
    }
}

pub fn match_ensemble(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let ty = mars.get_str("type").unwrap_or("");
    if ty != "pf" && ty != "cf" {
        return Ok(None);
    }

    let resolved = match mars.get_str("origin") {
        Ok("sppt") | Ok("skeb") => EnsembleType::RandomPatterns,
        _ if mars.has("method") => EnsembleType::PerturbedParameters,
        _ => EnsembleType::Individual,
    };

    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn perturbed_forecast_with_number_is_individual() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("pf"));
        mars.set("number", Value::Long(5));
        let opts = options_dict();
        assert_eq!(
            match_ensemble(&mars, &opts).unwrap(),
            Some(EnsembleType::Individual.local_id())
        );
    }

    #[test]
    fn control_forecast_without_number_is_individual() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("cf"));
        let opts = options_dict();
        assert_eq!(match_ensemble(&mars, &opts).unwrap(), Some(EnsembleType::Individual.local_id()));
    }

    #[test]
    fn sppt_origin_is_random_patterns() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("pf"));
        mars.set("number", Value::Long(3));
        mars.set("origin", Value::from("sppt"));
        let opts = options_dict();
        assert_eq!(match_ensemble(&mars, &opts).unwrap(), Some(EnsembleType::RandomPatterns.local_id()));
    }

    #[test]
    fn explicit_method_is_perturbed_parameters() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("pf"));
        mars.set("number", Value::Long(2));
        mars.set("method", Value::Long(1));
        let opts = options_dict();
        assert_eq!(
            match_ensemble(&mars, &opts).unwrap(),
            Some(EnsembleType::PerturbedParameters.local_id())
        );
    }

    #[test]
    fn deterministic_forecast_is_missing() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("fc"));
        let opts = options_dict();
        assert!(match_ensemble(&mars, &opts).unwrap().is_none());
    }
}
