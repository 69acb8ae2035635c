//! The `derived` concept: whether the field is a post-processed statistic
//! derived from an ensemble (as opposed to a raw member).
//!
//! Not present as source in the retrieval pack; constructed over the
//! `type` MARS key's `em`/`es`/`ep` (ensemble mean/spread/probability)
//! family.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "derived";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedType {
    Mean,
    Spread,
    Probability,
}

pub const ALL: &[DerivedType] = &[DerivedType::Mean, DerivedType::Spread, DerivedType::Probability];

impl DerivedType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("DerivedType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            DerivedType::Mean => "mean",
            DerivedType::Spread => "spread",
            DerivedType::Probability => "probability",
        }
    }
}

pub fn match_derived(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("type") {
        Ok("em") => DerivedType::Mean,
        Ok("es") => DerivedType::Spread,
        Ok("ep") => DerivedType::Probability,
        _ => return Ok(None),
    };
    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn ensemble_mean_resolves() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("em"));
        let opts = options_dict();
        assert_eq!(match_derived(&mars, &opts).unwrap(), Some(DerivedType::Mean.local_id()));
    }

    #[test]
    fn raw_member_is_missing() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("pf"));
        let opts = options_dict();
        assert!(match_derived(&mars, &opts).unwrap().is_none());
    }
}
