//! The `point-in-time` concept: whether a field represents an instantaneous
//! snapshot (as opposed to a time-statistically processed one).
//!
//! Grounded on the original backend's `pointInTimeMatcher.h`: a broad param
//! range covering standard, wave, satellite and chemical instantaneous
//! products maps to `Default`; anything else falls through to `Missing`
//! (time-statistical parameters resolve via the `statistics` concept
//! instead, never through here).

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;
use crate::ranges::{matches_any, Range};

pub const NAME: &str = "point-in-time";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointInTimeType {
    Default,
}

pub const ALL: &[PointInTimeType] = &[PointInTimeType::Default];

impl PointInTimeType {
    pub fn local_id(self) -> usize {
        0
    }

    pub fn name(self) -> &'static str {
        "default"
    }
}

const INSTANTANEOUS: &[Range] = &[
    Range::new(1, 260), // standard atmospheric/surface fields
    Range::new(140121, 140254), // wave instantaneous products
    Range::new(260000, 260600), // satellite/derived instantaneous products
];

pub fn match_point_in_time(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let Ok(param) = mars.get_param_id("param") else {
        return Ok(None);
    };

    if matches_any(INSTANTANEOUS, param) {
        Ok(Some(PointInTimeType::Default.local_id()))
    } else {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn surface_temperature_is_point_in_time() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(167));
        let opts = options_dict();
        assert_eq!(match_point_in_time(&mars, &opts).unwrap(), Some(0));
    }

    #[test]
    fn out_of_range_param_is_missing() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(999_999));
        let opts = options_dict();
        assert!(match_point_in_time(&mars, &opts).unwrap().is_none());
    }
}
