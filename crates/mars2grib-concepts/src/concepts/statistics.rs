//! The `statistics` concept: the time-statistical processing applied to a field.
//!
//! Grounded on the original backend's `statisticsMatcher.h`: a flat set of
//! param-id ranges per statistical operation, falling through to `Missing`
//! for anything outside those ranges (not an error — most requests carry no
//! time-statistical processing at all).

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;
use crate::ranges::{matches_any, Range};

pub const NAME: &str = "statistics";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatisticsType {
    Accumulation,
    Average,
    Maximum,
    Minimum,
    Mode,
    Severity,
    StandardDeviation,
}

pub const ALL: &[StatisticsType] = &[
    StatisticsType::Accumulation,
    StatisticsType::Average,
    StatisticsType::Maximum,
    StatisticsType::Minimum,
    StatisticsType::Mode,
    StatisticsType::Severity,
    StatisticsType::StandardDeviation,
];

impl StatisticsType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("StatisticsType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            StatisticsType::Accumulation => "accumulation",
            StatisticsType::Average => "average",
            StatisticsType::Maximum => "maximum",
            StatisticsType::Minimum => "minimum",
            StatisticsType::Mode => "mode",
            StatisticsType::Severity => "severity",
            StatisticsType::StandardDeviation => "standardDeviation",
        }
    }
}

const ACCUMULATION: &[Range] = &[
    Range::single(228),
    Range::new(142, 143),
    Range::new(144, 146),
    Range::single(228228),
];
const AVERAGE: &[Range] = &[Range::new(165, 166), Range::single(169), Range::single(212)];
const MAXIMUM: &[Range] = &[Range::single(201), Range::single(228026)];
const MINIMUM: &[Range] = &[Range::single(202)];
const MODE: &[Range] = &[];
const SEVERITY: &[Range] = &[Range::single(228044)];
const STANDARD_DEVIATION: &[Range] = &[];

/// Falls through to `Missing` for any parameter with no time-statistical
/// processing; never throws.
pub fn match_statistics(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let Ok(param) = mars.get_param_id("param") else {
        return Ok(None);
    };

    let resolved = if matches_any(ACCUMULATION, param) {
        Some(StatisticsType::Accumulation)
    } else if matches_any(AVERAGE, param) {
        Some(StatisticsType::Average)
    } else if matches_any(MAXIMUM, param) {
        Some(StatisticsType::Maximum)
    } else if matches_any(MINIMUM, param) {
        Some(StatisticsType::Minimum)
    } else if matches_any(MODE, param) {
        Some(StatisticsType::Mode)
    } else if matches_any(SEVERITY, param) {
        Some(StatisticsType::Severity)
    } else if matches_any(STANDARD_DEVIATION, param) {
        Some(StatisticsType::StandardDeviation)
    } else {
        None
    };

    Ok(resolved.map(StatisticsType::local_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn accumulated_precip_matches_accumulation() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(228));
        let opts = options_dict();
        let id = match_statistics(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, StatisticsType::Accumulation.local_id());
    }

    #[test]
    fn total_precipitation_228228_matches_accumulation() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(228228));
        let opts = options_dict();
        let id = match_statistics(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, StatisticsType::Accumulation.local_id());
    }

    #[test]
    fn unrelated_param_is_missing() {
        let mut mars = mars_dict();
        mars.set("param", Value::Long(999999));
        let opts = options_dict();
        assert!(match_statistics(&mars, &opts).unwrap().is_none());
    }
}
