//! The `wave` concept: sea-state/wave-spectrum specific classification.
//!
//! Grounded on the original backend's `waveMatcher.h`: a narrow param range
//! maps to `Period`, a single spectral param (140251) maps to `Spectra` but
//! only once both `frequency` and `direction` dimensions are present
//! (otherwise the request is inconsistent and we throw), and everything else
//! falls through to `Missing`.

use mars2grib_core::Dictionary;

use crate::matcher::{MatcherError, MatchResult};
use crate::ranges::Range;

pub const NAME: &str = "wave";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveType {
    Period,
    Spectra,
}

pub const ALL: &[WaveType] = &[WaveType::Period, WaveType::Spectra];

impl WaveType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("WaveType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            WaveType::Period => "period",
            WaveType::Spectra => "spectra",
        }
    }
}

const PERIOD: Range = Range::new(140114, 140120);
const SPECTRA_PARAM: i64 = 140251;

pub fn match_wave(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let Ok(param) = mars.get_param_id("param") else {
        return Ok(None);
    };

    if PERIOD.contains(param) {
        return Ok(Some(WaveType::Period.local_id()));
    }

    if param == SPECTRA_PARAM {
        let has_frequency = mars.has("frequency");
        let has_direction = mars.has("direction");
        if !has_frequency || !has_direction {
            return Err(MatcherError::Inconsistent {
                concept: NAME,
                message: "param 140251 (2d wave spectra) requires both frequency and direction axes".to_owned(),
            });
        }
        return Ok(Some(WaveType::Spectra.local_id()));
    }

    Ok(None)
}
