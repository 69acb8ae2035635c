//! The `longrange` concept: whether the field belongs to a long-range/seasonal product.
//!
//! Incidentally referenced by section-2 recipe `S2_R15` in the retrieval
//! pack (`Select<LongrangeConcept>` with no explicit variant list, i.e. "any
//! variant"); the variant set and matcher here are a representative
//! construction over the `stream` MARS key.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "longrange";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongrangeType {
    Monthly,
    Seasonal,
}

pub const ALL: &[LongrangeType] = &[LongrangeType::Monthly, LongrangeType::Seasonal];

impl LongrangeType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("LongrangeType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            LongrangeType::Monthly => "monthly",
            LongrangeType::Seasonal => "seasonal",
        }
    }
}

pub fn match_longrange(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("stream") {
        Ok("mnfc") | Ok("mnfh") => LongrangeType::Monthly,
        Ok("msmm") | Ok("mmsf") => LongrangeType::Seasonal,
        _ => return Ok(None),
    };
    Ok(Some(resolved.local_id()))
}
