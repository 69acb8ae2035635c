//! The `param` concept: broad physical-quantity family of the parameter.
//!
//! Not present as source in the retrieval pack; constructed as a coarse
//! classification over param-id ranges, used mainly by section-4 recipes
//! that need to distinguish vector (wind) components from scalar fields.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;
use crate::ranges::{matches_any, Range};

pub const NAME: &str = "param";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamType {
    Scalar,
    VectorComponent,
}

pub const ALL: &[ParamType] = &[ParamType::Scalar, ParamType::VectorComponent];

impl ParamType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("ParamType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            ParamType::Scalar => "scalar",
            ParamType::VectorComponent => "vectorComponent",
        }
    }
}

const VECTOR_COMPONENTS: &[Range] = &[
    Range::single(131), // u
    Range::single(132), // v
    Range::single(165), // 10u
    Range::single(166), // 10v
    Range::single(249), // u-ocean-current
    Range::single(250), // v-ocean-current
];

pub fn match_param(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let Ok(param) = mars.get_param_id("param") else {
        return Ok(None);
    };

    let resolved = if matches_any(VECTOR_COMPONENTS, param) {
        ParamType::VectorComponent
    } else {
        ParamType::Scalar
    };

    Ok(Some(resolved.local_id()))
}
