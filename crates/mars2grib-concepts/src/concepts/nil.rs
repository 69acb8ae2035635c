//! The `nil` concept: a single always-applicable variant.
//!
//! Grounded on the original backend's `Nil` concept, used wherever a recipe
//! selector needs "this section entry always applies" without introducing a
//! real classification axis (e.g. GRIB section 0, which has exactly one
//! template regardless of the request).

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "nil";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NilType {
    Default,
}

pub const ALL: &[NilType] = &[NilType::Default];

impl NilType {
    pub fn local_id(self) -> usize {
        0
    }

    pub fn name(self) -> &'static str {
        "default"
    }
}

/// Always resolves to `Default`: `nil` applies to every request unconditionally.
pub fn match_nil(_mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    Ok(Some(NilType::Default.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict};

    #[test]
    fn always_matches() {
        let mars = mars_dict();
        let opts = options_dict();
        assert_eq!(match_nil(&mars, &opts).unwrap(), Some(0));
    }
}
