//! Resolution of which concepts are active for a given request, and which
//! global variant id each active concept resolved to.

use mars2grib_core::Dictionary;

use crate::matcher::MatcherError;
use crate::registry::{self, N_CONCEPTS};

/// Sentinel stored in [`ActiveConceptsData::variant_indices`] for a concept
/// that did not apply to this request (the original's `not_applicable`).
pub const NOT_APPLICABLE: i64 = -1;

/// The result of classifying a request against every concept in the registry.
///
/// `variant_indices[i]` is either the global variant id concept `i` resolved
/// to, or [`NOT_APPLICABLE`]. `active_indices` is the dense, ordered list of
/// concept indices that *did* apply — this is what section-recipe matching
/// iterates over, since most requests activate only a handful of the 22
/// concepts.
#[derive(Debug, Clone)]
pub struct ActiveConceptsData {
    pub variant_indices: [i64; N_CONCEPTS],
    pub active_indices: Vec<usize>,
}

impl ActiveConceptsData {
    pub fn variant_for(&self, concept_idx: usize) -> Option<usize> {
        let v = self.variant_indices[concept_idx];
        if v == NOT_APPLICABLE {
            None
        } else {
            Some(v as usize)
        }
    }

    pub fn is_active(&self, concept_idx: usize) -> bool {
        self.variant_indices[concept_idx] != NOT_APPLICABLE
    }
}

/// Runs every concept's matcher against `mars`/`options` and assembles the
/// active-concepts table, wrapping any matcher error with which concept
/// raised it.
pub fn resolve_active_concepts_or_throw(
    mars: &dyn Dictionary,
    options: &dyn Dictionary,
) -> Result<ActiveConceptsData, MatcherError> {
    let mut variant_indices = [NOT_APPLICABLE; N_CONCEPTS];
    let mut active_indices = Vec::new();

    for (i, descriptor) in registry::CONCEPTS.iter().enumerate() {
        let local = (descriptor.matcher)(mars, options)?;
        match local {
            Some(local_id) => {
                variant_indices[i] = registry::global_id(i, local_id) as i64;
                active_indices.push(i);
            }
            None => {
                variant_indices[i] = NOT_APPLICABLE;
            }
        }
    }

    Ok(ActiveConceptsData {
        variant_indices,
        active_indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn nil_and_data_type_are_always_active_for_a_well_formed_request() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("an"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let opts = options_dict();

        let active = resolve_active_concepts_or_throw(&mars, &opts).unwrap();
        assert!(active.is_active(registry::NIL));
        assert!(active.is_active(registry::DATA_TYPE));
        assert!(active.is_active(registry::LEVEL));
    }

    #[test]
    fn unknown_data_type_propagates_as_matcher_error() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("zz"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let opts = options_dict();

        assert!(resolve_active_concepts_or_throw(&mars, &opts).is_err());
    }

    #[test]
    fn wave_is_inactive_for_a_surface_request() {
        let mut mars = mars_dict();
        mars.set("type", Value::from("fc"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let opts = options_dict();

        let active = resolve_active_concepts_or_throw(&mars, &opts).unwrap();
        assert!(!active.is_active(registry::WAVE));
    }
}
