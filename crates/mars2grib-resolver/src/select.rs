//! `Select`: declares which variants of a concept a recipe selector accepts.
//!
//! The original backend expresses this as a compile-time template,
//! `Select<Concept, Vs...>`, with an empty `Vs...` pack meaning "any variant
//! of `Concept`". Rust has no direct equivalent of variadic non-type
//! template parameters over an arbitrary concept's enum, so this is a small
//! runtime value built from the concept's registry index and local variant
//! ids instead — the recipe tables below call [`Select::any`] /
//! [`Select::of`] exactly where the original calls `Select<C>` /
//! `Select<C, V1, V2>`.

use mars2grib_concepts::registry;

/// One recipe selector: which concept it constrains, and which of that
/// concept's global variant ids it accepts.
#[derive(Debug, Clone)]
pub struct Select {
    pub concept_idx: usize,
    pub ids: Vec<usize>,
}

impl Select {
    /// Accepts any variant of `concept_idx` (the original's wildcard `Select<Concept>`).
    pub fn any(concept_idx: usize) -> Self {
        let descriptor = &registry::CONCEPTS[concept_idx];
        let ids = (0..descriptor.variant_count)
            .map(|local| registry::global_id(concept_idx, local))
            .collect();
        Self { concept_idx, ids }
    }

    /// Accepts exactly the given local variant ids of `concept_idx`.
    pub fn of(concept_idx: usize, local_variant_ids: &[usize]) -> Self {
        let ids = local_variant_ids
            .iter()
            .map(|&local| registry::global_id(concept_idx, local))
            .collect();
        Self { concept_idx, ids }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_concepts::registry::NIL;

    #[test]
    fn any_covers_every_variant_of_nil() {
        let select = Select::any(NIL);
        assert_eq!(select.len(), 1);
    }

    #[test]
    fn of_maps_local_to_global_ids() {
        let select = Select::of(NIL, &[0]);
        assert_eq!(select.ids, vec![registry::global_id(NIL, 0)]);
    }
}
