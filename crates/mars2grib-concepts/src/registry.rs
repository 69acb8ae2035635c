//! The general variant registry: the canonical, alphabetically-ordered list
//! of all 22 concepts, their variant counts, and the dense global variant-id
//! offset each concept occupies.
//!
//! The registration order below is load-bearing: it is reproduced verbatim
//! from the original backend's `AllConcepts.h` typelist and determines the
//! `conceptOffset` every global variant id is computed against. Changing
//! this order changes every global variant id in the crate.

use std::sync::LazyLock;

use crate::concepts::*;
use crate::matcher::MatchFn;

pub const N_CONCEPTS: usize = 22;

/// Static per-concept metadata: name, variant count, and its matcher callback.
pub struct ConceptDescriptor {
    pub name: &'static str,
    pub variant_count: usize,
    pub matcher: MatchFn,
}

pub static CONCEPTS: [ConceptDescriptor; N_CONCEPTS] = [
    ConceptDescriptor {
        name: analysis::NAME,
        variant_count: analysis::ALL.len(),
        matcher: analysis::match_analysis,
    },
    ConceptDescriptor {
        name: composition::NAME,
        variant_count: composition::ALL.len(),
        matcher: composition::match_composition,
    },
    ConceptDescriptor {
        name: data_type::NAME,
        variant_count: data_type::ALL.len(),
        matcher: data_type::match_data_type,
    },
    ConceptDescriptor {
        name: derived::NAME,
        variant_count: derived::ALL.len(),
        matcher: derived::match_derived,
    },
    ConceptDescriptor {
        name: destine::NAME,
        variant_count: destine::ALL.len(),
        matcher: destine::match_destine,
    },
    ConceptDescriptor {
        name: ensemble::NAME,
        variant_count: ensemble::ALL.len(),
        matcher: ensemble::match_ensemble,
    },
    ConceptDescriptor {
        name: generating_process::NAME,
        variant_count: generating_process::ALL.len(),
        matcher: generating_process::match_generating_process,
    },
    ConceptDescriptor {
        name: level::NAME,
        variant_count: level::ALL.len(),
        matcher: level::match_level,
    },
    ConceptDescriptor {
        name: longrange::NAME,
        variant_count: longrange::ALL.len(),
        matcher: longrange::match_longrange,
    },
    ConceptDescriptor {
        name: mars::NAME,
        variant_count: mars::ALL.len(),
        matcher: mars::match_mars,
    },
    ConceptDescriptor {
        name: nil::NAME,
        variant_count: nil::ALL.len(),
        matcher: nil::match_nil,
    },
    ConceptDescriptor {
        name: origin::NAME,
        variant_count: origin::ALL.len(),
        matcher: origin::match_origin,
    },
    ConceptDescriptor {
        name: packing::NAME,
        variant_count: packing::ALL.len(),
        matcher: packing::match_packing,
    },
    ConceptDescriptor {
        name: param::NAME,
        variant_count: param::ALL.len(),
        matcher: param::match_param,
    },
    ConceptDescriptor {
        name: point_in_time::NAME,
        variant_count: point_in_time::ALL.len(),
        matcher: point_in_time::match_point_in_time,
    },
    ConceptDescriptor {
        name: reference_time::NAME,
        variant_count: reference_time::ALL.len(),
        matcher: reference_time::match_reference_time,
    },
    ConceptDescriptor {
        name: representation::NAME,
        variant_count: representation::ALL.len(),
        matcher: representation::match_representation,
    },
    ConceptDescriptor {
        name: satellite::NAME,
        variant_count: satellite::ALL.len(),
        matcher: satellite::match_satellite,
    },
    ConceptDescriptor {
        name: shape_of_the_earth::NAME,
        variant_count: shape_of_the_earth::ALL.len(),
        matcher: shape_of_the_earth::match_shape_of_the_earth,
    },
    ConceptDescriptor {
        name: statistics::NAME,
        variant_count: statistics::ALL.len(),
        matcher: statistics::match_statistics,
    },
    ConceptDescriptor {
        name: tables::NAME,
        variant_count: tables::ALL.len(),
        matcher: tables::match_tables,
    },
    ConceptDescriptor {
        name: wave::NAME,
        variant_count: wave::ALL.len(),
        matcher: wave::match_wave,
    },
];

/// Concept index constants, named for readability at call sites (e.g. recipe
/// tables referencing `registry::LEVEL`).
pub const ANALYSIS: usize = 0;
pub const COMPOSITION: usize = 1;
pub const DATA_TYPE: usize = 2;
pub const DERIVED: usize = 3;
pub const DESTINE: usize = 4;
pub const ENSEMBLE: usize = 5;
pub const GENERATING_PROCESS: usize = 6;
pub const LEVEL: usize = 7;
pub const LONGRANGE: usize = 8;
pub const MARS: usize = 9;
pub const NIL: usize = 10;
pub const ORIGIN: usize = 11;
pub const PACKING: usize = 12;
pub const PARAM: usize = 13;
pub const POINT_IN_TIME: usize = 14;
pub const REFERENCE_TIME: usize = 15;
pub const REPRESENTATION: usize = 16;
pub const SATELLITE: usize = 17;
pub const SHAPE_OF_THE_EARTH: usize = 18;
pub const STATISTICS: usize = 19;
pub const TABLES: usize = 20;
pub const WAVE: usize = 21;

/// The cumulative global variant-id offset each concept starts at: concept
/// `i`'s variants occupy `[offset(i), offset(i) + CONCEPTS[i].variant_count)`.
pub static CONCEPT_OFFSETS: LazyLock<[usize; N_CONCEPTS]> = LazyLock::new(|| {
    let mut offsets = [0usize; N_CONCEPTS];
    let mut running = 0usize;
    for (i, descriptor) in CONCEPTS.iter().enumerate() {
        offsets[i] = running;
        running += descriptor.variant_count;
    }
    offsets
});

/// Total number of global variant ids across all concepts.
pub fn total_variant_count() -> usize {
    CONCEPTS.iter().map(|c| c.variant_count).sum()
}

/// Global variant id for `concept_idx`'s `local_variant_id`.
pub fn global_id(concept_idx: usize, local_variant_id: usize) -> usize {
    CONCEPT_OFFSETS[concept_idx] + local_variant_id
}

/// Inverse of [`global_id`]: which concept owns `global_variant_id`.
///
/// Linear scan over 22 concepts; the registry is small enough that a binary
/// search over `CONCEPT_OFFSETS` would only add complexity for no
/// measurable benefit.
pub fn concept_of(global_variant_id: usize) -> usize {
    let offsets = &*CONCEPT_OFFSETS;
    for i in (0..N_CONCEPTS).rev() {
        if global_variant_id >= offsets[i] {
            return i;
        }
    }
    0
}

/// Inverse of [`global_id`]: the local variant id within its owning concept.
pub fn local_variant_of(global_variant_id: usize) -> usize {
    global_variant_id - CONCEPT_OFFSETS[concept_of(global_variant_id)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registration_order_matches_names() {
        assert_eq!(CONCEPTS[ANALYSIS].name, "analysis");
        assert_eq!(CONCEPTS[WAVE].name, "wave");
        assert_eq!(CONCEPTS[LEVEL].name, "level");
        assert_eq!(CONCEPTS.len(), N_CONCEPTS);
    }

    #[test]
    fn offsets_are_strictly_increasing_cumulative_sums() {
        let offsets = &*CONCEPT_OFFSETS;
        assert_eq!(offsets[0], 0);
        for i in 1..N_CONCEPTS {
            assert_eq!(offsets[i], offsets[i - 1] + CONCEPTS[i - 1].variant_count);
        }
        assert_eq!(
            offsets[N_CONCEPTS - 1] + CONCEPTS[N_CONCEPTS - 1].variant_count,
            total_variant_count()
        );
    }

    #[test]
    fn global_id_combines_offset_and_local_id() {
        let level_offset = CONCEPT_OFFSETS[LEVEL];
        assert_eq!(global_id(LEVEL, 3), level_offset + 3);
    }
}
