//! Concept enums, parameter-id range matchers and the general variant registry.
//!
//! A "concept" is one axis of classification a MARS request is judged
//! against (`level`, `statistics`, `representation`, ...). Each concept
//! module defines its own variant enum and a matcher function that decides
//! which variant (if any) applies. [`registry`] assembles all 22 concepts
//! into the canonical, alphabetically-ordered list the rest of the pipeline
//! indexes into, and [`active_concepts`] runs every matcher for a given
//! request and produces the dense table of active variants that
//! `mars2grib-resolver` consumes.

pub mod active_concepts;
pub mod concepts;
pub mod matcher;
pub mod ranges;
pub mod registry;

pub use active_concepts::{ActiveConceptsData, NOT_APPLICABLE, resolve_active_concepts_or_throw};
pub use matcher::{MatchFn, MatchResult, MatcherError};
pub use registry::{CONCEPT_OFFSETS, CONCEPTS, ConceptDescriptor, N_CONCEPTS, global_id, total_variant_count};
