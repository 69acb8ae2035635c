//! Resolver-stage error types.

use mars2grib_concepts::MatcherError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableError {
    #[error("recipe entry index {index} out of range (0..{n_combinations})")]
    OutOfRange { index: usize, n_combinations: usize },
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("section {section} declares no recipes")]
    EmptySection { section: usize },

    #[error("section {declared} recipe reports section number {actual}, registry mismatch")]
    SectionNumberMismatch { declared: usize, actual: usize },
}

#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error(transparent)]
    Matcher(#[from] MatcherError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("section {section}: no recipe matches the active concept combination {combination:?}")]
    NoMatchingTemplate { section: usize, combination: Vec<(usize, usize)> },

    #[error("section {section}: two recipe entries produce the same signature key, recipe table is misconfigured")]
    DuplicateSignature { section: usize },

    #[error("section {declared}: resolved sectionNumber {actual} does not match its position in the header layout")]
    SectionMismatch { declared: usize, actual: usize },
}
