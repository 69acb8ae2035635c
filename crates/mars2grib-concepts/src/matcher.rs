//! The matcher contract every concept implements.
//!
//! A matcher inspects the MARS and Options dictionaries and decides which
//! variant of its concept (if any) applies to this request. Error semantics
//! are deliberately asymmetric between concepts, following the original
//! backend: some concepts throw when they see a `levtype`/`param` they don't
//! recognize (treating that as a configuration bug), others silently fall
//! through to `Missing` for anything outside their narrow domain (treating
//! non-applicability as the normal case, e.g. `statistics`, `wave`,
//! `point-in-time`). Each matcher module documents which behavior it follows.

use mars2grib_core::Dictionary;
use thiserror::Error;

/// A matcher either resolves to a local variant id (dense, 0-based, within
/// its own concept), or to `None` meaning "this concept does not apply to
/// this request" (the original's `not_applicable`).
pub type MatchResult = Result<Option<usize>, MatcherError>;

/// A type-erased matcher callback, the Rust equivalent of the original's
/// `MatchingCallbacksRegistry` entries.
pub type MatchFn = fn(&dyn Dictionary, &dyn Dictionary) -> MatchResult;

#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("concept `{concept}`: unrecognized `{key}` value `{value}`")]
    UnrecognizedValue {
        concept: &'static str,
        key: &'static str,
        value: String,
    },

    #[error("concept `{concept}`: required key `{key}` is missing")]
    RequiredKeyMissing { concept: &'static str, key: &'static str },

    #[error("concept `{concept}`: {message}")]
    Inconsistent { concept: &'static str, message: String },

    #[error(transparent)]
    Dict(#[from] mars2grib_core::DictError),
}
