//! Declarative per-section recipe tables.
//!
//! Grounded file-for-file on the original backend's
//! `frontend/resolution/section-recipes/impl/section{0..5}Recipes.h`: each
//! submodule here reproduces one of those files' `Section{N}Recipes`
//! aggregate, recipe name for recipe name (`S2_R24`, `S4_R8`, ...) and
//! template number for template number. Concept-order within a recipe's
//! selector list is load-bearing — it is the order `SectionLayout`
//! preserves and `EncodingPlan` executes in.

pub mod section0;
pub mod section1;
pub mod section2;
pub mod section3;
pub mod section4;
pub mod section5;

use std::sync::LazyLock;

use crate::error::ResolutionError;
use crate::layout::N_SECTIONS;
use crate::selector::SectionTemplateSelector;

/// Build the six section selectors once, at first use.
///
/// Recipe-table misconfiguration (empty section, duplicate signature) is a
/// startup-time programming error, so this panics rather than threading a
/// `Result` through `LazyLock`'s initializer — matching the reference,
/// which constructs the equivalent tables as eagerly-initialized statics
/// and treats construction failure as unrecoverable.
pub static SELECTORS: LazyLock<[SectionTemplateSelector; N_SECTIONS]> = LazyLock::new(|| {
    [
        SectionTemplateSelector::make(&section0::recipes()).expect("section 0 recipe table"),
        SectionTemplateSelector::make(&section1::recipes()).expect("section 1 recipe table"),
        SectionTemplateSelector::make(&section2::recipes()).expect("section 2 recipe table"),
        SectionTemplateSelector::make(&section3::recipes()).expect("section 3 recipe table"),
        SectionTemplateSelector::make(&section4::recipes()).expect("section 4 recipe table"),
        SectionTemplateSelector::make(&section5::recipes()).expect("section 5 recipe table"),
    ]
});

/// Re-run construction eagerly and surface any failure as a `Result`,
/// for callers (tests, the orchestrator's startup check) that want to
/// detect a misconfigured recipe table without panicking.
pub fn validate_all() -> Result<(), ResolutionError> {
    SectionTemplateSelector::make(&section0::recipes())?;
    SectionTemplateSelector::make(&section1::recipes())?;
    SectionTemplateSelector::make(&section2::recipes())?;
    SectionTemplateSelector::make(&section3::recipes())?;
    SectionTemplateSelector::make(&section4::recipes())?;
    SectionTemplateSelector::make(&section5::recipes())?;
    Ok(())
}
