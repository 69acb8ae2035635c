//! Section-recipe resolution: turns a request's active concepts into a
//! fully resolved `HeaderLayout` describing which GRIB2 template number
//! applies to each of the six sections, and in what order their
//! contributing concepts must be encoded.
//!
//! This crate owns the declarative recipe tables ([`sections`]), the
//! machinery that expands and compiles them into per-section lookup
//! structures ([`recipe`], [`mask`], [`signature`], [`selector`]), and the
//! public resolution entry point ([`layout::resolve_header_layout_or_throw`]
//! plus the convenience [`resolve`] wrapper below).

pub mod error;
pub mod layout;
pub mod mask;
pub mod recipe;
pub mod recipes;
pub mod sections;
pub mod select;
pub mod selector;
pub mod signature;

pub use error::{RegistryError, ResolutionError, TableError};
pub use layout::{resolve_header_layout_or_throw, HeaderLayout, SectionLayout, N_SECTIONS};
pub use select::Select;
pub use selector::SectionTemplateSelector;

use mars2grib_concepts::ActiveConceptsData;

/// Resolve a complete `HeaderLayout` for `active` using the crate's static
/// section recipe tables. The single entry point most callers need.
pub fn resolve(active: &ActiveConceptsData) -> Result<HeaderLayout, ResolutionError> {
    resolve_header_layout_or_throw(&sections::SELECTORS, active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn end_to_end_surface_analysis_resolves_all_six_sections() {
        let mut mars = mars_dict();
        mars.set("class", Value::from("od"));
        mars.set("type", Value::from("an"));
        mars.set("stream", Value::from("oper"));
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        mars.set("grid", Value::from("1/1"));
        mars.set("packing", Value::from("simple"));
        let opts = options_dict();

        let active = mars2grib_concepts::resolve_active_concepts_or_throw(&mars, &opts).unwrap();
        let header = resolve(&active).unwrap();

        assert_eq!(header.sections.len(), N_SECTIONS);
        assert_eq!(header.section(0).template_number, 0);
        assert_eq!(header.section(5).template_number, 0); // simple packing
    }
}
