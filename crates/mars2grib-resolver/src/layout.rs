//! `SectionLayout` / `HeaderLayout`: the resolver's public output.
//!
//! Grounded on the original's `SectionLayoutData.h` (one resolved section)
//! and the header assembler described in the `mars2grib.h`/orchestrator
//! sources that call `resolve_SectionsLayout_or_throw` over all six
//! sections in ascending order, re-validating `sectionNumber == section`
//! defensively even though each `SectionTemplateSelector` is itself bound
//! to a fixed section at construction.

use mars2grib_concepts::ActiveConceptsData;

use crate::error::ResolutionError;
use crate::selector::SectionTemplateSelector;

pub const N_SECTIONS: usize = 6;

/// One resolved GRIB section: the selected template number plus the
/// ordered global variant ids (recipe-selector order, *not* the
/// lookup-sorted order) that must be applied when encoding it.
#[derive(Debug, Clone)]
pub struct SectionLayout {
    pub section_number: usize,
    pub template_number: usize,
    pub variant_indices: Vec<usize>,
}

/// The six resolved section layouts, in section-number order.
#[derive(Debug, Clone)]
pub struct HeaderLayout {
    pub sections: [SectionLayout; N_SECTIONS],
}

impl HeaderLayout {
    pub fn section(&self, n: usize) -> &SectionLayout {
        &self.sections[n]
    }
}

/// Resolve all six sections against `active` and aggregate into a single
/// `HeaderLayout`. Failure at any section is fatal and wrapped with which
/// section failed.
pub fn resolve_header_layout_or_throw(
    selectors: &[SectionTemplateSelector; N_SECTIONS],
    active: &ActiveConceptsData,
) -> Result<HeaderLayout, ResolutionError> {
    let mut sections: Vec<SectionLayout> = Vec::with_capacity(N_SECTIONS);

    for (n, selector) in selectors.iter().enumerate() {
        let layout = selector.select_or_throw(active)?;
        if layout.section_number != n {
            return Err(ResolutionError::SectionMismatch { declared: n, actual: layout.section_number });
        }
        sections.push(layout);
    }

    let sections: [SectionLayout; N_SECTIONS] =
        sections.try_into().expect("resolved exactly N_SECTIONS section layouts");

    Ok(HeaderLayout { sections })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::Recipe;
    use crate::recipes::Recipes;
    use crate::select::Select;
    use mars2grib_concepts::registry::NIL;

    fn all_nil_active() -> ActiveConceptsData {
        let mut variant_indices = [mars2grib_concepts::NOT_APPLICABLE; mars2grib_concepts::N_CONCEPTS];
        variant_indices[NIL] = mars2grib_concepts::global_id(NIL, 0) as i64;
        ActiveConceptsData { variant_indices, active_indices: vec![NIL] }
    }

    #[test]
    fn six_trivial_sections_assemble_into_a_header_layout() {
        let selectors: [SectionTemplateSelector; N_SECTIONS] = std::array::from_fn(|n| {
            let recipes = Recipes::new(n, vec![Recipe::new(n, vec![Select::any(NIL)])]);
            SectionTemplateSelector::make(&recipes).unwrap()
        });

        let active = all_nil_active();
        let header = resolve_header_layout_or_throw(&selectors, &active).unwrap();
        for n in 0..N_SECTIONS {
            assert_eq!(header.section(n).section_number, n);
            assert_eq!(header.section(n).template_number, n);
        }
    }
}
