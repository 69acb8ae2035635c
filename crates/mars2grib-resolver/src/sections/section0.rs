//! Section 0 (Indicator Section) recipes.
//!
//! Grounded on `section0Recipes.h`: a single sentinel recipe, template 0,
//! selecting on `NilConcept` alone (which is always active). One recipe,
//! one combination — this section always resolves via direct compare.

use mars2grib_concepts::registry::NIL;

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

/// `S0_R0`
pub fn recipes() -> Recipes {
    let s0_r0 = Recipe::new(0, vec![Select::any(NIL)]);
    Recipes::new(0, vec![s0_r0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_has_exactly_one_combination() {
        let payload = recipes().get_payload();
        assert_eq!(payload.len(), 1);
        assert_eq!(payload[0].template_number, 0);
    }
}
