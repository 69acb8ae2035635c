//! Section 1 (Identification Section) recipes.
//!
//! Grounded on `section1Recipes.h`: a single template-0 recipe, the
//! Cartesian product of `origin × tables × referenceTime × dataType`.

use mars2grib_concepts::registry::{DATA_TYPE, ORIGIN, REFERENCE_TIME, TABLES};

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

/// `S1_R0`
pub fn recipes() -> Recipes {
    let s1_r0 = Recipe::new(
        0,
        vec![Select::any(ORIGIN), Select::any(TABLES), Select::any(REFERENCE_TIME), Select::any(DATA_TYPE)],
    );
    Recipes::new(1, vec![s1_r0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_concepts::registry::CONCEPTS;

    #[test]
    fn combination_count_is_the_product_of_the_four_radixes() {
        let payload = recipes().get_payload();
        let expected = CONCEPTS[ORIGIN].variant_count
            * CONCEPTS[TABLES].variant_count
            * CONCEPTS[REFERENCE_TIME].variant_count
            * CONCEPTS[DATA_TYPE].variant_count;
        assert_eq!(payload.len(), expected);
        assert!(payload.iter().all(|e| e.template_number == 0));
    }
}
