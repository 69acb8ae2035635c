//! Section 5 (Data Representation Section) recipes.
//!
//! Grounded on `section5Recipes.h`: template selection is purely a function
//! of `packing`.

use mars2grib_concepts::concepts::packing::PackingType;
use mars2grib_concepts::registry::PACKING;

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

/// `S5_R0`: simple packing.
fn s5_r0() -> Recipe {
    Recipe::new(0, vec![Select::of(PACKING, &[PackingType::Simple.local_id()])])
}

/// `S5_R42`: CCSDS compression.
fn s5_r42() -> Recipe {
    Recipe::new(42, vec![Select::of(PACKING, &[PackingType::Ccsds.local_id()])])
}

/// `S5_R51`: spectral complex packing.
fn s5_r51() -> Recipe {
    Recipe::new(51, vec![Select::of(PACKING, &[PackingType::SpectralComplex.local_id()])])
}

pub fn recipes() -> Recipes {
    Recipes::new(5, vec![s5_r0(), s5_r42(), s5_r51()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_packing_variant_has_its_own_template() {
        let payload = recipes().get_payload();
        assert_eq!(payload.len(), 3);
        let templates: std::collections::BTreeSet<usize> = payload.iter().map(|e| e.template_number).collect();
        assert_eq!(templates, [0, 42, 51].into_iter().collect());
    }
}
