//! `Recipes`: a section's collection of declarative recipes, in declaration
//! order, plus the section number they belong to.
//!
//! Grounded on the original's `Recipes` aggregate (`Section{N}Recipes` in
//! `frontend/resolution/section-recipes/impl/section{N}Recipes.h`): a
//! section number plus an ordered list of `Recipe` pointers. Expansion
//! concatenates each recipe's own expansion, in declaration order.

use crate::recipe::{Recipe, ResolvedTemplateData};

pub struct Recipes {
    section_id: usize,
    recipes: Vec<Recipe>,
}

impl Recipes {
    pub fn new(section_id: usize, recipes: Vec<Recipe>) -> Self {
        Self { section_id, recipes }
    }

    pub fn section_id(&self) -> usize {
        self.section_id
    }

    pub fn get_payload(&self) -> Vec<ResolvedTemplateData> {
        self.recipes.iter().flat_map(|r| r.expand()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::Select;
    use mars2grib_concepts::registry::NIL;

    #[test]
    fn payload_concatenates_recipes_in_declaration_order() {
        let recipes = Recipes::new(
            0,
            vec![Recipe::new(0, vec![Select::of(NIL, &[0])]), Recipe::new(1, vec![Select::of(NIL, &[0])])],
        );
        let payload = recipes.get_payload();
        assert_eq!(payload.len(), 2);
        assert_eq!(payload[0].template_number, 0);
        assert_eq!(payload[1].template_number, 1);
    }
}
