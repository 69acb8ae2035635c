//! `Recipe`: the runtime realization of one `(templateNumber, selectors)`
//! declaration, expanded into its full Cartesian product of admissible
//! variant combinations.
//!
//! Grounded on the original backend's `Recipe.h`. The original binds
//! `Select<Concept, Vs...>` at compile time via variadic templates; this
//! port takes a `Vec<Select>` built at static-init time instead (see
//! `select.rs`), and reproduces the same mixed-radix decoding in
//! `Recipe::get_entry`: the rightmost selector varies fastest, and each
//! linear index `0..number_of_combinations()` decodes to exactly one
//! concrete assignment of one variant per selector, preserving selector
//! declaration order in the returned `variant_indices`.

use crate::select::Select;

/// One fully-resolved point in a recipe's combinatorial space: a template
/// number plus the ordered list of global variant ids that realize it.
///
/// Grounded on `ResolvedTemplateData.h`. The original is a fixed-capacity,
/// stack-allocated struct (`maxCapacity = NConcepts`) to stay allocation-free
/// on the hot path; this port uses a small `Vec` instead since recipe
/// expansion in this crate happens once at startup, not per encode.
#[derive(Debug, Clone)]
pub struct ResolvedTemplateData {
    pub template_number: usize,
    pub variant_indices: Vec<usize>,
}

/// A declarative `(templateNumber, ordered selectors)` pair, expanded on
/// demand into its Cartesian product of combinations.
pub struct Recipe {
    template_number: usize,
    /// One dimension per selector, each holding that selector's admissible
    /// global variant ids (its radix).
    dimensions: Vec<Vec<usize>>,
    n_combinations: usize,
}

impl Recipe {
    pub fn new(template_number: usize, selectors: Vec<Select>) -> Self {
        let dimensions: Vec<Vec<usize>> = selectors.into_iter().map(|s| s.ids).collect();
        let n_combinations = dimensions.iter().map(|d| d.len()).product::<usize>();
        Self { template_number, dimensions, n_combinations }
    }

    pub fn number_of_combinations(&self) -> usize {
        self.n_combinations
    }

    /// Decode linear index `i` into a concrete combination. Mixed-radix
    /// decoding, rightmost selector varies fastest — see module docs.
    pub fn get_entry(&self, i: usize) -> ResolvedTemplateData {
        assert!(i < self.n_combinations, "Recipe::get_entry index out of range");

        let mut variant_indices = vec![0usize; self.dimensions.len()];
        let mut remainder = i;

        for d in (0..self.dimensions.len()).rev() {
            let radix = self.dimensions[d].len();
            let idx = remainder % radix;
            remainder /= radix;
            variant_indices[d] = self.dimensions[d][idx];
        }

        ResolvedTemplateData { template_number: self.template_number, variant_indices }
    }

    pub fn expand(&self) -> Vec<ResolvedTemplateData> {
        (0..self.n_combinations).map(|i| self.get_entry(i)).collect()
    }
}
