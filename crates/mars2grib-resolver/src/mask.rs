//! `CompressionMask`: strips concept variants irrelevant to a section before
//! a `TemplateSignatureKey` lookup.
//!
//! Grounded on the original backend's `CompressionMask.h`. A section's mask
//! is derived solely from the variant ids that actually appear somewhere in
//! that section's expanded recipe payload; every other global variant id
//! maps to [`INVALID`]. This is what lets e.g. `nil`'s single always-active
//! variant stay out of section 4's lookup key even though `nil` is active
//! on every request — section 4's recipes never mention `NilConcept`, so it
//! never earns a slot in the mask.
//!
//! Two compression modes mirror the original's `compressUnsortedKey` /
//! `compressKey`: the unsorted form preserves encoding order (used to build
//! `SectionLayout`'s ordered variant list), the sorted form is the lookup
//! key (order must not matter for "which template applies").

use crate::recipe::ResolvedTemplateData;
use crate::signature::TemplateSignatureKey;

/// Sentinel for a global variant id that never participates in a section.
pub const INVALID: usize = usize::MAX;

pub struct CompressionMask {
    /// `mask[globalVariantId]` → dense compressed index, or [`INVALID`].
    mask: Vec<usize>,
    compressed_size: usize,
}

impl CompressionMask {
    pub fn compressed_size(&self) -> usize {
        self.compressed_size
    }

    /// `v` compresses away (mapped to [`INVALID`]) both for variants the
    /// section's recipes never mention and for ids past the end of the
    /// mask entirely — the latter can only arise from a corrupt or
    /// out-of-range `ActiveConcepts` entry, and compressing it away yields
    /// a genuine lookup miss (`NoMatchingRecipe`) rather than an
    /// out-of-bounds panic.
    fn compresses_away(&self, v: usize) -> bool {
        v >= self.mask.len() || self.mask[v] == INVALID
    }

    /// Strip irrelevant variants; preserve the relative order of the rest.
    pub fn compress_unsorted_key(&self, key: &TemplateSignatureKey) -> TemplateSignatureKey {
        let data = key.data.iter().copied().filter(|&v| !self.compresses_away(v)).collect();
        TemplateSignatureKey { data }
    }

    /// Strip irrelevant variants and insertion-sort the rest — the
    /// canonical, order-independent lookup key.
    pub fn compress_key(&self, key: &TemplateSignatureKey) -> TemplateSignatureKey {
        let mut data: Vec<usize> = Vec::with_capacity(key.data.len());
        for &v in &key.data {
            if self.compresses_away(v) {
                continue;
            }
            let pos = data.partition_point(|&existing| existing < v);
            data.insert(pos, v);
        }
        TemplateSignatureKey { data }
    }
}

/// Build a section's compression mask from its expanded recipe payload.
///
/// # Panics
/// If `payload` is empty, or a variant index exceeds the registry's total
/// variant count — both indicate a malformed recipe table, caught at
/// startup rather than on the hot path.
pub fn make_compression_mask_or_throw(payload: &[ResolvedTemplateData]) -> CompressionMask {
    assert!(!payload.is_empty(), "CompressionMask: empty payload");

    let n_variants = mars2grib_concepts::total_variant_count();
    let mut counts = vec![0usize; n_variants];

    for entry in payload {
        for &v in &entry.variant_indices {
            assert!(v < n_variants, "CompressionMask: variant index out of range");
            counts[v] += 1;
        }
    }

    let mut mask = vec![INVALID; n_variants];
    let mut compressed_size = 0usize;
    for (v, count) in counts.into_iter().enumerate() {
        if count > 0 {
            mask[v] = compressed_size;
            compressed_size += 1;
        }
    }

    CompressionMask { mask, compressed_size }
}
