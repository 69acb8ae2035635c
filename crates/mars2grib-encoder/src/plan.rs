//! `EncodingPlan`: the `[NStages+1][NSections]` grid of callbacks built once
//! from a resolved `HeaderLayout` and then executed, in order, by
//! `SpecializedEncoder::encode`.

use std::sync::Arc;

use mars2grib_concepts::N_CONCEPTS;
use mars2grib_core::{AuxDict, MarsDict, MockHandle, OptionsDict};
use mars2grib_resolver::{HeaderLayout, N_SECTIONS};

use crate::callbacks;
use crate::error::EncoderError;

/// Stages after the section initializers: each global variant id's
/// contribution to a section is applied in one of four ordered passes.
pub const N_STAGES: usize = 4;

/// A stage-1..N_STAGES callback: reads the input dictionaries, writes into
/// the handle under construction. These never capture per-encode state —
/// they are looked up as plain function pointers, the same way the
/// reference indexes `phaseCallbacks[variantId][stage][section]`.
pub type PhaseFn = fn(&MarsDict, &AuxDict, &OptionsDict, &mut MockHandle) -> Result<(), EncoderError>;

/// A stage-0 section initializer. Unlike `PhaseFn` this does capture
/// per-encode state (the section's resolved template number), so it is
/// stored as a boxed closure rather than a bare function pointer.
type InitFn = Arc<dyn Fn(&mut MockHandle) -> Result<(), EncoderError> + Send + Sync>;

pub struct EncodingPlan {
    initializers: [InitFn; N_SECTIONS],
    phases: [[Vec<PhaseFn>; N_SECTIONS]; N_STAGES],
}

impl EncodingPlan {
    /// Build the plan for `layout`. Lists are capacity-bounded by
    /// `N_CONCEPTS`: a section can never carry more callbacks than there are
    /// concepts to contribute them, so overflow here is a registry bug.
    pub fn build(layout: &HeaderLayout) -> Result<Self, EncoderError> {
        let initializers: [InitFn; N_SECTIONS] = std::array::from_fn(|s| {
            let section = layout.section(s);
            let section_number = section.section_number;
            let template_number = section.template_number;
            Arc::new(move |handle: &mut MockHandle| callbacks::initialize_section(section_number, template_number, handle)) as InitFn
        });

        let phases: [[Vec<PhaseFn>; N_SECTIONS]; N_STAGES] = std::array::from_fn(|stage_idx| {
            std::array::from_fn(|s| {
                let section = layout.section(s);
                let mut list: Vec<PhaseFn> = Vec::with_capacity(N_CONCEPTS);
                for &variant_id in &section.variant_indices {
                    if let Some(f) = callbacks::phase_callback(variant_id, stage_idx + 1, s) {
                        list.push(f);
                    }
                }
                list
            })
        });

        Ok(Self { initializers, phases })
    }

    pub(crate) fn initializer(&self, section: usize) -> &InitFn {
        &self.initializers[section]
    }

    pub(crate) fn phase_callbacks(&self, stage: usize, section: usize) -> &[PhaseFn] {
        &self.phases[stage][section]
    }
}
