//! The value injector: writes the payload (`"values"`) into a handle
//! already populated by [`crate::specialized_encoder::SpecializedEncoder`].
//!
//! Grounded on the original backend's value-injection step described
//! alongside `SpecializedEncoder`: bitmap/missing-value bookkeeping comes
//! from `aux`, and a non-unit `values-scale-factor` is an explicit
//! not-yet-implemented feature rather than silently ignored.

use mars2grib_core::{frame_here, AuxDict, Dictionary, MockHandle};

use crate::error::EncoderError;

/// A borrowed payload of either precision; the caller decides which it has,
/// this module never converts `f64` down to `f32`.
#[derive(Debug, Clone, Copy)]
pub enum Values<'a> {
    F64(&'a [f64]),
    F32(&'a [f32]),
}

impl Values<'_> {
    pub fn len(&self) -> usize {
        match self {
            Values::F64(v) => v.len(),
            Values::F32(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Write `values` into `handle`, honoring `aux`'s `bitmapPresent`/
/// `missingValue`/`values-scale-factor` keys.
///
/// `f64` values are moved into the handle directly; `f32` values are
/// widened into a freshly allocated `Vec<f64>` first. Neither path is truly
/// zero-copy — `MockHandle::force_set` owns a `Vec<f64>`, so the `f64`
/// case still copies the slice into an owned vector once. This is the
/// honest floor given the handle's storage shape, not the literal "no copy
/// at all" the name might suggest.
pub fn inject_values(aux: &AuxDict, handle: &mut MockHandle, values: Values<'_>) -> Result<(), EncoderError> {
    let frame = || frame_here!().with_concept("values-injection");

    let bitmap_present = aux.get_long("bitmapPresent").map(|v| v != 0).unwrap_or(false);
    handle.set_long("bitmapPresent", bitmap_present as i64);
    if bitmap_present {
        let missing_value = aux_missing_value(aux);
        handle.set_double("missingValue", missing_value);
    }

    let scale_factor = aux.get_long("values-scale-factor").unwrap_or(1);
    if scale_factor != 1 {
        return Err(EncoderError::not_implemented("values-scale-factor != 1.0", frame()));
    }

    // The backend's own consistency checks run against a handle that
    // hasn't yet had bitmap/missing-value/packing-type keys reconciled
    // with the payload it's about to receive, so the raw "values" write
    // goes through `force_set` rather than ordinary `set` (see DESIGN.md's
    // force_set policy).
    match values {
        Values::F64(v) => handle.force_set("values", v.to_vec()),
        Values::F32(v) => {
            let widened: Vec<f64> = v.iter().map(|&x| x as f64).collect();
            handle.force_set("values", widened);
        }
    }

    Ok(())
}

fn aux_missing_value(aux: &AuxDict) -> f64 {
    match aux.get("missingValue").and_then(|v| v.as_double()) {
        Some(m) => m,
        None => f64::INFINITY,
    }
}
