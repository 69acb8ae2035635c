//! MARS/aux normalization: lower-casing and legacy-alias rewriting, run
//! ahead of concept matching when `sanitizeMars`/`sanitizeMisc` are enabled.
//!
//! Grounded in the distilled subset of the original backend's external
//! YAML-driven language definition: rather than load an external file, this
//! crate carries a small in-crate alias table covering the legacy spellings
//! this pack's sample requests actually use. Both lower-casing and alias
//! rewriting are idempotent, so re-sanitizing an already-sanitized
//! dictionary is a no-op.

use mars2grib_core::{mars_dict, Dictionary, MarsDict, Value};

/// `(key, legacy value, canonical value)` triples. Matching is exact on the
/// already-lower-cased value, so legacy spellings that only differ in case
/// are handled by the lower-casing pass and never need an entry here.
pub const LANGUAGE_DEFINITION: &[(&str, &str, &str)] = &[
    ("levtype", "p", "pl"),
    ("levtype", "s", "sfc"),
    ("levtype", "ml", "ml"),
    ("type", "fo", "fc"),
    ("stream", "oper", "oper"),
    ("packing", "grid simple", "simple"),
    ("packing", "grid ccsds", "ccsds"),
];

fn lowercase_value(value: Value) -> Value {
    match value {
        Value::String(s) => Value::String(s.to_lowercase()),
        other => other,
    }
}

fn apply_alias(key: &str, value: Value) -> Value {
    let Value::String(s) = &value else {
        return value;
    };
    for &(alias_key, legacy, canonical) in LANGUAGE_DEFINITION {
        if alias_key == key && s == legacy {
            return Value::String(canonical.to_owned());
        }
    }
    value
}

/// Lower-case every key and string value, then rewrite known legacy
/// aliases. Returns a new dictionary; the input is left untouched.
pub fn sanitize(dict: &MarsDict) -> MarsDict {
    let mut out = mars_dict();
    for key in dict.keys() {
        let Some(value) = dict.get(key).cloned() else {
            continue;
        };
        let lower_key = key.to_lowercase();
        let value = lowercase_value(value);
        let value = apply_alias(&lower_key, value);
        out.set(&lower_key, value);
    }
    out
}

/// Rewrite a legacy `"L<di-millidegrees>X<dj-millidegrees>"` grid
/// specifier (e.g. `"L0500X0500"` for 0.5/0.5 degrees) into standard
/// `"dx/dy"` increment form. Grids already in `"dx/dy"` form, or any other
/// representation (Gaussian, spectral, unstructured), pass through
/// unchanged.
pub fn fix_mars_grid(dict: &MarsDict) -> MarsDict {
    let mut out = dict.clone();
    if let Ok(grid) = dict.get_str("grid") {
        if let Some(rewritten) = rewrite_legacy_grid(grid) {
            out.set("grid", Value::String(rewritten));
        }
    }
    out
}

fn rewrite_legacy_grid(grid: &str) -> Option<String> {
    let rest = grid.strip_prefix('L')?;
    let (di_str, dj_str) = rest.split_once('X')?;
    let di_millideg: f64 = di_str.parse().ok()?;
    let dj_millideg: f64 = dj_str.parse().ok()?;
    Some(format!("{}/{}", di_millideg / 1000.0, dj_millideg / 1000.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::mars_dict;

    #[test]
    fn lower_cases_keys_and_string_values() {
        let mut mars = mars_dict();
        mars.set("LevType", Value::from("PL"));
        let out = sanitize(&mars);
        assert_eq!(out.get_str("levtype"), Ok("pl"));
    }

    #[test]
    fn legacy_p_alias_rewrites_to_pl() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("p"));
        let out = sanitize(&mars);
        assert_eq!(out.get_str("levtype"), Ok("pl"));
    }

    #[test]
    fn sanitizing_twice_is_a_no_op() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("PL"));
        let once = sanitize(&mars);
        let twice = sanitize(&once);
        assert_eq!(once.get_str("levtype"), twice.get_str("levtype"));
    }

    #[test]
    fn legacy_grid_spec_rewrites_to_increment_form() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("L0500X0250"));
        let out = fix_mars_grid(&mars);
        assert_eq!(out.get_str("grid"), Ok("0.5/0.25"));
    }

    #[test]
    fn modern_grid_spec_passes_through() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("N320"));
        let out = fix_mars_grid(&mars);
        assert_eq!(out.get_str("grid"), Ok("N320"));
    }
}
