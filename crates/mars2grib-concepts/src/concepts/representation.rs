//! The `representation` concept: the horizontal grid family a field is stored on.
//!
//! Grounded on the original backend's `representationMatcher.h`: if a
//! `truncation` key is present the field is spectral (`SphericalHarmonics`);
//! otherwise the matcher inspects the `grid` descriptor. The original
//! dispatches on the grid type returned by `eckit::geo::GridFactory`, an
//! external C++ grid-description library with no Rust equivalent available
//! here. This crate substitutes a grid-string-prefix heuristic covering the
//! same practical grid families ECMWF production actually emits — this is a
//! deliberate, documented simplification, not a literal port of that
//! dispatch. An unrecognized grid string falls back to
//! `GeneralUnstructured` rather than throwing: `representation` is one of
//! the concepts that falls through with no error path (SPEC_FULL.md §4.3).

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "representation";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepresentationType {
    Latlon,
    ReducedGaussian,
    RegularGaussian,
    SphericalHarmonics,
    GeneralUnstructured,
    Healpix,
}

pub const ALL: &[RepresentationType] = &[
    RepresentationType::Latlon,
    RepresentationType::ReducedGaussian,
    RepresentationType::RegularGaussian,
    RepresentationType::SphericalHarmonics,
    RepresentationType::GeneralUnstructured,
    RepresentationType::Healpix,
];

impl RepresentationType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("RepresentationType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            RepresentationType::Latlon => "latlon",
            RepresentationType::ReducedGaussian => "reducedGaussian",
            RepresentationType::RegularGaussian => "regularGaussian",
            RepresentationType::SphericalHarmonics => "sphericalHarmonics",
            RepresentationType::GeneralUnstructured => "generalUnstructured",
            RepresentationType::Healpix => "healpix",
        }
    }
}

fn classify_grid(grid: &str) -> Option<RepresentationType> {
    let grid = grid.trim();
    if grid.is_empty() {
        return None;
    }
    let first = grid.as_bytes()[0].to_ascii_uppercase();
    match first {
        b'O' | b'N' => Some(RepresentationType::ReducedGaussian),
        b'F' => Some(RepresentationType::RegularGaussian),
        b'H' => Some(RepresentationType::Healpix),
        _ if grid.contains('/') => Some(RepresentationType::Latlon),
        _ => None,
    }
}

pub fn match_representation(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    if mars.has("truncation") {
        return Ok(Some(RepresentationType::SphericalHarmonics.local_id()));
    }

    let Ok(grid) = mars.get_str("grid") else {
        return Ok(None);
    };

    let resolved = classify_grid(grid).unwrap_or(RepresentationType::GeneralUnstructured);
    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn truncation_present_means_spherical_harmonics() {
        let mut mars = mars_dict();
        mars.set("truncation", Value::Long(639));
        let opts = options_dict();
        let id = match_representation(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, RepresentationType::SphericalHarmonics.local_id());
    }

    #[test]
    fn reduced_octahedral_grid_resolves_to_reduced_gaussian() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("O1280"));
        let opts = options_dict();
        let id = match_representation(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, RepresentationType::ReducedGaussian.local_id());
    }

    #[test]
    fn latlon_grid_string_resolves_to_latlon() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("0.25/0.25"));
        let opts = options_dict();
        let id = match_representation(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, RepresentationType::Latlon.local_id());
    }

    #[test]
    fn unrecognized_grid_falls_back_to_general_unstructured() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("???"));
        let opts = options_dict();
        let id = match_representation(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, RepresentationType::GeneralUnstructured.local_id());
    }
}
