//! Section 3 (Grid Definition Section) callbacks.
//!
//! Grounded on `section3Recipes.h` via the resolver's `sections::section3`:
//! template selection is purely a function of `representation`, with
//! `shape-of-the-earth` folded in for every grid family except spherical
//! harmonics (a spectral grid has no earth-shape parameter to encode).

use mars2grib_concepts::concepts::representation::{self, RepresentationType};
use mars2grib_concepts::concepts::shape_of_the_earth::{self, ShapeOfTheEarthType};
use mars2grib_concepts::registry::{REPRESENTATION, SHAPE_OF_THE_EARTH};
use mars2grib_core::{frame_here, AuxDict, Dictionary, MarsDict, MockHandle, OptionsDict};

use crate::error::EncoderError;
use crate::plan::PhaseFn;

pub fn initialize(template_number: usize, handle: &mut MockHandle) -> Result<(), EncoderError> {
    handle.set_long("gridDefinitionTemplateNumber", template_number as i64);
    Ok(())
}

pub fn phase(concept: usize, stage: usize) -> Option<PhaseFn> {
    if stage != 1 {
        return None;
    }
    match concept {
        REPRESENTATION => Some(set_representation),
        SHAPE_OF_THE_EARTH => Some(set_shape_of_the_earth),
        _ => None,
    }
}

fn set_representation(mars: &MarsDict, _aux: &AuxDict, options: &OptionsDict, handle: &mut MockHandle) -> Result<(), EncoderError> {
    let local = representation::match_representation(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(representation::NAME), e))?;
    let ty = local.and_then(|l| representation::ALL.get(l).copied());

    match ty {
        Some(RepresentationType::Latlon) => {
            let (di, dj) = parse_increments(mars.get_str("grid").unwrap_or("1/1"));
            handle.set_double("iDirectionIncrementInDegrees", di);
            handle.set_double("jDirectionIncrementInDegrees", dj);
            handle.set_long("Ni", (360.0 / di).round() as i64);
            handle.set_long("Nj", (180.0 / dj).round() as i64 + 1);
        }
        Some(RepresentationType::ReducedGaussian) | Some(RepresentationType::RegularGaussian) => {
            let n = parse_gaussian_number(mars.get_str("grid").unwrap_or("N320"));
            handle.set_long("N", n);
        }
        Some(RepresentationType::SphericalHarmonics) => {
            if let Ok(truncation) = mars.get_long("truncation") {
                handle.set_long("pentagonalResolutionParameterJ", truncation);
                handle.set_long("pentagonalResolutionParameterK", truncation);
                handle.set_long("pentagonalResolutionParameterM", truncation);
            }
        }
        Some(RepresentationType::GeneralUnstructured) => {
            if let Ok(n) = mars.get_long("numberOfPoints") {
                handle.set_long("numberOfDataPoints", n);
            }
        }
        Some(RepresentationType::Healpix) => {
            let n = parse_gaussian_number(mars.get_str("grid").unwrap_or("H1024"));
            handle.set_long("Nside", n);
        }
        None => {}
    }
    Ok(())
}

fn set_shape_of_the_earth(
    mars: &MarsDict,
    _aux: &AuxDict,
    options: &OptionsDict,
    handle: &mut MockHandle,
) -> Result<(), EncoderError> {
    let local = shape_of_the_earth::match_shape_of_the_earth(mars, options)
        .map_err(|e| EncoderError::stage(frame_here!().with_concept(shape_of_the_earth::NAME), e))?;
    let ty = local.and_then(|l| shape_of_the_earth::ALL.get(l).copied()).unwrap_or(ShapeOfTheEarthType::SphericalEarthCustomRadius);
    match ty {
        ShapeOfTheEarthType::Wgs84 => {
            handle.set_long("shapeOfTheEarth", 5);
        }
        ShapeOfTheEarthType::SphericalEarthCustomRadius => {
            handle.set_long("shapeOfTheEarth", 1);
            handle.set_long("scaleFactorOfRadiusOfSphericalEarth", 0);
            handle.set_long("scaledValueOfRadiusOfSphericalEarth", 6_371_229);
        }
    }
    Ok(())
}

/// `"dx/dy"` style MARS grid increments, falling back to 1/1 degrees.
fn parse_increments(grid: &str) -> (f64, f64) {
    let mut parts = grid.splitn(2, '/');
    let di = parts.next().and_then(|s| s.parse().ok()).unwrap_or(1.0);
    let dj = parts.next().and_then(|s| s.parse().ok()).unwrap_or(di);
    (di, dj)
}

/// The numeric resolution out of an `"N320"`/`"O1280"`/`"H1024"`-style grid string.
fn parse_gaussian_number(grid: &str) -> i64 {
    grid.trim_start_matches(|c: char| c.is_alphabetic()).parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn latlon_increments_parse_from_grid_string() {
        assert_eq!(parse_increments("0.5/0.25"), (0.5, 0.25));
        assert_eq!(parse_increments("1/1"), (1.0, 1.0));
    }

    #[test]
    fn gaussian_number_parses_from_prefix() {
        assert_eq!(parse_gaussian_number("N320"), 320);
        assert_eq!(parse_gaussian_number("O1280"), 1280);
    }

    #[test]
    fn reduced_gaussian_grid_writes_n() {
        let mut mars = mars_dict();
        mars.set("grid", Value::from("N320"));
        let opts = options_dict();
        let aux = mars2grib_core::aux_dict();
        let mut handle = MockHandle::new();
        set_representation(&mars, &aux, &opts, &mut handle).unwrap();
        assert_eq!(handle.long("N"), Some(320));
    }
}
