//! Section 3 (Grid Definition Section) recipes.
//!
//! Grounded on `section3Recipes.h`: template selection is purely a function
//! of `representation`, with `shapeOfTheEarth` folded in as an always-any
//! selector for every representation except spherical harmonics (the
//! original's `S3_R50` omits `ShapeOfTheEarthConcept` entirely — a spectral
//! grid has no earth-shape parameter).

use mars2grib_concepts::concepts::representation::RepresentationType;
use mars2grib_concepts::registry::{REPRESENTATION, SHAPE_OF_THE_EARTH};

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

/// `S3_R0`: latitude/longitude grid.
fn s3_r0() -> Recipe {
    Recipe::new(
        0,
        vec![Select::any(SHAPE_OF_THE_EARTH), Select::of(REPRESENTATION, &[RepresentationType::Latlon.local_id()])],
    )
}

/// `S3_R40`: reduced or regular Gaussian grid.
fn s3_r40() -> Recipe {
    Recipe::new(
        40,
        vec![
            Select::any(SHAPE_OF_THE_EARTH),
            Select::of(
                REPRESENTATION,
                &[RepresentationType::ReducedGaussian.local_id(), RepresentationType::RegularGaussian.local_id()],
            ),
        ],
    )
}

/// `S3_R50`: spherical-harmonic (spectral) representation — no earth shape.
fn s3_r50() -> Recipe {
    Recipe::new(50, vec![Select::of(REPRESENTATION, &[RepresentationType::SphericalHarmonics.local_id()])])
}

/// `S3_R101`: general unstructured grid.
fn s3_r101() -> Recipe {
    Recipe::new(
        101,
        vec![
            Select::any(SHAPE_OF_THE_EARTH),
            Select::of(REPRESENTATION, &[RepresentationType::GeneralUnstructured.local_id()]),
        ],
    )
}

/// `S3_R150`: HEALPix grid.
fn s3_r150() -> Recipe {
    Recipe::new(
        150,
        vec![Select::any(SHAPE_OF_THE_EARTH), Select::of(REPRESENTATION, &[RepresentationType::Healpix.local_id()])],
    )
}

pub fn recipes() -> Recipes {
    Recipes::new(3, vec![s3_r0(), s3_r40(), s3_r50(), s3_r101(), s3_r150()])
}
