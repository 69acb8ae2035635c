//! The `shape-of-the-earth` concept: the Earth-shape model used by the grid.
//!
//! Used (without an explicit variant list, i.e. "any variant") alongside
//! `representation` in most of section 3's recipes in the retrieval pack.
//! The variant set and matcher are a representative construction: ECMWF
//! production always encodes a spherical Earth, but the concept still
//! distinguishes the two GRIB2-defined spherical radii in case a request
//! overrides it.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "shape-of-the-earth";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeOfTheEarthType {
    SphericalEarthCustomRadius,
    Wgs84,
}

pub const ALL: &[ShapeOfTheEarthType] =
    &[ShapeOfTheEarthType::SphericalEarthCustomRadius, ShapeOfTheEarthType::Wgs84];

impl ShapeOfTheEarthType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("ShapeOfTheEarthType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeOfTheEarthType::SphericalEarthCustomRadius => "sphericalEarthCustomRadius",
            ShapeOfTheEarthType::Wgs84 => "wgs84",
        }
    }
}

pub fn match_shape_of_the_earth(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("earthShape") {
        Ok("wgs84") => ShapeOfTheEarthType::Wgs84,
        _ => ShapeOfTheEarthType::SphericalEarthCustomRadius,
    };
    Ok(Some(resolved.local_id()))
}
