//! The `packing` concept: the GRIB2 data-representation/packing scheme.
//!
//! Variant names are grounded verbatim in the retrieval pack's section-5
//! recipe selectors (`Simple`, `Ccsds`, `SpectralComplex`); the dispatch on
//! the `packing`/`representation` MARS keys is a representative
//! construction.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "packing";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackingType {
    Simple,
    Ccsds,
    SpectralComplex,
}

pub const ALL: &[PackingType] = &[PackingType::Simple, PackingType::Ccsds, PackingType::SpectralComplex];

impl PackingType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("PackingType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            PackingType::Simple => "simple",
            PackingType::Ccsds => "ccsds",
            PackingType::SpectralComplex => "spectralComplex",
        }
    }
}

pub fn match_packing(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    if mars.has("truncation") {
        return Ok(Some(PackingType::SpectralComplex.local_id()));
    }

    let resolved = match mars.get_str("packing") {
        Ok("ccsds") => PackingType::Ccsds,
        _ => PackingType::Simple,
    };

    Ok(Some(resolved.local_id()))
}
