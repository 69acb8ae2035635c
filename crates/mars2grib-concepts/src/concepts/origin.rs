//! The `origin` concept: the originating/generating centre of the data.
//!
//! Constructed from the `expver`/`class` MARS keys; not present as source in
//! the retrieval pack.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "origin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginType {
    Ecmwf,
    Operational,
    Experimental,
}

pub const ALL: &[OriginType] = &[OriginType::Ecmwf, OriginType::Operational, OriginType::Experimental];

impl OriginType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("OriginType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            OriginType::Ecmwf => "ecmwf",
            OriginType::Operational => "operational",
            OriginType::Experimental => "experimental",
        }
    }
}

pub fn match_origin(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("class") {
        Ok("od") => OriginType::Operational,
        Ok("rd") | Ok("te") => OriginType::Experimental,
        _ => OriginType::Ecmwf,
    };
    Ok(Some(resolved.local_id()))
}
