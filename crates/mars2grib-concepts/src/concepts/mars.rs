//! The `mars` concept: the broad MARS domain/stream family a request belongs to.
//!
//! Not present in the retrieval pack's source tree (only its usage in
//! section-2 recipes is); the variant set here is a representative
//! construction over the `stream`/`domain` MARS keys, not a literal port of
//! an original enum.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "mars";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarsType {
    Atmospheric,
    Ocean,
    WaveModel,
}

pub const ALL: &[MarsType] = &[MarsType::Atmospheric, MarsType::Ocean, MarsType::WaveModel];

impl MarsType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("MarsType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            MarsType::Atmospheric => "atmospheric",
            MarsType::Ocean => "ocean",
            MarsType::WaveModel => "waveModel",
        }
    }
}

pub fn match_mars(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let resolved = match mars.get_str("stream") {
        Ok("wave") => MarsType::WaveModel,
        Ok("waef") | Ok("wasf") => MarsType::WaveModel,
        _ => match mars.get_str("domain") {
            Ok("o") => MarsType::Ocean,
            _ => MarsType::Atmospheric,
        },
    };
    Ok(Some(resolved.local_id()))
}
