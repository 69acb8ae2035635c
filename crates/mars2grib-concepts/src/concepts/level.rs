//! The `level` concept: GRIB vertical level/layer interpretation.
//!
//! Grounded on the original backend's `levelEnum.h` (variant list and string
//! names, reproduced verbatim below) and `levelMatcher.h` (dispatch shape:
//! short-circuit to `Missing` for wave/satellite fields, then dispatch on
//! `levtype` into per-family range matchers). The per-family param-id ranges
//! here are representative rather than exhaustive — covering the common
//! production parameters for each level family rather than every id the
//! original table lists.
//!
//! Unlike most other concepts, `level` throws on an unrecognized `levtype`:
//! an unknown `levtype` value is treated as a configuration error, not as
//! "this concept doesn't apply".

use mars2grib_core::Dictionary;

use crate::matcher::{MatcherError, MatchResult};
use crate::ranges::{matches_any, Range};

pub const NAME: &str = "level";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelType {
    Surface,
    EntireAtmosphere,
    EntireLake,
    CloudBase,
    Tropopause,
    NominalTop,
    MostUnstableParcel,
    MixedLayerParcel,
    Isothermal,
    IsobaricInPa,
    IsobaricInHpa,
    LowCloudLayer,
    MediumCloudLayer,
    HighCloudLayer,
    MeanSea,
    HeightAboveSea,
    HeightAboveGround,
    Hybrid,
    Theta,
    PotentialVorticity,
    SnowLayer,
    SoilLayer,
    SeaIceLayer,
    DepthBelowSeaLayer,
    LakeBottom,
    MixingLayer,
    IceTopOnWater,
    IceLayerOnWater,
    AbstractSingleLevel,
    AbstractMultipleLevel,
    HeightAboveSeaAt10M,
    HeightAboveSeaAt2M,
    HeightAboveGroundAt10M,
    HeightAboveGroundAt2M,
    Default,
}

pub const ALL: &[LevelType] = &[
    LevelType::Surface,
    LevelType::EntireAtmosphere,
    LevelType::EntireLake,
    LevelType::CloudBase,
    LevelType::Tropopause,
    LevelType::NominalTop,
    LevelType::MostUnstableParcel,
    LevelType::MixedLayerParcel,
    LevelType::Isothermal,
    LevelType::IsobaricInPa,
    LevelType::IsobaricInHpa,
    LevelType::LowCloudLayer,
    LevelType::MediumCloudLayer,
    LevelType::HighCloudLayer,
    LevelType::MeanSea,
    LevelType::HeightAboveSea,
    LevelType::HeightAboveGround,
    LevelType::Hybrid,
    LevelType::Theta,
    LevelType::PotentialVorticity,
    LevelType::SnowLayer,
    LevelType::SoilLayer,
    LevelType::SeaIceLayer,
    LevelType::DepthBelowSeaLayer,
    LevelType::LakeBottom,
    LevelType::MixingLayer,
    LevelType::IceTopOnWater,
    LevelType::IceLayerOnWater,
    LevelType::AbstractSingleLevel,
    LevelType::AbstractMultipleLevel,
    LevelType::HeightAboveSeaAt10M,
    LevelType::HeightAboveSeaAt2M,
    LevelType::HeightAboveGroundAt10M,
    LevelType::HeightAboveGroundAt2M,
    LevelType::Default,
];

impl LevelType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("LevelType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            LevelType::Surface => "surface",
            LevelType::EntireAtmosphere => "entireAtmosphere",
            LevelType::EntireLake => "entireLake",
            LevelType::CloudBase => "cloudBase",
            LevelType::Tropopause => "tropopause",
            LevelType::NominalTop => "nominalTop",
            LevelType::MostUnstableParcel => "mostUnstableParcel",
            LevelType::MixedLayerParcel => "mixedLayerParcel",
            LevelType::Isothermal => "isothermal",
            LevelType::IsobaricInPa => "isobaricInPa",
            LevelType::IsobaricInHpa => "isobaricInhPa",
            LevelType::LowCloudLayer => "lowCloudLayer",
            LevelType::MediumCloudLayer => "mediumCloudLayer",
            LevelType::HighCloudLayer => "highCloudLayer",
            LevelType::MeanSea => "meanSea",
            LevelType::HeightAboveSea => "heightAboveSea",
            LevelType::HeightAboveGround => "heightAboveGround",
            LevelType::Hybrid => "hybrid",
            LevelType::Theta => "theta",
            LevelType::PotentialVorticity => "potentialVorticity",
            LevelType::SnowLayer => "snowLayer",
            LevelType::SoilLayer => "soilLayer",
            LevelType::SeaIceLayer => "seaIceLayer",
            LevelType::DepthBelowSeaLayer => "depthBelowSeaLayer",
            LevelType::LakeBottom => "lakeBottom",
            LevelType::MixingLayer => "mixingLayer",
            LevelType::IceTopOnWater => "iceTopOnWater",
            LevelType::IceLayerOnWater => "iceLayerOnWater",
            LevelType::AbstractSingleLevel => "abstractSingleLevel",
            LevelType::AbstractMultipleLevel => "abstractMultipleLevel",
            LevelType::HeightAboveSeaAt10M => "heightAboveSeaAt10m",
            LevelType::HeightAboveSeaAt2M => "heightAboveSeaAt2m",
            LevelType::HeightAboveGroundAt10M => "heightAboveGroundAt10m",
            LevelType::HeightAboveGroundAt2M => "heightAboveGroundAt2m",
            LevelType::Default => "default",
        }
    }
}

const SFC_TWO_METRE: &[Range] = &[Range::single(167), Range::single(168)]; // 2t, 2d
const SFC_TEN_METRE: &[Range] = &[Range::single(165), Range::single(166)]; // 10u, 10v
const SFC_GENERAL: &[Range] = &[Range::new(129, 134), Range::new(151, 151), Range::new(172, 172)];
const SFC_MEAN_SEA: &[Range] = &[Range::single(151)]; // msl
const SFC_CLOUD_BASE: &[Range] = &[Range::single(228023)];

fn match_sfc(param: i64) -> Option<LevelType> {
    if matches_any(SFC_TWO_METRE, param) {
        return Some(LevelType::HeightAboveGroundAt2M);
    }
    if matches_any(SFC_TEN_METRE, param) {
        return Some(LevelType::HeightAboveGroundAt10M);
    }
    if matches_any(SFC_MEAN_SEA, param) {
        return Some(LevelType::MeanSea);
    }
    if matches_any(SFC_CLOUD_BASE, param) {
        return Some(LevelType::CloudBase);
    }
    if matches_any(SFC_GENERAL, param) {
        return Some(LevelType::Surface);
    }
    None
}

fn match_pl(param: i64, units_pa: bool) -> Option<LevelType> {
    if matches_any(&[Range::new(129, 136), Range::new(157, 157), Range::new(60, 60)], param) {
        return Some(if units_pa {
            LevelType::IsobaricInPa
        } else {
            LevelType::IsobaricInHpa
        });
    }
    None
}

fn match_ml(param: i64) -> Option<LevelType> {
    if matches_any(&[Range::new(129, 136), Range::new(152, 152)], param) {
        return Some(LevelType::Hybrid);
    }
    None
}

fn match_pt(param: i64) -> Option<LevelType> {
    if matches_any(&[Range::new(3, 3), Range::new(138, 138)], param) {
        return Some(LevelType::Theta);
    }
    None
}

fn match_pv(param: i64) -> Option<LevelType> {
    if matches_any(&[Range::new(129, 136)], param) {
        return Some(LevelType::PotentialVorticity);
    }
    None
}

fn match_sol(param: i64) -> Option<LevelType> {
    if matches_any(&[Range::new(39, 43), Range::new(139, 139), Range::new(170, 170)], param) {
        return Some(LevelType::SoilLayer);
    }
    if matches_any(&[Range::single(141)], param) {
        return Some(LevelType::SnowLayer);
    }
    None
}

fn match_al(param: i64) -> Option<LevelType> {
    if matches_any(&[Range::new(129, 136)], param) {
        return Some(LevelType::AbstractSingleLevel);
    }
    None
}

const HL_HEIGHT: &[Range] = &[Range::single(10), Range::single(54), Range::new(130, 132), Range::single(157)];

fn match_hl(param: i64) -> Option<LevelType> {
    if matches_any(HL_HEIGHT, param) {
        return Some(LevelType::HeightAboveGround);
    }
    None
}

/// Returns `Missing` immediately for wave spectra and satellite products:
/// those concepts classify their own vertical placement and `level` never
/// applies to them. Grounded on `levelMatcher.h`'s own gate — `frequency`
/// and `direction` both present for wave spectra, `channel`/`ident`/
/// `instrument` all present for satellite — not on any `levtype` value
/// (`wv`/`sat` are not part of the `levtype` taxonomy).
fn is_wave_or_satellite(mars: &dyn Dictionary) -> bool {
    (mars.has("frequency") && mars.has("direction")) || crate::concepts::satellite::is_satellite_product(mars)
}

pub fn match_level(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    if is_wave_or_satellite(mars) {
        return Ok(None);
    }

    let Ok(levtype) = mars.get_str("levtype") else {
        return Ok(None);
    };
    let param = match mars.get_param_id("param") {
        Ok(p) => p,
        Err(_) => return Ok(None),
    };

    let levelist = mars.get_long("levelist").unwrap_or(0);
    let resolved = match levtype {
        "sfc" => match_sfc(param),
        "pl" => match_pl(param, levelist < 100),
        "pt" => match_pt(param),
        "pv" => match_pv(param),
        "ml" => match_ml(param),
        "sol" => match_sol(param),
        "al" => match_al(param),
        "hl" => match_hl(param),
        other => {
            return Err(MatcherError::UnrecognizedValue {
                concept: NAME,
                key: "levtype",
                value: other.to_owned(),
            });
        }
    };

    Ok(resolved.map(LevelType::local_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn surface_temperature_resolves_to_2m() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(167));
        let opts = options_dict();
        let id = match_level(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, LevelType::HeightAboveGroundAt2M.local_id());
    }

    #[test]
    fn isobaric_level_resolves_to_hpa() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("pl"));
        mars.set("param", Value::Long(131));
        mars.set("levelist", Value::Long(500));
        let opts = options_dict();
        let id = match_level(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, LevelType::IsobaricInHpa.local_id());
    }

    #[test]
    fn isobaric_level_below_100_resolves_to_pa() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("pl"));
        mars.set("param", Value::Long(131));
        mars.set("levelist", Value::Long(50));
        let opts = options_dict();
        let id = match_level(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, LevelType::IsobaricInPa.local_id());
    }

    #[test]
    fn height_level_resolves_to_height_above_ground() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("hl"));
        mars.set("param", Value::Long(130));
        let opts = options_dict();
        let id = match_level(&mars, &opts).unwrap().unwrap();
        assert_eq!(id, LevelType::HeightAboveGround.local_id());
    }

    #[test]
    fn wave_spectra_keys_are_missing_not_error() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(140251));
        mars.set("frequency", Value::Long(25));
        mars.set("direction", Value::Long(24));
        let opts = options_dict();
        assert!(match_level(&mars, &opts).unwrap().is_none());
    }

    #[test]
    fn satellite_keys_are_missing_not_error() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("sfc"));
        mars.set("param", Value::Long(1));
        mars.set("channel", Value::Long(5));
        mars.set("ident", Value::Long(3));
        mars.set("instrument", Value::Long(207));
        let opts = options_dict();
        assert!(match_level(&mars, &opts).unwrap().is_none());
    }

    #[test]
    fn unknown_levtype_throws() {
        let mut mars = mars_dict();
        mars.set("levtype", Value::from("bogus"));
        mars.set("param", Value::Long(1));
        let opts = options_dict();
        assert!(matches!(
            match_level(&mars, &opts),
            Err(MatcherError::UnrecognizedValue { .. })
        ));
    }

    #[test]
    fn all_variants_have_distinct_local_ids() {
        let mut ids: Vec<_> = ALL.iter().map(|v| v.local_id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ALL.len());
    }
}
