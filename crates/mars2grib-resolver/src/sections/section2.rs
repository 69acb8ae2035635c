//! Section 2 (Local Use Section) recipes.
//!
//! Grounded on `section2Recipes.h`: one recipe per local-definition
//! template, each binding `mars` (always any-variant) plus, where the
//! template is specific to one family, a narrowing selector on a second
//! concept. Two virtual (encoder-specific, not real GRIB2 local-definition
//! numbers) templates cover DestinE products; `S2_R1004`
//! (`DestineType::OnDemandExtremesDT`) is commented out in the original —
//! reproduced here the same way, left unreachable, since nothing maps to
//! it yet.

use mars2grib_concepts::concepts::destine::DestineType;
use mars2grib_concepts::registry::{ANALYSIS, DESTINE, LONGRANGE, MARS, SATELLITE};

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

/// `S2_R1`: standard local definition.
fn s2_r1() -> Recipe {
    Recipe::new(1, vec![Select::any(MARS)])
}

/// `S2_R15`: long-range products.
fn s2_r15() -> Recipe {
    Recipe::new(15, vec![Select::any(MARS), Select::any(LONGRANGE)])
}

/// `S2_R24`: satellite-related products.
fn s2_r24() -> Recipe {
    Recipe::new(24, vec![Select::any(MARS), Select::any(SATELLITE)])
}

/// `S2_R36`: analysis-related products.
fn s2_r36() -> Recipe {
    Recipe::new(36, vec![Select::any(MARS), Select::any(ANALYSIS)])
}

/// `S2_R1001`: DestinE Climate DT products (virtual template number).
fn s2_r1001() -> Recipe {
    Recipe::new(1001, vec![Select::any(MARS), Select::of(DESTINE, &[DestineType::ClimateDT.local_id()])])
}

/// `S2_R1002`: DestinE Extremes DT products (virtual template number).
fn s2_r1002() -> Recipe {
    Recipe::new(1002, vec![Select::any(MARS), Select::of(DESTINE, &[DestineType::ExtremesDT.local_id()])])
}

// `S2_R1004` (DestinE On-demand Extremes DT, virtual template 1004) is
// commented out in the original and has no active recipe here either —
// `DestineType::OnDemandExtremesDT` is a registered variant with no
// section-2 recipe to realize it, matching upstream.

pub fn recipes() -> Recipes {
    Recipes::new(2, vec![s2_r1(), s2_r15(), s2_r24(), s2_r36(), s2_r1001(), s2_r1002()])
}
