//! Section 4 (Product Definition Section) recipes.
//!
//! Grounded on `section4Recipes.h`, reproduced recipe-for-recipe (template
//! numbers and selector lists, including selector order). This is the
//! largest and most combinatorial section: instantaneous vs. statistically
//! processed fields, each optionally crossed with an ensemble member, a
//! derived (mean/spread/probability) product, or one of four composition
//! families (chem, aerosol, aerosol-optical, chemical-source); plus the
//! satellite, wave and reforecast families, each with their own narrower
//! template set.

use mars2grib_concepts::concepts::composition::CompositionType;
use mars2grib_concepts::concepts::ensemble::EnsembleType;
use mars2grib_concepts::concepts::reference_time::ReferenceTimeType;
use mars2grib_concepts::concepts::wave::WaveType;
use mars2grib_concepts::registry::{
    COMPOSITION, ENSEMBLE, GENERATING_PROCESS, LEVEL, PARAM, POINT_IN_TIME, REFERENCE_TIME, SATELLITE, STATISTICS,
    WAVE, DERIVED,
};

use crate::recipe::Recipe;
use crate::recipes::Recipes;
use crate::select::Select;

fn individual(concept: usize, variant_local_id: usize) -> Select {
    Select::of(concept, &[variant_local_id])
}

fn ensemble_individual() -> Select {
    individual(ENSEMBLE, EnsembleType::Individual.local_id())
}

fn composition(ty: CompositionType) -> Select {
    individual(COMPOSITION, ty.local_id())
}

/// `S4_R0`: plain instantaneous field.
fn s4_r0() -> Recipe {
    Recipe::new(0, vec![Select::any(GENERATING_PROCESS), Select::any(POINT_IN_TIME), Select::any(LEVEL), Select::any(PARAM)])
}

/// `S4_R1`: instantaneous, individual ensemble member.
fn s4_r1() -> Recipe {
    Recipe::new(
        1,
        vec![Select::any(GENERATING_PROCESS), Select::any(POINT_IN_TIME), Select::any(LEVEL), Select::any(PARAM), ensemble_individual()],
    )
}

/// `S4_R2`: instantaneous, derived (mean/spread/probability) product.
fn s4_r2() -> Recipe {
    Recipe::new(
        2,
        vec![Select::any(GENERATING_PROCESS), Select::any(POINT_IN_TIME), Select::any(LEVEL), Select::any(PARAM), Select::any(DERIVED)],
    )
}

/// `S4_R8`: statistically processed field.
fn s4_r8() -> Recipe {
    Recipe::new(8, vec![Select::any(GENERATING_PROCESS), Select::any(STATISTICS), Select::any(LEVEL), Select::any(PARAM)])
}

/// `S4_R11`: statistically processed, individual ensemble member.
fn s4_r11() -> Recipe {
    Recipe::new(
        11,
        vec![Select::any(GENERATING_PROCESS), Select::any(STATISTICS), Select::any(LEVEL), Select::any(PARAM), ensemble_individual()],
    )
}

/// `S4_R12`: statistically processed, derived product.
fn s4_r12() -> Recipe {
    Recipe::new(
        12,
        vec![Select::any(GENERATING_PROCESS), Select::any(STATISTICS), Select::any(LEVEL), Select::any(PARAM), Select::any(DERIVED)],
    )
}

/// `S4_R32`: satellite, instantaneous.
fn s4_r32() -> Recipe {
    Recipe::new(
        32,
        vec![Select::any(GENERATING_PROCESS), Select::any(POINT_IN_TIME), Select::any(SATELLITE), Select::any(PARAM)],
    )
}

/// `S4_R33`: satellite, instantaneous, individual ensemble member.
fn s4_r33() -> Recipe {
    Recipe::new(
        33,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(SATELLITE),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R40`: chemistry, instantaneous.
fn s4_r40() -> Recipe {
    Recipe::new(
        40,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::Chem),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R41`: chemistry, instantaneous, individual ensemble member.
fn s4_r41() -> Recipe {
    Recipe::new(
        41,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::Chem),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R42`: chemistry, statistically processed.
fn s4_r42() -> Recipe {
    Recipe::new(
        42,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::Chem),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R43`: chemistry, statistically processed, individual ensemble member.
fn s4_r43() -> Recipe {
    Recipe::new(
        43,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::Chem),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R50`: aerosol, instantaneous.
fn s4_r50() -> Recipe {
    Recipe::new(
        50,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::Aerosol),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R45`: aerosol, instantaneous, individual ensemble member.
fn s4_r45() -> Recipe {
    Recipe::new(
        45,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::Aerosol),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R46`: aerosol, statistically processed.
fn s4_r46() -> Recipe {
    Recipe::new(
        46,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::Aerosol),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R85`: aerosol, statistically processed, individual ensemble member.
fn s4_r85() -> Recipe {
    Recipe::new(
        85,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::Aerosol),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R48`: aerosol optical, instantaneous.
fn s4_r48() -> Recipe {
    Recipe::new(
        48,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::AerosolOptical),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R49`: aerosol optical, statistically processed, individual ensemble member.
fn s4_r49() -> Recipe {
    Recipe::new(
        49,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::AerosolOptical),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R60`: reforecast, instantaneous, individual ensemble member.
fn s4_r60() -> Recipe {
    Recipe::new(
        60,
        vec![
            Select::any(GENERATING_PROCESS),
            individual(REFERENCE_TIME, ReferenceTimeType::Reforecast.local_id()),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R61`: reforecast, statistically processed, individual ensemble member.
fn s4_r61() -> Recipe {
    Recipe::new(
        61,
        vec![
            Select::any(GENERATING_PROCESS),
            individual(REFERENCE_TIME, ReferenceTimeType::Reforecast.local_id()),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R76`: chemical source, instantaneous.
fn s4_r76() -> Recipe {
    Recipe::new(
        76,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::ChemicalSource),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R77`: chemical source, instantaneous, individual ensemble member.
fn s4_r77() -> Recipe {
    Recipe::new(
        77,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(LEVEL),
            composition(CompositionType::ChemicalSource),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R78`: chemical source, statistically processed.
fn s4_r78() -> Recipe {
    Recipe::new(
        78,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::ChemicalSource),
            Select::any(PARAM),
        ],
    )
}

/// `S4_R79`: chemical source, statistically processed, individual ensemble member.
fn s4_r79() -> Recipe {
    Recipe::new(
        79,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(STATISTICS),
            Select::any(LEVEL),
            composition(CompositionType::ChemicalSource),
            Select::any(PARAM),
            ensemble_individual(),
        ],
    )
}

/// `S4_R99`: wave spectra.
fn s4_r99() -> Recipe {
    Recipe::new(
        99,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(WAVE, WaveType::Spectra.local_id()),
        ],
    )
}

/// `S4_R100`: wave spectra, individual ensemble member.
fn s4_r100() -> Recipe {
    Recipe::new(
        100,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(WAVE, WaveType::Spectra.local_id()),
            ensemble_individual(),
        ],
    )
}

/// `S4_R103`: wave period.
fn s4_r103() -> Recipe {
    Recipe::new(
        103,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(WAVE, WaveType::Period.local_id()),
        ],
    )
}

/// `S4_R104`: wave period, individual ensemble member.
fn s4_r104() -> Recipe {
    Recipe::new(
        104,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(WAVE, WaveType::Period.local_id()),
            ensemble_individual(),
        ],
    )
}

/// `S4_R142`: perturbed-parameters ensemble.
fn s4_r142() -> Recipe {
    Recipe::new(
        142,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(ENSEMBLE, EnsembleType::PerturbedParameters.local_id()),
        ],
    )
}

/// `S4_R143`: random-patterns ensemble.
fn s4_r143() -> Recipe {
    Recipe::new(
        143,
        vec![
            Select::any(GENERATING_PROCESS),
            Select::any(POINT_IN_TIME),
            Select::any(PARAM),
            individual(ENSEMBLE, EnsembleType::RandomPatterns.local_id()),
        ],
    )
}

pub fn recipes() -> Recipes {
    Recipes::new(
        4,
        vec![
            s4_r0(), s4_r1(), s4_r2(),
            s4_r8(), s4_r11(), s4_r12(),
            s4_r32(), s4_r33(),
            s4_r40(), s4_r41(), s4_r42(), s4_r43(),
            s4_r50(), s4_r45(), s4_r46(), s4_r85(),
            s4_r48(), s4_r49(),
            s4_r60(), s4_r61(),
            s4_r76(), s4_r77(), s4_r78(), s4_r79(),
            s4_r99(), s4_r100(),
            s4_r103(), s4_r104(),
            s4_r142(), s4_r143(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_declared_template_number_appears_in_the_payload() {
        let payload = recipes().get_payload();
        let templates: std::collections::BTreeSet<usize> = payload.iter().map(|e| e.template_number).collect();
        let expected: std::collections::BTreeSet<usize> = [
            0, 1, 2, 8, 11, 12, 32, 33, 40, 41, 42, 43, 50, 45, 46, 85, 48, 49, 60, 61, 76, 77, 78, 79, 99, 100, 103,
            104, 142, 143,
        ]
        .into_iter()
        .collect();
        assert_eq!(templates, expected);
    }

    #[test]
    fn wave_spectra_recipe_does_not_select_on_level() {
        // Wave products classify their own vertical placement; `level` is
        // deliberately absent from S4_R99/S4_R100/S4_R103/S4_R104.
        let recipe = s4_r99();
        let payload = recipe.expand();
        assert_eq!(payload[0].variant_indices.len(), 3);
    }
}
