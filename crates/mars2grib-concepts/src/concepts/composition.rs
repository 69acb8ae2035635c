//! The `composition` concept: atmospheric-composition product family.
//!
//! Variant names are grounded verbatim in the retrieval pack's section-4
//! recipe selectors (`Chem`, `Aerosol`, `AerosolOptical`, `ChemicalSource`);
//! the matcher dispatching on `param`'s table prefix is a representative
//! construction.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "composition";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionType {
    Chem,
    Aerosol,
    AerosolOptical,
    ChemicalSource,
}

pub const ALL: &[CompositionType] = &[
    CompositionType::Chem,
    CompositionType::Aerosol,
    CompositionType::AerosolOptical,
    CompositionType::ChemicalSource,
];

impl CompositionType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("CompositionType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            CompositionType::Chem => "chem",
            CompositionType::Aerosol => "aerosol",
            CompositionType::AerosolOptical => "aerosolOptical",
            CompositionType::ChemicalSource => "chemicalSource",
        }
    }
}

pub fn match_composition(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let Ok(param) = mars.get_str("param") else {
        return Ok(None);
    };
    let table = param.split('.').nth(1).unwrap_or("");

    let resolved = match table {
        "210" => CompositionType::Chem,
        "215" => CompositionType::Aerosol,
        "216" => CompositionType::AerosolOptical,
        "218" => CompositionType::ChemicalSource,
        _ => return Ok(None),
    };

    Ok(Some(resolved.local_id()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::{mars_dict, options_dict, Value};

    #[test]
    fn table_210_is_chem() {
        let mut mars = mars_dict();
        mars.set("param", Value::from("1.210"));
        let opts = options_dict();
        assert_eq!(match_composition(&mars, &opts).unwrap(), Some(CompositionType::Chem.local_id()));
    }

    #[test]
    fn non_chemical_param_is_missing() {
        let mut mars = mars_dict();
        mars.set("param", Value::from("167.128"));
        let opts = options_dict();
        assert!(match_composition(&mars, &opts).unwrap().is_none());
    }
}
