//! The `tables` concept: which GRIB2 master/local table version governs this message.
//!
//! Constructed from the `tablesVersion`/`localTablesVersion` MARS keys;
//! not present as source in the retrieval pack.

use mars2grib_core::Dictionary;

use crate::matcher::MatchResult;

pub const NAME: &str = "tables";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TablesType {
    Current,
    Legacy,
}

pub const ALL: &[TablesType] = &[TablesType::Current, TablesType::Legacy];

impl TablesType {
    pub fn local_id(self) -> usize {
        ALL.iter().position(|v| *v == self).expect("TablesType must be in ALL")
    }

    pub fn name(self) -> &'static str {
        match self {
            TablesType::Current => "current",
            TablesType::Legacy => "legacy",
        }
    }
}

const CURRENT_VERSION: i64 = 32;

pub fn match_tables(mars: &dyn Dictionary, _options: &dyn Dictionary) -> MatchResult {
    let version = mars.get_long("tablesVersion").unwrap_or(CURRENT_VERSION);
    let resolved = if version >= CURRENT_VERSION {
        TablesType::Current
    } else {
        TablesType::Legacy
    };
    Ok(Some(resolved.local_id()))
}
