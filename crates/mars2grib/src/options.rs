//! Encoding options: the public switches that tune sanitization, packing
//! defaults and override behavior without touching MARS/aux content.

use mars2grib_core::{options_dict, OptionsDict, Value};

/// Encoder-wide configuration. Field names and defaults are grounded
/// verbatim on the original backend's `mars2grib::Options` struct; this is
/// a plain value type rather than a dictionary so callers get compile-time
/// field checking instead of stringly-typed keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Enable validation of resolved sections/values before encoding.
    pub apply_checks: bool,
    /// Allow values present in `aux` to override MARS-derived keys.
    pub enable_override: bool,
    /// Let the packing callback pick `bitsPerValue` from `mars`'s `accuracy`
    /// key instead of always using the default.
    pub enable_bits_per_value_compression: bool,
    /// Normalize MARS keys/values (case, known aliases) before matching.
    pub sanitize_mars: bool,
    /// Same normalization, applied to the aux dictionary.
    pub sanitize_misc: bool,
    /// Rewrite legacy `LxxxxXnnn`-style grid specifiers into `"dx/dy"` form.
    pub fix_mars_grid: bool,
    /// Process-wide parameter-table normalization switch. See DESIGN.md for
    /// the resolved interaction with wind-field (u/v) expansion.
    pub use_grib_param_id: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            apply_checks: true,
            enable_override: false,
            enable_bits_per_value_compression: false,
            sanitize_mars: false,
            sanitize_misc: false,
            fix_mars_grid: true,
            use_grib_param_id: false,
        }
    }
}

impl Options {
    /// Project onto the flat [`OptionsDict`] the lower crates read keys
    /// from. Keeping `Options` a typed struct at this crate's public
    /// boundary while still handing the encoder crates the dictionary they
    /// were written against.
    pub(crate) fn to_dict(self) -> OptionsDict {
        let mut dict = options_dict();
        dict.set("applyChecks", Value::Long(self.apply_checks as i64));
        dict.set("enableOverride", Value::Long(self.enable_override as i64));
        dict.set("enableBitsPerValueCompression", Value::Long(self.enable_bits_per_value_compression as i64));
        dict.set("sanitizeMars", Value::Long(self.sanitize_mars as i64));
        dict.set("sanitizeMisc", Value::Long(self.sanitize_misc as i64));
        dict.set("fixMarsGrid", Value::Long(self.fix_mars_grid as i64));
        dict.set("useGRIBParamID", Value::Long(self.use_grib_param_id as i64));
        dict
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mars2grib_core::Dictionary;

    #[test]
    fn defaults_match_the_documented_table() {
        let options = Options::default();
        assert!(options.apply_checks);
        assert!(!options.enable_override);
        assert!(!options.enable_bits_per_value_compression);
        assert!(!options.sanitize_mars);
        assert!(!options.sanitize_misc);
        assert!(options.fix_mars_grid);
        assert!(!options.use_grib_param_id);
    }

    #[test]
    fn to_dict_round_trips_every_field() {
        let options = Options {
            enable_bits_per_value_compression: true,
            ..Options::default()
        };
        let dict = options.to_dict();
        assert_eq!(dict.get_long("enableBitsPerValueCompression").unwrap(), 1);
        assert_eq!(dict.get_long("fixMarsGrid").unwrap(), 1);
    }
}
