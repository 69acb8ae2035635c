//! YAML test-case schema: the on-disk shape of a `mars2grib-check` suite,
//! and its conversion into the crate's dictionaries and options.
//!
//! Grounded on the original `check-mars2conf` tool (`src/tools/
//! check-mars2conf.cc`), which reads a YAML file of test cases, each with a
//! `mars` sub-configuration, runs the core against it and reports how many
//! cases failed. The original's per-section checks were left as `TODO`s
//! (only "did it throw?" was actually checked); this crate fills them in
//! with an `expect.keys` map of resolved GRIB handle keys plus an optional
//! `expect.error` substring for cases that are expected to fail.

use std::collections::BTreeMap;

use mars2grib_core::{AuxDict, Dictionary, MarsDict, Value, aux_dict, mars_dict};
use mars2grib::Options;
use serde::Deserialize;

/// A YAML scalar, read untagged so test authors write plain `param: 167`
/// rather than the internal `Value` enum's tagged representation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ScalarIn {
    Long(i64),
    Double(f64),
    Bool(bool),
    Str(String),
}

impl From<&ScalarIn> for Value {
    fn from(scalar: &ScalarIn) -> Self {
        match scalar {
            ScalarIn::Long(v) => Value::Long(*v),
            ScalarIn::Double(v) => Value::Double(*v),
            // Dictionary abstraction maps bool onto long (§4.1).
            ScalarIn::Bool(v) => Value::Long(*v as i64),
            ScalarIn::Str(v) => Value::String(v.clone()),
        }
    }
}

impl ScalarIn {
    /// Compare against a resolved [`Value`] read back from a handle.
    fn matches(&self, actual: &Value) -> bool {
        match (self, actual) {
            (ScalarIn::Long(expected), Value::Long(actual)) => expected == actual,
            (ScalarIn::Double(expected), Value::Double(actual)) => (expected - actual).abs() < 1e-9,
            (ScalarIn::Bool(expected), Value::Long(actual)) => (*expected as i64) == *actual,
            (ScalarIn::Str(expected), Value::String(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// The numeric payload a case encodes. Either an explicit list, or a
/// `count`/`fill` pair for cases (like the end-to-end scenarios in
/// SPEC_FULL.md §8) that only care about the header, not the data.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ValuesSpec {
    Explicit(Vec<f64>),
    Filled { count: usize, fill: f64 },
}

impl Default for ValuesSpec {
    fn default() -> Self {
        ValuesSpec::Filled { count: 1, fill: 0.0 }
    }
}

impl ValuesSpec {
    pub fn materialize(&self) -> Vec<f64> {
        match self {
            ValuesSpec::Explicit(values) => values.clone(),
            ValuesSpec::Filled { count, fill } => vec![*fill; *count],
        }
    }
}

/// A partial overlay onto [`Options::default`]; only fields the test case
/// mentions are overridden, everything else keeps the documented default.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsSpec {
    pub apply_checks: Option<bool>,
    pub enable_override: Option<bool>,
    pub enable_bits_per_value_compression: Option<bool>,
    pub sanitize_mars: Option<bool>,
    pub sanitize_misc: Option<bool>,
    pub fix_mars_grid: Option<bool>,
    pub use_grib_param_id: Option<bool>,
}

impl OptionsSpec {
    pub fn resolve(&self) -> Options {
        let mut options = Options::default();
        if let Some(v) = self.apply_checks {
            options.apply_checks = v;
        }
        if let Some(v) = self.enable_override {
            options.enable_override = v;
        }
        if let Some(v) = self.enable_bits_per_value_compression {
            options.enable_bits_per_value_compression = v;
        }
        if let Some(v) = self.sanitize_mars {
            options.sanitize_mars = v;
        }
        if let Some(v) = self.sanitize_misc {
            options.sanitize_misc = v;
        }
        if let Some(v) = self.fix_mars_grid {
            options.fix_mars_grid = v;
        }
        if let Some(v) = self.use_grib_param_id {
            options.use_grib_param_id = v;
        }
        options
    }
}

/// Expected outcome of running a case.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpectSpec {
    /// Resolved GRIB handle keys, e.g. `gridDefinitionTemplateNumber: 40`.
    pub keys: BTreeMap<String, ScalarIn>,
    /// When present, the case is expected to fail, and the error's
    /// formatted frame chain (see `mars2grib_core::print_frame_chain`)
    /// must contain this substring.
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub name: String,
    #[serde(default)]
    pub mars: BTreeMap<String, ScalarIn>,
    #[serde(default)]
    pub aux: BTreeMap<String, ScalarIn>,
    #[serde(default)]
    pub options: OptionsSpec,
    #[serde(default)]
    pub values: ValuesSpec,
    #[serde(default)]
    pub expect: ExpectSpec,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestSuite {
    pub cases: Vec<TestCase>,
}

impl TestCase {
    pub fn mars_dict(&self) -> MarsDict {
        let mut dict = mars_dict();
        for (key, value) in &self.mars {
            dict.set(key, Value::from(value));
        }
        dict
    }

    pub fn aux_dict(&self) -> AuxDict {
        let mut dict = aux_dict();
        for (key, value) in &self.aux {
            dict.set(key, Value::from(value));
        }
        dict
    }
}

/// A single `expect.keys` check, with its outcome against a resolved handle.
pub struct KeyCheck<'a> {
    pub key: &'a str,
    pub expected: &'a ScalarIn,
    pub actual: Option<Value>,
}

impl KeyCheck<'_> {
    pub fn passed(&self) -> bool {
        self.actual.as_ref().is_some_and(|actual| self.expected.matches(actual))
    }
}

impl ExpectSpec {
    pub fn check_keys<'a>(&'a self, handle: &impl Dictionary) -> Vec<KeyCheck<'a>> {
        self.keys
            .iter()
            .map(|(key, expected)| KeyCheck {
                key,
                expected,
                actual: handle.get(key).cloned(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUITE_YAML: &str = r#"
cases:
  - name: surface temperature instantaneous forecast
    mars:
      class: od
      type: fc
      stream: oper
      expver: "0001"
      date: 20250101
      time: 0
      step: 12
      param: 167
      levtype: sfc
      grid: "1/1"
    values:
      count: 4
      fill: 280.0
    expect:
      keys:
        gridDefinitionTemplateNumber: 0
        productDefinitionTemplateNumber: 0
        dataRepresentationTemplateNumber: 0
  - name: values-scale-factor is not implemented
    mars:
      param: 167
      levtype: sfc
      type: fc
      grid: "1/1"
    aux:
      values-scale-factor: 2
    expect:
      error: "not implemented"
"#;

    #[test]
    fn parses_a_full_suite() {
        let suite: TestSuite = serde_yaml::from_str(SUITE_YAML).unwrap();
        assert_eq!(suite.cases.len(), 2);
        assert_eq!(suite.cases[0].name, "surface temperature instantaneous forecast");
        assert_eq!(suite.cases[0].expect.keys.len(), 3);
        assert_eq!(suite.cases[1].expect.error.as_deref(), Some("not implemented"));
    }

    #[test]
    fn mars_dict_carries_every_declared_key() {
        let suite: TestSuite = serde_yaml::from_str(SUITE_YAML).unwrap();
        let dict = suite.cases[0].mars_dict();
        assert_eq!(dict.get_param_id("param").unwrap(), 167);
        assert_eq!(dict.get_str("levtype").unwrap(), "sfc");
    }

    #[test]
    fn values_spec_materializes_a_filled_array() {
        let spec = ValuesSpec::Filled { count: 3, fill: 1.5 };
        assert_eq!(spec.materialize(), vec![1.5, 1.5, 1.5]);
    }

    #[test]
    fn options_spec_overlays_only_mentioned_fields() {
        let spec = OptionsSpec { sanitize_mars: Some(true), ..Default::default() };
        let options = spec.resolve();
        assert!(options.sanitize_mars);
        assert!(options.fix_mars_grid, "untouched fields keep Options::default()");
    }

    #[test]
    fn scalar_in_matches_compatible_values_only() {
        assert!(ScalarIn::Long(5).matches(&Value::Long(5)));
        assert!(!ScalarIn::Long(5).matches(&Value::Long(6)));
        assert!(!ScalarIn::Long(5).matches(&Value::String("5".into())));
    }
}
