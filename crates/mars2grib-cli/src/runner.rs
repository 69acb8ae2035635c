//! Runs a loaded [`TestSuite`] against the core and reports pass/fail,
//! mirroring `check-mars2conf`'s count/failed summary but with the
//! per-section checks the original left as `TODO`s actually implemented.

use mars2grib::{Encoder, Values};
use tracing::{info, warn};

use crate::schema::{KeyCheck, TestCase, TestSuite};

pub struct CaseOutcome {
    pub name: String,
    pub failure: Option<String>,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.passed()).count()
    }
}

pub fn run_suite(suite: &TestSuite) -> SuiteReport {
    let outcomes = suite.cases.iter().map(run_case).collect();
    SuiteReport { outcomes }
}

fn run_case(case: &TestCase) -> CaseOutcome {
    info!(case = %case.name, "running test case");

    let mars = case.mars_dict();
    let aux = case.aux_dict();
    let options = case.options.resolve();
    let values = case.values.materialize();

    let encoder = match Encoder::new(options) {
        Ok(encoder) => encoder,
        Err(e) => return failed(case, format!("could not construct encoder: {e}")),
    };

    let result = encoder.encode(&mars, &aux, Values::F64(&values));

    match (result, &case.expect.error) {
        (Err(e), Some(expected_substring)) => {
            let rendered = render_error_chain(&e);
            if rendered.contains(expected_substring.as_str()) {
                CaseOutcome { name: case.name.clone(), failure: None }
            } else {
                failed(
                    case,
                    format!("expected error containing {expected_substring:?}, got: {rendered}"),
                )
            }
        }
        (Err(e), None) => failed(case, format!("unexpected error: {e}")),
        (Ok(_), Some(expected_substring)) => {
            failed(case, format!("expected an error containing {expected_substring:?}, encoding succeeded"))
        }
        (Ok(handle), None) => {
            let checks = case.expect.check_keys(&handle);
            let failures: Vec<String> = checks
                .iter()
                .filter(|c| !c.passed())
                .map(describe_key_failure)
                .collect();
            if failures.is_empty() {
                CaseOutcome { name: case.name.clone(), failure: None }
            } else {
                failed(case, failures.join("; "))
            }
        }
    }
}

/// Render an error plus its full `source()` chain, one message per line, so
/// `expect.error` substrings can match text raised deep inside the pipeline
/// (e.g. a matcher's message) and not just the top-level `EncoderError`'s.
fn render_error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut out = format!("{err}");
    let mut cause = err.source();
    while let Some(source) = cause {
        out.push_str(" -> ");
        out.push_str(&source.to_string());
        cause = source.source();
    }
    out
}

fn describe_key_failure(check: &KeyCheck<'_>) -> String {
    match &check.actual {
        Some(actual) => format!("key {:?}: expected {:?}, got {:?}", check.key, check.expected, actual),
        None => format!("key {:?}: expected {:?}, key was not set", check.key, check.expected),
    }
}

fn failed(case: &TestCase, reason: String) -> CaseOutcome {
    warn!(case = %case.name, reason = %reason, "test case failed");
    CaseOutcome { name: case.name.clone(), failure: Some(reason) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TestSuite;

    fn suite(yaml: &str) -> TestSuite {
        serde_yaml::from_str(yaml).unwrap()
    }

    #[test]
    fn a_matching_case_passes() {
        let suite = suite(
            r#"
cases:
  - name: surface temperature
    mars:
      param: 167
      levtype: sfc
      type: fc
      grid: "1/1"
    values: { count: 4, fill: 280.0 }
    expect:
      keys:
        productDefinitionTemplateNumber: 0
"#,
        );
        let report = run_suite(&suite);
        assert_eq!(report.failed_count(), 0);
        assert!(report.outcomes[0].passed());
    }

    #[test]
    fn a_wrong_expected_key_value_fails() {
        let suite = suite(
            r#"
cases:
  - name: surface temperature
    mars:
      param: 167
      levtype: sfc
      type: fc
      grid: "1/1"
    values: { count: 4, fill: 280.0 }
    expect:
      keys:
        productDefinitionTemplateNumber: 99
"#,
        );
        let report = run_suite(&suite);
        assert_eq!(report.failed_count(), 1);
        assert!(report.outcomes[0].failure.as_ref().unwrap().contains("productDefinitionTemplateNumber"));
    }

    #[test]
    fn an_expected_error_that_does_not_happen_fails() {
        let suite = suite(
            r#"
cases:
  - name: should have failed but did not
    mars:
      param: 167
      levtype: sfc
      type: fc
      grid: "1/1"
    values: { count: 4, fill: 0.0 }
    expect:
      error: "NotImplemented"
"#,
        );
        let report = run_suite(&suite);
        assert_eq!(report.failed_count(), 1);
    }

    #[test]
    fn an_expected_error_substring_match_passes() {
        let suite = suite(
            r#"
cases:
  - name: unknown levtype is a hard matcher error
    mars:
      param: 167
      levtype: bogus
      type: fc
    expect:
      error: "unrecognized `levtype`"
"#,
        );
        let report = run_suite(&suite);
        assert_eq!(report.failed_count(), 0);
    }
}
