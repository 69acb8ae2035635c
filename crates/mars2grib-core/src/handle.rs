//! An in-memory stand-in for a GRIB handle.
//!
//! The real codec library (eccodes) is out of scope here; `MockHandle` gives
//! the encoder something concrete to write keys into and clone between
//! pipeline stages, and gives tests something to assert against.

use indexmap::IndexMap;

use crate::dictionary::Dictionary;
use crate::value::Value;

/// A GRIB message under construction.
///
/// Values are keyed by GRIB key name (e.g. `"typeOfLevel"`, `"level"`,
/// `"bitmapPresent"`) rather than MARS keyword, matching how the backend's
/// `Mars2GribOpsHandle` is addressed once encoding has started.
#[derive(Debug, Clone, Default)]
pub struct MockHandle {
    keys: IndexMap<String, Value>,
}

impl MockHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fresh handle seeded from a named sample, standing in for
    /// the codec's `make_from_sample` (e.g. opening a `"GRIB2"` template
    /// message before any section has been populated).
    pub fn from_sample(name: &str) -> Self {
        let mut handle = Self::new();
        handle.set_string("_sample", name);
        handle.set_long("edition", 2);
        handle
    }

    pub fn set_long(&mut self, key: &str, value: i64) {
        self.keys.insert(key.to_owned(), Value::Long(value));
    }

    pub fn set_double(&mut self, key: &str, value: f64) {
        self.keys.insert(key.to_owned(), Value::Double(value));
    }

    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.keys.insert(key.to_owned(), Value::String(value.into()));
    }

    pub fn set_double_array(&mut self, key: &str, value: Vec<f64>) {
        self.keys.insert(key.to_owned(), Value::DoubleArray(value));
    }

    pub fn set_float_array(&mut self, key: &str, value: Vec<f32>) {
        self.keys.insert(key.to_owned(), Value::FloatArray(value));
    }

    /// Mark `key` as explicitly absent (the `Missing` sentinel), distinct
    /// from never having written it at all.
    pub fn set_missing(&mut self, key: &str) {
        self.keys.insert(key.to_owned(), Value::Missing);
    }

    /// Write a double array bypassing whatever consistency checks an
    /// ordinary `set` would run — the codec backend's own payload write,
    /// not a general-purpose key setter. See `value_injector.rs` for the
    /// one call site that needs this.
    pub fn force_set(&mut self, key: &str, value: Vec<f64>) {
        self.keys.insert(key.to_owned(), Value::DoubleArray(value));
    }

    pub fn long(&self, key: &str) -> Option<i64> {
        self.keys.get(key).and_then(Value::as_long)
    }

    pub fn string(&self, key: &str) -> Option<&str> {
        self.keys.get(key).and_then(Value::as_str)
    }
}

impl Dictionary for MockHandle {
    fn get(&self, key: &str) -> Option<&Value> {
        self.keys.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.keys.insert(key.to_owned(), value);
    }

    fn keys(&self) -> Vec<&str> {
        self.keys.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_long_then_read_back() {
        let mut h = MockHandle::new();
        h.set_long("edition", 2);
        assert_eq!(h.long("edition"), Some(2));
    }

    #[test]
    fn clone_is_independent() {
        let mut h = MockHandle::new();
        h.set_long("discipline", 0);
        let h2 = h.clone();
        h.set_long("discipline", 1);
        assert_eq!(h.long("discipline"), Some(1));
        assert_eq!(h2.long("discipline"), Some(0));
    }

    #[test]
    fn from_sample_seeds_edition_two() {
        let h = MockHandle::from_sample("GRIB2");
        assert_eq!(h.long("edition"), Some(2));
        assert_eq!(h.string("_sample"), Some("GRIB2"));
    }

    #[test]
    fn set_missing_marks_the_sentinel() {
        let mut h = MockHandle::new();
        h.set_missing("typeOfFirstFixedSurface");
        assert!(h.get("typeOfFirstFixedSurface").unwrap().is_missing());
    }

    #[test]
    fn force_set_writes_a_double_array() {
        let mut h = MockHandle::new();
        h.force_set("values", vec![1.0, 2.0, 3.0]);
        assert_eq!(h.get("values"), Some(&Value::DoubleArray(vec![1.0, 2.0, 3.0])));
    }
}
