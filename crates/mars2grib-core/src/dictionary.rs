//! The `Dictionary` abstraction unifying MARS, Aux, Options and GRIB-handle access.

use indexmap::IndexMap;

use crate::error::DictError;
use crate::value::Value;

/// A flat, ordered key-value store.
///
/// `MarsDict`, `AuxDict`, `OptionsDict` and the backend's GRIB handle all
/// implement this trait so that matchers, recipes and the encoder can stay
/// generic over where a key actually lives.
pub trait Dictionary {
    fn get(&self, key: &str) -> Option<&Value>;
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
    fn set(&mut self, key: &str, value: Value);
    fn keys(&self) -> Vec<&str>;

    fn get_long(&self, key: &str) -> Result<i64, DictError> {
        self.get(key)
            .and_then(Value::as_long)
            .ok_or_else(|| DictError::MissingKey { key: key.to_owned() })
    }

    fn get_param_id(&self, key: &str) -> Result<i64, DictError> {
        self.get(key)
            .and_then(Value::as_param_id)
            .ok_or_else(|| DictError::MissingKey { key: key.to_owned() })
    }

    fn get_str(&self, key: &str) -> Result<&str, DictError> {
        self.get(key)
            .and_then(Value::as_str)
            .ok_or_else(|| DictError::MissingKey { key: key.to_owned() })
    }

    /// Render the whole dictionary as a JSON object, for diagnostics and frame snapshots.
    fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for key in self.keys() {
            if let Some(v) = self.get(key) {
                if let Ok(j) = serde_json::to_value(v) {
                    map.insert(key.to_owned(), j);
                }
            }
        }
        serde_json::Value::Object(map)
    }
}

impl<T: Dictionary + ?Sized> Dictionary for &T {
    fn get(&self, key: &str) -> Option<&Value> {
        (**self).get(key)
    }
    fn set(&mut self, _key: &str, _value: Value) {
        panic!("cannot mutate a dictionary through a shared reference");
    }
    fn keys(&self) -> Vec<&str> {
        (**self).keys()
    }
    fn to_json(&self) -> serde_json::Value {
        (**self).to_json()
    }
}

/// A plain `IndexMap`-backed dictionary, generic over a name used only for diagnostics.
#[derive(Debug, Clone, Default)]
pub struct MapDict {
    name: &'static str,
    entries: IndexMap<String, Value>,
}

impl MapDict {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: IndexMap::new(),
        }
    }

    pub fn with_entries(name: &'static str, entries: impl IntoIterator<Item = (String, Value)>) -> Self {
        Self {
            name,
            entries: entries.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn clone_dict(&self) -> Self {
        self.clone()
    }
}

impl Dictionary for MapDict {
    fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    fn set(&mut self, key: &str, value: Value) {
        self.entries.insert(key.to_owned(), value);
    }

    fn keys(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }
}

/// The MARS request dictionary: the keyword=value set the user asked for.
pub type MarsDict = MapDict;

/// Auxiliary dictionary: values derived from the request but not part of MARS proper
/// (e.g. grid description, bitmap flags, computed statistics metadata).
pub type AuxDict = MapDict;

/// Encoder options: process-wide switches such as `useGRIBParamID`.
pub type OptionsDict = MapDict;

pub fn mars_dict() -> MarsDict {
    MapDict::new("mars")
}

pub fn aux_dict() -> AuxDict {
    MapDict::new("aux")
}

pub fn options_dict() -> OptionsDict {
    MapDict::new("options")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_roundtrips() {
        let mut d = mars_dict();
        d.set("param", Value::Long(167));
        assert_eq!(d.get_long("param").unwrap(), 167);
    }

    #[test]
    fn missing_key_is_dict_error() {
        let d = mars_dict();
        assert!(matches!(d.get_long("param"), Err(DictError::MissingKey { .. })));
    }

    #[test]
    fn to_json_contains_set_keys() {
        let mut d = mars_dict();
        d.set("levtype", Value::from("pl"));
        let json = d.to_json();
        assert_eq!(json["levtype"], serde_json::json!({"String": "pl"}));
    }
}
