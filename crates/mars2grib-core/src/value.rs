//! The dynamically-typed value carried through MARS, Aux, Options and GRIB dictionaries.

use serde::{Deserialize, Serialize};

/// A single value stored in or retrieved from a [`crate::Dictionary`].
///
/// Mirrors the handful of scalar and array kinds the GRIB API and MARS
/// language actually exchange; there is no nested/object variant because
/// dictionaries are always flat key-value maps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Long(i64),
    Double(f64),
    String(String),
    Bytes(Vec<u8>),
    LongArray(Vec<i64>),
    DoubleArray(Vec<f64>),
    FloatArray(Vec<f32>),
    StringArray(Vec<String>),
    ByteArray(Vec<Vec<u8>>),
    Missing,
}

impl Value {
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(v) => Some(*v),
            Value::Long(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Parameter id, as interpreted from whichever numeric or string encoding is present.
    ///
    /// MARS `param` keys arrive as either a plain integer (`167`) or a
    /// `table.paramid` string (`167.128`); matchers only ever care about the
    /// bare parameter number.
    pub fn as_param_id(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            Value::String(s) => {
                let head = s.split('.').next().unwrap_or(s);
                head.parse().ok()
            }
            _ => None,
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn param_id_from_long() {
        assert_eq!(Value::Long(167).as_param_id(), Some(167));
    }

    #[test]
    fn param_id_from_dotted_string() {
        assert_eq!(Value::from("167.128").as_param_id(), Some(167));
    }

    #[test]
    fn param_id_missing_is_none() {
        assert_eq!(Value::Missing.as_param_id(), None);
    }

    #[test]
    fn double_widens_from_long() {
        assert_eq!(Value::Long(3).as_double(), Some(3.0));
    }
}
