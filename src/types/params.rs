//! Free-form parameter maps
//!
//! Goals, actions and tools exchange `String -> JSON value` maps. Keys are
//! kept ordered so rendered parameters are stable between runs.

use crate::errors::{AgentError, Result};
use serde_json::Value;

/// Ordered parameter map
pub type Params = serde_json::Map<String, Value>;

/// Build a parameter map from a `json!` object literal.
///
/// Anything other than an object yields an empty map.
pub fn params_from(value: Value) -> Params {
    match value {
        Value::Object(map) => map,
        _ => Params::new(),
    }
}

/// Render parameters as compact JSON for narration
pub fn render_params(params: &Params) -> String {
    Value::Object(params.clone()).to_string()
}

/// Typed accessors over [`Params`]
pub trait ParamsExt {
    /// String parameter, if present and a string
    fn str_param(&self, key: &str) -> Option<&str>;

    /// Numeric parameter, if present and a number
    fn f64_param(&self, key: &str) -> Option<f64>;

    /// Required string parameter
    fn require_str(&self, key: &str) -> Result<&str> {
        self.str_param(key).ok_or_else(|| AgentError::missing(key))
    }

    /// Required numeric parameter
    fn require_f64(&self, key: &str) -> Result<f64> {
        self.f64_param(key).ok_or_else(|| AgentError::missing(key))
    }
}

impl ParamsExt for Params {
    fn str_param(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    fn f64_param(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_params_from_object() {
        let params = params_from(json!({"destination": "Rome", "duration": 14}));
        assert_eq!(params.str_param("destination"), Some("Rome"));
        assert_eq!(params.f64_param("duration"), Some(14.0));
    }

    #[test]
    fn test_params_from_non_object_is_empty() {
        assert!(params_from(json!([1, 2, 3])).is_empty());
    }

    #[test]
    fn test_render_is_key_ordered() {
        let params = params_from(json!({"b": 1, "a": "x"}));
        assert_eq!(render_params(&params), r#"{"a":"x","b":1}"#);
    }

    #[test]
    fn test_require_reports_missing_key() {
        let params = Params::new();
        let err = params.require_f64("total_budget").unwrap_err();
        assert!(err.to_string().contains("total_budget"));
    }
}
