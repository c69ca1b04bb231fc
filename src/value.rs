//! Pipelines over dynamically typed JSON values.
//!
//! Only available with the `serde` feature.

use serde_json::Value;

use crate::error::PipelineError;
use crate::pipeline::{Head, Pipeline};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Pipeline<Head<std::vec::IntoIter<Value>>> {
    /// Start a pipeline over the elements of a JSON array or the values of a
    /// JSON object, in the object's iteration order.
    ///
    /// Any other JSON value is not a sequence and is rejected with
    /// [`PipelineError::InvalidSource`].
    ///
    /// ```rust
    /// use millrace::{Pipeline, PipelineError};
    /// use serde_json::json;
    ///
    /// let names = Pipeline::from_value(json!([{"name": "ada"}, {"name": "alan"}]))
    ///     .unwrap()
    ///     .flat_map(|user| user["name"].as_str().map(str::to_owned))
    ///     .to_vec();
    /// assert_eq!(names, Ok(vec!["ada".to_string(), "alan".to_string()]));
    ///
    /// let err = Pipeline::from_value(json!(42)).unwrap_err();
    /// assert!(matches!(err, PipelineError::InvalidSource { .. }));
    /// ```
    pub fn from_value(value: Value) -> Result<Self, PipelineError> {
        let items = match value {
            Value::Array(items) => items,
            Value::Object(map) => map.into_iter().map(|(_, item)| item).collect(),
            other => {
                return Err(PipelineError::InvalidSource {
                    found: kind(&other).to_string(),
                })
            }
        };
        Ok(Pipeline::of(items))
    }
}
