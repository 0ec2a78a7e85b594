//! Read side of the JSON serialization.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde_json::Value;
use tracing::trace;

use crate::error::SerializationError;
use crate::field_value::{DATE_FORMAT, FieldValue, GraphEnum, LOCAL_DATE_TIME_FORMAT, TIME_FORMAT};
use crate::parsable::ParsableFactory;

/// Borrowed view over one node of a JSON document.
#[derive(Debug, Clone, Copy)]
pub struct ParseNode<'a> {
    value: &'a Value,
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl<'a> ParseNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    /// The JSON value behind this node.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    fn mismatch(&self, expected: &'static str) -> SerializationError {
        SerializationError::TypeMismatch {
            expected,
            found: kind_of(self.value),
        }
    }

    /// Property `name` of an object node, if present.
    pub fn child_node(&self, name: &str) -> Option<ParseNode<'a>> {
        self.value.as_object()?.get(name).map(ParseNode::new)
    }

    pub fn string_value(&self) -> Result<Option<String>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::String(s) => Ok(Some(s.clone())),
            _ => Err(self.mismatch("string")),
        }
    }

    pub fn bool_value(&self) -> Result<Option<bool>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(*b)),
            _ => Err(self.mismatch("boolean")),
        }
    }

    pub fn i64_value(&self) -> Result<Option<i64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => n.as_i64().map(Some).ok_or_else(|| {
                SerializationError::OutOfRange {
                    value: n.to_string(),
                    expected: "int64",
                }
            }),
            _ => Err(self.mismatch("number")),
        }
    }

    pub fn i32_value(&self) -> Result<Option<i32>, SerializationError> {
        let Some(wide) = self.i64_value().map_err(|e| match e {
            SerializationError::OutOfRange { value, .. } => SerializationError::OutOfRange {
                value,
                expected: "int32",
            },
            other => other,
        })?
        else {
            return Ok(None);
        };
        i32::try_from(wide)
            .map(Some)
            .map_err(|_| SerializationError::OutOfRange {
                value: wide.to_string(),
                expected: "int32",
            })
    }

    pub fn f64_value(&self) -> Result<Option<f64>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(self.mismatch("number")),
        }
    }

    /// RFC 3339 timestamp (`Edm.DateTimeOffset`).
    pub fn date_time_value(&self) -> Result<Option<DateTime<FixedOffset>>, SerializationError> {
        let Some(text) = self.string_value()? else {
            return Ok(None);
        };
        DateTime::parse_from_rfc3339(&text)
            .map(Some)
            .map_err(|e| SerializationError::InvalidFormat {
                expected: "date-time",
                value: text,
                reason: e.to_string(),
            })
    }

    /// Timestamp whose offset may be missing. An offset, when present, is
    /// applied and the result is in UTC.
    pub fn local_date_time_value(&self) -> Result<Option<NaiveDateTime>, SerializationError> {
        let Some(text) = self.string_value()? else {
            return Ok(None);
        };
        if let Ok(with_offset) = DateTime::parse_from_rfc3339(&text) {
            return Ok(Some(with_offset.naive_utc()));
        }
        NaiveDateTime::parse_from_str(&text, LOCAL_DATE_TIME_FORMAT)
            .map(Some)
            .map_err(|e| SerializationError::InvalidFormat {
                expected: "date-time",
                value: text,
                reason: e.to_string(),
            })
    }

    /// Calendar date without time zone (`Edm.Date`).
    pub fn date_only_value(&self) -> Result<Option<NaiveDate>, SerializationError> {
        let Some(text) = self.string_value()? else {
            return Ok(None);
        };
        NaiveDate::parse_from_str(&text, DATE_FORMAT)
            .map(Some)
            .map_err(|e| SerializationError::InvalidFormat {
                expected: "date",
                value: text,
                reason: e.to_string(),
            })
    }

    /// Time of day without time zone (`Edm.TimeOfDay`).
    pub fn time_only_value(&self) -> Result<Option<NaiveTime>, SerializationError> {
        let Some(text) = self.string_value()? else {
            return Ok(None);
        };
        NaiveTime::parse_from_str(&text, TIME_FORMAT)
            .map(Some)
            .map_err(|e| SerializationError::InvalidFormat {
                expected: "time",
                value: text,
                reason: e.to_string(),
            })
    }

    pub fn enum_value<E: GraphEnum>(&self) -> Result<Option<E>, SerializationError> {
        match self.string_value()? {
            Some(text) => E::parse_wire(&text).map(Some),
            None => Ok(None),
        }
    }

    /// The node as untyped JSON, `None` for `null`.
    pub fn raw_value(&self) -> Option<Value> {
        if self.value.is_null() {
            None
        } else {
            Some(self.value.clone())
        }
    }

    /// Reads an object through the factory of `T`.
    ///
    /// Properties with a field deserializer are handed to it; `null` leaves
    /// the property unset. Every other property is copied into the
    /// instance's additional data.
    pub fn object_value<T: ParsableFactory>(&self) -> Result<Option<T>, SerializationError> {
        let properties = match self.value {
            Value::Null => return Ok(None),
            Value::Object(properties) => properties,
            _ => return Err(self.mismatch("object")),
        };

        let mut instance = T::create_from_discriminator_value(self)?;
        let fields = instance.field_deserializers();
        for (name, value) in properties {
            match fields.get(name) {
                Some(deserialize) => {
                    if value.is_null() {
                        continue;
                    }
                    deserialize(&mut instance, &ParseNode::new(value))
                        .map_err(|e| e.at_field(name.as_str()))?;
                }
                None => {
                    trace!(property = %name, "Keeping property in additional data");
                    instance
                        .additional_data_mut()
                        .insert(name.clone(), value.clone());
                }
            }
        }
        Ok(Some(instance))
    }

    fn elements(&self) -> Result<Option<&'a Vec<Value>>, SerializationError> {
        match self.value {
            Value::Null => Ok(None),
            Value::Array(items) => Ok(Some(items)),
            _ => Err(self.mismatch("array")),
        }
    }

    /// Reads an array of primitives; `null` elements are skipped.
    pub fn collection_of_primitive_values<T: FieldValue>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(value) =
                T::read(&ParseNode::new(item)).map_err(|e| e.at_field(index.to_string()))?
            {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    /// Reads an array of objects, each through the factory of `T`.
    pub fn collection_of_object_values<T: ParsableFactory>(
        &self,
    ) -> Result<Option<Vec<T>>, SerializationError> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(value) = ParseNode::new(item)
                .object_value::<T>()
                .map_err(|e| e.at_field(index.to_string()))?
            {
                values.push(value);
            }
        }
        Ok(Some(values))
    }

    pub fn collection_of_enum_values<E: GraphEnum>(
        &self,
    ) -> Result<Option<Vec<E>>, SerializationError> {
        let Some(items) = self.elements()? else {
            return Ok(None);
        };
        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if let Some(value) = ParseNode::new(item)
                .enum_value::<E>()
                .map_err(|e| e.at_field(index.to_string()))?
            {
                values.push(value);
            }
        }
        Ok(Some(values))
    }
}

/// Parses a JSON payload into `T`.
pub fn parse_object<T: ParsableFactory>(content: &[u8]) -> Result<T, SerializationError> {
    let value: Value = serde_json::from_slice(content)?;
    parse_value(&value)
}

/// Reads an already decoded JSON value into `T`.
pub fn parse_value<T: ParsableFactory>(value: &Value) -> Result<T, SerializationError> {
    ParseNode::new(value)
        .object_value::<T>()?
        .ok_or(SerializationError::MissingObject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn test_child_node_of_object() {
        let value = json!({"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": null});
        let node = ParseNode::new(&value);

        let discriminator = node.child_node("@odata.type").unwrap();
        assert_eq!(
            discriminator.string_value().unwrap().as_deref(),
            Some("#microsoft.graph.textWebPart")
        );
        assert!(node.child_node("innerHtml").unwrap().is_null());
        assert!(node.child_node("missing").is_none());

        let scalar = json!("text");
        assert!(ParseNode::new(&scalar).child_node("anything").is_none());
    }

    #[test]
    fn test_null_reads_as_none() {
        let value = Value::Null;
        let node = ParseNode::new(&value);
        assert_eq!(node.string_value().unwrap(), None);
        assert_eq!(node.bool_value().unwrap(), None);
        assert_eq!(node.i32_value().unwrap(), None);
        assert_eq!(node.f64_value().unwrap(), None);
        assert_eq!(node.date_time_value().unwrap(), None);
        assert_eq!(node.raw_value(), None);
        assert_eq!(node.collection_of_primitive_values::<String>().unwrap(), None);
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let value = json!(12);
        let node = ParseNode::new(&value);
        assert_eq!(
            node.string_value(),
            Err(SerializationError::TypeMismatch {
                expected: "string",
                found: "number"
            })
        );
        assert_eq!(
            ParseNode::new(&json!("true")).bool_value(),
            Err(SerializationError::TypeMismatch {
                expected: "boolean",
                found: "string"
            })
        );
    }

    #[test]
    fn test_integer_ranges() {
        let big = json!(4_294_967_296i64);
        assert_eq!(ParseNode::new(&big).i64_value().unwrap(), Some(4_294_967_296));
        assert_eq!(
            ParseNode::new(&big).i32_value(),
            Err(SerializationError::OutOfRange {
                value: "4294967296".to_string(),
                expected: "int32"
            })
        );

        let fraction = json!(1.5);
        assert!(matches!(
            ParseNode::new(&fraction).i32_value(),
            Err(SerializationError::OutOfRange { expected: "int32", .. })
        ));
        assert_eq!(ParseNode::new(&fraction).f64_value().unwrap(), Some(1.5));
        assert_eq!(ParseNode::new(&json!(-7)).i32_value().unwrap(), Some(-7));
    }

    #[test]
    fn test_invalid_dates() {
        let value = json!("yesterday");
        let error = ParseNode::new(&value).date_time_value().unwrap_err();
        assert!(matches!(
            error,
            SerializationError::InvalidFormat { expected: "date-time", ref value, .. } if value == "yesterday"
        ));

        let local = json!("10 January 2023");
        assert!(ParseNode::new(&local).local_date_time_value().is_err());

        let date = json!("2023-13-01");
        assert!(ParseNode::new(&date).date_only_value().is_err());

        let time = json!("23:59:59.250");
        assert_eq!(
            ParseNode::new(&time).time_only_value().unwrap(),
            NaiveTime::from_hms_milli_opt(23, 59, 59, 250)
        );
    }

    #[test]
    fn test_primitive_collection_skips_nulls_and_reports_index() {
        let value = json!(["a", null, "b"]);
        let node = ParseNode::new(&value);
        assert_eq!(
            node.collection_of_primitive_values::<String>().unwrap(),
            Some(vec!["a".to_string(), "b".to_string()])
        );

        let broken = json!(["a", 3]);
        let error = ParseNode::new(&broken)
            .collection_of_primitive_values::<String>()
            .unwrap_err();
        assert_eq!(error.field_path(), Some("1".to_string()));

        let not_array = json!({"a": 1});
        assert!(matches!(
            ParseNode::new(&not_array).collection_of_primitive_values::<String>(),
            Err(SerializationError::TypeMismatch { expected: "array", found: "object" })
        ));
    }
}
