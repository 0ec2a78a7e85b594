use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat};
use serde_json::{Number, Value};

use crate::error::SerializationError;
use crate::parse_node::ParseNode;

/// A value a model property can hold.
pub trait FieldValue: Sized {
    /// Reads the value from a property node; `Ok(None)` for JSON `null`.
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError>;

    /// Converts the value to its wire representation.
    fn to_json(&self) -> Result<Value, SerializationError>;
}

/// An enumeration whose members travel as camelCase strings.
pub trait GraphEnum: Copy + FromStr + Into<&'static str> {
    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Wire form of the member.
    fn as_wire_str(self) -> &'static str {
        self.into()
    }

    /// Reverse lookup from the wire form.
    fn parse_wire(value: &str) -> Result<Self, SerializationError> {
        Self::from_str(value).map_err(|_| SerializationError::UnknownEnumValue {
            type_name: Self::TYPE_NAME,
            value: value.to_string(),
        })
    }
}

/// Maps enum members to their wire strings, preserving order.
pub fn serialize_enum_values<E: GraphEnum>(values: &[E]) -> Vec<String> {
    values.iter().map(|v| v.as_wire_str().to_string()).collect()
}

pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";
pub(crate) const TIME_FORMAT: &str = "%H:%M:%S%.f";
pub(crate) const LOCAL_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

impl FieldValue for String {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.string_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.clone()))
    }
}

impl FieldValue for bool {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.bool_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::Bool(*self))
    }
}

impl FieldValue for i32 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.i32_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::Number((*self).into()))
    }
}

impl FieldValue for i64 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.i64_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::Number((*self).into()))
    }
}

impl FieldValue for f64 {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.f64_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Number::from_f64(*self)
            .map(Value::Number)
            .ok_or(SerializationError::NonFiniteNumber(*self))
    }
}

impl FieldValue for DateTime<FixedOffset> {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.date_time_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.to_rfc3339_opts(SecondsFormat::AutoSi, true)))
    }
}

/// Timestamp sent without a UTC offset.
impl FieldValue for NaiveDateTime {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.local_date_time_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.format(LOCAL_DATE_TIME_FORMAT).to_string()))
    }
}

impl FieldValue for NaiveDate {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.date_only_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.format(DATE_FORMAT).to_string()))
    }
}

impl FieldValue for NaiveTime {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.time_only_value()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(Value::String(self.format(TIME_FORMAT).to_string()))
    }
}

/// Untyped JSON, used for open-ended properties such as web part settings.
impl FieldValue for Value {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        Ok(node.raw_value())
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        Ok(self.clone())
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn read(node: &ParseNode<'_>) -> Result<Option<Self>, SerializationError> {
        node.collection_of_primitive_values::<T>()
    }

    fn to_json(&self) -> Result<Value, SerializationError> {
        self.iter()
            .map(FieldValue::to_json)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_log::test;

    #[test]
    fn test_non_finite_float_is_rejected() {
        assert_eq!(
            f64::NAN.to_json().unwrap_err().to_string(),
            "Cannot serialize non-finite number NaN"
        );
        assert_eq!(
            f64::INFINITY.to_json(),
            Err(SerializationError::NonFiniteNumber(f64::INFINITY))
        );
        assert_eq!(2.5f64.to_json().unwrap(), json!(2.5));
    }

    #[test]
    fn test_date_time_keeps_offset_and_fraction() {
        let value = json!("2023-05-04T10:11:12.5+02:00");
        let parsed = DateTime::<FixedOffset>::read(&ParseNode::new(&value))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.to_json().unwrap(), json!("2023-05-04T10:11:12.500+02:00"));

        let utc = json!("2023-05-04T10:11:12Z");
        let parsed = DateTime::<FixedOffset>::read(&ParseNode::new(&utc))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.to_json().unwrap(), json!("2023-05-04T10:11:12Z"));
    }

    #[test]
    fn test_date_and_time_only_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        assert_eq!(date.to_json().unwrap(), json!("2024-02-29"));

        let time = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
        assert_eq!(time.to_json().unwrap(), json!("08:30:00"));
    }

    #[test]
    fn test_local_date_time_with_or_without_offset() {
        let value = json!("2023-01-10T08:00:00");
        let parsed = NaiveDateTime::read(&ParseNode::new(&value)).unwrap().unwrap();
        assert_eq!(parsed.to_json().unwrap(), value);

        let with_offset = json!("2023-01-10T10:00:00.25+02:00");
        let parsed = NaiveDateTime::read(&ParseNode::new(&with_offset))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.to_json().unwrap(), json!("2023-01-10T08:00:00.250"));
    }

    #[test]
    fn test_vector_of_strings() {
        let value = json!(["0", "1"]);
        let read = Vec::<String>::read(&ParseNode::new(&value)).unwrap().unwrap();
        assert_eq!(read, vec!["0".to_string(), "1".to_string()]);
        assert_eq!(read.to_json().unwrap(), value);
    }
}
