//! Write side of the JSON serialization.

use chrono::{DateTime, FixedOffset};
use serde_json::{Map, Value};

use crate::error::SerializationError;
use crate::field_value::{FieldValue, GraphEnum};
use crate::parsable::{AdditionalData, Parsable};

/// Builds one JSON object, keeping properties in the order they are written.
#[derive(Debug, Default, Clone)]
pub struct JsonSerializationWriter {
    fields: Map<String, Value>,
}

impl JsonSerializationWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Writes `value` under `key`; `None` writes nothing.
    pub fn write_value<T: FieldValue>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let json = value.to_json().map_err(|e| e.at_field(key))?;
            self.fields.insert(key.to_string(), json);
        }
        Ok(())
    }

    pub fn write_string_value(
        &mut self,
        key: &str,
        value: Option<&str>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            self.fields
                .insert(key.to_string(), Value::String(value.to_string()));
        }
        Ok(())
    }

    pub fn write_bool_value(
        &mut self,
        key: &str,
        value: Option<bool>,
    ) -> Result<(), SerializationError> {
        self.write_value(key, value.as_ref())
    }

    pub fn write_i32_value(
        &mut self,
        key: &str,
        value: Option<i32>,
    ) -> Result<(), SerializationError> {
        self.write_value(key, value.as_ref())
    }

    pub fn write_i64_value(
        &mut self,
        key: &str,
        value: Option<i64>,
    ) -> Result<(), SerializationError> {
        self.write_value(key, value.as_ref())
    }

    pub fn write_f64_value(
        &mut self,
        key: &str,
        value: Option<f64>,
    ) -> Result<(), SerializationError> {
        self.write_value(key, value.as_ref())
    }

    pub fn write_date_time_value(
        &mut self,
        key: &str,
        value: Option<&DateTime<FixedOffset>>,
    ) -> Result<(), SerializationError> {
        self.write_value(key, value)
    }

    pub fn write_enum_value<E: GraphEnum>(
        &mut self,
        key: &str,
        value: Option<E>,
    ) -> Result<(), SerializationError> {
        self.write_string_value(key, value.map(GraphEnum::as_wire_str))
    }

    /// Writes a nested model under `key`.
    pub fn write_object_value<T: Parsable>(
        &mut self,
        key: &str,
        value: Option<&T>,
    ) -> Result<(), SerializationError> {
        if let Some(value) = value {
            let nested = object_to_json(value).map_err(|e| e.at_field(key))?;
            self.fields.insert(key.to_string(), nested);
        }
        Ok(())
    }

    pub fn write_collection_of_object_values<T: Parsable>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(object_to_json)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.at_field(key))?;
            self.fields.insert(key.to_string(), Value::Array(items));
        }
        Ok(())
    }

    pub fn write_collection_of_primitive_values<T: FieldValue>(
        &mut self,
        key: &str,
        values: Option<&[T]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(FieldValue::to_json)
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| e.at_field(key))?;
            self.fields.insert(key.to_string(), Value::Array(items));
        }
        Ok(())
    }

    pub fn write_collection_of_enum_values<E: GraphEnum>(
        &mut self,
        key: &str,
        values: Option<&[E]>,
    ) -> Result<(), SerializationError> {
        if let Some(values) = values {
            let items = values
                .iter()
                .map(|v| Value::String(v.as_wire_str().to_string()))
                .collect();
            self.fields.insert(key.to_string(), Value::Array(items));
        }
        Ok(())
    }

    /// Appends the additional data; keys already written are left untouched.
    pub fn write_additional_data(
        &mut self,
        additional_data: &AdditionalData,
    ) -> Result<(), SerializationError> {
        for (key, value) in additional_data {
            if !self.fields.contains_key(key) {
                self.fields.insert(key.clone(), value.clone());
            }
        }
        Ok(())
    }

    /// Keys written so far, in order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// The serialized JSON document.
    pub fn into_content(self) -> Result<Vec<u8>, SerializationError> {
        Ok(serde_json::to_vec(&self.fields)?)
    }
}

/// Serializes a model into a JSON value.
pub fn object_to_json<T: Parsable>(value: &T) -> Result<Value, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    value.serialize(&mut writer)?;
    Ok(writer.into_value())
}

/// Serializes a model into a JSON document.
pub fn serialize_object<T: Parsable>(value: &T) -> Result<Vec<u8>, SerializationError> {
    let mut writer = JsonSerializationWriter::new();
    value.serialize(&mut writer)?;
    writer.into_content()
}
