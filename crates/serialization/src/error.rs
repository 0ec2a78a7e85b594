use thiserror::Error;

/// Failures raised while reading or writing Graph payloads.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SerializationError {
    /// The payload is not valid JSON.
    #[error("Invalid JSON payload: {0}")]
    Json(String),

    /// A wire value has a different JSON kind than the field expects.
    #[error("Expected {expected} but found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// A JSON number does not fit the numeric type of the field.
    #[error("Number {value} is out of range for {expected}")]
    OutOfRange { value: String, expected: &'static str },

    /// A string could not be matched against the members of an enum.
    #[error("Unknown {type_name} value: {value}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    /// A string could not be parsed into a date, time or timestamp.
    #[error("Invalid {expected} value '{value}': {reason}")]
    InvalidFormat {
        expected: &'static str,
        value: String,
        reason: String,
    },

    /// JSON cannot represent NaN or infinite numbers.
    #[error("Cannot serialize non-finite number {0}")]
    NonFiniteNumber(f64),

    /// The root of the payload was `null` where an object was required.
    #[error("Payload does not contain an object")]
    MissingObject,

    /// Error raised while handling a specific property.
    #[error("Field '{field}': {source}")]
    Field {
        field: String,
        source: Box<SerializationError>,
    },
}

impl SerializationError {
    /// Attaches the wire name of the property being processed.
    pub fn at_field(self, field: impl Into<String>) -> Self {
        SerializationError::Field {
            field: field.into(),
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, skipping field context.
    pub fn root_cause(&self) -> &SerializationError {
        match self {
            SerializationError::Field { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Dotted path of the properties wrapping this error, outermost first.
    pub fn field_path(&self) -> Option<String> {
        let mut names = Vec::new();
        let mut current = self;
        while let SerializationError::Field { field, source } = current {
            names.push(field.as_str());
            current = source;
        }
        if names.is_empty() {
            None
        } else {
            Some(names.join("."))
        }
    }
}

impl From<serde_json::Error> for SerializationError {
    fn from(error: serde_json::Error) -> Self {
        SerializationError::Json(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_path_lists_nested_properties() {
        let error = SerializationError::TypeMismatch {
            expected: "string",
            found: "number",
        }
        .at_field("title")
        .at_field("titleArea");

        assert_eq!(error.field_path(), Some("titleArea.title".to_string()));
        assert_eq!(
            error.root_cause(),
            &SerializationError::TypeMismatch {
                expected: "string",
                found: "number",
            }
        );
        assert_eq!(
            error.to_string(),
            "Field 'titleArea': Field 'title': Expected string but found number"
        );
    }

    #[test]
    fn test_field_path_is_none_without_context() {
        let error = SerializationError::MissingObject;
        assert_eq!(error.field_path(), None);
        assert_eq!(error.root_cause(), &SerializationError::MissingObject);
    }
}
