//! The contract implemented by every Graph model.
//!
//! A model exposes its *field deserializers* (wire name → setter) and a
//! serializer writing its properties in a fixed order. Wire properties that
//! have no deserializer are kept in the model's additional data so that a
//! parse/serialize cycle does not lose information.

use std::collections::HashMap;
use std::fmt;

use serde_json::{Map, Value};

use crate::error::SerializationError;
use crate::parse_node::ParseNode;
use crate::writer::JsonSerializationWriter;

/// Wire properties not described by the typed schema.
pub type AdditionalData = Map<String, Value>;

/// Setter invoked with the parse node of a single property.
pub type FieldDeserializer<T> =
    Box<dyn Fn(&mut T, &ParseNode<'_>) -> Result<(), SerializationError> + Send + Sync>;

/// Models that keep unknown wire properties around.
pub trait AdditionalDataHolder {
    fn additional_data(&self) -> &AdditionalData;
    fn additional_data_mut(&mut self) -> &mut AdditionalData;

    fn set_additional_data(&mut self, value: AdditionalData) {
        *self.additional_data_mut() = value;
    }
}

/// A model that can be populated from and written to a JSON payload.
pub trait Parsable: AdditionalDataHolder + Sized + 'static {
    /// Deserialization map for the current instance, keyed by wire name.
    fn field_deserializers(&self) -> FieldDeserializers<Self>;

    /// Writes the model's properties, then its additional data.
    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<(), SerializationError>;
}

/// Creates the instance a parse node should be read into.
///
/// Hierarchy base types inspect the node's `@odata.type` to pick the concrete
/// type; every other model simply returns a fresh instance.
pub trait ParsableFactory: Parsable {
    fn create_from_discriminator_value(node: &ParseNode<'_>) -> Result<Self, SerializationError>;
}

/// Wire name → setter map of a model.
pub struct FieldDeserializers<T> {
    fields: HashMap<&'static str, FieldDeserializer<T>>,
}

impl<T: 'static> FieldDeserializers<T> {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// Registers the setter for `wire_name`, replacing any earlier one.
    pub fn insert<F>(&mut self, wire_name: &'static str, deserializer: F)
    where
        F: Fn(&mut T, &ParseNode<'_>) -> Result<(), SerializationError> + Send + Sync + 'static,
    {
        self.fields.insert(wire_name, Box::new(deserializer));
    }

    pub fn get(&self, wire_name: &str) -> Option<&FieldDeserializer<T>> {
        self.fields.get(wire_name)
    }

    pub fn contains(&self, wire_name: &str) -> bool {
        self.fields.contains_key(wire_name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Wire names in sorted order.
    pub fn wire_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.fields.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Lifts the setters of an embedded base model onto the embedding model.
    pub fn project<U: 'static>(self, project: fn(&mut U) -> &mut T) -> FieldDeserializers<U> {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, deserializer)| {
                let lifted: FieldDeserializer<U> =
                    Box::new(move |model: &mut U, node: &ParseNode<'_>| {
                        deserializer(project(model), node)
                    });
                (name, lifted)
            })
            .collect();
        FieldDeserializers { fields }
    }

    /// Lifts the setters of one variant onto a polymorphic enum.
    ///
    /// The lifted setters are no-ops when the enum holds another variant.
    pub fn project_variant<U: 'static>(
        self,
        project: fn(&mut U) -> Option<&mut T>,
    ) -> FieldDeserializers<U> {
        let fields = self
            .fields
            .into_iter()
            .map(|(name, deserializer)| {
                let lifted: FieldDeserializer<U> =
                    Box::new(move |model: &mut U, node: &ParseNode<'_>| match project(model) {
                        Some(inner) => deserializer(inner, node),
                        None => Ok(()),
                    });
                (name, lifted)
            })
            .collect();
        FieldDeserializers { fields }
    }
}

impl<T: 'static> Default for FieldDeserializers<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDeserializers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.fields.keys().collect();
        names.sort_unstable();
        f.debug_struct("FieldDeserializers")
            .field("fields", &names)
            .finish()
    }
}
