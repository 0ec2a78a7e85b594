//! # Graph beta serialization
//!
//! Runtime contract for the generated Graph beta models.
//!
//! * [`ParseNode`] reads typed values out of a JSON document.
//! * [`JsonSerializationWriter`] writes properties back in a fixed order.
//! * [`Parsable`] ties a model's field deserializers and serializer together,
//!   while [`AdditionalDataHolder`] keeps properties the schema does not know.
//! * [`ParsableFactory`] picks the concrete type for a node, which is where
//!   `@odata.type` discriminators are resolved.
//!
//! ## Example
//!
//! ```rust
//! use graph_beta_serialization::ParseNode;
//! use serde_json::json;
//!
//! let payload = json!({"title": "Home", "showComments": true});
//! let node = ParseNode::new(&payload);
//! let title = node.child_node("title").unwrap().string_value().unwrap();
//! assert_eq!(title.as_deref(), Some("Home"));
//! ```

pub mod error;
mod field_value;
mod parsable;
mod parse_node;
mod writer;

pub use error::SerializationError;
pub use field_value::{FieldValue, GraphEnum, serialize_enum_values};
pub use parsable::{
    AdditionalData, AdditionalDataHolder, FieldDeserializer, FieldDeserializers, Parsable,
    ParsableFactory,
};
pub use parse_node::{ParseNode, parse_object, parse_value};
pub use writer::{JsonSerializationWriter, object_to_json, serialize_object};

/// Wire name of the OData type discriminator.
pub const ODATA_TYPE: &str = "@odata.type";
