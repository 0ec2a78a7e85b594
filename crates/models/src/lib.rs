//! # Graph beta models
//!
//! Data-transfer objects of the Microsoft Graph beta API for SharePoint
//! sites and pages, device configuration and business scenarios.
//!
//! Every model keeps its properties optional and exposes a getter/setter
//! pair per property. Properties the typed schema does not know end up in the
//! model's additional data and are written back on serialization.
//!
//! Derived types embed their base type and dereference to it, so the
//! properties of `Entity` and `BaseItem` are reachable from a [`SitePage`]:
//!
//! ```rust
//! use graph_beta_models::SitePage;
//! use graph_beta_models::serialization::{parse_object, serialize_object};
//!
//! let page: SitePage = parse_object(br#"{"id": "7", "name": "Home.aspx", "title": "Home"}"#).unwrap();
//! assert_eq!(page.id().map(String::as_str), Some("7"));
//! assert_eq!(page.name().map(String::as_str), Some("Home.aspx"));
//!
//! let json = serialize_object(&page).unwrap();
//! assert_eq!(
//!     String::from_utf8(json).unwrap(),
//!     r##"{"@odata.type":"#microsoft.graph.sitePage","id":"7","name":"Home.aspx","title":"Home"}"##
//! );
//! ```
//!
//! Hierarchy base types are read through their `Any*` view, which resolves
//! the `@odata.type` discriminator:
//!
//! ```rust
//! use graph_beta_models::AnyWebPart;
//! use graph_beta_models::serialization::parse_object;
//!
//! let part: AnyWebPart = parse_object(
//!     br##"{"@odata.type": "#microsoft.graph.textWebPart", "innerHtml": "<p>Hi</p>"}"##,
//! )
//! .unwrap();
//! assert!(matches!(part, AnyWebPart::TextWebPart(_)));
//! ```

#[macro_use]
mod macros;

mod enums;
mod models;

pub use graph_beta_serialization as serialization;

pub use enums::*;
pub use models::*;
