//! Graph beta models, grouped by the resource they describe.

mod business_scenario;
mod collection;
mod device_configuration;
mod entity;
mod facets;
mod odata_error;
mod polymorphic;
mod site;
mod site_page;
mod title_area;
mod web_part;

pub use business_scenario::*;
pub use collection::*;
pub use device_configuration::*;
pub use entity::*;
pub use facets::*;
pub use odata_error::*;
pub use polymorphic::*;
pub use site::*;
pub use site_page::*;
pub use title_area::*;
pub use web_part::*;
