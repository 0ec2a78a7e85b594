//! Microsoft Graph beta SDK.
//!
//! Re-exports the three workspace crates under one roof:
//!
//! * [`serialization`]: JSON parse nodes, writers and the `Parsable` contract.
//! * [`models`]: the beta data models, their enums and `@odata.type` factories.
//! * [`client`]: the HTTP request adapter and the `/sites` request builders.

pub use graph_beta_client as client;
pub use graph_beta_models as models;
pub use graph_beta_serialization as serialization;

pub use graph_beta_client::{BetaService, GraphError, HttpRequestAdapter};

#[cfg(test)]
mod tests {
    use crate::models::{AnyEntity, PageLayoutType, SitePage};
    use crate::serialization::{parse_object, serialize_object};
    use serde_json::json;

    #[test]
    fn test_reexported_crates_work_together() {
        let payload = json!({
            "@odata.type": "#microsoft.graph.sitePage",
            "id": "page-1",
            "pageLayout": "home"
        });
        let bytes = serde_json::to_vec(&payload).unwrap();

        let entity = parse_object::<AnyEntity>(&bytes).unwrap();
        let AnyEntity::SitePage(page) = entity else {
            panic!("expected a site page");
        };
        assert_eq!(page.page_layout(), Some(&PageLayoutType::Home));

        let written: serde_json::Value =
            serde_json::from_slice(&serialize_object::<SitePage>(&page).unwrap()).unwrap();
        assert_eq!(written, payload);
    }
}
