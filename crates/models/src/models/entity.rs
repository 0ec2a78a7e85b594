use chrono::{DateTime, FixedOffset};

use crate::models::{IdentitySet, ItemReference};

graph_model! {
    /// Root of every addressable resource.
    pub struct Entity {
        /// The unique identifier of the resource.
        id / set_id: String => "id",
    }
}

graph_model! {
    /// Common properties of SharePoint items.
    pub struct BaseItem: Entity = "#microsoft.graph.baseItem" {
        created_by / set_created_by: IdentitySet => "createdBy",
        created_date_time / set_created_date_time: DateTime<FixedOffset> => "createdDateTime",
        description / set_description: String => "description",
        e_tag / set_e_tag: String => "eTag",
        last_modified_by / set_last_modified_by: IdentitySet => "lastModifiedBy",
        last_modified_date_time / set_last_modified_date_time: DateTime<FixedOffset> => "lastModifiedDateTime",
        name / set_name: String => "name",
        /// Parent information, if the item has a parent.
        parent_reference / set_parent_reference: ItemReference => "parentReference",
        web_url / set_web_url: String => "webUrl",
    }
}
