//! Complex types shared by the SharePoint resources.

graph_model! {
    pub struct Identity {
        display_name / set_display_name: String => "displayName",
        id / set_id: String => "id",
    }
}

graph_model! {
    /// Keyed collection of identities involved in an action.
    pub struct IdentitySet {
        application / set_application: Identity => "application",
        device / set_device: Identity => "device",
        user / set_user: Identity => "user",
    }
}

graph_model! {
    pub struct SharepointIds {
        list_id / set_list_id: String => "listId",
        list_item_id / set_list_item_id: String => "listItemId",
        list_item_unique_id / set_list_item_unique_id: String => "listItemUniqueId",
        site_id / set_site_id: String => "siteId",
        site_url / set_site_url: String => "siteUrl",
        tenant_id / set_tenant_id: String => "tenantId",
        web_id / set_web_id: String => "webId",
    }
}

graph_model! {
    /// Reference to an item by API path.
    pub struct ItemReference {
        drive_id / set_drive_id: String => "driveId",
        drive_type / set_drive_type: String => "driveType",
        id / set_id: String => "id",
        name / set_name: String => "name",
        path / set_path: String => "path",
        share_id / set_share_id: String => "shareId",
        sharepoint_ids / set_sharepoint_ids: SharepointIds => "sharepointIds",
        site_id / set_site_id: String => "siteId",
    }
}

graph_model! {
    pub struct ContentTypeInfo {
        id / set_id: String => "id",
        name / set_name: String => "name",
    }
}

graph_model! {
    /// Publishing status of a page or document.
    pub struct PublicationFacet {
        checked_out_by / set_checked_out_by: IdentitySet => "checkedOutBy",
        /// `published` or `checkout`.
        level / set_level: String => "level",
        version_id / set_version_id: String => "versionId",
    }
}

graph_model! {
    pub struct ReactionsFacet {
        comment_count / set_comment_count: i32 => "commentCount",
        like_count / set_like_count: i32 => "likeCount",
        share_count / set_share_count: i32 => "shareCount",
    }
}

graph_model! {
    /// Marker facet present on the root of a site collection.
    pub struct Root {}
}

graph_model! {
    pub struct SiteCollection {
        data_location_code / set_data_location_code: String => "dataLocationCode",
        hostname / set_hostname: String => "hostname",
        root / set_root: Root => "root",
    }
}

graph_model! {
    pub struct Deleted {
        state / set_state: String => "state",
    }
}

graph_model! {
    pub struct SiteSettings {
        language_tag / set_language_tag: String => "languageTag",
        time_zone / set_time_zone: String => "timeZone",
    }
}
