use crate::models::{BaseItem, Deleted, Root, SharepointIds, SiteCollection, SitePage, SiteSettings};

graph_model! {
    /// A SharePoint site.
    pub struct Site: BaseItem = "#microsoft.graph.site" {
        deleted / set_deleted: Deleted => "deleted",
        display_name / set_display_name: String => "displayName",
        /// The pages of the site, when expanded.
        pages / set_pages: Vec<SitePage> => "pages",
        /// Present when the site is the root of its site collection.
        root / set_root: Root => "root",
        settings / set_settings: SiteSettings => "settings",
        sharepoint_ids / set_sharepoint_ids: SharepointIds => "sharepointIds",
        site_collection / set_site_collection: SiteCollection => "siteCollection",
        /// Sub-sites, when expanded.
        sites / set_sites: Vec<Site> => "sites",
    }
}

impl Site {
    /// Whether the site is the root of its site collection.
    pub fn is_root(&self) -> bool {
        self.root.is_some()
    }
}
