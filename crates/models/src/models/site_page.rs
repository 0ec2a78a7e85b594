use crate::enums::{PageLayoutType, PagePromotionType};
use crate::models::{
    AnyWebPart, BaseItem, CanvasLayout, ContentTypeInfo, PublicationFacet, ReactionsFacet,
    TitleArea,
};

graph_model! {
    /// A modern page in a SharePoint site.
    pub struct SitePage: BaseItem = "#microsoft.graph.sitePage" {
        /// Section layout of the page, only returned with `$expand=canvasLayout`.
        canvas_layout / set_canvas_layout: CanvasLayout => "canvasLayout",
        content_type / set_content_type: ContentTypeInfo => "contentType",
        page_layout / set_page_layout: PageLayoutType => "pageLayout",
        promotion_kind / set_promotion_kind: PagePromotionType => "promotionKind",
        publishing_state / set_publishing_state: PublicationFacet => "publishingState",
        reactions / set_reactions: ReactionsFacet => "reactions",
        show_comments / set_show_comments: bool => "showComments",
        show_recommended_pages / set_show_recommended_pages: bool => "showRecommendedPages",
        thumbnail_web_url / set_thumbnail_web_url: String => "thumbnailWebUrl",
        title / set_title: String => "title",
        title_area / set_title_area: TitleArea => "titleArea",
        web_parts / set_web_parts: Vec<AnyWebPart> => "webParts",
    }
}

impl SitePage {
    /// Whether the page is published, per its publishing state.
    pub fn is_published(&self) -> bool {
        self.publishing_state
            .as_ref()
            .and_then(PublicationFacet::level)
            .is_some_and(|level| level == "published")
    }

    /// Web parts of the page, from the canvas layout when it was expanded
    /// and from `webParts` otherwise.
    pub fn all_web_parts(&self) -> Vec<&AnyWebPart> {
        match &self.canvas_layout {
            Some(layout) => layout.web_parts().collect(),
            None => self.web_parts.iter().flatten().collect(),
        }
    }
}
