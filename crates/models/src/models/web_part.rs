use serde_json::Value;

use crate::enums::{HorizontalSectionLayoutType, SectionEmphasisType};
use crate::models::{AnyWebPart, Entity};

graph_model! {
    /// Section layout of a site page.
    pub struct CanvasLayout: Entity = "#microsoft.graph.canvasLayout" {
        horizontal_sections / set_horizontal_sections: Vec<HorizontalSection> => "horizontalSections",
        vertical_section / set_vertical_section: VerticalSection => "verticalSection",
    }
}

impl CanvasLayout {
    /// Every web part of the layout: horizontal sections column by column,
    /// then the vertical section.
    pub fn web_parts(&self) -> impl Iterator<Item = &AnyWebPart> {
        let horizontal = self
            .horizontal_sections
            .iter()
            .flatten()
            .flat_map(|section| section.columns.iter().flatten())
            .flat_map(|column| column.webparts.iter().flatten());
        let vertical = self
            .vertical_section
            .iter()
            .flat_map(|section| section.webparts.iter().flatten());
        horizontal.chain(vertical)
    }
}

graph_model! {
    pub struct HorizontalSection: Entity = "#microsoft.graph.horizontalSection" {
        columns / set_columns: Vec<HorizontalSectionColumn> => "columns",
        emphasis / set_emphasis: SectionEmphasisType => "emphasis",
        layout / set_layout: HorizontalSectionLayoutType => "layout",
    }
}

graph_model! {
    pub struct HorizontalSectionColumn: Entity = "#microsoft.graph.horizontalSectionColumn" {
        webparts / set_webparts: Vec<AnyWebPart> => "webparts",
        /// Width of the column, out of 12.
        width / set_width: i32 => "width",
    }
}

graph_model! {
    pub struct VerticalSection: Entity = "#microsoft.graph.verticalSection" {
        emphasis / set_emphasis: SectionEmphasisType => "emphasis",
        webparts / set_webparts: Vec<AnyWebPart> => "webparts",
    }
}

graph_model! {
    /// Base type of the web parts hosted on a page.
    pub struct WebPart: Entity = "#microsoft.graph.webPart" {}
}

graph_model! {
    /// Any web part other than text.
    pub struct StandardWebPart: WebPart = "#microsoft.graph.standardWebPart" {
        data / set_data: WebPartData => "data",
        /// The web part's type id.
        web_part_type / set_web_part_type: String => "webPartType",
    }
}

graph_model! {
    pub struct TextWebPart: WebPart = "#microsoft.graph.textWebPart" {
        inner_html / set_inner_html: String => "innerHtml",
    }
}

graph_model! {
    pub struct WebPartData {
        audiences / set_audiences: Vec<String> => "audiences",
        data_version / set_data_version: String => "dataVersion",
        description / set_description: String => "description",
        /// Free-form property bag of the web part.
        properties / set_properties: Value => "properties",
        server_processed_content / set_server_processed_content: ServerProcessedContent => "serverProcessedContent",
        title / set_title: String => "title",
    }
}

graph_model! {
    /// Content rendered by the server for a web part or title area.
    pub struct ServerProcessedContent {
        component_dependencies / set_component_dependencies: Vec<MetaDataKeyStringPair> => "componentDependencies",
        custom_metadata / set_custom_metadata: Vec<MetaDataKeyValuePair> => "customMetadata",
        html_strings / set_html_strings: Vec<MetaDataKeyStringPair> => "htmlStrings",
        image_sources / set_image_sources: Vec<MetaDataKeyStringPair> => "imageSources",
        links / set_links: Vec<MetaDataKeyStringPair> => "links",
        searchable_plain_texts / set_searchable_plain_texts: Vec<MetaDataKeyStringPair> => "searchablePlainTexts",
    }
}

graph_model! {
    pub struct MetaDataKeyStringPair {
        key / set_key: String => "key",
        value / set_value: String => "value",
    }
}

graph_model! {
    pub struct MetaDataKeyValuePair {
        key / set_key: String => "key",
        value / set_value: Value => "value",
    }
}
