use crate::enums::{TitleAreaLayoutType, TitleAreaTextAlignmentType};
use crate::models::ServerProcessedContent;

graph_model! {
    /// Title block at the top of a site page.
    pub struct TitleArea {
        alternative_text / set_alternative_text: String => "alternativeText",
        enable_gradient_effect / set_enable_gradient_effect: bool => "enableGradientEffect",
        image_web_url / set_image_web_url: String => "imageWebUrl",
        layout / set_layout: TitleAreaLayoutType => "layout",
        server_processed_content / set_server_processed_content: ServerProcessedContent => "serverProcessedContent",
        show_author / set_show_author: bool => "showAuthor",
        show_published_date / set_show_published_date: bool => "showPublishedDate",
        show_text_block_above_title / set_show_text_block_above_title: bool => "showTextBlockAboveTitle",
        text_above_title / set_text_above_title: String => "textAboveTitle",
        text_alignment / set_text_alignment: TitleAreaTextAlignmentType => "textAlignment",
    }
}
