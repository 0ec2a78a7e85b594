use graph_beta_models::serialization::{
    AdditionalDataHolder, Parsable, SerializationError, object_to_json, parse_object, parse_value,
};
use graph_beta_models::*;
use serde_json::{Value, json};
use test_log::test;

fn page_payload() -> Value {
    json!({
        "@odata.type": "#microsoft.graph.sitePage",
        "@odata.etag": "\"{A1},3\"",
        "id": "0f6a0c2b-6b1c-4d1b-9e54-3f1c2c0a7e11",
        "name": "Home.aspx",
        "webUrl": "SitePages/Home.aspx",
        "createdDateTime": "2022-12-01T09:30:00Z",
        "lastModifiedDateTime": "2022-12-02T17:45:10.25+01:00",
        "createdBy": {"user": {"displayName": "Adele Vance", "id": "u1"}},
        "pageLayout": "article",
        "promotionKind": "page",
        "showComments": true,
        "showRecommendedPages": false,
        "title": "Home",
        "publishingState": {"level": "published", "versionId": "3.0"},
        "reactions": {"likeCount": 4},
        "titleArea": {
            "layout": "colorBlock",
            "textAlignment": "center",
            "showAuthor": true,
            "serverProcessedContent": {
                "htmlStrings": [{"key": "title", "value": "<b>Home</b>"}],
                "customMetadata": [{"key": "imageSource", "value": {"width": 400}}]
            }
        },
        "canvasLayout": {
            "horizontalSections": [
                {
                    "id": "1",
                    "layout": "twoColumns",
                    "emphasis": "soft",
                    "columns": [
                        {
                            "id": "1",
                            "width": 6,
                            "webparts": [
                                {
                                    "@odata.type": "#microsoft.graph.textWebPart",
                                    "id": "tw-1",
                                    "innerHtml": "<p>Welcome</p>"
                                }
                            ]
                        },
                        {
                            "id": "2",
                            "width": 6,
                            "webparts": [
                                {
                                    "@odata.type": "#microsoft.graph.standardWebPart",
                                    "id": "sw-1",
                                    "webPartType": "d1d91016-032f-456d-98a4-721247c305e8",
                                    "data": {
                                        "dataVersion": "1.9",
                                        "title": "Image",
                                        "audiences": ["all"],
                                        "properties": {"imageSourceType": 2, "altText": ""}
                                    }
                                }
                            ]
                        }
                    ]
                }
            ],
            "verticalSection": {
                "emphasis": "none",
                "webparts": [
                    {"@odata.type": "#microsoft.graph.sharepointEmbedWebPart", "id": "x-1", "embedCode": "<iframe/>"}
                ]
            }
        }
    })
}

#[test]
fn test_parse_site_page_with_canvas_layout() {
    let page: SitePage = parse_value(&page_payload()).unwrap();

    assert_eq!(page.odata_type(), Some("#microsoft.graph.sitePage"));
    assert_eq!(page.title().map(String::as_str), Some("Home"));
    assert_eq!(page.name().map(String::as_str), Some("Home.aspx"));
    assert_eq!(page.page_layout(), Some(&PageLayoutType::Article));
    assert_eq!(page.promotion_kind(), Some(&PagePromotionType::Page));
    assert_eq!(page.show_comments(), Some(&true));
    assert_eq!(page.show_recommended_pages(), Some(&false));
    assert!(page.is_published());
    assert_eq!(page.reactions().unwrap().like_count(), Some(&4));
    assert_eq!(page.reactions().unwrap().comment_count(), None);
    assert_eq!(
        page.created_by()
            .and_then(IdentitySet::user)
            .and_then(Identity::display_name)
            .map(String::as_str),
        Some("Adele Vance")
    );
    assert_eq!(
        page.last_modified_date_time().unwrap().to_rfc3339(),
        "2022-12-02T17:45:10.250+01:00"
    );

    let title_area = page.title_area().unwrap();
    assert_eq!(title_area.layout(), Some(&TitleAreaLayoutType::ColorBlock));
    assert_eq!(title_area.text_alignment(), Some(&TitleAreaTextAlignmentType::Center));
    let content = title_area.server_processed_content().unwrap();
    assert_eq!(
        content.html_strings().unwrap()[0].value().map(String::as_str),
        Some("<b>Home</b>")
    );
    assert_eq!(
        content.custom_metadata().unwrap()[0].value(),
        Some(&json!({"width": 400}))
    );

    let layout = page.canvas_layout().unwrap();
    let section = &layout.horizontal_sections().unwrap()[0];
    assert_eq!(section.layout(), Some(&HorizontalSectionLayoutType::TwoColumns));
    assert_eq!(section.emphasis(), Some(&SectionEmphasisType::Soft));
    assert_eq!(section.columns().unwrap()[1].width(), Some(&6));

    let parts = page.all_web_parts();
    assert_eq!(parts.len(), 3);
    assert_eq!(
        parts[0].as_text().unwrap().inner_html().map(String::as_str),
        Some("<p>Welcome</p>")
    );
    let image = parts[1].as_standard().unwrap();
    let data = image.data().unwrap();
    assert_eq!(data.audiences(), Some(&vec!["all".to_string()]));
    assert_eq!(data.properties(), Some(&json!({"imageSourceType": 2, "altText": ""})));

    // unknown web part kinds fall back to the base type and keep their payload
    match parts[2] {
        AnyWebPart::WebPart(unknown) => {
            assert_eq!(unknown.odata_type(), Some("#microsoft.graph.sharepointEmbedWebPart"));
            assert_eq!(unknown.id().map(String::as_str), Some("x-1"));
            assert_eq!(unknown.additional_data()["embedCode"], json!("<iframe/>"));
        }
        other => panic!("expected the base web part, got {other:?}"),
    }
}

#[test]
fn test_round_trip_keeps_unknown_properties() {
    let payload = page_payload();
    let page: SitePage = parse_value(&payload).unwrap();

    assert_eq!(page.additional_data()["@odata.etag"], json!("\"{A1},3\""));

    let written = object_to_json(&page).unwrap();
    let reparsed: SitePage = parse_value(&written).unwrap();
    assert_eq!(reparsed, page);

    let vertical = &written["canvasLayout"]["verticalSection"]["webparts"][0];
    assert_eq!(vertical["embedCode"], json!("<iframe/>"));
    assert_eq!(
        vertical["@odata.type"],
        json!("#microsoft.graph.sharepointEmbedWebPart")
    );
    assert_eq!(written["createdDateTime"], json!("2022-12-01T09:30:00Z"));
}

#[test]
fn test_serialization_order() {
    let mut page = SitePage::new();
    page.set_title(Some("Home".to_string()));
    page.set_show_comments(Some(true));
    page.set_id(Some("p1".to_string()));
    page.set_web_url(Some("SitePages/Home.aspx".to_string()));
    page.additional_data_mut()
        .insert("@odata.etag".to_string(), json!("1"));
    // typed fields win over a colliding additional data entry
    page.additional_data_mut()
        .insert("title".to_string(), json!("Shadow"));

    let written = object_to_json(&page).unwrap();
    let keys: Vec<_> = written.as_object().unwrap().keys().cloned().collect();
    assert_eq!(
        keys,
        vec!["@odata.type", "id", "webUrl", "showComments", "title", "@odata.etag"]
    );
    assert_eq!(written["title"], json!("Home"));
}

#[test]
fn test_null_leaves_property_unset() {
    let page: SitePage = parse_object(br#"{"title": null, "showComments": null, "extra": null}"#).unwrap();
    assert_eq!(page.title(), None);
    assert_eq!(page.show_comments(), None);
    assert_eq!(page.additional_data()["extra"], Value::Null);
    assert!(!page.additional_data().contains_key("title"));
}

#[test]
fn test_wrong_wire_type_fails() {
    let error = parse_value::<SitePage>(&json!({"title": 42})).unwrap_err();
    assert_eq!(
        error.root_cause(),
        &SerializationError::TypeMismatch {
            expected: "string",
            found: "number"
        }
    );
    assert_eq!(error.field_path(), Some("title".to_string()));

    let error = parse_value::<SitePage>(&json!({"titleArea": {"showAuthor": "yes"}})).unwrap_err();
    assert_eq!(error.field_path(), Some("titleArea.showAuthor".to_string()));

    let error = parse_value::<SitePage>(&json!({"pageLayout": "landing"})).unwrap_err();
    assert_eq!(
        error.root_cause(),
        &SerializationError::UnknownEnumValue {
            type_name: "PageLayoutType",
            value: "landing".to_string()
        }
    );

    let error = parse_value::<SitePage>(&json!({
        "canvasLayout": {"horizontalSections": [{"columns": [{"width": "wide"}]}]}
    }))
    .unwrap_err();
    assert_eq!(
        error.field_path(),
        Some("canvasLayout.horizontalSections.0.columns.0.width".to_string())
    );

    assert!(parse_value::<SitePage>(&json!("page")).is_err());
    assert_eq!(
        parse_value::<SitePage>(&Value::Null),
        Err(SerializationError::MissingObject)
    );
}

#[test]
fn test_field_deserializers_include_base_properties() {
    let page = SitePage::new();
    let fields = page.field_deserializers();
    for name in ["@odata.type", "id", "eTag", "parentReference", "canvasLayout", "webParts"] {
        assert!(fields.contains(name), "missing {name}");
    }
    assert!(!fields.contains("@odata.etag"));

    let entity = Entity::new();
    assert_eq!(entity.field_deserializers().wire_names(), vec!["@odata.type", "id"]);
}

#[test]
fn test_serde_bridge() {
    let page: SitePage = serde_json::from_value(json!({"title": "Bridge", "custom": 1})).unwrap();
    assert_eq!(page.title().map(String::as_str), Some("Bridge"));
    assert_eq!(
        serde_json::to_value(&page).unwrap(),
        json!({"@odata.type": "#microsoft.graph.sitePage", "title": "Bridge", "custom": 1})
    );

    let error = serde_json::from_value::<SitePage>(json!({"showComments": "no"})).unwrap_err();
    assert!(error.to_string().contains("showComments"));

    assert_eq!(
        serde_json::to_value(WiFiSecurityType::Wpa2Enterprise).unwrap(),
        json!("wpa2Enterprise")
    );
    assert!(serde_json::from_value::<PageLayoutType>(json!("landing")).is_err());
}

#[test]
fn test_site_with_expanded_pages() {
    let site: Site = parse_value(&json!({
        "id": "contoso.sharepoint.com,2C712604-1370-44E7-A1F5-426573FDA80A,2D2244C3-251A-49EA-93A8-39E1C3A060FE",
        "displayName": "Contoso",
        "root": {},
        "siteCollection": {"hostname": "contoso.sharepoint.com", "root": {}},
        "sharepointIds": {"siteId": "2C712604-1370-44E7-A1F5-426573FDA80A"},
        "pages": [{"id": "1", "title": "Home"}]
    }))
    .unwrap();

    assert!(site.is_root());
    assert_eq!(site.display_name().map(String::as_str), Some("Contoso"));
    assert_eq!(
        site.site_collection().unwrap().hostname().map(String::as_str),
        Some("contoso.sharepoint.com")
    );
    let pages = site.pages().unwrap();
    assert_eq!(pages[0].odata_type(), Some("#microsoft.graph.sitePage"));
    assert_eq!(pages[0].title().map(String::as_str), Some("Home"));
}
