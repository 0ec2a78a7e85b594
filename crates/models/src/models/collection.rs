use crate::models::{AnyBaseItem, AnyWebPart, HorizontalSection, HorizontalSectionColumn, Site, SitePage};
use crate::serialization::{
    AdditionalData, AdditionalDataHolder, FieldDeserializers, JsonSerializationWriter, Parsable,
    ParsableFactory, ParseNode, SerializationError,
};

/// Wire name of the next page link of a collection.
pub const ODATA_NEXT_LINK: &str = "@odata.nextLink";
/// Wire name of the total item count of a collection.
pub const ODATA_COUNT: &str = "@odata.count";

/// One page of a collection returned by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionResponse<T> {
    additional_data: AdditionalData,
    odata_count: Option<i64>,
    odata_next_link: Option<String>,
    value: Option<Vec<T>>,
}

pub type SiteCollectionResponse = CollectionResponse<Site>;
pub type SitePageCollectionResponse = CollectionResponse<SitePage>;
pub type BaseItemCollectionResponse = CollectionResponse<AnyBaseItem>;
pub type WebPartCollectionResponse = CollectionResponse<AnyWebPart>;
pub type HorizontalSectionCollectionResponse = CollectionResponse<HorizontalSection>;
pub type HorizontalSectionColumnCollectionResponse = CollectionResponse<HorizontalSectionColumn>;

impl<T> CollectionResponse<T> {
    pub fn new() -> Self {
        Self {
            additional_data: AdditionalData::new(),
            odata_count: None,
            odata_next_link: None,
            value: None,
        }
    }

    pub fn odata_count(&self) -> Option<i64> {
        self.odata_count
    }

    pub fn set_odata_count(&mut self, value: Option<i64>) {
        self.odata_count = value;
    }

    /// Link to the next page; `None` on the last page.
    pub fn odata_next_link(&self) -> Option<&str> {
        self.odata_next_link.as_deref()
    }

    pub fn set_odata_next_link(&mut self, value: Option<String>) {
        self.odata_next_link = value;
    }

    pub fn value(&self) -> Option<&[T]> {
        self.value.as_deref()
    }

    pub fn set_value(&mut self, value: Option<Vec<T>>) {
        self.value = value;
    }

    /// Consumes the page, returning its items.
    pub fn into_value(self) -> Vec<T> {
        self.value.unwrap_or_default()
    }
}

impl<T> Default for CollectionResponse<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> AdditionalDataHolder for CollectionResponse<T> {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}

impl<T: ParsableFactory> Parsable for CollectionResponse<T> {
    fn field_deserializers(&self) -> FieldDeserializers<Self> {
        let mut res = FieldDeserializers::new();
        res.insert(ODATA_COUNT, |m: &mut Self, n: &ParseNode<'_>| {
            if let Some(val) = n.i64_value()? {
                m.odata_count = Some(val);
            }
            Ok(())
        });
        res.insert(ODATA_NEXT_LINK, |m: &mut Self, n: &ParseNode<'_>| {
            if let Some(val) = n.string_value()? {
                m.odata_next_link = Some(val);
            }
            Ok(())
        });
        res.insert("value", |m: &mut Self, n: &ParseNode<'_>| {
            if let Some(val) = n.collection_of_object_values::<T>()? {
                m.value = Some(val);
            }
            Ok(())
        });
        res
    }

    fn serialize(&self, writer: &mut JsonSerializationWriter) -> Result<(), SerializationError> {
        writer.write_i64_value(ODATA_COUNT, self.odata_count)?;
        writer.write_string_value(ODATA_NEXT_LINK, self.odata_next_link.as_deref())?;
        writer.write_collection_of_object_values("value", self.value.as_deref())?;
        writer.write_additional_data(&self.additional_data)
    }
}

impl<T: ParsableFactory> ParsableFactory for CollectionResponse<T> {
    fn create_from_discriminator_value(_node: &ParseNode<'_>) -> Result<Self, SerializationError> {
        Ok(Self::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{object_to_json, parse_value};
    use serde_json::json;
    use test_log::test;

    #[test]
    fn test_page_with_next_link() {
        let payload = json!({
            "@odata.context": "https://graph.microsoft.com/beta/$metadata#sites('root')/pages",
            "@odata.nextLink": "https://graph.microsoft.com/beta/sites/root/pages?$skiptoken=abc",
            "value": [
                {"id": "1", "title": "Home"},
                {"id": "2", "title": "News", "promotionKind": "newsPost"}
            ]
        });

        let page: SitePageCollectionResponse = parse_value(&payload).unwrap();
        assert_eq!(
            page.odata_next_link(),
            Some("https://graph.microsoft.com/beta/sites/root/pages?$skiptoken=abc")
        );
        assert_eq!(page.odata_count(), None);
        let titles: Vec<_> = page
            .value()
            .unwrap()
            .iter()
            .map(|p| p.title().unwrap().as_str())
            .collect();
        assert_eq!(titles, vec!["Home", "News"]);
        assert!(page.additional_data().contains_key("@odata.context"));
    }

    #[test]
    fn test_items_resolve_discriminators() {
        let payload = json!({
            "value": [
                {"@odata.type": "#microsoft.graph.textWebPart", "id": "t", "innerHtml": "<p>hi</p>"},
                {"@odata.type": "#microsoft.graph.standardWebPart", "id": "s", "webPartType": "image"}
            ]
        });

        let page: WebPartCollectionResponse = parse_value(&payload).unwrap();
        let parts = page.into_value();
        assert_eq!(parts.len(), 2);
        assert_eq!(
            parts[0].as_text().unwrap().inner_html().map(String::as_str),
            Some("<p>hi</p>")
        );
        assert_eq!(
            parts[1].as_standard().unwrap().web_part_type().map(String::as_str),
            Some("image")
        );
    }

    #[test]
    fn test_serialized_in_fixed_order() {
        let mut page = SiteCollectionResponse::new();
        page.set_value(Some(vec![]));
        page.set_odata_next_link(Some("next".to_string()));
        page.set_odata_count(Some(0));

        let value = object_to_json(&page).unwrap();
        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["@odata.count", "@odata.nextLink", "value"]);
    }
}
