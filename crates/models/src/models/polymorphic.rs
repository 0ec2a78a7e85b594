//! Discriminator-resolved views over the hierarchy base types.

use crate::models::{
    BaseItem, BusinessScenarioGroupTarget, BusinessScenarioTaskTargetBase, CanvasLayout,
    DeviceConfiguration, Entity, HorizontalSection, HorizontalSectionColumn, Site, SitePage,
    StandardWebPart, TextWebPart, VerticalSection, WebPart, WindowsWifiConfiguration,
};

polymorphic_model! {
    /// Any entity of the model layer.
    pub enum AnyEntity: Entity = "#microsoft.graph.entity" {
        "#microsoft.graph.baseItem" => BaseItem,
        "#microsoft.graph.site" => Site,
        "#microsoft.graph.sitePage" => SitePage,
        "#microsoft.graph.canvasLayout" => CanvasLayout,
        "#microsoft.graph.horizontalSection" => HorizontalSection,
        "#microsoft.graph.horizontalSectionColumn" => HorizontalSectionColumn,
        "#microsoft.graph.verticalSection" => VerticalSection,
        "#microsoft.graph.webPart" => WebPart,
        "#microsoft.graph.standardWebPart" => StandardWebPart,
        "#microsoft.graph.textWebPart" => TextWebPart,
        "#microsoft.graph.deviceConfiguration" => DeviceConfiguration,
        "#microsoft.graph.windowsWifiConfiguration" => WindowsWifiConfiguration,
    }
}

polymorphic_model! {
    pub enum AnyBaseItem: BaseItem = "#microsoft.graph.baseItem" {
        "#microsoft.graph.site" => Site,
        "#microsoft.graph.sitePage" => SitePage,
    }
}

polymorphic_model! {
    /// A web part as found on a page: text, standard, or an unknown kind.
    pub enum AnyWebPart: WebPart = "#microsoft.graph.webPart" {
        "#microsoft.graph.standardWebPart" => StandardWebPart,
        "#microsoft.graph.textWebPart" => TextWebPart,
    }
}

polymorphic_model! {
    pub enum AnyDeviceConfiguration: DeviceConfiguration = "#microsoft.graph.deviceConfiguration" {
        "#microsoft.graph.windowsWifiConfiguration" => WindowsWifiConfiguration,
    }
}

polymorphic_model! {
    pub enum AnyBusinessScenarioTaskTarget: BusinessScenarioTaskTargetBase = "#microsoft.graph.businessScenarioTaskTargetBase" {
        "#microsoft.graph.businessScenarioGroupTarget" => BusinessScenarioGroupTarget,
    }
}

impl AnyWebPart {
    /// The underlying entity id.
    pub fn id(&self) -> Option<&String> {
        match self {
            AnyWebPart::WebPart(m) => m.id(),
            AnyWebPart::StandardWebPart(m) => m.id(),
            AnyWebPart::TextWebPart(m) => m.id(),
        }
    }

    pub fn as_text(&self) -> Option<&TextWebPart> {
        match self {
            AnyWebPart::TextWebPart(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_standard(&self) -> Option<&StandardWebPart> {
        match self {
            AnyWebPart::StandardWebPart(m) => Some(m),
            _ => None,
        }
    }
}

impl AnyBaseItem {
    pub fn id(&self) -> Option<&String> {
        match self {
            AnyBaseItem::BaseItem(m) => m.id(),
            AnyBaseItem::Site(m) => m.id(),
            AnyBaseItem::SitePage(m) => m.id(),
        }
    }
}
