//! Wire enumerations.
//!
//! Members travel as camelCase strings; parsing an unknown string fails with
//! [`SerializationError::UnknownEnumValue`](crate::serialization::SerializationError).

graph_enum! {
    /// Layout of a SharePoint page.
    pub enum PageLayoutType {
        MicrosoftReserved,
        Article,
        Home,
        UnknownFutureValue,
    }
}

graph_enum! {
    /// Whether a page is a regular page or a news post.
    pub enum PagePromotionType {
        MicrosoftReserved,
        Page,
        NewsPost,
        UnknownFutureValue,
    }
}

graph_enum! {
    pub enum TitleAreaLayoutType {
        ImageAndTitle,
        Plain,
        ColorBlock,
        Overlap,
        UnknownFutureValue,
    }
}

graph_enum! {
    pub enum TitleAreaTextAlignmentType {
        Left,
        Center,
        UnknownFutureValue,
    }
}

graph_enum! {
    /// Background emphasis of a page section.
    pub enum SectionEmphasisType {
        None,
        Neutral,
        Soft,
        Strong,
        UnknownFutureValue,
    }
}

graph_enum! {
    pub enum HorizontalSectionLayoutType {
        None,
        OneColumn,
        TwoColumns,
        ThreeColumns,
        OneThirdLeftColumn,
        OneThirdRightColumn,
        FullWidth,
        UnknownFutureValue,
    }
}

graph_enum! {
    /// Kind of target a business scenario task is assigned to.
    pub enum PlannerTaskTargetKind {
        Group,
        UnknownFutureValue,
    }
}

graph_enum! {
    pub enum MeteredConnectionLimitType {
        Unrestricted,
        Fixed,
        Variable,
    }
}

graph_enum! {
    /// Proxy mode of a Wi-Fi profile.
    pub enum WiFiProxySetting {
        None,
        Manual,
        Automatic,
    }
}

graph_enum! {
    pub enum WiFiSecurityType {
        Open,
        WpaPersonal,
        WpaEnterprise,
        Wep,
        // digits do not start a new word in the camelCase conversion
        #[strum(to_string = "wpa2Personal")]
        Wpa2Personal,
        #[strum(to_string = "wpa2Enterprise")]
        Wpa2Enterprise,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::serialization::{GraphEnum, SerializationError, serialize_enum_values};
    use std::str::FromStr;
    use strum::IntoEnumIterator;
    use test_log::test;

    #[test]
    fn test_display_uses_wire_names() {
        assert_eq!(PageLayoutType::MicrosoftReserved.to_string(), "microsoftReserved");
        assert_eq!(
            HorizontalSectionLayoutType::OneThirdLeftColumn.to_string(),
            "oneThirdLeftColumn"
        );
        assert_eq!(WiFiSecurityType::Wpa2Personal.to_string(), "wpa2Personal");
        assert_eq!(WiFiSecurityType::Wpa2Enterprise.as_wire_str(), "wpa2Enterprise");
        assert_eq!(PlannerTaskTargetKind::Group.as_wire_str(), "group");
    }

    #[test]
    fn test_every_member_parses_back() {
        for value in WiFiSecurityType::iter() {
            assert_eq!(WiFiSecurityType::from_str(&value.to_string()), Ok(value));
        }
        for value in HorizontalSectionLayoutType::iter() {
            assert_eq!(
                HorizontalSectionLayoutType::parse_wire(value.as_wire_str()),
                Ok(value)
            );
        }
    }

    #[test]
    fn test_unknown_member_is_rejected() {
        assert_eq!(
            SectionEmphasisType::parse_wire("loud"),
            Err(SerializationError::UnknownEnumValue {
                type_name: "SectionEmphasisType",
                value: "loud".to_string()
            })
        );
        // lookups are case sensitive
        assert!(PagePromotionType::parse_wire("NewsPost").is_err());
    }

    #[test]
    fn test_serialize_values_keeps_order() {
        assert_eq!(
            serialize_enum_values(&[WiFiProxySetting::Manual, WiFiProxySetting::None]),
            vec!["manual".to_string(), "none".to_string()]
        );
    }
}
