use chrono::{DateTime, FixedOffset};

use crate::enums::{MeteredConnectionLimitType, WiFiProxySetting, WiFiSecurityType};
use crate::models::Entity;

graph_model! {
    /// Device configuration profile managed by Intune.
    pub struct DeviceConfiguration: Entity = "#microsoft.graph.deviceConfiguration" {
        created_date_time / set_created_date_time: DateTime<FixedOffset> => "createdDateTime",
        description / set_description: String => "description",
        display_name / set_display_name: String => "displayName",
        last_modified_date_time / set_last_modified_date_time: DateTime<FixedOffset> => "lastModifiedDateTime",
        role_scope_tag_ids / set_role_scope_tag_ids: Vec<String> => "roleScopeTagIds",
        supports_scope_tags / set_supports_scope_tags: bool => "supportsScopeTags",
        /// Incremented on every change to the profile.
        version / set_version: i32 => "version",
    }
}

graph_model! {
    /// Wi-Fi profile for Windows devices.
    pub struct WindowsWifiConfiguration: DeviceConfiguration = "#microsoft.graph.windowsWifiConfiguration" {
        connect_automatically / set_connect_automatically: bool => "connectAutomatically",
        connect_to_preferred_network / set_connect_to_preferred_network: bool => "connectToPreferredNetwork",
        connect_when_network_name_is_hidden / set_connect_when_network_name_is_hidden: bool => "connectWhenNetworkNameIsHidden",
        force_fips_compliance / set_force_fips_compliance: bool => "forceFIPSCompliance",
        metered_connection_limit / set_metered_connection_limit: MeteredConnectionLimitType => "meteredConnectionLimit",
        network_name / set_network_name: String => "networkName",
        pre_shared_key / set_pre_shared_key: String => "preSharedKey",
        proxy_automatic_configuration_url / set_proxy_automatic_configuration_url: String => "proxyAutomaticConfigurationUrl",
        proxy_manual_address / set_proxy_manual_address: String => "proxyManualAddress",
        proxy_manual_port / set_proxy_manual_port: i32 => "proxyManualPort",
        proxy_setting / set_proxy_setting: WiFiProxySetting => "proxySetting",
        ssid / set_ssid: String => "ssid",
        wifi_security_type / set_wifi_security_type: WiFiSecurityType => "wifiSecurityType",
    }
}
