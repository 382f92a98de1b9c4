//! Typed values returned by the zone caching endpoints.
//!
//! All of these are server-owned: they are decoded from responses and
//! never sent back on requests. Settings share the same wire shape
//! (`{id, value, editable, modified_on}`) and differ only in the type
//! of `value`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Zone cache level.
///
/// The wire values are the closed set `aggressive`, `basic`,
/// `simplified`.
///
/// ## Examples
///
/// ```rust
/// use cis_caching::CacheLevel;
///
/// assert_eq!(CacheLevel::Aggressive.to_string(), "aggressive");
/// let level: CacheLevel = "basic".parse().unwrap();
/// assert_eq!(level, CacheLevel::Basic);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CacheLevel {
    /// Cache everything, ignoring query strings.
    Aggressive,
    /// Cache static content only.
    Basic,
    /// Cache static content, ignoring the query string.
    Simplified,
}

/// On/off value used by the toggle-style settings.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Toggle {
    /// The setting is enabled.
    On,
    /// The setting is disabled.
    Off,
}

/// The cache-level setting for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheLevelSetting {
    /// Setting identifier (`cache_level`).
    #[serde(default)]
    pub id: String,
    /// Current cache level.
    pub value: CacheLevel,
    /// Whether the caller may change this setting.
    #[serde(default)]
    pub editable: bool,
    /// When the setting last changed; absent if never modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// The browser-cache-TTL setting for a zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtlSetting {
    /// Setting identifier (`browser_cache_ttl`).
    #[serde(default)]
    pub id: String,
    /// TTL in seconds.
    #[serde(default)]
    pub value: i64,
    /// Whether the caller may change this setting.
    #[serde(default)]
    pub editable: bool,
    /// When the setting last changed; absent if never modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// An on/off setting for a zone (development mode, query string sort,
/// serve stale content).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToggleSetting {
    /// Setting identifier.
    #[serde(default)]
    pub id: String,
    /// Current on/off value.
    pub value: Toggle,
    /// Whether the caller may change this setting.
    #[serde(default)]
    pub editable: bool,
    /// When the setting last changed; absent if never modified.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_on: Option<DateTime<Utc>>,
}

/// Acknowledgment returned by every purge operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurgeReceipt {
    /// Opaque identifier of the purge operation.
    #[serde(default)]
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_level_wire_names() {
        let json = serde_json::to_string(&CacheLevel::Simplified).unwrap();
        assert_eq!(json, "\"simplified\"");
        let level: CacheLevel = serde_json::from_str("\"aggressive\"").unwrap();
        assert_eq!(level, CacheLevel::Aggressive);
    }

    #[test]
    fn test_ttl_setting_round_trip() {
        let setting = TtlSetting {
            id: "browser_cache_ttl".to_string(),
            value: 14400,
            editable: true,
            modified_on: Some(
                "2014-01-01T05:20:00.12345Z".parse().unwrap(),
            ),
        };
        let json = serde_json::to_string(&setting).unwrap();
        let decoded: TtlSetting = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, setting);
    }

    #[test]
    fn test_toggle_setting_decodes_sample() {
        let setting: ToggleSetting = serde_json::from_str(
            r#"{"id":"development_mode","value":"off","editable":true,"modified_on":"2014-01-01T05:20:00.12345Z"}"#,
        )
        .unwrap();
        assert_eq!(setting.value, Toggle::Off);
        assert!(setting.editable);
    }

    #[test]
    fn test_setting_tolerates_missing_optional_fields() {
        let setting: TtlSetting = serde_json::from_str(r#"{"value": 0}"#).unwrap();
        assert_eq!(setting.id, "");
        assert_eq!(setting.value, 0);
        assert!(!setting.editable);
        assert!(setting.modified_on.is_none());
    }
}
