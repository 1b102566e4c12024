use super::common::ConversationalSetting;
use super::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A physical location of a brand, served by one agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
    /// Agent name in `brands/BRAND_ID/agents/AGENT_ID` form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conversational_settings: BTreeMap<String, ConversationalSetting>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub location_entry_point_configs: Vec<LocationEntryPointConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Location {
    const KIND: &'static str = "location";
    const COLLECTION: &'static str = "locations";

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationEntryPointConfig {
    pub allowed_entry_point: LocationEntryPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationEntryPoint {
    EntryPointUnspecified,
    Placesheet,
    MapsTactile,
}
