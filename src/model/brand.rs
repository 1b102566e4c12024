use super::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A business registered on the platform, named `brands/BRAND_ID`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Brand {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: Some(display_name.into()),
            ..Default::default()
        }
    }
}

impl Resource for Brand {
    const KIND: &'static str = "brand";
    const COLLECTION: &'static str = "brands";

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
