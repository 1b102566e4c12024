use super::common::{ConversationalSetting, Phone};
use super::survey::SurveyConfig;
use super::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A messaging presence owned by a brand, named
/// `brands/BRAND_ID/agents/AGENT_ID`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_messages_agent: Option<BusinessMessagesAgent>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Resource for Agent {
    const KIND: &'static str = "agent";
    const COLLECTION: &'static str = "agents";

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessMessagesAgent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_agent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_agent_interaction: Option<SupportedAgentInteraction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_agent_interactions: Vec<SupportedAgentInteraction>,
    /// Keyed by locale, e.g. `en`
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conversational_settings: BTreeMap<String, ConversationalSetting>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_local_config: Option<NonLocalConfig>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub entry_point_configs: Vec<EntryPointConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub survey_config: Option<SurveyConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportedAgentInteraction {
    pub interaction_type: InteractionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bot_representative: Option<BotRepresentative>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub human_representative: Option<HumanRepresentative>,
}

impl SupportedAgentInteraction {
    pub fn bot(hours: Vec<Hours>) -> Self {
        Self {
            interaction_type: InteractionType::Bot,
            bot_representative: Some(BotRepresentative {
                bot_messaging_availability: MessagingAvailability { hours },
            }),
            human_representative: None,
        }
    }

    pub fn human(hours: Vec<Hours>) -> Self {
        Self {
            interaction_type: InteractionType::Human,
            bot_representative: None,
            human_representative: Some(HumanRepresentative {
                human_messaging_availability: MessagingAvailability { hours },
            }),
        }
    }

    /// Availability hours of whichever representative this interaction has
    pub fn hours_mut(&mut self) -> Option<&mut Vec<Hours>> {
        if let Some(bot) = self.bot_representative.as_mut() {
            return Some(&mut bot.bot_messaging_availability.hours);
        }
        self.human_representative
            .as_mut()
            .map(|human| &mut human.human_messaging_availability.hours)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InteractionType {
    InteractionTypeUnspecified,
    Bot,
    Human,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotRepresentative {
    pub bot_messaging_availability: MessagingAvailability,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanRepresentative {
    pub human_messaging_availability: MessagingAvailability,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessagingAvailability {
    #[serde(default)]
    pub hours: Vec<Hours>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hours {
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub time_zone: String,
    pub start_day: DayOfWeek,
    pub end_day: DayOfWeek,
}

/// Wall-clock time; zero fields are omitted on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeOfDay {
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub seconds: u32,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub nanos: u32,
}

impl TimeOfDay {
    pub fn new(hours: u32, minutes: u32) -> Self {
        Self {
            hours,
            minutes,
            ..Default::default()
        }
    }
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    DayOfWeekUnspecified,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Launch configuration for entry points outside of location surfaces
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NonLocalConfig {
    /// Must be globally unique across agents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub call_deflection_phone_numbers: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_option: Option<ContactOption>,
    /// Must be globally unique across agents
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enabled_domains: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<Phone>,
    /// CLDR region codes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub region_codes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactOption {
    #[serde(default)]
    pub options: Vec<ContactMethod>,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactMethod {
    ContactOptionUnspecified,
    WebChat,
    Phone,
    Email,
    Faqs,
    Twitter,
    Whatsapp,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPointConfig {
    pub allowed_entry_point: EntryPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryPoint {
    EntryPointUnspecified,
    Location,
    NonLocal,
}
