//! Literal sample payloads
//!
//! The phone number and domain of the non-local config must be globally
//! unique across all agents, so they are randomised per run. Replace them
//! with the brand's real values outside of a sample.

use crate::model::agent::{
    BusinessMessagesAgent, ContactMethod, ContactOption, DayOfWeek, EntryPoint, EntryPointConfig,
    Hours, NonLocalConfig, SupportedAgentInteraction, TimeOfDay,
};
use crate::model::common::{
    ConversationStarter, ConversationalSetting, OfflineMessage, Phone, PrivacyPolicy, Suggestion,
    WelcomeMessage,
};
use crate::model::location::{LocationEntryPoint, LocationEntryPointConfig};
use crate::model::survey::{CustomSurveyConfig, SurveyConfig, SurveyQuestion, SurveyResponse};
use crate::model::{Agent, Brand, Location};
use rand::Rng;
use std::collections::BTreeMap;

pub const BRAND_DISPLAY_NAME: &str = "Test Brand";
pub const UPDATED_BRAND_DISPLAY_NAME: &str = "New Test Brand Name";

pub const AGENT_DISPLAY_NAME: &str = "Test Agent";
pub const UPDATED_AGENT_DISPLAY_NAME: &str = "Newly Edited Agent Test";
pub const AGENT_LOGO_URL: &str = "https://storage.googleapis.com/sample-logos/google-logo.png";
pub const UPDATED_AGENT_LOGO_URL: &str =
    "https://developers.google.com/business-communications/images/logo-guidelines/do-logo-alt.png";
pub const UPDATED_WELCOME_MESSAGE: &str = "The updated welcome message!";

/// Googleplex
pub const PLACE_ID: &str = "ChIJj61dQgK6j4AR4GeTYWZsKWw";

pub const LOCALE: &str = "en";

const TIME_ZONE: &str = "America/Los_Angeles";

pub fn sample_brand() -> Brand {
    Brand::new(BRAND_DISPLAY_NAME)
}

/// Monday to Friday, 9:00 to 17:00 Pacific
pub fn business_hours() -> Vec<Hours> {
    vec![Hours {
        start_day: DayOfWeek::Monday,
        start_time: TimeOfDay::new(9, 0),
        end_day: DayOfWeek::Friday,
        end_time: TimeOfDay::new(17, 0),
        time_zone: TIME_ZONE.to_string(),
    }]
}

/// Four reply chips and one open-URL chip
pub fn conversation_starters() -> Vec<ConversationStarter> {
    let mut starters: Vec<ConversationStarter> = (1..=4)
        .map(|i| ConversationStarter {
            suggestion: Suggestion::reply(format!("Chip #{}", i), format!("chip_{}", i)),
        })
        .collect();

    starters.push(ConversationStarter {
        suggestion: Suggestion::open_url("Chip #5", "chip_5", "https://www.google.com"),
    });

    starters
}

fn conversational_settings(offline_text: &str) -> BTreeMap<String, ConversationalSetting> {
    BTreeMap::from([(
        LOCALE.to_string(),
        ConversationalSetting {
            privacy_policy: Some(PrivacyPolicy {
                url: "https://www.company.com/privacy".to_string(),
            }),
            welcome_message: Some(WelcomeMessage {
                text: "Welcome! How can I help?".to_string(),
            }),
            offline_message: Some(OfflineMessage {
                text: offline_text.to_string(),
            }),
            conversation_starters: conversation_starters(),
        },
    )])
}

fn thumbs() -> Vec<SurveyResponse> {
    vec![SurveyResponse::new("👍", "yes"), SurveyResponse::new("👎", "no")]
}

fn survey_config(template_question_ids: &[&str], questions: Vec<SurveyQuestion>) -> SurveyConfig {
    SurveyConfig {
        template_question_ids: template_question_ids.iter().map(|s| s.to_string()).collect(),
        custom_surveys: BTreeMap::from([(
            LOCALE.to_string(),
            CustomSurveyConfig {
                custom_questions: questions,
            },
        )]),
    }
}

/// Survey the agent is created with
pub fn initial_survey_config() -> SurveyConfig {
    survey_config(
        &["GOOGLE_DEFINED_ASSOCIATE_SATISFACTION"],
        vec![SurveyQuestion::custom(
            "Question Name 1",
            "Did this agent do the best that it could?",
            thumbs(),
        )],
    )
}

/// Survey the agent sample switches to: two custom questions and two
/// template questions
pub fn updated_survey_config() -> SurveyConfig {
    let stars = (1..=5)
        .map(|n| SurveyResponse::new("⭐️".repeat(n), format!("{}-star", n)))
        .collect();

    survey_config(
        &[
            "GOOGLE_DEFINED_ASSOCIATE_SATISFACTION",
            "GOOGLE_DEFINED_CUSTOMER_EFFORT_ALTERNATE",
        ],
        vec![
            SurveyQuestion::custom(
                "Question Name 1",
                "Does a custom question yield better survey results?",
                thumbs(),
            ),
            SurveyQuestion::custom("Question Name 2", "How would you rate this agent?", stars),
        ],
    )
}

pub fn primary_interaction() -> SupportedAgentInteraction {
    SupportedAgentInteraction::bot(business_hours())
}

/// `+1` followed by ten digits
pub fn random_phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("+1{}", rng.gen_range(1_000_000_000u64..=9_999_999_999))
}

/// `https://www.` + ten lowercase letters + `.com`
pub fn random_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let letters: String = (0..10).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
    format!("https://www.{}.com", letters)
}

pub fn sample_agent<R: Rng + ?Sized>(rng: &mut R) -> Agent {
    let non_local_config = NonLocalConfig {
        call_deflection_phone_numbers: vec![Phone::new(random_phone_number(rng))],
        contact_option: Some(ContactOption {
            options: vec![ContactMethod::WebChat, ContactMethod::Faqs],
            url: "https://www.example-url.com".to_string(),
        }),
        enabled_domains: vec![random_url(rng)],
        phone_number: Some(Phone::new("+12223335555")),
        region_codes: vec!["CA".to_string(), "US".to_string()],
    };

    Agent {
        display_name: Some(AGENT_DISPLAY_NAME.to_string()),
        business_messages_agent: Some(BusinessMessagesAgent {
            default_locale: Some(LOCALE.to_string()),
            custom_agent_id: Some("My custom agent ID".to_string()),
            phone: Some(Phone::new("+12223334444")),
            logo_url: Some(AGENT_LOGO_URL.to_string()),
            primary_agent_interaction: Some(primary_interaction()),
            additional_agent_interactions: vec![SupportedAgentInteraction::human(business_hours())],
            conversational_settings: conversational_settings(
                "We are currently offline, please leave a message and we will get back to you as soon as possible.",
            ),
            non_local_config: Some(non_local_config),
            entry_point_configs: vec![
                EntryPointConfig {
                    allowed_entry_point: EntryPoint::Location,
                },
                EntryPointConfig {
                    allowed_entry_point: EntryPoint::NonLocal,
                },
            ],
            survey_config: Some(initial_survey_config()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn sample_location(agent_name: &str) -> Location {
    Location {
        agent: Some(agent_name.to_string()),
        place_id: Some(PLACE_ID.to_string()),
        conversational_settings: conversational_settings(
            "This location is currently offline, please leave a message and we will get back to you as soon as possible.",
        ),
        location_entry_point_configs: vec![
            LocationEntryPointConfig {
                allowed_entry_point: LocationEntryPoint::Placesheet,
            },
            LocationEntryPointConfig {
                allowed_entry_point: LocationEntryPoint::MapsTactile,
            },
        ],
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_phone_number_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let number = random_phone_number(&mut rng);
            assert_eq!(number.len(), 12);
            assert!(number.starts_with("+1"));
            assert!(number[2..].chars().all(|c| c.is_ascii_digit()));
            assert_ne!(&number[2..3], "0");
        }
    }

    #[test]
    fn test_random_url_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let url = random_url(&mut rng);
        let host = url
            .strip_prefix("https://www.")
            .and_then(|rest| rest.strip_suffix(".com"))
            .unwrap();
        assert_eq!(host.len(), 10);
        assert!(host.chars().all(|c| c.is_ascii_lowercase()));
    }

    #[test]
    fn test_sample_agent_wire_shape() {
        let agent = sample_agent(&mut StdRng::seed_from_u64(1));
        let value = serde_json::to_value(&agent).unwrap();
        let bma = &value["businessMessagesAgent"];

        assert!(value.get("name").is_none());
        assert_eq!(value["displayName"], "Test Agent");
        assert_eq!(bma["primaryAgentInteraction"]["interactionType"], "BOT");
        assert_eq!(
            bma["primaryAgentInteraction"]["botRepresentative"]["botMessagingAvailability"]["hours"][0]["startDay"],
            "MONDAY"
        );
        assert_eq!(
            bma["conversationalSettings"]["en"]["conversationStarters"]
                .as_array()
                .unwrap()
                .len(),
            5
        );
        assert_eq!(bma["nonLocalConfig"]["regionCodes"], serde_json::json!(["CA", "US"]));
        assert_eq!(bma["entryPointConfigs"][1]["allowedEntryPoint"], "NON_LOCAL");
    }

    #[test]
    fn test_updated_survey_has_star_scale() {
        let config = updated_survey_config();
        let questions = &config.custom_surveys[LOCALE].custom_questions;
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[1].response_options.len(), 5);
        assert_eq!(questions[1].response_options[4].postback_data, "5-star");
        assert_eq!(config.template_question_ids.len(), 2);
    }

    #[test]
    fn test_sample_location_references_agent() {
        let location = sample_location("brands/1/agents/2");
        assert_eq!(location.agent.as_deref(), Some("brands/1/agents/2"));
        assert_eq!(location.place_id.as_deref(), Some(PLACE_ID));
        assert!(location.name.is_none());
    }
}
