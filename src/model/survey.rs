use super::Resource;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// CSAT survey configuration of an agent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyConfig {
    /// Ids of service-provided template questions, e.g.
    /// `GOOGLE_DEFINED_ASSOCIATE_SATISFACTION`
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub template_question_ids: Vec<String>,
    /// Partner-defined questions keyed by locale
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_surveys: BTreeMap<String, CustomSurveyConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomSurveyConfig {
    #[serde(default)]
    pub custom_questions: Vec<SurveyQuestion>,
}

/// A survey question, either template (listed by the service) or custom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyQuestion {
    pub name: String,
    pub question_type: SurveyQuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub response_options: Vec<SurveyResponse>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SurveyQuestion {
    pub fn custom(
        name: impl Into<String>,
        content: impl Into<String>,
        response_options: Vec<SurveyResponse>,
    ) -> Self {
        Self {
            name: name.into(),
            question_type: SurveyQuestionType::PartnerCustomQuestion,
            question_content: Some(content.into()),
            response_options,
            extra: Map::new(),
        }
    }
}

impl Resource for SurveyQuestion {
    const KIND: &'static str = "survey question";
    const COLLECTION: &'static str = "surveyQuestions";

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SurveyQuestionType {
    SurveyQuestionTypeUnspecified,
    GoogleStandardQuestion,
    GoogleTemplateQuestion,
    PartnerCustomQuestion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveyResponse {
    pub content: String,
    pub postback_data: String,
}

impl SurveyResponse {
    pub fn new(content: impl Into<String>, postback_data: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            postback_data: postback_data.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_question_keeps_translations() {
        let wire = json!({
            "name": "GOOGLE_DEFINED_ASSOCIATE_SATISFACTION",
            "questionType": "GOOGLE_TEMPLATE_QUESTION",
            "questionContent": "How satisfied were you?",
            "questionContentTranslations": {"fr": "..."}
        });
        let question: SurveyQuestion = serde_json::from_value(wire.clone()).unwrap();
        assert_eq!(question.question_type, SurveyQuestionType::GoogleTemplateQuestion);
        assert!(question.extra.contains_key("questionContentTranslations"));
        assert_eq!(serde_json::to_value(&question).unwrap(), wire);
    }

    #[test]
    fn test_custom_surveys_serialize_as_locale_map() {
        let config = SurveyConfig {
            template_question_ids: vec!["GOOGLE_DEFINED_ASSOCIATE_SATISFACTION".to_string()],
            custom_surveys: BTreeMap::from([(
                "en".to_string(),
                CustomSurveyConfig {
                    custom_questions: vec![SurveyQuestion::custom(
                        "q1",
                        "Was this useful?",
                        vec![SurveyResponse::new("yes", "yes")],
                    )],
                },
            )]),
        };

        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value["customSurveys"]["en"]["customQuestions"][0]["questionType"],
            "PARTNER_CUSTOM_QUESTION"
        );
        assert_eq!(
            value["customSurveys"]["en"]["customQuestions"][0]["responseOptions"][0]["postbackData"],
            "yes"
        );
    }
}
