//! Agent sample
//!
//! Creates the sample agent under an existing brand, then updates it one
//! field group at a time so each update mask can be seen in isolation:
//! display name, logo, welcome message, primary interaction hours and the
//! CSAT survey. Finally lists the brand's agents and deletes the new one.

use super::{assigned_name, data, finish, Outcome, Reporter, SampleSettings};
use crate::api::BizCommClient;
use crate::error::Result;
use crate::model::agent::{BusinessMessagesAgent, TimeOfDay};
use crate::model::common::WelcomeMessage;
use crate::model::Agent;
use std::io::Write;

fn business_messages(agent: &mut Agent) -> &mut BusinessMessagesAgent {
    agent
        .business_messages_agent
        .get_or_insert_with(BusinessMessagesAgent::default)
}

pub async fn run<W: Write>(
    client: &BizCommClient,
    brand_name: &str,
    settings: &SampleSettings,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    client.authenticate().await?;

    reporter.line(&format!("Agent script for brand - {}", brand_name))?;

    reporter.header("Create Agent")?;
    let payload = data::sample_agent(&mut rand::thread_rng());
    let created = client.create(Some(brand_name), &payload).await?;
    reporter.resource(&created)?;
    let name = assigned_name(&created)?;

    settings.pause().await;

    reporter.header("Get Agent Details")?;
    let mut agent: Agent = client.get(&name).await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("Updating Agent Display Name")?;
    agent.display_name = Some(data::UPDATED_AGENT_DISPLAY_NAME.to_string());
    agent = client.patch(&agent, "displayName").await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("Updating Agent Logo URL")?;
    business_messages(&mut agent).logo_url = Some(data::UPDATED_AGENT_LOGO_URL.to_string());
    agent = client
        .patch(&agent, "businessMessagesAgent.logoUrl")
        .await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("Updating Agent Welcome Message")?;
    business_messages(&mut agent)
        .conversational_settings
        .entry(data::LOCALE.to_string())
        .or_default()
        .welcome_message = Some(WelcomeMessage {
        text: data::UPDATED_WELCOME_MESSAGE.to_string(),
    });
    agent = client
        .patch(
            &agent,
            &format!("businessMessagesAgent.conversationalSettings.{}", data::LOCALE),
        )
        .await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("Updating Agent Primary Interaction Available Hours")?;
    let interaction = business_messages(&mut agent)
        .primary_agent_interaction
        .get_or_insert_with(data::primary_interaction);
    if let Some(first) = interaction.hours_mut().and_then(|hours| hours.first_mut()) {
        first.start_time = TimeOfDay::new(8, 0);
    }
    agent = client
        .patch(&agent, "businessMessagesAgent.primaryAgentInteraction")
        .await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("Updating CSAT Survey")?;
    business_messages(&mut agent).survey_config = Some(data::updated_survey_config());
    agent = client
        .patch(&agent, "businessMessagesAgent.surveyConfig")
        .await?;
    reporter.resource(&agent)?;

    settings.pause().await;

    reporter.header("List Agents")?;
    let agents: Vec<Agent> = client.list(Some(brand_name)).await?;
    reporter.resource(&agents)?;

    // Only unverified agents can be deleted
    finish(client, settings, reporter, "Deleting Agent", &name).await
}
