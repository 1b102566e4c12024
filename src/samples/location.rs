//! Location sample: create a location for an agent, then get, update, list
//! and delete it. Locations live under the agent's brand.

use super::{assigned_name, data, finish, Outcome, Reporter, SampleSettings};
use crate::api::{names, BizCommClient};
use crate::error::{Error, Result};
use crate::model::Location;
use std::io::Write;

pub async fn run<W: Write>(
    client: &BizCommClient,
    agent_name: &str,
    settings: &SampleSettings,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    let brand_name = names::brand_of_agent(agent_name).ok_or_else(|| {
        Error::Request(format!(
            "{} is not of the form brands/BRAND_ID/agents/AGENT_ID",
            agent_name
        ))
    })?;

    client.authenticate().await?;

    reporter.header(&format!("Location script for agent - {}", agent_name))?;

    reporter.header("Create Location")?;
    let created = client
        .create(Some(brand_name), &data::sample_location(agent_name))
        .await?;
    reporter.resource(&created)?;
    let name = assigned_name(&created)?;

    settings.pause().await;

    reporter.header("Get Location Details")?;
    let mut location: Location = client.get(&name).await?;
    reporter.resource(&location)?;

    settings.pause().await;

    // Re-associates the location with the agent; the service rejects agents
    // that do not exist or belong to another brand
    reporter.header("Updating Location")?;
    location.agent = Some(agent_name.to_string());
    let updated = client.patch(&location, "agent").await?;
    reporter.resource(&updated)?;

    settings.pause().await;

    reporter.header("List Locations")?;
    let locations: Vec<Location> = client.list(Some(brand_name)).await?;
    reporter.resource(&locations)?;

    finish(client, settings, reporter, "Deleting Location", &name).await
}
