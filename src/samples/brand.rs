//! Brand sample: create, get, rename, list, and delete a brand

use super::{assigned_name, data, finish, Outcome, Reporter, SampleSettings};
use crate::api::BizCommClient;
use crate::error::Result;
use crate::model::Brand;
use std::io::Write;

pub async fn run<W: Write>(
    client: &BizCommClient,
    settings: &SampleSettings,
    reporter: &mut Reporter<W>,
) -> Result<Outcome> {
    client.authenticate().await?;

    reporter.header("Create Brand")?;
    let created = client.create(None, &data::sample_brand()).await?;
    reporter.resource(&created)?;
    let name = assigned_name(&created)?;

    settings.pause().await;

    reporter.header("Get Brand Details")?;
    let mut brand: Brand = client.get(&name).await?;
    reporter.resource(&brand)?;

    settings.pause().await;

    reporter.header("Updating Brand")?;
    brand.display_name = Some(data::UPDATED_BRAND_DISPLAY_NAME.to_string());
    let updated = client.patch(&brand, "displayName").await?;
    reporter.resource(&updated)?;

    settings.pause().await;

    reporter.header("List Brands")?;
    let brands: Vec<Brand> = client.list(None).await?;
    reporter.resource(&brands)?;

    // Deleting a brand also deletes its agents; only brands without verified
    // agents can be deleted
    finish(client, settings, reporter, "Deleting Brand", &name).await
}
