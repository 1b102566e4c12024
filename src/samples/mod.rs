//! Sample drivers
//!
//! Each driver runs one fixed sequence of calls against the API, printing a
//! header and the service's response for every step. Drivers never retry and
//! never clean up after a failure; whatever was created stays on the server.
//!
//! - [`brand`] - create, get, update, list and delete a brand
//! - [`agent`] - create an agent under a brand and walk through its updates
//! - [`location`] - create a location for an agent
//! - [`survey_questions`] - list template CSAT questions
//! - [`data`] - the literal sample payloads

pub mod agent;
pub mod brand;
pub mod data;
pub mod location;
pub mod survey_questions;

use crate::api::BizCommClient;
use crate::error::{Error, Result};
use crate::model::Resource;
use serde::Serialize;
use std::io::Write;
use std::time::Duration;

/// Literal argument that keeps the created resource
pub const NO_DELETE: &str = "NO-DELETE";

const HEADER_WIDTH: usize = 60;

/// Knobs shared by every driver
#[derive(Debug, Clone)]
pub struct SampleSettings {
    /// Wait between steps
    pub pause: Duration,
    /// Delete the created resource at the end
    pub delete: bool,
}

impl SampleSettings {
    async fn pause(&self) {
        if !self.pause.is_zero() {
            tokio::time::sleep(self.pause).await;
        }
    }
}

/// What a driver left behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Name of the resource the run created
    pub name: String,
    /// Whether it was deleted again
    pub deleted: bool,
}

/// Writes step headers and responses
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn header(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(HEADER_WIDTH);
        writeln!(self.out)?;
        writeln!(self.out, "{}", rule)?;
        writeln!(self.out, "  {}", title)?;
        writeln!(self.out, "{}", rule)?;
        Ok(())
    }

    /// Print a value as pretty JSON
    pub fn resource<T: Serialize + ?Sized>(&mut self, value: &T) -> Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(Error::Encode)?;
        writeln!(self.out, "{}", text)?;
        Ok(())
    }

    pub fn line(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Name the service assigned to a freshly created resource
fn assigned_name<R: Resource>(resource: &R) -> Result<String> {
    resource.name().map(|s| s.to_string()).ok_or_else(|| {
        Error::Decode(serde::de::Error::custom(format!(
            "created {} has no name",
            R::KIND
        )))
    })
}

/// Last step of every driver: delete `name` unless told to keep it
async fn finish<W: Write>(
    client: &BizCommClient,
    settings: &SampleSettings,
    reporter: &mut Reporter<W>,
    title: &str,
    name: &str,
) -> Result<Outcome> {
    if !settings.delete {
        tracing::info!("{} given, keeping {}", NO_DELETE, name);
        reporter.line(&format!("\nKeeping {}", name))?;
        return Ok(Outcome {
            name: name.to_string(),
            deleted: false,
        });
    }

    settings.pause().await;

    reporter.header(title)?;
    client.delete(name).await?;
    reporter.line(&format!("Deleted {}", name))?;

    Ok(Outcome {
        name: name.to_string(),
        deleted: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Brand;

    #[test]
    fn test_reporter_output() {
        let mut reporter = Reporter::new(Vec::new());
        reporter.header("Create Brand").unwrap();
        reporter
            .resource(&serde_json::json!({"name": "brands/1"}))
            .unwrap();
        let out = String::from_utf8(reporter.into_inner()).unwrap();

        assert!(out.contains("  Create Brand\n"));
        assert!(out.contains(&"=".repeat(HEADER_WIDTH)));
        assert!(out.contains("\"name\": \"brands/1\""));
    }

    #[test]
    fn test_unprintable_value_is_encode_error() {
        let mut reporter = Reporter::new(Vec::new());
        let value = std::collections::BTreeMap::from([(vec![1u8], 1)]);

        assert!(matches!(reporter.resource(&value), Err(Error::Encode(_))));
    }

    #[test]
    fn test_assigned_name_requires_name() {
        assert!(assigned_name(&Brand::new("x")).is_err());

        let mut brand = Brand::new("x");
        brand.name = Some("brands/1".to_string());
        assert_eq!(assigned_name(&brand).unwrap(), "brands/1");
    }
}
