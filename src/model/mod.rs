//! Business Communications resource types
//!
//! Serde mirrors of the REST resources the samples touch. Field names follow
//! the wire format (camelCase); fields the samples do not model are kept in
//! `extra` so responses print exactly as the service sent them.
//!
//! - [`brand`] - brands
//! - [`agent`] - agents and their Business Messages configuration
//! - [`location`] - locations
//! - [`survey`] - CSAT survey configuration and template questions
//! - [`common`] - messages shared by agents and locations

pub mod agent;
pub mod brand;
pub mod common;
pub mod location;
pub mod survey;

pub use agent::Agent;
pub use brand::Brand;
pub use location::Location;
pub use survey::SurveyQuestion;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// A named REST resource living in a collection
pub trait Resource: Serialize + DeserializeOwned + Send + Sync {
    /// Human readable kind, used in logs
    const KIND: &'static str;
    /// Collection segment, e.g. `agents` in `brands/1/agents`
    const COLLECTION: &'static str;

    /// Server-assigned name, absent until created
    fn name(&self) -> Option<&str>;
}
