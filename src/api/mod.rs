//! Business Communications API interaction module
//!
//! # Module Structure
//!
//! - [`auth`] - service account credentials and token caching
//! - [`client`] - typed create/get/patch/list/delete over the REST surface
//! - [`http`] - HTTP plumbing and error mapping
//! - [`names`] - shape checks for resource names given on the command line
//!
//! # Example
//!
//! ```ignore
//! use bizcomm::api::{auth::Credentials, client::BizCommClient};
//! use bizcomm::model::Brand;
//!
//! async fn example() -> bizcomm::Result<()> {
//!     let credentials = Credentials::from_service_account_file("key.json")?;
//!     let client = BizCommClient::new(credentials, bizcomm::api::client::DEFAULT_ENDPOINT)?;
//!     let brand = client.create(None, &Brand::new("Test Brand")).await?;
//!     client.delete(brand.name.as_deref().unwrap_or_default()).await?;
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod http;
pub mod names;

pub use auth::Credentials;
pub use client::BizCommClient;
