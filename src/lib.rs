//! Business Communications samples
//!
//! Library behind the `brand_sample`, `agent_sample`, `location_sample` and
//! `list_template_questions` binaries. The binaries only parse arguments;
//! everything they run lives here so it can be exercised against a mock
//! server.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod model;
pub mod samples;

pub use error::{CredentialError, Error, RemoteError, RemoteErrorKind, Result};
