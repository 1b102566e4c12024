//! Resource name helpers
//!
//! Names are opaque server-assigned paths. These checks only look at the
//! shape of command-line input; whether the resource exists is for the
//! service to decide.

use once_cell::sync::Lazy;
use regex::Regex;

static BRAND_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"brands/\S+").expect("valid brand name pattern"));

static AGENT_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"brands/\S+/agents/\S+").expect("valid agent name pattern"));

/// Whether `name` looks like `brands/BRAND_ID`
pub fn is_brand_name(name: &str) -> bool {
    BRAND_NAME.is_match(name)
}

/// Whether `name` looks like `brands/BRAND_ID/agents/AGENT_ID`
pub fn is_agent_name(name: &str) -> bool {
    AGENT_NAME.is_match(name)
}

/// The `brands/BRAND_ID` prefix of an agent name
pub fn brand_of_agent(agent_name: &str) -> Option<&str> {
    agent_name
        .find("/agents/")
        .map(|idx| &agent_name[..idx])
        .filter(|brand| !brand.is_empty())
}

/// clap value parser for a brand argument; the value is passed on unchanged
pub fn parse_brand_name(value: &str) -> Result<String, String> {
    if is_brand_name(value) {
        Ok(value.to_string())
    } else {
        Err("expected a brand name in the form brands/BRAND_ID".to_string())
    }
}

/// clap value parser for an agent argument; the value is passed on unchanged
pub fn parse_agent_name(value: &str) -> Result<String, String> {
    if is_agent_name(value) {
        Ok(value.to_string())
    } else {
        Err("expected an agent name in the form brands/BRAND_ID/agents/AGENT_ID".to_string())
    }
}
