//! Property-based tests using proptest
//!
//! These tests cover command-line name checks, URL building for resource
//! names and the randomised parts of the sample payloads.

use bizcomm::api::{names, BizCommClient, Credentials};
use bizcomm::samples::data;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn arb_id() -> impl Strategy<Value = String> {
    "[A-Za-z0-9_-]{1,40}"
}

fn arb_brand_name() -> impl Strategy<Value = String> {
    arb_id().prop_map(|id| format!("brands/{}", id))
}

fn arb_agent_name() -> impl Strategy<Value = String> {
    (arb_id(), arb_id()).prop_map(|(brand, agent)| format!("brands/{}/agents/{}", brand, agent))
}

fn client() -> BizCommClient {
    BizCommClient::new(
        Credentials::from_access_token("t"),
        "https://businesscommunications.googleapis.com/v1",
    )
    .unwrap()
}

proptest! {
    /// Accepted names are handed on byte for byte
    #[test]
    fn brand_names_pass_through_unchanged(name in arb_brand_name()) {
        prop_assert_eq!(names::parse_brand_name(&name), Ok(name.clone()));
    }

    #[test]
    fn agent_names_pass_through_unchanged(name in arb_agent_name()) {
        prop_assert_eq!(names::parse_agent_name(&name), Ok(name.clone()));
        // An agent name is also a valid brand argument
        prop_assert!(names::is_brand_name(&name));
    }

    #[test]
    fn brand_of_agent_is_the_prefix((brand, agent) in (arb_id(), arb_id())) {
        let name = format!("brands/{}/agents/{}", brand, agent);
        let expected = format!("brands/{}", brand);
        prop_assert_eq!(names::brand_of_agent(&name), Some(expected.as_str()));
    }

    /// Input without the `brands/` marker is never accepted
    #[test]
    fn names_without_brands_prefix_rejected(value in "[a-z0-9/_-]{0,40}") {
        prop_assume!(!value.contains("brands/"));
        prop_assert!(names::parse_brand_name(&value).is_err());
        prop_assert!(names::parse_agent_name(&value).is_err());
    }

    #[test]
    fn resource_url_ends_with_name(name in arb_agent_name()) {
        let url = client().resource_url(&name).unwrap();
        let expected = format!("/v1/{}", name);
        prop_assert_eq!(url.path(), expected.as_str());
    }

    /// Characters that are not URL-safe are escaped rather than altering the path
    #[test]
    fn resource_url_keeps_segment_count(id in "[A-Za-z0-9 ?#%]{1,20}") {
        let url = client().resource_url(&format!("brands/{}", id)).unwrap();
        let segments: Vec<_> = url.path_segments().unwrap().collect();
        prop_assert_eq!(segments.len(), 3);
        prop_assert_eq!(segments[1], "brands");
    }

    #[test]
    fn phone_numbers_have_ten_digits(seed in any::<u64>()) {
        let phone = data::random_phone_number(&mut StdRng::seed_from_u64(seed));
        prop_assert!(phone.starts_with("+1"));
        prop_assert_eq!(phone.len(), 12);
        prop_assert!(phone[2..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn random_urls_are_lowercase_domains(seed in any::<u64>()) {
        let url = data::random_url(&mut StdRng::seed_from_u64(seed));
        let host = url
            .strip_prefix("https://www.")
            .and_then(|rest| rest.strip_suffix(".com"))
            .unwrap();
        prop_assert_eq!(host.len(), 10);
        prop_assert!(host.chars().all(|c| c.is_ascii_lowercase()));
    }
}
