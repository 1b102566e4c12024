//! Business Communications client
//!
//! Combines credentials and the HTTP layer into typed resource operations.
//! Every method is a single round trip (one per page for [`BizCommClient::list`])
//! and hands remote failures back untouched.

use super::auth::Credentials;
use super::http::HttpClient;
use crate::error::{Error, Result};
use crate::model::Resource;
use serde_json::Value;
use url::Url;

/// Production endpoint of the v1 API
pub const DEFAULT_ENDPOINT: &str = "https://businesscommunications.googleapis.com/v1";

#[derive(Debug, Clone)]
pub struct BizCommClient {
    credentials: Credentials,
    http: HttpClient,
    endpoint: Url,
}

/// One page of a list response
struct Page<R> {
    items: Vec<R>,
    next_token: Option<String>,
}

impl BizCommClient {
    pub fn new(credentials: Credentials, endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::Request(format!("invalid endpoint {:?}: {}", endpoint, e)))?;
        if endpoint.cannot_be_a_base() {
            return Err(Error::Request(format!(
                "endpoint {} cannot carry resource paths",
                endpoint
            )));
        }

        Ok(Self {
            credentials,
            http: HttpClient::new()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch a token up front so credential failures surface first
    pub async fn authenticate(&self) -> Result<()> {
        self.credentials.authenticate().await?;
        Ok(())
    }

    async fn token(&self) -> Result<String> {
        Ok(self.credentials.token().await?)
    }

    /// `{endpoint}/{path}` with every path segment percent-encoded. Names are
    /// otherwise used exactly as given.
    pub fn resource_url(&self, path: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Request(format!("endpoint {} cannot carry resource paths", self.endpoint)))?
            .pop_if_empty()
            .extend(path.trim_matches('/').split('/'));
        Ok(url)
    }

    /// URL of the `R` collection, optionally below a parent resource
    pub fn collection_url<R: Resource>(&self, parent: Option<&str>) -> Result<Url> {
        match parent {
            Some(parent) => self.resource_url(&format!("{}/{}", parent, R::COLLECTION)),
            None => self.resource_url(R::COLLECTION),
        }
    }

    /// Create `payload` in the `R` collection below `parent`
    pub async fn create<R: Resource>(&self, parent: Option<&str>, payload: &R) -> Result<R> {
        let url = self.collection_url::<R>(parent)?;
        tracing::info!("Creating {} under {}", R::KIND, parent.unwrap_or("<root>"));

        let body = encode(payload)?;
        let token = self.token().await?;
        let response = self.http.post(&url, &token, &body).await?;
        decode(response)
    }

    pub async fn get<R: Resource>(&self, name: &str) -> Result<R> {
        let url = self.resource_url(name)?;
        tracing::info!("Fetching {} {}", R::KIND, name);

        let token = self.token().await?;
        let response = self.http.get(&url, &token, &[]).await?;
        decode(response)
    }

    /// Update the fields of `resource` listed in `update_mask`, a
    /// comma-separated list of field paths
    pub async fn patch<R: Resource>(&self, resource: &R, update_mask: &str) -> Result<R> {
        let name = resource
            .name()
            .ok_or_else(|| Error::Request(format!("cannot update a {} without a name", R::KIND)))?;
        let url = self.resource_url(name)?;
        tracing::info!("Updating {} {} ({})", R::KIND, name, update_mask);

        let body = encode(resource)?;
        let token = self.token().await?;
        let response = self
            .http
            .patch(&url, &token, &[("updateMask", update_mask)], &body)
            .await?;
        decode(response)
    }

    /// List every `R` below `parent`, following page tokens to the end
    pub async fn list<R: Resource>(&self, parent: Option<&str>) -> Result<Vec<R>> {
        let url = self.collection_url::<R>(parent)?;
        tracing::info!("Listing {} under {}", R::COLLECTION, parent.unwrap_or("<root>"));

        let mut all_items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let token = self.token().await?;
            let query: Vec<(&str, &str)> = page_token
                .as_deref()
                .map(|t| vec![("pageToken", t)])
                .unwrap_or_default();

            let response = self.http.get(&url, &token, &query).await?;
            let page = extract_page::<R>(response)?;
            all_items.extend(page.items);

            match page.next_token {
                Some(next) => page_token = Some(next),
                None => break,
            }
        }

        tracing::debug!("Listed {} {}", all_items.len(), R::COLLECTION);
        Ok(all_items)
    }

    pub async fn delete(&self, name: &str) -> Result<()> {
        let url = self.resource_url(name)?;
        tracing::info!("Deleting {}", name);

        let token = self.token().await?;
        self.http.delete(&url, &token).await?;
        Ok(())
    }
}

fn encode<R: Resource>(payload: &R) -> Result<Value> {
    serde_json::to_value(payload).map_err(Error::Encode)
}

fn decode<R: Resource>(response: Value) -> Result<R> {
    serde_json::from_value(response).map_err(Error::Decode)
}

/// Items live under the collection name, e.g. `{"agents": [...]}`; an
/// empty collection is returned as `{}`
fn extract_page<R: Resource>(mut response: Value) -> Result<Page<R>> {
    let next_token = response
        .get("nextPageToken")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    let items = match response.get_mut(R::COLLECTION).map(Value::take) {
        Some(items) => serde_json::from_value(items).map_err(Error::Decode)?,
        None => Vec::new(),
    };

    Ok(Page { items, next_token })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Agent, Brand, Location};
    use serde_json::json;

    fn client() -> BizCommClient {
        BizCommClient::new(Credentials::from_access_token("t"), DEFAULT_ENDPOINT).unwrap()
    }

    #[test]
    fn test_collection_urls() {
        let client = client();
        assert_eq!(
            client.collection_url::<Brand>(None).unwrap().as_str(),
            "https://businesscommunications.googleapis.com/v1/brands"
        );
        assert_eq!(
            client
                .collection_url::<Agent>(Some("brands/123"))
                .unwrap()
                .as_str(),
            "https://businesscommunications.googleapis.com/v1/brands/123/agents"
        );
        assert_eq!(
            client
                .collection_url::<Location>(Some("brands/123"))
                .unwrap()
                .as_str(),
            "https://businesscommunications.googleapis.com/v1/brands/123/locations"
        );
    }

    #[test]
    fn test_resource_url_handles_trailing_slash_endpoint() {
        let client = BizCommClient::new(
            Credentials::from_access_token("t"),
            "http://127.0.0.1:8080/v1/",
        )
        .unwrap();
        assert_eq!(
            client.resource_url("/brands/1/").unwrap().as_str(),
            "http://127.0.0.1:8080/v1/brands/1"
        );
    }

    #[test]
    fn test_resource_url_encodes_odd_characters() {
        let url = client().resource_url("brands/a b?c").unwrap();
        assert_eq!(
            url.as_str(),
            "https://businesscommunications.googleapis.com/v1/brands/a%20b%3Fc"
        );
    }

    #[test]
    fn test_invalid_endpoint_is_request_error() {
        let err = BizCommClient::new(Credentials::from_access_token("t"), "not a url").unwrap_err();
        assert!(matches!(err, Error::Request(_)));

        let err = BizCommClient::new(Credentials::from_access_token("t"), "mailto:x@y").unwrap_err();
        assert!(matches!(err, Error::Request(_)));
    }

    #[test]
    fn test_extract_page() {
        let page = extract_page::<Brand>(json!({
            "brands": [{"name": "brands/1"}, {"name": "brands/2"}],
            "nextPageToken": "abc"
        }))
        .unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.next_token.as_deref(), Some("abc"));

        let page = extract_page::<Brand>(json!({})).unwrap();
        assert!(page.items.is_empty());
        assert!(page.next_token.is_none());

        let page = extract_page::<Brand>(Value::Null).unwrap();
        assert!(page.items.is_empty());
    }
}
