use api_types::CheckBundle;
use eyre::{Result, eyre};
use reqwest::{
    Client as HttpClient,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::{Value, json};
use tracing::{debug, info};
use url::Url;

use config::{API_BASE_URL, CirconusOpts};

/// Header carrying the application name.
pub const APP_NAME_HEADER: &str = "x-circonus-app-name";
/// Header carrying the API token.
pub const AUTH_TOKEN_HEADER: &str = "x-circonus-auth-token";

/// Build the fixed header set the API requires: `Accept` plus the two
/// `X-Circonus-*` authentication headers. Inputs are opaque; they only fail
/// if they are not legal header values.
pub fn api_headers(app_name: &str, token: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(APP_NAME_HEADER), HeaderValue::from_str(app_name)?);
    headers.insert(HeaderName::from_static(AUTH_TOKEN_HEADER), HeaderValue::from_str(token)?);
    Ok(headers)
}

/// Join `resource` onto `base`.
///
/// Exactly one leading and one trailing `/` are stripped from `resource`
/// (and one trailing `/` from `base`), so `"path/to/r"`, `"/path/to/r"`,
/// `"path/to/r/"` and `"/path/to/r/"` all resolve to `base + "/path/to/r"`.
/// Internal slashes are left untouched and nothing is percent-encoded.
pub fn api_url(base: &str, resource: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    let resource = resource.strip_prefix('/').unwrap_or(resource);
    let resource = resource.strip_suffix('/').unwrap_or(resource);
    format!("{base}/{resource}")
}

/// Client for interacting with the Circonus v2 API.
#[derive(Debug, Clone)]
pub struct Client {
    http: HttpClient,
    headers: HeaderMap,
    base_url: Url,
}

impl Client {
    /// Create a client against the production API endpoint.
    pub fn new(app_name: &str, token: &str) -> Result<Self> {
        Self::with_base_url(app_name, token, Url::parse(API_BASE_URL)?)
    }

    /// Create a client against a custom endpoint.
    pub fn with_base_url(app_name: &str, token: &str, base_url: Url) -> Result<Self> {
        Ok(Self { http: HttpClient::new(), headers: api_headers(app_name, token)?, base_url })
    }

    /// Create a client from parsed CLI/env options.
    pub fn from_opts(opts: &CirconusOpts) -> Result<Self> {
        Self::with_base_url(&opts.app_name, &opts.api_token, opts.api_url.clone())
    }

    /// The authentication headers attached to every request.
    pub const fn api_headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Absolute URL for `resource` under this client's base URL.
    pub fn api_url(&self, resource: &str) -> String {
        api_url(self.base_url.as_str(), resource)
    }

    /// Authenticate the request.
    fn auth(&self, rb: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        rb.headers(self.headers.clone())
    }

    /// Fetch a resource or CID as a raw JSON document.
    pub async fn get(&self, resource: &str) -> Result<Value> {
        let url = self.api_url(resource);
        debug!(%url, "GET resource");
        let resp = self.auth(self.http.get(&url)).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Create a resource, returning the document the API echoes back.
    pub async fn create(&self, resource: &str, body: &Value) -> Result<Value> {
        let url = self.api_url(resource);
        debug!(%url, "POST resource");
        let resp = self.auth(self.http.post(&url)).json(body).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Update the resource at `cid`, returning the updated document.
    pub async fn update(&self, cid: &str, body: &Value) -> Result<Value> {
        let url = self.api_url(cid);
        debug!(%url, "PUT resource");
        let resp = self.auth(self.http.put(&url)).json(body).send().await?.error_for_status()?;
        Ok(resp.json().await?)
    }

    /// Delete the resource at `cid`.
    pub async fn delete(&self, cid: &str) -> Result<()> {
        let url = self.api_url(cid);
        debug!(%url, "DELETE resource");
        self.auth(self.http.delete(&url)).send().await?.error_for_status()?;
        Ok(())
    }

    /// Fetch the check bundle at `cid`.
    pub async fn check_bundle(&self, cid: &str) -> Result<CheckBundle> {
        Ok(serde_json::from_value(self.get(cid).await?)?)
    }

    /// Add `tags` to a check bundle, issuing an update only when the tag set
    /// actually changes.
    ///
    /// Returns `Ok(None)` without touching the API when every supplied tag
    /// is already present, `tags` is empty, or the bundle has no `tags`
    /// field.
    pub async fn add_tags(&self, bundle: &CheckBundle, tags: &[String]) -> Result<Option<CheckBundle>> {
        self.put_tags(bundle, tags::tags_with(bundle, tags)).await
    }

    /// Remove `tags` from a check bundle, issuing an update only when the
    /// tag set actually changes.
    ///
    /// Returns `Ok(None)` without touching the API when none of the supplied
    /// tags are present. Removing every existing tag is a real update and
    /// returns the bundle with an empty tag list.
    pub async fn remove_tags(
        &self,
        bundle: &CheckBundle,
        tags: &[String],
    ) -> Result<Option<CheckBundle>> {
        self.put_tags(bundle, tags::tags_without(bundle, tags)).await
    }

    async fn put_tags(
        &self,
        bundle: &CheckBundle,
        updated: Option<Vec<String>>,
    ) -> Result<Option<CheckBundle>> {
        let Some(updated) = updated else {
            debug!("tag update is a no-op, skipping request");
            return Ok(None);
        };
        let cid = bundle.cid().ok_or_else(|| eyre!("check bundle has no _cid"))?;
        let value = self.update(cid, &json!({ "tags": &updated })).await?;
        info!(%cid, tags = ?updated, "Updated check bundle tags");
        Ok(Some(serde_json::from_value(value)?))
    }
}
