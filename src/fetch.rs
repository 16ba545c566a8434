//! Single-request fetch: build the URL, issue one GET, parse, reject error documents.

use serde_json::Value;
use tracing::{debug, warn};

use crate::config::{ClientConfig, RequestConfig};
use crate::document::Document;
use crate::error::{CardError, Result};

/// Anything that can answer a GET with a response body.
///
/// Closures of the shape `Fn(&str) -> Result<String>` implement this, so
/// callers can substitute canned responses.
pub trait Transport {
    fn get(&self, url: &str) -> Result<String>;
}

impl<F> Transport for F
where
    F: Fn(&str) -> Result<String>,
{
    fn get(&self, url: &str) -> Result<String> {
        self(url)
    }
}

/// Blocking HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()?;
        let status = response.status();
        let body = response.text()?;

        if status.is_success() || is_error_document(&body) {
            return Ok(body);
        }
        Err(CardError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// Error documents arrive with 4xx statuses and still reach [`check_document`].
fn is_error_document(body: &str) -> bool {
    Document::parse(body)
        .map(|doc| doc.object_kind() == Some("error"))
        .unwrap_or(false)
}

/// Joins origin, path and the four query options into a request URL.
///
/// `path` may already carry its own query (e.g., `cards/named?fuzzy=opt`),
/// in which case the options are appended with `&`.
pub fn build_url(origin: &str, path: &str, config: &RequestConfig) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{}/{}{}{}", origin, path, separator, config.query_string())
}

/// Fetches `path` and returns the document, or [`CardError::Api`] if the
/// service answered with an error document.
pub fn fetch_document<T>(
    transport: &T,
    origin: &str,
    path: &str,
    config: &RequestConfig,
) -> Result<Document>
where
    T: Transport + ?Sized,
{
    let url = build_url(origin, path, config);
    debug!(%url, "fetching card document");
    let body = transport.get(&url)?;
    let document = Document::parse(&body)?;
    check_document(document)
}

/// Passes `document` through unless its `object` field is `"error"`.
pub fn check_document(document: Document) -> Result<Document> {
    debug!(object = ?document.object_kind(), "received document");
    if document.object_kind() != Some("error") {
        return Ok(document);
    }

    let fields = document.fields();
    let details = fields
        .get("details")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let status = fields.get("status").and_then(Value::as_u64);
    let code = fields
        .get("code")
        .and_then(Value::as_str)
        .map(str::to_string);
    let warnings = fields
        .get("warnings")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    warn!(?status, ?code, %details, "api returned an error document");
    Err(CardError::Api {
        details,
        status,
        code,
        warnings,
    })
}
