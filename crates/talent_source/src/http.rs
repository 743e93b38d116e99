use std::time::Duration;

use engine_logging::{talent_debug, talent_warn};
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Serialize;
use talent_core::{Job, JobId, RecordId, TalentPage};
use url::Url;

use crate::{FailureKind, JobSource, SourceError, TalentSource};

#[derive(Debug, Clone)]
pub struct HttpSettings {
    /// Root of the API, e.g. `https://hire.example.com/api`.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000/api".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Serialize)]
struct ArchiveRequest<'a> {
    to_uid: &'a str,
    jid: &'a str,
}

/// Talent and job source backed by the hiring REST API.
///
/// - `GET  {base}/talents?page=&keyword=` → `{"contacts": [...], "remain": n}`
/// - `POST {base}/talents/archive` with `{"to_uid", "jid"}`
/// - `GET  {base}/jobs` → `[...]`
#[derive(Debug, Clone)]
pub struct HttpTalentSource {
    client: reqwest::Client,
    base: Url,
}

impl HttpTalentSource {
    pub fn new(settings: HttpSettings) -> Result<Self, SourceError> {
        let base = Url::parse(settings.base_url.trim_end_matches('/'))
            .map_err(|err| SourceError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(SourceError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| SourceError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Vec<u8>, SourceError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }
        let body = response.bytes().await.map_err(map_reqwest_error)?;
        Ok(body.to_vec())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, SourceError> {
        talent_debug!("GET {}", url);
        let body = self.send(self.client.get(url.clone())).await?;
        serde_json::from_slice(&body).map_err(|err| {
            talent_warn!("Undecodable response from {}: {}", url, err);
            SourceError::new(FailureKind::Decode, err.to_string())
        })
    }
}

#[async_trait::async_trait]
impl TalentSource for HttpTalentSource {
    async fn fetch(&self, page: u32, keyword: &str) -> Result<TalentPage, SourceError> {
        let mut url = self.endpoint(&["talents"]);
        url.query_pairs_mut()
            .append_pair("page", &page.to_string())
            .append_pair("keyword", keyword);
        self.get_json(url).await
    }

    async fn archive(&self, record: &RecordId, job: &JobId) -> Result<(), SourceError> {
        let url = self.endpoint(&["talents", "archive"]);
        let body = serde_json::to_vec(&ArchiveRequest {
            to_uid: record.as_str(),
            jid: job.as_str(),
        })
        .map_err(|err| SourceError::new(FailureKind::Decode, err.to_string()))?;
        talent_debug!("POST {} ({} bytes)", url, body.len());

        let request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request).await.map(|_| ())
    }
}

#[async_trait::async_trait]
impl JobSource for HttpTalentSource {
    async fn jobs(&self) -> Result<Vec<Job>, SourceError> {
        self.get_json(self.endpoint(&["jobs"])).await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        return SourceError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return SourceError::new(FailureKind::Decode, err.to_string());
    }
    SourceError::new(FailureKind::Network, err.to_string())
}
