use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;

use crate::gateway::error::GatewayError;
use crate::gateway::query::ListQuery;
use crate::gateway::types::{CountryDetail, CountrySummary, ImageRecord};

/// Characters that cannot appear raw inside a URL path segment. The lookup
/// key itself is opaque; encoding is purely a transport concern.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Deserialize)]
struct CountriesEnvelope {
    countries: Vec<CountrySummary>,
}

#[derive(Deserialize)]
struct CountryEnvelope {
    country: CountryDetail,
}

#[derive(Deserialize)]
struct ImagesEnvelope {
    #[serde(default)]
    images: Option<Vec<ImageRecord>>,
}

/// HTTP client for the remote data gateway.
///
/// The base address is resolved once at startup and never re-derived per
/// call. Cloning is cheap; the underlying connection pool is shared.
#[derive(Clone)]
pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /countries` with the current query parameters. The response is a
    /// complete replacement for any previously fetched sequence.
    pub async fn list_countries(
        &self,
        query: &ListQuery,
    ) -> Result<Vec<CountrySummary>, GatewayError> {
        let response = self
            .http
            .get(format!("{}/countries", self.base_url))
            .query(&query.to_pairs())
            .send()
            .await?;
        let response = check_status("list countries", response)?;
        let envelope: CountriesEnvelope = response.json().await?;
        Ok(envelope.countries)
    }

    /// `GET /countries/{name}`.
    pub async fn country(&self, name: &str) -> Result<CountryDetail, GatewayError> {
        let response = self.http.get(self.country_url(name, "")).send().await?;
        let response = check_status("country detail", response)?;
        let envelope: CountryEnvelope = response.json().await?;
        Ok(envelope.country)
    }

    /// `GET /countries/{name}/images`. An absent `images` field is a valid
    /// empty collection, not an error.
    pub async fn images(&self, name: &str) -> Result<Vec<ImageRecord>, GatewayError> {
        let response = self
            .http
            .get(self.country_url(name, "/images"))
            .send()
            .await?;
        let response = check_status("country images", response)?;
        let envelope: ImagesEnvelope = response.json().await?;
        Ok(envelope.images.unwrap_or_default())
    }

    /// `POST /countries/{name}/images` with a multipart body. The response
    /// body is ignored; only the status matters.
    pub async fn upload_image(
        &self,
        name: &str,
        file_name: String,
        bytes: Vec<u8>,
        title: String,
        description: String,
    ) -> Result<(), GatewayError> {
        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("title", title)
            .text("description", description);
        let response = self
            .http
            .post(self.country_url(name, "/images"))
            .multipart(form)
            .send()
            .await?;
        check_status("upload image", response)?;
        Ok(())
    }

    fn country_url(&self, name: &str, suffix: &str) -> String {
        let encoded = utf8_percent_encode(name, PATH_SEGMENT);
        format!("{}/countries/{}{}", self.base_url, encoded, suffix)
    }
}

fn check_status(
    operation: &'static str,
    response: reqwest::Response,
) -> Result<reqwest::Response, GatewayError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(GatewayError::Status { operation, status })
    }
}
