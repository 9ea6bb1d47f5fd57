//! Request execution shared by all endpoint groups

use gox_auth::{RequestParams, RequestSigner};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::command::{Access, Endpoint};
use crate::envelope::decode;
use crate::error::{RestError, RestResult};

/// HTTP client bound to one API base URL
#[derive(Debug, Clone)]
pub(crate) struct Transport {
    http: Client,
    base_url: String,
}

impl Transport {
    pub(crate) fn new(http: Client, base_url: String) -> Self {
        Self { http, base_url }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path)
    }

    /// Run one request/response cycle and unwrap the envelope
    ///
    /// Public endpoints are sent as plain requests with the parameters in the
    /// query string; private ones are signed and POSTed.
    pub(crate) async fn call<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        params: RequestParams,
        signer: Option<&RequestSigner>,
    ) -> RestResult<T> {
        let body = match endpoint.access {
            Access::Public => self.send_plain(endpoint, &params).await?,
            Access::Private => {
                let signer = signer.ok_or(RestError::AuthRequired)?;
                self.send_signed(endpoint, params, signer).await?
            }
        };

        decode::<T>(&body)?.into_result()
    }

    async fn send_plain(&self, endpoint: &Endpoint, params: &RequestParams) -> RestResult<Vec<u8>> {
        let mut url = self.url(endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.encode()?);
        }

        debug!("Fetching {}", url);

        let response = self
            .http
            .request(endpoint.method.clone(), &url)
            .send()
            .await?;
        debug!(status = %response.status(), "Response for {}", endpoint.command);

        Ok(response.bytes().await?.to_vec())
    }

    async fn send_signed(
        &self,
        endpoint: &Endpoint,
        mut params: RequestParams,
        signer: &RequestSigner,
    ) -> RestResult<Vec<u8>> {
        let signed = signer.sign(&mut params)?;
        let url = self.url(endpoint);

        debug!(nonce = signed.nonce, "Making authenticated request to {}", endpoint.path);

        let mut request = self.http.request(endpoint.method.clone(), &url);
        for (name, value) in signed.headers() {
            request = request.header(name, value);
        }

        let response = request.body(signed.body).send().await?;
        debug!(status = %response.status(), "Response for {}", endpoint.command);

        Ok(response.bytes().await?.to_vec())
    }
}
