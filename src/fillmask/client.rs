use super::types::{FillMaskRequest, PredictRequest, PredictResponse};
use crate::{Error, Result, config::RoutingTarget};
use reqwest::{StatusCode, header};
use tracing::debug;

/// Client for the ALBERT fill-mask service behind the shared ingress.
pub struct FillMaskClient {
    client: reqwest::Client,
    target: RoutingTarget,
}

impl FillMaskClient {
    pub fn new(target: RoutingTarget) -> Self {
        Self {
            client: reqwest::Client::new(),
            target,
        }
    }

    /// One POST per call against the KServe `:predict` route. The returned
    /// tokens keep the upstream order; an empty list is a valid outcome, not
    /// an error. The `[MASK]` precondition is the caller's.
    pub async fn predict(&self, request: &FillMaskRequest) -> Result<Vec<String>> {
        let payload = PredictRequest::from(request);

        debug!("Posting predict request to {}", self.target.base_url);

        let response = self
            .client
            .post(&self.target.base_url)
            .header(header::HOST, &self.target.virtual_host)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::upstream(status.as_u16(), body));
        }

        let body: PredictResponse = response.json().await?;
        if body.predictions.is_empty() {
            debug!("Predict response carried no predictions");
        }

        Ok(body.predictions)
    }
}
