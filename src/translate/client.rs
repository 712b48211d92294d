use super::types::{CompletionRequest, CompletionResponse, Translation, TranslationRequest};
use crate::{Error, Result, config::RoutingTarget};
use reqwest::{StatusCode, header};
use tracing::debug;

/// Client for the T5 translation service behind the shared ingress.
pub struct TranslateClient {
    client: reqwest::Client,
    target: RoutingTarget,
}

impl TranslateClient {
    pub fn new(target: RoutingTarget) -> Self {
        Self {
            client: reqwest::Client::new(),
            target,
        }
    }

    /// One POST per call: build the completion payload, present the virtual
    /// hostname in the `Host` header so the ingress routes to the T5
    /// service, map the response. Preconditions (distinct languages,
    /// non-blank text) are the caller's; nothing is re-checked here.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<Translation> {
        let payload = CompletionRequest::from(request);

        debug!(
            "Posting {} -> {} completion request to {}",
            request.source_language, request.target_language, self.target.base_url
        );

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

        let body: CompletionResponse = response.json().await?;
        match body.into_text() {
            Some(text) => Ok(Translation::Text(text)),
            None => {
                debug!("Completion response carried no text, returning placeholder");
                Ok(Translation::Placeholder)
            }
        }
    }
}
