use std::sync::Arc;

use folio_extern_contracts::form::{FormApiResponse, FormApiService, FormPayload};
use reqwest::StatusCode;
use serde_json::Value;
use tracing::trace;
use url::Url;

use crate::http::HttpClient;

#[derive(Debug, Clone)]
pub struct FormApiServiceImpl {
    config: FormApiServiceConfig,
    client: HttpClient,
}

#[derive(Debug, Clone)]
pub struct FormApiServiceConfig {
    pub endpoint: Arc<Url>,
}

impl FormApiServiceImpl {
    pub fn new(config: FormApiServiceConfig) -> Self {
        Self {
            config,
            client: HttpClient::default(),
        }
    }
}

impl FormApiService for FormApiServiceImpl {
    async fn submit(&self, payload: &FormPayload) -> anyhow::Result<FormApiResponse> {
        let response = self
            .client
            .post((*self.config.endpoint).clone())
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(%status, body = %body, "form endpoint responded");

        Ok(parse_response(status, &body))
    }
}

/// Bodies that are not valid JSON are passed on as the error text. Empty
/// and non-string `message`/`error` values count as missing.
fn parse_response(status: StatusCode, body: &str) -> FormApiResponse {
    let (message, error) = match serde_json::from_str::<Value>(body) {
        Ok(value) => (text_field(&value, "message"), text_field(&value, "error")),
        Err(_) => (None, non_empty(body.trim())),
    };

    FormApiResponse {
        success: status.is_success(),
        status: status.as_u16(),
        message,
        error,
    }
}

fn text_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).and_then(non_empty)
}

fn non_empty(text: &str) -> Option<String> {
    Some(text).filter(|text| !text.is_empty()).map(Into::into)
}
