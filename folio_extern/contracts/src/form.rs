use std::future::Future;

use folio_models::contact::ContactSubmission;
use serde::{Deserialize, Serialize};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait FormApiService: Send + Sync + 'static {
    /// Post a contact form payload to the form endpoint.
    ///
    /// Returns the endpoint's answer for any HTTP status. Fails only if no
    /// complete response could be received.
    fn submit(
        &self,
        payload: &FormPayload,
    ) -> impl Future<Output = anyhow::Result<FormApiResponse>> + Send;
}

/// JSON body expected by the form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormPayload {
    #[serde(rename = "CustomerName")]
    pub customer_name: String,
    #[serde(rename = "CustomerEmail")]
    pub customer_email: String,
    #[serde(rename = "MessageDetails")]
    pub message_details: String,
    #[serde(rename = "g-recaptcha-response")]
    pub recaptcha_response: String,
    #[serde(rename = "BotCheck", default, skip_serializing_if = "Option::is_none")]
    pub bot_check: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormApiResponse {
    /// Whether the endpoint answered with a 2xx status.
    pub success: bool,
    pub status: u16,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl From<ContactSubmission> for FormPayload {
    fn from(value: ContactSubmission) -> Self {
        Self {
            customer_name: value.author.name.into_inner(),
            customer_email: value.author.email.into_inner(),
            message_details: value.content.into_inner(),
            recaptcha_response: value.recaptcha_response.into_inner(),
            bot_check: value.bot_check.map(|bot_check| bot_check.into_inner()),
        }
    }
}

#[cfg(feature = "mock")]
impl MockFormApiService {
    pub fn with_submit(mut self, payload: FormPayload, result: FormApiResponse) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(Ok(result))));
        self
    }

    pub fn with_submit_error(mut self, payload: FormPayload, error: anyhow::Error) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }

    /// Expects one submission that never completes.
    pub fn with_submit_pending(mut self, payload: FormPayload) -> Self {
        self.expect_submit()
            .once()
            .with(mockall::predicate::eq(payload))
            .return_once(|_| Box::pin(std::future::pending()));
        self
    }
}
