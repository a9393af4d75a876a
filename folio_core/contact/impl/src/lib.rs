use std::{sync::Arc, time::Duration};

use anyhow::anyhow;
use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitted};
use folio_extern_contracts::form::{FormApiService, FormPayload};
use folio_models::contact::ContactSubmission;
use tracing::{debug, error, info, warn};

pub use form::ContactFormHandler;

mod form;

#[derive(Debug, Clone)]
pub struct ContactFeatureServiceImpl<FormApi> {
    form_api: FormApi,
    config: ContactFeatureConfig,
}

#[derive(Debug, Clone)]
pub struct ContactFeatureConfig {
    /// Maximum time to wait for the form endpoint before giving up.
    pub timeout: Duration,
    /// Shown on success if the endpoint did not provide a message.
    pub success_message: Arc<str>,
    /// Address users are referred to if the endpoint rejects a message.
    pub fallback_email: Arc<str>,
}

impl<FormApi> ContactFeatureServiceImpl<FormApi> {
    pub fn new(form_api: FormApi, config: ContactFeatureConfig) -> Self {
        Self { form_api, config }
    }
}

impl<FormApi> ContactFeatureService for ContactFeatureServiceImpl<FormApi>
where
    FormApi: FormApiService,
{
    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmitted, ContactSubmitError> {
        let payload = FormPayload::from(submission);
        debug!(bot_check = payload.bot_check.is_some(), "submitting contact form");

        let response = tokio::time::timeout(self.config.timeout, self.form_api.submit(&payload))
            .await
            .map_err(|_| anyhow!("No response within {:?}", self.config.timeout))
            .and_then(|result| result)
            .map_err(|err| {
                error!("Failed to submit contact form: {err:#}");
                ContactSubmitError::Network(err)
            })?;

        if !response.success {
            warn!(
                status = response.status,
                error = response.error.as_deref(),
                "form endpoint rejected the submission"
            );
            return Err(ContactSubmitError::Rejected(
                response
                    .error
                    .filter(|error| !error.is_empty())
                    .unwrap_or_else(|| {
                        format!(
                            "Something went wrong. Please email {}.",
                            self.config.fallback_email
                        )
                    }),
            ));
        }

        info!(status = response.status, "contact form submitted");
        Ok(ContactSubmitted {
            message: response
                .message
                .filter(|message| !message.is_empty())
                .unwrap_or_else(|| self.config.success_message.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_extern_contracts::form::{FormApiResponse, MockFormApiService};
    use folio_models::contact::RawContactSubmission;
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn ok() {
        // Arrange
        let form_api = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: true,
                status: 200,
                message: Some("Thanks!".into()),
                error: None,
            },
        );

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_eq!(
            result.unwrap(),
            ContactSubmitted {
                message: "Thanks!".into()
            }
        );
    }

    #[tokio::test]
    async fn ok_default_message() {
        // Arrange
        let form_api = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: true,
                status: 204,
                message: None,
                error: None,
            },
        );

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_eq!(result.unwrap().message, "Thank you!");
    }

    #[tokio::test]
    async fn rejected() {
        // Arrange
        let form_api = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: false,
                status: 403,
                message: None,
                error: Some("Captcha verification failed.".into()),
            },
        );

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Rejected(message)) if message == "Captcha verification failed."
        );
    }

    #[tokio::test]
    async fn rejected_default_message() {
        // Arrange
        let form_api = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: false,
                status: 500,
                message: Some("ignored".into()),
                error: None,
            },
        );

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        assert_matches!(
            result,
            Err(ContactSubmitError::Rejected(message))
                if message == "Something went wrong. Please email contact@example.com."
        );
    }

    #[tokio::test]
    async fn empty_texts_fall_back_to_defaults() {
        // Arrange
        let accepted = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: true,
                status: 200,
                message: Some("".into()),
                error: None,
            },
        );
        let rejected = MockFormApiService::new().with_submit(
            payload(),
            FormApiResponse {
                success: false,
                status: 500,
                message: None,
                error: Some("".into()),
            },
        );

        // Act
        let accepted = ContactFeatureServiceImpl::new(accepted, config())
            .submit(submission())
            .await;
        let rejected = ContactFeatureServiceImpl::new(rejected, config())
            .submit(submission())
            .await;

        // Assert
        assert_eq!(accepted.unwrap().message, "Thank you!");
        assert_matches!(
            rejected,
            Err(ContactSubmitError::Rejected(message))
                if message == "Something went wrong. Please email contact@example.com."
        );
    }

    #[tokio::test]
    async fn network_error() {
        // Arrange
        let form_api = MockFormApiService::new()
            .with_submit_error(payload(), anyhow!("connection refused"));

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let result = sut.submit(submission()).await;

        // Assert
        let err = result.unwrap_err();
        assert_eq!(
            err.to_string(),
            "A network error occurred. Please try again later."
        );
        assert_matches!(err, ContactSubmitError::Network(_));
    }

    #[tokio::test(start_paused = true)]
    async fn timeout() {
        // Arrange
        let form_api = MockFormApiService::new().with_submit_pending(payload());

        let sut = ContactFeatureServiceImpl::new(form_api, config());

        // Act
        let start = tokio::time::Instant::now();
        let result = sut.submit(submission()).await;

        // Assert
        assert_matches!(result, Err(ContactSubmitError::Network(_)));
        assert!(start.elapsed() >= Duration::from_secs(10));
    }

    fn config() -> ContactFeatureConfig {
        ContactFeatureConfig {
            timeout: Duration::from_secs(10),
            success_message: "Thank you!".into(),
            fallback_email: "contact@example.com".into(),
        }
    }

    fn submission() -> ContactSubmission {
        RawContactSubmission {
            name: "Jane Doe",
            email: "jane@example.com",
            message: "Hello!",
            recaptcha_response: "tok123",
            bot_check: None,
        }
        .try_into()
        .unwrap()
    }

    fn payload() -> FormPayload {
        FormPayload {
            customer_name: "Jane Doe".into(),
            customer_email: "jane@example.com".into(),
            message_details: "Hello!".into(),
            recaptcha_response: "tok123".into(),
            bot_check: None,
        }
    }
}
