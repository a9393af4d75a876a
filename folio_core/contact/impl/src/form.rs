use folio_core_contact_contracts::{ContactFeatureService, ContactSubmitError, ContactSubmitted};
use folio_models::{contact::ContactSubmission, form::ContactForm};
use tracing::debug;

/// Drives a [`ContactForm`] through one submit attempt.
#[derive(Debug, Clone)]
pub struct ContactFormHandler<Contact> {
    contact: Contact,
}

impl<Contact> ContactFormHandler<Contact>
where
    Contact: ContactFeatureService,
{
    pub fn new(contact: Contact) -> Self {
        Self { contact }
    }

    /// Validates the form and sends it to the form endpoint, reporting the
    /// outcome in the form's feedback regions.
    ///
    /// Does nothing if a submission of this form is already in flight.
    pub async fn submit_form(&self, form: &mut ContactForm) {
        let Some(submission) = self.prepare(form) else {
            return;
        };
        let result = self.contact.submit(submission).await;
        self.resolve(form, result);
    }

    /// Synchronous part of a submit attempt, run before any request is sent.
    ///
    /// Clears old feedback, disables the submit button and validates the
    /// fields. Returns `None` if the form is already being submitted or
    /// validation failed, in which case the error is already shown and the
    /// button re-enabled.
    pub fn prepare(&self, form: &mut ContactForm) -> Option<ContactSubmission> {
        if !form.begin_submission() {
            debug!("ignoring submit while a submission is in flight");
            return None;
        }

        match form.collect() {
            Ok(submission) => Some(submission),
            Err(err) => {
                debug!(%err, "contact form is invalid");
                form.show_error(err.to_string());
                form.finish_submission();
                None
            }
        }
    }

    /// Shows the result of a submission and re-enables the submit button.
    pub fn resolve(
        &self,
        form: &mut ContactForm,
        result: Result<ContactSubmitted, ContactSubmitError>,
    ) {
        match result {
            Ok(ContactSubmitted { message }) => {
                form.show_success(message);
                form.reset();
            }
            Err(err) => form.show_error(err.to_string()),
        }
        form.finish_submission();
    }
}
