//! Headless model of the contact form as it appears on the page.
//!
//! [`ContactForm`] owns everything the submit flow reads from or writes to:
//! the input fields, the honeypot checkbox, the challenge widget, the submit
//! button and the feedback regions.

use crate::contact::{ContactFormError, ContactSubmission, RawContactSubmission};

pub const SUBMIT_LABEL: &str = "Submit";
pub const SUBMITTING_LABEL: &str = "Sending...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    pub bot_check: Checkbox,
    /// `None` if the challenge script did not load.
    pub challenge: Option<ChallengeWidget>,
    state: SubmissionState,
    feedback: Feedback,
}

/// Lifecycle of a single submit attempt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Resolved,
}

/// The success and error regions of the form. At most one is visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Feedback {
    #[default]
    None,
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success(&self) -> Option<&str> {
        match self {
            Self::Success(message) => Some(message),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub checked: bool,
    pub value: String,
}

impl Default for Checkbox {
    fn default() -> Self {
        Self {
            checked: false,
            value: "on".into(),
        }
    }
}

/// Client-side state of the anti-automation challenge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChallengeWidget {
    response: String,
    resets: u32,
}

impl ChallengeWidget {
    /// Records the token handed out after the user solved the challenge.
    pub fn solve(&mut self, response: impl Into<String>) {
        self.response = response.into();
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    /// Discards the current token so the challenge has to be solved again.
    pub fn reset(&mut self) {
        self.response.clear();
        self.resets += 1;
    }

    pub fn resets(&self) -> u32 {
        self.resets
    }
}

impl ContactForm {
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn submit_disabled(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmissionState::Submitting => SUBMITTING_LABEL,
            SubmissionState::Idle | SubmissionState::Resolved => SUBMIT_LABEL,
        }
    }

    pub fn challenge_response(&self) -> &str {
        self.challenge
            .as_ref()
            .map(ChallengeWidget::response)
            .unwrap_or_default()
    }

    /// Hides both feedback regions and disables the submit button.
    ///
    /// Returns `false` without touching the form if a submission is already
    /// in flight.
    pub fn begin_submission(&mut self) -> bool {
        if self.submit_disabled() {
            return false;
        }

        self.feedback = Feedback::None;
        self.state = SubmissionState::Submitting;
        true
    }

    /// Re-enables the submit button. Returns `false` if no submission was in
    /// flight.
    pub fn finish_submission(&mut self) -> bool {
        if !self.submit_disabled() {
            return false;
        }

        self.state = SubmissionState::Resolved;
        true
    }

    /// Reads the current field values and validates them.
    pub fn collect(&self) -> Result<ContactSubmission, ContactFormError> {
        RawContactSubmission {
            name: &self.name,
            email: &self.email,
            message: &self.message,
            recaptcha_response: self.challenge_response(),
            bot_check: self
                .bot_check
                .checked
                .then_some(self.bot_check.value.as_str()),
        }
        .try_into()
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        self.feedback = Feedback::Success(message.into());
    }

    pub fn show_error(&mut self, message: impl Into<String>) {
        self.feedback = Feedback::Error(message.into());
    }

    /// Clears all inputs and resets the challenge widget, if present.
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.message.clear();
        self.bot_check.checked = false;
        if let Some(challenge) = &mut self.challenge {
            challenge.reset();
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        let mut challenge = ChallengeWidget::default();
        challenge.solve("tok123");
        ContactForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            message: "Hello!".into(),
            challenge: Some(challenge),
            ..Default::default()
        }
    }

    #[test]
    fn initial_state() {
        let form = ContactForm::default();

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.feedback(), &Feedback::None);
        assert!(!form.submit_disabled());
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn begin_submission_clears_feedback_and_disables_submit() {
        let mut form = filled();
        form.show_error("old error");

        assert!(form.begin_submission());

        assert_eq!(form.feedback(), &Feedback::None);
        assert!(form.submit_disabled());
        assert_eq!(form.submit_label(), SUBMITTING_LABEL);
    }

    #[test]
    fn begin_submission_while_in_flight() {
        let mut form = filled();
        assert!(form.begin_submission());

        assert!(!form.begin_submission());
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn finish_submission_only_once() {
        let mut form = filled();
        form.begin_submission();

        assert!(form.finish_submission());
        assert!(!form.finish_submission());
        assert_eq!(form.state(), SubmissionState::Resolved);
        assert_eq!(form.submit_label(), SUBMIT_LABEL);
    }

    #[test]
    fn feedback_regions_are_exclusive() {
        let mut form = filled();

        form.show_success("yay");
        assert_eq!(form.feedback().success(), Some("yay"));
        assert_eq!(form.feedback().error(), None);

        form.show_error("nay");
        assert_eq!(form.feedback().success(), None);
        assert_eq!(form.feedback().error(), Some("nay"));
    }

    #[test]
    fn collect_reads_challenge_and_honeypot() {
        let mut form = filled();
        form.bot_check.checked = true;

        let submission = form.collect().unwrap();

        assert_eq!(submission.recaptcha_response.as_str(), "tok123");
        assert_eq!(submission.bot_check.as_deref().map(String::as_str), Some("on"));
    }

    #[test]
    fn collect_without_challenge_widget() {
        let form = ContactForm {
            challenge: None,
            ..filled()
        };

        assert_matches!(form.collect(), Err(ContactFormError::MissingFields));
    }

    #[test]
    fn reset_clears_inputs_and_challenge() {
        let mut form = filled();
        form.bot_check.checked = true;

        form.reset();

        assert_eq!(form.name, "");
        assert_eq!(form.email, "");
        assert_eq!(form.message, "");
        assert!(!form.bot_check.checked);
        let challenge = form.challenge.unwrap();
        assert_eq!(challenge.response(), "");
        assert_eq!(challenge.resets(), 1);
    }
}
