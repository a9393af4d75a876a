use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;
use thiserror::Error;

use crate::macros::nutype_string;

/// Maximum number of characters accepted in a contact message.
pub const CONTACT_MESSAGE_MAX_LEN: usize = 2000;

pub static CONTACT_EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// A validated contact form submission, ready to be sent to the form
/// endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub author: ContactAuthor,
    pub content: ContactMessageContent,
    pub recaptcha_response: RecaptchaResponse,
    /// Present only if the honeypot checkbox was checked.
    pub bot_check: Option<BotCheck>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactAuthor {
    pub name: ContactAuthorName,
    pub email: ContactEmail,
}

nutype_string!(ContactAuthorName(sanitize(trim), validate(not_empty)));

nutype_string!(ContactEmail(
    sanitize(trim),
    validate(regex = CONTACT_EMAIL_REGEX)
));

nutype_string!(ContactMessageContent(
    sanitize(trim),
    validate(not_empty, len_char_max = 2000)
));

nutype_string!(RecaptchaResponse(validate(not_empty)));

#[nutype(derive(Debug, Clone, PartialEq, Eq, From, Deref, Serialize, Deserialize))]
pub struct BotCheck(String);

/// Raw form field values as read from the page, before trimming.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawContactSubmission<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub message: &'a str,
    pub recaptcha_response: &'a str,
    pub bot_check: Option<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactFormError {
    #[error("Please fill out all required fields.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Message too long (max 2000 characters).")]
    MessageTooLong,
}

impl TryFrom<RawContactSubmission<'_>> for ContactSubmission {
    type Error = ContactFormError;

    fn try_from(raw: RawContactSubmission<'_>) -> Result<Self, Self::Error> {
        let name = raw.name.trim();
        let email = raw.email.trim();
        let message = raw.message.trim();

        if [name, email, message, raw.recaptcha_response]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(ContactFormError::MissingFields);
        }

        let email = ContactEmail::try_new(email).map_err(|_| ContactFormError::InvalidEmail)?;
        let content =
            ContactMessageContent::try_new(message).map_err(|_| ContactFormError::MessageTooLong)?;
        let name = ContactAuthorName::try_new(name).map_err(|_| ContactFormError::MissingFields)?;
        let recaptcha_response = RecaptchaResponse::try_new(raw.recaptcha_response)
            .map_err(|_| ContactFormError::MissingFields)?;

        Ok(Self {
            author: ContactAuthor { name, email },
            content,
            recaptcha_response,
            bot_check: raw.bot_check.map(BotCheck::new),
        })
    }
}

#[cfg(test)]
mod tests {
    use folio_utils::assert_matches;
    use pretty_assertions::assert_eq;

    use super::*;

    fn raw<'a>() -> RawContactSubmission<'a> {
        RawContactSubmission {
            name: "  Jane Doe ",
            email: " jane@example.com",
            message: "Hello!\n",
            recaptcha_response: "tok123",
            bot_check: None,
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let submission = ContactSubmission::try_from(raw()).unwrap();

        assert_eq!(submission.author.name.as_str(), "Jane Doe");
        assert_eq!(submission.author.email.as_str(), "jane@example.com");
        assert_eq!(submission.content.as_str(), "Hello!");
        assert_eq!(submission.recaptcha_response.as_str(), "tok123");
        assert_eq!(submission.bot_check, None);
    }

    #[test]
    fn bot_check_is_carried_over() {
        let submission = ContactSubmission::try_from(RawContactSubmission {
            bot_check: Some("on"),
            ..raw()
        })
        .unwrap();

        assert_eq!(submission.bot_check.as_deref().map(String::as_str), Some("on"));
    }

    #[test]
    fn missing_fields() {
        for raw in [
            RawContactSubmission { name: "   ", ..raw() },
            RawContactSubmission { email: "", ..raw() },
            RawContactSubmission { message: "\n\t ", ..raw() },
            RawContactSubmission {
                recaptcha_response: "",
                ..raw()
            },
        ] {
            assert_matches!(
                ContactSubmission::try_from(raw),
                Err(ContactFormError::MissingFields)
            );
        }
    }

    #[test]
    fn missing_fields_take_precedence_over_invalid_email() {
        let result = ContactSubmission::try_from(RawContactSubmission {
            email: "not-an-email",
            message: "",
            ..raw()
        });

        assert_matches!(result, Err(ContactFormError::MissingFields));
    }

    #[test]
    fn invalid_email() {
        for email in [
            "not-an-email",
            "jane@example",
            "@example.com",
            "jane@.com",
            "ja ne@example.com",
            "jane@exa@mple.com",
        ] {
            let result = ContactSubmission::try_from(RawContactSubmission { email, ..raw() });
            assert_matches!(result, Err(ContactFormError::InvalidEmail));
        }
    }

    #[test]
    fn message_length_limit() {
        let max = "x".repeat(CONTACT_MESSAGE_MAX_LEN);
        ContactSubmission::try_from(RawContactSubmission {
            message: &max,
            ..raw()
        })
        .unwrap();

        let too_long = "x".repeat(CONTACT_MESSAGE_MAX_LEN + 1);
        let result = ContactSubmission::try_from(RawContactSubmission {
            message: &too_long,
            ..raw()
        });
        assert_matches!(result, Err(ContactFormError::MessageTooLong));
    }

    #[test]
    fn message_length_counts_characters() {
        let message = "ä".repeat(CONTACT_MESSAGE_MAX_LEN);
        ContactSubmission::try_from(RawContactSubmission {
            message: &message,
            ..raw()
        })
        .unwrap();
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactFormError::MissingFields.to_string(),
            "Please fill out all required fields."
        );
        assert_eq!(
            ContactFormError::InvalidEmail.to_string(),
            "Please enter a valid email address."
        );
        assert_eq!(
            ContactFormError::MessageTooLong.to_string(),
            "Message too long (max 2000 characters)."
        );
    }

    #[test]
    fn string_newtypes() {
        assert_eq!(
            *ContactEmail::try_new(" jane@example.com ").unwrap(),
            "jane@example.com"
        );
        assert_eq!(
            *ContactAuthorName::try_from("Jane Doe".to_owned()).unwrap(),
            "Jane Doe"
        );
        assert!(ContactAuthorName::try_new("   ").is_err());
        assert!(RecaptchaResponse::try_new("").is_err());
        assert!(ContactMessageContent::try_new("x".repeat(2001)).is_err());
    }
}
