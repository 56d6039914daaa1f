use nutype::nutype;
use thiserror::Error;

/// Raw contact form input, exactly as submitted by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A validated contact form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub author: ContactMessageAuthor,
    pub content: ContactMessageContent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessageAuthor {
    pub name: ContactMessageAuthorName,
    pub email: ContactEmail,
}

#[nutype(
    sanitize(trim),
    validate(not_empty),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageAuthorName(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, predicate = |email: &str| has_domain_with_dot(email)),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactEmail(String);

#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 4096),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct ContactMessageContent(String);

impl ContactMessageContent {
    pub const MAX_CHARS: usize = 4096;
}

/// The segment after the first `@` (up to any further `@`) contains a `.`.
fn has_domain_with_dot(email: &str) -> bool {
    email
        .split('@')
        .nth(1)
        .is_some_and(|domain| domain.contains('.'))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    #[error("All fields must not be empty")]
    Empty,
    #[error("Message exceeds 4096 character limit")]
    MessageTooLong,
    #[error("Invalid email format")]
    InvalidEmail,
}

impl TryFrom<ContactSubmission> for ContactMessage {
    type Error = ContactValidationError;

    /// Rules are checked in a fixed order: emptiness of all fields, then the
    /// message length, then the email format.
    fn try_from(submission: ContactSubmission) -> Result<Self, Self::Error> {
        let ContactSubmission {
            name,
            email,
            message,
        } = submission;

        if [&name, &email, &message]
            .into_iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(ContactValidationError::Empty);
        }

        let content = ContactMessageContent::try_new(message)
            .map_err(|_| ContactValidationError::MessageTooLong)?;
        let email =
            ContactEmail::try_new(email).map_err(|_| ContactValidationError::InvalidEmail)?;
        let name =
            ContactMessageAuthorName::try_new(name).map_err(|_| ContactValidationError::Empty)?;

        Ok(Self {
            author: ContactMessageAuthor { name, email },
            content,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn submission(name: &str, email: &str, message: &str) -> ContactSubmission {
        ContactSubmission {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    #[test]
    fn valid_submission_is_trimmed() {
        let result = ContactMessage::try_from(submission(
            "  Max Mustermann ",
            "\tmax.mustermann@example.de\n",
            "\n Hello World! \n",
        ))
        .unwrap();

        assert_eq!(*result.author.name, "Max Mustermann");
        assert_eq!(*result.author.email, "max.mustermann@example.de");
        assert_eq!(*result.content, "Hello World!");
    }

    #[test]
    fn empty_fields() {
        for (name, email, message) in [
            ("", "max@example.de", "Hello"),
            ("Max", "   ", "Hello"),
            ("Max", "max@example.de", "\n\t "),
            ("", "", ""),
        ] {
            let result = ContactMessage::try_from(submission(name, email, message));
            assert_eq!(result, Err(ContactValidationError::Empty));
        }
    }

    #[test]
    fn empty_fields_win_over_other_rules() {
        let long = "x".repeat(ContactMessageContent::MAX_CHARS + 1);
        let result = ContactMessage::try_from(submission("", "not-an-email", &long));
        assert_eq!(result, Err(ContactValidationError::Empty));
    }

    #[test]
    fn message_length_is_counted_in_chars() {
        let at_limit = "ä".repeat(ContactMessageContent::MAX_CHARS);
        let result = ContactMessage::try_from(submission("Max", "max@example.de", &at_limit));
        assert!(result.is_ok());

        let too_long = "ä".repeat(ContactMessageContent::MAX_CHARS + 1);
        let result = ContactMessage::try_from(submission("Max", "max@example.de", &too_long));
        assert_eq!(result, Err(ContactValidationError::MessageTooLong));
    }

    #[test]
    fn message_length_wins_over_email_format() {
        let too_long = "x".repeat(ContactMessageContent::MAX_CHARS + 1);
        let result = ContactMessage::try_from(submission("Max", "invalid", &too_long));
        assert_eq!(result, Err(ContactValidationError::MessageTooLong));
    }

    #[test]
    fn invalid_email() {
        for email in [
            "max",
            "max@example",
            "max.mustermann@localhost",
            "max@foo@example.de",
            "@",
        ] {
            let result = ContactMessage::try_from(submission("Max", email, "Hello"));
            assert_eq!(result, Err(ContactValidationError::InvalidEmail), "{email}");
        }
    }

    #[test]
    fn only_the_segment_after_the_first_at_is_checked() {
        let result = ContactMessage::try_from(submission("Max", "max@example.de@foo", "Hello"));
        assert_eq!(*result.unwrap().author.email, "max@example.de@foo");

        let result = ContactMessage::try_from(submission("Max", "a@b@c.d", "Hello"));
        assert_eq!(result, Err(ContactValidationError::InvalidEmail));
    }

    #[test]
    fn message_length_is_counted_after_trimming() {
        let padded = format!(
            "  \n{}\t ",
            "x".repeat(ContactMessageContent::MAX_CHARS)
        );
        let result = ContactMessage::try_from(submission("Max", "max@example.de", &padded));
        assert_eq!(
            result.unwrap().content.chars().count(),
            ContactMessageContent::MAX_CHARS
        );
    }

    #[test]
    fn minimal_valid_email() {
        let result = ContactMessage::try_from(submission("Max", "a@b.c", "Hello"));
        assert!(result.is_ok());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            ContactValidationError::Empty.to_string(),
            "All fields must not be empty"
        );
        assert_eq!(
            ContactValidationError::MessageTooLong.to_string(),
            "Message exceeds 4096 character limit"
        );
        assert_eq!(
            ContactValidationError::InvalidEmail.to_string(),
            "Invalid email format"
        );
    }
}
