use std::sync::LazyLock;

use folio_models::contact::{
    ContactMessage, ContactSubmission, ContactSubmissionEmail, ContactSubmissionName,
    ContactSubmissionText,
};

/// The shortest message that passes validation.
pub static JO: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Jo".into(),
    email: "jo@x.com".into(),
    text: "Hello!".into(),
});

pub static MAX: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "Max Mustermann".into(),
    email: "max.mustermann@example.de".into(),
    text: "Hi! I saw your projects and would like to talk about a role on our team.".into(),
});

/// Fails every field check.
pub static INVALID: LazyLock<ContactMessage> = LazyLock::new(|| ContactMessage {
    name: "J".into(),
    email: "not-an-email".into(),
    text: "hi".into(),
});

pub static MAX_SUBMISSION: LazyLock<ContactSubmission> = LazyLock::new(|| submission(&MAX));

fn submission(message: &ContactMessage) -> ContactSubmission {
    ContactSubmission {
        name: ContactSubmissionName::try_new(message.name.clone()).unwrap(),
        email: ContactSubmissionEmail::try_new(message.email.clone()).unwrap(),
        text: ContactSubmissionText::try_new(message.text.clone()).unwrap(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixtures() {
        assert!(JO.validate().is_valid());
        assert!(MAX.validate().is_valid());
        assert_eq!(INVALID.validate().errors().count(), 3);
        assert_eq!(MAX_SUBMISSION.name.as_ref(), MAX.name);
        assert_eq!(MAX_SUBMISSION.text.as_ref(), MAX.text);
    }
}
