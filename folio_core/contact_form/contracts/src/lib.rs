use std::future::Future;

use folio_extern_contracts::contact::ContactApiError;
use folio_models::contact::{ContactField, ContactFieldError, ContactMessage, ValidationResult};
use thiserror::Error;
use tokio::sync::watch;

/// State and behavior of one contact form instance.
///
/// Every state change is published to the receivers returned by
/// [`subscribe`](Self::subscribe).
pub trait ContactFormService: Send + Sync + 'static {
    /// Sets a single field of the message. Does not validate.
    fn update_field(&self, field: ContactField, value: String);

    /// Validates the current message without storing the result.
    fn validate(&self) -> ValidationResult;

    /// Validates and sends the current message.
    ///
    /// At most one submission is in flight per form. On success the message
    /// is reset, on failure the entered values are kept for a retry.
    fn submit(
        &self,
        event: &mut SubmitEvent,
    ) -> impl Future<Output = Result<(), ContactFormSubmitError>> + Send;

    /// Returns the current state of the form.
    fn view(&self) -> ContactFormView;

    fn subscribe(&self) -> watch::Receiver<ContactFormView>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormView {
    pub message: ContactMessage,
    /// Result of the last submit attempt.
    pub errors: ValidationResult,
    pub submitting: bool,
}

impl ContactFormView {
    pub fn field_error(&self, field: ContactField) -> Option<ContactFieldError> {
        self.errors.error(field)
    }

    pub fn submit_disabled(&self) -> bool {
        self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        match self.submitting {
            true => "Sending...",
            false => "Send Message",
        }
    }
}

/// The user action that triggered a submission.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the default side effect of the event (e.g. page
    /// navigation of a native form submission).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Debug, Error)]
pub enum ContactFormSubmitError {
    #[error("The contact message is invalid.")]
    Invalid(ValidationResult),
    #[error("A submission is already in flight.")]
    InFlight,
    #[error("Failed to send message.")]
    Send(#[source] ContactApiError),
}
