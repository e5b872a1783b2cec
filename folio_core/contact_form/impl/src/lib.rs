use std::sync::Arc;

use folio_core_contact_form_contracts::{
    ContactFormService, ContactFormSubmitError, ContactFormView, SubmitEvent,
};
use folio_extern_contracts::contact::ContactApiService;
use folio_models::contact::{ContactField, ContactMessage, ValidationResult};
use folio_shared_contracts::notification::{
    Notification, NotificationService, NotificationVariant,
};
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<ContactApi, NotificationS> {
    contact_api: ContactApi,
    notification: NotificationS,
    state: Arc<watch::Sender<ContactFormView>>,
}

impl<ContactApi, NotificationS> ContactFormServiceImpl<ContactApi, NotificationS> {
    /// Creates a form with an empty message.
    pub fn new(contact_api: ContactApi, notification: NotificationS) -> Self {
        let (state, _) = watch::channel(ContactFormView::default());
        Self {
            contact_api,
            notification,
            state: state.into(),
        }
    }

    /// Validates the message and marks the form as submitting if it is valid.
    fn begin_submit(&self) -> Result<ContactMessage, ContactFormSubmitError> {
        let mut result = Err(ContactFormSubmitError::InFlight);
        self.state.send_if_modified(|view| {
            if view.submitting {
                return false;
            }

            view.errors = view.message.validate();
            result = if view.errors.is_valid() {
                view.submitting = true;
                Ok(view.message.clone())
            } else {
                Err(ContactFormSubmitError::Invalid(view.errors.clone()))
            };
            true
        });
        result
    }
}

impl<ContactApi, NotificationS> ContactFormService
    for ContactFormServiceImpl<ContactApi, NotificationS>
where
    ContactApi: ContactApiService,
    NotificationS: NotificationService,
{
    fn update_field(&self, field: ContactField, value: String) {
        self.state
            .send_modify(|view| view.message.set(field, value));
    }

    fn validate(&self) -> ValidationResult {
        self.state.borrow().message.validate()
    }

    #[instrument(skip_all)]
    async fn submit(&self, event: &mut SubmitEvent) -> Result<(), ContactFormSubmitError> {
        event.prevent_default();

        let message = self.begin_submit().inspect_err(|err| match err {
            ContactFormSubmitError::Invalid(errors) => {
                debug!(?errors, "contact message is invalid")
            }
            _ => debug!("ignoring submit while a submission is in flight"),
        })?;

        match self.contact_api.send_message(message).await {
            Ok(()) => {
                info!("contact message sent");
                self.notification.notify(sent_notification());
                self.state.send_modify(|view| {
                    view.message = ContactMessage::default();
                    view.submitting = false;
                });
                Ok(())
            }
            Err(err) => {
                warn!("Failed to send contact message: {err}");
                self.notification.notify(failed_notification());
                self.state.send_modify(|view| view.submitting = false);
                Err(ContactFormSubmitError::Send(err))
            }
        }
    }

    fn view(&self) -> ContactFormView {
        self.state.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<ContactFormView> {
        self.state.subscribe()
    }
}

fn sent_notification() -> Notification {
    Notification {
        title: "Message sent successfully!".into(),
        description: "Thank you for reaching out. I'll get back to you soon.".into(),
        variant: NotificationVariant::Default,
    }
}

fn failed_notification() -> Notification {
    Notification {
        title: "Failed to send message".into(),
        description: "Please try again later or contact me directly via email.".into(),
        variant: NotificationVariant::Destructive,
    }
}
