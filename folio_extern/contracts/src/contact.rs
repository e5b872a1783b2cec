use std::future::Future;

use folio_models::contact::ContactMessage;
use thiserror::Error;

/// Delivers contact messages to the contact endpoint.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactApiService: Send + Sync + 'static {
    /// Sends the message. Succeeds iff the endpoint accepted it.
    fn send_message(
        &self,
        message: ContactMessage,
    ) -> impl Future<Output = Result<(), ContactApiError>> + Send;
}

#[derive(Debug, Error)]
pub enum ContactApiError {
    #[error("The contact endpoint rejected the message ({status}): {error}")]
    Rejected { status: u16, error: String },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[cfg(feature = "mock")]
impl MockContactApiService {
    pub fn with_send_message(
        mut self,
        message: ContactMessage,
        result: Result<(), ContactApiError>,
    ) -> Self {
        self.expect_send_message()
            .once()
            .with(mockall::predicate::eq(message))
            .return_once(move |_| Box::pin(std::future::ready(result)));
        self
    }
}
