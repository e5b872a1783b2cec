use std::future::Future;

use folio_models::contact::ContactSubmission;

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactService: Send + Sync + 'static {
    /// Accepts a message posted to the contact endpoint.
    fn receive_message(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockContactService {
    pub fn with_receive_message(mut self, submission: ContactSubmission, ok: bool) -> Self {
        self.expect_receive_message()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| {
                let result = match ok {
                    true => Ok(()),
                    false => Err(anyhow::anyhow!("failed to process contact message")),
                };
                Box::pin(std::future::ready(result))
            });
        self
    }
}
