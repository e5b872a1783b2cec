use folio_core_contact_contracts::ContactService;
use folio_models::contact::ContactSubmission;
use tracing::{info, instrument};

/// Logs contact messages. Nothing is stored or forwarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContactServiceImpl;

impl ContactService for ContactServiceImpl {
    #[instrument(skip_all)]
    async fn receive_message(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let ContactSubmission { name, email, text } = submission;
        info!(%name, %email, %text, "contact form submission");
        Ok(())
    }
}
