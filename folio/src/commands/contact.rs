use std::io::Write;

use anyhow::{bail, Context};
use clap::Args;
use folio_config::Config;
use folio_core_contact_form_contracts::{
    ContactFormService, ContactFormSubmitError, SubmitEvent,
};
use folio_models::contact::{ContactField, ContactMessage};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::debug;
use url::Url;

use crate::environment::{ConfigProvider, Provider};

#[derive(Debug, Args)]
pub struct ContactCommand {
    /// Prefill the name field
    #[arg(long)]
    name: Option<String>,
    /// Prefill the email field
    #[arg(long)]
    email: Option<String>,
    /// Prefill the message field
    #[arg(long)]
    message: Option<String>,
    /// Send the message to this contact endpoint instead of the configured one
    #[arg(long)]
    endpoint: Option<Url>,
}

impl ContactCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut config = ConfigProvider::new(&config)?;
        if let Some(endpoint) = self.endpoint {
            config = config.with_contact_endpoint(endpoint);
        }
        let form = Provider::new(config).contact_form()?;

        let prefill = ContactMessage {
            name: self.name.unwrap_or_default(),
            email: self.email.unwrap_or_default(),
            text: self.message.unwrap_or_default(),
        };

        fill_and_submit(
            &form,
            prefill,
            BufReader::new(tokio::io::stdin()),
            &mut std::io::stdout(),
        )
        .await
    }
}

/// Runs the contact form on a terminal.
///
/// Prompts for every field that is empty or failed validation until the form
/// accepts the message. After a failed delivery the user may retry with the
/// same message.
pub async fn fill_and_submit(
    form: &impl ContactFormService,
    prefill: ContactMessage,
    mut input: impl AsyncBufRead + Unpin,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    for field in ContactField::ALL {
        let value = prefill.get(field);
        if !value.is_empty() {
            form.update_field(field, value.into());
        }
    }

    loop {
        let view = form.view();
        for field in ContactField::ALL {
            let error = view.field_error(field);
            if error.is_none() && !view.message.get(field).is_empty() {
                continue;
            }
            if let Some(error) = error {
                writeln!(out, "{error}")?;
            }
            write!(out, "{}: ", field.label())?;
            out.flush()?;
            let value = read_line(&mut input).await?;
            form.update_field(field, value);
        }

        match submit(form, out).await? {
            Ok(()) => return Ok(()),
            Err(ContactFormSubmitError::Invalid(errors)) => {
                debug!(?errors, "contact message is invalid");
            }
            Err(ContactFormSubmitError::InFlight) => {
                bail!("Another submission of this form is still in flight")
            }
            Err(ContactFormSubmitError::Send(err)) => {
                debug!("failed to send contact message: {err:#}");
                write!(out, "Retry? [Y/n] ")?;
                out.flush()?;
                let answer = read_line(&mut input).await?;
                if !matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes") {
                    bail!("Message was not sent");
                }
            }
        }
    }
}

/// Submits the form and reports progress while the submission is in flight.
async fn submit(
    form: &impl ContactFormService,
    out: &mut impl Write,
) -> anyhow::Result<Result<(), ContactFormSubmitError>> {
    let mut updates = form.subscribe();
    updates.mark_unchanged();

    let mut event = SubmitEvent::new();
    let mut submit = std::pin::pin!(form.submit(&mut event));
    let mut announced = false;

    loop {
        tokio::select! {
            result = &mut submit => return Ok(result),
            Ok(()) = updates.changed() => {
                let label = {
                    let view = updates.borrow_and_update();
                    view.submitting.then(|| view.submit_label())
                };
                if let Some(label) = label.filter(|_| !announced) {
                    writeln!(out, "{label}")?;
                    out.flush()?;
                    announced = true;
                }
            }
        }
    }
}

async fn read_line(input: &mut (impl AsyncBufRead + Unpin)) -> anyhow::Result<String> {
    let mut line = String::new();
    let n = input
        .read_line(&mut line)
        .await
        .context("Failed to read input")?;
    if n == 0 {
        bail!("Unexpected end of input");
    }
    Ok(line.trim_end_matches(['\n', '\r']).into())
}
