use std::{
    io::Write,
    sync::{Arc, Mutex},
};

use folio_shared_contracts::notification::{
    Notification, NotificationService, NotificationVariant,
};
use tracing::{info, warn};

/// Writes notifications to a terminal, one banner per notification.
#[derive(Clone)]
pub struct ConsoleNotificationServiceImpl {
    out: Arc<Mutex<dyn Write + Send>>,
}

impl std::fmt::Debug for ConsoleNotificationServiceImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConsoleNotificationServiceImpl")
            .finish_non_exhaustive()
    }
}

impl Default for ConsoleNotificationServiceImpl {
    fn default() -> Self {
        Self::new(std::io::stdout())
    }
}

impl ConsoleNotificationServiceImpl {
    pub fn new(out: impl Write + Send + 'static) -> Self {
        Self {
            out: Arc::new(Mutex::new(out)),
        }
    }
}

impl NotificationService for ConsoleNotificationServiceImpl {
    fn notify(&self, notification: Notification) {
        let Notification {
            title,
            description,
            variant,
        } = notification;

        let marker = match variant {
            NotificationVariant::Default => {
                info!(%title, "notification");
                "*"
            }
            NotificationVariant::Destructive => {
                warn!(%title, "notification");
                "!"
            }
        };

        let Ok(mut out) = self.out.lock() else {
            return;
        };
        if let Err(err) = writeln!(out, "[{marker}] {title}\n    {description}") {
            warn!("Failed to write notification: {err}");
        }
    }
}
