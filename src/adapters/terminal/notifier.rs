//! Terminal notifier - prints alerts and asks for confirmation with dialoguer.

use async_trait::async_trait;
use colored::Colorize;
use dialoguer::Confirm;
use tracing::warn;

use crate::ports::{Notification, NotificationLevel, Notifier};

/// Notifier for interactive use.
///
/// With `assume_yes` every confirmation is accepted without prompting.
#[derive(Debug, Default, Clone)]
pub struct TerminalNotifier {
    assume_yes: bool,
}

impl TerminalNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }
}

#[async_trait]
impl Notifier for TerminalNotifier {
    async fn notify(&self, notification: Notification) {
        match notification.level {
            NotificationLevel::Success => println!("{}", notification.message.green()),
            NotificationLevel::Failure => eprintln!("{}", notification.message.red()),
        }
    }

    async fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        let prompt = prompt.to_string();
        let answer = tokio::task::spawn_blocking(move || {
            Confirm::new().with_prompt(prompt).default(false).interact()
        })
        .await;

        match answer {
            Ok(Ok(accepted)) => accepted,
            Ok(Err(e)) => {
                warn!(error = %e, "confirmation prompt failed, treating as declined");
                false
            }
            Err(e) => {
                warn!(error = %e, "confirmation task failed, treating as declined");
                false
            }
        }
    }
}
