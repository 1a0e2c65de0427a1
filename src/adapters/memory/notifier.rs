//! Recording notifier for tests.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::ports::{Notification, Notifier};

/// Keeps every notification and answers confirmations with a fixed reply.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
    prompts: Mutex<Vec<String>>,
    accept: bool,
}

impl RecordingNotifier {
    /// Accepts every confirmation.
    pub fn accepting() -> Self {
        Self {
            accept: true,
            ..Default::default()
        }
    }

    /// Declines every confirmation.
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications.lock().unwrap().clone()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .map(|n| n.message)
            .collect()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn notify(&self, notification: Notification) {
        self.notifications.lock().unwrap().push(notification);
    }

    async fn confirm(&self, prompt: &str) -> bool {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.accept
    }
}
