//! Outbox Notifier
//!
//! Records every outgoing message and logs it through `tracing`.
//! Delivery over a real transport is left to other adapters.

use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::Serialize;

use registrar::{DomainError, NotificationService};

use crate::config::NotificationConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Channel {
    Email,
    Sms,
}

/// A message accepted by the outbox
#[derive(Debug, Clone, Serialize)]
pub struct SentNotification {
    pub channel: Channel,
    pub recipient: String,
    /// Empty for SMS
    pub subject: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

/// Outbox implementation of NotificationService
pub struct OutboxNotifier {
    config: NotificationConfig,
    outbox: Mutex<Vec<SentNotification>>,
}

impl OutboxNotifier {
    pub fn new() -> Self {
        Self::with_config(NotificationConfig::default())
    }

    pub fn with_config(config: NotificationConfig) -> Self {
        Self {
            config,
            outbox: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far
    pub fn sent(&self) -> Vec<SentNotification> {
        self.outbox().clone()
    }

    pub fn emails_sent(&self) -> usize {
        self.count(Channel::Email)
    }

    pub fn sms_sent(&self) -> usize {
        self.count(Channel::Sms)
    }

    fn count(&self, channel: Channel) -> usize {
        self.outbox()
            .iter()
            .filter(|n| n.channel == channel)
            .count()
    }

    /// The outbox is only ever appended to, so a holder that panicked cannot
    /// leave it half-written and a poisoned lock is recovered on every path.
    fn outbox(&self) -> MutexGuard<'_, Vec<SentNotification>> {
        self.outbox.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, notification: SentNotification) {
        if !self.config.enabled {
            tracing::debug!(
                recipient = %notification.recipient,
                "Notifications disabled - dropping message"
            );
            return;
        }

        tracing::info!(
            "📨 {:?} from {} to {}: {}",
            notification.channel,
            self.config.sender,
            notification.recipient,
            notification.subject
        );

        self.outbox().push(notification);
    }
}

impl Default for OutboxNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService for OutboxNotifier {
    fn send_email(&self, address: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        if address.trim().is_empty() {
            return Err(DomainError::notification("Email address is empty"));
        }

        self.record(SentNotification {
            channel: Channel::Email,
            recipient: address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            sent_at: Utc::now(),
        });

        Ok(())
    }

    fn send_sms(&self, phone: &str, body: &str) -> Result<(), DomainError> {
        if phone.trim().is_empty() {
            return Err(DomainError::notification("Phone number is empty"));
        }

        self.record(SentNotification {
            channel: Channel::Sms,
            recipient: phone.to_string(),
            subject: String::new(),
            body: body.to_string(),
            sent_at: Utc::now(),
        });

        Ok(())
    }
}
