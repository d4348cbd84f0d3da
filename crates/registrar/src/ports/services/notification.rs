//! Notification Service Port
//!
//! Abstract interface for delivering messages to students.

use crate::domain::errors::DomainError;

/// Notification sink
///
/// Transport (SMTP, SMS gateway, ...) is up to the implementation.
///
/// # Example
///
/// ```rust,ignore
/// use registrar::ports::NotificationService;
///
/// struct SmtpNotifier { /* transport */ }
///
/// impl NotificationService for SmtpNotifier {
///     fn send_email(&self, address: &str, subject: &str, body: &str)
///         -> Result<(), DomainError>
///     {
///         // Hand the message to the mail relay
///     }
///     // ...
/// }
/// ```
pub trait NotificationService: Send + Sync {
    /// Send an email
    fn send_email(&self, address: &str, subject: &str, body: &str) -> Result<(), DomainError>;

    /// Send an SMS
    fn send_sms(&self, phone: &str, body: &str) -> Result<(), DomainError>;
}
