use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::notify::ToastQueue;

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl ContactForm {
    /// Names of the required fields that are blank, in form order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContactError {
    #[error("missing required field: {0}")]
    MissingField(String),
    #[error("email service is not configured: {0}")]
    NotConfigured(String),
    #[error("email service rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("could not reach email service: {0}")]
    Network(String),
}

/// Applies the outcome of one submit cycle: success clears the form and
/// raises a success toast, any failure keeps the fields and raises an error
/// toast. Exactly one toast is pushed per call.
pub fn resolve_submission<E: Display>(
    form: &mut ContactForm,
    outcome: Result<(), E>,
    toasts: &mut ToastQueue,
) -> u64 {
    match outcome {
        Ok(()) => {
            form.clear();
            toasts.success(SENT_MESSAGE)
        }
        Err(e) => {
            log::warn!("contact submission failed: {e}");
            toasts.error(FAILED_MESSAGE)
        }
    }
}

#[cfg(feature = "ssr")]
pub async fn deliver(form: ContactForm) -> Result<(), ContactError> {
    use crate::email::{EmailClient, EmailConfig};

    if let Some(field) = form.missing_fields().first() {
        return Err(ContactError::MissingField(field.to_string()));
    }
    let config = EmailConfig::from_env().map_err(|e| ContactError::NotConfigured(e.to_string()))?;
    EmailClient::new(config).send(&form).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ToastKind;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+880 1700000000".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[test]
    fn filled_form_is_complete() {
        assert!(filled().is_complete());
    }

    #[test]
    fn blank_phone_is_reported() {
        let form = ContactForm {
            phone: String::new(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["phone"]);
        assert!(!form.is_complete());
    }

    #[test]
    fn blank_fields_are_reported_in_order() {
        let form = ContactForm {
            name: "  ".to_string(),
            phone: " ".to_string(),
            message: String::new(),
            ..filled()
        };
        assert_eq!(form.missing_fields(), vec!["name", "phone", "message"]);
    }

    #[test]
    fn success_clears_form_with_one_toast() {
        let mut form = filled();
        let mut toasts = ToastQueue::new();
        resolve_submission::<ContactError>(&mut form, Ok(()), &mut toasts);
        assert_eq!(form, ContactForm::default());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.count(ToastKind::Success), 1);
    }

    #[test]
    fn failure_keeps_form_with_one_toast() {
        let mut form = filled();
        let mut toasts = ToastQueue::new();
        let err = ContactError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        };
        resolve_submission(&mut form, Err(err), &mut toasts);
        assert_eq!(form, filled());
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.count(ToastKind::Error), 1);
        assert_eq!(toasts.iter().next().map(|t| t.message.as_str()), Some(FAILED_MESSAGE));
    }

    #[test]
    fn retry_after_failure_can_succeed() {
        let mut form = filled();
        let mut toasts = ToastQueue::new();
        resolve_submission(&mut form, Err(ContactError::Network("timeout".into())), &mut toasts);
        resolve_submission::<ContactError>(&mut form, Ok(()), &mut toasts);
        assert!(form.name.is_empty());
        assert_eq!(toasts.count(ToastKind::Error), 1);
        assert_eq!(toasts.count(ToastKind::Success), 1);
    }
}
