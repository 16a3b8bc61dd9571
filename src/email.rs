//! EmailJS REST delivery.

use serde::Serialize;
use thiserror::Error;

use crate::contact::ContactForm;
#[cfg(feature = "ssr")]
use crate::contact::ContactError;

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";
pub const PRIVATE_KEY_VAR: &str = "EMAILJS_PRIVATE_KEY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    /// Needed when the account enforces private-key checks for API calls.
    pub private_key: Option<String>,
}

impl EmailConfig {
    #[cfg(feature = "ssr")]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .ok_or(ConfigError::Missing(key))
        };
        Ok(Self {
            service_id: required(SERVICE_ID_VAR)?,
            template_id: required(TEMPLATE_ID_VAR)?,
            public_key: required(PUBLIC_KEY_VAR)?,
            private_key: lookup(PRIVATE_KEY_VAR).filter(|v| !v.trim().is_empty()),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct TemplateParams<'a> {
    pub user_name: &'a str,
    pub user_email: &'a str,
    pub user_phone: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Serialize)]
pub struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
    pub template_params: TemplateParams<'a>,
}

impl<'a> SendRequest<'a> {
    pub fn new(config: &'a EmailConfig, form: &'a ContactForm) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            access_token: config.private_key.as_deref(),
            template_params: TemplateParams {
                user_name: form.name.trim(),
                user_email: form.email.trim(),
                user_phone: form.phone.trim(),
                message: &form.message,
            },
        }
    }
}

#[cfg(feature = "ssr")]
pub struct EmailClient {
    http: reqwest::Client,
    config: EmailConfig,
    endpoint: String,
}

#[cfg(feature = "ssr")]
impl EmailClient {
    pub fn new(config: EmailConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
            endpoint: EMAILJS_ENDPOINT.to_string(),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub async fn send(&self, form: &ContactForm) -> Result<(), ContactError> {
        let body = SendRequest::new(&self.config, form);
        let res = self
            .http
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        let status = res.status();
        if status == http::StatusCode::OK {
            tracing::info!(template = %self.config.template_id, "contact message delivered");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(%status, %body, "email service rejected contact message");
        Err(ContactError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn config_requires_three_keys() {
        let vars = env(&[
            (SERVICE_ID_VAR, "service_x"),
            (TEMPLATE_ID_VAR, "template_y"),
            (PUBLIC_KEY_VAR, "pk"),
        ]);
        let config = EmailConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.service_id, "service_x");
        assert_eq!(config.private_key, None);

        let vars = env(&[(SERVICE_ID_VAR, "service_x"), (PUBLIC_KEY_VAR, "pk")]);
        assert_eq!(
            EmailConfig::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::Missing(TEMPLATE_ID_VAR))
        );
    }

    #[test]
    fn blank_values_count_as_missing() {
        let vars = env(&[
            (SERVICE_ID_VAR, " "),
            (TEMPLATE_ID_VAR, "t"),
            (PUBLIC_KEY_VAR, "pk"),
        ]);
        assert_eq!(
            EmailConfig::from_lookup(|k| vars.get(k).cloned()),
            Err(ConfigError::Missing(SERVICE_ID_VAR))
        );
    }

    #[test]
    fn request_body_matches_emailjs_shape() {
        let config = EmailConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pub".into(),
            private_key: Some("priv".into()),
        };
        let form = ContactForm {
            name: " Ada ".into(),
            email: "ada@example.com".into(),
            phone: " +880 1700000000".into(),
            message: "Hi".into(),
        };
        let json = serde_json::to_value(SendRequest::new(&config, &form)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "pub",
                "accessToken": "priv",
                "template_params": {
                    "user_name": "Ada",
                    "user_email": "ada@example.com",
                    "user_phone": "+880 1700000000",
                    "message": "Hi"
                }
            })
        );
    }

    #[test]
    fn access_token_omitted_without_private_key() {
        let config = EmailConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pub".into(),
            private_key: None,
        };
        let form = ContactForm::default();
        let json = serde_json::to_value(SendRequest::new(&config, &form)).unwrap();
        assert!(json.get("accessToken").is_none());
    }
}

#[cfg(all(test, feature = "ssr"))]
mod delivery_tests {
    use std::sync::{Arc, Mutex};

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;

    use super::*;

    type Received = Arc<Mutex<Option<Value>>>;

    /// Local stand-in for the EmailJS endpoint that answers every request
    /// with `status` and `body`.
    async fn stub(status: StatusCode, body: &'static str) -> (String, Received) {
        let received = Received::default();
        let sink = received.clone();
        let app = Router::new().route(
            "/send",
            post(move |Json(payload): Json<Value>| async move {
                *sink.lock().expect("stub lock") = Some(payload);
                (status, body)
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        (format!("http://{addr}/send"), received)
    }

    fn client(endpoint: &str) -> EmailClient {
        EmailClient::new(EmailConfig {
            service_id: "svc".into(),
            template_id: "tpl".into(),
            public_key: "pub".into(),
            private_key: None,
        })
        .with_endpoint(endpoint)
    }

    fn form() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            phone: "+880 1700000000".into(),
            message: "Hello".into(),
        }
    }

    #[tokio::test]
    async fn accepted_message_is_ok() {
        let (endpoint, received) = stub(StatusCode::OK, "OK").await;

        assert_eq!(client(&endpoint).send(&form()).await, Ok(()));

        let payload = received.lock().unwrap().clone().expect("request reached stub");
        assert_eq!(payload["service_id"], "svc");
        assert_eq!(payload["user_id"], "pub");
        assert_eq!(payload["template_params"]["user_phone"], "+880 1700000000");
    }

    #[tokio::test]
    async fn non_ok_status_is_rejected_with_body() {
        let (endpoint, _) = stub(StatusCode::BAD_REQUEST, "The Public Key is invalid").await;

        assert_eq!(
            client(&endpoint).send(&form()).await,
            Err(ContactError::Rejected {
                status: 400,
                body: "The Public Key is invalid".into(),
            })
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let res = client(&format!("http://{addr}/send")).send(&form()).await;
        assert!(matches!(res, Err(ContactError::Network(_))), "{res:?}");
    }
}
