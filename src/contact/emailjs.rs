use std::{env::var, sync::LazyLock, time::Duration};

use reqwest::Client as HttpClient;
use thiserror::Error;

use super::{
    config::{ConfigError, ContactConfig},
    delivery::{DeliveryError, EmailDelivery, EmailRequest, RelayMessage, SendPayload},
    form::Field,
};

pub const DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub static EMAILJS: LazyLock<EmailJsClient> = LazyLock::new(EmailJsClient::from_env);

/// Identifiers the server addresses relayed messages with.
pub static RELAY_CONFIG: LazyLock<ContactConfig> = LazyLock::new(ContactConfig::from_build_env);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("relayed message is missing `{}`", .0.name())]
    Incomplete(Field),
    #[error(transparent)]
    NotConfigured(#[from] ConfigError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
}

/// Server side client of the EmailJS send endpoint.
///
/// EmailJS only accepts calls from outside a browser when the account allows
/// it and the request carries the private key, read from `EMAILJS_PRIVATE_KEY`.
#[derive(Clone)]
pub struct EmailJsClient {
    http_client: HttpClient,
    endpoint: String,
    access_token: Option<String>,
}

impl EmailJsClient {
    pub fn new(endpoint: impl Into<String>, access_token: Option<String>) -> Self {
        let http_client = HttpClient::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|err| {
                tracing::error!("failed to build email relay client, using defaults: {err}");
                HttpClient::new()
            });

        Self {
            http_client,
            endpoint: endpoint.into(),
            access_token,
        }
    }

    pub fn from_env() -> Self {
        let endpoint = var("EMAILJS_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let access_token = var("EMAILJS_PRIVATE_KEY").ok().filter(|k| !k.is_empty());
        if access_token.is_none() {
            tracing::warn!("EMAILJS_PRIVATE_KEY not set, server side sends may be refused");
        }
        Self::new(endpoint, access_token)
    }

    /// Sends a notice on behalf of a browser. Service, template and keys
    /// come from `config`; the browser only supplies the form.
    pub async fn relay(
        &self,
        config: &ContactConfig,
        message: RelayMessage,
    ) -> Result<(), RelayError> {
        if let Some(field) = message.form.first_missing() {
            tracing::warn!(field = field.name(), "refusing incomplete relayed message");
            return Err(RelayError::Incomplete(field));
        }
        config.validate()?;

        self.send(config.request(message.notice, &message.form)).await?;
        Ok(())
    }
}

impl EmailDelivery for EmailJsClient {
    async fn send(&self, request: EmailRequest) -> Result<(), DeliveryError> {
        let payload = SendPayload::new(&request, self.access_token.as_deref());

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&payload)
            .send()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(template = %request.template_id, "email relayed");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_else(|err| {
            tracing::warn!("failed to read email relay response: {err}");
            String::new()
        });
        tracing::warn!(template = %request.template_id, %status, "email relay refused: {body}");
        Err(DeliveryError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::{BTreeMap, VecDeque},
        sync::{Arc, Mutex},
    };

    use axum::{http::StatusCode, routing::post, Json, Router};
    use serde_json::Value;
    use tokio::net::TcpListener;

    use super::*;
    use crate::contact::{delivery::Notice, form::FormData};

    const REFUSAL: &str = "The template ID is invalid";

    type Received = Arc<Mutex<Vec<Value>>>;

    /// Serves a fake send endpoint answering with `statuses` in turn, 200
    /// once they run out. Returns its URL and the bodies it received.
    async fn endpoint(statuses: &[u16]) -> (String, Received) {
        let received = Received::default();
        let statuses = Arc::new(Mutex::new(statuses.iter().copied().collect::<VecDeque<_>>()));

        let app = Router::new().route(
            "/send",
            post({
                let received = received.clone();
                move |Json(body): Json<Value>| async move {
                    received.lock().unwrap().push(body);
                    let status = statuses.lock().unwrap().pop_front().unwrap_or(200);
                    let status = StatusCode::from_u16(status).unwrap();
                    let text = if status.is_success() { "OK" } else { REFUSAL };
                    (status, text)
                }
            }),
        );

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        (format!("http://{addr}/send"), received)
    }

    fn site_config() -> ContactConfig {
        ContactConfig {
            service_id: "service_site".to_string(),
            owner_template_id: "template_owner".to_string(),
            sender_template_id: "template_sender".to_string(),
            public_key: "public_site".to_string(),
        }
    }

    fn ada() -> FormData {
        FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_maps_status() {
        let (url, received) = endpoint(&[200, 400]).await;
        let client = EmailJsClient::new(url, None);
        let request = site_config().request(Notice::OwnerNotification, &ada());

        assert_eq!(client.send(request.clone()).await, Ok(()));
        assert_eq!(
            client.send(request).await,
            Err(DeliveryError::Rejected {
                status: 400,
                body: REFUSAL.to_string(),
            })
        );

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 2);
        assert_eq!(received[0]["user_id"], "public_site");
        assert!(received[0].get("accessToken").is_none());
    }

    #[tokio::test]
    async fn test_send_attaches_private_key() {
        let (url, received) = endpoint(&[]).await;
        let client = EmailJsClient::new(url, Some("private".to_string()));

        let request = site_config().request(Notice::SenderAcknowledgment, &ada());
        assert_eq!(client.send(request).await, Ok(()));
        assert_eq!(received.lock().unwrap()[0]["accessToken"], "private");
    }

    #[tokio::test]
    async fn test_send_unreachable_is_transport_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = EmailJsClient::new(format!("http://{addr}/send"), None);
        let request = site_config().request(Notice::OwnerNotification, &ada());
        assert!(matches!(
            client.send(request).await,
            Err(DeliveryError::Transport(_))
        ));
    }

    #[tokio::test]
    async fn test_relay_addresses_with_server_config() {
        let (url, received) = endpoint(&[]).await;
        let client = EmailJsClient::new(url, Some("private".to_string()));

        // a browser asking for someone else's service and template
        let mut request = ContactConfig {
            service_id: "other_service".to_string(),
            owner_template_id: "other_template".to_string(),
            sender_template_id: "other_template".to_string(),
            public_key: "other_key".to_string(),
        }
        .request(Notice::SenderAcknowledgment, &ada());
        request
            .template_params
            .insert("bcc".to_string(), "list@example.com".to_string());

        let message = RelayMessage::from_request(&request);
        assert_eq!(client.relay(&site_config(), message).await, Ok(()));

        let received = received.lock().unwrap();
        let body = &received[0];
        assert_eq!(body["service_id"], "service_site");
        assert_eq!(body["template_id"], "template_sender");
        assert_eq!(body["user_id"], "public_site");
        assert_eq!(body["accessToken"], "private");

        let params: BTreeMap<String, String> =
            serde_json::from_value(body["template_params"].clone()).unwrap();
        assert_eq!(params, Notice::SenderAcknowledgment.params(&ada()));
    }

    #[tokio::test]
    async fn test_relay_refuses_incomplete_message() {
        let (url, received) = endpoint(&[]).await;
        let client = EmailJsClient::new(url, None);

        let mut form = ada();
        form.message = "   ".to_string();
        let message = RelayMessage {
            notice: Notice::OwnerNotification,
            form,
        };

        assert_eq!(
            client.relay(&site_config(), message).await,
            Err(RelayError::Incomplete(Field::Message))
        );
        assert_eq!(
            client
                .relay(
                    &ContactConfig::default(),
                    RelayMessage {
                        notice: Notice::OwnerNotification,
                        form: ada(),
                    }
                )
                .await,
            Err(RelayError::NotConfigured(ConfigError::Missing(
                "CONTACT_SERVICE_ID"
            )))
        );
        assert!(received.lock().unwrap().is_empty());
    }
}
