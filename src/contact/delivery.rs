use std::{collections::BTreeMap, future::Future};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::form::{FormData, PHONE_NOT_PROVIDED};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    #[error("email relay unreachable: {0}")]
    Transport(String),
    #[error("email relay rejected the request ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("server relay failed: {0}")]
    Relay(String),
}

/// The two emails a contact submission produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notice {
    /// Alerts the site owner about a new message.
    OwnerNotification,
    /// Confirms receipt to whoever sent the message.
    SenderAcknowledgment,
}

impl Notice {
    /// Template variables of this notice, filled from the form.
    pub fn params(self, data: &FormData) -> BTreeMap<String, String> {
        let params = match self {
            Notice::OwnerNotification => vec![
                ("from_name", data.name.as_str()),
                ("from_email", data.email.as_str()),
                ("from_phone", data.phone_or_default()),
                ("message", data.message.as_str()),
            ],
            Notice::SenderAcknowledgment => vec![
                ("to_email", data.email.as_str()),
                ("name", data.name.as_str()),
                ("message", data.message.as_str()),
            ],
        };
        params
            .into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

/// One templated email, addressed through the relay service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRequest {
    pub notice: Notice,
    pub service_id: String,
    pub template_id: String,
    pub template_params: BTreeMap<String, String>,
    pub public_key: String,
}

impl EmailRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.template_params.get(key).map(String::as_str)
    }
}

/// What the browser hands to the server relay. Addressing and keys are not
/// part of it: the server fills those in from its own configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayMessage {
    pub notice: Notice,
    pub form: FormData,
}

impl RelayMessage {
    /// Recovers the form fields a request was built from. Variables the
    /// notice does not define are dropped.
    pub fn from_request(request: &EmailRequest) -> Self {
        let param = |key: &str| request.param(key).unwrap_or_default().to_string();
        let form = match request.notice {
            Notice::OwnerNotification => FormData {
                name: param("from_name"),
                email: param("from_email"),
                phone: request
                    .param("from_phone")
                    .filter(|phone| *phone != PHONE_NOT_PROVIDED)
                    .unwrap_or_default()
                    .to_string(),
                message: param("message"),
            },
            Notice::SenderAcknowledgment => FormData {
                name: param("name"),
                email: param("to_email"),
                phone: String::new(),
                message: param("message"),
            },
        };
        Self {
            notice: request.notice,
            form,
        }
    }
}

/// Sends templated emails. Each call is attempted at most once.
pub trait EmailDelivery {
    fn send(&self, request: EmailRequest) -> impl Future<Output = Result<(), DeliveryError>>;
}

/// JSON body of the relay service's send endpoint.
#[derive(Debug, Serialize)]
pub struct SendPayload<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a BTreeMap<String, String>,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<&'a str>,
}

impl<'a> SendPayload<'a> {
    pub fn new(request: &'a EmailRequest, access_token: Option<&'a str>) -> Self {
        Self {
            service_id: &request.service_id,
            template_id: &request.template_id,
            user_id: &request.public_key,
            template_params: &request.template_params,
            access_token,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request() -> EmailRequest {
        EmailRequest {
            notice: Notice::OwnerNotification,
            service_id: "service_1".to_string(),
            template_id: "template_owner".to_string(),
            template_params: BTreeMap::from([
                ("from_name".to_string(), "Ada".to_string()),
                ("message".to_string(), "Hello".to_string()),
            ]),
            public_key: "pk".to_string(),
        }
    }

    #[test]
    fn test_payload_without_access_token() {
        let request = request();
        let payload = serde_json::to_value(SendPayload::new(&request, None)).unwrap();
        assert_eq!(
            payload,
            json!({
                "service_id": "service_1",
                "template_id": "template_owner",
                "user_id": "pk",
                "template_params": { "from_name": "Ada", "message": "Hello" },
            })
        );
    }

    #[test]
    fn test_payload_with_access_token() {
        let request = request();
        let payload = serde_json::to_value(SendPayload::new(&request, Some("secret"))).unwrap();
        assert_eq!(payload["accessToken"], "secret");
        assert_eq!(request.param("from_name"), Some("Ada"));
        assert_eq!(request.param("to_email"), None);
    }

    #[test]
    fn test_relay_message_carries_only_the_form() {
        let mut request = request();
        request.template_params.extend([
            ("from_email".to_string(), "ada@example.com".to_string()),
            ("from_phone".to_string(), PHONE_NOT_PROVIDED.to_string()),
            ("bcc".to_string(), "someone@example.com".to_string()),
        ]);

        let message = RelayMessage::from_request(&request);
        assert_eq!(message.notice, Notice::OwnerNotification);
        assert_eq!(
            message.form,
            FormData {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                phone: String::new(),
                message: "Hello".to_string(),
            }
        );

        let body = serde_json::to_value(&message).unwrap();
        assert_eq!(body.as_object().unwrap().len(), 2);
        let body = body.to_string();
        for leaked in ["service_1", "template_owner", "pk", "someone@example.com"] {
            assert!(!body.contains(leaked), "{leaked} reached the relay body");
        }
    }

    #[test]
    fn test_relay_message_round_trips_the_acknowledgment() {
        let data = FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: "555".to_string(),
            message: "Hello".to_string(),
        };
        let request = EmailRequest {
            notice: Notice::SenderAcknowledgment,
            service_id: String::new(),
            template_id: String::new(),
            template_params: Notice::SenderAcknowledgment.params(&data),
            public_key: String::new(),
        };

        let message = RelayMessage::from_request(&request);
        assert_eq!(
            Notice::SenderAcknowledgment.params(&message.form),
            request.template_params
        );
        assert!(message.form.phone.is_empty());
    }
}
