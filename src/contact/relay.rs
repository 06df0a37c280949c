use leptos::prelude::*;

use super::delivery::{DeliveryError, EmailDelivery, EmailRequest, RelayMessage};

/// Sends one notice through the server's EmailJS client. The server picks
/// service, template and keys itself, so callers cannot address anything
/// but the site's own templates.
#[server]
pub async fn relay_email(message: RelayMessage) -> Result<(), ServerFnError> {
    use super::emailjs::{EMAILJS, RELAY_CONFIG};

    EMAILJS
        .relay(&RELAY_CONFIG, message)
        .await
        .map_err(|err| ServerFnError::new(err.to_string()))
}

fn relay_failure(err: ServerFnError) -> DeliveryError {
    DeliveryError::Relay(err.to_string())
}

/// Delivers through the site's own server, which holds the relay credentials.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerRelay;

impl EmailDelivery for ServerRelay {
    async fn send(&self, request: EmailRequest) -> Result<(), DeliveryError> {
        relay_email(RelayMessage::from_request(&request))
            .await
            .map_err(relay_failure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_failure_keeps_server_message() {
        let err = relay_failure(ServerFnError::new("relayed message is missing `email`"));
        match err {
            DeliveryError::Relay(message) => {
                assert!(message.contains("relayed message is missing `email`"))
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
