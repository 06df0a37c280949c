use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    delivery::{EmailRequest, Notice},
    form::FormData,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("contact setting `{0}` is not set")]
    Missing(&'static str),
}

/// Email relay identifiers the contact form sends with every request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub service_id: String,
    pub owner_template_id: String,
    pub sender_template_id: String,
    pub public_key: String,
}

impl ContactConfig {
    /// Reads the identifiers baked in at build time from the `CONTACT_*`
    /// environment variables (see `build.rs`).
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("CONTACT_SERVICE_ID").unwrap_or_default().to_string(),
            owner_template_id: option_env!("CONTACT_OWNER_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            sender_template_id: option_env!("CONTACT_SENDER_TEMPLATE_ID")
                .unwrap_or_default()
                .to_string(),
            public_key: option_env!("CONTACT_PUBLIC_KEY").unwrap_or_default().to_string(),
        }
    }

    pub fn template_id(&self, notice: Notice) -> &str {
        match notice {
            Notice::OwnerNotification => &self.owner_template_id,
            Notice::SenderAcknowledgment => &self.sender_template_id,
        }
    }

    /// Addresses one notice about `data` with these identifiers.
    pub fn request(&self, notice: Notice, data: &FormData) -> EmailRequest {
        EmailRequest {
            notice,
            service_id: self.service_id.clone(),
            template_id: self.template_id(notice).to_string(),
            template_params: notice.params(data),
            public_key: self.public_key.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        [
            ("CONTACT_SERVICE_ID", &self.service_id),
            ("CONTACT_OWNER_TEMPLATE_ID", &self.owner_template_id),
            ("CONTACT_SENDER_TEMPLATE_ID", &self.sender_template_id),
            ("CONTACT_PUBLIC_KEY", &self.public_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map_or(Ok(()), |(name, _)| Err(ConfigError::Missing(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let mut config = ContactConfig {
            service_id: "service".to_string(),
            owner_template_id: "owner".to_string(),
            sender_template_id: "sender".to_string(),
            public_key: "key".to_string(),
        };
        assert_eq!(config.validate(), Ok(()));

        config.sender_template_id.clear();
        assert_eq!(
            config.validate(),
            Err(ConfigError::Missing("CONTACT_SENDER_TEMPLATE_ID"))
        );
        assert_eq!(
            ContactConfig::default().validate(),
            Err(ConfigError::Missing("CONTACT_SERVICE_ID"))
        );
    }

    #[test]
    fn test_request_uses_template_of_notice() {
        let config = ContactConfig {
            service_id: "service".to_string(),
            owner_template_id: "owner".to_string(),
            sender_template_id: "sender".to_string(),
            public_key: "key".to_string(),
        };
        let data = FormData {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            message: "Hello".to_string(),
        };

        let owner = config.request(Notice::OwnerNotification, &data);
        assert_eq!(owner.template_id, "owner");
        assert_eq!(owner.param("from_phone"), Some("Not provided"));

        let sender = config.request(Notice::SenderAcknowledgment, &data);
        assert_eq!(sender.template_id, "sender");
        assert_eq!(sender.service_id, "service");
        assert_eq!(sender.public_key, "key");
        assert_eq!(sender.param("to_email"), Some("ada@example.com"));
    }
}
