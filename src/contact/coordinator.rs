use std::sync::Arc;

use thiserror::Error;

use super::{
    config::{ConfigError, ContactConfig},
    delivery::{DeliveryError, EmailDelivery, Notice},
    feedback::{Feedback, Presenter, SubmissionState, Timer, ToastKind},
    form::{Field, FormData, FormState},
    store::Store,
};

pub const SENT_MESSAGE: &str = "Message sent successfully!";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("required field `{}` is empty", .0.name())]
    Incomplete(Field),
    #[error(transparent)]
    NotConfigured(#[from] ConfigError),
    #[error("owner notification failed: {0}")]
    OwnerNotification(DeliveryError),
    #[error("sender acknowledgment failed: {0}")]
    SenderAcknowledgment(DeliveryError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(SubmissionError),
}

/// Sends a contact submission: first the owner alert, then the
/// acknowledgment to the sender, never both at once.
pub struct SubmissionCoordinator<D> {
    config: Arc<ContactConfig>,
    delivery: Arc<D>,
}

impl<D> Clone for SubmissionCoordinator<D> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            delivery: self.delivery.clone(),
        }
    }
}

impl<D: EmailDelivery> SubmissionCoordinator<D> {
    pub fn new(config: ContactConfig, delivery: D) -> Self {
        Self {
            config: Arc::new(config),
            delivery: Arc::new(delivery),
        }
    }

    pub async fn submit<F, S, T>(
        &self,
        form: &FormState<F>,
        presenter: &Presenter<S, T>,
    ) -> SubmissionOutcome
    where
        F: Store<FormData>,
        S: Store<Feedback>,
        T: Timer,
    {
        let data = form.snapshot();
        if let Some(field) = data.first_missing() {
            presenter.notify(
                ToastKind::Error,
                format!("Please fill in your {}.", field.label()),
            );
            return SubmissionOutcome::Failure(SubmissionError::Incomplete(field));
        }

        presenter.set_state(SubmissionState::Sending);

        match self.deliver(&data).await {
            Ok(()) => {
                log::debug!("contact message delivered");
                presenter.set_state(SubmissionState::Succeeded);
                form.clear();
                presenter.notify(ToastKind::Success, SENT_MESSAGE);
                SubmissionOutcome::Success
            }
            Err(err) => {
                log::error!("contact submission failed: {err}");
                presenter.set_state(SubmissionState::Failed);
                presenter.notify(ToastKind::Error, FAILED_MESSAGE);
                SubmissionOutcome::Failure(err)
            }
        }
    }

    async fn deliver(&self, data: &FormData) -> Result<(), SubmissionError> {
        self.config.validate()?;

        self.delivery
            .send(self.config.request(Notice::OwnerNotification, data))
            .await
            .map_err(SubmissionError::OwnerNotification)?;

        self.delivery
            .send(self.config.request(Notice::SenderAcknowledgment, data))
            .await
            .map_err(SubmissionError::SenderAcknowledgment)?;

        Ok(())
    }
}
