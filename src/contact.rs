mod clipboard;
mod config;
mod coordinator;
mod delivery;
#[cfg(feature = "ssr")]
pub mod emailjs;
mod feedback;
mod form;
#[cfg(any(feature = "ssr", feature = "hydrate"))]
pub mod relay;
mod store;
#[cfg(test)]
mod testing;

pub use clipboard::{copy, Clipboard, ClipboardError};
pub use config::{ConfigError, ContactConfig};
pub use coordinator::{
    SubmissionCoordinator, SubmissionError, SubmissionOutcome, FAILED_MESSAGE, SENT_MESSAGE,
};
pub use delivery::{
    DeliveryError, EmailDelivery, EmailRequest, Notice, RelayMessage, SendPayload,
};
pub use feedback::{
    BrowserTimer, CopiedMarker, Feedback, Presenter, SubmissionState, Timer, ToastId, ToastKind,
    ToastNotice, COPIED_DURATION, TOAST_DURATION,
};
pub use form::{Field, FormData, FormState, PHONE_NOT_PROVIDED};
pub use store::Store;
