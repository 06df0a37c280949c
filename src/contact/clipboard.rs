use thiserror::Error;

use super::{
    feedback::{Feedback, Presenter, Timer, ToastKind},
    store::Store,
};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Couldn't copy to clipboard";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("clipboard access is not supported here")]
    Unsupported,
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Copies `text` and marks the entry named `tag` as copied for a moment.
pub fn copy<C, S, T>(clipboard: &C, presenter: &Presenter<S, T>, text: &str, tag: &str)
where
    C: Clipboard + ?Sized,
    S: Store<Feedback>,
    T: Timer,
{
    match clipboard.write_text(text) {
        Ok(()) => {
            presenter.mark_copied(tag);
            presenter.notify(ToastKind::Success, COPIED_MESSAGE);
        }
        Err(err) => {
            log::warn!("copying {tag} failed: {err}");
            presenter.notify(ToastKind::Error, COPY_FAILED_MESSAGE);
        }
    }
}
