use std::time::Duration;

use leptos::prelude::set_timeout;

use super::store::Store;

pub const TOAST_DURATION: Duration = Duration::from_millis(3000);
pub const COPIED_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

pub type ToastId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastNotice {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopiedMarker {
    pub id: u64,
    pub tag: String,
}

/// Everything the contact section renders besides the form fields.
#[derive(Debug, Clone, Default)]
pub struct Feedback {
    pub state: SubmissionState,
    pub toast: Option<ToastNotice>,
    pub copied: Option<CopiedMarker>,
    next_id: u64,
}

impl Feedback {
    pub fn submit_disabled(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_disabled() {
            "Sending..."
        } else {
            "Send Message"
        }
    }

    pub fn visible_toast(&self) -> Option<&ToastNotice> {
        self.toast.as_ref().filter(|t| t.visible)
    }

    pub fn is_copied(&self, tag: &str) -> bool {
        self.copied.as_ref().is_some_and(|c| c.tag == tag)
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn show_toast(&mut self, kind: ToastKind, message: String) -> ToastId {
        let id = self.next_id();
        self.toast = Some(ToastNotice {
            id,
            message,
            kind,
            visible: true,
        });
        id
    }

    fn dismiss_toast(&mut self, id: ToastId) {
        if let Some(toast) = self.toast.as_mut().filter(|t| t.id == id) {
            toast.visible = false;
        }
    }

    fn mark_copied(&mut self, tag: String) -> u64 {
        let id = self.next_id();
        self.copied = Some(CopiedMarker { id, tag });
        id
    }

    fn clear_copied(&mut self, id: u64) {
        if self.copied.as_ref().is_some_and(|c| c.id == id) {
            self.copied = None;
        }
    }
}

/// Runs a task once after a delay.
pub trait Timer: Clone + 'static {
    fn after(&self, delay: Duration, task: impl FnOnce() + 'static);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn after(&self, delay: Duration, task: impl FnOnce() + 'static) {
        set_timeout(task, delay);
    }
}

/// Projects submission state into the submit control, the toast banner and
/// the copied markers, and owns their dismissal timers.
#[derive(Debug, Clone, Copy)]
pub struct Presenter<S, T> {
    store: S,
    timer: T,
}

impl<S, T> Presenter<S, T>
where
    S: Store<Feedback>,
    T: Timer,
{
    pub fn new(store: S, timer: T) -> Self {
        Self { store, timer }
    }

    pub fn state(&self) -> SubmissionState {
        self.store.read(|fb| fb.state)
    }

    pub fn set_state(&self, state: SubmissionState) {
        self.store.modify(|fb| fb.state = state);
    }

    pub fn submit_disabled(&self) -> bool {
        self.store.read(Feedback::submit_disabled)
    }

    /// Shows a toast and hides it again after [`TOAST_DURATION`].
    ///
    /// The dismissal is never cancelled, but it only hides the notice it was
    /// scheduled for. A newer toast keeps its own full window.
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let message = message.into();
        let mut id = 0;
        self.store.modify(|fb| id = fb.show_toast(kind, message));

        let store = self.store.clone();
        self.timer
            .after(TOAST_DURATION, move || store.modify(|fb| fb.dismiss_toast(id)));
        id
    }

    pub fn mark_copied(&self, tag: impl Into<String>) {
        let tag = tag.into();
        let mut id = 0;
        self.store.modify(|fb| id = fb.mark_copied(tag));

        let store = self.store.clone();
        self.timer
            .after(COPIED_DURATION, move || store.modify(|fb| fb.clear_copied(id)));
    }
}
