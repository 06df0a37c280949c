use std::{cell::RefCell, rc::Rc};

use leptos::prelude::*;

/// A shared cell the contact workflow writes its state into.
///
/// In the browser this is a reactive signal so the view re-renders on every
/// write. Off the browser (and in tests) a plain `Rc<RefCell<_>>` does the job.
pub trait Store<T>: Clone + 'static {
    fn modify(&self, f: impl FnOnce(&mut T));
    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R;
}

impl<T> Store<T> for RwSignal<T>
where
    T: Send + Sync + 'static,
{
    fn modify(&self, f: impl FnOnce(&mut T)) {
        self.update(f);
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        self.with_untracked(f)
    }
}

impl<T: 'static> Store<T> for Rc<RefCell<T>> {
    fn modify(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }
}
