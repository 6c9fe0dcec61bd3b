use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use super::{PreferenceListener, Subscription, SystemPreference};

type SharedListener = Rc<RefCell<PreferenceListener>>;

#[derive(Default)]
struct Inner {
    prefers_dark: Option<bool>,
    listeners: Vec<(u64, SharedListener)>,
    next_id: u64,
    pending: VecDeque<Option<bool>>,
    dispatching: bool,
}

/// In-process stand-in for a platform `prefers-color-scheme` query.
///
/// Cloning yields another handle to the same query. Changes are delivered
/// one at a time in the order they were made; a change made from inside a
/// listener is queued behind the one being delivered.
#[derive(Clone, Default)]
pub struct MediaQuery {
    inner: Rc<RefCell<Inner>>,
}

impl MediaQuery {
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { prefers_dark, ..Inner::default() })),
        }
    }

    /// Updates the preference. Listeners run only if the value changed.
    pub fn set_prefers_dark(&self, prefers_dark: Option<bool>) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.prefers_dark == prefers_dark {
                return;
            }
            inner.prefers_dark = prefers_dark;
            inner.pending.push_back(prefers_dark);
            if inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        self.dispatch();
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn dispatch(&self) {
        loop {
            let (value, listeners) = {
                let mut inner = self.inner.borrow_mut();
                let Some(value) = inner.pending.pop_front() else {
                    inner.dispatching = false;
                    return;
                };
                let ids: Vec<_> = inner.listeners.iter().map(|(id, l)| (*id, l.clone())).collect();
                (value, ids)
            };

            log::debug!("system preference changed: prefers_dark={value:?}");
            for (id, listener) in listeners {
                // Skip anything unsubscribed by an earlier listener this round.
                let live = self.inner.borrow().listeners.iter().any(|(l, _)| *l == id);
                if live {
                    (*listener.borrow_mut())(value);
                }
            }
        }
    }
}

impl SystemPreference for MediaQuery {
    fn prefers_dark(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }

    fn subscribe(&self, listener: PreferenceListener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.listeners.push((id, Rc::new(RefCell::new(listener))));
            id
        };

        let weak: Weak<RefCell<Inner>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.borrow_mut().listeners.retain(|(l, _)| *l != id);
            }
        })
    }
}

/// A preference that never changes, e.g. `FixedPreference(None)` for a
/// headless context with no display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedPreference(pub Option<bool>);

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> Option<bool> {
        self.0
    }

    fn subscribe(&self, _listener: PreferenceListener) -> Subscription {
        Subscription::inert()
    }
}
