use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::{Rc, Weak};

use crate::signal::{Subscription, SystemPreference};
use crate::storage::KeyValueStore;

use super::{ResolvedTheme, ThemeMode, ThemeResolver, ThemeSurface};

/// Mode and resolved theme read together.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ThemeSnapshot {
    pub mode: ThemeMode,
    pub resolved: ResolvedTheme,
}

struct Shared {
    resolver: RefCell<ThemeResolver>,
    /// Platform changes waiting for the resolver to be free.
    pending: RefCell<VecDeque<Option<bool>>>,
}

impl Shared {
    /// Feeds queued platform changes to the resolver in arrival order.
    ///
    /// If the resolver is mid-transition, whoever holds it drains after
    /// releasing it, so nothing queued is left behind.
    fn drain(&self) {
        let Ok(mut resolver) = self.resolver.try_borrow_mut() else {
            return;
        };
        loop {
            let next = self.pending.borrow_mut().pop_front();
            match next {
                Some(prefers_dark) => {
                    resolver.on_system_signal(prefers_dark);
                }
                None => return,
            }
        }
    }

    fn deliver(&self, prefers_dark: Option<bool>) {
        self.pending.borrow_mut().push_back(prefers_dark);
        self.drain();
    }
}

/// Shared handle to the one [`ThemeResolver`] of an application.
///
/// Hand clones to whatever needs to read or change the theme; every change
/// goes through the transition methods here.
#[derive(Clone)]
pub struct ThemeContext {
    shared: Rc<Shared>,
}

impl ThemeContext {
    pub fn new(resolver: ThemeResolver) -> Self {
        Self {
            shared: Rc::new(Shared {
                resolver: RefCell::new(resolver),
                pending: RefCell::new(VecDeque::new()),
            }),
        }
    }

    /// Cold start against a live platform source: loads the persisted mode,
    /// resolves it with the source's current value and subscribes to its
    /// changes. Keep the returned guard for as long as the context should
    /// follow the platform.
    pub fn load(
        store: Box<dyn KeyValueStore>,
        surface: Box<dyn ThemeSurface>,
        source: &dyn SystemPreference,
        storage_key: impl Into<String>,
    ) -> (Self, Subscription) {
        let resolver = ThemeResolver::load(store, surface, source.prefers_dark(), storage_key);
        let ctx = Self::new(resolver);
        let sub = ctx.follow(source);
        (ctx, sub)
    }

    /// Subscribes to `source` and syncs with its current value.
    pub fn follow(&self, source: &dyn SystemPreference) -> Subscription {
        let weak: Weak<Shared> = Rc::downgrade(&self.shared);
        let sub = source.subscribe(Box::new(move |prefers_dark| {
            if let Some(shared) = weak.upgrade() {
                shared.deliver(prefers_dark);
            }
        }));

        let current = source.prefers_dark();
        if current != self.shared.resolver.borrow().system_prefers_dark() {
            self.shared.deliver(current);
        }
        sub
    }

    /// Pushes a platform change directly, for callers that observe the
    /// platform themselves.
    pub fn notify_system(&self, prefers_dark: Option<bool>) {
        self.shared.deliver(prefers_dark);
    }

    pub fn snapshot(&self) -> ThemeSnapshot {
        let r = self.shared.resolver.borrow();
        ThemeSnapshot { mode: r.mode(), resolved: r.resolved() }
    }

    #[inline]
    pub fn mode(&self) -> ThemeMode {
        self.snapshot().mode
    }

    #[inline]
    pub fn resolved(&self) -> ResolvedTheme {
        self.snapshot().resolved
    }

    pub fn set_mode(&self, mode: ThemeMode) -> ThemeSnapshot {
        self.shared.resolver.borrow_mut().set_mode(mode);
        self.shared.drain();
        self.snapshot()
    }

    pub fn toggle(&self) -> ThemeSnapshot {
        self.shared.resolver.borrow_mut().toggle();
        self.shared.drain();
        self.snapshot()
    }
}
