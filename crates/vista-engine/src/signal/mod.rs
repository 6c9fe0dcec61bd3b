//! System display-preference signal.
//!
//! A [`SystemPreference`] reports whether the platform prefers a dark
//! display and notifies subscribers when that changes. Subscriptions are
//! RAII guards: dropping one unregisters the listener.

mod media_query;
mod subscription;

pub use media_query::{FixedPreference, MediaQuery};
pub use subscription::Subscription;

/// Callback invoked with the new "prefers dark" value; `None` means the
/// platform stopped reporting a preference.
pub type PreferenceListener = Box<dyn FnMut(Option<bool>)>;

/// A source of the platform's light/dark preference.
pub trait SystemPreference {
    /// Current preference, or `None` when the platform cannot report one.
    fn prefers_dark(&self) -> Option<bool>;

    /// Registers `listener` for changes. The listener stays registered for
    /// as long as the returned guard lives.
    fn subscribe(&self, listener: PreferenceListener) -> Subscription;
}
