//! Display theme resolution.
//!
//! The user picks a [`ThemeMode`]; the [`ThemeResolver`] turns it into a
//! concrete [`ResolvedTheme`] using the platform preference when the mode is
//! `System`, applies it to a [`ThemeSurface`] and persists the choice.
//! Consumers share one resolver through a [`ThemeContext`] handle.
//!
//! ```text
//!   set_mode(m): any ──────────────► m
//!   toggle():    Dark ─► Light ─► System ─► Dark
//! ```
//!
//! Every transition recomputes the resolved theme and applies it before
//! returning. A platform change while in `System` does the same without
//! changing the mode.

mod context;
mod mode;
mod resolver;
mod surface;

pub use context::{ThemeContext, ThemeSnapshot};
pub use mode::{ParseThemeError, ResolvedTheme, ThemeMode};
pub use resolver::{PersistedTheme, ThemeResolver, DEFAULT_STORAGE_KEY};
pub use surface::{DocumentSurface, ThemeSurface};
