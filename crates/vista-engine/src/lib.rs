//! Vista engine crate.
//!
//! Owns the UI-independent pieces of the campus tour front-end: list
//! windowing, theme resolution, and the storage / signal seams they sit on.

pub mod config;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod signal;
pub mod storage;
pub mod theme;
pub mod windowing;
