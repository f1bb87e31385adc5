//! Application shell
//!
//! UI chrome state (overlays, ad density, sort, theme) and the on-device
//! theme preference store.

mod shell;
mod theme;

pub use shell::AppShell;
pub use theme::{Theme, ThemeStore};
