//! Pulse Theme System
//!
//! A single source of truth for the application's current palette.
//!
//! # Overview
//!
//! - [`Palette`]: an immutable snapshot of the five color roles every chrome
//!   surface is painted from
//! - [`ThemePreset`]: the built-in palette catalog
//! - [`ThemeStore`]: holds the current palette and notifies subscribers when it
//!   is replaced
//!
//! # Quick Start
//!
//! ```rust
//! use pulse_theme::{ThemePreset, ThemeStore};
//!
//! let store = ThemeStore::with_preset(ThemePreset::Classic);
//! let subscription = store.subscribe(|palette| {
//!     println!("primary is now {}", palette.primary.to_hex_string());
//! });
//!
//! store.select_preset(ThemePreset::Midnight);
//! store.unsubscribe(subscription);
//! ```
//!
//! The store is an explicit instance, not a process-wide singleton: whoever
//! needs the current theme gets an `Rc<ThemeStore>` injected. Subscriptions are
//! opaque tokens that their owner must hand back through
//! [`ThemeStore::unsubscribe`] during its own teardown.

pub mod palette;
pub mod presets;
pub mod store;

pub use palette::{ColorRole, Palette};
pub use presets::ThemePreset;
pub use store::{ThemeStore, ThemeSubscription};
