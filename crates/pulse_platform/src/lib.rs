//! Pulse Platform Abstraction
//!
//! The in-process model of the platform pieces the bootstrap layer drives:
//!
//! - [`WindowState`] and [`WindowScene`]: the single application window
//! - [`Controller`]: the controller tree, including modal presentations
//! - [`chrome`]: navigation/tab bars and the ambient [`AppearanceRegistry`]
//! - [`services`]: host capabilities (health sync, background tasks, permissions)
//! - [`preferences`]: persisted flags and settings

pub mod chrome;
pub mod controller;
pub mod error;
pub mod preferences;
pub mod services;
pub mod window;

pub use chrome::{
    AppearanceRegistry, ChromeDefaults, ChromeKind, ChromeStyleDescriptor, ChromeSurface,
    NavigationBar, NavigationChrome, Offset, TabBar, TabChrome,
};
pub use controller::{Controller, ControllerRef};
pub use error::{PlatformError, Result};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use services::{BackgroundTaskScheduler, HealthSyncEngine, PermissionManager};
pub use window::{WindowScene, WindowState};
