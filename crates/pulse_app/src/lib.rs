//! Pulse Application Layer
//!
//! Scene bootstrap, live appearance synchronization and lifecycle wiring.
//!
//! # Example
//!
//! ```
//! use pulse_app::{AppHost, DefaultSurfaces, PulseApp, PulseConfig};
//! use pulse_platform::{
//!     BackgroundTaskScheduler, ControllerRef, HealthSyncEngine, MemoryPreferences,
//!     PermissionManager, WindowScene,
//! };
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! struct Noop;
//! impl HealthSyncEngine for Noop {
//!     fn start_if_needed(&self) {}
//! }
//! impl BackgroundTaskScheduler for Noop {
//!     fn identifier(&self) -> &str { "refresh" }
//!     fn register(&self) {}
//!     fn schedule_if_needed(&self) {}
//! }
//! impl PermissionManager for Noop {
//!     fn should_show_health_reminder(&self) -> bool { false }
//!     fn show_health_permission_reminder(&self, _from: &ControllerRef) {}
//! }
//!
//! let noop = Rc::new(Noop);
//! let app = PulseApp::new(
//!     PulseConfig::default(),
//!     AppHost {
//!         preferences: Rc::new(MemoryPreferences::new()),
//!         permissions: noop.clone(),
//!         health: noop.clone(),
//!         background: noop,
//!         surfaces: Rc::new(DefaultSurfaces),
//!     },
//! );
//! app.launch();
//!
//! let scene = app.connect_scene(Some(&WindowScene::new("main", 390.0, 844.0))).unwrap();
//! assert_eq!(scene.window().root_name().as_deref(), Some("onboarding"));
//!
//! app.queue().advance_by(Duration::from_secs(3));
//! ```

pub mod app;
pub mod bootstrap;
pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod surfaces;
pub mod synchronizer;
pub mod theme_persistence;

pub use app::{AppHost, PulseApp};
pub use bootstrap::{BootEvent, BootPhase, Scene, SceneBootstrapper, SceneServices};
pub use config::{
    BackgroundConfig, BootstrapConfig, ConfigError, LoggingConfig, PulseConfig, ThemeConfig,
};
pub use lifecycle::LifecycleCoordinator;
pub use surfaces::{CrossfadeSplash, DefaultSurfaces, SplashScreen, SurfaceFactory, MAIN_TABS};
pub use synchronizer::{apply_to_tree, AppearanceSynchronizer, WalkStats};
pub use theme_persistence::{persist_theme_changes, restore_theme, THEME_PRESET_KEY};
