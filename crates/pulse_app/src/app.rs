//! Application wiring
//!
//! [`PulseApp`] owns the process-wide pieces (theme store, main queue,
//! appearance registry) and hands scenes to the [`SceneBootstrapper`].

use crate::bootstrap::{Scene, SceneBootstrapper, SceneServices};
use crate::config::PulseConfig;
use crate::lifecycle::LifecycleCoordinator;
use crate::surfaces::SurfaceFactory;
use crate::theme_persistence::{persist_theme_changes, restore_theme};
use pulse_core::MainQueue;
use pulse_platform::{
    AppearanceRegistry, BackgroundTaskScheduler, HealthSyncEngine, PermissionManager,
    PreferenceStore, WindowScene,
};
use pulse_theme::{ThemeStore, ThemeSubscription};
use std::rc::Rc;

/// Host-provided collaborators
#[derive(Clone)]
pub struct AppHost {
    pub preferences: Rc<dyn PreferenceStore>,
    pub permissions: Rc<dyn PermissionManager>,
    pub health: Rc<dyn HealthSyncEngine>,
    pub background: Rc<dyn BackgroundTaskScheduler>,
    pub surfaces: Rc<dyn SurfaceFactory>,
}

pub struct PulseApp {
    config: PulseConfig,
    theme: Rc<ThemeStore>,
    queue: Rc<MainQueue>,
    appearance: Rc<AppearanceRegistry>,
    lifecycle: LifecycleCoordinator,
    bootstrapper: SceneBootstrapper,
    persistence: Option<ThemeSubscription>,
}

impl PulseApp {
    pub fn new(config: PulseConfig, host: AppHost) -> Self {
        let theme = Rc::new(ThemeStore::with_preset(config.theme.preset));
        let restored = restore_theme(&theme, host.preferences.as_ref(), config.theme.preset);
        let persistence = persist_theme_changes(&theme, host.preferences.clone());
        tracing::info!(preset = %restored, "app: theme restored");

        let queue = Rc::new(MainQueue::new());
        let appearance = Rc::new(AppearanceRegistry::new());
        let lifecycle =
            LifecycleCoordinator::new(config.background.clone(), host.health, host.background);
        let bootstrapper = SceneBootstrapper::new(
            config.bootstrap.clone(),
            SceneServices {
                theme: theme.clone(),
                queue: queue.clone(),
                appearance: appearance.clone(),
                preferences: host.preferences,
                permissions: host.permissions,
                surfaces: host.surfaces,
            },
        );

        Self {
            config,
            theme,
            queue,
            appearance,
            lifecycle,
            bootstrapper,
            persistence: Some(persistence),
        }
    }

    pub fn config(&self) -> &PulseConfig {
        &self.config
    }

    pub fn theme(&self) -> &Rc<ThemeStore> {
        &self.theme
    }

    pub fn queue(&self) -> &Rc<MainQueue> {
        &self.queue
    }

    pub fn appearance(&self) -> &Rc<AppearanceRegistry> {
        &self.appearance
    }

    pub fn bootstrapper(&self) -> &SceneBootstrapper {
        &self.bootstrapper
    }

    pub fn launch(&self) {
        self.lifecycle.on_launch();
    }

    pub fn enter_background(&self) {
        self.lifecycle.on_enter_background();
    }

    /// Bootstrap a newly connected window scene
    pub fn connect_scene(&self, scene: Option<&WindowScene>) -> Option<Scene> {
        self.bootstrapper.bootstrap(scene)
    }
}

impl Drop for PulseApp {
    fn drop(&mut self) {
        if let Some(subscription) = self.persistence.take() {
            self.theme.unsubscribe(subscription);
        }
    }
}

impl std::fmt::Debug for PulseApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PulseApp")
            .field("theme", &self.theme)
            .field("queue", &self.queue)
            .field("lifecycle", &self.lifecycle)
            .finish()
    }
}
