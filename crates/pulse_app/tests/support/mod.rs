//! Recording test doubles shared by the integration tests
#![allow(dead_code)]

use pulse_app::{BootstrapConfig, DefaultSurfaces, SceneBootstrapper, SceneServices};
use pulse_core::MainQueue;
use pulse_platform::{
    AppearanceRegistry, BackgroundTaskScheduler, Controller, ControllerRef, HealthSyncEngine,
    MemoryPreferences, PermissionManager, PreferenceStore, WindowScene,
};
use pulse_theme::{ThemePreset, ThemeStore};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

/// Permission manager that records when it was consulted
pub struct RecordingPermissions {
    queue: Rc<MainQueue>,
    pub gate: Cell<bool>,
    pub checks: RefCell<Vec<Duration>>,
    pub shown: Cell<u32>,
}

impl RecordingPermissions {
    pub fn new(queue: Rc<MainQueue>, gate: bool) -> Self {
        Self {
            queue,
            gate: Cell::new(gate),
            checks: RefCell::new(Vec::new()),
            shown: Cell::new(0),
        }
    }

    pub fn check_times(&self) -> Vec<Duration> {
        self.checks.borrow().clone()
    }
}

impl PermissionManager for RecordingPermissions {
    fn should_show_health_reminder(&self) -> bool {
        self.checks.borrow_mut().push(self.queue.now());
        self.gate.get()
    }

    fn show_health_permission_reminder(&self, from: &ControllerRef) {
        self.shown.set(self.shown.get() + 1);
        from.borrow_mut()
            .present(Controller::plain("health-reminder").into_ref());
    }
}

/// Health sync and background scheduler recording calls in order
#[derive(Default)]
pub struct CallLog {
    pub calls: RefCell<Vec<&'static str>>,
}

impl CallLog {
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.borrow().clone()
    }
}

impl HealthSyncEngine for CallLog {
    fn start_if_needed(&self) {
        self.calls.borrow_mut().push("health.start_if_needed");
    }
}

impl BackgroundTaskScheduler for CallLog {
    fn identifier(&self) -> &str {
        "com.pulse.health.refresh"
    }

    fn register(&self) {
        self.calls.borrow_mut().push("tasks.register");
    }

    fn schedule_if_needed(&self) {
        self.calls.borrow_mut().push("tasks.schedule_if_needed");
    }
}

/// A bootstrapper over in-memory collaborators
pub struct Harness {
    pub theme: Rc<ThemeStore>,
    pub queue: Rc<MainQueue>,
    pub appearance: Rc<AppearanceRegistry>,
    pub prefs: Rc<MemoryPreferences>,
    pub permissions: Rc<RecordingPermissions>,
    pub bootstrapper: SceneBootstrapper,
}

impl Harness {
    pub fn new(onboarded: bool) -> Self {
        Self::with_config(BootstrapConfig::default(), onboarded)
    }

    pub fn with_config(config: BootstrapConfig, onboarded: bool) -> Self {
        let theme = Rc::new(ThemeStore::with_preset(ThemePreset::Classic));
        let queue = Rc::new(MainQueue::new());
        let appearance = Rc::new(AppearanceRegistry::new());
        let prefs = Rc::new(MemoryPreferences::new());
        if onboarded {
            prefs.set_bool(&config.onboarding_flag_key, true);
        }
        let permissions = Rc::new(RecordingPermissions::new(queue.clone(), false));

        let bootstrapper = SceneBootstrapper::new(
            config,
            SceneServices {
                theme: theme.clone(),
                queue: queue.clone(),
                appearance: appearance.clone(),
                preferences: prefs.clone(),
                permissions: permissions.clone(),
                surfaces: Rc::new(DefaultSurfaces),
            },
        );

        Self {
            theme,
            queue,
            appearance,
            prefs,
            permissions,
            bootstrapper,
        }
    }
}

pub fn phone_scene() -> WindowScene {
    WindowScene::new("scene-1", 390.0, 844.0)
}

pub fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}
