//! Scene bootstrap sequencing
//!
//! On window attach the bootstrapper reads the onboarding flag once and takes
//! one of two paths:
//!
//! ```text
//! returning user:  Launching → SplashShown → TransitioningToMain → MainShown → PermissionChecked
//!                              (+splash)     (+1.5s)               (hand-off)   (+1.0s after hand-off)
//! first run:       Launching → OnboardingShown
//! ```
//!
//! Both paths synchronize appearance against the fresh root and subscribe to
//! theme changes before returning. Timed steps run on the [`MainQueue`] and
//! hold only weak references to the scene. Discarding the [`Scene`] releases
//! its subscription and, unless disabled, cancels whatever is still pending.

use crate::config::BootstrapConfig;
use crate::surfaces::{SplashScreen, SurfaceFactory};
use crate::synchronizer::AppearanceSynchronizer;
use pulse_core::{MainQueue, StateMachine, TimerId, Transition};
use pulse_platform::{
    AppearanceRegistry, ControllerRef, PermissionManager, PreferenceStore, WindowScene,
    WindowState,
};
use pulse_theme::{ThemeStore, ThemeSubscription};
use smallvec::SmallVec;
use std::cell::{Cell, Ref, RefCell};
use std::rc::{Rc, Weak};

/// Phase of a scene's startup sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BootPhase {
    Launching,
    SplashShown,
    TransitioningToMain,
    MainShown,
    PermissionChecked,
    OnboardingShown,
}

/// Inputs driving [`BootPhase`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootEvent {
    ShowSplash,
    ShowOnboarding,
    SplashElapsed,
    HandOffComplete,
    PermissionCheckRan,
}

fn boot_machine() -> StateMachine<BootPhase, BootEvent> {
    use BootEvent::*;
    use BootPhase::*;

    StateMachine::builder(Launching)
        .on(Launching, ShowSplash, SplashShown)
        .on(Launching, ShowOnboarding, OnboardingShown)
        .on(SplashShown, SplashElapsed, TransitioningToMain)
        .on(TransitioningToMain, HandOffComplete, MainShown)
        .transition(Transition::new(MainShown, PermissionCheckRan, PermissionChecked))
        .on_enter(MainShown, || tracing::info!("bootstrap: main experience visible"))
        .on_enter(OnboardingShown, || tracing::info!("bootstrap: onboarding visible"))
        .build()
}

/// Everything a bootstrapper needs from the rest of the app
#[derive(Clone)]
pub struct SceneServices {
    pub theme: Rc<ThemeStore>,
    pub queue: Rc<MainQueue>,
    pub appearance: Rc<AppearanceRegistry>,
    pub preferences: Rc<dyn PreferenceStore>,
    pub permissions: Rc<dyn PermissionManager>,
    pub surfaces: Rc<dyn SurfaceFactory>,
}

/// Scene state shared with timed callbacks through weak references
struct SceneCore {
    window: RefCell<WindowState>,
    phases: RefCell<StateMachine<BootPhase, BootEvent>>,
    splash: RefCell<Option<Box<dyn SplashScreen>>>,
    timers: RefCell<SmallVec<[TimerId; 2]>>,
    permission_checks: Cell<u32>,
}

impl SceneCore {
    fn advance(&self, event: BootEvent) -> BootPhase {
        self.phases.borrow_mut().send(event)
    }

    fn root(&self) -> Option<ControllerRef> {
        self.window.borrow().root().cloned()
    }
}

/// Chooses and runs the startup sequence for each attached window
pub struct SceneBootstrapper {
    config: BootstrapConfig,
    services: SceneServices,
    synchronizer: AppearanceSynchronizer,
}

impl SceneBootstrapper {
    pub fn new(config: BootstrapConfig, services: SceneServices) -> Self {
        let synchronizer = AppearanceSynchronizer::new(services.appearance.clone());
        Self {
            config,
            services,
            synchronizer,
        }
    }

    pub fn synchronizer(&self) -> &AppearanceSynchronizer {
        &self.synchronizer
    }

    /// Attach the first root to a new window.
    ///
    /// Returns `None`, showing nothing, when the platform provides no window scene.
    pub fn bootstrap(&self, scene: Option<&WindowScene>) -> Option<Scene> {
        let Some(scene) = scene else {
            tracing::warn!("bootstrap: no window scene; nothing will be shown");
            return None;
        };

        let key = self.config.onboarding_flag_key.as_str();
        let onboarded = self.services.preferences.get_bool(key);
        tracing::info!(scene = %scene.id, onboarded, "bootstrap: selecting startup path");

        let core = Rc::new(SceneCore {
            window: RefCell::new(WindowState::new(scene.clone())),
            phases: RefCell::new(boot_machine()),
            splash: RefCell::new(None),
            timers: RefCell::new(SmallVec::new()),
            permission_checks: Cell::new(0),
        });

        {
            let mut window = core.window.borrow_mut();
            if onboarded {
                let splash = self.services.surfaces.splash(&self.services.appearance);
                window.set_root(splash.controller());
                *core.splash.borrow_mut() = Some(splash);
                core.advance(BootEvent::ShowSplash);
            } else {
                window.set_root(self.services.surfaces.onboarding(&self.services.appearance));
                // Marked as seen on show, not on completion
                self.services.preferences.set_bool(key, true);
                core.advance(BootEvent::ShowOnboarding);
            }
            window.make_key_and_visible();
        }

        self.synchronizer
            .synchronize(&self.services.theme.current_palette(), &core.window.borrow());
        let subscription = self.subscribe_theme(&core);

        if onboarded {
            self.schedule_hand_off(&core);
        }

        Some(Scene {
            core,
            subscription: Some(subscription),
            theme: self.services.theme.clone(),
            queue: self.services.queue.clone(),
            cancel_pending_on_teardown: self.config.cancel_pending_on_teardown,
        })
    }

    fn subscribe_theme(&self, core: &Rc<SceneCore>) -> ThemeSubscription {
        let weak = Rc::downgrade(core);
        let synchronizer = self.synchronizer.clone();
        self.services.theme.subscribe(move |palette| {
            let Some(core) = weak.upgrade() else {
                return;
            };
            synchronizer.synchronize(palette, &core.window.borrow());
        })
    }

    fn schedule_hand_off(&self, core: &Rc<SceneCore>) {
        let weak = Rc::downgrade(core);
        let services = self.services.clone();
        let check_delay = self.config.permission_check_delay();

        let id = self.services.queue.schedule_after(
            self.config.splash_duration(),
            "splash-hand-off",
            move |queue| {
                let Some(core) = weak.upgrade() else {
                    tracing::debug!("bootstrap: scene released before hand-off; skipping");
                    return;
                };
                hand_off(&core, &services);

                // Scheduled from the hand-off's completion so it can never overtake it
                let weak = Rc::downgrade(&core);
                let permissions = services.permissions.clone();
                let id = queue.schedule_after(check_delay, "permission-check", move |_| {
                    check_permissions(&weak, permissions.as_ref());
                });
                core.timers.borrow_mut().push(id);
            },
        );
        core.timers.borrow_mut().push(id);
        tracing::debug!(
            delay_ms = self.config.splash_duration_ms,
            "bootstrap: hand-off scheduled"
        );
    }
}

fn hand_off(core: &SceneCore, services: &SceneServices) {
    core.advance(BootEvent::SplashElapsed);

    let main = services.surfaces.main(&services.appearance);
    let splash = core.splash.borrow_mut().take();
    {
        let mut window = core.window.borrow_mut();
        match splash {
            Some(splash) => splash.transition(main, &mut window),
            None => {
                window.set_root(main);
            }
        }
    }

    core.advance(BootEvent::HandOffComplete);
}

fn check_permissions(scene: &Weak<SceneCore>, permissions: &dyn PermissionManager) {
    let Some(core) = scene.upgrade() else {
        tracing::debug!("bootstrap: scene released before permission check; skipping");
        return;
    };
    let Some(root) = core.root() else {
        return;
    };

    core.permission_checks.set(core.permission_checks.get() + 1);
    let show = permissions.should_show_health_reminder();
    tracing::info!(show, "bootstrap: health permission check");
    if show {
        permissions.show_health_permission_reminder(&root);
    }
    core.advance(BootEvent::PermissionCheckRan);
}

/// A bootstrapped scene. Dropping it tears the scene down.
pub struct Scene {
    core: Rc<SceneCore>,
    subscription: Option<ThemeSubscription>,
    theme: Rc<ThemeStore>,
    queue: Rc<MainQueue>,
    cancel_pending_on_teardown: bool,
}

impl Scene {
    pub fn phase(&self) -> BootPhase {
        self.core.phases.borrow().current_state()
    }

    /// `(from, event, to)` transitions so far
    pub fn phase_history(&self) -> Vec<(BootPhase, BootEvent, BootPhase)> {
        self.core.phases.borrow().history().to_vec()
    }

    pub fn window(&self) -> Ref<'_, WindowState> {
        self.core.window.borrow()
    }

    pub fn root(&self) -> Option<ControllerRef> {
        self.core.root()
    }

    /// Permission checks performed so far
    pub fn permission_checks(&self) -> u32 {
        self.core.permission_checks.get()
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Tear down explicitly; equivalent to dropping the scene
    pub fn discard(self) {}

    fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            self.theme.unsubscribe(subscription);
        }

        let timers: SmallVec<[TimerId; 2]> = self.core.timers.borrow_mut().drain(..).collect();
        if self.cancel_pending_on_teardown {
            let cancelled = timers.into_iter().filter(|id| self.queue.cancel(*id)).count();
            tracing::debug!(cancelled, "bootstrap: scene discarded");
        } else {
            tracing::debug!("bootstrap: scene discarded; pending steps left to no-op");
        }
    }
}

impl Drop for Scene {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("phase", &self.phase())
            .field("root", &self.core.window.borrow().root_name())
            .field("subscribed", &self.is_subscribed())
            .finish()
    }
}
