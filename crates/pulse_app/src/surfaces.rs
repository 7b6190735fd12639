//! Startup surfaces
//!
//! The bootstrapper builds three kinds of root surface: onboarding for first
//! runs, a splash for returning users, and the tabbed main experience the
//! splash hands off to. Screen content lives with the host; these factories
//! only decide the controller structure and where chrome lives.

use pulse_platform::{AppearanceRegistry, Controller, ControllerRef, WindowState};

/// Splash surface shown while the main experience is prepared
pub trait SplashScreen {
    fn controller(&self) -> ControllerRef;

    /// Hand off to `to`, attaching it to `window`.
    ///
    /// The splash owns its own transition and disposal; it is consumed here.
    fn transition(self: Box<Self>, to: ControllerRef, window: &mut WindowState);
}

/// Builds the root surfaces for a scene
pub trait SurfaceFactory {
    fn onboarding(&self, appearance: &AppearanceRegistry) -> ControllerRef;
    fn splash(&self, appearance: &AppearanceRegistry) -> Box<dyn SplashScreen>;
    fn main(&self, appearance: &AppearanceRegistry) -> ControllerRef;
}

/// Tabs of the main experience, in display order
pub const MAIN_TABS: [&str; 4] = ["summary", "trends", "sharing", "settings"];

/// Stock surfaces: plain onboarding and splash, a tab container of
/// navigation stacks for main
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultSurfaces;

impl SurfaceFactory for DefaultSurfaces {
    fn onboarding(&self, _appearance: &AppearanceRegistry) -> ControllerRef {
        Controller::plain("onboarding").into_ref()
    }

    fn splash(&self, _appearance: &AppearanceRegistry) -> Box<dyn SplashScreen> {
        Box::new(CrossfadeSplash {
            controller: Controller::plain("splash").into_ref(),
        })
    }

    fn main(&self, appearance: &AppearanceRegistry) -> ControllerRef {
        MAIN_TABS
            .iter()
            .fold(Controller::tabs("main", appearance), |main, tab| {
                main.with_child(Controller::navigation(*tab, appearance).into_ref())
            })
            .into_ref()
    }
}

/// Splash that swaps itself out for the new root in one step
#[derive(Debug)]
pub struct CrossfadeSplash {
    controller: ControllerRef,
}

impl SplashScreen for CrossfadeSplash {
    fn controller(&self) -> ControllerRef {
        self.controller.clone()
    }

    fn transition(self: Box<Self>, to: ControllerRef, window: &mut WindowState) {
        let replaced = window.set_root(to);
        let still_ours = replaced
            .as_ref()
            .map_or(false, |old| std::rc::Rc::ptr_eq(old, &self.controller));
        if !still_ours {
            tracing::debug!("splash: window root changed before hand-off");
        }
        tracing::debug!("splash: disposed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_platform::WindowScene;

    #[test]
    fn main_is_a_tab_container_of_navigation_stacks() {
        let registry = AppearanceRegistry::new();
        let main = DefaultSurfaces.main(&registry);
        let main = main.borrow();

        assert!(main.is_tab_container());
        let names: Vec<String> = main
            .children()
            .iter()
            .map(|c| c.borrow().name().to_string())
            .collect();
        assert_eq!(names, MAIN_TABS);
        assert!(main.children().iter().all(|c| c.borrow().is_navigation_container()));
    }

    #[test]
    fn splash_hands_off_root() {
        let registry = AppearanceRegistry::new();
        let splash = DefaultSurfaces.splash(&registry);
        let mut window = WindowState::new(WindowScene::new("s", 390.0, 844.0));
        window.set_root(splash.controller());

        splash.transition(DefaultSurfaces.main(&registry), &mut window);

        assert_eq!(window.root_name().as_deref(), Some("main"));
        assert_eq!(window.root_changes(), 2);
    }
}
