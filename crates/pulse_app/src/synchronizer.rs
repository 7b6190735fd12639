//! Appearance synchronization
//!
//! One pass applies a [`Palette`] to all chrome in two phases:
//!
//! 1. **Declarative**: derive [`ChromeDefaults`] from the palette and install
//!    them in the [`AppearanceRegistry`], so bars created later start styled.
//! 2. **Imperative**: walk the live controller tree from the window root,
//!    through children and modal presentations, and restyle every bar in place.
//!    The root is then laid out immediately so geometry-dependent chrome picks
//!    up the new title offsets.
//!
//! Descriptors hold absolute values, so a pass is idempotent, and sequential
//! passes leave the tree in the state of the latest palette.

use pulse_platform::{
    AppearanceRegistry, ChromeDefaults, ChromeStyleDescriptor, ChromeSurface, ControllerRef,
    NavigationChrome, Offset, TabChrome, WindowState,
};
use pulse_theme::Palette;
use rustc_hash::FxHashSet;
use std::rc::Rc;

/// Vertical nudge applied to tab item titles
pub const TAB_ITEM_TITLE_OFFSET: Offset = Offset::new(0.0, -2.0);

/// Applies palettes to both future and live chrome
#[derive(Debug, Clone)]
pub struct AppearanceSynchronizer {
    registry: Rc<AppearanceRegistry>,
}

/// Counts from one imperative walk
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    pub controllers: usize,
    pub surfaces: usize,
}

impl AppearanceSynchronizer {
    pub fn new(registry: Rc<AppearanceRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Rc<AppearanceRegistry> {
        &self.registry
    }

    /// Chrome style derived from `palette`
    pub fn chrome_defaults(palette: &Palette) -> ChromeDefaults {
        let navigation = navigation_descriptor(palette);
        let tab = tab_descriptor(palette);

        // Scroll-edge shares the standard descriptor so content scrolling
        // under a bar never shows a seam.
        ChromeDefaults {
            navigation: NavigationChrome {
                standard: navigation,
                scroll_edge: navigation,
                tint: palette.accent,
            },
            tab: TabChrome {
                standard: tab,
                scroll_edge: tab,
                tint: palette.accent,
                unselected_item_tint: palette.secondary,
            },
        }
    }

    /// Run a full synchronization pass
    pub fn synchronize(&self, palette: &Palette, window: &WindowState) {
        let defaults = Self::chrome_defaults(palette);
        self.registry.install(defaults);

        let Some(root) = window.root() else {
            tracing::debug!(scene = %window.scene().id, "sync: no root attached, defaults only");
            return;
        };

        let stats = apply_to_tree(root, &defaults);

        let mut root = root.borrow_mut();
        root.set_needs_layout();
        root.layout_if_needed();

        tracing::debug!(
            scene = %window.scene().id,
            controllers = stats.controllers,
            surfaces = stats.surfaces,
            accent = %palette.accent.to_hex_string(),
            "sync: palette applied"
        );
    }
}

fn navigation_descriptor(palette: &Palette) -> ChromeStyleDescriptor {
    ChromeStyleDescriptor {
        background: palette.surface,
        title_color: palette.primary,
        large_title_color: palette.primary,
        item_color: palette.accent,
        selected_item_color: palette.accent,
        title_position: Offset::ZERO,
        item_title_position: Offset::ZERO,
    }
}

fn tab_descriptor(palette: &Palette) -> ChromeStyleDescriptor {
    ChromeStyleDescriptor {
        background: palette.surface,
        title_color: palette.primary,
        large_title_color: palette.primary,
        item_color: palette.secondary,
        selected_item_color: palette.accent,
        title_position: Offset::ZERO,
        item_title_position: TAB_ITEM_TITLE_OFFSET,
    }
}

/// Restyle every bar reachable from `root`, including modal presentations.
///
/// Each controller is borrowed only while its own bars are restyled, never
/// while descending. Shared subtrees and presentation cycles are visited once.
pub fn apply_to_tree(root: &ControllerRef, defaults: &ChromeDefaults) -> WalkStats {
    let mut stats = WalkStats::default();
    let mut visited = FxHashSet::default();
    let mut stack = vec![Rc::clone(root)];

    while let Some(controller) = stack.pop() {
        if !visited.insert(Rc::as_ptr(&controller)) {
            continue;
        }
        stats.controllers += 1;

        let mut node = controller.borrow_mut();
        for surface in node.chrome_surfaces_mut() {
            surface.apply_chrome(defaults);
            stats.surfaces += 1;
        }
        if let Some(presented) = node.presented() {
            stack.push(Rc::clone(presented));
        }
        stack.extend(node.children().iter().rev().cloned());
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_platform::{Controller, WindowScene};
    use pulse_theme::ThemePreset;

    fn window_with(root: ControllerRef) -> WindowState {
        let mut window = WindowState::new(WindowScene::new("test", 390.0, 844.0));
        window.set_root(root);
        window
    }

    #[test]
    fn scroll_edge_matches_standard() {
        let defaults = AppearanceSynchronizer::chrome_defaults(&ThemePreset::Sunset.palette());
        assert_eq!(defaults.navigation.standard, defaults.navigation.scroll_edge);
        assert_eq!(defaults.tab.standard, defaults.tab.scroll_edge);
    }

    #[test]
    fn window_without_root_only_installs_defaults() {
        let registry = Rc::new(AppearanceRegistry::new());
        let sync = AppearanceSynchronizer::new(registry.clone());
        let window = WindowState::new(WindowScene::new("empty", 390.0, 844.0));

        sync.synchronize(&ThemePreset::Midnight.palette(), &window);

        assert_eq!(registry.install_count(), 1);
        assert_eq!(registry.navigation().tint, ThemePreset::Midnight.palette().accent);
    }

    #[test]
    fn dual_container_gets_both_updates() {
        let registry = Rc::new(AppearanceRegistry::new());
        let sync = AppearanceSynchronizer::new(registry.clone());
        let hub = Controller::tabs("hub", &registry)
            .with_navigation_bar(&registry)
            .into_ref();
        let window = window_with(hub.clone());
        let palette = ThemePreset::Meadow.palette();

        sync.synchronize(&palette, &window);

        let hub = hub.borrow();
        assert_eq!(hub.navigation_bar().map(|b| b.tint), Some(palette.accent));
        assert_eq!(hub.tab_bar().map(|b| b.unselected_item_tint), Some(palette.secondary));
    }

    #[test]
    fn root_is_laid_out_once_per_pass() {
        let registry = Rc::new(AppearanceRegistry::new());
        let sync = AppearanceSynchronizer::new(registry.clone());
        let root = Controller::navigation("root", &registry).into_ref();
        let window = window_with(root.clone());

        sync.synchronize(&ThemePreset::Classic.palette(), &window);
        sync.synchronize(&ThemePreset::Classic.palette(), &window);

        assert_eq!(root.borrow().layout_passes(), 2);
        assert!(!root.borrow().needs_layout());
    }

    #[test]
    fn presentation_cycles_terminate() {
        let registry = AppearanceRegistry::new();
        let a = Controller::navigation("a", &registry).into_ref();
        let b = Controller::navigation("b", &registry).into_ref();
        a.borrow_mut().present(b.clone());
        b.borrow_mut().present(a.clone());

        let defaults = AppearanceSynchronizer::chrome_defaults(&ThemePreset::Sunset.palette());
        let stats = apply_to_tree(&a, &defaults);
        assert_eq!(stats, WalkStats { controllers: 2, surfaces: 2 });

        // Break the cycle so the test doesn't leak
        a.borrow_mut().dismiss();
    }
}
