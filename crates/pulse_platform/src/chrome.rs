//! Chrome surfaces: navigation bars, tab bars, and their style defaults
//!
//! Chrome is styled through two independent paths that must agree:
//!
//! - **Declarative**: [`AppearanceRegistry`] holds the default [`ChromeDefaults`].
//!   Every bar created afterwards copies them at construction time.
//! - **Imperative**: bars that already exist are restyled in place through
//!   [`ChromeSurface::apply_chrome`].

use pulse_core::Color;
use std::cell::{Cell, RefCell};

/// Positional adjustment in points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub horizontal: f32,
    pub vertical: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset::new(0.0, 0.0);

    pub const fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// How a bar renders: fill, title colors, and item positioning.
///
/// Values are absolute, so applying the same descriptor twice is the same as
/// applying it once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeStyleDescriptor {
    pub background: Color,
    pub title_color: Color,
    pub large_title_color: Color,
    pub item_color: Color,
    pub selected_item_color: Color,
    pub title_position: Offset,
    pub item_title_position: Offset,
}

impl ChromeStyleDescriptor {
    /// Opaque system look used before any theme has been applied
    pub const SYSTEM: ChromeStyleDescriptor = ChromeStyleDescriptor {
        background: Color::WHITE,
        title_color: Color::BLACK,
        large_title_color: Color::BLACK,
        item_color: Color::rgb(0.56, 0.56, 0.58),
        selected_item_color: Color::rgb(0.0, 0.48, 1.0),
        title_position: Offset::ZERO,
        item_title_position: Offset::ZERO,
    };
}

/// Defaults for navigation chrome
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavigationChrome {
    pub standard: ChromeStyleDescriptor,
    pub scroll_edge: ChromeStyleDescriptor,
    pub tint: Color,
}

/// Defaults for tab chrome
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TabChrome {
    pub standard: ChromeStyleDescriptor,
    pub scroll_edge: ChromeStyleDescriptor,
    pub tint: Color,
    pub unselected_item_tint: Color,
}

/// Complete chrome style for both bar kinds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChromeDefaults {
    pub navigation: NavigationChrome,
    pub tab: TabChrome,
}

impl Default for ChromeDefaults {
    fn default() -> Self {
        let system = ChromeStyleDescriptor::SYSTEM;
        Self {
            navigation: NavigationChrome {
                standard: system,
                scroll_edge: system,
                tint: system.selected_item_color,
            },
            tab: TabChrome {
                standard: system,
                scroll_edge: system,
                tint: system.selected_item_color,
                unselected_item_tint: system.item_color,
            },
        }
    }
}

/// Ambient default style for chrome created from now on.
///
/// One registry is shared (via `Rc`) by everything that builds controllers
/// for a given window, so a synchronization pass reaches future bars too.
#[derive(Debug, Default)]
pub struct AppearanceRegistry {
    defaults: RefCell<ChromeDefaults>,
    installs: Cell<u64>,
}

impl AppearanceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the defaults for all future bars
    pub fn install(&self, defaults: ChromeDefaults) {
        *self.defaults.borrow_mut() = defaults;
        self.installs.set(self.installs.get() + 1);
    }

    pub fn defaults(&self) -> ChromeDefaults {
        *self.defaults.borrow()
    }

    pub fn navigation(&self) -> NavigationChrome {
        self.defaults.borrow().navigation
    }

    pub fn tab(&self) -> TabChrome {
        self.defaults.borrow().tab
    }

    /// How many times defaults have been installed
    pub fn install_count(&self) -> u64 {
        self.installs.get()
    }
}

/// Kind of chrome a surface draws
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChromeKind {
    Navigation,
    Tab,
}

/// A live bar that can be restyled in place
pub trait ChromeSurface {
    fn kind(&self) -> ChromeKind;

    /// Restyle from `style`, taking the part relevant to this kind of bar
    fn apply_chrome(&mut self, style: &ChromeDefaults);
}

/// Live navigation bar
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationBar {
    pub standard_appearance: ChromeStyleDescriptor,
    pub scroll_edge_appearance: ChromeStyleDescriptor,
    pub tint: Color,
}

impl NavigationBar {
    /// New bar picking up the registry's current defaults
    pub fn from_defaults(registry: &AppearanceRegistry) -> Self {
        let nav = registry.navigation();
        Self {
            standard_appearance: nav.standard,
            scroll_edge_appearance: nav.scroll_edge,
            tint: nav.tint,
        }
    }
}

impl ChromeSurface for NavigationBar {
    fn kind(&self) -> ChromeKind {
        ChromeKind::Navigation
    }

    fn apply_chrome(&mut self, style: &ChromeDefaults) {
        self.standard_appearance = style.navigation.standard;
        self.scroll_edge_appearance = style.navigation.scroll_edge;
        self.tint = style.navigation.tint;
    }
}

/// Live tab bar
#[derive(Clone, Debug, PartialEq)]
pub struct TabBar {
    pub standard_appearance: ChromeStyleDescriptor,
    pub scroll_edge_appearance: ChromeStyleDescriptor,
    pub tint: Color,
    pub unselected_item_tint: Color,
}

impl TabBar {
    /// New bar picking up the registry's current defaults
    pub fn from_defaults(registry: &AppearanceRegistry) -> Self {
        let tab = registry.tab();
        Self {
            standard_appearance: tab.standard,
            scroll_edge_appearance: tab.scroll_edge,
            tint: tab.tint,
            unselected_item_tint: tab.unselected_item_tint,
        }
    }
}

impl ChromeSurface for TabBar {
    fn kind(&self) -> ChromeKind {
        ChromeKind::Tab
    }

    fn apply_chrome(&mut self, style: &ChromeDefaults) {
        self.standard_appearance = style.tab.standard;
        self.scroll_edge_appearance = style.tab.scroll_edge;
        self.tint = style.tab.tint;
        self.unselected_item_tint = style.tab.unselected_item_tint;
    }
}
