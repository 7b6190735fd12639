//! Controller tree
//!
//! A controller owns an optional navigation bar, an optional tab bar, its
//! child controllers, and at most one modally presented controller. A
//! controller carrying both bars is both a navigation and a tab container.

use crate::chrome::{AppearanceRegistry, ChromeSurface, NavigationBar, TabBar};
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to a controller in the tree
pub type ControllerRef = Rc<RefCell<Controller>>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct LayoutState {
    needs_layout: bool,
    passes: u32,
}

#[derive(Debug)]
pub struct Controller {
    name: String,
    navigation_bar: Option<NavigationBar>,
    tab_bar: Option<TabBar>,
    children: Vec<ControllerRef>,
    presented: Option<ControllerRef>,
    layout: LayoutState,
}

impl Controller {
    /// Content controller with no chrome of its own
    pub fn plain(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            navigation_bar: None,
            tab_bar: None,
            children: Vec::new(),
            presented: None,
            layout: LayoutState::default(),
        }
    }

    /// Navigation container whose bar starts from the registry defaults
    pub fn navigation(name: impl Into<String>, registry: &AppearanceRegistry) -> Self {
        Self::plain(name).with_navigation_bar(registry)
    }

    /// Tab container whose bar starts from the registry defaults
    pub fn tabs(name: impl Into<String>, registry: &AppearanceRegistry) -> Self {
        Self::plain(name).with_tab_bar(registry)
    }

    pub fn with_navigation_bar(mut self, registry: &AppearanceRegistry) -> Self {
        self.navigation_bar = Some(NavigationBar::from_defaults(registry));
        self
    }

    pub fn with_tab_bar(mut self, registry: &AppearanceRegistry) -> Self {
        self.tab_bar = Some(TabBar::from_defaults(registry));
        self
    }

    pub fn with_child(mut self, child: ControllerRef) -> Self {
        self.children.push(child);
        self
    }

    pub fn into_ref(self) -> ControllerRef {
        Rc::new(RefCell::new(self))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn navigation_bar(&self) -> Option<&NavigationBar> {
        self.navigation_bar.as_ref()
    }

    pub fn tab_bar(&self) -> Option<&TabBar> {
        self.tab_bar.as_ref()
    }

    pub fn is_navigation_container(&self) -> bool {
        self.navigation_bar.is_some()
    }

    pub fn is_tab_container(&self) -> bool {
        self.tab_bar.is_some()
    }

    /// Every live bar this controller owns
    pub fn chrome_surfaces_mut(&mut self) -> SmallVec<[&mut dyn ChromeSurface; 2]> {
        let mut surfaces: SmallVec<[&mut dyn ChromeSurface; 2]> = SmallVec::new();
        if let Some(bar) = self.navigation_bar.as_mut() {
            surfaces.push(bar);
        }
        if let Some(bar) = self.tab_bar.as_mut() {
            surfaces.push(bar);
        }
        surfaces
    }

    pub fn children(&self) -> &[ControllerRef] {
        &self.children
    }

    pub fn add_child(&mut self, child: ControllerRef) {
        self.children.push(child);
    }

    pub fn presented(&self) -> Option<&ControllerRef> {
        self.presented.as_ref()
    }

    /// Present `controller` modally, replacing any current presentation
    pub fn present(&mut self, controller: ControllerRef) {
        self.presented = Some(controller);
    }

    pub fn dismiss(&mut self) -> Option<ControllerRef> {
        self.presented.take()
    }

    pub fn set_needs_layout(&mut self) {
        self.layout.needs_layout = true;
    }

    pub fn needs_layout(&self) -> bool {
        self.layout.needs_layout
    }

    /// Run a layout pass now if one is pending. Returns whether it ran.
    pub fn layout_if_needed(&mut self) -> bool {
        if !self.layout.needs_layout {
            return false;
        }
        self.layout.needs_layout = false;
        self.layout.passes += 1;
        true
    }

    /// Completed layout passes
    pub fn layout_passes(&self) -> u32 {
        self.layout.passes
    }
}
