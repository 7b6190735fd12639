//! Window and scene types

use crate::controller::ControllerRef;

/// A connected platform scene that a window can be attached to
#[derive(Clone, Debug, PartialEq)]
pub struct WindowScene {
    pub id: String,
    pub width: f32,
    pub height: f32,
}

impl WindowScene {
    pub fn new(id: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            width,
            height,
        }
    }
}

/// The application window and its attached root controller
#[derive(Debug)]
pub struct WindowState {
    scene: WindowScene,
    root: Option<ControllerRef>,
    visible: bool,
    root_changes: u32,
}

impl WindowState {
    pub fn new(scene: WindowScene) -> Self {
        Self {
            scene,
            root: None,
            visible: false,
            root_changes: 0,
        }
    }

    pub fn scene(&self) -> &WindowScene {
        &self.scene
    }

    pub fn root(&self) -> Option<&ControllerRef> {
        self.root.as_ref()
    }

    /// Attach `root`, returning the controller it replaced
    pub fn set_root(&mut self, root: ControllerRef) -> Option<ControllerRef> {
        self.root_changes += 1;
        tracing::debug!(
            scene = %self.scene.id,
            root = %root.borrow().name(),
            "window: root attached"
        );
        self.root.replace(root)
    }

    /// Name of the attached root, if any
    pub fn root_name(&self) -> Option<String> {
        self.root.as_ref().map(|root| root.borrow().name().to_string())
    }

    pub fn make_key_and_visible(&mut self) {
        self.visible = true;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// How many times a root has been attached
    pub fn root_changes(&self) -> u32 {
        self.root_changes
    }
}
