//! Theme store
//!
//! Holds the current [`Palette`] and an explicit observer list. All access
//! happens on the main context, so interior mutability is `Cell`/`RefCell`
//! rather than locks.

use crate::palette::Palette;
use crate::presets::ThemePreset;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

new_key_type! {
    struct ListenerId;
}

type Listener = Rc<dyn Fn(&Palette)>;

/// Registration token returned by [`ThemeStore::subscribe`].
///
/// Dropping the token does not unsubscribe; the owner hands it back through
/// [`ThemeStore::unsubscribe`] in its teardown path.
#[must_use = "a subscription must be released with ThemeStore::unsubscribe"]
#[derive(Debug, PartialEq, Eq)]
pub struct ThemeSubscription {
    id: ListenerId,
}

/// Current theme plus change notification
pub struct ThemeStore {
    palette: Cell<Palette>,
    preset: Cell<Option<ThemePreset>>,
    /// Bumped on every palette replacement
    revision: Cell<u64>,
    listeners: RefCell<SlotMap<ListenerId, Listener>>,
}

impl ThemeStore {
    /// Store starting from a custom palette
    pub fn new(palette: Palette) -> Self {
        Self {
            palette: Cell::new(palette),
            preset: Cell::new(None),
            revision: Cell::new(0),
            listeners: RefCell::new(SlotMap::with_key()),
        }
    }

    pub fn with_preset(preset: ThemePreset) -> Self {
        let store = Self::new(preset.palette());
        store.preset.set(Some(preset));
        store
    }

    /// Snapshot of the current palette
    pub fn current_palette(&self) -> Palette {
        self.palette.get()
    }

    /// Active preset, `None` when a custom palette is installed
    pub fn preset(&self) -> Option<ThemePreset> {
        self.preset.get()
    }

    pub fn revision(&self) -> u64 {
        self.revision.get()
    }

    /// Switch to a built-in preset
    pub fn select_preset(&self, preset: ThemePreset) {
        tracing::info!(preset = preset.id(), "theme: selecting preset");
        self.replace(preset.palette(), Some(preset));
    }

    /// Install a custom palette
    pub fn set_palette(&self, palette: Palette) {
        self.replace(palette, None);
    }

    fn replace(&self, palette: Palette, preset: Option<ThemePreset>) {
        let unchanged = self.palette.get() == palette;
        self.preset.set(preset);
        if unchanged {
            tracing::trace!("theme: palette unchanged, skipping notification");
            return;
        }

        self.palette.set(palette);
        self.revision.set(self.revision.get() + 1);
        self.notify();
    }

    /// Deliver the current palette to every subscriber.
    ///
    /// A listener may replace the palette re-entrantly. The nested
    /// notification then delivers the newer palette to everyone, so this
    /// older round stops instead of handing out a stale snapshot. A listener
    /// may also release other subscriptions; those are skipped for the rest
    /// of the round.
    fn notify(&self) {
        let revision = self.revision.get();
        let palette = self.palette.get();
        let listeners: SmallVec<[(ListenerId, Listener); 4]> = self
            .listeners
            .borrow()
            .iter()
            .map(|(id, listener)| (id, listener.clone()))
            .collect();

        tracing::debug!(revision, subscribers = listeners.len(), "theme: notifying subscribers");
        for (id, listener) in listeners {
            if self.revision.get() != revision {
                tracing::debug!(revision, "theme: superseded during notification");
                break;
            }
            if !self.listeners.borrow().contains_key(id) {
                continue;
            }
            listener(&palette);
        }
    }

    /// Register `on_change`, invoked with the new palette after every switch
    pub fn subscribe<F>(&self, on_change: F) -> ThemeSubscription
    where
        F: Fn(&Palette) + 'static,
    {
        let id = self.listeners.borrow_mut().insert(Rc::new(on_change));
        ThemeSubscription { id }
    }

    /// Release a subscription. Returns false if it was already released.
    pub fn unsubscribe(&self, subscription: ThemeSubscription) -> bool {
        self.listeners.borrow_mut().remove(subscription.id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::with_preset(ThemePreset::Classic)
    }
}

impl std::fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeStore")
            .field("preset", &self.preset.get())
            .field("revision", &self.revision.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
