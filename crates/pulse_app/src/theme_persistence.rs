//! Persisted theme selection

use pulse_platform::PreferenceStore;
use pulse_theme::{ThemePreset, ThemeStore, ThemeSubscription};
use std::rc::Rc;

/// Preference key holding the selected preset id
pub const THEME_PRESET_KEY: &str = "themePreset";

/// Select the persisted preset, or `fallback` if none (or an unknown id) is stored
pub fn restore_theme(
    store: &ThemeStore,
    preferences: &dyn PreferenceStore,
    fallback: ThemePreset,
) -> ThemePreset {
    let stored = preferences.get_string(THEME_PRESET_KEY);
    let preset = match stored.as_deref().map(|id| (id, ThemePreset::from_id(id))) {
        Some((_, Some(preset))) => preset,
        Some((id, None)) => {
            tracing::warn!(id, fallback = fallback.id(), "theme: unknown persisted preset");
            fallback
        }
        None => fallback,
    };

    if store.preset() != Some(preset) {
        store.select_preset(preset);
    }
    preset
}

/// Write the preset id back to `preferences` after every preset switch.
///
/// Custom palettes are not persisted.
pub fn persist_theme_changes(
    store: &Rc<ThemeStore>,
    preferences: Rc<dyn PreferenceStore>,
) -> ThemeSubscription {
    let weak = Rc::downgrade(store);
    store.subscribe(move |_palette| {
        let Some(preset) = weak.upgrade().and_then(|store| store.preset()) else {
            return;
        };
        preferences.set_string(THEME_PRESET_KEY, preset.id());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_platform::MemoryPreferences;

    #[test]
    fn restores_persisted_preset() {
        let prefs = MemoryPreferences::new();
        prefs.set_string(THEME_PRESET_KEY, "meadow");
        let store = ThemeStore::with_preset(ThemePreset::Classic);

        assert_eq!(restore_theme(&store, &prefs, ThemePreset::Classic), ThemePreset::Meadow);
        assert_eq!(store.current_palette(), ThemePreset::Meadow.palette());
    }

    #[test]
    fn unknown_id_falls_back() {
        let prefs = MemoryPreferences::new();
        prefs.set_string(THEME_PRESET_KEY, "neon");
        let store = ThemeStore::with_preset(ThemePreset::Midnight);

        assert_eq!(restore_theme(&store, &prefs, ThemePreset::Sunset), ThemePreset::Sunset);
    }

    #[test]
    fn preset_switches_are_written_back() {
        let prefs = Rc::new(MemoryPreferences::new());
        let store = Rc::new(ThemeStore::with_preset(ThemePreset::Classic));
        let sub = persist_theme_changes(&store, prefs.clone());

        store.select_preset(ThemePreset::Sunset);
        assert_eq!(prefs.get_string(THEME_PRESET_KEY).as_deref(), Some("sunset"));

        store.set_palette(ThemePreset::Meadow.palette());
        assert_eq!(prefs.get_string(THEME_PRESET_KEY).as_deref(), Some("sunset"));

        assert!(store.unsubscribe(sub));
    }
}
