mod support;

use pulse_app::{
    AppHost, BackgroundConfig, BootPhase, DefaultSurfaces, LifecycleCoordinator, PulseApp,
    PulseConfig, THEME_PRESET_KEY,
};
use pulse_platform::{MemoryPreferences, PreferenceStore};
use pulse_theme::ThemePreset;
use std::rc::Rc;
use support::{ms, phone_scene, CallLog, RecordingPermissions};

#[test]
fn launch_starts_sync_then_registers_then_schedules() {
    let log = Rc::new(CallLog::default());
    let lifecycle = LifecycleCoordinator::new(BackgroundConfig::default(), log.clone(), log.clone());

    assert!(lifecycle.identifier_matches());
    lifecycle.on_launch();
    assert_eq!(
        log.calls(),
        vec!["health.start_if_needed", "tasks.register", "tasks.schedule_if_needed"]
    );

    lifecycle.on_enter_background();
    lifecycle.on_enter_background();
    assert_eq!(log.calls()[3..], ["tasks.schedule_if_needed", "tasks.schedule_if_needed"]);
}

#[test]
fn disabled_health_sync_is_not_started() {
    let log = Rc::new(CallLog::default());
    let config = BackgroundConfig {
        health_sync_enabled: false,
        ..BackgroundConfig::default()
    };
    let lifecycle = LifecycleCoordinator::new(config, log.clone(), log.clone());

    lifecycle.on_launch();
    assert_eq!(log.calls(), vec!["tasks.register", "tasks.schedule_if_needed"]);
}

#[test]
fn mismatched_task_identifier_is_detected() {
    let log = Rc::new(CallLog::default());
    let config = BackgroundConfig {
        task_identifier: "org.example.other".into(),
        ..BackgroundConfig::default()
    };
    let lifecycle = LifecycleCoordinator::new(config, log.clone(), log.clone());

    assert!(!lifecycle.identifier_matches());
    lifecycle.on_launch();
    assert_eq!(log.calls().len(), 3);
}

fn app_with(prefs: Rc<MemoryPreferences>, log: Rc<CallLog>, config: PulseConfig) -> PulseApp {
    let queue = Rc::new(pulse_core::MainQueue::new());
    PulseApp::new(
        config,
        AppHost {
            preferences: prefs,
            permissions: Rc::new(RecordingPermissions::new(queue, false)),
            health: log.clone(),
            background: log,
            surfaces: Rc::new(DefaultSurfaces),
        },
    )
}

#[test]
fn app_restores_and_persists_the_theme() {
    let prefs = Rc::new(MemoryPreferences::new());
    prefs.set_string(THEME_PRESET_KEY, "meadow");

    let app = app_with(prefs.clone(), Rc::new(CallLog::default()), PulseConfig::default());
    assert_eq!(app.theme().preset(), Some(ThemePreset::Meadow));

    app.theme().select_preset(ThemePreset::Midnight);
    assert_eq!(prefs.get_string(THEME_PRESET_KEY).as_deref(), Some("midnight"));

    drop(app);
    assert_eq!(prefs.get_string(THEME_PRESET_KEY).as_deref(), Some("midnight"));
}

#[test]
fn configured_preset_applies_when_nothing_is_persisted() {
    let mut config = PulseConfig::default();
    config.theme.preset = ThemePreset::Sunset;

    let app = app_with(Rc::new(MemoryPreferences::new()), Rc::new(CallLog::default()), config);
    assert_eq!(app.theme().current_palette(), ThemePreset::Sunset.palette());
}

#[test]
fn app_honors_disabled_health_sync() {
    let log = Rc::new(CallLog::default());
    let mut config = PulseConfig::default();
    config.background.health_sync_enabled = false;

    let app = app_with(Rc::new(MemoryPreferences::new()), log.clone(), config);
    app.launch();
    assert!(!log.calls().contains(&"health.start_if_needed"));
}

#[test]
fn app_runs_a_full_returning_launch() {
    let prefs = Rc::new(MemoryPreferences::new());
    prefs.set_bool("hasOnboarded", true);
    let log = Rc::new(CallLog::default());
    let app = app_with(prefs, log.clone(), PulseConfig::default());

    app.launch();
    let scene = app.connect_scene(Some(&phone_scene())).unwrap();
    assert_eq!(app.theme().subscriber_count(), 2);

    app.queue().advance_by(ms(3000));
    assert_eq!(scene.phase(), BootPhase::PermissionChecked);

    app.enter_background();
    assert_eq!(log.calls().len(), 4);

    scene.discard();
    assert_eq!(app.theme().subscriber_count(), 1);
}
