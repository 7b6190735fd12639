mod support;

use pulse_app::{BootEvent, BootPhase, BootstrapConfig};
use pulse_platform::PreferenceStore;
use pulse_theme::ThemePreset;
use support::{ms, phone_scene, Harness};

#[test]
fn first_run_shows_onboarding_and_marks_seen() {
    let harness = Harness::new(false);

    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();

    assert_eq!(scene.window().root_name().as_deref(), Some("onboarding"));
    assert!(scene.window().is_visible());
    assert_eq!(scene.phase(), BootPhase::OnboardingShown);
    assert!(harness.prefs.get_bool("hasOnboarded"));
    assert_eq!(harness.queue.pending(), 0);
    assert_eq!(
        scene.phase_history(),
        vec![(BootPhase::Launching, BootEvent::ShowOnboarding, BootPhase::OnboardingShown)]
    );
}

#[test]
fn relaunch_after_onboarding_shows_splash() {
    let harness = Harness::new(false);

    let first = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    first.discard();

    let second = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    assert_eq!(second.window().root_name().as_deref(), Some("splash"));
    assert_eq!(second.phase(), BootPhase::SplashShown);
}

#[test]
fn missing_scene_shows_nothing() {
    let harness = Harness::new(false);

    assert!(harness.bootstrapper.bootstrap(None).is_none());
    assert!(!harness.prefs.get_bool("hasOnboarded"));
    assert_eq!(harness.theme.subscriber_count(), 0);
    assert_eq!(harness.appearance.install_count(), 0);
}

#[test]
fn hand_off_and_permission_check_follow_the_timeline() {
    let harness = Harness::new(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();

    harness.queue.advance_by(ms(1499));
    assert_eq!(scene.window().root_name().as_deref(), Some("splash"));
    assert!(harness.permissions.check_times().is_empty());

    harness.queue.advance_by(ms(1));
    assert_eq!(scene.window().root_name().as_deref(), Some("main"));
    assert_eq!(scene.phase(), BootPhase::MainShown);
    assert_eq!(scene.window().root_changes(), 2);

    harness.queue.advance_by(ms(999));
    assert!(harness.permissions.check_times().is_empty());

    harness.queue.advance_by(ms(1));
    assert_eq!(harness.permissions.check_times(), vec![ms(2500)]);
    assert_eq!(scene.phase(), BootPhase::PermissionChecked);

    harness.queue.run_until_idle();
    harness.queue.advance_by(ms(10_000));
    assert_eq!(scene.permission_checks(), 1);
    assert_eq!(harness.permissions.shown.get(), 0);
    assert_eq!(
        scene
            .phase_history()
            .iter()
            .map(|(_, _, to)| *to)
            .collect::<Vec<_>>(),
        vec![
            BootPhase::SplashShown,
            BootPhase::TransitioningToMain,
            BootPhase::MainShown,
            BootPhase::PermissionChecked,
        ]
    );
}

#[test]
fn gated_reminder_is_presented_over_main() {
    let harness = Harness::new(true);
    harness.permissions.gate.set(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();

    harness.queue.run_until_idle();

    assert_eq!(harness.permissions.shown.get(), 1);
    let root = scene.root().unwrap();
    let presented = root.borrow().presented().map(|p| p.borrow().name().to_string());
    assert_eq!(presented.as_deref(), Some("health-reminder"));
}

#[test]
fn discard_before_hand_off_cancels_pending_steps() {
    let harness = Harness::new(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    assert_eq!(harness.theme.subscriber_count(), 1);

    harness.queue.advance_by(ms(1000));
    scene.discard();

    assert_eq!(harness.theme.subscriber_count(), 0);
    assert_eq!(harness.queue.pending(), 0);
    assert_eq!(harness.queue.advance_by(ms(5000)), 0);
    assert!(harness.permissions.check_times().is_empty());
}

#[test]
fn discard_without_cancellation_relies_on_weak_guard() {
    let config = BootstrapConfig {
        cancel_pending_on_teardown: false,
        ..BootstrapConfig::default()
    };
    let harness = Harness::with_config(config, true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    let installs = harness.appearance.install_count();

    drop(scene);
    assert_eq!(harness.theme.subscriber_count(), 0);
    assert_eq!(harness.queue.pending(), 1);

    // The hand-off still fires but finds no scene, so nothing further is queued
    assert_eq!(harness.queue.advance_by(ms(5000)), 1);
    assert_eq!(harness.queue.pending(), 0);
    assert!(harness.permissions.check_times().is_empty());

    harness.theme.select_preset(ThemePreset::Midnight);
    assert_eq!(harness.appearance.install_count(), installs);
}

#[test]
fn discard_between_hand_off_and_check_skips_the_check() {
    let harness = Harness::new(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();

    harness.queue.advance_by(ms(2000));
    assert_eq!(scene.phase(), BootPhase::MainShown);
    assert_eq!(harness.queue.pending(), 1);

    drop(scene);
    assert_eq!(harness.queue.pending(), 0);
    harness.queue.run_until_idle();
    assert!(harness.permissions.check_times().is_empty());
}

#[test]
fn theme_switch_during_splash_styles_main() {
    let harness = Harness::new(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();

    harness.queue.advance_by(ms(500));
    harness.theme.select_preset(ThemePreset::Midnight);
    harness.queue.advance_by(ms(1000));

    let midnight = ThemePreset::Midnight.palette();
    let root = scene.root().unwrap();
    let main = root.borrow();
    assert_eq!(main.tab_bar().unwrap().tint, midnight.accent);
    for tab in main.children() {
        let tab = tab.borrow();
        let bar = tab.navigation_bar().unwrap();
        assert_eq!(bar.tint, midnight.accent);
        assert_eq!(bar.standard_appearance.title_color, midnight.primary);
    }
}

#[test]
fn theme_switch_after_hand_off_restyles_live_chrome() {
    let harness = Harness::new(true);
    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    harness.queue.advance_by(ms(1500));

    harness.theme.select_preset(ThemePreset::Sunset);

    let sunset = ThemePreset::Sunset.palette();
    let root = scene.root().unwrap();
    let main = root.borrow();
    let tab_bar = main.tab_bar().unwrap();
    assert_eq!(tab_bar.unselected_item_tint, sunset.secondary);
    assert_eq!(tab_bar.standard_appearance.background, sunset.surface);
    assert_eq!(main.layout_passes(), 1);
}

#[test]
fn custom_onboarding_flag_key_is_honored() {
    let config = BootstrapConfig {
        onboarding_flag_key: "seenIntro".into(),
        ..BootstrapConfig::default()
    };
    let harness = Harness::with_config(config, false);

    let scene = harness.bootstrapper.bootstrap(Some(&phone_scene())).unwrap();
    assert_eq!(scene.phase(), BootPhase::OnboardingShown);
    assert!(harness.prefs.get_bool("seenIntro"));
    assert!(!harness.prefs.get_bool("hasOnboarded"));
}
