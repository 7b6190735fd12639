//! Headless launch simulation
//!
//! Drives a [`PulseApp`] with in-memory collaborators on the virtual clock,
//! one millisecond at a time, and records what a user would have seen.

use clap::Args;
use serde::Serialize;
use pulse_app::{AppHost, BootPhase, DefaultSurfaces, PulseApp, PulseConfig, Scene};
use pulse_platform::{
    BackgroundTaskScheduler, Controller, ControllerRef, HealthSyncEngine, MemoryPreferences,
    PermissionManager, PreferenceStore, WindowScene,
};
use pulse_theme::{ThemePreset, ThemeStore};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Args)]
pub struct SimulateArgs {
    /// Start as a returning user (onboarding already seen)
    #[arg(long)]
    pub onboarded: bool,

    /// Preset selected before launch
    #[arg(long, value_parser = parse_preset)]
    pub theme: Option<ThemePreset>,

    /// Switch theme at a point in time, as MS:ID (repeatable)
    #[arg(long = "switch-theme-at", value_parser = parse_theme_switch)]
    pub switch_theme_at: Vec<ThemeSwitch>,

    /// Discard the scene at MS
    #[arg(long)]
    pub discard_at: Option<u64>,

    /// Let the health-permission gate report true
    #[arg(long)]
    pub remind: bool,

    /// Print the timeline as a JSON array
    #[arg(long)]
    pub json: bool,

    /// Stop the clock at MS
    #[arg(long, default_value_t = 3000)]
    pub until: u64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ThemeSwitch {
    pub at_ms: u64,
    pub preset: ThemePreset,
}

fn parse_preset(id: &str) -> Result<ThemePreset, String> {
    ThemePreset::from_id(id).ok_or_else(|| {
        let known: Vec<&str> = ThemePreset::all().iter().map(|p| p.id()).collect();
        format!("unknown theme '{id}' (expected one of: {})", known.join(", "))
    })
}

fn parse_theme_switch(value: &str) -> Result<ThemeSwitch, String> {
    let (at, id) = value
        .split_once(':')
        .ok_or_else(|| format!("expected MS:ID, got '{value}'"))?;
    let at_ms = at
        .trim()
        .parse()
        .map_err(|_| format!("invalid time '{at}' in '{value}'"))?;
    Ok(ThemeSwitch {
        at_ms,
        preset: parse_preset(id.trim())?,
    })
}

/// One observed moment of the simulated launch
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntry {
    pub at_ms: u64,
    pub message: String,
}

impl fmt::Display for TimelineEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}ms  {}", self.at_ms, self.message)
    }
}

type Inbox = Rc<RefCell<Vec<String>>>;

struct SimHealth {
    inbox: Inbox,
}

impl HealthSyncEngine for SimHealth {
    fn start_if_needed(&self) {
        self.inbox
            .borrow_mut()
            .push("health sync started".to_string());
    }
}

struct SimScheduler {
    identifier: String,
    inbox: Inbox,
}

impl BackgroundTaskScheduler for SimScheduler {
    fn identifier(&self) -> &str {
        &self.identifier
    }

    fn register(&self) {
        self.inbox
            .borrow_mut()
            .push(format!("background task registered: {}", self.identifier));
    }

    fn schedule_if_needed(&self) {
        self.inbox
            .borrow_mut()
            .push("background refresh requested".to_string());
    }
}

struct SimPermissions {
    remind: bool,
    inbox: Inbox,
}

impl PermissionManager for SimPermissions {
    fn should_show_health_reminder(&self) -> bool {
        self.inbox
            .borrow_mut()
            .push(format!("permission check (remind: {})", self.remind));
        self.remind
    }

    fn show_health_permission_reminder(&self, from: &ControllerRef) {
        let host = from.borrow().name().to_string();
        from.borrow_mut()
            .present(Controller::plain("health-reminder").into_ref());
        self.inbox
            .borrow_mut()
            .push(format!("health reminder presented over {host}"));
    }
}

/// What the stepping loop last saw, so only changes are recorded
#[derive(Default)]
struct Observed {
    phase: Option<BootPhase>,
    root: Option<String>,
}

pub fn run_simulation(mut config: PulseConfig, args: &SimulateArgs) -> Vec<TimelineEntry> {
    if let Some(theme) = args.theme {
        config.theme.preset = theme;
    }

    let inbox: Inbox = Rc::default();
    let prefs = Rc::new(MemoryPreferences::new());
    if args.onboarded {
        prefs.set_bool(&config.bootstrap.onboarding_flag_key, true);
    }
    if let Some(theme) = args.theme {
        prefs.set_string(pulse_app::THEME_PRESET_KEY, theme.id());
    }

    let host = AppHost {
        preferences: prefs,
        permissions: Rc::new(SimPermissions {
            remind: args.remind,
            inbox: inbox.clone(),
        }),
        health: Rc::new(SimHealth {
            inbox: inbox.clone(),
        }),
        background: Rc::new(SimScheduler {
            identifier: config.background.task_identifier.clone(),
            inbox: inbox.clone(),
        }),
        surfaces: Rc::new(DefaultSurfaces),
    };

    let app = PulseApp::new(config, host);
    let queue = app.queue().clone();
    let mut timeline = Vec::new();
    let mut observed = Observed::default();

    inbox
        .borrow_mut()
        .push(format!("theme {}", theme_label(app.theme())));
    app.launch();

    let scene: Rc<RefCell<Option<Scene>>> = Rc::new(RefCell::new(
        app.connect_scene(Some(&WindowScene::new("simulator", 390.0, 844.0))),
    ));

    for switch in &args.switch_theme_at {
        let theme = app.theme().clone();
        let inbox = inbox.clone();
        let preset = switch.preset;
        queue.schedule_after(Duration::from_millis(switch.at_ms), "sim-theme-switch", move |_| {
            inbox.borrow_mut().push(format!("theme switched to {preset}"));
            theme.select_preset(preset);
        });
    }

    if let Some(at) = args.discard_at {
        let scene = scene.clone();
        let inbox = inbox.clone();
        queue.schedule_after(Duration::from_millis(at), "sim-discard", move |_| {
            if let Some(scene) = scene.borrow_mut().take() {
                scene.discard();
                inbox.borrow_mut().push("scene discarded".to_string());
            }
        });
    }

    record(&queue, &inbox, &scene, &mut observed, &mut timeline);
    let step = Duration::from_millis(1);
    while queue.now() < Duration::from_millis(args.until) {
        queue.advance_by(step);
        record(&queue, &inbox, &scene, &mut observed, &mut timeline);
    }

    tracing::debug!(entries = timeline.len(), "simulate: finished");
    // Release the scene before the app that owns its theme store
    scene.borrow_mut().take();
    timeline
}

fn record(
    queue: &pulse_core::MainQueue,
    inbox: &Inbox,
    scene: &RefCell<Option<Scene>>,
    observed: &mut Observed,
    timeline: &mut Vec<TimelineEntry>,
) {
    let at_ms = queue.now().as_millis() as u64;
    let mut push = |message: String| timeline.push(TimelineEntry { at_ms, message });

    for message in inbox.borrow_mut().drain(..) {
        push(message);
    }

    let scene = scene.borrow();
    let Some(scene) = scene.as_ref() else {
        return;
    };

    let root = scene.window().root_name();
    if root != observed.root {
        if let Some(name) = &root {
            push(format!("root attached: {name}"));
        }
        observed.root = root;
    }

    let phase = scene.phase();
    if observed.phase != Some(phase) {
        push(format!("phase {phase:?}"));
        observed.phase = Some(phase);
    }
}

fn theme_label(store: &ThemeStore) -> String {
    match store.preset() {
        Some(preset) => preset.id().to_string(),
        None => format!("custom (accent {})", store.current_palette().accent.to_hex_string()),
    }
}
