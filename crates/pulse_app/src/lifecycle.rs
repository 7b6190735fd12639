//! Process lifecycle wiring

use crate::config::BackgroundConfig;
use pulse_platform::{BackgroundTaskScheduler, HealthSyncEngine};
use std::rc::Rc;

/// Routes application lifecycle events to background capabilities.
///
/// Holds nothing but its configuration and collaborators; every call is
/// fire-and-forget.
#[derive(Clone)]
pub struct LifecycleCoordinator {
    config: BackgroundConfig,
    health: Rc<dyn HealthSyncEngine>,
    tasks: Rc<dyn BackgroundTaskScheduler>,
}

impl LifecycleCoordinator {
    pub fn new(
        config: BackgroundConfig,
        health: Rc<dyn HealthSyncEngine>,
        tasks: Rc<dyn BackgroundTaskScheduler>,
    ) -> Self {
        Self {
            config,
            health,
            tasks,
        }
    }

    /// Whether the scheduler registers under the configured task identifier
    pub fn identifier_matches(&self) -> bool {
        self.tasks.identifier() == self.config.task_identifier
    }

    /// Process start: start sync if enabled, register the background task, try one schedule
    pub fn on_launch(&self) {
        tracing::info!(
            task = self.tasks.identifier(),
            health_sync = self.config.health_sync_enabled,
            "lifecycle: launch"
        );
        if !self.identifier_matches() {
            tracing::warn!(
                configured = %self.config.task_identifier,
                scheduler = self.tasks.identifier(),
                "lifecycle: background task identifier differs from configuration"
            );
        }

        if self.config.health_sync_enabled {
            self.health.start_if_needed();
        } else {
            tracing::info!("lifecycle: health sync disabled by configuration");
        }
        self.tasks.register();
        self.tasks.schedule_if_needed();
    }

    /// Re-arm background scheduling so the latest enablement is honored
    pub fn on_enter_background(&self) {
        tracing::info!(task = self.tasks.identifier(), "lifecycle: entered background");
        self.tasks.schedule_if_needed();
    }
}

impl std::fmt::Debug for LifecycleCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifecycleCoordinator")
            .field("task", &self.tasks.identifier())
            .field("health_sync_enabled", &self.config.health_sync_enabled)
            .finish()
    }
}
