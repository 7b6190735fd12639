//! Host services the bootstrap layer delegates to
//!
//! Each trait is a fire-and-forget capability implemented by the host
//! application. Implementations own their own enablement rules.

use crate::controller::ControllerRef;

/// Background health-data synchronization
pub trait HealthSyncEngine {
    /// Start syncing. No-op when sync is disabled.
    fn start_if_needed(&self);
}

/// Platform background-task scheduling
pub trait BackgroundTaskScheduler {
    /// Identifier registered with the platform scheduler
    fn identifier(&self) -> &str;

    /// Register the task handler. Safe to call more than once.
    fn register(&self);

    /// Submit a refresh request if the current configuration allows one
    fn schedule_if_needed(&self);
}

/// Health-permission reminder presentation
pub trait PermissionManager {
    fn should_show_health_reminder(&self) -> bool;

    /// Present the reminder over `from`
    fn show_health_permission_reminder(&self, from: &ControllerRef);
}
