use crate::domain::Settings;
use crate::ports::Clock;

/// Application context holding dependencies for command execution.
pub struct AppContext<C: Clock> {
    settings: Settings,
    clock: C,
}

impl<C: Clock> AppContext<C> {
    /// Create a new application context.
    pub fn new(settings: Settings, clock: C) -> Self {
        Self { settings, clock }
    }

    /// Get a reference to the settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a reference to the clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }
}
