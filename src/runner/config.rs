//! Job runner configuration
//!
//! Options controlling a single job run.

use std::time::Duration;

/// Configuration for a job run.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// How long the runner pauses to simulate work.
    pub pause: Duration,
}

fn default_pause() -> Duration {
    Duration::from_secs(5)
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            pause: default_pause(),
        }
    }
}

impl JobConfig {
    /// Create a config with the default pause.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the simulated-work pause.
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = JobConfig::default();
        assert_eq!(config.pause, Duration::from_secs(5));
    }

    #[test]
    fn test_config_builder() {
        let config = JobConfig::new().with_pause(Duration::ZERO);
        assert_eq!(config.pause, Duration::ZERO);
    }
}
