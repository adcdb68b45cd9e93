use std::time::Duration;

/// Run-loop configuration
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    /// Fixed simulation period (milliseconds)
    pub tick_period_ms: u64,
    /// Pending commands before senders wait
    pub command_buffer: usize,
    /// Snapshots retained for slow subscribers
    pub frame_buffer: usize,
    /// Emit one rendered frame every N ticks
    pub frame_every_n_ticks: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            tick_period_ms: 10,
            command_buffer: 256,
            frame_buffer: 64,
            frame_every_n_ticks: 2,
        }
    }
}

impl ServerConfig {
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.tick_period_ms == 0 {
            return Err("tick_period_ms must be > 0".to_string());
        }
        if self.command_buffer == 0 {
            return Err("command_buffer must be > 0".to_string());
        }
        if self.frame_buffer == 0 {
            return Err("frame_buffer must be > 0".to_string());
        }
        if self.frame_every_n_ticks == 0 {
            return Err("frame_every_n_ticks must be > 0".to_string());
        }
        Ok(())
    }
}
