use std::default::Default;

/// Contains Config properties which will be used by the Server
#[derive(Clone)]
pub struct ServerConfig {
    /// Whether dropped input commands (malformed, unknown session, stale) are
    /// logged at debug level
    pub log_dropped_commands: bool,
    /// Whether applied commands are re-encoded onto their receipt so they can
    /// be echoed back to the originating Client for prediction
    pub echo_applied_commands: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_dropped_commands: true,
            echo_applied_commands: false,
        }
    }
}
