//! Gateway configuration.

/// Gateway configuration options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Emit the type-mismatch warning from `stream_write_discard` too.
    pub void_context_warnings: bool,
    /// Idle streams kept per persistent key; extras are closed on release.
    pub max_idle_persistent: usize,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            void_context_warnings: true,
            max_idle_persistent: 16,
        }
    }
}
