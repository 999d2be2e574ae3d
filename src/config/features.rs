//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for toggling optional behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Emit logs as JSON lines instead of human-readable text
    #[serde(default)]
    pub json_logs: bool,

    /// Show internal error messages in 5xx responses (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Trace HTTP requests
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            json_logs: false,
            verbose_errors: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_trace_requests_with_text_logs() {
        let flags = FeatureFlags::default();
        assert!(!flags.json_logs);
        assert!(!flags.verbose_errors);
        assert!(flags.enable_tracing);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let flags: FeatureFlags = serde_json::from_str(r#"{"json_logs": true}"#).unwrap();
        assert!(flags.json_logs);
        assert!(flags.enable_tracing);
    }
}
