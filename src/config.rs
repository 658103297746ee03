use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (compatible; PageProbe/0.1; +https://github.com/dIB59/seo)";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime settings for a probe session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeSettings {
    pub user_agent: String,
    pub timeout_secs: u64,
    pub export_dir: PathBuf,
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            export_dir: PathBuf::from("."),
        }
    }
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
