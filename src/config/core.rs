use serde::{Deserialize, Serialize};

use crate::disclosure::MaskStyle;
use crate::leaderboard::LeaderboardConfig;

/// Root configuration structure for givebank
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct GivebankConfig {
    /// Leaderboard window, podium, and identity policy
    #[serde(default)]
    pub leaderboard: Option<LeaderboardConfig>,

    /// Contact masking configuration
    #[serde(default)]
    pub disclosure: Option<DisclosureConfig>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DisclosureConfig {
    #[serde(default)]
    pub style: MaskStyle,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OutputConfig {
    pub default_format: Option<String>,
    /// Enable colored output (default: auto-detect based on TTY)
    #[serde(default)]
    pub use_color: Option<bool>,
}

impl GivebankConfig {
    pub fn leaderboard(&self) -> LeaderboardConfig {
        self.leaderboard.clone().unwrap_or_default()
    }

    pub fn mask_style(&self) -> MaskStyle {
        self.disclosure
            .as_ref()
            .map(|d| d.style)
            .unwrap_or_default()
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.as_ref().and_then(|o| o.default_format.as_deref())
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.as_ref().and_then(|o| o.use_color)
    }
}

/// Written by `givebank init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# Give Bank configuration

[leaderboard]
# Length of the trailing leaderboard, in days
window_days = 7
# Entries highlighted on the podium
podium_size = 3
# Which give supplies a contributor's name: "latest" or "first-seen"
identity = "latest"

[disclosure]
# "directory" hides everything; "partial" keeps edges of emails and the last phone digits
style = "directory"

[output]
default_format = "terminal"
"#;
