use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity label attached to every derived metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Good,
    Warning,
    Critical,
}

impl Tier {
    /// Style class consumed by text panels.
    pub fn class_name(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Warning => "warning",
            Tier::Critical => "critical",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Tier::Good => "✅",
            Tier::Warning | Tier::Critical => "⚠️",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tier::Good => "GOOD",
            Tier::Warning => "WARNING",
            Tier::Critical => "CRITICAL",
        })
    }
}

/// A tier together with the text shown next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub tier: Tier,
    pub title: String,
    pub message: String,
}

impl Classification {
    pub fn new(tier: Tier, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            tier,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.tier.class_name()
    }
}
