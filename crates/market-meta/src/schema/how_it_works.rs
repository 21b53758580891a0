//! "How it works" section schema

use serde::{Deserialize, Serialize};

use super::live_target;
use crate::ids::MarketId;

/// One onboarding step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
}

/// Attaches a video to one inherited step, addressed by its 0-based index.
///
/// The index is signed because it is authored as a free number; negative
/// and too-large indexes are dropped at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepExtension {
    pub step_index: i64,
    pub video: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HowItWorksSpec {
    Custom {
        #[serde(default)]
        steps: Vec<StepSpec>,
    },
    Reuse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<MarketId>,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        extensions: Vec<StepExtension>,
    },
}

impl HowItWorksSpec {
    pub fn target(&self) -> Option<&MarketId> {
        match self {
            HowItWorksSpec::Custom { .. } => None,
            HowItWorksSpec::Reuse { target, .. } => live_target(target),
        }
    }
}

impl Default for HowItWorksSpec {
    fn default() -> Self {
        HowItWorksSpec::Reuse {
            target: None,
            extensions: Vec::new(),
        }
    }
}
