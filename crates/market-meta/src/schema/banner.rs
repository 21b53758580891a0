//! Banner section schema

use serde::{Deserialize, Serialize};

use super::{ButtonSpec, live_target};
use crate::ids::MarketId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BannerSpec {
    Custom {
        /// Image or video URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        media: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        headline: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button: Option<ButtonSpec>,
    },
    Reuse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<MarketId>,
        /// Replaces the inherited button when both label and url are set.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        button: Option<ButtonSpec>,
    },
}

impl BannerSpec {
    pub fn target(&self) -> Option<&MarketId> {
        match self {
            BannerSpec::Custom { .. } => None,
            BannerSpec::Reuse { target, .. } => live_target(target),
        }
    }
}

impl Default for BannerSpec {
    fn default() -> Self {
        BannerSpec::Reuse {
            target: None,
            button: None,
        }
    }
}
