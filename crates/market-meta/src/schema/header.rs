//! Header section schema

use serde::{Deserialize, Serialize};

use super::{ButtonSpec, Link, live_target};
use crate::ids::MarketId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum HeaderSpec {
    Custom {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        logo: Option<String>,
        #[serde(default)]
        nav_items: Vec<Link>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cta_button: Option<ButtonSpec>,
    },
    Reuse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<MarketId>,
        /// Replaces the inherited logo.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        logo: Option<String>,
    },
}

impl HeaderSpec {
    pub fn target(&self) -> Option<&MarketId> {
        match self {
            HeaderSpec::Custom { .. } => None,
            HeaderSpec::Reuse { target, .. } => live_target(target),
        }
    }
}

impl Default for HeaderSpec {
    fn default() -> Self {
        HeaderSpec::Reuse {
            target: None,
            logo: None,
        }
    }
}
