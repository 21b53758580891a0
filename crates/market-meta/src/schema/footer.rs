//! Footer section schema
//!
//! The footer is the one section with a mode-independent field:
//! `additional_links` are appended after the resolved links whether the
//! footer is authored or reused.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Link, live_target};
use crate::ids::MarketId;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FooterSpec {
    #[serde(flatten)]
    pub source: FooterSource,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum FooterSource {
    Custom {
        #[serde(default)]
        links: Vec<Link>,
        /// Platform name to profile URL.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        social_media: Option<BTreeMap<String, String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contact_info: Option<String>,
    },
    Reuse {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        target: Option<MarketId>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        social_media: Option<BTreeMap<String, String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        contact_info: Option<String>,
    },
}

impl FooterSpec {
    pub fn target(&self) -> Option<&MarketId> {
        match &self.source {
            FooterSource::Custom { .. } => None,
            FooterSource::Reuse { target, .. } => live_target(target),
        }
    }
}

impl Default for FooterSource {
    fn default() -> Self {
        FooterSource::Reuse {
            target: None,
            social_media: None,
            contact_info: None,
        }
    }
}
