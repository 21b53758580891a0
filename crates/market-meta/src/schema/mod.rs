//! Section schemas for market records
//!
//! Every section is a tagged variant on `mode`:
//!
//! ```toml
//! [header]
//! mode = "custom"
//! logo = "/media/my-flag.png"
//! nav_items = [{ label = "Home", url = "/" }]
//!
//! [banner]
//! mode = "reuse"
//! target = "market-my"
//! button = { label = "Buy Now", url = "/buy" }
//! ```
//!
//! Fields that belong to the other mode are not part of the variant and are
//! ignored when present in storage.

mod banner;
mod footer;
mod header;
mod how_it_works;

pub use banner::BannerSpec;
pub use footer::{FooterSource, FooterSpec};
pub use header::HeaderSpec;
pub use how_it_works::{HowItWorksSpec, StepExtension, StepSpec};

use serde::{Deserialize, Serialize};

use crate::ids::MarketId;

/// A labelled link (navigation item, footer link, button).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// A button group as stored by the authoring surface.
///
/// Either field may be missing or empty; the button only exists once both
/// are filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonSpec {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ButtonSpec {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            url: Some(url.into()),
        }
    }

    /// The complete button, or `None` when label or url is missing or empty.
    pub fn to_link(&self) -> Option<Link> {
        match (non_empty(&self.label), non_empty(&self.url)) {
            (Some(label), Some(url)) => Some(Link::new(label, url)),
            _ => None,
        }
    }

    /// True when exactly one of label and url is filled in.
    pub fn is_partial(&self) -> bool {
        non_empty(&self.label).is_some() != non_empty(&self.url).is_some()
    }
}

/// Treat an empty or whitespace-only string as absent.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Drop blank reuse targets so callers only ever see real references.
pub(crate) fn live_target(target: &Option<MarketId>) -> Option<&MarketId> {
    target.as_ref().filter(|id| !id.is_blank())
}
