//! The raw market record

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::ids::{MarketCode, MarketId};
use crate::schema::{BannerSpec, FooterSource, FooterSpec, HeaderSpec, HowItWorksSpec};
use crate::section::{SectionKind, SectionMode};

/// One market as authored in the content store.
///
/// Sections missing from storage fall back to `reuse` without a target,
/// which resolves to the section's empty default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketRecord {
    pub id: MarketId,
    pub name: String,
    pub code: MarketCode,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub header: HeaderSpec,
    #[serde(default)]
    pub footer: FooterSpec,
    #[serde(default)]
    pub banner: BannerSpec,
    #[serde(default)]
    pub how_it_works: HowItWorksSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl MarketRecord {
    /// Create a record whose sections are all unset.
    pub fn new(id: impl Into<MarketId>, name: impl Into<String>, code: MarketCode) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            code,
            is_default: false,
            header: HeaderSpec::default(),
            footer: FooterSpec::default(),
            banner: BannerSpec::default(),
            how_it_works: HowItWorksSpec::default(),
            created_at: None,
            updated_at: None,
        }
    }

    /// The market this record reuses for `kind`, if that section is in
    /// reuse mode with a non-blank target.
    pub fn reuse_target(&self, kind: SectionKind) -> Option<&MarketId> {
        match kind {
            SectionKind::Header => self.header.target(),
            SectionKind::Footer => self.footer.target(),
            SectionKind::Banner => self.banner.target(),
            SectionKind::HowItWorks => self.how_it_works.target(),
        }
    }

    pub fn mode(&self, kind: SectionKind) -> SectionMode {
        let reuse = match kind {
            SectionKind::Header => matches!(self.header, HeaderSpec::Reuse { .. }),
            SectionKind::Footer => matches!(self.footer.source, FooterSource::Reuse { .. }),
            SectionKind::Banner => matches!(self.banner, BannerSpec::Reuse { .. }),
            SectionKind::HowItWorks => matches!(self.how_it_works, HowItWorksSpec::Reuse { .. }),
        };
        if reuse {
            SectionMode::Reuse
        } else {
            SectionMode::Custom
        }
    }

    /// Check the identity fields a store relies on.
    pub fn validate(&self) -> Result<()> {
        if self.id.is_blank() {
            return Err(Error::InvalidRecord {
                id: self.id.to_string(),
                message: "id is empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::InvalidRecord {
                id: self.id.to_string(),
                message: "name is empty".to_string(),
            });
        }
        Ok(())
    }
}
