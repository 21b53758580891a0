//! Header rules: a reusing market may swap in its own logo.

use market_meta::{HeaderSpec, MarketRecord, SectionKind};

use super::chain::{SectionRules, Source, present};
use crate::resolved::ResolvedHeader;

pub(crate) struct HeaderRules;

impl SectionRules for HeaderRules {
    const KIND: SectionKind = SectionKind::Header;

    type Resolved = ResolvedHeader;

    fn source(record: &MarketRecord) -> Source<'_, ResolvedHeader> {
        match &record.header {
            HeaderSpec::Custom {
                logo,
                nav_items,
                cta_button,
            } => Source::Authored(ResolvedHeader {
                logo: present(logo).map(str::to_string),
                nav_items: nav_items.clone(),
                cta_button: cta_button.as_ref().and_then(|b| b.to_link()),
            }),
            HeaderSpec::Reuse { .. } => Source::Reuse(record.header.target()),
        }
    }

    fn inherit(record: &MarketRecord, mut inherited: ResolvedHeader) -> ResolvedHeader {
        if let HeaderSpec::Reuse { logo, .. } = &record.header {
            if let Some(logo) = present(logo) {
                inherited.logo = Some(logo.to_string());
            }
        }
        inherited
    }
}
