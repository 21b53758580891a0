//! Footer rules
//!
//! A reusing market may replace the inherited social links and contact
//! line. Additional links are appended in either mode, after the resolved
//! link list.

use market_meta::{FooterSource, MarketRecord, SectionKind};

use super::chain::{SectionRules, Source, present};
use crate::resolved::ResolvedFooter;

pub(crate) struct FooterRules;

impl SectionRules for FooterRules {
    const KIND: SectionKind = SectionKind::Footer;

    type Resolved = ResolvedFooter;

    fn source(record: &MarketRecord) -> Source<'_, ResolvedFooter> {
        match &record.footer.source {
            FooterSource::Custom {
                links,
                social_media,
                contact_info,
            } => Source::Authored(ResolvedFooter {
                links: links.clone(),
                social_media: social_media.clone(),
                contact_info: present(contact_info).map(str::to_string),
            }),
            FooterSource::Reuse { .. } => Source::Reuse(record.footer.target()),
        }
    }

    fn inherit(record: &MarketRecord, mut inherited: ResolvedFooter) -> ResolvedFooter {
        if let FooterSource::Reuse {
            social_media,
            contact_info,
            ..
        } = &record.footer.source
        {
            if let Some(social) = social_media.as_ref().filter(|s| !s.is_empty()) {
                inherited.social_media = Some(social.clone());
            }
            if let Some(contact) = present(contact_info) {
                inherited.contact_info = Some(contact.to_string());
            }
        }
        inherited
    }

    fn extend(record: &MarketRecord, mut resolved: ResolvedFooter) -> ResolvedFooter {
        resolved
            .links
            .extend(record.footer.additional_links.iter().cloned());
        resolved
    }
}
