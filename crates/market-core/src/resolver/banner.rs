//! Banner rules: a reusing market may replace the button, but only with a
//! complete one.

use market_meta::{BannerSpec, MarketRecord, SectionKind};

use super::chain::{SectionRules, Source, present};
use crate::resolved::ResolvedBanner;

pub(crate) struct BannerRules;

impl SectionRules for BannerRules {
    const KIND: SectionKind = SectionKind::Banner;

    type Resolved = ResolvedBanner;

    fn source(record: &MarketRecord) -> Source<'_, ResolvedBanner> {
        match &record.banner {
            BannerSpec::Custom {
                media,
                headline,
                button,
            } => Source::Authored(ResolvedBanner {
                media: present(media).map(str::to_string),
                headline: present(headline).map(str::to_string),
                button: button.as_ref().and_then(|b| b.to_link()),
            }),
            BannerSpec::Reuse { .. } => Source::Reuse(record.banner.target()),
        }
    }

    fn inherit(record: &MarketRecord, mut inherited: ResolvedBanner) -> ResolvedBanner {
        if let BannerSpec::Reuse {
            button: Some(button),
            ..
        } = &record.banner
        {
            match button.to_link() {
                Some(link) => inherited.button = Some(link),
                None if button.is_partial() => tracing::debug!(
                    market = %record.id,
                    "Partial banner button override ignored"
                ),
                None => {}
            }
        }
        inherited
    }
}
