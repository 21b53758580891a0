//! [`MarketBuilder`] for test market records.

use std::collections::BTreeMap;

use market_meta::{
    BannerSpec, ButtonSpec, FooterSource, HeaderSpec, HowItWorksSpec, Link,
    MarketCode, MarketId, MarketRecord, SampleIds, StepExtension, StepSpec, sample_markets,
};

/// The Malaysia, Singapore and Australia sample markets with ids
/// `market-my`, `market-sg` and `market-au`.
pub fn seed_markets() -> Vec<MarketRecord> {
    sample_markets(&SampleIds::default())
}

/// `count` authored steps titled `Step 0`, `Step 1`, ... without videos.
pub fn steps(count: usize) -> Vec<StepSpec> {
    (0..count)
        .map(|i| StepSpec {
            icon: Some(format!("icon-{i}")),
            title: format!("Step {i}"),
            description: format!("Description {i}"),
            video: None,
        })
        .collect()
}

fn links(items: &[(&str, &str)]) -> Vec<Link> {
    items
        .iter()
        .map(|(label, url)| Link::new(*label, *url))
        .collect()
}

/// Fluent builder for a [`MarketRecord`].
///
/// # Example
///
/// ```rust
/// use market_test_utils::MarketBuilder;
///
/// let sg = MarketBuilder::new("market-sg", "SG")
///     .reuse_header("market-my", Some("/sg.png"))
///     .build();
/// assert_eq!(sg.code.as_str(), "SG");
/// ```
pub struct MarketBuilder {
    record: MarketRecord,
}

impl MarketBuilder {
    /// Start a record named after its code, with every section unset.
    ///
    /// # Panics
    /// Panics if `code` is not a valid market code.
    pub fn new(id: &str, code: &str) -> Self {
        let code = MarketCode::parse(code)
            .unwrap_or_else(|e| panic!("MarketBuilder: invalid code {code:?}: {e}"));
        Self {
            record: MarketRecord::new(id, format!("Market {code}"), code),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.record.name = name.to_string();
        self
    }

    pub fn default_market(mut self) -> Self {
        self.record.is_default = true;
        self
    }

    pub fn custom_header(
        mut self,
        logo: Option<&str>,
        nav_items: &[(&str, &str)],
        cta: Option<(&str, &str)>,
    ) -> Self {
        self.record.header = HeaderSpec::Custom {
            logo: logo.map(String::from),
            nav_items: links(nav_items),
            cta_button: cta.map(|(label, url)| ButtonSpec::new(label, url)),
        };
        self
    }

    pub fn reuse_header(mut self, target: &str, logo: Option<&str>) -> Self {
        self.record.header = HeaderSpec::Reuse {
            target: Some(MarketId::new(target)),
            logo: logo.map(String::from),
        };
        self
    }

    pub fn custom_footer(
        mut self,
        footer_links: &[(&str, &str)],
        social: &[(&str, &str)],
        contact: Option<&str>,
    ) -> Self {
        let social_media = (!social.is_empty()).then(|| {
            social
                .iter()
                .map(|(p, u)| (p.to_string(), u.to_string()))
                .collect::<BTreeMap<_, _>>()
        });
        self.record.footer.source = FooterSource::Custom {
            links: links(footer_links),
            social_media,
            contact_info: contact.map(String::from),
        };
        self
    }

    pub fn reuse_footer(mut self, target: &str) -> Self {
        self.record.footer.source = FooterSource::Reuse {
            target: Some(MarketId::new(target)),
            social_media: None,
            contact_info: None,
        };
        self
    }

    /// Replace the footer source wholesale, keeping additional links.
    pub fn footer_source(mut self, source: FooterSource) -> Self {
        self.record.footer.source = source;
        self
    }

    pub fn additional_links(mut self, extra: &[(&str, &str)]) -> Self {
        self.record.footer.additional_links = links(extra);
        self
    }

    pub fn custom_banner(
        mut self,
        media: Option<&str>,
        headline: Option<&str>,
        button: Option<ButtonSpec>,
    ) -> Self {
        self.record.banner = BannerSpec::Custom {
            media: media.map(String::from),
            headline: headline.map(String::from),
            button,
        };
        self
    }

    pub fn reuse_banner(mut self, target: &str, button: Option<ButtonSpec>) -> Self {
        self.record.banner = BannerSpec::Reuse {
            target: Some(MarketId::new(target)),
            button,
        };
        self
    }

    pub fn custom_steps(mut self, steps: Vec<StepSpec>) -> Self {
        self.record.how_it_works = HowItWorksSpec::Custom { steps };
        self
    }

    pub fn reuse_steps(mut self, target: &str, extensions: &[(i64, &str)]) -> Self {
        self.record.how_it_works = HowItWorksSpec::Reuse {
            target: Some(MarketId::new(target)),
            extensions: extensions
                .iter()
                .map(|(step_index, video)| StepExtension {
                    step_index: *step_index,
                    video: video.to_string(),
                })
                .collect(),
        };
        self
    }

    pub fn build(self) -> MarketRecord {
        self.record
    }
}
